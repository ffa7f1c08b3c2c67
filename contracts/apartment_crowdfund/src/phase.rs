//! Phase derivation.
//!
//! The phase is a pure function of stored fields and the ledger clock. The
//! deadline instant already belongs to the post-raise phases (`>=`).

use crate::types::{ProjectConfig, ProjectPhase, ProjectState};

/// Net capital raised; equal to the share supply.
pub fn total_invested(state: &ProjectState) -> i128 {
    state.total_issued
}

pub fn is_target_met(config: &ProjectConfig, state: &ProjectState) -> bool {
    total_invested(state) >= config.target_amount
}

pub fn deadline_passed(now: u64, config: &ProjectConfig) -> bool {
    now >= config.deadline
}

pub fn derive(now: u64, config: &ProjectConfig, state: &ProjectState) -> ProjectPhase {
    if state.withdrawn {
        if state.units_remaining > 0 {
            ProjectPhase::Selling
        } else {
            ProjectPhase::Distributing
        }
    } else if !deadline_passed(now, config) {
        ProjectPhase::Raising
    } else if is_target_met(config, state) {
        ProjectPhase::Funded
    } else {
        ProjectPhase::Failed
    }
}
