//! # Types
//!
//! Shared data structures used across all modules of the apartment
//! crowdfund contract.
//!
//! ## Config / State split
//!
//! A project is stored as two ledger entries plus per-key side tables:
//!
//! - [`ProjectConfig`]: written once by `create_project`; never mutated.
//! - [`ProjectState`]: rewritten on every investment, refund, withdrawal,
//!   sale and share issuance.
//!
//! Units, investments, share balances and the owner live under their own
//! keys (see `storage.rs`) so a single sale or investment only touches the
//! entries it changes.
//!
//! ## Phase is derived, never stored
//!
//! [`ProjectPhase`] is computed from `(now, deadline, total_invested,
//! target_amount, withdrawn, units_remaining)` on every read:
//!
//! ```text
//! Raising ──► Funded ──► Selling ──► Distributing
//!     └─────► Failed
//! ```

use soroban_sdk::{contracttype, Address, String, Vec};

/// Lifecycle phase of a project, derived by `phase::derive`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectPhase {
    /// `now < deadline`; investments accepted.
    Raising,
    /// Deadline passed with the target met; awaiting owner withdrawal.
    Funded,
    /// Deadline passed with the target unmet; refunds open.
    Failed,
    /// Capital withdrawn; units still on sale.
    Selling,
    /// Capital withdrawn and every unit sold; rewards claimable.
    Distributing,
}

/// Construction parameters for `create_project`, validated all-or-nothing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectParams {
    /// Currency token for investments, sales and payouts.
    pub token: Address,
    /// Name of the project's share ledger.
    pub share_name: String,
    /// Ticker of the project's share ledger.
    pub share_symbol: String,
    pub location: String,
    /// Must not be earlier than the creation timestamp.
    pub deadline: u64,
    /// Number of apartments; must be positive.
    pub unit_count: u32,
    /// Must be positive.
    pub target_amount: i128,
    /// One positive price per unit, `unit_count` entries.
    pub prices: Vec<i128>,
}

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub token: Address,
    pub share_name: String,
    pub share_symbol: String,
    pub location: String,
    pub target_amount: i128,
    pub deadline: u64,
    pub unit_count: u32,
}

/// Mutable project state.
///
/// `total_issued` is the share supply and, by the 1:1 peg between invested
/// currency and issued shares, the net capital raised.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub withdrawn: bool,
    pub proceeds_from_sales: i128,
    pub units_remaining: u32,
    pub total_issued: i128,
}

/// A sellable apartment slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    /// Sale price in the project's currency; always positive.
    pub price: i128,
    /// Set exactly once, by a successful `buy_unit`.
    pub sold: bool,
    /// Buyer of record; `None` until sold.
    pub buyer: Option<Address>,
}

/// Full view of a project, reconstructed from config and state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Registry identifier (auto-incremented from 0).
    pub id: u64,
    /// Currency token used for investments, sales and payouts.
    pub token: Address,
    /// Free-form description of where the apartments are.
    pub location: String,
    /// Amount that must be raised by `deadline`.
    pub target_amount: i128,
    /// Ledger timestamp at which raising ends.
    pub deadline: u64,
    /// Number of units in the inventory.
    pub unit_count: u32,
    /// Net capital raised (share supply).
    pub total_invested: i128,
    /// Whether the owner has taken the raised capital.
    pub withdrawn: bool,
    /// Currency collected from unit sales.
    pub proceeds_from_sales: i128,
    /// Units not yet sold.
    pub units_remaining: u32,
    /// Current owner; `None` once renounced.
    pub owner: Option<Address>,
}
