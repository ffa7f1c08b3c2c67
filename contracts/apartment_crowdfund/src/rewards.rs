//! # Rewards
//!
//! Distribution of sale proceeds back to investors once every unit is sold.
//!
//! The payout follows the double-truncating formula below exactly:
//!
//! ```text
//! share  = investment * 100 / target      (integer percent, 0..=100)
//! reward = (share / 100) * proceeds
//! ```
//!
//! `share / 100` is 0 for any investor below 100% of the target, so only an
//! investor who funded the entire target receives anything; everyone else
//! is paid 0 and their record is still cleared.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::payments;
use crate::storage;
use crate::Error;

/// Largest accepted target. Any investment is at most the target, so
/// `investment * 100` stays in range.
pub(crate) const MAX_TARGET_AMOUNT: i128 = i128::MAX / 100;

pub fn compute_reward(
    investment: i128,
    target_amount: i128,
    proceeds: i128,
) -> Result<i128, Error> {
    let share = investment
        .checked_mul(100)
        .ok_or(Error::AmountOverflow)?
        / target_amount;
    (share / 100)
        .checked_mul(proceeds)
        .ok_or(Error::AmountOverflow)
}

/// What `distribute_rewards` would pay `investor` right now.
pub fn reward_preview(env: &Env, project_id: u64, investor: &Address) -> Result<i128, Error> {
    let config = storage::load_project_config(env, project_id)?;
    let state = storage::load_project_state(env, project_id)?;
    let invested = storage::load_investment(env, project_id, investor);
    compute_reward(invested, config.target_amount, state.proceeds_from_sales)
}

/// Pay `investor` their cut of the proceeds pool and clear their record.
///
/// Returns the amount paid, which may be 0.
pub fn distribute_rewards(env: &Env, project_id: u64, investor: &Address) -> Result<i128, Error> {
    let config = storage::load_project_config(env, project_id)?;
    let state = storage::load_project_state(env, project_id)?;

    if state.units_remaining > 0 {
        return Err(Error::UnitsStillAvailable);
    }
    let invested = storage::load_investment(env, project_id, investor);
    if invested <= 0 {
        return Err(Error::NothingToClaim);
    }
    if !state.withdrawn {
        return Err(Error::FundsNotWithdrawn);
    }

    let reward = compute_reward(invested, config.target_amount, state.proceeds_from_sales)?;
    storage::save_investment(env, project_id, investor, 0);

    if reward > 0 {
        payments::send(env, &config.token, investor, reward)?;
    }

    events::emit_reward_distributed(env, project_id, investor.clone(), reward);
    Ok(reward)
}
