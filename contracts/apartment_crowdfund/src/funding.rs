//! # Funding
//!
//! The raising side of the project ledger: investing before the deadline,
//! refunds after a failed raise, and the owner's one-time withdrawal after
//! a successful one.
//!
//! Outbound transfers happen last. The decremented investment, the burned
//! shares and the `withdrawn` flag are persisted before any currency leaves
//! the contract.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::ownable;
use crate::payments;
use crate::phase;
use crate::shares;
use crate::storage;
use crate::Error;

/// Record an investment of `amount` and issue the matching shares.
pub fn invest(env: &Env, project_id: u64, investor: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let config = storage::load_project_config(env, project_id)?;
    let mut state = storage::load_project_state(env, project_id)?;

    if phase::deadline_passed(env.ledger().timestamp(), &config) {
        return Err(Error::DeadlinePassed);
    }
    // Raised capital never exceeds the target, so the headroom can't overflow.
    let headroom = config.target_amount - phase::total_invested(&state);
    if amount > headroom {
        return Err(Error::TargetExceeded);
    }

    payments::receive(env, &config.token, investor, amount)?;

    let invested = storage::load_investment(env, project_id, investor);
    storage::save_investment(env, project_id, investor, invested + amount);
    shares::issue(env, project_id, &mut state, investor, amount)?;
    storage::save_project_state(env, project_id, &state);

    events::emit_investment_made(env, project_id, investor.clone(), amount);
    Ok(())
}

/// Refund part or all of an investment after a failed raise.
pub fn retrieve_investment(
    env: &Env,
    project_id: u64,
    investor: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let config = storage::load_project_config(env, project_id)?;
    let mut state = storage::load_project_state(env, project_id)?;

    if !phase::deadline_passed(env.ledger().timestamp(), &config) {
        return Err(Error::DeadlineNotYetPassed);
    }
    let invested = storage::load_investment(env, project_id, investor);
    if invested <= 0 {
        return Err(Error::NoInvestmentMade);
    }
    if amount > invested {
        return Err(Error::AmountExceeds);
    }
    if phase::is_target_met(&config, &state) {
        return Err(Error::TargetAlreadyMet);
    }

    storage::save_investment(env, project_id, investor, invested - amount);
    shares::redeem(env, project_id, &mut state, investor, amount)?;
    storage::save_project_state(env, project_id, &state);

    payments::send(env, &config.token, investor, amount)?;

    events::emit_investment_retrieved(env, project_id, investor.clone(), amount);
    Ok(())
}

/// Move the whole raise to `to`. Owner only, once, after a successful raise.
///
/// Returns the amount withdrawn.
pub fn withdraw_funds(
    env: &Env,
    project_id: u64,
    caller: &Address,
    to: Option<Address>,
) -> Result<i128, Error> {
    let config = storage::load_project_config(env, project_id)?;
    let mut state = storage::load_project_state(env, project_id)?;
    ownable::require_owner(env, project_id, caller)?;

    if !phase::deadline_passed(env.ledger().timestamp(), &config) {
        return Err(Error::DeadlineNotYetPassed);
    }
    if state.withdrawn {
        return Err(Error::AlreadyWithdrawn);
    }
    if !phase::is_target_met(&config, &state) {
        return Err(Error::TargetNotMet);
    }
    let to = to.ok_or(Error::NullAddress)?;

    state.withdrawn = true;
    storage::save_project_state(env, project_id, &state);

    let amount = phase::total_invested(&state);
    payments::send(env, &config.token, &to, amount)?;

    events::emit_funds_withdrawn(env, project_id, to, amount);
    Ok(amount)
}
