//! # Share Ledger
//!
//! Per-project fungible balances. Shares are issued 1:1 against invested
//! currency and redeemed 1:1 on refund, so `ProjectState::total_issued`
//! always equals the net capital raised.
//!
//! `issue` and `redeem` mutate the caller's `ProjectState` in place; the
//! caller persists it together with its own changes. Holder-to-holder
//! movements (`transfer`, `transfer_from`) never touch the supply and
//! never move the investment record.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::storage;
use crate::types::ProjectState;
use crate::Error;

pub fn balance(env: &Env, project_id: u64, holder: &Address) -> i128 {
    storage::load_share_balance(env, project_id, holder)
}

pub fn allowance(env: &Env, project_id: u64, owner: &Address, spender: &Address) -> i128 {
    storage::load_share_allowance(env, project_id, owner, spender)
}

pub fn total_issued(env: &Env, project_id: u64) -> Result<i128, Error> {
    Ok(storage::load_project_state(env, project_id)?.total_issued)
}

/// Mint `amount` shares to `holder`.
pub(crate) fn issue(
    env: &Env,
    project_id: u64,
    state: &mut ProjectState,
    holder: &Address,
    amount: i128,
) -> Result<(), Error> {
    let current = balance(env, project_id, holder);
    let updated = current.checked_add(amount).ok_or(Error::AmountOverflow)?;
    let supply = state
        .total_issued
        .checked_add(amount)
        .ok_or(Error::AmountOverflow)?;
    storage::save_share_balance(env, project_id, holder, updated);
    state.total_issued = supply;
    Ok(())
}

/// Burn `amount` shares from `holder`.
pub(crate) fn redeem(
    env: &Env,
    project_id: u64,
    state: &mut ProjectState,
    holder: &Address,
    amount: i128,
) -> Result<(), Error> {
    let current = balance(env, project_id, holder);
    if current < amount {
        return Err(Error::InsufficientShares);
    }
    storage::save_share_balance(env, project_id, holder, current - amount);
    state.total_issued -= amount;
    Ok(())
}

pub fn transfer(
    env: &Env,
    project_id: u64,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    storage::load_project_config(env, project_id)?;

    move_balance(env, project_id, from, to, amount)?;
    events::emit_shares_transferred(env, project_id, from.clone(), to.clone(), amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    project_id: u64,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    storage::load_project_config(env, project_id)?;

    storage::save_share_allowance(env, project_id, owner, spender, amount);
    events::emit_shares_approved(env, project_id, owner.clone(), spender.clone(), amount);
    Ok(())
}

/// Move `amount` from `from` to `to` on behalf of `spender`, consuming
/// allowance.
pub fn transfer_from(
    env: &Env,
    project_id: u64,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    storage::load_project_config(env, project_id)?;

    let allowed = allowance(env, project_id, from, spender);
    if allowed < amount {
        return Err(Error::InsufficientAllowance);
    }
    move_balance(env, project_id, from, to, amount)?;
    storage::save_share_allowance(env, project_id, from, spender, allowed - amount);

    events::emit_shares_transferred(env, project_id, from.clone(), to.clone(), amount);
    Ok(())
}

fn move_balance(
    env: &Env,
    project_id: u64,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let from_balance = balance(env, project_id, from);
    if from_balance < amount {
        return Err(Error::InsufficientShares);
    }
    storage::save_share_balance(env, project_id, from, from_balance - amount);

    // Re-read so that a self-transfer lands on the already-debited balance.
    let to_balance = balance(env, project_id, to);
    storage::save_share_balance(env, project_id, to, to_balance + amount);
    Ok(())
}
