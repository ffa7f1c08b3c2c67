//! # Registry
//!
//! Creates projects and hands out sequential ids. The list is append-only:
//! projects are never removed or renumbered.

use soroban_sdk::{Address, Env};

use crate::events::{self, ProjectCreated};
use crate::inventory;
use crate::ownable;
use crate::rewards::MAX_TARGET_AMOUNT;
use crate::storage;
use crate::types::{ProjectConfig, ProjectParams, ProjectState};
use crate::Error;

/// Check every construction parameter. Nothing is written here.
fn validate(env: &Env, params: &ProjectParams) -> Result<(), Error> {
    if params.deadline < env.ledger().timestamp() {
        return Err(Error::DeadlineAlreadyPassed);
    }
    if params.unit_count == 0 {
        return Err(Error::NotEnoughUnits);
    }
    if params.target_amount <= 0 {
        return Err(Error::TargetAmountZero);
    }
    if params.target_amount > MAX_TARGET_AMOUNT {
        return Err(Error::AmountOverflow);
    }
    if params.prices.len() != params.unit_count {
        return Err(Error::UnitCountPriceMismatch);
    }
    if params.prices.iter().any(|price| price <= 0) {
        return Err(Error::InvalidPrice);
    }
    // Proceeds accumulate up to the sum of all prices.
    params
        .prices
        .iter()
        .try_fold(0i128, |sum, price| sum.checked_add(price))
        .ok_or(Error::AmountOverflow)?;
    Ok(())
}

/// Validate `params`, then persist a new project owned by `owner`.
pub fn create(env: &Env, owner: &Address, params: ProjectParams) -> Result<u64, Error> {
    validate(env, &params)?;

    let id = storage::get_and_increment_project_id(env);

    let config = ProjectConfig {
        id,
        token: params.token,
        share_name: params.share_name,
        share_symbol: params.share_symbol,
        location: params.location,
        target_amount: params.target_amount,
        deadline: params.deadline,
        unit_count: params.unit_count,
    };
    let state = ProjectState {
        withdrawn: false,
        proceeds_from_sales: 0,
        units_remaining: params.unit_count,
        total_issued: 0,
    };

    storage::save_new_project(env, &config, &state);
    ownable::init_owner(env, id, owner);
    inventory::seed(env, id, &params.prices);

    events::emit_project_created(
        env,
        ProjectCreated {
            project_id: id,
            owner: owner.clone(),
            token: config.token,
            target_amount: config.target_amount,
            deadline: config.deadline,
            unit_count: config.unit_count,
        },
    );
    Ok(id)
}

pub fn count(env: &Env) -> u64 {
    storage::project_count(env)
}
