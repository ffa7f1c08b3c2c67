//! # Inventory
//!
//! Fixed-size list of apartments, seeded once by `create_project`. Each unit
//! is stored under its own `Unit(project, unit)` key and can be sold at most
//! once. Ids run from `0` to `unit_count - 1`; anything else is
//! [`Error::UnitNotFound`].

use soroban_sdk::{Address, Env, Vec};

use crate::storage;
use crate::types::{ProjectState, Unit};
use crate::Error;

/// Write the initial, unsold units. Prices are validated by the registry.
pub(crate) fn seed(env: &Env, project_id: u64, prices: &Vec<i128>) {
    for (unit_id, price) in (0..prices.len()).zip(prices.iter()) {
        let unit = Unit {
            price,
            sold: false,
            buyer: None,
        };
        storage::save_unit(env, project_id, unit_id, &unit);
    }
}

pub fn get(env: &Env, project_id: u64, unit_id: u32) -> Result<Unit, Error> {
    storage::load_unit(env, project_id, unit_id).ok_or(Error::UnitNotFound)
}

/// All units in id order.
pub fn list(env: &Env, project_id: u64, unit_count: u32) -> Result<Vec<Unit>, Error> {
    let mut units = Vec::new(env);
    for unit_id in 0..unit_count {
        units.push_back(get(env, project_id, unit_id)?);
    }
    Ok(units)
}

/// Sell `unit_id` to `buyer` for exactly its price.
///
/// Updates `proceeds_from_sales` and `units_remaining` on `state` (the
/// caller persists it) and returns `(previous, updated)` snapshots.
pub(crate) fn mark_sold(
    env: &Env,
    project_id: u64,
    state: &mut ProjectState,
    unit_id: u32,
    buyer: &Address,
    payment: i128,
) -> Result<(Unit, Unit), Error> {
    let previous = get(env, project_id, unit_id)?;
    if previous.sold {
        return Err(Error::AlreadySold);
    }
    if payment != previous.price {
        return Err(Error::WrongPayment);
    }
    let proceeds = state
        .proceeds_from_sales
        .checked_add(previous.price)
        .ok_or(Error::AmountOverflow)?;

    let updated = Unit {
        price: previous.price,
        sold: true,
        buyer: Some(buyer.clone()),
    };
    storage::save_unit(env, project_id, unit_id, &updated);

    state.proceeds_from_sales = proceeds;
    state.units_remaining -= 1;
    Ok((previous, updated))
}
