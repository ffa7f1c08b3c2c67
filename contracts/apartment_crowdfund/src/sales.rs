//! Unit sales. Open only once the owner has withdrawn the raised capital.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::inventory;
use crate::payments;
use crate::storage;
use crate::types::Unit;
use crate::Error;

/// Sell `unit_id` to `buyer`, who pays exactly the unit price.
///
/// Returns the updated unit snapshot.
pub fn buy_unit(
    env: &Env,
    project_id: u64,
    buyer: &Address,
    unit_id: u32,
    payment: i128,
) -> Result<Unit, Error> {
    let config = storage::load_project_config(env, project_id)?;
    let mut state = storage::load_project_state(env, project_id)?;

    if !state.withdrawn {
        return Err(Error::FundsNotWithdrawn);
    }

    let (previous, sold) =
        inventory::mark_sold(env, project_id, &mut state, unit_id, buyer, payment)?;
    storage::save_project_state(env, project_id, &state);

    payments::receive(env, &config.token, buyer, payment)?;

    events::emit_unit_sold(env, project_id, unit_id, buyer.clone(), previous.price);
    Ok(sold)
}
