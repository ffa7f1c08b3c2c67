//! # Access Guard
//!
//! One privileged owner per project. The owner is set by `create_project`,
//! may hand the role to another address, or renounce it. A renounced
//! project has no owner, so `withdraw_funds` can never succeed again.
//!
//! Callers are authenticated (`require_auth`) by the entry points in
//! `lib.rs`; this module only decides whether the authenticated address
//! holds the role.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::storage;
use crate::Error;

/// Current owner of `project_id`, or `None` once renounced.
pub fn owner(env: &Env, project_id: u64) -> Option<Address> {
    storage::load_owner(env, project_id)
}

/// Fail with [`Error::NotOwner`] unless `caller` is the project owner.
pub fn require_owner(env: &Env, project_id: u64, caller: &Address) -> Result<(), Error> {
    match owner(env, project_id) {
        Some(current) if current == *caller => Ok(()),
        _ => Err(Error::NotOwner),
    }
}

/// Install the first owner. Only called while creating a project.
pub(crate) fn init_owner(env: &Env, project_id: u64, owner: &Address) {
    storage::save_owner(env, project_id, &Some(owner.clone()));
}

pub fn transfer_ownership(
    env: &Env,
    project_id: u64,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), Error> {
    storage::load_project_config(env, project_id)?;
    require_owner(env, project_id, caller)?;

    storage::save_owner(env, project_id, &Some(new_owner.clone()));
    events::emit_ownership_transferred(
        env,
        project_id,
        Some(caller.clone()),
        Some(new_owner.clone()),
    );
    Ok(())
}

pub fn renounce_ownership(env: &Env, project_id: u64, caller: &Address) -> Result<(), Error> {
    storage::load_project_config(env, project_id)?;
    require_owner(env, project_id, caller)?;

    storage::save_owner(env, project_id, &None);
    events::emit_ownership_transferred(env, project_id, Some(caller.clone()), None);
    Ok(())
}
