//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type  | Description                       |
//! |----------------|-------|-----------------------------------|
//! | `ProjectCount` | `u64` | Auto-increment project ID counter |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                            | Type              | Description                    |
//! |--------------------------------|-------------------|--------------------------------|
//! | `ProjConfig(id)`               | `ProjectConfig`   | Immutable project parameters   |
//! | `ProjState(id)`                | `ProjectState`    | Mutable project counters       |
//! | `Owner(id)`                    | `Option<Address>` | Privileged owner               |
//! | `Unit(id, unit)`               | `Unit`            | One inventory slot             |
//! | `Investment(id, investor)`     | `i128`            | Net amount invested            |
//! | `ShareBalance(id, holder)`     | `i128`            | Share ledger balance           |
//! | `ShareAllowance(id, from, to)` | `i128`            | Delegated-transfer allowance   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Absent `Investment`, `ShareBalance` and `ShareAllowance` entries read as
//! zero, and writing zero removes the entry.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Project, ProjectConfig, ProjectState, Unit};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for project IDs (Instance).
    ProjectCount,
    /// Immutable project configuration keyed by ID (Persistent).
    ProjConfig(u64),
    /// Mutable project state keyed by ID (Persistent).
    ProjState(u64),
    /// Project owner (Persistent).
    Owner(u64),
    /// Inventory slot `(project, unit)` (Persistent).
    Unit(u64, u32),
    /// Net investment `(project, investor)` (Persistent).
    Investment(u64, Address),
    /// Share balance `(project, holder)` (Persistent).
    ShareBalance(u64, Address),
    /// Share allowance `(project, owner, spender)` (Persistent).
    ShareAllowance(u64, Address, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Atomically reads, increments, and stores the project counter.
/// Returns the ID to use for the *current* project (pre-increment value).
pub fn get_and_increment_project_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::ProjectCount, &(current + 1));
    current
}

/// Number of projects ever created.
pub fn project_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn write<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

/// Write an amount, removing the entry entirely when it drops to zero.
fn write_amount(env: &Env, key: &DataKey, amount: i128) {
    if amount == 0 {
        env.storage().persistent().remove(key);
    } else {
        write(env, key, &amount);
    }
}

/// Save the immutable config and initial state for a new project.
pub fn save_new_project(env: &Env, config: &ProjectConfig, state: &ProjectState) {
    write(env, &DataKey::ProjConfig(config.id), config);
    write(env, &DataKey::ProjState(config.id), state);
}

/// Load the immutable project configuration.
pub fn load_project_config(env: &Env, id: u64) -> Result<ProjectConfig, Error> {
    read(env, &DataKey::ProjConfig(id)).ok_or(Error::ProjectNotFound)
}

/// Load the mutable project state.
pub fn load_project_state(env: &Env, id: u64) -> Result<ProjectState, Error> {
    read(env, &DataKey::ProjState(id)).ok_or(Error::ProjectNotFound)
}

pub fn save_project_state(env: &Env, id: u64, state: &ProjectState) {
    write(env, &DataKey::ProjState(id), state);
}

/// Load the full `Project` view by combining config, state and owner.
pub fn load_project(env: &Env, id: u64) -> Result<Project, Error> {
    let config = load_project_config(env, id)?;
    let state = load_project_state(env, id)?;
    Ok(Project {
        id: config.id,
        token: config.token,
        location: config.location,
        target_amount: config.target_amount,
        deadline: config.deadline,
        unit_count: config.unit_count,
        total_invested: state.total_issued,
        withdrawn: state.withdrawn,
        proceeds_from_sales: state.proceeds_from_sales,
        units_remaining: state.units_remaining,
        owner: load_owner(env, id),
    })
}

// ── Owner ────────────────────────────────────────────────────────────

pub fn load_owner(env: &Env, id: u64) -> Option<Address> {
    read::<Option<Address>>(env, &DataKey::Owner(id)).flatten()
}

pub fn save_owner(env: &Env, id: u64, owner: &Option<Address>) {
    write(env, &DataKey::Owner(id), owner);
}

// ── Inventory ────────────────────────────────────────────────────────

pub fn load_unit(env: &Env, id: u64, unit_id: u32) -> Option<Unit> {
    read(env, &DataKey::Unit(id, unit_id))
}

pub fn save_unit(env: &Env, id: u64, unit_id: u32, unit: &Unit) {
    write(env, &DataKey::Unit(id, unit_id), unit);
}

// ── Investments ──────────────────────────────────────────────────────

pub fn load_investment(env: &Env, id: u64, investor: &Address) -> i128 {
    read(env, &DataKey::Investment(id, investor.clone())).unwrap_or(0)
}

pub fn save_investment(env: &Env, id: u64, investor: &Address, amount: i128) {
    write_amount(env, &DataKey::Investment(id, investor.clone()), amount);
}

// ── Shares ───────────────────────────────────────────────────────────

pub fn load_share_balance(env: &Env, id: u64, holder: &Address) -> i128 {
    read(env, &DataKey::ShareBalance(id, holder.clone())).unwrap_or(0)
}

pub fn save_share_balance(env: &Env, id: u64, holder: &Address, amount: i128) {
    write_amount(env, &DataKey::ShareBalance(id, holder.clone()), amount);
}

pub fn load_share_allowance(env: &Env, id: u64, owner: &Address, spender: &Address) -> i128 {
    read(
        env,
        &DataKey::ShareAllowance(id, owner.clone(), spender.clone()),
    )
    .unwrap_or(0)
}

pub fn save_share_allowance(env: &Env, id: u64, owner: &Address, spender: &Address, amount: i128) {
    write_amount(
        env,
        &DataKey::ShareAllowance(id, owner.clone(), spender.clone()),
        amount,
    );
}
