//! # Apartment Crowdfund Contract
//!
//! A crowdfunding-and-asset-sale ledger. Investors fund a project toward a
//! fixed target before a deadline. On success the owner withdraws the raise,
//! the project's apartments are sold for exact prices, and the proceeds are
//! distributed back to investors. On failure investors reclaim their
//! contributions.
//!
//! | Phase        | Entry Point(s)                                           |
//! |--------------|----------------------------------------------------------|
//! | Registration | [`ApartmentCrowdfund::create_project`]                   |
//! | Raising      | [`ApartmentCrowdfund::invest`]                           |
//! | Failed raise | [`ApartmentCrowdfund::retrieve_investment`]              |
//! | Funded       | [`ApartmentCrowdfund::withdraw_funds`]                   |
//! | Selling      | [`ApartmentCrowdfund::buy_unit`]                         |
//! | Distributing | [`ApartmentCrowdfund::distribute_rewards`]               |
//! | Ownership    | `transfer_ownership`, `renounce_ownership`               |
//! | Shares       | `share_transfer`, `share_approve`, `share_transfer_from` |
//! | Queries      | `get_project`, `get_unit`, `phase`, `investment_of`, ... |
//!
//! ## Architecture
//!
//! This file contains only the public entry points and caller
//! authentication. Business rules live in `funding`, `sales` and `rewards`,
//! composed over the `inventory`, `shares` and `ownable` components.
//! Storage access is delegated to `storage`.
//!
//! Every fallible entry point returns `Result<_, Error>`. An `Err` rolls back
//! all writes and events of the invocation.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

mod events;
mod funding;
mod inventory;
mod ownable;
mod payments;
mod phase;
mod registry;
mod rewards;
mod sales;
mod shares;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_shares;

pub use events::{
    FundsWithdrawn, InvestmentMade, InvestmentRetrieved, OwnershipTransferred, ProjectCreated,
    RewardDistributed, SharesApproved, SharesTransferred, UnitSold,
};
pub use types::{Project, ProjectParams, ProjectPhase, Unit};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Construction
    NotEnoughUnits         = 1,
    TargetAmountZero       = 2,
    UnitCountPriceMismatch = 3,
    DeadlineAlreadyPassed  = 4,
    InvalidPrice           = 5,
    // Time gates
    DeadlineNotYetPassed   = 6,
    DeadlinePassed         = 7,
    // Raise accounting
    TargetExceeded         = 8,
    TargetAlreadyMet       = 9,
    TargetNotMet           = 10,
    NoInvestmentMade       = 11,
    AmountExceeds          = 12,
    InvalidAmount          = 13,
    // Value transfer
    TransferFailed         = 14,
    NullAddress            = 15,
    // Withdrawal and sales
    AlreadyWithdrawn       = 16,
    FundsNotWithdrawn      = 17,
    AlreadySold            = 18,
    WrongPayment           = 19,
    UnitNotFound           = 20,
    // Distribution
    UnitsStillAvailable    = 21,
    NothingToClaim         = 22,
    // Access and lookup
    NotOwner               = 23,
    ProjectNotFound        = 24,
    // Share ledger
    InsufficientShares     = 25,
    InsufficientAllowance  = 26,
    // Arithmetic bounds
    AmountOverflow         = 27,
}

#[contract]
pub struct ApartmentCrowdfund;

#[contractimpl]
impl ApartmentCrowdfund {
    // ─────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────

    /// Create a project owned by `owner` and return its id.
    ///
    /// All parameters are validated before anything is written; see
    /// [`ProjectParams`] for the rules.
    pub fn create_project(env: Env, owner: Address, params: ProjectParams) -> Result<u64, Error> {
        owner.require_auth();
        registry::create(&env, &owner, params)
    }

    /// Number of projects ever created.
    pub fn project_count(env: Env) -> u64 {
        registry::count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Project ledger
    // ─────────────────────────────────────────────────────────

    /// Invest `amount` during the raising phase; issues as many shares.
    pub fn invest(env: Env, project_id: u64, investor: Address, amount: i128) -> Result<(), Error> {
        investor.require_auth();
        funding::invest(&env, project_id, &investor, amount)
    }

    /// Reclaim up to the full investment after a failed raise.
    pub fn retrieve_investment(
        env: Env,
        project_id: u64,
        investor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        investor.require_auth();
        funding::retrieve_investment(&env, project_id, &investor, amount)
    }

    /// Owner-only, one-time withdrawal of the whole raise to `to`.
    ///
    /// `to = None` is rejected with [`Error::NullAddress`].
    pub fn withdraw_funds(
        env: Env,
        project_id: u64,
        caller: Address,
        to: Option<Address>,
    ) -> Result<i128, Error> {
        caller.require_auth();
        funding::withdraw_funds(&env, project_id, &caller, to)
    }

    /// Buy `unit_id` for exactly its price.
    pub fn buy_unit(
        env: Env,
        project_id: u64,
        buyer: Address,
        unit_id: u32,
        payment: i128,
    ) -> Result<Unit, Error> {
        buyer.require_auth();
        sales::buy_unit(&env, project_id, &buyer, unit_id, payment)
    }

    /// Claim the investor's cut of the proceeds once every unit is sold.
    pub fn distribute_rewards(env: Env, project_id: u64, investor: Address) -> Result<i128, Error> {
        investor.require_auth();
        rewards::distribute_rewards(&env, project_id, &investor)
    }

    // ─────────────────────────────────────────────────────────
    // Ownership
    // ─────────────────────────────────────────────────────────

    pub fn transfer_ownership(
        env: Env,
        project_id: u64,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        ownable::transfer_ownership(&env, project_id, &caller, &new_owner)
    }

    pub fn renounce_ownership(env: Env, project_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        ownable::renounce_ownership(&env, project_id, &caller)
    }

    pub fn owner(env: Env, project_id: u64) -> Result<Option<Address>, Error> {
        storage::load_project_config(&env, project_id)?;
        Ok(ownable::owner(&env, project_id))
    }

    // ─────────────────────────────────────────────────────────
    // Share ledger
    // ─────────────────────────────────────────────────────────

    pub fn share_transfer(
        env: Env,
        project_id: u64,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        from.require_auth();
        shares::transfer(&env, project_id, &from, &to, amount)
    }

    pub fn share_approve(
        env: Env,
        project_id: u64,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), Error> {
        owner.require_auth();
        shares::approve(&env, project_id, &owner, &spender, amount)
    }

    pub fn share_transfer_from(
        env: Env,
        project_id: u64,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        shares::transfer_from(&env, project_id, &spender, &from, &to, amount)
    }

    pub fn share_balance(env: Env, project_id: u64, holder: Address) -> i128 {
        shares::balance(&env, project_id, &holder)
    }

    pub fn share_allowance(env: Env, project_id: u64, owner: Address, spender: Address) -> i128 {
        shares::allowance(&env, project_id, &owner, &spender)
    }

    pub fn share_total_supply(env: Env, project_id: u64) -> Result<i128, Error> {
        shares::total_issued(&env, project_id)
    }

    pub fn share_name(env: Env, project_id: u64) -> Result<String, Error> {
        Ok(storage::load_project_config(&env, project_id)?.share_name)
    }

    pub fn share_symbol(env: Env, project_id: u64) -> Result<String, Error> {
        Ok(storage::load_project_config(&env, project_id)?.share_symbol)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_project(env: Env, project_id: u64) -> Result<Project, Error> {
        storage::load_project(&env, project_id)
    }

    /// Snapshot of one unit; out-of-range ids fail with [`Error::UnitNotFound`].
    pub fn get_unit(env: Env, project_id: u64, unit_id: u32) -> Result<Unit, Error> {
        storage::load_project_config(&env, project_id)?;
        inventory::get(&env, project_id, unit_id)
    }

    pub fn get_units(env: Env, project_id: u64) -> Result<Vec<Unit>, Error> {
        let config = storage::load_project_config(&env, project_id)?;
        inventory::list(&env, project_id, config.unit_count)
    }

    /// Phase derived from the stored fields and the current ledger time.
    pub fn phase(env: Env, project_id: u64) -> Result<ProjectPhase, Error> {
        let config = storage::load_project_config(&env, project_id)?;
        let state = storage::load_project_state(&env, project_id)?;
        Ok(phase::derive(env.ledger().timestamp(), &config, &state))
    }

    pub fn total_invested(env: Env, project_id: u64) -> Result<i128, Error> {
        let state = storage::load_project_state(&env, project_id)?;
        Ok(phase::total_invested(&state))
    }

    pub fn is_target_met(env: Env, project_id: u64) -> Result<bool, Error> {
        let config = storage::load_project_config(&env, project_id)?;
        let state = storage::load_project_state(&env, project_id)?;
        Ok(phase::is_target_met(&config, &state))
    }

    pub fn investment_of(env: Env, project_id: u64, investor: Address) -> i128 {
        storage::load_investment(&env, project_id, &investor)
    }

    pub fn proceeds(env: Env, project_id: u64) -> Result<i128, Error> {
        Ok(storage::load_project_state(&env, project_id)?.proceeds_from_sales)
    }

    pub fn units_remaining(env: Env, project_id: u64) -> Result<u32, Error> {
        Ok(storage::load_project_state(&env, project_id)?.units_remaining)
    }

    /// Amount `distribute_rewards` would currently pay `investor`.
    pub fn reward_preview(env: Env, project_id: u64, investor: Address) -> Result<i128, Error> {
        rewards::reward_preview(&env, project_id, &investor)
    }
}
