//! # Events
//!
//! Every state change publishes exactly one event with topics
//! `(symbol, project_id)` and one of the structs below as data. Events are
//! only published after all checks and transfers succeed, so a failed call
//! leaves no trace.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub owner: Address,
    pub token: Address,
    pub target_amount: i128,
    pub deadline: u64,
    pub unit_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentMade {
    pub project_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentRetrieved {
    pub project_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub project_id: u64,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitSold {
    pub project_id: u64,
    pub unit_id: u32,
    pub buyer: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardDistributed {
    pub project_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub project_id: u64,
    pub previous: Option<Address>,
    pub new_owner: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesTransferred {
    pub project_id: u64,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesApproved {
    pub project_id: u64,
    pub owner: Address,
    pub spender: Address,
    pub amount: i128,
}

pub fn emit_project_created(env: &Env, data: ProjectCreated) {
    env.events()
        .publish((symbol_short!("created"), data.project_id), data);
}

pub fn emit_investment_made(env: &Env, project_id: u64, investor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("invested"), project_id),
        InvestmentMade {
            project_id,
            investor,
            amount,
        },
    );
}

pub fn emit_investment_retrieved(env: &Env, project_id: u64, investor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("refunded"), project_id),
        InvestmentRetrieved {
            project_id,
            investor,
            amount,
        },
    );
}

pub fn emit_funds_withdrawn(env: &Env, project_id: u64, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), project_id),
        FundsWithdrawn {
            project_id,
            to,
            amount,
        },
    );
}

pub fn emit_unit_sold(env: &Env, project_id: u64, unit_id: u32, buyer: Address, price: i128) {
    env.events().publish(
        (symbol_short!("sold"), project_id),
        UnitSold {
            project_id,
            unit_id,
            buyer,
            price,
        },
    );
}

pub fn emit_reward_distributed(env: &Env, project_id: u64, investor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("rewarded"), project_id),
        RewardDistributed {
            project_id,
            investor,
            amount,
        },
    );
}

pub fn emit_ownership_transferred(
    env: &Env,
    project_id: u64,
    previous: Option<Address>,
    new_owner: Option<Address>,
) {
    env.events().publish(
        (symbol_short!("owner"), project_id),
        OwnershipTransferred {
            project_id,
            previous,
            new_owner,
        },
    );
}

pub fn emit_shares_transferred(env: &Env, project_id: u64, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("sh_xfer"), project_id),
        SharesTransferred {
            project_id,
            from,
            to,
            amount,
        },
    );
}

pub fn emit_shares_approved(
    env: &Env,
    project_id: u64,
    owner: Address,
    spender: Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("sh_appr"), project_id),
        SharesApproved {
            project_id,
            owner,
            spender,
            amount,
        },
    );
}
