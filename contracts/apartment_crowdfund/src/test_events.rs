extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, Symbol, TryIntoVal, Val,
};

use crate::events::{
    FundsWithdrawn, InvestmentMade, InvestmentRetrieved, OwnershipTransferred, ProjectCreated,
    RewardDistributed, UnitSold,
};
use crate::test::{Setup, DEADLINE, PRICES, TARGET};

/// Assert the last published event came from the contract with topics
/// `(topic, project_id)` and return its data payload.
fn last_event_data(s: &Setup, topic: Symbol, project_id: u64) -> Val {
    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![&s.env, topic.into_val(&s.env), project_id.into_val(&s.env)];
    assert_eq!(last_event.1, expected_topics);
    last_event.2
}

#[test]
fn test_project_created_event() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);

    let data: ProjectCreated = last_event_data(&s, symbol_short!("created"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        ProjectCreated {
            project_id: id,
            owner: s.owner.clone(),
            token: s.token.address.clone(),
            target_amount: TARGET,
            deadline: DEADLINE,
            unit_count: 3,
        }
    );
}

#[test]
fn test_investment_made_event() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let investor = s.funded(12);
    s.client.invest(&id, &investor, &12);

    let data: InvestmentMade = last_event_data(&s, symbol_short!("invested"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        InvestmentMade {
            project_id: id,
            investor,
            amount: 12,
        }
    );
}

#[test]
fn test_investment_retrieved_event() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let investor = s.funded(6);
    s.client.invest(&id, &investor, &6);
    s.warp(DEADLINE);
    s.client.retrieve_investment(&id, &investor, &4);

    let data: InvestmentRetrieved = last_event_data(&s, symbol_short!("refunded"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        InvestmentRetrieved {
            project_id: id,
            investor,
            amount: 4,
        }
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let investor = s.funded(TARGET);
    s.client.invest(&id, &investor, &TARGET);
    s.warp(DEADLINE);
    let treasury = Address::generate(&s.env);
    s.client
        .withdraw_funds(&id, &s.owner, &Some(treasury.clone()));

    let data: FundsWithdrawn = last_event_data(&s, symbol_short!("withdrawn"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        FundsWithdrawn {
            project_id: id,
            to: treasury,
            amount: TARGET,
        }
    );
}

#[test]
fn test_unit_sold_event() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    s.fund_and_withdraw(id);
    let buyer = s.funded(15);
    s.client.buy_unit(&id, &buyer, &1, &15);

    let data: UnitSold = last_event_data(&s, symbol_short!("sold"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        UnitSold {
            project_id: id,
            unit_id: 1,
            buyer,
            price: 15,
        }
    );
}

#[test]
fn test_reward_distributed_event() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let investor = s.fund_and_withdraw(id);
    s.sell_out(id);
    s.client.distribute_rewards(&id, &investor);

    let data: RewardDistributed = last_event_data(&s, symbol_short!("rewarded"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        RewardDistributed {
            project_id: id,
            investor,
            amount: 41,
        }
    );
}

#[test]
fn test_ownership_events() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let successor = Address::generate(&s.env);

    s.client.transfer_ownership(&id, &s.owner, &successor);
    let data: OwnershipTransferred = last_event_data(&s, symbol_short!("owner"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        OwnershipTransferred {
            project_id: id,
            previous: Some(s.owner.clone()),
            new_owner: Some(successor.clone()),
        }
    );

    s.client.renounce_ownership(&id, &successor);
    let data: OwnershipTransferred = last_event_data(&s, symbol_short!("owner"), id)
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        data,
        OwnershipTransferred {
            project_id: id,
            previous: Some(successor),
            new_owner: None,
        }
    );
}
