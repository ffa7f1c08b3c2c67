extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{SharesApproved, SharesTransferred};
use crate::invariants;
use crate::test::{Setup, DEADLINE, PRICES, TARGET};
use crate::Error;

#[test]
fn test_shares_issued_one_to_one() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let alice = s.funded(10);
    let bob = s.funded(10);

    s.client.invest(&id, &alice, &3);
    s.client.invest(&id, &bob, &9);
    s.client.invest(&id, &alice, &4);

    assert_eq!(s.client.share_balance(&id, &alice), 7);
    assert_eq!(s.client.share_balance(&id, &bob), 9);
    assert_eq!(s.client.share_total_supply(&id), 16);
    assert_eq!(s.client.total_invested(&id), 16);
    invariants::assert_supply_matches_investments(&s.client, id, &[alice, bob]);
}

#[test]
fn test_share_transfer_moves_balance_not_investment() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let alice = s.funded(10);
    let carol = Address::generate(&s.env);
    s.client.invest(&id, &alice, &10);

    s.client.share_transfer(&id, &alice, &carol, &4);
    assert_eq!(s.client.share_balance(&id, &alice), 6);
    assert_eq!(s.client.share_balance(&id, &carol), 4);
    assert_eq!(s.client.share_total_supply(&id), 10);
    assert_eq!(s.client.investment_of(&id, &alice), 10);
    assert_eq!(s.client.investment_of(&id, &carol), 0);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &s.env,
            symbol_short!("sh_xfer").into_val(&s.env),
            id.into_val(&s.env),
        ]
    );
    let data: SharesTransferred = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        data,
        SharesTransferred {
            project_id: id,
            from: alice.clone(),
            to: carol.clone(),
            amount: 4,
        }
    );

    assert_eq!(
        s.client.try_share_transfer(&id, &alice, &carol, &7),
        Err(Ok(Error::InsufficientShares))
    );
    assert_eq!(
        s.client.try_share_transfer(&id, &alice, &carol, &-1),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_self_transfer_keeps_balance() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let alice = s.funded(5);
    s.client.invest(&id, &alice, &5);

    s.client.share_transfer(&id, &alice, &alice, &5);
    assert_eq!(s.client.share_balance(&id, &alice), 5);
}

#[test]
fn test_approve_and_transfer_from() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let alice = s.funded(10);
    let spender = Address::generate(&s.env);
    let carol = Address::generate(&s.env);
    s.client.invest(&id, &alice, &10);

    s.client.share_approve(&id, &alice, &spender, &6);
    assert_eq!(s.client.share_allowance(&id, &alice, &spender), 6);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");
    let data: SharesApproved = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        data,
        SharesApproved {
            project_id: id,
            owner: alice.clone(),
            spender: spender.clone(),
            amount: 6,
        }
    );

    s.client.share_transfer_from(&id, &spender, &alice, &carol, &4);
    assert_eq!(s.client.share_balance(&id, &alice), 6);
    assert_eq!(s.client.share_balance(&id, &carol), 4);
    assert_eq!(s.client.share_allowance(&id, &alice, &spender), 2);

    assert_eq!(
        s.client.try_share_transfer_from(&id, &spender, &alice, &carol, &3),
        Err(Ok(Error::InsufficientAllowance))
    );

    // Allowance can exceed balance; the balance check still applies.
    s.client.share_approve(&id, &alice, &spender, &100);
    assert_eq!(
        s.client.try_share_transfer_from(&id, &spender, &alice, &carol, &7),
        Err(Ok(Error::InsufficientShares))
    );
    assert_eq!(s.client.share_allowance(&id, &alice, &spender), 100);
}

#[test]
fn test_refund_needs_shares_to_burn() {
    let s = Setup::new();
    let id = s.create(&PRICES, TARGET);
    let alice = s.funded(8);
    let carol = Address::generate(&s.env);
    s.client.invest(&id, &alice, &8);
    s.client.share_transfer(&id, &alice, &carol, &5);

    s.warp(DEADLINE);
    assert_eq!(
        s.client.try_retrieve_investment(&id, &alice, &8),
        Err(Ok(Error::InsufficientShares))
    );
    assert_eq!(s.client.investment_of(&id, &alice), 8);

    // Carol holds shares but never invested, so she has nothing to refund.
    assert_eq!(
        s.client.try_retrieve_investment(&id, &carol, &5),
        Err(Ok(Error::NoInvestmentMade))
    );

    s.client.retrieve_investment(&id, &alice, &3);
    assert_eq!(s.token.balance(&alice), 3);
    assert_eq!(s.client.share_balance(&id, &alice), 0);
    assert_eq!(s.client.investment_of(&id, &alice), 5);
}

#[test]
fn test_share_ops_on_unknown_project() {
    let s = Setup::new();
    let alice = Address::generate(&s.env);
    let bob = Address::generate(&s.env);

    assert_eq!(
        s.client.try_share_transfer(&3, &alice, &bob, &0),
        Err(Ok(Error::ProjectNotFound))
    );
    assert_eq!(
        s.client.try_share_approve(&3, &alice, &bob, &1),
        Err(Ok(Error::ProjectNotFound))
    );
    assert_eq!(
        s.client.try_share_total_supply(&3),
        Err(Ok(Error::ProjectNotFound))
    );
    assert_eq!(s.client.share_balance(&3, &alice), 0);
}
