#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::types::{Project, ProjectPhase};
use crate::ApartmentCrowdfundClient;

/// INV-1: share supply equals the sum of net investments.
///
/// Only holds before any `distribute_rewards` zeroes an investment record,
/// and only when `investors` lists everyone who ever invested.
pub fn assert_supply_matches_investments(
    client: &ApartmentCrowdfundClient,
    project_id: u64,
    investors: &[Address],
) {
    let sum: i128 = investors
        .iter()
        .map(|investor| client.investment_of(&project_id, investor))
        .sum();
    let supply = client.share_total_supply(&project_id);
    assert_eq!(
        supply, sum,
        "INV-1 violated: project {} supply {} != sum of investments {}",
        project_id, supply, sum
    );
}

/// INV-2: while raising, the total invested never exceeds the target.
pub fn assert_raise_within_target(client: &ApartmentCrowdfundClient, project_id: u64) {
    if client.phase(&project_id) == ProjectPhase::Raising {
        let project = client.get_project(&project_id);
        assert!(
            project.total_invested <= project.target_amount,
            "INV-2 violated: project {} raised {} over target {}",
            project_id,
            project.total_invested,
            project.target_amount
        );
    }
}

/// INV-3: proceeds never exceed the sum of all unit prices.
pub fn assert_proceeds_within_prices(client: &ApartmentCrowdfundClient, project_id: u64) {
    let total_price: i128 = client.get_units(&project_id).iter().map(|u| u.price).sum();
    let proceeds = client.proceeds(&project_id);
    assert!(
        proceeds <= total_price,
        "INV-3 violated: project {} proceeds {} exceed total price {}",
        project_id,
        proceeds,
        total_price
    );
}

/// INV-4: `units_remaining` counts exactly the unsold units, and every sold
/// unit has a buyer.
pub fn assert_units_remaining_consistent(client: &ApartmentCrowdfundClient, project_id: u64) {
    let units = client.get_units(&project_id);
    let unsold = units.iter().filter(|u| !u.sold).count() as u32;
    assert_eq!(
        client.units_remaining(&project_id),
        unsold,
        "INV-4 violated: project {} units_remaining out of sync",
        project_id
    );
    for unit in units.iter() {
        assert_eq!(
            unit.sold,
            unit.buyer.is_some(),
            "INV-4 violated: project {} has a unit with mismatched buyer",
            project_id
        );
    }
}

/// INV-5: the withdrawn flag implies the raise is over and succeeded.
pub fn assert_withdrawn_implies_funded(project: &Project) {
    if project.withdrawn {
        assert!(
            project.total_invested >= project.target_amount,
            "INV-5 violated: project {} withdrawn below target",
            project.id
        );
    }
}

/// INV-6: fields fixed at creation never change.
pub fn assert_project_immutable_fields(original: &Project, current: &Project) {
    assert_eq!(original.id, current.id, "INV-6 violated: project id changed");
    assert_eq!(
        original.token, current.token,
        "INV-6 violated: project token changed"
    );
    assert_eq!(
        original.location, current.location,
        "INV-6 violated: project location changed"
    );
    assert_eq!(
        original.target_amount, current.target_amount,
        "INV-6 violated: project target changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-6 violated: project deadline changed"
    );
    assert_eq!(
        original.unit_count, current.unit_count,
        "INV-6 violated: project unit_count changed"
    );
}

/// INV-7: `withdrawn` and `proceeds_from_sales` never go backwards.
pub fn assert_monotonic(before: &Project, after: &Project) {
    assert!(
        !before.withdrawn || after.withdrawn,
        "INV-7 violated: project {} withdrawn flag reset",
        before.id
    );
    assert!(
        after.proceeds_from_sales >= before.proceeds_from_sales,
        "INV-7 violated: project {} proceeds decreased",
        before.id
    );
}

/// Run every invariant that can be checked from a single snapshot.
pub fn assert_all_project_invariants(
    client: &ApartmentCrowdfundClient,
    project_id: u64,
    investors: &[Address],
) {
    assert_supply_matches_investments(client, project_id, investors);
    assert_raise_within_target(client, project_id);
    assert_proceeds_within_prices(client, project_id);
    assert_units_remaining_consistent(client, project_id);
    assert_withdrawn_implies_funded(&client.get_project(&project_id));
}
