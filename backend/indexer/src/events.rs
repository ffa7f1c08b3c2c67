//! Canonical event types emitted by the apartment crowdfund contract.
//!
//! These mirror the contract events defined in
//! `contracts/apartment_crowdfund/src/events.rs`. Every contract event is
//! published with topics `(symbol, project_id)`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the crowdfund contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A project was registered (`created` topic).
    ProjectCreated,
    /// An investor put money into a raising project (`invested` topic).
    InvestmentMade,
    /// An investor reclaimed funds after a failed raise (`refunded` topic).
    InvestmentRetrieved,
    /// The owner withdrew the raised capital (`withdrawn` topic).
    FundsWithdrawn,
    /// An apartment was bought (`sold` topic).
    UnitSold,
    /// An investor claimed their cut of the proceeds (`rewarded` topic).
    RewardDistributed,
    /// Project ownership changed or was renounced (`owner` topic).
    OwnershipTransferred,
    /// Shares moved between holders (`sh_xfer` topic).
    SharesTransferred,
    /// A share allowance was set (`sh_appr` topic).
    SharesApproved,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::ProjectCreated,
            "invested" => Self::InvestmentMade,
            "refunded" => Self::InvestmentRetrieved,
            "withdrawn" => Self::FundsWithdrawn,
            "sold" => Self::UnitSold,
            "rewarded" => Self::RewardDistributed,
            "owner" => Self::OwnershipTransferred,
            "sh_xfer" => Self::SharesTransferred,
            "sh_appr" => Self::SharesApproved,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project_created",
            Self::InvestmentMade => "investment_made",
            Self::InvestmentRetrieved => "investment_retrieved",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::UnitSold => "unit_sold",
            Self::RewardDistributed => "reward_distributed",
            Self::OwnershipTransferred => "ownership_transferred",
            Self::SharesTransferred => "shares_transferred",
            Self::SharesApproved => "shares_approved",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded contract event, ready to be stored in the database.
///
/// `actor` is the address the event is "about": the investor, buyer,
/// withdrawal destination, new owner or share sender depending on the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdfundEvent {
    pub event_id: Option<String>,
    pub event_type: String,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub unit_id: Option<i64>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: Option<String>,
    pub event_type: String,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub unit_id: Option<i64>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
