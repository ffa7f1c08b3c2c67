//! Soroban RPC client: polls `getEvents` and decodes crowdfund events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//! * Invalid-request errors are returned as [`IndexerError::Rpc`] and not retried.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{CrowdfundEvent, EventKind};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

/// JSON-RPC codes that will never succeed on retry.
const HARD_ERROR_CODES: [i64; 3] = [-32600, -32601, -32602];

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// Decoded topic list
    pub topic: Vec<String>,
    /// Decoded event value / data
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    /// Globally unique event id assigned by the RPC
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events from the RPC.
///
/// * `start_ledger`: the ledger sequence to scan from (inclusive).
/// * `cursor`: optional opaque pagination cursor from a previous response.
/// * `limit`: maximum number of events to return.
///
/// Returns `(events, next_cursor, latest_ledger)`.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_id: &str,
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<(Vec<RawEvent>, Option<String>, Option<u64>)> {
    let mut backoff = INITIAL_BACKOFF_SECS;

    loop {
        let params = build_params(contract_id, start_ledger, cursor, limit);

        let response = client
            .post(rpc_url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getEvents",
                "params": params,
            }))
            .send()
            .await;

        match response {
            Err(e) => {
                warn!(backoff_secs = backoff, error = %e, "RPC request failed, retrying");
                tokio::time::sleep(Duration::from_secs(backoff)).await;
                backoff = next_backoff(backoff);
                continue;
            }
            Ok(resp) => {
                if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    warn!(backoff_secs = backoff, "Rate-limited by RPC, retrying");
                    tokio::time::sleep(Duration::from_secs(backoff)).await;
                    backoff = next_backoff(backoff);
                    continue;
                }

                let body: RpcResponse = resp.json().await?;

                if let Some(err) = body.error {
                    if HARD_ERROR_CODES.contains(&err.code) {
                        return Err(IndexerError::Rpc {
                            code: err.code,
                            message: err.message,
                        });
                    }
                    warn!(
                        backoff_secs = backoff,
                        code = err.code,
                        message = %err.message,
                        "RPC soft error, retrying"
                    );
                    tokio::time::sleep(Duration::from_secs(backoff)).await;
                    backoff = next_backoff(backoff);
                    continue;
                }

                let result = body.result.ok_or_else(|| {
                    IndexerError::EventParse("Empty result from getEvents".to_string())
                })?;

                debug!(
                    count = result.events.len(),
                    latest_ledger = ?result.latest_ledger,
                    "Fetched events"
                );

                return Ok((result.events, result.cursor, result.latest_ledger));
            }
        }
    }
}

fn next_backoff(current: u64) -> u64 {
    (current * 2).min(MAX_BACKOFF_SECS)
}

fn build_params(contract_id: &str, start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": [contract_id]
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode a list of raw RPC events into [`CrowdfundEvent`] structs.
///
/// Events emitted by failed invocations are dropped; the contract rolls
/// them back, so they never happened.
pub fn decode_events(raw: &[RawEvent], contract_id: &str) -> Vec<CrowdfundEvent> {
    raw.iter()
        .filter(|e| e.in_successful_contract_call != Some(false))
        .filter_map(|e| decode_single(e, contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, contract_id: &str) -> Option<CrowdfundEvent> {
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let project_id = raw.topic.get(1).map(|t| extract_u64_or_raw(t));

    let (actor, amount, unit_id) = decode_data(&raw.value, &kind);

    Some(CrowdfundEvent {
        event_id: raw.id.clone(),
        event_type: kind.as_str().to_string(),
        project_id,
        actor,
        amount,
        unit_id,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| contract_id.to_string()),
        tx_hash: raw.tx_hash.clone(),
    })
}

/// Pull `(actor, amount, unit_id)` out of the event data map.
fn decode_data(value: &Value, kind: &EventKind) -> (Option<String>, Option<String>, Option<i64>) {
    match kind {
        EventKind::ProjectCreated => (
            extract_field(value, &["owner"]),
            extract_field(value, &["target_amount"]),
            None,
        ),
        EventKind::InvestmentMade
        | EventKind::InvestmentRetrieved
        | EventKind::RewardDistributed => (
            extract_field(value, &["investor"]),
            extract_field(value, &["amount"]),
            None,
        ),
        EventKind::FundsWithdrawn => (
            extract_field(value, &["to"]),
            extract_field(value, &["amount"]),
            None,
        ),
        EventKind::UnitSold => (
            extract_field(value, &["buyer"]),
            extract_field(value, &["price"]),
            extract_field(value, &["unit_id"]).and_then(|s| s.parse().ok()),
        ),
        // A renounce carries `new_owner: null`; fall back to the previous
        // owner so the row still names who acted.
        EventKind::OwnershipTransferred => (
            extract_field(value, &["new_owner", "previous"]),
            None,
            None,
        ),
        EventKind::SharesTransferred => (
            extract_field(value, &["from"]),
            extract_field(value, &["amount"]),
            None,
        ),
        EventKind::SharesApproved => (
            extract_field(value, &["owner"]),
            extract_field(value, &["amount"]),
            None,
        ),
        EventKind::Unknown => (None, None, None),
    }
}

/// Return the first of `keys` present as a string or number.
///
/// Values wrapped as `{"type":…, "value":…}` are unwrapped.
fn extract_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find_map(scalar_to_string)
}

fn scalar_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(_) => v.get("value").and_then(scalar_to_string),
        _ => None,
    }
}

/// Extract a Soroban Symbol from the decoded topic string.
/// The RPC may return `{"type":"symbol","value":"created"}` or just the raw string.
fn extract_symbol(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    raw.to_string()
}

/// Extract the project id from a topic entry that might be a JSON object or raw number/string.
fn extract_u64_or_raw(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(n) = v.get("value").and_then(|x| x.as_u64()) {
            return n.to_string();
        }
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    raw.to_string()
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
