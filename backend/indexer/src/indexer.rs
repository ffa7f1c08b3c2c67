//! Long-running background task that polls the Soroban RPC and writes
//! decoded crowdfund events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Run the indexer loop until `cancel` fires.
pub async fn run(state: Arc<IndexerState>, cancel: CancellationToken) {
    info!(contract_id = %state.config.contract_id, "Indexer starting");

    let (mut current_ledger, mut cursor) = match resume_point(&state).await {
        Ok(point) => point,
        Err(e) => {
            error!(error = %e, "Could not read indexer cursor, starting from config");
            (state.config.start_ledger, None)
        }
    };

    info!(ledger = current_ledger, cursor = ?cursor, "Resuming");

    let interval = Duration::from_secs(state.config.poll_interval_secs);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Indexer stopping");
                break;
            }
            polled = poll_once(
                &state.pool,
                &state.client,
                &state.config,
                current_ledger,
                cursor.as_deref(),
            ) => {
                match polled {
                    Ok((next_ledger, next_cursor)) => {
                        current_ledger = next_ledger;
                        cursor = next_cursor;
                    }
                    Err(e) => error!(error = %e, "Indexer poll failed"),
                }
            }
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Indexer stopping");
                break;
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

/// Load the saved position; a zero ledger means nothing was saved yet.
async fn resume_point(state: &IndexerState) -> Result<(u32, Option<String>)> {
    let last_ledger = db::get_last_ledger(&state.pool).await?;
    let cursor = db::get_cursor_string(&state.pool).await?;

    let ledger = if last_ledger > 0 {
        last_ledger as u32
    } else {
        state.config.start_ledger
    };
    Ok((ledger, cursor))
}

/// Perform a single poll iteration.
///
/// Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    pool: &SqlitePool,
    client: &Client,
    config: &Config,
    start_ledger: u32,
    cursor: Option<&str>,
) -> Result<(u32, Option<String>)> {
    let (raw_events, next_cursor, latest_ledger) = rpc::fetch_events(
        client,
        &config.rpc_url,
        &config.contract_id,
        start_ledger,
        cursor,
        config.events_per_page,
    )
    .await?;

    if !raw_events.is_empty() {
        let decoded = rpc::decode_events(&raw_events, &config.contract_id);
        let inserted = db::insert_events(pool, &decoded).await?;
        info!(
            raw = raw_events.len(),
            decoded = decoded.len(),
            inserted,
            "Stored polled events"
        );
    }

    let next_ledger = next_start_ledger(start_ledger, latest_ledger);

    // Persist cursor so restarts are deterministic.
    db::save_cursor(pool, next_ledger as i64, next_cursor.as_deref()).await?;

    Ok((next_ledger, next_cursor))
}

/// The ledger never moves backwards, even if the RPC reports an older tip.
fn next_start_ledger(start_ledger: u32, latest_ledger: Option<u64>) -> u32 {
    latest_ledger
        .map(|l| u32::try_from(l).unwrap_or(u32::MAX).max(start_ledger))
        .unwrap_or(start_ledger)
}
