//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::error;

use crate::db;
use crate::errors::IndexerError;
use crate::events::EventRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

/// Build the REST router over `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/projects/:id/events", get(get_project_events))
        .route("/projects/:id/sales", get(get_project_sales))
        .route("/investors/:address/events", get(get_investor_events))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventsResponse {
    pub project_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct InvestorEventsResponse {
    pub address: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(e: IndexerError) -> Response {
    error!(error = %e, "API query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /projects/:id/events`
///
/// Returns all indexed events for the given project identifier.
pub async fn get_project_events(
    State(state): State<Arc<ApiState>>,
    Path(project_id): Path<String>,
) -> Response {
    match db::get_events_for_project(&state.pool, &project_id).await {
        Ok(events) => Json(EventsResponse {
            project_id,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /projects/:id/sales`
///
/// Returns the `unit_sold` events of a project, oldest first.
pub async fn get_project_sales(
    State(state): State<Arc<ApiState>>,
    Path(project_id): Path<String>,
) -> Response {
    match db::get_sales_for_project(&state.pool, &project_id).await {
        Ok(events) => Json(EventsResponse {
            project_id,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /investors/:address/events`
///
/// Returns every event naming `address` as its actor.
pub async fn get_investor_events(
    State(state): State<Arc<ApiState>>,
    Path(address): Path<String>,
) -> Response {
    match db::get_events_for_actor(&state.pool, &address).await {
        Ok(events) => Json(InvestorEventsResponse {
            address,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /events`
///
/// Returns all indexed events across all projects.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Response {
    match db::get_all_events(&state.pool).await {
        Ok(events) => Json(AllEventsResponse {
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::events::CrowdfundEvent;

    async fn state_with_events() -> Arc<ApiState> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::migrate(&pool).await.unwrap();

        let make = |id: &str, kind: &str, actor: &str, unit_id: Option<i64>| CrowdfundEvent {
            event_id: Some(id.to_string()),
            event_type: kind.to_string(),
            project_id: Some("7".to_string()),
            actor: Some(actor.to_string()),
            amount: Some("15".to_string()),
            unit_id,
            ledger: 100,
            timestamp: 1_700_000_000,
            contract_id: "CONTRACT1".to_string(),
            tx_hash: None,
        };
        db::insert_events(
            &pool,
            &[
                make("a", "investment_made", "GALICE", None),
                make("b", "unit_sold", "GBUYER", Some(1)),
            ],
        )
        .await
        .unwrap();

        Arc::new(ApiState { pool })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn project_events_lists_everything_for_the_project() {
        let state = state_with_events().await;
        let response = get_project_events(State(state), Path("7".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["project_id"], "7");
        assert_eq!(body["count"], 2);
    }

    #[tokio::test]
    async fn project_sales_only_returns_sold_units() {
        let state = state_with_events().await;
        let body = body_json(get_project_sales(State(state), Path("7".to_string())).await).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["events"][0]["event_type"], "unit_sold");
        assert_eq!(body["events"][0]["unit_id"], 1);
    }

    #[tokio::test]
    async fn investor_events_filter_by_actor() {
        let state = state_with_events().await;
        let body =
            body_json(get_investor_events(State(state.clone()), Path("GALICE".to_string())).await)
                .await;
        assert_eq!(body["address"], "GALICE");
        assert_eq!(body["count"], 1);

        let body =
            body_json(get_investor_events(State(state), Path("GNOBODY".to_string())).await).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn database_failure_maps_to_500() {
        let state = state_with_events().await;
        state.pool.close().await;
        let response = get_all_events(State(state)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
