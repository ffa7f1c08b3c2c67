//! Failure modes of the crowdfund indexer.
//!
//! Poll failures are logged and retried on the next tick; API failures turn
//! into a 500 with the message below.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    /// SQLite query, pool or transaction failure.
    #[error("event store error: {0}")]
    Database(#[from] sqlx::Error),

    /// The embedded schema could not be applied at startup.
    #[error("event store migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Transport-level failure talking to the Soroban RPC.
    #[error("RPC transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing or unparseable environment setting.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// `getEvents` answered, but not with a usable page of events.
    #[error("unusable getEvents response: {0}")]
    EventParse(String),

    /// A JSON-RPC error that retrying cannot fix (bad request or params).
    #[error("RPC rejected getEvents ({code}): {message}")]
    Rpc { code: i64, message: String },
}

pub type Result<T> = std::result::Result<T, IndexerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_rejection_names_code_and_message() {
        let err = IndexerError::Rpc {
            code: -32602,
            message: "startLedger must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "RPC rejected getEvents (-32602): startLedger must be positive"
        );
    }

    #[test]
    fn config_errors_carry_the_offending_setting() {
        let err = IndexerError::Config("Invalid API_PORT: abc".to_string());
        assert_eq!(err.to_string(), "invalid configuration: Invalid API_PORT: abc");
    }
}
