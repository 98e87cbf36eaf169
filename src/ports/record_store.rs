//! Record store port - the external store's read surface.
//!
//! The store keeps schemaless records keyed by `id` and offers secondary
//! indexes keyed by a non-primary field. This port exposes exactly the two
//! reads the application needs. Typed decoding happens one layer up, in the
//! `ProposalReader` adapter.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// A secondary-index lookup: all records in `table` whose `key_field`
/// equals `key_value`, via the index named `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    pub table: String,
    pub index: String,
    pub key_field: String,
    pub key_value: String,
}

impl IndexQuery {
    pub fn new(
        table: impl Into<String>,
        index: impl Into<String>,
        key_field: impl Into<String>,
        key_value: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            index: index.into(),
            key_field: key_field.into(),
            key_value: key_value.into(),
        }
    }
}

/// Read port onto the external record store.
///
/// Implementations must be cheap to share (`Arc<dyn RecordStore>`) and are
/// built once at startup.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Point lookup by primary key. Returns `None` if absent.
    async fn get_by_id(&self, table: &str, id: &str) -> Result<Option<JsonValue>, StoreError>;

    /// Secondary-index query.
    ///
    /// Result order is a hint only; callers that need an order must sort.
    async fn query_by_index(&self, query: &IndexQuery) -> Result<Vec<JsonValue>, StoreError>;
}

/// Errors surfaced by store reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store could not be reached or refused the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Request exceeded its deadline.
    #[error("Store request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Request was rejected for exceeding provisioned throughput.
    #[error("Store request throttled: {0}")]
    Throttled(String),

    /// Table or index is not known to the store.
    #[error("Unknown table or index: {0}")]
    UnknownResource(String),

    /// A record did not decode into its expected shape.
    #[error("Malformed record in {table}: {reason}")]
    Decode { table: String, reason: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn decode(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for transient infrastructure failures.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StoreError::Unavailable(_) | StoreError::Timeout { .. } | StoreError::Throttled(_)
        )
    }
}
