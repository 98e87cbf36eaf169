//! PostgreSQL implementation of RecordStore.
//!
//! Each entity lives in its own table with the record kept as JSONB:
//!
//! ```sql
//! CREATE TABLE "Proposal-dev" (id TEXT PRIMARY KEY, data JSONB NOT NULL);
//! CREATE INDEX ON "ProposalSection-dev" ((data ->> 'proposalId'));
//! ```
//!
//! Secondary indexes are expression indexes on the key field, so an index
//! query is a filter on `data ->> key_field`. The index name is only used for
//! logging.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::StoreConfig;
use crate::ports::{IndexQuery, RecordStore, StoreError};

/// `undefined_table`
const UNDEFINED_TABLE: &str = "42P01";
/// `too_many_connections`
const TOO_MANY_CONNECTIONS: &str = "53300";

/// PostgreSQL implementation of RecordStore.
#[derive(Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    /// Creates a new PostgresRecordStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from store configuration.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let url = config
            .database_url
            .as_deref()
            .ok_or_else(|| StoreError::unavailable("database_url is not configured"))?;

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn get_by_id(&self, table: &str, id: &str) -> Result<Option<JsonValue>, StoreError> {
        let sql = format!("SELECT data FROM {} WHERE id = $1", quote_ident(table));

        sqlx::query_scalar::<_, JsonValue>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(table, e))
    }

    async fn query_by_index(&self, query: &IndexQuery) -> Result<Vec<JsonValue>, StoreError> {
        debug!(table = %query.table, index = %query.index, "Querying secondary index");
        let sql = format!(
            "SELECT data FROM {} WHERE data ->> $1 = $2",
            quote_ident(&query.table)
        );

        sqlx::query_scalar::<_, JsonValue>(&sql)
            .bind(&query.key_field)
            .bind(&query.key_value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&query.table, e))
    }
}

/// Quotes a table name for interpolation into SQL.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn map_sqlx_error(table: &str, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) => match db.code().as_deref() {
            Some(UNDEFINED_TABLE) => StoreError::UnknownResource(table.to_string()),
            Some(TOO_MANY_CONNECTIONS) => StoreError::Throttled(db.message().to_string()),
            _ => StoreError::unavailable(format!("Failed to query {}: {}", table, err)),
        },
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StoreError::decode(table, err.to_string())
        }
        _ => StoreError::unavailable(format!("Failed to query {}: {}", table, err)),
    }
}
