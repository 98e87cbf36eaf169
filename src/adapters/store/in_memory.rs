//! In-Memory Record Store Adapter
//!
//! Keeps records in memory, grouped by table. Useful for testing and
//! development; can be seeded from a JSON file of the form
//! `{ "<table>": [ {record}, ... ], ... }`.
//!
//! Index queries scan the table and return matches in insertion order, which
//! stands in for the unspecified order of a real secondary index.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::ports::{IndexQuery, RecordStore, StoreError};

/// In-memory record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    tables: Arc<RwLock<HashMap<String, Vec<JsonValue>>>>,
    /// Error returned by every call while set.
    failure: Arc<RwLock<Option<StoreError>>>,
    /// Simulated latency per call.
    delay: Duration,
    /// Number of reads served (including failed ones).
    calls: Arc<AtomicUsize>,
}

/// Errors loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed file must be an object of table name to record array; '{0}' is not an array")]
    NotAnArray(String),

    #[error("Seed file root must be a JSON object")]
    NotAnObject,
}

impl InMemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Loads tables and records from a JSON seed file.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let store = Self::new();
        store.seed(serde_json::from_str(&raw)?).await?;
        Ok(store)
    }

    /// Loads tables and records from a JSON object of table name to record array.
    pub async fn seed(&self, seed: JsonValue) -> Result<(), SeedError> {
        let JsonValue::Object(tables) = seed else {
            return Err(SeedError::NotAnObject);
        };

        let mut guard = self.tables.write().await;
        for (table, records) in tables {
            let JsonValue::Array(records) = records else {
                return Err(SeedError::NotAnArray(table));
            };
            guard.entry(table).or_default().extend(records);
        }
        Ok(())
    }

    /// Creates an empty table if it does not exist.
    pub async fn create_table(&self, table: impl Into<String>) {
        self.tables.write().await.entry(table.into()).or_default();
    }

    /// Appends a record to a table, creating the table if needed.
    pub async fn insert(&self, table: impl Into<String>, record: JsonValue) {
        self.tables
            .write()
            .await
            .entry(table.into())
            .or_default()
            .push(record);
    }

    /// Makes every subsequent call fail with `error` until cleared.
    pub async fn fail_with(&self, error: StoreError) {
        *self.failure.write().await = Some(error);
    }

    /// Clears an injected failure.
    pub async fn clear_failure(&self) {
        *self.failure.write().await = None;
    }

    /// Returns the number of reads served.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Get the number of records in a table
    pub async fn record_count(&self, table: &str) -> usize {
        self.tables.read().await.get(table).map_or(0, Vec::len)
    }

    async fn begin_call(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.failure.read().await.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn field_matches(record: &JsonValue, field: &str, value: &str) -> bool {
    match record.get(field) {
        Some(JsonValue::String(s)) => s == value,
        Some(JsonValue::Number(n)) => n.to_string() == value,
        _ => false,
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_by_id(&self, table: &str, id: &str) -> Result<Option<JsonValue>, StoreError> {
        self.begin_call().await?;

        let tables = self.tables.read().await;
        let records = tables
            .get(table)
            .ok_or_else(|| StoreError::UnknownResource(table.to_string()))?;
        Ok(records.iter().find(|r| field_matches(r, "id", id)).cloned())
    }

    async fn query_by_index(&self, query: &IndexQuery) -> Result<Vec<JsonValue>, StoreError> {
        self.begin_call().await?;

        let tables = self.tables.read().await;
        let records = tables
            .get(&query.table)
            .ok_or_else(|| StoreError::UnknownResource(query.table.clone()))?;
        Ok(records
            .iter()
            .filter(|r| field_matches(r, &query.key_field, &query.key_value))
            .cloned()
            .collect())
    }
}
