//! Store-backed implementation of ProposalReader.
//!
//! Resolves table and index names from configuration, applies the per-call
//! deadline, and decodes raw records into domain types.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Table, TableConfig};
use crate::domain::foundation::{OwnerId, ProposalId, SectionId};
use crate::domain::proposal::{sort_by_order, Proposal, ProposalSection, Question};
use crate::ports::{IndexQuery, ProposalReader, RecordStore, StoreError};

/// ProposalReader over any RecordStore.
#[derive(Clone)]
pub struct StoreProposalReader {
    store: Arc<dyn RecordStore>,
    tables: TableConfig,
    call_timeout: Option<Duration>,
}

impl StoreProposalReader {
    pub fn new(store: Arc<dyn RecordStore>, tables: TableConfig) -> Self {
        Self {
            store,
            tables,
            call_timeout: None,
        }
    }

    /// Bounds every store call by `timeout`.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    fn table(&self, table: Table) -> Result<&str, StoreError> {
        self.tables.table(table).ok_or_else(|| {
            StoreError::UnknownResource(format!("{} is not configured", table.config_key()))
        })
    }

    async fn with_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match self.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| StoreError::Timeout {
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => call.await,
        }
    }

    async fn query<T: DeserializeOwned>(
        &self,
        table: Table,
        index: &str,
        key_field: &str,
        key_value: &str,
    ) -> Result<Vec<T>, StoreError> {
        let name = self.table(table)?;
        let query = IndexQuery::new(name, index, key_field, key_value);
        let records = self.with_deadline(self.store.query_by_index(&query)).await?;
        records.into_iter().map(|r| decode(name, r)).collect()
    }
}

/// Decodes a raw record, naming the table and record id on failure.
fn decode<T: DeserializeOwned>(table: &str, record: JsonValue) -> Result<T, StoreError> {
    let id = record
        .get("id")
        .and_then(JsonValue::as_str)
        .unwrap_or("<no id>")
        .to_string();
    serde_json::from_value(record)
        .map_err(|e| StoreError::decode(table, format!("record {}: {}", id, e)))
}

#[async_trait]
impl ProposalReader for StoreProposalReader {
    fn check_configuration(&self) -> Result<(), Vec<String>> {
        let missing = self.tables.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    async fn find_proposal(&self, id: &ProposalId) -> Result<Option<Proposal>, StoreError> {
        let table = self.table(Table::Proposal)?;
        self.with_deadline(self.store.get_by_id(table, id.as_str()))
            .await?
            .map(|record| decode(table, record))
            .transpose()
    }

    async fn sections_for_proposal(
        &self,
        proposal_id: &ProposalId,
    ) -> Result<Vec<ProposalSection>, StoreError> {
        self.query(
            Table::Section,
            &self.tables.section_by_proposal_index,
            "proposalId",
            proposal_id.as_str(),
        )
        .await
    }

    async fn questions_for_section(
        &self,
        section_id: &SectionId,
    ) -> Result<Vec<Question>, StoreError> {
        self.query(
            Table::Question,
            &self.tables.question_by_section_index,
            "proposalSectionId",
            section_id.as_str(),
        )
        .await
    }

    async fn questions_for_proposal(
        &self,
        proposal_id: &ProposalId,
    ) -> Result<Vec<Question>, StoreError> {
        let mut questions: Vec<Question> = self
            .query(
                Table::Question,
                &self.tables.question_by_proposal_index,
                "proposalId",
                proposal_id.as_str(),
            )
            .await?;
        sort_by_order(&mut questions, |q| q.order);
        Ok(questions)
    }

    async fn proposals_for_owner(&self, owner: &OwnerId) -> Result<Vec<Proposal>, StoreError> {
        self.query(
            Table::Proposal,
            &self.tables.proposal_by_owner_index,
            "owner",
            owner.as_str(),
        )
        .await
    }
}
