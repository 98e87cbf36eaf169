//! ProposalAggregator - joins one proposal with its ordered sections and
//! questions into an `AggregatedProposalDocument`.
//!
//! Read-only. Cost is one point lookup, one section query and one question
//! query per section. Question queries run concurrently, bounded by
//! `max_concurrent_queries`, and results keep section order.

use futures::{StreamExt, TryStreamExt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::{ErrorKind, ProposalId};
use crate::domain::proposal::{
    sort_by_order, AggregatedProposalDocument, ProposalBody, SectionWithQuestions,
};
use crate::ports::{ProposalReader, StoreError};

/// Errors that abort aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// One or more table names are not configured.
    #[error("Configuration error: Missing table name variables: {}", .missing.join(", "))]
    Configuration { missing: Vec<String> },

    #[error("Proposal not found: {0}")]
    NotFound(ProposalId),

    /// Transient store failure. Not retried here.
    #[error("Error processing proposal: {0}")]
    StoreUnavailable(String),

    #[error("Error processing proposal: {0}")]
    Decode(String),

    /// Configured table or index does not exist in the store.
    #[error("Configuration error: {0}")]
    UnknownResource(String),
}

impl AggregationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AggregationError::Configuration { .. } | AggregationError::UnknownResource(_) => {
                ErrorKind::ConfigurationError
            }
            AggregationError::NotFound(_) => ErrorKind::NotFound,
            AggregationError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            AggregationError::Decode(_) => ErrorKind::DecodeError,
        }
    }
}

impl From<StoreError> for AggregationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Decode { .. } => AggregationError::Decode(err.to_string()),
            StoreError::UnknownResource(_) => AggregationError::UnknownResource(err.to_string()),
            StoreError::Unavailable(_) | StoreError::Timeout { .. } | StoreError::Throttled(_) => {
                AggregationError::StoreUnavailable(err.to_string())
            }
        }
    }
}

/// Builds aggregated proposal documents from a `ProposalReader`.
#[derive(Clone)]
pub struct ProposalAggregator {
    reader: Arc<dyn ProposalReader>,
    max_concurrent_queries: usize,
}

impl ProposalAggregator {
    pub fn new(reader: Arc<dyn ProposalReader>, max_concurrent_queries: usize) -> Self {
        Self {
            reader,
            max_concurrent_queries: max_concurrent_queries.max(1),
        }
    }

    /// Aggregates a proposal.
    ///
    /// Fails fast, without touching the store, when table configuration is
    /// incomplete. A malformed body degrades rather than failing.
    #[tracing::instrument(skip_all, fields(proposal_id = %proposal_id))]
    pub async fn aggregate(
        &self,
        proposal_id: &ProposalId,
    ) -> Result<AggregatedProposalDocument, AggregationError> {
        // 1. Configuration
        self.reader
            .check_configuration()
            .map_err(|missing| AggregationError::Configuration { missing })?;

        // 2. Proposal
        let proposal = self
            .reader
            .find_proposal(proposal_id)
            .await?
            .ok_or_else(|| AggregationError::NotFound(proposal_id.clone()))?;

        // 3. Body
        let body = proposal
            .editor_content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
            .map(ProposalBody::parse);
        if let Some(ProposalBody::Degraded { parse_error, .. }) = &body {
            warn!(error = %parse_error, "Failed to parse editor content, keeping raw body");
        }

        // 4. Sections
        let mut sections = self.reader.sections_for_proposal(proposal_id).await?;
        sort_by_order(&mut sections, |s| s.order);
        debug!(count = sections.len(), "Fetched sections");

        // 5. Questions per section
        let reader = &self.reader;
        let sections: Vec<SectionWithQuestions> = futures::stream::iter(sections)
            .map(|section| async move {
                let mut questions = reader.questions_for_section(&section.id).await?;
                sort_by_order(&mut questions, |q| q.order);
                debug!(section_id = %section.id, count = questions.len(), "Fetched questions");
                Ok::<_, StoreError>(SectionWithQuestions { section, questions })
            })
            .buffered(self.max_concurrent_queries)
            .try_collect()
            .await?;

        let document = AggregatedProposalDocument {
            proposal,
            body,
            sections,
        };
        info!(
            sections = document.section_count(),
            questions = document.question_count(),
            degraded = document.is_degraded(),
            "Aggregated proposal data"
        );
        Ok(document)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
