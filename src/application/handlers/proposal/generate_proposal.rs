//! GenerateProposalHandler - the proposal generation pipeline.
//!
//! Validates the id, aggregates the proposal, renders the prompt and runs the
//! configured generation backend. Every outcome, including failure, is
//! reported as a `GenerationResult`; the handler never returns an error.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::ProposalAggregator;
use crate::domain::foundation::{ErrorKind, ProposalId};
use crate::domain::proposal::build_prompt;
use crate::ports::{GeneratedContent, GenerationBackend};

/// Command to generate content for a proposal.
#[derive(Debug, Clone)]
pub struct GenerateProposalCommand {
    /// Raw proposal id as received; may be blank.
    pub proposal_id: String,
}

impl GenerateProposalCommand {
    pub fn new(proposal_id: impl Into<String>) -> Self {
        Self {
            proposal_id: proposal_id.into(),
        }
    }
}

/// Outcome of a generation invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_document_url: Option<String>,

    /// Set on failure only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl GenerationResult {
    pub fn success(content: GeneratedContent) -> Self {
        Self {
            success: true,
            message: content.message,
            generated_text: Some(content.text),
            generated_document_url: Some(content.document_url),
            error_kind: None,
        }
    }

    pub fn failure(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            success: false,
            message: message.into(),
            generated_text: None,
            generated_document_url: None,
            error_kind: Some(kind),
        }
    }

    /// Returns true if the failure is worth retrying.
    pub fn is_retryable(&self) -> bool {
        self.error_kind.is_some_and(|k| k.is_retryable())
    }
}

/// Handler for the proposal generation pipeline.
///
/// # Dependencies
///
/// - `ProposalAggregator`: Builds the aggregated document
/// - `GenerationBackend`: Produces content from the prompt
pub struct GenerateProposalHandler {
    aggregator: ProposalAggregator,
    backend: Arc<dyn GenerationBackend>,
}

impl GenerateProposalHandler {
    pub fn new(aggregator: ProposalAggregator, backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            aggregator,
            backend,
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(proposal_id = %cmd.proposal_id, invocation_id = %Uuid::new_v4())
    )]
    pub async fn handle(&self, cmd: GenerateProposalCommand) -> GenerationResult {
        // 1. Validate input
        let proposal_id = match ProposalId::new(cmd.proposal_id.trim()) {
            Ok(id) => id,
            Err(_) => {
                warn!("Rejected generation request without a proposal id");
                return GenerationResult::failure("Proposal ID is required.", ErrorKind::InvalidRequest);
            }
        };

        // 2. Aggregate
        let document = match self.aggregator.aggregate(&proposal_id).await {
            Ok(document) => document,
            Err(e) => {
                error!(error = %e, kind = %e.kind(), "Proposal aggregation failed");
                return GenerationResult::failure(e.to_string(), e.kind());
            }
        };

        // 3. Prompt and generation
        let prompt = build_prompt(&document);
        match self.backend.generate(&document, &prompt).await {
            Ok(content) => {
                info!(backend = self.backend.name(), "Proposal generation completed");
                GenerationResult::success(content)
            }
            Err(e) => {
                error!(backend = self.backend.name(), error = %e, "Generation backend failed");
                GenerationResult::failure(
                    format!("Error processing proposal: {}", e),
                    ErrorKind::GenerationFailed,
                )
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
