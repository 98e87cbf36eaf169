//! HTTP DTOs (Data Transfer Objects) for proposal endpoints.
//!
//! Field names are camelCase to match the store's wire format and the
//! original client contract.

use serde::{Deserialize, Serialize};

use crate::application::{GenerateCustomIdCommand, GenerateProposalCommand, ListProposalsQuery, ProposalSummary};
use crate::domain::foundation::ErrorKind;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to run the generation pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProposalRequest {
    /// Missing or null is treated like blank.
    #[serde(default)]
    pub proposal_id: Option<String>,
}

impl From<GenerateProposalRequest> for GenerateProposalCommand {
    fn from(req: GenerateProposalRequest) -> Self {
        GenerateProposalCommand::new(req.proposal_id.unwrap_or_default())
    }
}

/// Request to generate a custom proposal id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomIdRequest {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub customer_name: String,
}

impl From<CustomIdRequest> for GenerateCustomIdCommand {
    fn from(req: CustomIdRequest) -> Self {
        GenerateCustomIdCommand {
            project_name: req.project_name,
            customer_name: req.customer_name,
        }
    }
}

/// Query parameters for listing proposals.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProposalsParams {
    #[serde(default)]
    pub owner: String,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl From<ListProposalsParams> for ListProposalsQuery {
    fn from(params: ListProposalsParams) -> Self {
        ListProposalsQuery {
            owner: params.owner,
            status: params.status,
            search: params.search,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for proposal listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalListResponse {
    pub items: Vec<ProposalSummary>,
    pub count: usize,
}

impl From<Vec<ProposalSummary>> for ProposalListResponse {
    fn from(items: Vec<ProposalSummary>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Error response for non-pipeline endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable category.
    pub error_kind: ErrorKind,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, error_kind: ErrorKind) -> Self {
        Self {
            error: error.into(),
            error_kind,
        }
    }
}
