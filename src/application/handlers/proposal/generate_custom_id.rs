//! GenerateCustomIdHandler - builds a proposal's business identifier.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::proposal::CustomProposalId;
use crate::ports::Clock;

/// Message returned when either input is blank.
pub const MISSING_INPUTS_MESSAGE: &str = "ProjectName and CustomerName are required inputs.";

/// Command to generate a custom proposal id.
#[derive(Debug, Clone, Default)]
pub struct GenerateCustomIdCommand {
    pub project_name: String,
    pub customer_name: String,
}

/// Either the generated identifier or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomIdResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_proposal_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handler for custom id generation.
pub struct GenerateCustomIdHandler {
    clock: Arc<dyn Clock>,
    org_prefix: String,
}

impl GenerateCustomIdHandler {
    pub fn new(clock: Arc<dyn Clock>, org_prefix: impl Into<String>) -> Self {
        Self {
            clock,
            org_prefix: org_prefix.into(),
        }
    }

    pub fn handle(&self, cmd: GenerateCustomIdCommand) -> CustomIdResult {
        match CustomProposalId::generate(
            &self.org_prefix,
            &cmd.project_name,
            &cmd.customer_name,
            self.clock.today(),
        ) {
            Ok(id) => {
                debug!(custom_proposal_id = %id, "Generated custom proposal id");
                CustomIdResult {
                    custom_proposal_id: Some(id.into_inner()),
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Rejected custom id request");
                CustomIdResult {
                    custom_proposal_id: None,
                    error: Some(MISSING_INPUTS_MESSAGE.to_string()),
                }
            }
        }
    }
}
