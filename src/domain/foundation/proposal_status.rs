//! ProposalStatus enum for the lifecycle of a proposal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Lifecycle status of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    #[default]
    Draft,
    Submitted,
    InReview,
    Won,
    Lost,
    Archived,
}

impl ProposalStatus {
    /// Returns true once the proposal has left drafting.
    pub fn is_past_draft(&self) -> bool {
        !matches!(self, ProposalStatus::Draft)
    }

    /// Returns true if the outcome is decided (won or lost).
    pub fn is_decided(&self) -> bool {
        matches!(self, ProposalStatus::Won | ProposalStatus::Lost)
    }

    /// Store wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "DRAFT",
            ProposalStatus::Submitted => "SUBMITTED",
            ProposalStatus::InReview => "IN_REVIEW",
            ProposalStatus::Won => "WON",
            ProposalStatus::Lost => "LOST",
            ProposalStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProposalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(ProposalStatus::Draft),
            "SUBMITTED" => Ok(ProposalStatus::Submitted),
            "IN_REVIEW" => Ok(ProposalStatus::InReview),
            "WON" => Ok(ProposalStatus::Won),
            "LOST" => Ok(ProposalStatus::Lost),
            "ARCHIVED" => Ok(ProposalStatus::Archived),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown proposal status '{}'", other),
            )),
        }
    }
}
