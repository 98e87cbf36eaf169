//! Typed record shapes for the three stored entities.
//!
//! Field names follow the store's camelCase wire format. Unknown attributes
//! written by the store (`__typename` and friends) are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{OwnerId, ProposalId, ProposalStatus, QuestionId, SectionId, Timestamp};

/// Root proposal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: ProposalId,

    #[serde(default)]
    pub owner: Option<OwnerId>,

    /// Business identifier, e.g. `1CH_NORTH_AcmePortal_15-May-25`.
    pub custom_proposal_id: String,

    pub project_name: String,

    pub customer_name: String,

    #[serde(default)]
    pub status: Option<ProposalStatus>,

    /// Serialized rich-text editor state (JSON string).
    #[serde(default)]
    pub editor_content: Option<String>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

impl Proposal {
    /// Status with the store's implicit default applied.
    pub fn effective_status(&self) -> ProposalStatus {
        self.status.unwrap_or_default()
    }
}

/// A section within a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSection {
    pub id: SectionId,

    pub proposal_id: ProposalId,

    pub title: String,

    /// Sort key. Not guaranteed unique or contiguous.
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,

    #[serde(default)]
    pub owner: Option<OwnerId>,
}

/// A question within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,

    pub proposal_section_id: SectionId,

    /// Denormalized copy of the owning section's proposal id.
    pub proposal_id: ProposalId,

    pub text: String,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_mandatory: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,

    #[serde(default)]
    pub owner: Option<OwnerId>,
}

impl Question {
    /// Returns true if a non-blank answer has been recorded.
    pub fn is_answered(&self) -> bool {
        self.answer.as_deref().is_some_and(|a| !a.trim().is_empty())
    }
}

/// The store writes explicit nulls for unset attributes; treat them as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
