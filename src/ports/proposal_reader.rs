//! Proposal reader port (read side).
//!
//! Typed reads over the three proposal tables. This is the seam the
//! aggregator depends on; the store-backed adapter decodes raw records into
//! domain types and fails with `StoreError::Decode` on shape mismatches.

use async_trait::async_trait;

use crate::domain::foundation::{OwnerId, ProposalId, SectionId};
use crate::domain::proposal::{Proposal, ProposalSection, Question};
use crate::ports::StoreError;

/// Reader port for proposal data.
#[async_trait]
pub trait ProposalReader: Send + Sync {
    /// Verifies that every table the reader needs is configured.
    ///
    /// Called before any store access. Returns the names of all missing
    /// configuration values at once.
    fn check_configuration(&self) -> Result<(), Vec<String>> {
        Ok(())
    }

    /// Point lookup of a proposal. Returns `None` if not found.
    async fn find_proposal(&self, id: &ProposalId) -> Result<Option<Proposal>, StoreError>;

    /// All sections of a proposal, in store order (unsorted).
    async fn sections_for_proposal(
        &self,
        proposal_id: &ProposalId,
    ) -> Result<Vec<ProposalSection>, StoreError>;

    /// All questions of a section, in store order (unsorted).
    async fn questions_for_section(
        &self,
        section_id: &SectionId,
    ) -> Result<Vec<Question>, StoreError>;

    /// All questions of a proposal via the denormalized `proposalId` field,
    /// sorted by `order`.
    async fn questions_for_proposal(
        &self,
        proposal_id: &ProposalId,
    ) -> Result<Vec<Question>, StoreError>;

    /// All proposals belonging to an owner, in store order (unsorted).
    async fn proposals_for_owner(&self, owner: &OwnerId) -> Result<Vec<Proposal>, StoreError>;
}
