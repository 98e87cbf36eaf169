//! ListProposalsHandler - Query handler for an owner's proposals with
//! optional status filter and text search.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{
    ErrorKind, OwnerId, ProposalId, ProposalStatus, Timestamp, ValidationError,
};
use crate::domain::proposal::Proposal;
use crate::ports::{ProposalReader, StoreError};

/// Query to list proposals for an owner.
#[derive(Debug, Clone, Default)]
pub struct ListProposalsQuery {
    pub owner: String,
    /// Exact status match, e.g. `IN_REVIEW`. Case-insensitive.
    pub status: Option<String>,
    /// Case-insensitive substring over id, project and customer.
    pub search: Option<String>,
}

impl ListProposalsQuery {
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Default::default()
        }
    }
}

/// One row of the proposal list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSummary {
    pub id: ProposalId,
    pub custom_proposal_id: String,
    pub project_name: String,
    pub customer_name: String,
    pub status: ProposalStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Proposal> for ProposalSummary {
    fn from(p: Proposal) -> Self {
        let status = p.effective_status();
        Self {
            id: p.id,
            custom_proposal_id: p.custom_proposal_id,
            project_name: p.project_name,
            customer_name: p.customer_name,
            status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListProposalsError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("Error listing proposals: {0}")]
    Store(#[from] StoreError),
}

impl ListProposalsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListProposalsError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ListProposalsError::Store(StoreError::Decode { .. }) => ErrorKind::DecodeError,
            ListProposalsError::Store(StoreError::UnknownResource(_)) => {
                ErrorKind::ConfigurationError
            }
            ListProposalsError::Store(_) => ErrorKind::StoreUnavailable,
        }
    }
}

/// Handler for listing proposals.
pub struct ListProposalsHandler {
    reader: Arc<dyn ProposalReader>,
}

impl ListProposalsHandler {
    pub fn new(reader: Arc<dyn ProposalReader>) -> Self {
        Self { reader }
    }

    /// Returns matching proposals, newest first.
    pub async fn handle(
        &self,
        query: ListProposalsQuery,
    ) -> Result<Vec<ProposalSummary>, ListProposalsError> {
        let owner = OwnerId::new(query.owner.trim())?;
        let status = query
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<ProposalStatus>)
            .transpose()?;
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut proposals: Vec<Proposal> = self
            .reader
            .proposals_for_owner(&owner)
            .await?
            .into_iter()
            .filter(|p| status.map_or(true, |s| p.effective_status() == s))
            .filter(|p| needle.as_deref().map_or(true, |n| matches_search(p, n)))
            .collect();
        proposals.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(owner = %owner, count = proposals.len(), "Listed proposals");
        Ok(proposals.into_iter().map(ProposalSummary::from).collect())
    }
}

/// `needle` must already be lowercase.
fn matches_search(proposal: &Proposal, needle: &str) -> bool {
    [
        &proposal.custom_proposal_id,
        &proposal.project_name,
        &proposal.customer_name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SectionId;
    use crate::domain::proposal::{ProposalSection, Question};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    struct MockProposalReader {
        proposals: Vec<Proposal>,
        fail_with: Option<StoreError>,
    }

    impl MockProposalReader {
        fn with_proposals(proposals: Vec<Proposal>) -> Self {
            Self {
                proposals,
                fail_with: None,
            }
        }
    }

    #[async_trait]
    impl ProposalReader for MockProposalReader {
        async fn find_proposal(&self, _id: &ProposalId) -> Result<Option<Proposal>, StoreError> {
            Ok(None)
        }

        async fn sections_for_proposal(
            &self,
            _proposal_id: &ProposalId,
        ) -> Result<Vec<ProposalSection>, StoreError> {
            Ok(vec![])
        }

        async fn questions_for_section(
            &self,
            _section_id: &SectionId,
        ) -> Result<Vec<Question>, StoreError> {
            Ok(vec![])
        }

        async fn questions_for_proposal(
            &self,
            _proposal_id: &ProposalId,
        ) -> Result<Vec<Question>, StoreError> {
            Ok(vec![])
        }

        async fn proposals_for_owner(&self, owner: &OwnerId) -> Result<Vec<Proposal>, StoreError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(self
                .proposals
                .iter()
                .filter(|p| p.owner.as_ref() == Some(owner))
                .cloned()
                .collect())
        }
    }

    fn proposal(id: &str, project: &str, customer: &str, status: Option<ProposalStatus>, day: u32) -> Proposal {
        let at = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 5, day, 9, 0, 0).unwrap());
        Proposal {
            id: ProposalId::new(id).unwrap(),
            owner: Some(OwnerId::new("user-1").unwrap()),
            custom_proposal_id: format!("1CH_X_{}_01-May-25", project.replace(' ', "")),
            project_name: project.to_string(),
            customer_name: customer.to_string(),
            status,
            editor_content: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn handler() -> ListProposalsHandler {
        ListProposalsHandler::new(Arc::new(MockProposalReader::with_proposals(vec![
            proposal("p-1", "Acme Portal", "Northwind", None, 1),
            proposal("p-2", "Data Lake", "Contoso", Some(ProposalStatus::Won), 3),
            proposal("p-3", "Mobile App", "Northwind Traders", Some(ProposalStatus::InReview), 2),
        ])))
    }

    fn ids(list: &[ProposalSummary]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let list = handler().handle(ListProposalsQuery::for_owner("user-1")).await.unwrap();
        assert_eq!(ids(&list), vec!["p-2", "p-3", "p-1"]);
        assert_eq!(list[2].status, ProposalStatus::Draft);
    }

    #[tokio::test]
    async fn filters_by_status_case_insensitively() {
        let query = ListProposalsQuery {
            status: Some("in_review".into()),
            ..ListProposalsQuery::for_owner("user-1")
        };
        let list = handler().handle(query).await.unwrap();
        assert_eq!(ids(&list), vec!["p-3"]);
    }

    #[tokio::test]
    async fn draft_filter_matches_records_without_status() {
        let query = ListProposalsQuery {
            status: Some("DRAFT".into()),
            ..ListProposalsQuery::for_owner("user-1")
        };
        let list = handler().handle(query).await.unwrap();
        assert_eq!(ids(&list), vec!["p-1"]);
    }

    #[tokio::test]
    async fn search_matches_customer_and_project() {
        let query = ListProposalsQuery {
            search: Some("  NORTHWIND ".into()),
            ..ListProposalsQuery::for_owner("user-1")
        };
        let list = handler().handle(query).await.unwrap();
        assert_eq!(ids(&list), vec!["p-3", "p-1"]);

        let query = ListProposalsQuery {
            search: Some("lake".into()),
            ..ListProposalsQuery::for_owner("user-1")
        };
        assert_eq!(ids(&handler().handle(query).await.unwrap()), vec!["p-2"]);
    }

    #[tokio::test]
    async fn blank_owner_is_invalid_request() {
        let err = handler().handle(ListProposalsQuery::for_owner(" ")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[tokio::test]
    async fn unknown_status_is_invalid_request() {
        let query = ListProposalsQuery {
            status: Some("PENDING".into()),
            ..ListProposalsQuery::for_owner("user-1")
        };
        let err = handler().handle(query).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[tokio::test]
    async fn store_outage_is_store_unavailable() {
        let handler = ListProposalsHandler::new(Arc::new(MockProposalReader {
            proposals: vec![],
            fail_with: Some(StoreError::Throttled("busy".into())),
        }));
        let err = handler.handle(ListProposalsQuery::for_owner("user-1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
        assert!(err.kind().is_retryable());
    }
}
