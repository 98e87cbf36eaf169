//! ListProposalQuestionsHandler - Query handler for every question of a
//! proposal, read through the denormalized `proposalId` index.
//!
//! Unlike aggregation this skips the section walk, so it is the cheap way to
//! report answer progress for a proposal.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{ErrorKind, ProposalId, ValidationError};
use crate::domain::proposal::Question;
use crate::ports::{ProposalReader, StoreError};

/// Query for the questions of one proposal.
#[derive(Debug, Clone)]
pub struct ListProposalQuestionsQuery {
    pub proposal_id: String,
}

impl ListProposalQuestionsQuery {
    pub fn new(proposal_id: impl Into<String>) -> Self {
        Self {
            proposal_id: proposal_id.into(),
        }
    }
}

/// Questions of a proposal with answer progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalQuestions {
    pub proposal_id: ProposalId,
    /// Sorted by `order`.
    pub items: Vec<Question>,
    pub count: usize,
    pub answered_count: usize,
    /// Mandatory questions still without an answer.
    pub open_mandatory_count: usize,
}

impl ProposalQuestions {
    fn new(proposal_id: ProposalId, items: Vec<Question>) -> Self {
        let answered_count = items.iter().filter(|q| q.is_answered()).count();
        let open_mandatory_count = items
            .iter()
            .filter(|q| q.is_mandatory && !q.is_answered())
            .count();
        Self {
            proposal_id,
            count: items.len(),
            answered_count,
            open_mandatory_count,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListProposalQuestionsError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("Proposal not found: {0}")]
    NotFound(ProposalId),

    #[error("Error listing questions: {0}")]
    Store(#[from] StoreError),
}

impl ListProposalQuestionsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListProposalQuestionsError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ListProposalQuestionsError::NotFound(_) => ErrorKind::NotFound,
            ListProposalQuestionsError::Store(StoreError::Decode { .. }) => ErrorKind::DecodeError,
            ListProposalQuestionsError::Store(StoreError::UnknownResource(_)) => {
                ErrorKind::ConfigurationError
            }
            ListProposalQuestionsError::Store(_) => ErrorKind::StoreUnavailable,
        }
    }
}

/// Handler for listing a proposal's questions.
pub struct ListProposalQuestionsHandler {
    reader: Arc<dyn ProposalReader>,
}

impl ListProposalQuestionsHandler {
    pub fn new(reader: Arc<dyn ProposalReader>) -> Self {
        Self { reader }
    }

    /// Returns the proposal's questions. An unknown proposal is `NotFound`
    /// rather than an empty list.
    pub async fn handle(
        &self,
        query: ListProposalQuestionsQuery,
    ) -> Result<ProposalQuestions, ListProposalQuestionsError> {
        let proposal_id = ProposalId::new(query.proposal_id.trim())?;

        if self.reader.find_proposal(&proposal_id).await?.is_none() {
            return Err(ListProposalQuestionsError::NotFound(proposal_id));
        }

        let questions = self.reader.questions_for_proposal(&proposal_id).await?;
        debug!(proposal_id = %proposal_id, count = questions.len(), "Listed proposal questions");

        Ok(ProposalQuestions::new(proposal_id, questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{OwnerId, QuestionId, SectionId, Timestamp};
    use crate::domain::proposal::{Proposal, ProposalSection};
    use async_trait::async_trait;

    struct MockProposalReader {
        proposal: Option<Proposal>,
        questions: Vec<Question>,
        fail_with: Option<StoreError>,
    }

    #[async_trait]
    impl ProposalReader for MockProposalReader {
        async fn find_proposal(&self, id: &ProposalId) -> Result<Option<Proposal>, StoreError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(self.proposal.clone().filter(|p| &p.id == id))
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
            Ok(self.questions.clone())
        }

        async fn proposals_for_owner(&self, _owner: &OwnerId) -> Result<Vec<Proposal>, StoreError> {
            Ok(vec![])
        }
    }

    fn proposal() -> Proposal {
        let at: Timestamp = serde_json::from_str("\"2025-05-15T10:00:00Z\"").unwrap();
        Proposal {
            id: ProposalId::new("p-1").unwrap(),
            owner: None,
            custom_proposal_id: "1CH_NORTH_AcmePortal_15-May-25".to_string(),
            project_name: "Acme Portal".to_string(),
            customer_name: "Northwind".to_string(),
            status: None,
            editor_content: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn question(id: &str, answer: Option<&str>, mandatory: bool) -> Question {
        Question {
            id: QuestionId::new(id).unwrap(),
            proposal_section_id: SectionId::new("s-1").unwrap(),
            proposal_id: ProposalId::new("p-1").unwrap(),
            text: format!("Question {}", id),
            answer: answer.map(str::to_string),
            is_mandatory: mandatory,
            order: 0,
            owner: None,
        }
    }

    fn handler(questions: Vec<Question>) -> ListProposalQuestionsHandler {
        ListProposalQuestionsHandler::new(Arc::new(MockProposalReader {
            proposal: Some(proposal()),
            questions,
            fail_with: None,
        }))
    }

    #[tokio::test]
    async fn counts_answered_and_open_mandatory_questions() {
        let result = handler(vec![
            question("q-1", Some("Fixed price"), true),
            question("q-2", Some("   "), true),
            question("q-3", None, false),
        ])
        .handle(ListProposalQuestionsQuery::new("p-1"))
        .await
        .unwrap();

        assert_eq!(result.count, 3);
        assert_eq!(result.answered_count, 1);
        assert_eq!(result.open_mandatory_count, 1);
    }

    #[tokio::test]
    async fn unknown_proposal_is_not_found() {
        let err = handler(vec![])
            .handle(ListProposalQuestionsQuery::new("p-404"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn blank_id_is_invalid_request() {
        let err = handler(vec![])
            .handle(ListProposalQuestionsQuery::new("  "))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[tokio::test]
    async fn store_outage_is_retryable() {
        let handler = ListProposalQuestionsHandler::new(Arc::new(MockProposalReader {
            proposal: None,
            questions: vec![],
            fail_with: Some(StoreError::unavailable("connection reset")),
        }));
        let err = handler
            .handle(ListProposalQuestionsQuery::new("p-1"))
            .await
            .unwrap_err();
        assert!(err.kind().is_retryable());
    }
}
