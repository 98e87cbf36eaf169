//! Placeholder generation backend.
//!
//! Stands in for model-backed generation: summarizes the aggregated document
//! and reports the location a generated document would be written to.
//! Deterministic and side-effect free.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::proposal::{document_location, placeholder_summary, AggregatedProposalDocument};
use crate::ports::{GeneratedContent, GenerationBackend, GenerationError};

/// Status line reported on success.
pub const PLACEHOLDER_MESSAGE: &str = "Proposal data fetched and processed (placeholder generation).";

/// Placeholder implementation of GenerationBackend.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerationBackend {
    bucket: String,
}

impl PlaceholderGenerationBackend {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl GenerationBackend for PlaceholderGenerationBackend {
    async fn generate(
        &self,
        document: &AggregatedProposalDocument,
        prompt: &str,
    ) -> Result<GeneratedContent, GenerationError> {
        debug!(prompt_len = prompt.len(), "Prompt built (placeholder generation)");

        Ok(GeneratedContent {
            text: placeholder_summary(document),
            document_url: document_location(&self.bucket, document.proposal_id()),
            message: PLACEHOLDER_MESSAGE.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProposalId, Timestamp};
    use crate::domain::proposal::Proposal;

    fn document() -> AggregatedProposalDocument {
        AggregatedProposalDocument {
            proposal: Proposal {
                id: ProposalId::new("p-7").unwrap(),
                owner: None,
                custom_proposal_id: "1CH_CONTO_Apollo_03-Jan-24".to_string(),
                project_name: "Apollo".to_string(),
                customer_name: "Contoso".to_string(),
                status: None,
                editor_content: None,
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            },
            body: None,
            sections: vec![],
        }
    }

    #[tokio::test]
    async fn reports_summary_and_location() {
        let backend = PlaceholderGenerationBackend::new("proposal-docs");
        let content = backend.generate(&document(), "prompt").await.unwrap();

        assert_eq!(content.document_url, "s3://proposal-docs/generated/p-7.pdf");
        assert!(content.text.starts_with("Placeholder AI Content based on: Apollo."));
        assert!(content.text.contains("First section: N/A."));
        assert_eq!(content.message, PLACEHOLDER_MESSAGE);
        assert_eq!(backend.name(), "placeholder");
    }
}
