//! Generation Backend Port - turns an aggregated proposal into generated
//! content and a document location.
//!
//! The aggregator and the prompt contract do not depend on how generation
//! happens. Today the only backend is a placeholder summary; a model-backed
//! implementation replaces only this port's adapter.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::proposal::AggregatedProposalDocument;

/// Port for proposal content generation.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generates content for `document` from the rendered `prompt`.
    async fn generate(
        &self,
        document: &AggregatedProposalDocument,
        prompt: &str,
    ) -> Result<GeneratedContent, GenerationError>;

    /// Short backend name for logging.
    fn name(&self) -> &'static str;
}

/// Output of a generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    /// Generated proposal text.
    pub text: String,
    /// Where the rendered document lives (or will live).
    pub document_url: String,
    /// Human-readable status line for the caller.
    pub message: String,
}

/// Errors that can occur during generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Backend service could not be reached.
    #[error("Generation backend unavailable: {0}")]
    Unavailable(String),

    /// Backend rejected the prompt.
    #[error("Prompt rejected: {0}")]
    Rejected(String),

    /// Internal generation error.
    #[error("Generation failed: {0}")]
    Internal(String),
}
