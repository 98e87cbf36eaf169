//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod proposal;

pub use proposal::{
    // Pipeline
    AggregationError, GenerateProposalCommand, GenerateProposalHandler, GenerationResult,
    ProposalAggregator,
    // Identifiers
    CustomIdResult, GenerateCustomIdCommand, GenerateCustomIdHandler,
    // Listing
    ListProposalsError, ListProposalsHandler, ListProposalsQuery, ProposalSummary,
    ListProposalQuestionsError, ListProposalQuestionsHandler, ListProposalQuestionsQuery,
    ProposalQuestions,
};
