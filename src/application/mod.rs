//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Generation and identifier requests are commands; listing proposals and their questions are queries.

pub mod handlers;

pub use handlers::{
    AggregationError, CustomIdResult, GenerateCustomIdCommand, GenerateCustomIdHandler,
    GenerateProposalCommand, GenerateProposalHandler, GenerationResult, ListProposalsError,
    ListProposalQuestionsError, ListProposalQuestionsHandler, ListProposalQuestionsQuery,
    ListProposalsHandler, ListProposalsQuery, ProposalAggregator, ProposalQuestions,
    ProposalSummary,
};
