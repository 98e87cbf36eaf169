//! Proposal handlers - generation pipeline, identifier generation and listing queries.

mod aggregate_proposal;
mod generate_custom_id;
mod generate_proposal;
mod list_proposal_questions;
mod list_proposals;

pub use aggregate_proposal::{AggregationError, ProposalAggregator};
pub use generate_custom_id::{
    CustomIdResult, GenerateCustomIdCommand, GenerateCustomIdHandler, MISSING_INPUTS_MESSAGE,
};
pub use generate_proposal::{GenerateProposalCommand, GenerateProposalHandler, GenerationResult};
pub use list_proposal_questions::{
    ListProposalQuestionsError, ListProposalQuestionsHandler, ListProposalQuestionsQuery,
    ProposalQuestions,
};
pub use list_proposals::{
    ListProposalsError, ListProposalsHandler, ListProposalsQuery, ProposalSummary,
};
