//! Proposal module - stored record shapes, the aggregated document, prompt
//! rendering, and the business identifier format.

mod body;
mod custom_id;
mod document;
mod prompt;
mod records;

pub use body::ProposalBody;
pub use custom_id::CustomProposalId;
pub use document::{sort_by_order, AggregatedProposalDocument, SectionWithQuestions};
pub use prompt::{build_prompt, document_location, placeholder_summary};
pub use records::{Proposal, ProposalSection, Question};
