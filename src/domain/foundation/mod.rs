//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the proposal domain.

mod errors;
mod ids;
mod proposal_status;
mod timestamp;

pub use errors::{ErrorKind, ValidationError};
pub use ids::{OwnerId, ProposalId, QuestionId, SectionId};
pub use proposal_status::ProposalStatus;
pub use timestamp::Timestamp;
