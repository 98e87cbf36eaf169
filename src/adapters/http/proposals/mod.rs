//! Proposals HTTP adapter - REST API for the generation pipeline,
//! identifier generation and listing.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::{health, ProposalsAppState};
pub use routes::proposals_router;
