//! Axum router configuration for proposal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    generate_custom_id, generate_proposal, list_proposal_questions, list_proposals,
    ProposalsAppState,
};

/// Create the proposals API router.
///
/// # Routes
///
/// - `GET /` - List an owner's proposals (query: owner, status, search)
/// - `POST /generate` - Run the generation pipeline for a proposal
/// - `POST /custom-id` - Generate a business identifier
/// - `GET /:proposal_id/questions` - Questions of a proposal with answer counts
pub fn proposals_routes() -> Router<ProposalsAppState> {
    Router::new()
        .route("/", get(list_proposals))
        .route("/generate", post(generate_proposal))
        .route("/custom-id", post(generate_custom_id))
        .route("/:proposal_id/questions", get(list_proposal_questions))
}

/// Create the complete proposals module router.
///
/// Suitable for mounting at `/api/proposals`.
pub fn proposals_router() -> Router<ProposalsAppState> {
    proposals_routes()
}
