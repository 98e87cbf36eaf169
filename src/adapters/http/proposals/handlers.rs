//! HTTP handlers for proposal endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::application::{
    GenerateCustomIdHandler, GenerateProposalHandler, GenerationResult,
    ListProposalQuestionsHandler, ListProposalQuestionsQuery, ListProposalsHandler,
};
use crate::domain::foundation::ErrorKind;

use super::dto::{
    CustomIdRequest, ErrorResponse, GenerateProposalRequest, ListProposalsParams,
    ProposalListResponse,
};

/// Application state for proposal endpoints.
#[derive(Clone)]
pub struct ProposalsAppState {
    pub generate: Arc<GenerateProposalHandler>,
    pub custom_id: Arc<GenerateCustomIdHandler>,
    pub list: Arc<ListProposalsHandler>,
    pub questions: Arc<ListProposalQuestionsHandler>,
}

/// Run the generation pipeline.
///
/// POST /api/proposals/generate
///
/// Always 200; failures are reported in the body.
pub async fn generate_proposal(
    State(state): State<ProposalsAppState>,
    payload: Result<Json<GenerateProposalRequest>, JsonRejection>,
) -> Json<GenerationResult> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Malformed generate request");
            return Json(GenerationResult::failure(
                format!("Invalid request body: {}", rejection.body_text()),
                ErrorKind::InvalidRequest,
            ));
        }
    };

    Json(state.generate.handle(request.into()).await)
}

/// Generate a custom proposal id.
///
/// POST /api/proposals/custom-id
pub async fn generate_custom_id(
    State(state): State<ProposalsAppState>,
    payload: Result<Json<CustomIdRequest>, JsonRejection>,
) -> Response {
    // A malformed body is treated like missing inputs
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let result = state.custom_id.handle(request.into());

    let status = if result.error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(result)).into_response()
}

/// List an owner's proposals.
///
/// GET /api/proposals?owner=user-1&status=DRAFT&search=portal
pub async fn list_proposals(
    State(state): State<ProposalsAppState>,
    Query(params): Query<ListProposalsParams>,
) -> Response {
    match state.list.handle(params.into()).await {
        Ok(items) => (StatusCode::OK, Json(ProposalListResponse::from(items))).into_response(),
        Err(e) => {
            let kind = e.kind();
            warn!(error = %e, kind = %kind, "Listing proposals failed");
            (status_for(kind), Json(ErrorResponse::new(e.to_string(), kind))).into_response()
        }
    }
}

/// List a proposal's questions with answer progress.
///
/// GET /api/proposals/:proposal_id/questions
pub async fn list_proposal_questions(
    State(state): State<ProposalsAppState>,
    Path(proposal_id): Path<String>,
) -> Response {
    match state
        .questions
        .handle(ListProposalQuestionsQuery::new(proposal_id))
        .await
    {
        Ok(questions) => (StatusCode::OK, Json(questions)).into_response(),
        Err(e) => {
            let kind = e.kind();
            warn!(error = %e, kind = %kind, "Listing proposal questions failed");
            (status_for(kind), Json(ErrorResponse::new(e.to_string(), kind))).into_response()
        }
    }
}

/// Liveness probe.
///
/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::ConfigurationError | ErrorKind::DecodeError | ErrorKind::GenerationFailed => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
