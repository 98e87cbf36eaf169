//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full service: health probe, proposal routes and
//! the tracing, timeout and CORS layers.

pub mod proposals;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AllowedOrigins, ServerConfig};

// Re-export key types for convenience
pub use proposals::proposals_router;
pub use proposals::ProposalsAppState;

/// Builds the complete application router.
///
/// When the request timeout fires the request future is dropped, which
/// cancels any store queries still in flight.
pub fn app_router(state: ProposalsAppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(proposals::health))
        .nest("/api/proposals", proposals_router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(build_cors_layer(config)),
        )
}

/// Any origin when none are configured.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match config.allowed_origins() {
        AllowedOrigins::Any => cors.allow_origin(AllowOrigin::any()),
        AllowedOrigins::List(origins) => {
            let origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(origins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::SystemClock;
    use crate::adapters::generation::PlaceholderGenerationBackend;
    use crate::adapters::store::{InMemoryRecordStore, StoreProposalReader};
    use crate::application::{
        GenerateCustomIdHandler, GenerateProposalHandler, ListProposalQuestionsHandler,
        ListProposalsHandler, ProposalAggregator,
    };
    use crate::config::TableConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(tables: TableConfig) -> ProposalsAppState {
        let reader = Arc::new(StoreProposalReader::new(
            Arc::new(InMemoryRecordStore::new()),
            tables,
        ));
        ProposalsAppState {
            generate: Arc::new(GenerateProposalHandler::new(
                ProposalAggregator::new(reader.clone(), 4),
                Arc::new(PlaceholderGenerationBackend::new("placeholder-bucket")),
            )),
            custom_id: Arc::new(GenerateCustomIdHandler::new(Arc::new(SystemClock), "1CH")),
            list: Arc::new(ListProposalsHandler::new(reader.clone())),
            questions: Arc::new(ListProposalQuestionsHandler::new(reader)),
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = app_router(state(TableConfig::default()), &ServerConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn unconfigured_tables_are_reported_per_request() {
        let app = app_router(state(TableConfig::default()), &ServerConfig::default());
        let request = Request::builder()
            .method("POST")
            .uri("/api/proposals/generate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"proposalId":"p-1"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errorKind"], "CONFIGURATION_ERROR");
        assert_eq!(
            json["message"],
            "Configuration error: Missing table name variables: PROPOSAL_TABLE, SECTION_TABLE, QUESTION_TABLE"
        );
    }

    #[test]
    fn cors_layer_builds_with_explicit_origins() {
        let config = ServerConfig {
            allowed_origins: Some("http://localhost:5173, https://app.example.com".to_string()),
            ..Default::default()
        };
        let _layer = build_cors_layer(&config);
    }
}
