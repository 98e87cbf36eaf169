//! Prometheus Proposals server binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prometheus_proposals::adapters::http::{app_router, ProposalsAppState};
use prometheus_proposals::adapters::{
    InMemoryRecordStore, PlaceholderGenerationBackend, PostgresRecordStore, StoreProposalReader,
    SystemClock,
};
use prometheus_proposals::application::{
    GenerateCustomIdHandler, GenerateProposalHandler, ListProposalQuestionsHandler,
    ListProposalsHandler, ProposalAggregator,
};
use prometheus_proposals::config::{AppConfig, LogFormat, StoreBackend};
use prometheus_proposals::ports::RecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = build_store(&config).await?;
    if let Err(missing) = config.tables.ensure_complete() {
        warn!(error = %missing, "Table names incomplete; generation requests will fail until configured");
    }

    let reader = Arc::new(
        StoreProposalReader::new(store, config.tables.clone())
            .with_call_timeout(config.store.call_timeout()),
    );
    let aggregator = ProposalAggregator::new(reader.clone(), config.store.max_concurrent_queries);
    let backend = Arc::new(PlaceholderGenerationBackend::new(
        config.generation.document_bucket.clone(),
    ));

    let state = ProposalsAppState {
        generate: Arc::new(GenerateProposalHandler::new(aggregator, backend)),
        custom_id: Arc::new(GenerateCustomIdHandler::new(
            Arc::new(SystemClock),
            config.generation.org_prefix.clone(),
        )),
        list: Arc::new(ListProposalsHandler::new(reader.clone())),
        questions: Arc::new(ListProposalQuestionsHandler::new(reader)),
    };
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    info!(%addr, request_timeout_ms = config.server.request_timeout_ms, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// JSON or human-readable output per `server.log_format`. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn RecordStore>, Box<dyn std::error::Error>> {
    match config.store.backend {
        StoreBackend::Postgres => {
            let store = PostgresRecordStore::connect(&config.store).await?;
            info!("Connected to PostgreSQL record store");
            Ok(Arc::new(store))
        }
        StoreBackend::InMemory => {
            let store = match &config.store.seed_file {
                Some(path) => {
                    let store = InMemoryRecordStore::from_seed_file(path).await?;
                    info!(seed_file = %path.display(), "Loaded in-memory store from seed file");
                    store
                }
                None => InMemoryRecordStore::new(),
            };
            Ok(Arc::new(store))
        }
    }
}
