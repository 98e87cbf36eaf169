//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `store` - Record stores (in-memory, PostgreSQL) and the typed proposal reader
//! - `generation` - Generation backends (placeholder)
//! - `clock` - System and fixed clocks
//! - `http` - REST API (axum)

pub mod clock;
pub mod generation;
pub mod http;
pub mod store;

pub use clock::{FixedClock, SystemClock};
pub use generation::PlaceholderGenerationBackend;
pub use store::{InMemoryRecordStore, PostgresRecordStore, SeedError, StoreProposalReader};
