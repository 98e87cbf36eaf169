//! Record store adapters.
//!
//! - `InMemoryRecordStore` - Tests and development, optionally seeded from JSON
//! - `PostgresRecordStore` - One JSONB table per entity
//! - `StoreProposalReader` - Typed `ProposalReader` over either store

mod in_memory;
mod postgres;
mod proposal_reader;

pub use in_memory::{InMemoryRecordStore, SeedError};
pub use postgres::PostgresRecordStore;
pub use proposal_reader::StoreProposalReader;
