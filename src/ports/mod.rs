//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `RecordStore` - Raw point lookups and secondary-index queries
//! - `ProposalReader` - Typed reads of proposals, sections and questions
//!
//! ## Generation Ports
//!
//! - `GenerationBackend` - Content generation from an aggregated proposal
//! - `Clock` - Calendar date for business identifiers

mod clock;
mod generation_backend;
mod proposal_reader;
mod record_store;

pub use clock::Clock;
pub use generation_backend::{GeneratedContent, GenerationBackend, GenerationError};
pub use proposal_reader::ProposalReader;
pub use record_store::{IndexQuery, RecordStore, StoreError};
