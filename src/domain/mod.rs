//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `proposal` - Proposal, section and question records plus the aggregated document

pub mod foundation;
pub mod proposal;
