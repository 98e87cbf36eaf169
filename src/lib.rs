//! Prometheus Proposals - proposal management backend.
//!
//! Aggregates a proposal with its ordered sections and questions, renders a
//! generation prompt and runs a pluggable generation backend. Also generates
//! business identifiers and lists an owner's proposals.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
