//! Generation backend adapters.

mod placeholder;

pub use placeholder::{PlaceholderGenerationBackend, PLACEHOLDER_MESSAGE};
