//! Parsed proposal body (rich-text editor content).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Best-effort parse of a proposal's serialized editor content.
///
/// Malformed content never fails aggregation; it is kept verbatim with the
/// parser's error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProposalBody {
    /// Content parsed as JSON.
    Structured { content: Value },

    /// Content that failed to parse.
    Degraded {
        raw: String,
        #[serde(rename = "parseError")]
        parse_error: String,
    },
}

impl ProposalBody {
    /// Parses serialized editor content.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(content) => ProposalBody::Structured { content },
            Err(e) => ProposalBody::Degraded {
                raw: raw.to_string(),
                parse_error: e.to_string(),
            },
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ProposalBody::Degraded { .. })
    }

    /// Returns the parsed content, if any.
    pub fn content(&self) -> Option<&Value> {
        match self {
            ProposalBody::Structured { content } => Some(content),
            ProposalBody::Degraded { .. } => None,
        }
    }
}
