//! Strongly-typed identifier value objects.
//!
//! Store identifiers are opaque strings assigned by the external store, so
//! these wrap `String` rather than `Uuid`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, returning error if empty or blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a proposal record.
    ProposalId,
    "proposal_id"
);

string_id!(
    /// Identifier of a proposal section record.
    SectionId,
    "section_id"
);

string_id!(
    /// Identifier of a question record.
    QuestionId,
    "question_id"
);

string_id!(
    /// Owner identifier (the authenticated user's id from the auth provider).
    OwnerId,
    "owner"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposal_id_rejects_empty() {
        assert!(ProposalId::new("").is_err());
        assert!(ProposalId::new("   ").is_err());
    }

    #[test]
    fn proposal_id_keeps_value_verbatim() {
        let id = ProposalId::new("p-123").unwrap();
        assert_eq!(id.as_str(), "p-123");
        assert_eq!(format!("{}", id), "p-123");
    }

    #[test]
    fn empty_owner_names_field() {
        let err = OwnerId::new("").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("owner"));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = SectionId::new("s-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"s-1\"");
        let back: SectionId = serde_json::from_str("\"s-1\"").unwrap();
        assert_eq!(back, id);
    }
}
