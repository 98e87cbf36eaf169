//! Generation and identifier configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Bucket that generated documents are addressed under
    #[serde(default = "default_document_bucket")]
    pub document_bucket: String,

    /// Organisation prefix of business identifiers
    #[serde(default = "default_org_prefix")]
    pub org_prefix: String,
}

impl GenerationConfig {
    /// Validate generation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.document_bucket.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GENERATION__DOCUMENT_BUCKET"));
        }
        if self.org_prefix.trim().is_empty() || self.org_prefix.contains('_') {
            return Err(ValidationError::InvalidOrgPrefix);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            document_bucket: default_document_bucket(),
            org_prefix: default_org_prefix(),
        }
    }
}

fn default_document_bucket() -> String {
    "placeholder-bucket".to_string()
}

fn default_org_prefix() -> String {
    "1CH".to_string()
}
