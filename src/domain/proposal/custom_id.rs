//! Human-assigned business identifier for proposals.
//!
//! Format: `<org>_<CUSTOMER-CODE>_<ProjectToken>_<DD-Mon-YY>`, for example
//! `1CH_NORTH_AcmePortal_15-May-25`.

use chrono::NaiveDate;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Characters of the trimmed customer name that feed the customer code.
const CUSTOMER_CODE_CHARS: usize = 5;

/// Maximum length of the project token.
const PROJECT_TOKEN_MAX: usize = 20;

/// A generated business identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomProposalId(String);

impl CustomProposalId {
    /// Builds the identifier for a project/customer pair on the given date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if either name is blank.
    pub fn generate(
        org_prefix: &str,
        project_name: &str,
        customer_name: &str,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if project_name.trim().is_empty() {
            return Err(ValidationError::empty_field("projectName"));
        }
        if customer_name.trim().is_empty() {
            return Err(ValidationError::empty_field("customerName"));
        }

        Ok(Self(format!(
            "{}_{}_{}_{}",
            org_prefix,
            customer_code(customer_name),
            project_token(project_name),
            date.format("%d-%b-%y"),
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First five characters, uppercased, reduced to `[A-Z0-9]`.
fn customer_code(customer_name: &str) -> String {
    customer_name
        .trim()
        .chars()
        .take(CUSTOMER_CODE_CHARS)
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Reduced to `[A-Za-z0-9_-]`, then truncated.
fn project_token(project_name: &str) -> String {
    project_name
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(PROJECT_TOKEN_MAX)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_15_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    }

    #[test]
    fn generates_documented_example() {
        let id = CustomProposalId::generate("1CH", "Acme Portal!!", "Northwind", may_15_2025())
            .unwrap();
        assert_eq!(id.as_str(), "1CH_NORTH_AcmePortal_15-May-25");
    }

    #[test]
    fn customer_code_drops_symbols_within_first_five_chars() {
        assert_eq!(customer_code("  a-b c.d "), "ABC");
        assert_eq!(customer_code("IBM"), "IBM");
        assert_eq!(customer_code("3M Company"), "3MCO");
    }

    #[test]
    fn project_token_keeps_dash_and_underscore_and_truncates() {
        assert_eq!(project_token("my_project-v2 (beta)"), "my_project-v2beta");
        assert_eq!(
            project_token("An Extremely Long Project Name Indeed"),
            "AnExtremelyLongProje"
        );
    }

    #[test]
    fn pads_single_digit_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let id = CustomProposalId::generate("1CH", "Apollo", "Contoso", date).unwrap();
        assert_eq!(id.as_str(), "1CH_CONTO_Apollo_03-Jan-24");
    }

    #[test]
    fn blank_inputs_are_rejected() {
        assert_eq!(
            CustomProposalId::generate("1CH", "  ", "Northwind", may_15_2025()),
            Err(ValidationError::empty_field("projectName"))
        );
        assert_eq!(
            CustomProposalId::generate("1CH", "Portal", "", may_15_2025()),
            Err(ValidationError::empty_field("customerName"))
        );
    }

    #[test]
    fn uses_configured_org_prefix() {
        let id = CustomProposalId::generate("ACME", "Portal", "Northwind", may_15_2025()).unwrap();
        assert!(id.as_str().starts_with("ACME_NORTH_"));
    }
}
