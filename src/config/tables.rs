//! Table and secondary-index names in the external store

use serde::Deserialize;

use super::error::ValidationError;

/// Table and index identifiers.
///
/// Table names are deployment-specific and have no defaults; the pipeline
/// checks them on every invocation and reports all missing names together.
/// Index names default to the names the managed schema generates.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Proposal table name
    pub proposal_table: Option<String>,

    /// ProposalSection table name
    pub section_table: Option<String>,

    /// Question table name
    pub question_table: Option<String>,

    /// Section index keyed by `proposalId`
    #[serde(default = "default_section_by_proposal_index")]
    pub section_by_proposal_index: String,

    /// Question index keyed by `proposalSectionId`
    #[serde(default = "default_question_by_section_index")]
    pub question_by_section_index: String,

    /// Question index keyed by the denormalized `proposalId`
    #[serde(default = "default_question_by_proposal_index")]
    pub question_by_proposal_index: String,

    /// Proposal index keyed by `owner`
    #[serde(default = "default_proposal_by_owner_index")]
    pub proposal_by_owner_index: String,
}

/// Which table a read targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Proposal,
    Section,
    Question,
}

impl Table {
    /// Configuration key reported when the table name is missing.
    pub fn config_key(&self) -> &'static str {
        match self {
            Table::Proposal => "PROPOSAL_TABLE",
            Table::Section => "SECTION_TABLE",
            Table::Question => "QUESTION_TABLE",
        }
    }
}

impl TableConfig {
    /// Creates a config with all three tables named.
    pub fn named(
        proposal_table: impl Into<String>,
        section_table: impl Into<String>,
        question_table: impl Into<String>,
    ) -> Self {
        Self {
            proposal_table: Some(proposal_table.into()),
            section_table: Some(section_table.into()),
            question_table: Some(question_table.into()),
            ..Default::default()
        }
    }

    /// Returns the configured name of `table`, if present and non-blank.
    pub fn table(&self, table: Table) -> Option<&str> {
        let name = match table {
            Table::Proposal => self.proposal_table.as_deref(),
            Table::Section => self.section_table.as_deref(),
            Table::Question => self.question_table.as_deref(),
        };
        name.map(str::trim).filter(|n| !n.is_empty())
    }

    /// Configuration keys of every missing table name, then every blank
    /// index name, in declaration order.
    pub fn missing(&self) -> Vec<String> {
        let tables = [Table::Proposal, Table::Section, Table::Question]
            .into_iter()
            .filter(|t| self.table(*t).is_none())
            .map(|t| t.config_key());
        let indexes = self
            .indexes()
            .into_iter()
            .filter(|(_, name)| name.trim().is_empty())
            .map(|(key, _)| key);
        tables.chain(indexes).map(str::to_string).collect()
    }

    fn indexes(&self) -> [(&'static str, &str); 4] {
        [
            ("SECTION_BY_PROPOSAL_INDEX", self.section_by_proposal_index.as_str()),
            ("QUESTION_BY_SECTION_INDEX", self.question_by_section_index.as_str()),
            ("QUESTION_BY_PROPOSAL_INDEX", self.question_by_proposal_index.as_str()),
            ("PROPOSAL_BY_OWNER_INDEX", self.proposal_by_owner_index.as_str()),
        ]
    }

    /// Fails with every missing table and index name at once.
    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingTables(missing))
        }
    }

    /// Checks that every configured table name can be used as a quoted SQL
    /// identifier (postgres backend).
    pub fn validate_sql_identifiers(&self) -> Result<(), ValidationError> {
        for table in [Table::Proposal, Table::Section, Table::Question] {
            if let Some(name) = self.table(table) {
                if !is_quotable_identifier(name) {
                    return Err(ValidationError::InvalidTableName(name.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            proposal_table: None,
            section_table: None,
            question_table: None,
            section_by_proposal_index: default_section_by_proposal_index(),
            question_by_section_index: default_question_by_section_index(),
            question_by_proposal_index: default_question_by_proposal_index(),
            proposal_by_owner_index: default_proposal_by_owner_index(),
        }
    }
}

/// Postgres limits identifiers to 63 bytes; quotes and NULs cannot be escaped safely.
fn is_quotable_identifier(name: &str) -> bool {
    !name.is_empty() && name.len() <= 63 && !name.contains('"') && !name.contains('\0')
}

fn default_section_by_proposal_index() -> String {
    "byProposalId".to_string()
}

fn default_question_by_section_index() -> String {
    "byProposalSectionId".to_string()
}

fn default_question_by_proposal_index() -> String {
    "byProposalId".to_string()
}

fn default_proposal_by_owner_index() -> String {
    "byOwner".to_string()
}
