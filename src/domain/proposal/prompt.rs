//! Pure renderers over an aggregated proposal.
//!
//! The prompt is the contract boundary to content generation, so rendering is
//! deterministic: equal documents always produce byte-identical text.

use super::AggregatedProposalDocument;
use crate::domain::foundation::ProposalId;

/// Renders the generation prompt.
///
/// A header naming project and customer, then one numbered line per section
/// with its title and question count.
pub fn build_prompt(document: &AggregatedProposalDocument) -> String {
    let proposal = &document.proposal;
    let mut lines = vec![
        format!(
            "Generate an executive summary for a proposal titled \"{}\"",
            proposal.project_name
        ),
        format!("for customer \"{}\".", proposal.customer_name),
        format!("It has {} sections:", document.section_count()),
    ];

    for (index, entry) in document.sections.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({} questions)",
            index + 1,
            entry.section.title,
            entry.questions.len()
        ));
    }

    lines.join("\n")
}

/// Summary text standing in for model output.
pub fn placeholder_summary(document: &AggregatedProposalDocument) -> String {
    format!(
        "Placeholder AI Content based on: {}.\nTotal sections: {}.\nFirst section: {}.\nMandatory questions: {}.",
        document.proposal.project_name,
        document.section_count(),
        document.first_section_title().unwrap_or("N/A"),
        document.mandatory_question_count(),
    )
}

/// Location a generated document for `proposal_id` is written to.
pub fn document_location(bucket: &str, proposal_id: &ProposalId) -> String {
    format!("s3://{}/generated/{}.pdf", bucket, proposal_id)
}
