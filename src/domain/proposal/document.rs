//! Aggregated proposal document - the pipeline's in-memory join of a
//! proposal with its ordered sections and questions.

use serde::Serialize;

use super::{Proposal, ProposalBody, ProposalSection, Question};
use crate::domain::foundation::ProposalId;

/// A section decorated with its ordered questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionWithQuestions {
    #[serde(flatten)]
    pub section: ProposalSection,

    pub questions: Vec<Question>,
}

impl SectionWithQuestions {
    pub fn mandatory_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_mandatory).count()
    }
}

/// Proposal metadata, parsed body and ordered section tree.
///
/// Never persisted. Sections are sorted by `order`, and questions are sorted
/// by `order` within their section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedProposalDocument {
    pub proposal: Proposal,

    pub body: Option<ProposalBody>,

    pub sections: Vec<SectionWithQuestions>,
}

impl AggregatedProposalDocument {
    pub fn proposal_id(&self) -> &ProposalId {
        &self.proposal.id
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Mandatory questions across all sections.
    pub fn mandatory_question_count(&self) -> usize {
        self.sections.iter().map(SectionWithQuestions::mandatory_count).sum()
    }

    pub fn first_section_title(&self) -> Option<&str> {
        self.sections.first().map(|s| s.section.title.as_str())
    }

    /// Returns true if the body was present but could not be parsed.
    pub fn is_degraded(&self) -> bool {
        self.body.as_ref().is_some_and(ProposalBody::is_degraded)
    }
}

/// Sorts records ascending by their `order` key, keeping store order for ties.
pub fn sort_by_order<T>(items: &mut [T], order: impl Fn(&T) -> i32) {
    // slice::sort_by_key is stable
    items.sort_by_key(order);
}
