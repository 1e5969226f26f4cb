//! Validated, ordered question catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::question::{Question, QuestionType};

/// Which set of phases a catalog covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFlavor {
    /// Tax questions only.
    TaxOnly,
    /// Tax questions followed by the property takeoffs phase.
    #[default]
    TaxAndTakeoffs,
}

impl CatalogFlavor {
    pub fn includes_takeoffs(&self) -> bool {
        matches!(self, Self::TaxAndTakeoffs)
    }
}

/// Reasons a question list cannot form a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one question")]
    Empty,

    #[error("First question must be a confirmation, found {found:?}")]
    FirstNotConfirmation { found: QuestionType },

    #[error("Last question must be a summary or terminal marker, found {found:?}")]
    LastNotCompletion { found: QuestionType },

    #[error("Duplicate question id '{0}'")]
    DuplicateId(String),

    #[error("Question '{0}' requires at least one option")]
    MissingOptions(String),

    #[error("Question '{0}' cannot write to a response field")]
    UnexpectedTargetField(String),
}

/// An ordered question list that satisfies the dialogue invariants.
///
/// # Invariants
///
/// - Non-empty
/// - First question is a confirmation (the greeting)
/// - Last question is a summary or terminal marker
/// - Question ids are unique
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    flavor: CatalogFlavor,
}

impl Catalog {
    /// Validates and wraps a question list.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found, checking structure before
    /// individual questions.
    pub fn new(questions: Vec<Question>, flavor: CatalogFlavor) -> Result<Self, CatalogError> {
        let first = questions.first().ok_or(CatalogError::Empty)?;
        if first.question_type() != QuestionType::Confirmation {
            return Err(CatalogError::FirstNotConfirmation {
                found: first.question_type(),
            });
        }

        // non-empty was checked above
        let last = &questions[questions.len() - 1];
        if !last.question_type().is_completion_marker() {
            return Err(CatalogError::LastNotCompletion {
                found: last.question_type(),
            });
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(CatalogError::DuplicateId(question.id().to_string()));
            }
            if question.question_type().requires_options() && question.options().is_empty() {
                return Err(CatalogError::MissingOptions(question.id().to_string()));
            }
            if question.target_field().is_some() && !question.question_type().may_target_field() {
                return Err(CatalogError::UnexpectedTargetField(question.id().to_string()));
            }
        }

        Ok(Self { questions, flavor })
    }

    pub fn flavor(&self) -> CatalogFlavor {
        self.flavor
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The opening confirmation question.
    pub fn greeting(&self) -> &Question {
        // non-empty by construction
        &self.questions[0]
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Finds a question by id.
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Distinct target fields in catalog order.
    pub fn target_fields(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .filter_map(Question::target_field)
            .filter(|field| seen.insert(*field))
            .collect()
    }
}
