//! Question descriptors and the prompt view handed to presenters.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::dialogue::ResponseSnapshot;

/// Kind of input a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    FreeText,
    Numeric,
    Date,
    SingleSelect,
    Confirmation,
    /// Completion marker that recaps collected answers.
    Summary,
    /// Completion marker without a recap header of its own.
    Terminal,
}

impl QuestionType {
    /// Returns true for the types that end the dialogue when reached.
    pub fn is_completion_marker(&self) -> bool {
        matches!(self, Self::Summary | Self::Terminal)
    }

    /// Returns true if the presenter must offer a fixed option list.
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::SingleSelect | Self::Confirmation)
    }

    /// Returns true if answers to this type may be written to the store.
    pub fn may_target_field(&self) -> bool {
        !matches!(self, Self::Confirmation | Self::Summary | Self::Terminal)
    }
}

/// Display grouping for questions. Has no effect on sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Tax,
    PropertyTakeoffs,
}

impl Phase {
    /// Returns a short label for section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tax => "Tax Information",
            Self::PropertyTakeoffs => "Property Takeoffs",
        }
    }
}

type Predicate = dyn Fn(&ResponseSnapshot) -> bool + Send + Sync;

/// Predicate over the accumulated answers deciding whether a question is shown.
///
/// A question carrying a condition is presented only while the condition
/// holds at the moment the engine reaches it.
#[derive(Clone)]
pub struct SkipCondition {
    description: String,
    predicate: Arc<Predicate>,
}

impl SkipCondition {
    /// Wraps an arbitrary predicate.
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&ResponseSnapshot) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Holds when `field` has been answered at all.
    pub fn answered(field: &'static str) -> Self {
        Self::new(format!("{} answered", field), move |answers| {
            answers.contains(field)
        })
    }

    /// Holds when `field` starts with `prefix`, ignoring case.
    pub fn starts_with(field: &'static str, prefix: &'static str) -> Self {
        let needle = prefix.to_lowercase();
        Self::new(format!("{} starts with '{}'", field, prefix), move |answers| {
            answers
                .get(field)
                .map(|value| value.trim().to_lowercase().starts_with(&needle))
                .unwrap_or(false)
        })
    }

    /// Holds when `field` contains `needle`, ignoring case.
    pub fn contains(field: &'static str, needle: &'static str) -> Self {
        let lowered = needle.to_lowercase();
        Self::new(format!("{} contains '{}'", field, needle), move |answers| {
            answers
                .get(field)
                .map(|value| value.to_lowercase().contains(&lowered))
                .unwrap_or(false)
        })
    }

    /// Holds when `field` equals `expected` exactly.
    pub fn equals(field: &'static str, expected: &'static str) -> Self {
        Self::new(format!("{} == '{}'", field, expected), move |answers| {
            answers.get(field) == Some(expected)
        })
    }

    /// Holds when both conditions hold.
    pub fn and(self, other: SkipCondition) -> Self {
        let description = format!("({}) and ({})", self.description, other.description);
        Self::new(description, move |answers| {
            self.evaluate(answers) && other.evaluate(answers)
        })
    }

    /// Holds when either condition holds.
    pub fn or(self, other: SkipCondition) -> Self {
        let description = format!("({}) or ({})", self.description, other.description);
        Self::new(description, move |answers| {
            self.evaluate(answers) || other.evaluate(answers)
        })
    }

    /// Holds when this condition does not.
    pub fn negate(self) -> Self {
        let description = format!("not ({})", self.description);
        Self::new(description, move |answers| !self.evaluate(answers))
    }

    /// Evaluates the predicate against a snapshot.
    pub fn evaluate(&self, answers: &ResponseSnapshot) -> bool {
        (self.predicate)(answers)
    }

    /// Human-readable form used in logs.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for SkipCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SkipCondition").field(&self.description).finish()
    }
}

/// Immutable question descriptor.
///
/// # Invariants
///
/// - Confirmation, summary and terminal questions have no target field
/// - Select and confirmation questions carry at least one option
///
/// Both are checked when questions are assembled into a `Catalog`.
#[derive(Debug, Clone)]
pub struct Question {
    id: String,
    text: String,
    question_type: QuestionType,
    target_field: Option<String>,
    options: Vec<String>,
    allows_zero: bool,
    skip_condition: Option<SkipCondition>,
    phase: Phase,
}

impl Question {
    fn base(id: impl Into<String>, text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type,
            target_field: None,
            options: Vec::new(),
            allows_zero: false,
            skip_condition: None,
            phase: Phase::Tax,
        }
    }

    fn answered_into(mut self, field: impl Into<String>) -> Self {
        self.target_field = Some(field.into());
        self
    }

    pub fn free_text(id: impl Into<String>, text: impl Into<String>, field: impl Into<String>) -> Self {
        Self::base(id, text, QuestionType::FreeText).answered_into(field)
    }

    pub fn numeric(id: impl Into<String>, text: impl Into<String>, field: impl Into<String>) -> Self {
        Self::base(id, text, QuestionType::Numeric).answered_into(field)
    }

    pub fn date(id: impl Into<String>, text: impl Into<String>, field: impl Into<String>) -> Self {
        Self::base(id, text, QuestionType::Date).answered_into(field)
    }

    pub fn single_select<I, S>(
        id: impl Into<String>,
        text: impl Into<String>,
        field: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::base(id, text, QuestionType::SingleSelect)
            .answered_into(field)
            .with_options(options)
    }

    pub fn confirmation<I, S>(id: impl Into<String>, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::base(id, text, QuestionType::Confirmation).with_options(options)
    }

    pub fn summary(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::base(id, text, QuestionType::Summary)
    }

    pub fn terminal(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::base(id, text, QuestionType::Terminal)
    }

    /// Replaces the option list.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Marks a numeric answer of zero as acceptable.
    pub fn allowing_zero(mut self) -> Self {
        self.allows_zero = true;
        self
    }

    /// Only present the question while `condition` holds.
    pub fn shown_when(mut self, condition: SkipCondition) -> Self {
        self.skip_condition = Some(condition);
        self
    }

    /// Tags the question with a display phase.
    pub fn in_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn target_field(&self) -> Option<&str> {
        self.target_field.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn allows_zero(&self) -> bool {
        self.allows_zero
    }

    pub fn skip_condition(&self) -> Option<&SkipCondition> {
        self.skip_condition.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true when the question has no condition or its condition holds.
    pub fn is_eligible(&self, answers: &ResponseSnapshot) -> bool {
        self.skip_condition
            .as_ref()
            .map(|condition| condition.evaluate(answers))
            .unwrap_or(true)
    }

    /// Builds the presenter-facing view of this question.
    pub fn prompt(&self) -> QuestionPrompt {
        QuestionPrompt {
            question_id: self.id.clone(),
            text: self.text.clone(),
            input_type: self.question_type,
            options: self.options.clone(),
            allows_zero: self.allows_zero,
            phase: self.phase,
        }
    }
}

/// What the presentation layer needs to render the pending question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub question_id: String,
    pub text: String,
    pub input_type: QuestionType,
    pub options: Vec<String>,
    pub allows_zero: bool,
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::ResponseStore;

    fn answers(pairs: &[(&str, &str)]) -> ResponseSnapshot {
        let mut store = ResponseStore::new();
        for (field, value) in pairs {
            store.set(*field, *value);
        }
        store.snapshot()
    }

    mod question_type {
        use super::*;

        #[test]
        fn only_summary_and_terminal_complete_the_dialogue() {
            assert!(QuestionType::Summary.is_completion_marker());
            assert!(QuestionType::Terminal.is_completion_marker());
            assert!(!QuestionType::Confirmation.is_completion_marker());
            assert!(!QuestionType::Numeric.is_completion_marker());
        }

        #[test]
        fn select_and_confirmation_need_options() {
            assert!(QuestionType::SingleSelect.requires_options());
            assert!(QuestionType::Confirmation.requires_options());
            assert!(!QuestionType::FreeText.requires_options());
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&QuestionType::SingleSelect).unwrap();
            assert_eq!(json, "\"single_select\"");
        }
    }

    mod skip_condition {
        use super::*;

        #[test]
        fn starts_with_ignores_case_and_leading_space() {
            let condition = SkipCondition::starts_with("craneSystem", "Yes");
            assert!(condition.evaluate(&answers(&[("craneSystem", " yes - gantry crane")])));
            assert!(!condition.evaluate(&answers(&[("craneSystem", "No crane systems")])));
        }

        #[test]
        fn missing_field_fails_value_conditions() {
            let empty = answers(&[]);
            assert!(!SkipCondition::starts_with("f", "Yes").evaluate(&empty));
            assert!(!SkipCondition::contains("f", "x").evaluate(&empty));
            assert!(!SkipCondition::equals("f", "x").evaluate(&empty));
            assert!(!SkipCondition::answered("f").evaluate(&empty));
        }

        #[test]
        fn combinators_compose() {
            let snapshot = answers(&[("a", "Yes"), ("b", "industrial HVAC")]);
            let both = SkipCondition::equals("a", "Yes").and(SkipCondition::contains("b", "hvac"));
            let either = SkipCondition::equals("a", "No").or(SkipCondition::answered("b"));
            let neither = SkipCondition::answered("a").negate();

            assert!(both.evaluate(&snapshot));
            assert!(either.evaluate(&snapshot));
            assert!(!neither.evaluate(&snapshot));
        }

        #[test]
        fn debug_shows_description() {
            let condition = SkipCondition::equals("a", "Yes");
            assert_eq!(format!("{:?}", condition), "SkipCondition(\"a == 'Yes'\")");
        }
    }

    mod question {
        use super::*;

        #[test]
        fn unconditional_question_is_always_eligible() {
            let q = Question::numeric("basis", "Basis?", "depreciableBasis");
            assert!(q.is_eligible(&answers(&[])));
        }

        #[test]
        fn conditional_question_follows_its_condition() {
            let q = Question::free_text("details", "Details?", "details")
                .shown_when(SkipCondition::starts_with("has", "Yes"));

            assert!(!q.is_eligible(&answers(&[])));
            assert!(!q.is_eligible(&answers(&[("has", "No")])));
            assert!(q.is_eligible(&answers(&[("has", "Yes")])));
        }

        #[test]
        fn confirmation_has_options_but_no_field() {
            let q = Question::confirmation("greeting", "Ready?", ["Yes", "Not yet"]);
            assert_eq!(q.target_field(), None);
            assert_eq!(q.options(), ["Yes".to_string(), "Not yet".to_string()]);
        }

        #[test]
        fn prompt_mirrors_descriptor() {
            let q = Question::numeric("improvements", "Improvements?", "improvementCosts")
                .allowing_zero()
                .in_phase(Phase::PropertyTakeoffs);
            let prompt = q.prompt();

            assert_eq!(prompt.question_id, "improvements");
            assert_eq!(prompt.input_type, QuestionType::Numeric);
            assert!(prompt.allows_zero);
            assert_eq!(prompt.phase, Phase::PropertyTakeoffs);
        }
    }
}
