//! Flow engine.
//!
//! Walks a catalog one answer at a time: records each answer under its
//! question's target field, skips conditional questions whose condition does
//! not hold, and completes when it reaches a summary or terminal question or
//! runs out of questions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, StateMachine};
use crate::domain::questionnaire::{Catalog, QuestionPrompt};

use super::errors::DialogueError;
use super::recap;
use super::response_store::{ResponseSnapshot, ResponseStore};
use super::state::DialogueState;
use super::transcript::{Transcript, TranscriptEntry};

/// What a successful `submit` produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The next question to present.
    Prompt(QuestionPrompt),
    /// The dialogue finished with this submit.
    Completed(CompletedDialogue),
}

/// Result of a finished dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedDialogue {
    pub responses: ResponseSnapshot,
    pub recap: String,
}

/// Position within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowProgress {
    pub position: usize,
    pub total: usize,
}

impl FlowProgress {
    /// Share of the catalog passed, rounded down.
    pub fn percent(&self) -> Percentage {
        if self.total == 0 {
            return Percentage::ZERO;
        }
        let share = (self.position.min(self.total) * 100) / self.total;
        Percentage::new(share as u8)
    }
}

/// Sequences one dialogue over a catalog.
///
/// Single owner, no interior locking. Sessions that need sharing wrap the
/// engine themselves.
#[derive(Debug, Clone, Default)]
pub struct FlowEngine {
    catalog: Option<Catalog>,
    cursor: usize,
    store: ResponseStore,
    transcript: Transcript,
    state: DialogueState,
}

impl FlowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the engine onto `catalog` and presents the greeting.
    ///
    /// Allowed in any state; earlier answers and transcript are discarded.
    pub fn start(&mut self, catalog: Catalog) -> QuestionPrompt {
        self.store.clear();
        self.transcript.clear();
        self.cursor = 0;
        self.state = DialogueState::AwaitingAnswer;

        let prompt = catalog.greeting().prompt();
        self.transcript.push(TranscriptEntry::engine(prompt.text.clone()));

        tracing::info!(
            questions = catalog.len(),
            flavor = ?catalog.flavor(),
            "dialogue started"
        );
        self.catalog = Some(catalog);
        prompt
    }

    /// Answers the pending question and advances.
    ///
    /// # Errors
    ///
    /// - `NotStarted` before `start`
    /// - `AlreadyCompleted` once the dialogue finished
    ///
    /// Neither error changes any state.
    pub fn submit(&mut self, raw: &str) -> Result<StepOutcome, DialogueError> {
        match self.state {
            DialogueState::Idle => {
                tracing::warn!("answer submitted before dialogue start");
                return Err(DialogueError::NotStarted);
            }
            DialogueState::Completed => {
                tracing::warn!("answer submitted after dialogue completion");
                return Err(DialogueError::AlreadyCompleted);
            }
            DialogueState::AwaitingAnswer => {}
        }
        let catalog = self.catalog.as_ref().ok_or(DialogueError::NotStarted)?;

        self.transcript.push(TranscriptEntry::user(raw));

        if let Some(field) = catalog.get(self.cursor).and_then(|q| q.target_field()) {
            self.store.set(field, raw);
        }

        // Skipped questions never write, so one snapshot serves the whole scan
        let answers = self.store.snapshot();
        let mut next = self.cursor + 1;
        while let Some(candidate) = catalog.get(next) {
            if candidate.is_eligible(&answers) {
                break;
            }
            tracing::debug!(
                question = candidate.id(),
                condition = candidate.skip_condition().map(|c| c.description()),
                "skipping question"
            );
            next += 1;
        }

        match catalog.get(next) {
            Some(question) if !question.question_type().is_completion_marker() => {
                self.cursor = next;
                let prompt = question.prompt();
                self.transcript.push(TranscriptEntry::engine(prompt.text.clone()));
                tracing::debug!(cursor = next, question = question.id(), "advanced");
                Ok(StepOutcome::Prompt(prompt))
            }
            reached => {
                self.state = self.state.transition_to(DialogueState::Completed)?;
                self.cursor = next.min(catalog.len());

                let completion_text = reached.map(|q| q.text());
                let recap = recap::compose(completion_text, catalog, &answers);
                self.transcript.push(TranscriptEntry::engine(recap.clone()));

                tracing::info!(
                    fields = answers.len(),
                    marker = reached.map(|q| q.id()),
                    "dialogue completed"
                );
                Ok(StepOutcome::Completed(CompletedDialogue {
                    responses: answers,
                    recap,
                }))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read-only accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> ResponseSnapshot {
        self.store.snapshot()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The pending prompt, if an answer is awaited.
    pub fn current_prompt(&self) -> Option<QuestionPrompt> {
        if !self.state.accepts_answers() {
            return None;
        }
        self.catalog
            .as_ref()
            .and_then(|c| c.get(self.cursor))
            .map(|q| q.prompt())
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn progress(&self) -> FlowProgress {
        FlowProgress {
            position: self.cursor,
            total: self.catalog.as_ref().map(Catalog::len).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use crate::domain::dialogue::Speaker;
    use crate::domain::foundation::PropertyCategory;
    use crate::domain::questionnaire::{
        fields, CatalogBuilder, CatalogFlavor, PhrasingRng, Question, SkipCondition,
    };
    use proptest::prelude::*;

    fn tax_only(category: PropertyCategory) -> Catalog {
        CatalogBuilder::new(category, CatalogFlavor::TaxOnly)
            .build(&mut PhrasingRng::seeded(7))
            .unwrap()
    }

    fn combined(category: PropertyCategory) -> Catalog {
        CatalogBuilder::new(category, CatalogFlavor::TaxAndTakeoffs)
            .build(&mut PhrasingRng::seeded(7))
            .unwrap()
    }

    fn expect_prompt(outcome: StepOutcome) -> QuestionPrompt {
        match outcome {
            StepOutcome::Prompt(prompt) => prompt,
            StepOutcome::Completed(_) => panic!("dialogue completed early"),
        }
    }

    fn expect_completed(outcome: StepOutcome) -> CompletedDialogue {
        match outcome {
            StepOutcome::Completed(done) => done,
            StepOutcome::Prompt(p) => panic!("expected completion, got prompt {}", p.question_id),
        }
    }

    /// Answers every prompt with `answer_for(question_id)` until completion.
    fn run_to_completion<F>(engine: &mut FlowEngine, mut answer_for: F) -> (Vec<String>, CompletedDialogue)
    where
        F: FnMut(&str) -> String,
    {
        let mut asked = Vec::new();
        let mut pending = engine.current_prompt().unwrap();
        loop {
            asked.push(pending.question_id.clone());
            match engine.submit(&answer_for(&pending.question_id)).unwrap() {
                StepOutcome::Prompt(next) => pending = next,
                StepOutcome::Completed(done) => return (asked, done),
            }
        }
    }

    mod start {
        use super::*;

        #[test]
        fn presents_greeting_and_awaits_answer() {
            let mut engine = FlowEngine::new();
            let prompt = engine.start(tax_only(PropertyCategory::Commercial));

            assert_eq!(prompt.question_id, "greeting");
            assert_eq!(engine.state(), DialogueState::AwaitingAnswer);
            assert_eq!(engine.cursor(), 0);
            assert_eq!(engine.transcript().len(), 1);
            assert_eq!(engine.transcript().entries()[0].speaker, Speaker::Engine);
            assert_eq!(engine.current_prompt(), Some(prompt));
        }

        #[test]
        fn restart_discards_previous_dialogue() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Residential));
            engine.submit("Yes").unwrap();
            engine.submit("400000").unwrap();
            assert!(!engine.snapshot().is_empty());

            engine.start(tax_only(PropertyCategory::Industrial));
            assert!(engine.snapshot().is_empty());
            assert_eq!(engine.cursor(), 0);
            assert_eq!(engine.transcript().len(), 1);
        }

        #[test]
        fn can_restart_after_completion() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Residential));
            run_to_completion(&mut engine, |_| "1".to_string());
            assert!(engine.state().is_completed());

            engine.start(tax_only(PropertyCategory::Residential));
            assert_eq!(engine.state(), DialogueState::AwaitingAnswer);
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn before_start_is_rejected_without_side_effects() {
            let mut engine = FlowEngine::new();
            assert_eq!(engine.submit("Yes"), Err(DialogueError::NotStarted));
            assert!(engine.transcript().is_empty());
            assert_eq!(engine.state(), DialogueState::Idle);
        }

        #[test]
        fn after_completion_is_rejected_without_side_effects() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Residential));
            run_to_completion(&mut engine, |_| "x".to_string());

            let transcript_len = engine.transcript().len();
            let snapshot = engine.snapshot();
            assert_eq!(engine.submit("more"), Err(DialogueError::AlreadyCompleted));
            assert_eq!(engine.transcript().len(), transcript_len);
            assert_eq!(engine.snapshot(), snapshot);
        }

        #[test]
        fn greeting_answer_is_not_stored() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Residential));
            let next = expect_prompt(engine.submit("Yes, let's start").unwrap());

            assert_eq!(next.question_id, "depreciableBasis");
            assert!(engine.snapshot().is_empty());
        }

        #[test]
        fn answers_are_stored_verbatim() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Residential));
            engine.submit("Yes").unwrap();
            engine.submit(" $1,200,000 ").unwrap();
            engine.submit("").unwrap();

            let snapshot = engine.snapshot();
            assert_eq!(snapshot.get(fields::DEPRECIABLE_BASIS), Some(" $1,200,000 "));
            assert_eq!(snapshot.get(fields::PURCHASE_PRICE), Some(""));
        }

        #[test]
        fn select_answers_outside_options_are_accepted() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Commercial));
            for answer in ["Yes", "1", "1", "2020-01-01"] {
                engine.submit(answer).unwrap();
            }
            engine.submit("Something else entirely").unwrap();
            assert_eq!(
                engine.snapshot().get(fields::PROPERTY_USE),
                Some("Something else entirely")
            );
        }

        #[test]
        fn transcript_alternates_engine_and_user() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Residential));
            engine.submit("Yes").unwrap();
            engine.submit("100").unwrap();

            let speakers: Vec<_> = engine.transcript().entries().iter().map(|e| e.speaker).collect();
            assert_eq!(
                speakers,
                vec![Speaker::Engine, Speaker::User, Speaker::Engine, Speaker::User, Speaker::Engine]
            );
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn commercial_tax_only_example_completes_after_eight_answers() {
            let mut engine = FlowEngine::new();
            engine.start(tax_only(PropertyCategory::Commercial));
            let answers = [
                "Yes, let's begin",
                "500000",
                "800000",
                "01/15/2020",
                "Office building",
                "25000",
                "Cash purchase",
                "24% (Individual: $89K-$191K, Married: $178K-$340K)",
            ];

            let mut outcome = None;
            for (i, answer) in answers.iter().enumerate() {
                let step = engine.submit(answer).unwrap();
                if i < answers.len() - 1 {
                    expect_prompt(step);
                } else {
                    outcome = Some(step);
                }
            }
            let done = expect_completed(outcome.unwrap());

            let stored: BTreeMap<&str, &str> = done.responses.iter().collect();
            let expected = BTreeMap::from([
                (fields::DEPRECIABLE_BASIS, "500000"),
                (fields::PURCHASE_PRICE, "800000"),
                (fields::PLACED_IN_SERVICE_DATE, "01/15/2020"),
                (fields::PROPERTY_USE, "Office building"),
                (fields::IMPROVEMENT_COSTS, "25000"),
                (fields::ACQUISITION_METHOD, "Cash purchase"),
                (fields::TAX_BRACKET, "24% (Individual: $89K-$191K, Married: $178K-$340K)"),
            ]);
            assert_eq!(stored, expected);
            assert_eq!(engine.state(), DialogueState::Completed);
            assert_eq!(engine.current_prompt(), None);
            assert!(done.recap.contains("• Depreciable Basis: $500,000"));
            assert!(done.recap.contains("• Purchase Price: $800,000"));
            assert_eq!(engine.transcript().last().map(|e| e.text.as_str()), Some(done.recap.as_str()));

            assert_eq!(engine.submit("one more"), Err(DialogueError::AlreadyCompleted));
            assert_eq!(engine.snapshot(), done.responses);
        }

        #[test]
        fn completion_recap_starts_with_summary_text() {
            let catalog = tax_only(PropertyCategory::Residential);
            let summary_text = catalog.find("completion").unwrap().text().to_string();
            let mut engine = FlowEngine::new();
            engine.start(catalog);

            let (_, done) = run_to_completion(&mut engine, |_| "1".to_string());
            assert!(done.recap.starts_with(&summary_text));
        }

        #[test]
        fn exhausting_catalog_without_reachable_marker_completes() {
            // The only completion marker sits behind a condition that never holds
            let catalog = Catalog::new(
                vec![
                    Question::confirmation("greeting", "Ready?", ["Yes"]),
                    Question::free_text("name", "Name?", "name"),
                    Question::summary("done", "Done").shown_when(SkipCondition::answered("never")),
                ],
                CatalogFlavor::TaxOnly,
            )
            .unwrap();
            let mut engine = FlowEngine::new();
            engine.start(catalog);
            engine.submit("Yes").unwrap();
            let done = expect_completed(engine.submit("Ada").unwrap());

            assert_eq!(engine.cursor(), 3);
            assert!(done.recap.starts_with("• name: Ada"));
        }

        #[test]
        fn terminal_marker_completes_dialogue() {
            let catalog = Catalog::new(
                vec![
                    Question::confirmation("greeting", "Ready?", ["Yes"]),
                    Question::terminal("bye", "Goodbye."),
                ],
                CatalogFlavor::TaxOnly,
            )
            .unwrap();
            let mut engine = FlowEngine::new();
            engine.start(catalog);
            let done = expect_completed(engine.submit("Yes").unwrap());

            assert!(done.responses.is_empty());
            assert!(done.recap.starts_with("Goodbye."));
            assert_eq!(engine.progress().percent(), Percentage::new(50));
        }
    }

    mod conditional_questions {
        use super::*;

        fn answer(id: &str, specialty: &str, crane: &str) -> String {
            match id {
                "specialtySystems" => specialty.to_string(),
                "craneSystem" => crane.to_string(),
                _ => "1".to_string(),
            }
        }

        #[test]
        fn details_are_skipped_when_gate_answer_is_no() {
            let mut engine = FlowEngine::new();
            engine.start(combined(PropertyCategory::Industrial));
            let (asked, done) =
                run_to_completion(&mut engine, |id| answer(id, "No", "No crane systems"));

            assert!(!asked.iter().any(|id| id == "specialtySystemsDetails"));
            assert!(!asked.iter().any(|id| id == "craneDetails"));
            assert!(!done.responses.contains(fields::SPECIALTY_SYSTEMS_DETAILS));
            assert!(!done.responses.contains(fields::CRANE_DETAILS));
        }

        #[test]
        fn details_are_asked_when_gate_answer_is_yes() {
            let mut engine = FlowEngine::new();
            engine.start(combined(PropertyCategory::Industrial));
            let (asked, done) = run_to_completion(&mut engine, |id| {
                answer(id, "Yes - we have specialty systems", "yes - gantry crane")
            });

            assert!(asked.iter().any(|id| id == "specialtySystemsDetails"));
            assert!(asked.iter().any(|id| id == "craneDetails"));
            assert!(done.responses.contains(fields::CRANE_DETAILS));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Any answer sequence long enough finishes every built-in catalog,
        /// the cursor never moves backwards or past the end, and completion
        /// happens exactly once.
        #[test]
        fn prop_any_answers_complete_once(
            seed in any::<u64>(),
            category_index in 0usize..4,
            takeoffs in any::<bool>(),
            answers in proptest::collection::vec(".{0,12}", 40..60),
        ) {
            let category = PropertyCategory::all()[category_index];
            let flavor = if takeoffs { CatalogFlavor::TaxAndTakeoffs } else { CatalogFlavor::TaxOnly };
            let catalog = CatalogBuilder::new(category, flavor)
                .build(&mut PhrasingRng::seeded(seed))
                .unwrap();
            let total = catalog.len();

            let mut engine = FlowEngine::new();
            engine.start(catalog);
            let mut completions = 0;
            let mut last_cursor = engine.cursor();

            for answer in &answers {
                match engine.submit(answer) {
                    Ok(StepOutcome::Completed(_)) => completions += 1,
                    Ok(StepOutcome::Prompt(_)) => {}
                    Err(err) => prop_assert_eq!(err, DialogueError::AlreadyCompleted),
                }
                prop_assert!(engine.cursor() >= last_cursor);
                prop_assert!(engine.cursor() <= total);
                last_cursor = engine.cursor();
            }

            prop_assert_eq!(completions, 1);
            prop_assert!(engine.state().is_completed());
        }

        /// Snapshot keys are always target fields of the catalog.
        #[test]
        fn prop_snapshot_keys_are_catalog_fields(
            category_index in 0usize..4,
            answers in proptest::collection::vec("[A-Za-z0-9 ]{0,8}", 40),
        ) {
            let category = PropertyCategory::all()[category_index];
            let catalog = combined(category);
            let allowed: Vec<String> = catalog.target_fields().iter().map(|f| f.to_string()).collect();

            let mut engine = FlowEngine::new();
            engine.start(catalog);
            for answer in &answers {
                if engine.submit(answer).is_err() {
                    break;
                }
            }

            for field in engine.snapshot().fields() {
                prop_assert!(allowed.iter().any(|f| f == field), "unexpected field {}", field);
            }
        }
    }
}
