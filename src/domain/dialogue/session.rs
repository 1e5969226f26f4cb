//! Dialogue session aggregate.
//!
//! Pairs a flow engine with the identity and category it was started for so
//! the application layer can persist and resume it between answers.

use crate::domain::foundation::{PropertyCategory, SessionId, Timestamp};
use crate::domain::questionnaire::{Catalog, QuestionPrompt};

use super::engine::{FlowEngine, StepOutcome};
use super::errors::DialogueError;
use super::response_store::ResponseSnapshot;

#[derive(Debug, Clone)]
pub struct DialogueSession {
    id: SessionId,
    category: PropertyCategory,
    engine: FlowEngine,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DialogueSession {
    /// Starts a new session on `catalog` and returns it with the greeting.
    pub fn start(id: SessionId, category: PropertyCategory, catalog: Catalog) -> (Self, QuestionPrompt) {
        let mut engine = FlowEngine::new();
        let prompt = engine.start(catalog);
        let now = Timestamp::now();
        let session = Self {
            id,
            category,
            engine,
            created_at: now,
            updated_at: now,
        };
        (session, prompt)
    }

    /// Forwards an answer to the engine.
    pub fn submit(&mut self, raw: &str) -> Result<StepOutcome, DialogueError> {
        let outcome = self.engine.submit(raw)?;
        self.updated_at = Timestamp::now();
        Ok(outcome)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn category(&self) -> PropertyCategory {
        self.category
    }

    pub fn engine(&self) -> &FlowEngine {
        &self.engine
    }

    pub fn is_completed(&self) -> bool {
        self.engine.state().is_completed()
    }

    pub fn snapshot(&self) -> ResponseSnapshot {
        self.engine.snapshot()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
