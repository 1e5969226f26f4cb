//! SubmitAnswerHandler - Command handler for answering the pending question.

use std::sync::Arc;

use crate::domain::dialogue::{FlowProgress, Speaker, StepOutcome};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{DialogueSessionRepository, TranscriptPresenter};

/// Command to answer the pending question of a session.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub answer: String,
}

/// Result of an accepted answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub outcome: StepOutcome,
    pub progress: FlowProgress,
}

/// Handler for submitting answers.
///
/// Load, submit and save are not atomic: concurrent submits to one session
/// race and the last save wins. Callers submit one answer at a time.
pub struct SubmitAnswerHandler {
    repository: Arc<dyn DialogueSessionRepository>,
    presenter: Arc<dyn TranscriptPresenter>,
}

impl SubmitAnswerHandler {
    pub fn new(
        repository: Arc<dyn DialogueSessionRepository>,
        presenter: Arc<dyn TranscriptPresenter>,
    ) -> Self {
        Self {
            repository,
            presenter,
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, DomainError> {
        // 1. Load the session
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Dialogue session not found")
                    .with_detail("session_id", cmd.session_id.to_string())
            })?;

        // 2. Advance the engine
        let seen = session.engine().transcript().len();
        let outcome = session.submit(&cmd.answer)?;

        // 3. Persist before revealing so a slow presenter never loses an answer
        self.repository.save(&session).await?;

        if let StepOutcome::Completed(done) = &outcome {
            tracing::info!(
                session_id = %cmd.session_id,
                fields = done.responses.len(),
                "dialogue session completed"
            );
        }

        // 4. Reveal what the engine said
        for entry in session.engine().transcript().since(seen) {
            if entry.speaker == Speaker::Engine {
                self.presenter.reveal(entry).await?;
            }
        }

        Ok(SubmitAnswerResult {
            outcome,
            progress: session.engine().progress(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionRepository, RecordingPresenter};
    use crate::domain::dialogue::DialogueSession;
    use crate::domain::foundation::PropertyCategory;
    use crate::domain::questionnaire::{CatalogBuilder, CatalogFlavor, PhrasingRng};

    async fn seeded_session(repository: &InMemorySessionRepository) -> SessionId {
        let catalog = CatalogBuilder::new(PropertyCategory::Residential, CatalogFlavor::TaxOnly)
            .build(&mut PhrasingRng::seeded(8))
            .unwrap();
        let (session, _) = DialogueSession::start(SessionId::new(), PropertyCategory::Residential, catalog);
        repository.save(&session).await.unwrap();
        *session.id()
    }

    fn answer(session_id: SessionId, text: &str) -> SubmitAnswerCommand {
        SubmitAnswerCommand {
            session_id,
            answer: text.to_string(),
        }
    }

    #[tokio::test]
    async fn accepted_answer_is_saved_and_next_prompt_revealed() {
        let repository = Arc::new(InMemorySessionRepository::new());
        let presenter = Arc::new(RecordingPresenter::new());
        let id = seeded_session(&repository).await;
        let handler = SubmitAnswerHandler::new(repository.clone(), presenter.clone());

        let result = handler.handle(answer(id, "Yes")).await.unwrap();
        let prompt = match result.outcome {
            StepOutcome::Prompt(p) => p,
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(prompt.question_id, "depreciableBasis");
        assert_eq!(presenter.texts(), vec![prompt.text]);
        assert_eq!(result.progress.position, 1);

        let stored = repository.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.engine().cursor(), 1);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = SubmitAnswerHandler::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(RecordingPresenter::new()),
        );
        let err = handler.handle(answer(SessionId::new(), "Yes")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn answering_a_completed_session_fails() {
        let repository = Arc::new(InMemorySessionRepository::new());
        let presenter = Arc::new(RecordingPresenter::new());
        let id = seeded_session(&repository).await;
        let handler = SubmitAnswerHandler::new(repository, presenter.clone());

        for _ in 0..8 {
            handler.handle(answer(id, "1")).await.unwrap();
        }
        let revealed = presenter.count();

        let err = handler.handle(answer(id, "extra")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DialogueAlreadyCompleted);
        assert_eq!(presenter.count(), revealed);
    }
}
