//! StartDialogueHandler - Command handler for opening a dialogue session.

use std::sync::Arc;

use crate::config::DialogueConfig;
use crate::domain::foundation::{DomainError, ErrorCode, PropertyCategory, SessionId};
use crate::domain::property::PropertyProfile;
use crate::domain::questionnaire::{CatalogBuilder, QuestionPrompt};
use crate::domain::dialogue::DialogueSession;
use crate::ports::{DialogueSessionRepository, TranscriptPresenter};

/// Where the property category comes from.
#[derive(Debug, Clone)]
pub enum DialogueSubject {
    /// A completed intake form; validated before anything is built.
    Profile(PropertyProfile),
    /// A bare category name, parsed loosely.
    Category(String),
}

/// Command to start a new dialogue.
#[derive(Debug, Clone)]
pub struct StartDialogueCommand {
    pub subject: DialogueSubject,
}

/// Result of a started dialogue.
#[derive(Debug, Clone)]
pub struct StartDialogueResult {
    pub session_id: SessionId,
    pub category: PropertyCategory,
    pub prompt: QuestionPrompt,
}

/// Handler for starting dialogues.
pub struct StartDialogueHandler {
    repository: Arc<dyn DialogueSessionRepository>,
    presenter: Arc<dyn TranscriptPresenter>,
    config: DialogueConfig,
}

impl StartDialogueHandler {
    pub fn new(
        repository: Arc<dyn DialogueSessionRepository>,
        presenter: Arc<dyn TranscriptPresenter>,
        config: DialogueConfig,
    ) -> Self {
        Self {
            repository,
            presenter,
            config,
        }
    }

    pub async fn handle(&self, cmd: StartDialogueCommand) -> Result<StartDialogueResult, DomainError> {
        // 1. Resolve the category name
        let category_name = match &cmd.subject {
            DialogueSubject::Profile(profile) => {
                profile.validate()?;
                profile.property_type.clone()
            }
            DialogueSubject::Category(name) => name.clone(),
        };

        // 2. Build the catalog
        let builder = CatalogBuilder::for_category_name(&category_name, self.config.flavor);
        let category = builder.resolved_category();
        let catalog = builder
            .build(&mut self.config.phrasing_rng())
            .map_err(|e| DomainError::new(ErrorCode::InvalidCatalog, e.to_string()))?;

        // 3. Start and persist the session
        let session_id = SessionId::new();
        let (session, prompt) = DialogueSession::start(session_id, category, catalog);
        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session_id,
            category = category.as_str(),
            flavor = ?self.config.flavor,
            "dialogue session started"
        );

        // 4. Show the greeting
        for entry in session.engine().transcript().entries() {
            self.presenter.reveal(entry).await?;
        }

        Ok(StartDialogueResult {
            session_id,
            category,
            prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionRepository, RecordingPresenter};
    use crate::domain::questionnaire::CatalogFlavor;
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl DialogueSessionRepository for FailingRepository {
        async fn save(&self, _session: &DialogueSession) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated save failure"))
        }

        async fn find_by_id(&self, _id: &SessionId) -> Result<Option<DialogueSession>, DomainError> {
            Ok(None)
        }

        async fn delete(&self, _id: &SessionId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn config() -> DialogueConfig {
        DialogueConfig {
            flavor: CatalogFlavor::TaxOnly,
            typing_delay_ms: 0,
            phrasing_seed: Some(5),
        }
    }

    fn handler(
        repository: Arc<dyn DialogueSessionRepository>,
        presenter: Arc<RecordingPresenter>,
    ) -> StartDialogueHandler {
        StartDialogueHandler::new(repository, presenter, config())
    }

    #[tokio::test]
    async fn starts_from_category_name() {
        let repository = Arc::new(InMemorySessionRepository::new());
        let presenter = Arc::new(RecordingPresenter::new());
        let result = handler(repository.clone(), presenter.clone())
            .handle(StartDialogueCommand {
                subject: DialogueSubject::Category("Commercial".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.category, PropertyCategory::Commercial);
        assert_eq!(result.prompt.question_id, "greeting");
        assert_eq!(presenter.texts(), vec![result.prompt.text.clone()]);

        let stored = repository.find_by_id(&result.session_id).await.unwrap().unwrap();
        assert_eq!(stored.engine().catalog().map(|c| c.len()), Some(9));
    }

    #[tokio::test]
    async fn unknown_category_falls_back_to_residential() {
        let repository = Arc::new(InMemorySessionRepository::new());
        let result = handler(repository, Arc::new(RecordingPresenter::new()))
            .handle(StartDialogueCommand {
                subject: DialogueSubject::Category("treehouse".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(result.category, PropertyCategory::Residential);
    }

    #[tokio::test]
    async fn invalid_profile_is_rejected_before_saving() {
        let repository = Arc::new(InMemorySessionRepository::new());
        let err = handler(repository.clone(), Arc::new(RecordingPresenter::new()))
            .handle(StartDialogueCommand {
                subject: DialogueSubject::Profile(PropertyProfile::default()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(repository.session_count().await, 0);
    }

    #[tokio::test]
    async fn save_failure_is_propagated_and_nothing_revealed() {
        let presenter = Arc::new(RecordingPresenter::new());
        let err = handler(Arc::new(FailingRepository), presenter.clone())
            .handle(StartDialogueCommand {
                subject: DialogueSubject::Category("industrial".to_string()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(presenter.count(), 0);
    }
}
