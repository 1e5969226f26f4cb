//! Dialogue session repository port.
//!
//! Persists `DialogueSession` aggregates between answers. A session is saved
//! after every accepted submit, so `save` is an upsert.

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for dialogue sessions.
#[async_trait]
pub trait DialogueSessionRepository: Send + Sync {
    /// Insert or replace a session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &DialogueSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<DialogueSession>, DomainError>;

    /// Remove a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialogue_session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DialogueSessionRepository) {}
    }
}
