//! In-Memory Dialogue Session Repository
//!
//! Keeps dialogue sessions in a process-local map.
//! Used by the console wizard and by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::DialogueSessionRepository;

/// In-memory storage for dialogue sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, DialogueSession>>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DialogueSessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &DialogueSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<DialogueSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Dialogue session not found")
                    .with_detail("session_id", id.to_string())
            })
    }
}
