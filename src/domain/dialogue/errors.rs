//! Dialogue precondition errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Reasons a flow engine refuses an answer.
///
/// Returned without touching the store, transcript or cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    #[error("Dialogue has not been started")]
    NotStarted,

    #[error("Dialogue is already completed")]
    AlreadyCompleted,

    #[error(transparent)]
    InvalidTransition(#[from] ValidationError),
}

impl From<DialogueError> for DomainError {
    fn from(err: DialogueError) -> Self {
        let code = match &err {
            DialogueError::NotStarted => ErrorCode::DialogueNotStarted,
            DialogueError::AlreadyCompleted => ErrorCode::DialogueAlreadyCompleted,
            DialogueError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        };
        DomainError::new(code, err.to_string())
    }
}
