//! Dialogue lifecycle state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The lifecycle state of a flow engine.
///
/// - `Idle`: no catalog started yet
/// - `AwaitingAnswer`: a prompt is pending
/// - `Completed`: the completion marker was reached or the catalog ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    Idle,
    AwaitingAnswer,
    Completed,
}

impl DialogueState {
    /// Returns true if `submit` is accepted in this state.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::AwaitingAnswer)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl StateMachine for DialogueState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueState::*;
        matches!(
            (self, target),
            (Idle, AwaitingAnswer) |
            (AwaitingAnswer, Completed) |
            // start() on a finished dialogue
            (Completed, AwaitingAnswer)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueState::*;
        match self {
            Idle => vec![AwaitingAnswer],
            AwaitingAnswer => vec![Completed],
            Completed => vec![AwaitingAnswer],
        }
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DialogueState::Idle => "Idle",
            DialogueState::AwaitingAnswer => "Awaiting answer",
            DialogueState::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(DialogueState::default(), DialogueState::Idle);
    }

    #[test]
    fn only_awaiting_accepts_answers() {
        assert!(!DialogueState::Idle.accepts_answers());
        assert!(DialogueState::AwaitingAnswer.accepts_answers());
        assert!(!DialogueState::Completed.accepts_answers());
    }

    #[test]
    fn idle_cannot_jump_to_completed() {
        assert!(DialogueState::Idle.transition_to(DialogueState::Completed).is_err());
    }

    #[test]
    fn completed_can_restart() {
        assert_eq!(
            DialogueState::Completed.transition_to(DialogueState::AwaitingAnswer),
            Ok(DialogueState::AwaitingAnswer)
        );
        assert!(!DialogueState::Completed.is_terminal());
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&DialogueState::AwaitingAnswer).unwrap();
        assert_eq!(json, "\"awaiting_answer\"");
    }
}
