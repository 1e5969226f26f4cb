//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dialogue;

pub use dialogue::{
    DialogueSubject, GenerateReportHandler, GenerateReportQuery, StartDialogueCommand,
    StartDialogueHandler, StartDialogueResult, SubmitAnswerCommand, SubmitAnswerHandler,
    SubmitAnswerResult,
};
