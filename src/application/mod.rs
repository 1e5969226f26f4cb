//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    DialogueSubject, GenerateReportHandler, GenerateReportQuery, StartDialogueCommand,
    StartDialogueHandler, StartDialogueResult, SubmitAnswerCommand, SubmitAnswerHandler,
    SubmitAnswerResult,
};
