//! Dialogue command and query handlers.

mod generate_report;
mod start_dialogue;
mod submit_answer;

pub use generate_report::{GenerateReportHandler, GenerateReportQuery};
pub use start_dialogue::{DialogueSubject, StartDialogueCommand, StartDialogueHandler, StartDialogueResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
