//! Dialogue domain module.
//!
//! Runs one question-and-answer session over a catalog: the flow engine,
//! its response store, the transcript and the completion recap.

mod engine;
mod errors;
mod recap;
mod response_store;
mod session;
mod state;
mod transcript;

pub use engine::{CompletedDialogue, FlowEngine, FlowProgress, StepOutcome};
pub use errors::DialogueError;
pub use response_store::{ResponseSnapshot, ResponseStore};
pub use session::DialogueSession;
pub use state::DialogueState;
pub use transcript::{Speaker, Transcript, TranscriptEntry};
