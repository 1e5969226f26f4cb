//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Dialogue session persistence (in-memory)
//! - `presenter` - Transcript delivery (console, recording)

pub mod presenter;
pub mod storage;

pub use presenter::{ConsolePresenter, RecordingPresenter};
pub use storage::InMemorySessionRepository;
