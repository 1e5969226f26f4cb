//! Transcript presenter adapters.

mod console;
mod recording;

pub use console::{render, ConsolePresenter};
pub use recording::RecordingPresenter;
