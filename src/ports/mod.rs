//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DialogueSessionRepository` - Persistence for in-flight dialogue sessions
//! - `TranscriptPresenter` - Delivery of engine output to the user

mod dialogue_session_repository;
mod transcript_presenter;

pub use dialogue_session_repository::DialogueSessionRepository;
pub use transcript_presenter::TranscriptPresenter;
