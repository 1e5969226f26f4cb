//! Storage Adapters
//!
//! Implementations of the DialogueSessionRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRepository** - Stores sessions in memory (console wizard, tests)

mod in_memory_session_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
