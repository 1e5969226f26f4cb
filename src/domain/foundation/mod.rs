//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the cost segregation domain.

mod amount;
mod errors;
mod ids;
mod percentage;
mod property_category;
mod state_machine;
mod timestamp;

pub use amount::{amount_or_zero, format_currency, parse_amount, whole_dollars, MAX_WHOLE_DOLLARS};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use percentage::Percentage;
pub use property_category::PropertyCategory;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
