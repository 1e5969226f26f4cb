//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `property` - Property profile intake and validation
//! - `questionnaire` - Question descriptors and catalog construction
//! - `dialogue` - Flow engine, response store and transcript
//! - `allocation` - Cost segregation tables and report arithmetic

pub mod allocation;
pub mod dialogue;
pub mod foundation;
pub mod property;
pub mod questionnaire;
