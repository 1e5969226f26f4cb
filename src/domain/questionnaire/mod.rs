//! Questionnaire domain module.
//!
//! Builds the ordered question catalog a dialogue walks through: question
//! descriptors, skip conditions, wording variants and category branches.

mod builder;
mod catalog;
pub mod fields;
mod phrasing;
mod question;
mod templates;

pub use builder::{build_catalog, CatalogBuilder};
pub use catalog::{Catalog, CatalogError, CatalogFlavor};
pub use phrasing::PhrasingRng;
pub use question::{Phase, Question, QuestionPrompt, QuestionType, SkipCondition};
