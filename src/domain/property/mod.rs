//! Property intake.

mod profile;

pub use profile::{ProfileError, PropertyProfile};
