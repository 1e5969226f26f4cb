//! Dialogue configuration

use serde::Deserialize;
use std::time::Duration;

use super::ValidationError;
use crate::domain::questionnaire::{CatalogFlavor, PhrasingRng};

/// Longest accepted pause before revealing an engine message.
pub const MAX_TYPING_DELAY_MS: u64 = 10_000;

/// Settings for building catalogs and pacing the conversation
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Which catalog variant to build (`tax_only` or `tax_and_takeoffs`)
    #[serde(default)]
    pub flavor: CatalogFlavor,

    /// Pause before each engine message is shown, in milliseconds
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Fixed seed for prompt wording; random per session when unset
    #[serde(default)]
    pub phrasing_seed: Option<u64>,
}

fn default_typing_delay_ms() -> u64 {
    1000
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            flavor: CatalogFlavor::default(),
            typing_delay_ms: default_typing_delay_ms(),
            phrasing_seed: None,
        }
    }
}

impl DialogueConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// RNG for one catalog build.
    pub fn phrasing_rng(&self) -> PhrasingRng {
        match self.phrasing_seed {
            Some(seed) => PhrasingRng::seeded(seed),
            None => PhrasingRng::from_entropy(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.typing_delay_ms > MAX_TYPING_DELAY_MS {
            return Err(ValidationError::TypingDelayTooLong {
                max_ms: MAX_TYPING_DELAY_MS,
                actual_ms: self.typing_delay_ms,
            });
        }
        Ok(())
    }
}
