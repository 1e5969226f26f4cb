//! Transcript presenter port.
//!
//! Shows engine output to the person answering. Console adapters pause for a
//! typing delay before each reveal; test adapters record what they were given.

use crate::domain::dialogue::TranscriptEntry;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait TranscriptPresenter: Send + Sync {
    /// Reveal one engine entry.
    ///
    /// Called in transcript order. Never consulted for control flow.
    async fn reveal(&self, entry: &TranscriptEntry) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_presenter_is_object_safe() {
        fn _accepts_dyn(_presenter: &dyn TranscriptPresenter) {}
    }
}
