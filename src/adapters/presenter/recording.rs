//! Recording presenter for tests and headless runs.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::dialogue::TranscriptEntry;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::TranscriptPresenter;

/// Collects revealed entries in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    revealed: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts revealed so far.
    pub fn texts(&self) -> Vec<String> {
        self.revealed
            .lock()
            .map(|entries| entries.iter().map(|e| e.text.clone()).collect())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.revealed.lock().map(|entries| entries.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TranscriptPresenter for RecordingPresenter {
    async fn reveal(&self, entry: &TranscriptEntry) -> Result<(), DomainError> {
        self.revealed
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "presenter lock poisoned"))?
            .push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_in_order() {
        let presenter = RecordingPresenter::new();
        presenter.reveal(&TranscriptEntry::engine("one")).await.unwrap();
        presenter.reveal(&TranscriptEntry::engine("two")).await.unwrap();
        assert_eq!(presenter.texts(), vec!["one", "two"]);
        assert_eq!(presenter.count(), 2);
    }
}
