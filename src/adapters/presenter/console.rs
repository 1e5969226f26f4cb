//! Console presenter.
//!
//! Prints engine entries to stdout after a short "typing" pause.

use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use crate::domain::dialogue::TranscriptEntry;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::TranscriptPresenter;

pub struct ConsolePresenter {
    typing_delay: Duration,
    out: Mutex<Stdout>,
}

impl ConsolePresenter {
    pub fn new(typing_delay: Duration) -> Self {
        Self {
            typing_delay,
            out: Mutex::new(tokio::io::stdout()),
        }
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }
}

/// Renders one entry the way the console shows it.
pub fn render(entry: &TranscriptEntry) -> String {
    format!("[{}] {}\n", entry.produced_at.time_label(), entry.text)
}

#[async_trait]
impl TranscriptPresenter for ConsolePresenter {
    async fn reveal(&self, entry: &TranscriptEntry) -> Result<(), DomainError> {
        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let mut out = self.out.lock().await;
        write_line(&mut out, &render(entry))
            .await
            .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("stdout write failed: {}", e)))
    }
}

async fn write_line(out: &mut Stdout, line: &str) -> std::io::Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.flush().await
}
