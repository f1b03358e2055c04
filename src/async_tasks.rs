//! Background timers
//!
//! The only deferred work is hiding the keyboard hint once its fade has run.
//! Timers report back to the main loop over a channel and cannot be cancelled.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Messages sent from background tasks to the main thread
#[derive(Debug, PartialEq)]
pub enum TaskMessage {
    /// The keyboard hint fade has finished
    HintFadeElapsed,
}

/// Spawns timers that report back over a channel
pub struct AsyncTaskRunner {
    tx: mpsc::UnboundedSender<TaskMessage>,
}

impl AsyncTaskRunner {
    /// Create a new task runner
    pub fn new(tx: mpsc::UnboundedSender<TaskMessage>) -> Self {
        Self { tx }
    }

    /// Send `HintFadeElapsed` after `delay_ms`
    pub fn spawn_hint_fade(&self, delay_ms: u64) -> JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tracing::debug!("Hint fade timer started ({}ms)", delay_ms);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            // Receiver is gone if the app already quit
            let _ = tx.send(TaskMessage::HintFadeElapsed);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hint_fade_reports_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let runner = AsyncTaskRunner::new(tx);

        runner.spawn_hint_fade(5).await.unwrap();

        assert_eq!(rx.recv().await, Some(TaskMessage::HintFadeElapsed));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_receiver_is_harmless() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let runner = AsyncTaskRunner::new(tx);
        assert!(runner.spawn_hint_fade(1).await.is_ok());
    }
}
