//! Cancelable debounce timer for search input.
//!
//! Keystrokes go in, committed search values come out — but only after the
//! input has been quiet for the configured delay. Each new input aborts the
//! pending timer and starts a fresh one, so a burst of typing produces
//! exactly one commit, carrying the final value. Dropping the debouncer
//! aborts any pending timer, so no commit can fire after teardown.

use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time;

/// Quiet period before a search value is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

pub struct Debouncer {
    delay: Duration,
    tx: UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer and the receiver its commits arrive on.
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { delay, tx, pending: None }, rx)
    }

    /// Records a new input value, restarting the quiet-period timer.
    pub fn input(&mut self, value: String) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Aborts the pending commit, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
