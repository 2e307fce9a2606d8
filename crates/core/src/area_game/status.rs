use std::sync::Arc;
use std::time::Duration;

use area_game_api_types::AreaStatus;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::{Instant, sleep_until};

/// Short-lived status line fed by server responses.
///
/// Every [`StatusMessenger::show`] schedules its own reset to the placeholder.
/// Earlier resets are not cancelled, so a reset scheduled by an older message
/// can replace a newer one before that one's own reset fires.
pub struct StatusMessenger {
    placeholder: String,
    expiry: Duration,
    current: Arc<watch::Sender<String>>,
}

/// Handle to a pending reset.
#[derive(Debug)]
pub struct ExpiryHandle(AbortHandle);

impl ExpiryHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }
}

impl StatusMessenger {
    pub fn new(placeholder: impl Into<String>, expiry: Duration) -> Self {
        let (current, _) = watch::channel(String::new());

        Self {
            placeholder: placeholder.into(),
            expiry,
            current: Arc::new(current),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, status: &AreaStatus) -> ExpiryHandle {
        let deadline = Instant::now() + self.expiry;
        self.current.send_replace(status.msg.clone());

        let current = Arc::clone(&self.current);
        let placeholder = self.placeholder.clone();
        let task = tokio::spawn(async move {
            sleep_until(deadline).await;
            current.send_replace(placeholder);
        });

        ExpiryHandle(task.abort_handle())
    }

    pub fn message(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }
}
