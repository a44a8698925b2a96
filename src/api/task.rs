//! The mount-scoped fetch.
//!
//! `spawn_fetch` runs the request on the tokio runtime and reports the
//! outcome as an [`Action`]. The returned [`FetchTask`] ties the request to
//! the view's lifetime: dropping it aborts whatever is still in flight.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use super::client::GreetingSource;
use crate::core::action::Action;

/// Handle to the in-flight greeting request. Aborts it on drop.
pub struct FetchTask {
    handle: AbortHandle,
}

impl FetchTask {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            info!("Aborting in-flight greeting fetch");
            self.handle.abort();
        }
    }
}

/// Must be called from within a tokio runtime.
pub fn spawn_fetch(source: Arc<dyn GreetingSource>, tx: UnboundedSender<Action>) -> FetchTask {
    info!("Spawning greeting fetch from {}", source.describe());

    let handle = tokio::spawn(async move {
        let action = match source.fetch_greeting().await {
            Ok(payload) => Action::GreetingReceived(payload),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver greeting result: receiver dropped");
        }
    });

    FetchTask {
        handle: handle.abort_handle(),
    }
}
