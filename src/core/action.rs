//! # Actions
//!
//! Everything that can happen to the greeting view becomes an `Action`.
//! View mounted? That's `Action::Mount`.
//! Backend answered? That's `Action::GreetingReceived(payload)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter has to carry out. No side effects here. I/O happens
//! elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::api::GreetingPayload;
use crate::core::state::{App, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The view is being rendered. Only the first one fetches.
    Mount,
    GreetingReceived(GreetingPayload),
    /// The fetch failed for any reason. Carries a description for the log.
    FetchFailed(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => {
            if app.fetch_issued || !app.mounted {
                return Effect::None;
            }
            app.fetch_issued = true;
            info!("Greeting view mounted, fetching {}", app.endpoint);
            Effect::SpawnFetch
        }
        Action::GreetingReceived(payload) => {
            if !app.mounted {
                debug!("Dropping greeting received after unmount");
                return Effect::None;
            }
            if app.display.phase() == Phase::Loaded {
                debug!("Greeting already loaded, ignoring repeat response");
                return Effect::None;
            }
            match payload.message {
                Some(message) => {
                    info!("Greeting received ({} bytes)", message.len());
                    app.display.message = Some(message);
                }
                None => debug!("Response had no message field, staying in Loading"),
            }
            Effect::None
        }
        Action::FetchFailed(reason) => {
            // Failures are not shown; the placeholder stays up.
            debug!("Greeting fetch failed: {}", reason);
            Effect::None
        }
        Action::Quit => {
            app.mounted = false;
            Effect::Quit
        }
    }
}
