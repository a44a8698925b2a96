//! # Application State
//!
//! Core business state for Greeter. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── endpoint: Endpoint          // where the greeting comes from
//! ├── display: DisplayState       // the one value the view renders
//! ├── fetch_issued: bool          // the mount fetch has been spawned
//! └── mounted: bool               // false once the view is torn down
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::endpoint::Endpoint;

/// Text shown until a message is available.
pub const PLACEHOLDER: &str = "Loading...";

/// The single piece of component-local data: the message to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub message: Option<String>,
}

/// Derived view of [`DisplayState`]. There is no error phase: a failed
/// fetch simply never leaves `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
}

impl DisplayState {
    pub fn phase(&self) -> Phase {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => Phase::Loaded,
            _ => Phase::Loading,
        }
    }

    /// The placeholder while absent or empty, otherwise the message verbatim.
    pub fn rendered_text(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => PLACEHOLDER,
        }
    }
}

pub struct App {
    pub endpoint: Endpoint,
    pub display: DisplayState,
    pub fetch_issued: bool,
    pub mounted: bool,
}

impl App {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            display: DisplayState::default(),
            fetch_issued: false,
            mounted: true,
        }
    }
}
