//! # Core Application Logic
//!
//! This module contains Greeter's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (DisplayState) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Endpoint + config    │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    API     │
//!          │  Adapter   │                │  (reqwest) │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `DisplayState`, the one value the view renders
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`endpoint`]: base URL + path of the greeting backend
//! - [`config`]: file / env / CLI resolution into a `ResolvedConfig`

pub mod action;
pub mod config;
pub mod endpoint;
pub mod state;
