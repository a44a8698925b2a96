//! # Greeting API
//!
//! Outbound I/O: the [`GreetingSource`] seam, its reqwest implementation and
//! the fetch task that feeds results back into the core as actions.

pub mod client;
pub mod task;
pub mod types;

pub use client::{FetchError, GreetingSource, HttpGreetingSource};
pub use task::{FetchTask, spawn_fetch};
pub use types::GreetingPayload;
