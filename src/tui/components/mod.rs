//! # TUI Components
//!
//! UI components for the terminal interface. Both are stateless and
//! props-based: they receive everything they show as fields and render it.
//!
//! - `TitleBar`: top line with the endpoint and the quit hint
//! - `GreetingView`: the greeting, or the placeholder until it arrives
//!
//! Each component file contains its own rendering logic and tests.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! └── greeting_view.rs  (Greeting / placeholder)
//! ```

mod greeting_view;
mod title_bar;

pub use greeting_view::GreetingView;
pub use title_bar::TitleBar;
