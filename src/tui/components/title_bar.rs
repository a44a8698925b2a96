//! # TitleBar Component
//!
//! Top status bar naming the app and the endpoint the greeting comes from.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.endpoint.url(), false);
//! title_bar.render(frame, area);
//! ```
//!
//! ### No error reporting
//!
//! Fetch failures never reach this bar. The only thing that changes is the
//! `loaded` marker, which flips once the greeting has arrived.
//!
//! ## Conditional Formatting
//!
//! 1. **Loaded**: `"Greeter (endpoint: http://…/api/ping) | ✓ | Esc to quit"`
//! 2. **Waiting**: `"Greeter (endpoint: http://…/api/ping) | Esc to quit"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `endpoint`: URL the greeting is fetched from
/// - `loaded`: whether the greeting has arrived
pub struct TitleBar {
    pub endpoint: String,
    pub loaded: bool,
}

impl TitleBar {
    pub fn new(endpoint: String, loaded: bool) -> Self {
        Self { endpoint, loaded }
    }

    fn title_text(&self) -> String {
        if self.loaded {
            format!("Greeter (endpoint: {}) | ✓ | Esc to quit", self.endpoint)
        } else {
            format!("Greeter (endpoint: {}) | Esc to quit", self.endpoint)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
        frame.render_widget(Line::from(Span::styled(self.title_text(), style)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_new() {
        let title_bar = TitleBar::new("http://localhost:5000/api/ping".to_string(), false);

        assert_eq!(title_bar.endpoint, "http://localhost:5000/api/ping");
        assert!(!title_bar.loaded);
    }

    #[test]
    fn test_title_bar_waiting() {
        let mut title_bar = TitleBar::new("http://localhost:5000/api/ping".to_string(), false);
        let text = render_to_text(&mut title_bar);

        assert!(text.contains("Greeter"));
        assert!(text.contains("http://localhost:5000/api/ping"));
        assert!(text.contains("Esc to quit"));
        assert!(!text.contains('✓'));
    }

    #[test]
    fn test_title_bar_loaded() {
        let mut title_bar = TitleBar::new("http://localhost:5173/api/data".to_string(), true);
        let text = render_to_text(&mut title_bar);

        assert!(text.contains("http://localhost:5173/api/data"));
        assert!(text.contains('✓'));
    }
}
