//! # GreetingView Component
//!
//! Shows the greeting centered in its area, or the placeholder while the
//! message is not available.
//!
//! The component only renders. Mounting (and the one fetch that goes with
//! it) is driven by the event loop through `Action::Mount`, so redrawing
//! this view any number of times never issues another request.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::{DisplayState, Phase};
use crate::tui::component::Component;

pub struct GreetingView<'a> {
    state: &'a DisplayState,
}

impl<'a> GreetingView<'a> {
    pub fn new(state: &'a DisplayState) -> Self {
        Self { state }
    }

    fn text_style(&self) -> Style {
        match self.state.phase() {
            Phase::Loaded => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Phase::Loading => Style::default().fg(Color::DarkGray),
        }
    }
}

impl Component for GreetingView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = self.state.rendered_text();
        let paragraph = Paragraph::new(Text::styled(text, self.text_style()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center vertically; long messages wrap and grow downwards.
        let lines = wrap_line_count(text, inner.width);
        let [text_area] = Layout::vertical([Constraint::Length(lines)])
            .flex(Flex::Center)
            .areas(inner);

        frame.render_widget(paragraph, text_area);
    }
}

/// Count wrapped lines for `text` at `width`, including explicit newlines.
fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let lines = textwrap::wrap(text, options);
    let mut count = lines.len().max(1);

    // textwrap doesn't always produce an empty trailing line for a trailing newline
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    u16::try_from(count).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(state: &DisplayState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                GreetingView::new(state).render(f, f.area());
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
    fn test_renders_placeholder_before_message() {
        let text = render_to_text(&DisplayState::default(), 40, 5);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_renders_message_when_loaded() {
        let state = DisplayState {
            message: Some("hello".to_string()),
        };
        let text = render_to_text(&state, 40, 5);
        assert!(text.contains("hello"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn test_renders_placeholder_for_empty_message() {
        let state = DisplayState {
            message: Some(String::new()),
        };
        let text = render_to_text(&state, 40, 5);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_message_is_vertically_centered() {
        let backend = TestBackend::new(20, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = DisplayState {
            message: Some("hi".to_string()),
        };
        terminal
            .draw(|f| {
                GreetingView::new(&state).render(f, f.area());
            })
            .unwrap();

        // Inner area is rows 1..=5; a single line centers on row 3.
        let buffer = terminal.backend().buffer();
        let row: String = (0..20u16).map(|x| buffer[(x, 3u16)].symbol()).collect();
        assert!(row.contains("hi"));
    }

    #[test]
    fn test_rerender_is_stable() {
        let state = DisplayState {
            message: Some("hello".to_string()),
        };
        let first = render_to_text(&state, 30, 5);
        let second = render_to_text(&state, 30, 5);
        assert_eq!(first, second);
        assert_eq!(first.matches("hello").count(), 1);
    }

    #[test]
    fn test_wrapped_words_are_not_clipped() {
        let state = DisplayState {
            message: Some("aaaaaa bbbbbb cccccc".to_string()),
        };
        // Inner width 10 fits one word per line
        let text = render_to_text(&state, 12, 9);
        assert!(text.contains("aaaaaa"));
        assert!(text.contains("bbbbbb"));
        assert!(text.contains("cccccc"));
    }

    #[test]
    fn test_multiline_message_keeps_newlines() {
        let state = DisplayState {
            message: Some("first line\nsecond line".to_string()),
        };
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                GreetingView::new(&state).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..8u16)
            .map(|y| (0..30u16).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();
        let first = rows.iter().position(|r| r.contains("first line")).unwrap();
        let second = rows.iter().position(|r| r.contains("second line")).unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_wrap_line_count() {
        assert_eq!(wrap_line_count("hello", 10), 1);
        assert_eq!(wrap_line_count("aaaaaa bbbbbb cccccc", 10), 3);
        assert_eq!(wrap_line_count("one\ntwo", 40), 2);
        assert_eq!(wrap_line_count("abcdefghij", 4), 3);
        assert_eq!(wrap_line_count("anything", 0), 1);
    }

    #[test]
    fn test_wrap_line_count_saturates() {
        let huge = "x\n".repeat(70_000);
        assert_eq!(wrap_line_count(&huge, 10), u16::MAX);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        render_to_text(&DisplayState::default(), 2, 2);
    }
}
