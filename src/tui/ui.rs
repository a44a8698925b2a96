use crate::core::state::{App, Phase};
use crate::tui::component::Component;
use crate::tui::components::{GreetingView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let loaded = app.display.phase() == Phase::Loaded;
    TitleBar::new(app.endpoint.url(), loaded).render(frame, title_area);
    GreetingView::new(&app.display).render(frame, main_area);
}
