//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events and fetch results into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Mount Lifecycle
//!
//! The first frame is drawn with the placeholder, then `Action::Mount` is
//! dispatched exactly once and the reducer answers with `Effect::SpawnFetch`.
//! Redraws after that only render. The spawned [`FetchTask`] lives in the
//! [`Session`]; quitting or leaving the loop drops it, which aborts a request
//! that is still in flight.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: polls input every 100ms so the greeting shows up promptly.
//! - **Loaded**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{FetchTask, GreetingSource, HttpGreetingSource, spawn_fetch};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Phase};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Build the greeting source for a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn GreetingSource> {
    Arc::new(HttpGreetingSource::new(config.endpoint.clone()))
}

/// Must be called from within a tokio runtime; the fetch is spawned on it.
pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let source = build_source(&config);
    let session = Session::new(App::new(config.endpoint), source);

    let mut terminal = ratatui::init();
    info!("Terminal initialized");
    let result = event_loop(&mut terminal, session);
    ratatui::restore();
    result
}

/// Everything the event loop carries between iterations: core state, the
/// fetch channel and the in-flight request.
struct Session {
    app: App,
    source: Arc<dyn GreetingSource>,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
    fetch: Option<FetchTask>,
    needs_redraw: bool,
}

impl Session {
    fn new(app: App, source: Arc<dyn GreetingSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            app,
            source,
            tx,
            rx,
            fetch: None,
            needs_redraw: true, // Force first frame
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        ui::draw_ui(frame, &self.app);
        self.needs_redraw = false;
    }

    /// Dispatches the one `Action::Mount` of the view's lifetime.
    fn mount(&mut self) {
        let effect = update(&mut self.app, Action::Mount);
        self.apply_effect(effect);
    }

    /// Applies terminal events. Returns true when the loop should stop.
    fn handle_events(&mut self, events: impl IntoIterator<Item = TuiEvent>) -> bool {
        let mut should_quit = false;
        for event in events {
            self.needs_redraw = true;
            match event {
                TuiEvent::Quit => {
                    let effect = update(&mut self.app, Action::Quit);
                    should_quit |= self.apply_effect(effect);
                }
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
            }
        }
        should_quit
    }

    /// Applies results from the fetch task. Returns true when the loop should stop.
    fn drain_results(&mut self) -> bool {
        let mut should_quit = false;
        while let Ok(action) = self.rx.try_recv() {
            self.needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut self.app, action);
            should_quit |= self.apply_effect(effect);
        }
        should_quit
    }

    fn poll_timeout(&self) -> Duration {
        match self.app.display.phase() {
            Phase::Loading => Duration::from_millis(100),
            Phase::Loaded => Duration::from_millis(500),
        }
    }

    /// Carries out an effect. Returns true when the loop should stop.
    fn apply_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => false,
            Effect::SpawnFetch => {
                self.fetch = Some(spawn_fetch(self.source.clone(), self.tx.clone()));
                false
            }
            Effect::Quit => {
                self.unmount();
                true
            }
        }
    }

    /// Drops the fetch task, aborting the request if it is still pending.
    fn unmount(&mut self) {
        if let Some(task) = self.fetch.take() {
            debug!("Releasing fetch task (finished={})", task.is_finished());
        }
    }
}

fn event_loop(terminal: &mut DefaultTerminal, mut session: Session) -> io::Result<()> {
    terminal.draw(|f| session.render(f))?;
    session.mount();

    loop {
        if session.needs_redraw {
            terminal.draw(|f| session.render(f))?;
        }

        // Collect first event + ALL pending events before next draw
        let mut events = Vec::new();
        let mut next = poll_event_timeout(session.poll_timeout())?;
        while let Some(event) = next {
            events.push(event);
            next = poll_event_immediate()?;
        }

        if session.handle_events(events) || session.drain_results() {
            break;
        }
    }

    session.unmount();
    info!("Greeting view unmounted");
    Ok(())
}
