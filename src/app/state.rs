//! Defines the core state structure for the application.

use std::sync::Arc;

use log::debug;

use crate::event::Event;
use crate::session::Orchestrator;
use crate::translation::Translator;

use super::TerminalView;

/// The main application state.
///
/// The orchestrator owns the session and the terminal view; `App` adds the
/// bits that only matter to the terminal loop.
pub struct App {
    /// Cleared when the user asks to quit.
    pub running: bool,
    /// The request orchestrator, driving the terminal view.
    pub(crate) orchestrator: Orchestrator<TerminalView>,
    /// The message currently displayed in the status bar.
    pub status_message: String,
}

impl App {
    /// Creates a new instance of the `App` state around the given translator.
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        debug!("Initializing App with translator {}", translator.name());
        Self {
            running: true,
            orchestrator: Orchestrator::new(translator, TerminalView::new()),
            status_message: String::from("Type your text, Tab to pick a language, Ctrl+T to translate"),
        }
    }

    pub fn view(&self) -> &TerminalView {
        self.orchestrator.view()
    }

    /// Routes a terminal event to the matching handler.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.handle_key(key),
            Event::Resize => {}
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
