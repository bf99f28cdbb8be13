use log::debug;

use super::App;
use crate::session::{Phase, Screen};

// Implementation block for tick-related logic in the App.
impl App {
    /// Called on every "tick" of the application loop.
    ///
    /// Applies translation results that arrived from the background task since
    /// the previous tick.
    pub(crate) fn on_tick(&mut self) {
        if self.orchestrator.poll_completions() == 0 {
            return;
        }
        debug!("Applied translation completions on tick");
        self.status_message = match self.orchestrator.session().phase() {
            Phase::Result(response) => format!("Translated to {}", response.target_language),
            Phase::Error(failure) => format!("Translation failed: {}", failure.message),
            Phase::Translating(_) => String::from("Translating..."),
            Phase::Idle if self.view().screen() == Screen::Input => {
                String::from("Ready for a new translation")
            }
            Phase::Idle => String::new(),
        };
    }
}
