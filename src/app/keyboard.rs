use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use super::App;
use crate::session::{Screen, SubmitOutcome, ViewEvent};
use crate::translation::Language;

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Acts as a router: quit shortcuts first, then an open alert captures
    /// everything, then the key goes to the screen currently shown.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.quit();
            return;
        }

        // Alerts are blocking.
        if self.view().alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.orchestrator.view_mut().dismiss_alert();
            }
            return;
        }

        match self.view().screen() {
            Screen::Input => self.handle_input_key(key),
            Screen::Results => self.handle_results_key(key),
        }
    }

    /// Handles keys on the input screen: text editing, language radio and the
    /// translate shortcut.
    fn handle_input_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter if ctrl => self.translate(),
            KeyCode::Char('t') if ctrl => self.translate(),
            KeyCode::F(5) => self.translate(),
            KeyCode::Tab => self.change_language(1),
            KeyCode::BackTab => self.change_language(-1),
            KeyCode::Enter => self.composer().insert_newline(),
            KeyCode::Backspace => self.composer().backspace(),
            KeyCode::Delete => self.composer().delete(),
            KeyCode::Left => self.composer().move_left(),
            KeyCode::Right => self.composer().move_right(),
            KeyCode::Home => self.composer().move_to_line_start(),
            KeyCode::End => self.composer().move_to_line_end(),
            KeyCode::Char(ch) if !ctrl => self.composer().insert_char(ch),
            _ => {}
        }
    }

    /// Handles keys on the results screen, where the only action is starting over.
    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r') => {
                self.orchestrator.handle_event(ViewEvent::StartOver);
                self.status_message = String::from("Ready for a new translation");
            }
            _ => {}
        }
    }

    fn translate(&mut self) {
        self.status_message = match self.orchestrator.submit() {
            SubmitOutcome::Started(language) => format!(
                "Translating to {} via {}...",
                language,
                self.orchestrator.translator_name()
            ),
            SubmitOutcome::Rejected => String::from("Nothing to translate"),
            SubmitOutcome::Ignored => {
                debug!("Translate pressed while a request is in flight");
                return;
            }
        };
    }

    fn change_language(&mut self, delta: isize) {
        let language = self.orchestrator.view_mut().cycle_language(delta);
        self.orchestrator
            .handle_event(ViewEvent::LanguageChanged(language.ui_value().to_string()));
        self.status_message = format!("Target language: {}", language);
    }

    /// The language the next submission will use.
    pub fn selected_language(&self) -> Language {
        self.orchestrator.session().selected_language()
    }

    fn composer(&mut self) -> &mut super::InputComposer {
        self.orchestrator.view_mut().composer_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::event::Event;
    use crate::session::{Phase, Settled};
    use crate::test_support::FakeTranslator;
    use crate::translation::{TranslationError, Translator};

    fn app_with(translator: &Arc<FakeTranslator>) -> App {
        let translator: Arc<dyn Translator> = translator.clone();
        App::new(translator)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn press_ctrl(app: &mut App, ch: char) {
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[tokio::test]
    async fn spanish_translation_end_to_end() {
        let translator = Arc::new(FakeTranslator::new());
        translator.reply(Ok("Hola mundo".into()));
        let mut app = app_with(&translator);

        type_text(&mut app, "Hello world");
        press(&mut app, KeyCode::Tab);
        press_ctrl(&mut app, 't');
        assert!(app.view().is_translating());

        assert_eq!(app.orchestrator.settle().await, Settled::Translated);

        assert_eq!(translator.calls(), vec![("Hello world".to_string(), Language::Spanish)]);
        let view = app.view();
        assert_eq!(view.screen(), Screen::Results);
        assert_eq!(view.original(), "Hello world");
        assert_eq!(view.translated(), "Hola mundo");
        assert!(!view.is_translating());
    }

    #[tokio::test]
    async fn auth_failure_shows_blocking_alert_and_reenables_translate() {
        let translator = Arc::new(FakeTranslator::new());
        translator.reply(Err(TranslationError::Unauthorized));
        let mut app = app_with(&translator);

        type_text(&mut app, "Hello");
        press(&mut app, KeyCode::F(5));
        app.orchestrator.settle().await;

        assert_eq!(app.view().original(), "Hello");
        assert!(app.view().failed());
        assert!(!app.view().is_translating());
        let alert = app.view().alert().expect("credential alert").to_string();
        assert!(alert.contains("API key"));

        // The alert swallows keys until dismissed.
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.view().screen(), Screen::Results);
        press(&mut app, KeyCode::Enter);
        assert!(app.view().alert().is_none());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.view().screen(), Screen::Input);
        assert!(app.view().composer().is_empty());
        assert!(app.view().input_focused());
    }

    #[tokio::test]
    async fn empty_input_raises_notice_without_calling_client() {
        let translator = Arc::new(FakeTranslator::new());
        let mut app = app_with(&translator);

        type_text(&mut app, "   ");
        press_ctrl(&mut app, 't');
        tokio::task::yield_now().await;

        assert!(app.view().alert().is_some());
        assert_eq!(app.orchestrator.session().phase(), &Phase::Idle);
        assert!(translator.calls().is_empty());
    }

    #[tokio::test]
    async fn start_over_resets_language_radio() {
        let translator = Arc::new(FakeTranslator::new());
        translator.reply(Ok("こんにちは".into()));
        let mut app = app_with(&translator);

        type_text(&mut app, "Hello");
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.selected_language(), Language::Japanese);
        press_ctrl(&mut app, 't');
        app.orchestrator.settle().await;
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.selected_language(), Language::French);
        assert_eq!(app.view().checked_language(), Language::French);
        assert!(app.view().original().is_empty());
        assert!(app.view().translated().is_empty());
    }

    #[tokio::test]
    async fn tick_applies_finished_translation() {
        let translator = Arc::new(FakeTranslator::new());
        translator.reply(Ok("Bonjour".into()));
        let mut app = app_with(&translator);

        type_text(&mut app, "Hello");
        press_ctrl(&mut app, 't');
        for _ in 0..50 {
            tokio::task::yield_now().await;
            app.handle_event(Event::Tick);
            if !app.view().translated().is_empty() {
                break;
            }
        }

        assert_eq!(app.view().translated(), "Bonjour");
        assert_eq!(app.status_message, "Translated to French");
    }

    #[test]
    fn ctrl_q_quits() {
        let translator = Arc::new(FakeTranslator::new());
        let mut app = app_with(&translator);
        press_ctrl(&mut app, 'q');
        assert!(!app.running);
    }
}
