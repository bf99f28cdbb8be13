//! The terminal implementation of the orchestrator's `View` boundary.
//!
//! `TerminalView` only holds what the screen shows; `ui::render` draws it and
//! `App` feeds it key presses.

use log::debug;
use unicode_width::UnicodeWidthChar;

use crate::session::{Screen, View};
use crate::translation::{Language, TranslationResponse};

/// Multi-line text buffer with a byte-indexed cursor, used for the input area.
#[derive(Clone, Default)]
pub struct InputComposer {
    buffer: String,
    cursor: usize,
}

impl InputComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Inserts a character at the current cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    /// Deletes the character at the cursor (delete).
    pub fn delete(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            let end = self.cursor + ch.len_utf8();
            self.buffer.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Moves the cursor to the start of the current line.
    pub fn move_to_line_start(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
    }

    /// Moves the cursor to the end of the current line.
    pub fn move_to_line_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|pos| self.cursor + pos)
            .unwrap_or(self.buffer.len());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Splits the buffer into display rows, wrapping at `width` cells.
    ///
    /// Uses the same rules as `cursor_display_position`, so the cursor always
    /// lands on the rendered text.
    pub fn wrapped_lines(&self, width: usize) -> Vec<String> {
        let mut lines = vec![String::new()];
        if width == 0 {
            return lines;
        }
        let mut col = 0usize;
        for ch in self.buffer.chars() {
            if ch == '\n' {
                lines.push(String::new());
                col = 0;
                continue;
            }
            let char_width = char_width(ch);
            if col + char_width > width {
                lines.push(String::new());
                col = 0;
            }
            if let Some(line) = lines.last_mut() {
                line.push(ch);
            }
            col += char_width;
        }
        lines
    }

    /// Calculates the (col, row) position of the cursor for rendering.
    pub fn cursor_display_position(&self, width: usize) -> (u16, u16) {
        if width == 0 {
            return (0, 0);
        }
        let mut col = 0usize;
        let mut row = 0usize;
        for ch in self.buffer[..self.cursor].chars() {
            if ch == '\n' {
                row += 1;
                col = 0;
                continue;
            }
            let char_width = char_width(ch);
            if col + char_width > width {
                row += 1;
                col = 0;
            }
            col += char_width;
        }
        if col >= width {
            row += 1;
            col = 0;
        }
        (col as u16, row as u16)
    }
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1).max(1)
}

/// Everything the terminal screen displays.
#[derive(Default)]
pub struct TerminalView {
    composer: InputComposer,
    language_index: usize,
    translating: bool,
    original: String,
    translated: String,
    failed: bool,
    screen: Screen,
    alert: Option<String>,
    input_focused: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            input_focused: true,
            ..Self::default()
        }
    }

    pub fn composer(&self) -> &InputComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut InputComposer {
        &mut self.composer
    }

    /// The language whose radio button is checked.
    pub fn checked_language(&self) -> Language {
        Language::ALL
            .get(self.language_index)
            .copied()
            .unwrap_or_default()
    }

    /// Moves the radio selection and returns the newly checked language.
    pub fn cycle_language(&mut self, delta: isize) -> Language {
        let len = Language::ALL.len() as isize;
        self.language_index = (self.language_index as isize + delta).rem_euclid(len) as usize;
        self.checked_language()
    }

    pub fn is_translating(&self) -> bool {
        self.translating
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn translated(&self) -> &str {
        &self.translated
    }

    /// True when the translation panel holds a failure message.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }
}

impl View for TerminalView {
    fn input_text(&self) -> String {
        self.composer.buffer().trim().to_string()
    }

    fn selected_language(&self) -> String {
        self.checked_language().ui_value().to_string()
    }

    fn show_translating(&mut self) {
        self.translating = true;
    }

    fn hide_translating(&mut self) {
        self.translating = false;
    }

    fn display_results(&mut self, response: &TranslationResponse) {
        self.original = response.original_text.clone();
        self.translated = response.translated_text.clone();
        self.failed = false;
    }

    fn display_error(&mut self, original_text: &str, message: &str) {
        self.original = original_text.to_string();
        self.translated = message.to_string();
        self.failed = true;
    }

    fn show_alert(&mut self, message: &str) {
        debug!("Alert: {}", message);
        self.alert = Some(message.to_string());
    }

    fn show_input_view(&mut self) {
        self.screen = Screen::Input;
    }

    fn show_results_view(&mut self) {
        self.screen = Screen::Results;
        self.input_focused = false;
    }

    fn clear(&mut self) {
        self.composer.clear();
        self.original.clear();
        self.translated.clear();
        self.failed = false;
    }

    fn select_language(&mut self, language: Language) {
        self.language_index = Language::ALL
            .iter()
            .position(|candidate| *candidate == language)
            .unwrap_or(0);
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }
}
