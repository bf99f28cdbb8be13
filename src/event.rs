use crossterm::event::KeyEvent;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// A tick event, sent at a regular interval; pending translations are applied on it.
    Tick,
    /// A key press event.
    Key(KeyEvent),
    /// The terminal was resized; the next frame picks up the new size.
    Resize,
}
