use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Pause or resume the title rotation and telemetry
    TogglePause,
    /// Scramble to the next phrase now
    NextPhrase,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::TogglePause,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::TogglePause,

        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextPhrase,
        (KeyCode::Enter, _) => Action::NextPhrase,

        _ => Action::None,
    }
}
