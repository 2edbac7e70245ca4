use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleScan,
    StartScan,
    StopScan,
    NextWaveform,
    SpeedUp,
    SlowDown,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scan session
        (KeyCode::Char(' '), _) => Action::ToggleScan,
        (KeyCode::Enter, _) => Action::ToggleScan,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::StartScan,
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::StopScan,

        // Animation
        (KeyCode::Char('w'), KeyModifiers::NONE) => Action::NextWaveform,
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::SpeedUp,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::SlowDown,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
    }

    #[test]
    fn test_scan_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char(' '), KeyModifiers::NONE)), Action::ToggleScan);
        assert_eq!(handle_key_event(key(KeyCode::Char('s'), KeyModifiers::NONE)), Action::StartScan);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::StopScan);
    }

    #[test]
    fn test_speed_keys() {
        // '+' arrives with SHIFT on most layouts
        assert_eq!(handle_key_event(key(KeyCode::Char('+'), KeyModifiers::SHIFT)), Action::SpeedUp);
        assert_eq!(handle_key_event(key(KeyCode::Char('-'), KeyModifiers::NONE)), Action::SlowDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE)), Action::None);
    }
}
