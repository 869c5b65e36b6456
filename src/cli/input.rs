//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Dot keys 1-6, hint and new-letter keys
//! - Ctrl+C graceful exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations (milliseconds)
    poll_timeout: Duration,
}

#[allow(dead_code)]
impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) => Ok(Some(key_event)),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Map a dot key to its pattern index (keys 1-6 → indices 0-5)
    pub fn dot_index(key: &KeyEvent) -> Option<usize> {
        match key.code {
            KeyCode::Char(c @ '1'..='6') => {
                // Only accept if no special modifiers (not Ctrl, not Alt)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    Some(c as usize - '1' as usize)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Check if key toggles the hint
    pub fn is_hint(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('h') | KeyCode::Char('H'))
    }

    /// Check if key requests a new target letter
    pub fn is_new_letter(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('n') | KeyCode::Char('N'))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_dot_keys() {
        assert_eq!(
            InputHandler::dot_index(&key(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(0)
        );
        assert_eq!(
            InputHandler::dot_index(&key(KeyCode::Char('6'), KeyModifiers::NONE)),
            Some(5)
        );
        assert_eq!(
            InputHandler::dot_index(&key(KeyCode::Char('7'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            InputHandler::dot_index(&key(KeyCode::Char('1'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_hint_and_new_letter_keys() {
        assert!(InputHandler::is_hint(&key(
            KeyCode::Char('h'),
            KeyModifiers::NONE
        )));
        assert!(InputHandler::is_new_letter(&key(
            KeyCode::Char('n'),
            KeyModifiers::NONE
        )));
        assert!(!InputHandler::is_hint(&key(
            KeyCode::Char('n'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_exit_keys() {
        assert!(InputHandler::is_exit(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(InputHandler::is_exit(&key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!InputHandler::is_exit(&key(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
