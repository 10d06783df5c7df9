//! Key and mouse mapping from terminal events to commands and clicks.

use crate::types::{Command, Difficulty};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Difficulty shortcuts mirror the menu order.
        KeyCode::Char('1') => Some(Command::StartGame(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::StartGame(Difficulty::Hard)),
        KeyCode::Char('3') => Some(Command::StartGame(Difficulty::Hell)),
        KeyCode::Char('4') => Some(Command::StartGame(Difficulty::Purgatory)),

        // Revive prompt
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::AcceptRevive),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::DeclineRevive),

        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ReturnToMenu),

        _ if should_quit(key) => Some(Command::Quit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Terminal cell `(column, row)` of a left-button press.
pub fn pointer_click(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_difficulty_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(Command::StartGame(Difficulty::Easy))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('4'))),
            Some(Command::StartGame(Difficulty::Purgatory))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_revive_and_menu_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Y'))),
            Some(Command::AcceptRevive)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(Command::DeclineRevive)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(Command::ReturnToMenu)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_pointer_click_left_press_only() {
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Down(MouseButton::Left), 12, 4)),
            Some((12, 4))
        );
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Up(MouseButton::Left), 12, 4)),
            None
        );
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Down(MouseButton::Right), 12, 4)),
            None
        );
        assert_eq!(pointer_click(mouse(MouseEventKind::Moved, 1, 1)), None);
    }
}
