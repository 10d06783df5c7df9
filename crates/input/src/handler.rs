//! Terminal event translation.
//!
//! Reduces raw `crossterm` events to the handful of things the game loop reacts to.
//! Only key presses count; repeats and releases are dropped so a held key cannot
//! fire a command twice.

use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, pointer_click};
use crate::types::Command;

/// A terminal event the game loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    /// Left-button press at terminal cell `(x, y)`.
    Click { x: u16, y: u16 },
    /// Terminal size changed; the next frame must be redrawn in full.
    Resize { width: u16, height: u16 },
}

/// Translate one terminal event; `None` for anything the game ignores.
///
/// Unmapped key presses still arrive as [`Command::None`], since some screens close
/// on any key.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Command(
            handle_key_event(*key).unwrap_or(Command::None),
        )),
        Event::Mouse(mouse) => pointer_click(*mouse).map(|(x, y)| InputEvent::Click { x, y }),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn press_maps_to_command() {
        assert_eq!(
            translate_event(&key(KeyCode::Char('q'), KeyEventKind::Press)),
            Some(InputEvent::Command(Command::Quit))
        );
    }

    #[test]
    fn repeat_and_release_are_dropped() {
        assert_eq!(
            translate_event(&key(KeyCode::Char('q'), KeyEventKind::Repeat)),
            None
        );
        assert_eq!(
            translate_event(&key(KeyCode::Char('q'), KeyEventKind::Release)),
            None
        );
    }

    #[test]
    fn unmapped_press_is_none_command() {
        assert_eq!(
            translate_event(&key(KeyCode::Char('x'), KeyEventKind::Press)),
            Some(InputEvent::Command(Command::None))
        );
    }

    #[test]
    fn mouse_release_is_dropped() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate_event(&ev), None);
    }

    #[test]
    fn mouse_press_becomes_click() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate_event(&ev), Some(InputEvent::Click { x: 7, y: 3 }));
    }

    #[test]
    fn resize_is_reported() {
        assert_eq!(
            translate_event(&Event::Resize(100, 40)),
            Some(InputEvent::Resize {
                width: 100,
                height: 40
            })
        );
    }
}
