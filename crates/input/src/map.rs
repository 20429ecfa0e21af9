//! Mapping from terminal events to game input events.

use crate::types::{Direction, InputEvent, Point};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event. Resize, focus and paste events carry no game input.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

/// Map keyboard input. Only presses count; repeats and releases are dropped.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::Key(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::Key(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::Key(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::Key(Direction::Right))
        }

        // Menu hotkeys
        KeyCode::Char(c @ '0'..='9') => Some(InputEvent::Digit(c as u8 - b'0')),

        _ => None,
    }
}

/// Map mouse input: primary-button presses and pointer motion.
pub fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    let at = Point::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerClick(at)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMove(at)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::Key(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(InputEvent::Key(Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::Key(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(InputEvent::Key(Direction::Right))
        );

        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('W'))),
            Some(InputEvent::Key(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(InputEvent::Key(Direction::Left))
        );
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('1'))),
            Some(InputEvent::Digit(1))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('3'))),
            Some(InputEvent::Digit(3))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('7'))),
            Some(InputEvent::Digit(7))
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Q'))),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_releases_and_repeats_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..release
        };
        assert_eq!(map_key(repeat), None);
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 12, 7)),
            Some(InputEvent::PointerClick(Point::new(12, 7)))
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Moved, 3, 4)),
            Some(InputEvent::PointerMove(Point::new(3, 4)))
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 3, 4)),
            None
        );
        assert_eq!(map_mouse(mouse(MouseEventKind::ScrollUp, 3, 4)), None);
    }

    #[test]
    fn test_resize_is_not_input() {
        assert_eq!(map_event(Event::Resize(80, 24)), None);
        assert_eq!(
            map_event(Event::Key(KeyEvent::from(KeyCode::Char('2')))),
            Some(InputEvent::Digit(2))
        );
    }
}
