//! Start menu / difficulty selector.
//!
//! A single waiting state with three exits (one per [`Difficulty`]) plus quit.
//! Button regions are supplied by the presentation layer so that hit-testing
//! and drawing share one layout; they are refreshed whenever the viewport
//! changes.

use crate::types::{CursorShape, Difficulty, InputEvent, Point, Rect};

/// Result of feeding one event to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Still waiting for a choice.
    Pending,
    Selected(Difficulty),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Menu {
    /// One region per entry of [`Difficulty::ALL`], same order.
    buttons: [Rect; 3],
    pointer: Option<Point>,
}

impl Menu {
    pub fn new(buttons: [Rect; 3]) -> Self {
        Self {
            buttons,
            pointer: None,
        }
    }

    /// Start with a known pointer position, e.g. where it was when the last
    /// session ended.
    pub fn with_pointer(mut self, pointer: Option<Point>) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn set_buttons(&mut self, buttons: [Rect; 3]) {
        self.buttons = buttons;
    }

    /// Index of the button under the last known pointer position.
    pub fn hovered(&self) -> Option<usize> {
        let p = self.pointer?;
        self.button_at(p)
    }

    pub fn cursor(&self) -> CursorShape {
        if self.hovered().is_some() {
            CursorShape::Hand
        } else {
            CursorShape::Arrow
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> MenuOutcome {
        match event {
            InputEvent::Quit => MenuOutcome::Quit,
            InputEvent::Digit(d) => match Difficulty::from_digit(d) {
                Some(difficulty) => MenuOutcome::Selected(difficulty),
                None => MenuOutcome::Pending,
            },
            InputEvent::PointerClick(p) => {
                self.pointer = Some(p);
                match self.button_at(p) {
                    Some(i) => MenuOutcome::Selected(Difficulty::ALL[i]),
                    None => MenuOutcome::Pending,
                }
            }
            InputEvent::PointerMove(p) => {
                self.pointer = Some(p);
                MenuOutcome::Pending
            }
            InputEvent::Key(_) => MenuOutcome::Pending,
        }
    }

    fn button_at(&self, p: Point) -> Option<usize> {
        self.buttons.iter().position(|r| r.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn menu() -> Menu {
        Menu::new([
            Rect::new(10, 4, 20, 3),
            Rect::new(10, 8, 20, 3),
            Rect::new(10, 12, 20, 3),
        ])
    }

    #[test]
    fn digits_select_tiers() {
        let mut m = menu();
        assert_eq!(
            m.handle(InputEvent::Digit(1)),
            MenuOutcome::Selected(Difficulty::Beginner)
        );
        assert_eq!(
            m.handle(InputEvent::Digit(2)),
            MenuOutcome::Selected(Difficulty::Intermediate)
        );
        assert_eq!(
            m.handle(InputEvent::Digit(3)),
            MenuOutcome::Selected(Difficulty::Advanced)
        );
        assert_eq!(m.handle(InputEvent::Digit(4)), MenuOutcome::Pending);
        assert_eq!(m.handle(InputEvent::Digit(0)), MenuOutcome::Pending);
    }

    #[test]
    fn clicks_select_the_button_under_the_pointer() {
        let mut m = menu();
        assert_eq!(
            m.handle(InputEvent::PointerClick(Point::new(10, 4))),
            MenuOutcome::Selected(Difficulty::Beginner)
        );
        assert_eq!(
            m.handle(InputEvent::PointerClick(Point::new(29, 10))),
            MenuOutcome::Selected(Difficulty::Intermediate)
        );
        assert_eq!(
            m.handle(InputEvent::PointerClick(Point::new(15, 14))),
            MenuOutcome::Selected(Difficulty::Advanced)
        );
    }

    #[test]
    fn clicks_outside_buttons_are_ignored() {
        let mut m = menu();
        // The gap row between the first two buttons.
        assert_eq!(
            m.handle(InputEvent::PointerClick(Point::new(15, 7))),
            MenuOutcome::Pending
        );
        assert_eq!(
            m.handle(InputEvent::PointerClick(Point::new(30, 4))),
            MenuOutcome::Pending
        );
    }

    #[test]
    fn arrows_do_nothing_and_quit_quits() {
        let mut m = menu();
        assert_eq!(m.handle(InputEvent::Key(Direction::Up)), MenuOutcome::Pending);
        assert_eq!(m.handle(InputEvent::Quit), MenuOutcome::Quit);
    }

    #[test]
    fn hover_tracks_pointer_and_cursor_shape() {
        let mut m = menu();
        assert_eq!(m.hovered(), None);
        assert_eq!(m.cursor(), CursorShape::Arrow);

        m.handle(InputEvent::PointerMove(Point::new(12, 9)));
        assert_eq!(m.hovered(), Some(1));
        assert_eq!(m.cursor(), CursorShape::Hand);

        m.handle(InputEvent::PointerMove(Point::new(0, 0)));
        assert_eq!(m.hovered(), None);
        assert_eq!(m.cursor(), CursorShape::Arrow);
    }

    #[test]
    fn seeded_pointer_hovers_before_any_move() {
        let m = menu().with_pointer(Some(Point::new(20, 13)));
        assert_eq!(m.hovered(), Some(2));
        assert_eq!(m.cursor(), CursorShape::Hand);

        assert_eq!(menu().with_pointer(None).hovered(), None);
    }

    #[test]
    fn hover_follows_relayout() {
        let mut m = menu();
        m.handle(InputEvent::PointerMove(Point::new(12, 5)));
        assert_eq!(m.hovered(), Some(0));

        m.set_buttons([
            Rect::new(40, 4, 20, 3),
            Rect::new(40, 8, 20, 3),
            Rect::new(40, 12, 20, 3),
        ]);
        assert_eq!(m.hovered(), None);
    }
}
