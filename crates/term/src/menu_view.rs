//! MenuView: the start screen.
//!
//! Pure like [`crate::GameView`]. The button layout is exposed separately so the
//! engine can hit-test clicks against exactly what is drawn.

use crate::core::MenuScreen;
use crate::fb::{CellStyle, FrameBuffer};
use crate::game_view::Viewport;
use crate::palette;
use crate::types::{Difficulty, Rect};

pub const BUTTON_W: u16 = 30;
pub const BUTTON_H: u16 = 3;
const BUTTON_GAP: u16 = 1;

pub const TITLE: &str = "S N A K E   G A M E";
pub const HINT: &str = "Press 1/2/3 or click to select level";

#[derive(Debug, Clone, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    /// Three buttons stacked around the vertical centre.
    pub fn layout(&self, viewport: Viewport) -> [Rect; 3] {
        let x = viewport.width.saturating_sub(BUTTON_W) / 2;
        let mid = viewport.height / 2;
        let step = BUTTON_H + BUTTON_GAP;
        let top = mid.saturating_sub(step + BUTTON_H / 2);
        [
            Rect::new(x, top, BUTTON_W, BUTTON_H),
            Rect::new(x, top + step, BUTTON_W, BUTTON_H),
            Rect::new(x, top + 2 * step, BUTTON_W, BUTTON_H),
        ]
    }

    pub fn render_into(&self, screen: &MenuScreen, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(palette::TEXT.cell(' '));

        let buttons = self.layout(viewport);
        let quarter = viewport.height / 4;

        // Keep title and score above the first button even on short terminals.
        let title_y = quarter.min(buttons[0].y.saturating_sub(3));
        fb.put_str_centered(0, viewport.width, title_y, TITLE, palette::TEXT.bold());
        fb.put_str_centered(
            0,
            viewport.width,
            title_y + 1 + (buttons[0].y.saturating_sub(title_y + 1)) / 2,
            &screen.high_score_text(),
            palette::TEXT,
        );

        for (i, (rect, difficulty)) in buttons.iter().zip(Difficulty::ALL).enumerate() {
            let bg = if screen.hovered == Some(i) {
                palette::BUTTON_HOVER
            } else {
                palette::BUTTON_BG
            };
            let style = CellStyle::new(palette::WHITE, bg);
            fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
            fb.put_str_centered(rect.x, rect.w, rect.y + rect.h / 2, difficulty.label(), style);
        }

        if viewport.height >= 2 {
            fb.put_str_centered(0, viewport.width, viewport.height - 2, HINT, palette::HINT);
        }
    }

    pub fn render(&self, screen: &MenuScreen, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }
}
