//! GameView: maps a [`GameFrame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the bordered play field, a two-column gap, then the
//! sidebar (score, high score, progress bar, key hints). The whole group is
//! centred in the viewport. Big terminals get two columns per board cell; an
//! 80x24 terminal gets half-block cells.

use crate::core::GameFrame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette;
use crate::types::Board;

/// Sidebar width in terminal columns.
pub const SIDEBAR_COLS: u16 = 24;

/// Progress bar width in terminal columns.
pub const BAR_COLS: u16 = 20;

const SIDEBAR_GAP: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// How board cells map onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Each cell is two columns by one row. Roughly square on most fonts.
    Wide,
    /// Each cell is one column by half a row; two board rows share one
    /// terminal row through `▀` with the upper cell in the foreground and the
    /// lower one in the background.
    HalfBlock,
}

impl Scale {
    /// Largest first.
    pub const ALL: [Scale; 2] = [Scale::Wide, Scale::HalfBlock];
}

/// A lightweight terminal renderer for the snake game screen.
///
/// Picks the largest [`Scale`] that fits the viewport, so a classic 80x24
/// terminal still shows the whole 30x30 board.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    /// Bordered play-field size in terminal cells.
    pub fn field_size(&self, board: Board, scale: Scale) -> (u16, u16) {
        let (cols, rows) = (board.cols() as u16, board.rows() as u16);
        match scale {
            Scale::Wide => (cols * 2 + 2, rows + 2),
            Scale::HalfBlock => (cols + 2, rows.div_ceil(2) + 2),
        }
    }

    /// Smallest viewport that shows the field and the sidebar at `scale`.
    pub fn required_size(&self, board: Board, scale: Scale) -> (u16, u16) {
        let (w, h) = self.field_size(board, scale);
        (w + SIDEBAR_GAP + SIDEBAR_COLS, h)
    }

    /// Largest scale that fits `viewport`, if any.
    pub fn scale_for(&self, board: Board, viewport: Viewport) -> Option<Scale> {
        Scale::ALL.into_iter().find(|&scale| {
            let (w, h) = self.required_size(board, scale);
            viewport.width >= w && viewport.height >= h
        })
    }

    /// Top-left corner of the field border for `viewport`.
    pub fn origin(&self, board: Board, scale: Scale, viewport: Viewport) -> (u16, u16) {
        let (total_w, total_h) = self.required_size(board, scale);
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(total_h) / 2,
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    ///
    /// Returns `false` when the viewport is too small for any scale; the
    /// framebuffer then holds a notice instead of the board.
    pub fn render_into(
        &self,
        frame: &GameFrame<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> bool {
        fb.resize(viewport.width, viewport.height);
        fb.clear(palette::TEXT.cell(' '));

        let Some(scale) = self.scale_for(frame.board, viewport) else {
            let (need_w, need_h) = self.required_size(frame.board, Scale::HalfBlock);
            self.draw_too_small(fb, viewport, need_w, need_h);
            return false;
        };

        let (start_x, start_y) = self.origin(frame.board, scale, viewport);
        let (field_w, field_h) = self.field_size(frame.board, scale);

        draw_border(fb, start_x, start_y, field_w, field_h, palette::BORDER);

        match scale {
            Scale::Wide => self.draw_wide(fb, frame, start_x + 1, start_y + 1),
            Scale::HalfBlock => self.draw_half_block(fb, frame, start_x + 1, start_y + 1),
        }

        let panel_x = start_x + field_w + SIDEBAR_GAP;
        self.draw_sidebar(fb, frame, panel_x, start_y, field_h);
        true
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &GameFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_wide(&self, fb: &mut FrameBuffer, frame: &GameFrame<'_>, x0: u16, y0: u16) {
        let cell = |fb: &mut FrameBuffer, col: u16, row: u16, ch: char, style: CellStyle| {
            fb.fill_rect(x0 + col * 2, y0 + row, 2, 1, ch, style);
        };

        // Grid: one dim dot per empty cell.
        for row in 0..frame.board.rows() as u16 {
            for col in 0..frame.board.cols() as u16 {
                cell(fb, col, row, '·', palette::GRID);
            }
        }

        for (i, segment) in frame.snake.iter().enumerate() {
            if let Some((col, row)) = frame.board.cell_index(*segment) {
                let style = if i == 0 {
                    palette::SNAKE.bold()
                } else {
                    palette::SNAKE
                };
                cell(fb, col, row, '█', style);
            }
        }

        if let Some((col, row)) = frame.board.cell_index(frame.food) {
            cell(fb, col, row, '█', palette::FOOD);
        }
    }

    fn draw_half_block(&self, fb: &mut FrameBuffer, frame: &GameFrame<'_>, x0: u16, y0: u16) {
        let rows = (frame.board.rows() as u16).div_ceil(2);
        fb.fill_rect(x0, y0, frame.board.cols() as u16, rows, '▀', palette::EMPTY_HALF);

        for (i, segment) in frame.snake.iter().enumerate() {
            if let Some((col, row)) = frame.board.cell_index(*segment) {
                let color = if i == 0 { palette::HEAD_GREEN } else { palette::GREEN };
                paint_half(fb, x0 + col, y0, row, color);
            }
        }

        if let Some((col, row)) = frame.board.cell_index(frame.food) {
            paint_half(fb, x0 + col, y0, row, palette::RED);
        }
    }

    fn draw_sidebar(
        &self,
        fb: &mut FrameBuffer,
        frame: &GameFrame<'_>,
        x: u16,
        y: u16,
        h: u16,
    ) {
        let text = palette::SIDEBAR_TEXT;
        fb.fill_rect(x, y, SIDEBAR_COLS, h, ' ', text);

        let left = x + 2;
        let end = fb.put_str(left, y + 1, "SCORE: ", text.bold());
        fb.put_u32(end, y + 1, frame.score, text);

        let end = fb.put_str(left, y + 3, "HI-SCORE: ", text.bold());
        fb.put_u32(end, y + 3, frame.high_score, text);

        let filled = bar_cols(frame.bar_fraction);
        fb.fill_rect(left, y + 5, filled, 1, '█', palette::BAR_FILL);
        fb.fill_rect(left + filled, y + 5, BAR_COLS - filled, 1, '░', palette::BAR_TRACK);

        let hint = CellStyle::new(palette::HINT_FG, palette::SIDEBAR_BG);
        if h >= 10 {
            fb.put_str(left, y + h - 3, "Arrows/WASD: steer", hint);
            fb.put_str(left, y + h - 2, "Q: quit", hint);
        }
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
        let mid = viewport.height / 2;
        fb.put_str_centered(
            0,
            viewport.width,
            mid.saturating_sub(1),
            "TERMINAL TOO SMALL",
            palette::TEXT.bold(),
        );

        // "need WxH" centred without allocating.
        let digits = |v: u16| if v >= 100 { 3 } else if v >= 10 { 2 } else { 1 };
        let len = 5 + digits(need_w) + 1 + digits(need_h);
        let mut x = viewport.width.saturating_sub(len) / 2;
        x = fb.put_str(x, mid, "need ", palette::HINT);
        x = fb.put_u32(x, mid, need_w as u32, palette::HINT);
        x = fb.put_str(x, mid, "x", palette::HINT);
        fb.put_u32(x, mid, need_h as u32, palette::HINT);
    }
}

/// Color one board row inside a `▀` cell: even rows are the upper half.
fn paint_half(fb: &mut FrameBuffer, x: u16, y0: u16, row: u16, color: Rgb) {
    let y = y0 + row / 2;
    let Some(mut cell) = fb.get(x, y) else {
        return;
    };
    if row % 2 == 0 {
        cell.style.fg = color;
    } else {
        cell.style.bg = color;
    }
    cell.ch = '▀';
    fb.set(x, y, cell);
}

/// Filled columns of the progress bar; truncates like the classic sidebar.
pub fn bar_cols(fraction: f32) -> u16 {
    (fraction.clamp(0.0, 1.0) * BAR_COLS as f32) as u16
}

pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
