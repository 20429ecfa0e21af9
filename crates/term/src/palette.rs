//! Colors of the classic windowed game, reused for the terminal.

use crate::fb::{CellStyle, Rgb};

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GREEN: Rgb = Rgb::new(0, 200, 0);
pub const HEAD_GREEN: Rgb = Rgb::new(90, 255, 90);
pub const RED: Rgb = Rgb::new(200, 0, 0);
pub const DARK_GRAY: Rgb = Rgb::new(40, 40, 40);
pub const SIDEBAR_BG: Rgb = Rgb::new(20, 20, 20);
pub const BAR_COLOR: Rgb = Rgb::new(0, 100, 200);
pub const BUTTON_BG: Rgb = Rgb::new(60, 60, 60);
pub const BUTTON_HOVER: Rgb = Rgb::new(100, 100, 100);

pub const BORDER_FG: Rgb = Rgb::new(90, 90, 90);
pub const HINT_FG: Rgb = Rgb::new(110, 110, 110);

pub const TEXT: CellStyle = CellStyle::new(WHITE, BLACK);
pub const SIDEBAR_TEXT: CellStyle = CellStyle::new(WHITE, SIDEBAR_BG);
pub const GRID: CellStyle = CellStyle::new(DARK_GRAY, BLACK);
pub const BORDER: CellStyle = CellStyle::new(BORDER_FG, BLACK);
pub const SNAKE: CellStyle = CellStyle::new(GREEN, BLACK);
pub const FOOD: CellStyle = CellStyle::new(RED, BLACK);
pub const BAR_FILL: CellStyle = CellStyle::new(BAR_COLOR, SIDEBAR_BG);
pub const BAR_TRACK: CellStyle = CellStyle::new(DARK_GRAY, SIDEBAR_BG);
pub const HINT: CellStyle = CellStyle::new(HINT_FG, BLACK);
pub const EMPTY_HALF: CellStyle = CellStyle::new(BLACK, BLACK);
