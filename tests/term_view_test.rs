use tui_snake::core::{bar_fraction, GameFrame, MenuScreen};
use tui_snake::term::{palette, FrameBuffer, GameView, MenuView, Scale, Viewport, BAR_COLS};
use tui_snake::types::{Board, Position};

fn frame(snake: &[Position], food: Position, score: u32, high_score: u32) -> GameFrame<'_> {
    GameFrame {
        board: Board::default(),
        snake,
        food,
        score,
        high_score,
        bar_fraction: bar_fraction(score),
    }
}

#[test]
fn game_view_renders_border_corners() {
    let snake = [Position::new(300, 300)];
    let fb = GameView::default().render(
        &frame(&snake, Position::new(0, 0), 0, 0),
        Viewport::new(88, 32),
    );

    // 30 cells * 2 columns + border = 62 wide, 30 rows + border = 32 high.
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(61, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 31).unwrap().ch, '└');
    assert_eq!(fb.get(61, 31).unwrap().ch, '┘');
}

#[test]
fn game_view_draws_cells_two_columns_wide() {
    let snake = [Position::new(300, 300), Position::new(300, 320)];
    let fb = GameView::default().render(
        &frame(&snake, Position::new(0, 0), 0, 0),
        Viewport::new(88, 32),
    );

    // Head: column 15, row 15 -> x = 1 + 30, y = 1 + 15.
    let head = fb.get(31, 16).unwrap();
    assert_eq!(head.ch, '█');
    assert_eq!(head.style.fg, palette::GREEN);
    assert!(head.style.bold);
    assert_eq!(fb.get(32, 16).unwrap().ch, '█');

    let tail = fb.get(31, 17).unwrap();
    assert_eq!(tail.ch, '█');
    assert!(!tail.style.bold);

    let food = fb.get(1, 1).unwrap();
    assert_eq!(food.ch, '█');
    assert_eq!(food.style.fg, palette::RED);
    assert_eq!(fb.get(2, 1).unwrap().style.fg, palette::RED);

    // Empty cells show the grid.
    assert_eq!(fb.get(3, 1).unwrap().ch, '·');
}

#[test]
fn food_under_the_snake_is_still_visible() {
    let snake = [Position::new(300, 300)];
    let fb = GameView::default().render(
        &frame(&snake, Position::new(300, 300), 0, 0),
        Viewport::new(88, 32),
    );
    assert_eq!(fb.get(31, 16).unwrap().style.fg, palette::RED);
}

#[test]
fn sidebar_shows_scores_and_bar() {
    let snake = [Position::new(300, 300)];
    let fb = GameView::default().render(
        &frame(&snake, Position::new(0, 0), 25, 40),
        Viewport::new(88, 32),
    );

    assert!(fb.row_text(1).contains("SCORE: 25"));
    assert!(fb.row_text(3).contains("HI-SCORE: 40"));

    // Sidebar text starts two columns into the panel: 62 + 2 + 2.
    let left = 66;
    let half = BAR_COLS / 2;
    for dx in 0..half {
        assert_eq!(fb.get(left + dx, 5).unwrap().ch, '█');
    }
    for dx in half..BAR_COLS {
        assert_eq!(fb.get(left + dx, 5).unwrap().ch, '░');
    }

    assert!(fb.row_text(29).contains("Arrows/WASD: steer"));
    assert!(fb.row_text(30).contains("Q: quit"));
}

#[test]
fn game_view_centres_in_a_large_viewport() {
    let snake = [Position::new(300, 300)];
    let fb = GameView::default().render(
        &frame(&snake, Position::new(0, 0), 0, 0),
        Viewport::new(100, 40),
    );
    assert_eq!(fb.get(6, 4).unwrap().ch, '┌');
}

#[test]
fn classic_80x24_terminal_shows_the_whole_board_in_half_blocks() {
    let snake = [Position::new(300, 300), Position::new(300, 320)];
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    assert_eq!(view.scale_for(Board::default(), vp), Some(Scale::HalfBlock));

    let mut fb = FrameBuffer::new(0, 0);
    assert!(view.render_into(&frame(&snake, Position::new(0, 0), 7, 9), vp, &mut fb));
    assert!((0..24).all(|y| !fb.row_text(y).contains("TOO SMALL")));

    // 58x17 centred in 80x24: border at (11, 3), 30x15 half-block cells inside.
    assert_eq!(fb.get(11, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(42, 3).unwrap().ch, '┐');
    assert_eq!(fb.get(11, 19).unwrap().ch, '└');

    // Head on row 15 is the lower half of terminal row 4 + 7; the next
    // segment (row 16) is the upper half of the row below.
    let head = fb.get(12 + 15, 4 + 7).unwrap();
    assert_eq!(head.ch, '▀');
    assert_eq!(head.style.bg, palette::HEAD_GREEN);
    assert_eq!(head.style.fg, palette::BLACK);
    let body = fb.get(12 + 15, 4 + 8).unwrap();
    assert_eq!(body.style.fg, palette::GREEN);
    assert_eq!(body.style.bg, palette::BLACK);

    let food = fb.get(12, 4).unwrap();
    assert_eq!(food.style.fg, palette::RED);

    // Sidebar sits to the right: 11 + 32 + 2 + 2.
    assert!(fb.row_text(4).contains("SCORE: 7"));
    assert!(fb.row_text(6).contains("HI-SCORE: 9"));
    // Score 7 of 50 fills two of twenty bar columns.
    assert_eq!(fb.get(48, 8).unwrap().ch, '█');
    assert_eq!(fb.get(49, 8).unwrap().ch, '░');
    assert!(fb.row_text(17).contains("Arrows/WASD: steer"));
    assert!(fb.row_text(18).contains("Q: quit"));
}

#[test]
fn small_terminal_gets_a_notice_instead_of_a_clipped_board() {
    let snake = [Position::new(300, 300)];
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    assert!(!view.render_into(
        &frame(&snake, Position::new(0, 0), 0, 0),
        Viewport::new(40, 10),
        &mut fb
    ));

    assert!(fb.row_text(4).contains("TERMINAL TOO SMALL"));
    assert!(fb.row_text(5).contains("need 58x17"));
    assert!((0..10).all(|y| !fb.row_text(y).contains('┌')));
}

#[test]
fn menu_view_draws_title_score_and_labels() {
    let view = MenuView::new();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&MenuScreen::default(), vp);

    let all: Vec<String> = (0..24).map(|y| fb.row_text(y)).collect();
    assert!(all.iter().any(|r| r.contains("S N A K E   G A M E")));
    assert!(all.iter().any(|r| r.contains("HI-SCORE: --")));
    assert!(fb.row_text(22).contains("Press 1/2/3 or click to select level"));

    let [a, b, c] = view.layout(vp);
    assert!(fb.row_text(a.y + 1).contains("Beginner (5 FPS)"));
    assert!(fb.row_text(b.y + 1).contains("Intermediate (8 FPS)"));
    assert!(fb.row_text(c.y + 1).contains("Advanced (10 FPS)"));
}

#[test]
fn menu_view_highlights_hovered_button() {
    let view = MenuView::new();
    let vp = Viewport::new(80, 24);
    let screen = MenuScreen {
        high_score: 12,
        hovered: Some(2),
    };
    let fb = view.render(&screen, vp);
    let [a, _, c] = view.layout(vp);

    assert_eq!(fb.get(c.x, c.y).unwrap().style.bg, palette::BUTTON_HOVER);
    assert_eq!(fb.get(a.x, a.y).unwrap().style.bg, palette::BUTTON_BG);
    assert!((0..24).any(|y| fb.row_text(y).contains("HI-SCORE: 12")));
}
