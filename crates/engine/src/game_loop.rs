//! The menu → session → menu cycle.
//!
//! Everything runs on one thread. Each loop iteration waits on the platform's
//! input poll for at most the time left until the nearest tick, then checks two
//! independent [`Ticker`]s:
//!
//! - **move tick** (5/8/10 Hz, picked at the menu): advance the snake, check
//!   collision, check food
//! - **render tick** (constant 30 Hz): redraw the whole scene
//!
//! Direction keys are applied as soon as they are drained, so the heading that
//! the next move uses is whatever was last accepted.
//!
//! While the platform cannot show the board, the move tick is held: the snake
//! only advances a full interval after a frame was actually presented.

use std::time::Duration;

use anyhow::Result;

use crate::core::{Collision, Game, Menu, MenuOutcome, MenuScreen, StepOutcome};
use crate::platform::Platform;
use crate::session_log::{LogEvent, SessionLog};
use crate::ticker::Ticker;
use crate::types::{CursorShape, Difficulty, InputEvent, Point, RENDER_TICK_MS};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Normal end of a game; control goes back to the menu.
    Collided(Collision),
    /// The player closed the game.
    Quit,
}

pub struct GameLoop<P> {
    platform: P,
    game: Game,
    log: SessionLog,
    events: Vec<InputEvent>,
    /// Last pointer position seen in any state.
    pointer: Option<Point>,
}

impl<P: Platform> GameLoop<P> {
    pub fn new(platform: P, game: Game, log: SessionLog) -> Self {
        Self {
            platform,
            game,
            log,
            events: Vec::with_capacity(16),
            pointer: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Alternate menu and sessions until the player quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(difficulty) = self.run_menu()? else {
                break;
            };
            if self.run_session(difficulty)? == SessionEnd::Quit {
                break;
            }
        }

        let now = self.platform.now_ms();
        self.log.record(
            now,
            &LogEvent::Quit {
                high_score: self.game.high_score(),
            },
        );
        Ok(())
    }

    /// Block on the start menu. `None` means quit.
    pub fn run_menu(&mut self) -> Result<Option<Difficulty>> {
        let mut menu = Menu::new(self.platform.menu_buttons()).with_pointer(self.pointer);
        let poll = Duration::from_millis(RENDER_TICK_MS);

        loop {
            // The layout follows the viewport, which can change between frames.
            menu.set_buttons(self.platform.menu_buttons());
            self.platform.set_cursor(menu.cursor())?;
            self.platform.draw_menu(&MenuScreen {
                high_score: self.game.high_score(),
                hovered: menu.hovered(),
            })?;

            self.events.clear();
            self.platform.poll_events(poll, &mut self.events)?;
            for &event in &self.events {
                if let InputEvent::PointerMove(p) | InputEvent::PointerClick(p) = event {
                    self.pointer = Some(p);
                }
                match menu.handle(event) {
                    MenuOutcome::Pending => {}
                    MenuOutcome::Selected(difficulty) => return Ok(Some(difficulty)),
                    MenuOutcome::Quit => return Ok(None),
                }
            }
        }
    }

    /// Play one session at `difficulty` until collision or quit.
    pub fn run_session(&mut self, difficulty: Difficulty) -> Result<SessionEnd> {
        self.game.start_session(difficulty);
        self.platform.set_cursor(CursorShape::Arrow)?;

        let start = self.platform.now_ms();
        self.log.record(
            start,
            &LogEvent::SessionStart {
                difficulty: difficulty.as_str(),
                tick_rate: difficulty.tick_rate(),
            },
        );

        let mut render = Ticker::immediate(RENDER_TICK_MS, start);
        let mut movement = Ticker::new(difficulty.move_interval_ms(), start);

        loop {
            let now = self.platform.now_ms();
            let wait = render.remaining_ms(now).min(movement.remaining_ms(now));

            self.events.clear();
            self.platform
                .poll_events(Duration::from_millis(wait), &mut self.events)?;
            for &event in &self.events {
                match event {
                    InputEvent::Quit => return Ok(SessionEnd::Quit),
                    InputEvent::Key(direction) => {
                        self.game.steer(direction);
                    }
                    InputEvent::PointerMove(p) | InputEvent::PointerClick(p) => {
                        self.pointer = Some(p);
                    }
                    InputEvent::Digit(_) => {}
                }
            }

            let now = self.platform.now_ms();
            if movement.fire(now) {
                match self.game.step() {
                    StepOutcome::Moved => {}
                    StepOutcome::Ate { score } => {
                        self.platform.play_feedback_cue();
                        self.log.record(now, &LogEvent::FoodEaten { score });
                    }
                    StepOutcome::Collided {
                        collision,
                        score,
                        high_score,
                    } => {
                        self.log.record(
                            now,
                            &LogEvent::SessionEnd {
                                cause: collision.as_str(),
                                score,
                                high_score,
                            },
                        );
                        return Ok(SessionEnd::Collided(collision));
                    }
                }
            }

            if render.fire(now) && !self.platform.draw_game(&self.game.frame())? {
                movement.restart(now);
            }
        }
    }
}
