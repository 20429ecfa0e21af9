//! The crossterm-backed [`Platform`].

use std::time::{Duration, Instant};

use anyhow::Result;

use tui_snake::core::{GameFrame, MenuScreen};
use tui_snake::engine::Platform;
use tui_snake::input::EventSource;
use tui_snake::term::{FeedbackCue, FrameBuffer, GameView, MenuView, TerminalRenderer, Viewport};
use tui_snake::types::{CursorShape, InputEvent, Rect};

pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    events: EventSource,
    game_view: GameView,
    menu_view: MenuView,
    fb: FrameBuffer,
    cue: FeedbackCue,
    started: Instant,
}

impl TerminalPlatform {
    pub fn new(cue: FeedbackCue) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            events: EventSource::new(),
            game_view: GameView::default(),
            menu_view: MenuView::new(),
            fb: FrameBuffer::new(0, 0),
            cue,
            started: Instant::now(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn viewport(&self) -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl Platform for TerminalPlatform {
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn poll_events(&mut self, timeout: Duration, out: &mut Vec<InputEvent>) -> Result<()> {
        self.events.poll_into(timeout, out)
    }

    fn menu_buttons(&self) -> [Rect; 3] {
        self.menu_view.layout(self.viewport())
    }

    fn draw_menu(&mut self, screen: &MenuScreen) -> Result<()> {
        let viewport = self.viewport();
        self.menu_view.render_into(screen, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn draw_game(&mut self, frame: &GameFrame<'_>) -> Result<bool> {
        let viewport = self.viewport();
        let shown = self.game_view.render_into(frame, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)?;
        Ok(shown)
    }

    fn play_feedback_cue(&mut self) {
        self.cue.play(self.renderer.stdout());
    }

    fn set_cursor(&mut self, shape: CursorShape) -> Result<()> {
        self.renderer.set_pointer(shape)
    }
}
