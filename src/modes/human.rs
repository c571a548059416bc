use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Direction, GameConfig, GameEngine, Phase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven game in the terminal
///
/// Owns the engine and serializes the tick timer and key input into it from
/// a single select loop.
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    drawn_revision: Option<u64>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    pub fn with_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            drawn_revision: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // The timers live inside the loop and are dropped on every exit path
        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed
        let cleanup = self.cleanup_terminal(&mut terminal);
        result.and(cleanup)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());

        // Redraw at least once a second so the clock keeps moving
        let mut clock_timer = interval(Duration::from_secs(1));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Resize(_, _))) => self.drawn_revision = None,
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = clock_timer.tick() => {
                    if self.metrics.is_timing() {
                        self.drawn_revision = None;
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quitting with score {}", self.engine.state().score);
                break;
            }

            self.draw(terminal)?;
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let revision = self.engine.revision();
        if self.drawn_revision == Some(revision) {
            return Ok(());
        }

        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, self.engine.state(), &self.metrics);
            })
            .context("Failed to draw frame")?;
        self.drawn_revision = Some(revision);

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Move(direction) => self.steer(direction),
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn steer(&mut self, direction: Direction) {
        let was_waiting = self.engine.phase() == Phase::NotStarted;
        self.engine.set_direction(direction);

        if was_waiting && self.engine.phase() == Phase::Running {
            info!("game started heading {:?}", direction);
            self.metrics.on_game_start();
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick();

        if outcome.is_game_over() {
            let score = self.engine.state().score;
            info!("game over ({:?}) with score {}", outcome, score);
            self.metrics.on_game_over(score);
        }
    }

    fn reset_game(&mut self) {
        info!("game reset");
        self.engine.reset();
        self.metrics.on_reset();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
