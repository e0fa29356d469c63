use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::{info, trace, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{Audio, TerminalBell};
use crate::game::{progression, GameConfig, GameEngine, GameEvent, GamePhase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::modes::Ticker;
use crate::persistence::HighScoreStore;
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Audio<TerminalBell<Stderr>>,
    store: Box<dyn HighScoreStore>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>, sound_on: bool) -> Self {
        let high_score = store.load().unwrap_or_else(|err| {
            warn!("Failed to load high score, starting from 0: {:#}", err);
            0
        });
        info!("loaded high score {}", high_score);

        Self {
            engine: GameEngine::with_high_score(config, high_score),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio: Audio::new(TerminalBell::new(stderr()), sound_on),
            store,
            should_quit: false,
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

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game ticks follow the engine's current speed
        let mut ticker = Ticker::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = ticker.wait() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let sound_on = self.audio.is_enabled();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine.view(), &self.metrics, sound_on);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            self.sync_ticker(&mut ticker);
        }

        Ok(())
    }

    /// Keep the ticker armed exactly while the game is running
    ///
    /// A fired ticker is re-armed here with the speed as it is now, so a
    /// speed change applies from the next tick on.
    fn sync_ticker(&self, ticker: &mut Ticker) {
        if self.engine.phase() != GamePhase::Running {
            ticker.disarm();
        } else if !ticker.is_armed() {
            ticker.arm(self.engine.tick_interval());
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(direction) => {
                let change = self.engine.request_direction(direction);
                trace!("direction {:?}: {:?}", direction, change);
            }
            KeyAction::Start => {
                if self.engine.start() {
                    self.metrics.on_game_start();
                }
            }
            KeyAction::TogglePause => {
                if self.engine.request_pause_toggle() {
                    match self.engine.phase() {
                        GamePhase::Paused => self.metrics.on_stop(),
                        _ => self.metrics.on_resume(),
                    }
                }
            }
            KeyAction::Restart => {
                let restarted = match self.engine.phase() {
                    GamePhase::Paused => self.engine.restart_from_pause(),
                    GamePhase::Over => self.engine.restart(),
                    _ => false,
                };
                if restarted {
                    self.metrics.on_game_start();
                }
            }
            KeyAction::NewGame => {
                if self.engine.new_game() {
                    self.metrics.on_reset();
                }
            }
            KeyAction::ToggleSound => {
                let enabled = self.audio.toggle();
                info!("sound {}", if enabled { "on" } else { "off" });
            }
            KeyAction::Faster => {
                let base = self.engine.config().base_speed_ms;
                self.engine.set_base_speed(progression::faster(base));
            }
            KeyAction::Slower => {
                let base = self.engine.config().base_speed_ms;
                self.engine.set_base_speed(progression::slower(base));
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }

        self.dispatch_events();
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick();
        trace!("tick: {:?}", outcome);
        self.dispatch_events();
    }

    /// Hand engine notifications to the collaborators
    ///
    /// Their failures are logged and otherwise ignored.
    fn dispatch_events(&mut self) {
        for event in self.engine.drain_events() {
            self.metrics.on_event(&event);

            if let Err(err) = self.audio.on_event(&event) {
                warn!("Audio cue failed: {:#}", err);
            }

            if let GameEvent::GameOver(summary) = event {
                if summary.new_record {
                    if let Err(err) = self.store.save(summary.high_score) {
                        warn!("Failed to save high score: {:#}", err);
                    }
                }
            }
        }
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
