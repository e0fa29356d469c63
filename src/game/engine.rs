use super::{
    action::{Direction, DirectionChange},
    config::GameConfig,
    progression,
    state::{CollisionType, GamePhase, GameState, Position, Snake},
};
use log::{debug, info, trace};
use rand::Rng;
use std::time::Duration;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or no direction chosen yet
    NoOp,
    /// Snake moved one cell
    Moved,
    /// Snake moved onto the food and grew
    Ate,
    /// Snake hit something; the game is over
    Collided(CollisionType),
}

/// Final numbers of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub length: usize,
    /// High score after this run was taken into account
    pub high_score: u32,
    /// The run beat the previous high score
    pub new_record: bool,
    pub collision: CollisionType,
}

/// Notifications for collaborators (audio, persistence, metrics)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A turn was queued for the next tick
    MoveAccepted(Direction),
    /// Food was eaten; carries the new score
    FoodEaten { score: u32 },
    GameOver(GameOverSummary),
}

/// Read-only snapshot handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub snake: &'a [Position],
    pub food: Position,
    pub phase: GamePhase,
    pub has_started_moving: bool,
    pub score: u32,
    pub high_score: u32,
    pub speed_ms: u64,
    pub base_speed_ms: u64,
    pub tile_count: usize,
    /// The finished run set a new high score
    pub new_record: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    high_score: u32,
    new_record: bool,
    events: Vec<GameEvent>,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_high_score(config, 0)
    }

    /// Create an engine seeded with a previously stored high score
    pub fn with_high_score(config: GameConfig, high_score: u32) -> Self {
        let mut rng = rand::thread_rng();
        let state = Self::initial_state(&config, &mut rng);

        Self {
            config,
            state,
            high_score,
            new_record: false,
            events: Vec::new(),
            rng,
        }
    }

    fn initial_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
        let snake = Snake::new(config.start_position);
        let food = place_food(rng, config.tile_count, &snake, config.max_food_attempts);
        GameState::new(snake, food, config.tile_count, config.base_speed_ms)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Delay until the next tick should run, from the current speed
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.state.speed_ms)
    }

    /// Snapshot of everything needed to draw the board
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            snake: &self.state.snake.body,
            food: self.state.food,
            phase: self.state.phase,
            has_started_moving: self.state.has_started_moving,
            score: self.state.score,
            high_score: self.high_score,
            speed_ms: self.state.speed_ms,
            base_speed_ms: self.config.base_speed_ms,
            tile_count: self.state.tile_count,
            new_record: self.new_record,
        }
    }

    /// Take the notifications queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a run from `Idle` or `Over`
    ///
    /// Returns false (and changes nothing) in any other phase.
    pub fn start(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Idle | GamePhase::Over => {
                self.begin_run();
                true
            }
            GamePhase::Running | GamePhase::Paused => false,
        }
    }

    /// Play again after a game over
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::Over {
            return false;
        }
        self.start()
    }

    /// Abandon a paused run and begin a fresh one
    pub fn restart_from_pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.begin_run();
        true
    }

    /// Leave the game-over screen for an idle board
    pub fn new_game(&mut self) -> bool {
        if self.state.phase != GamePhase::Over {
            return false;
        }
        self.state = Self::initial_state(&self.config, &mut self.rng);
        self.new_record = false;
        info!("new game, board idle");
        true
    }

    /// Flip between `Running` and `Paused`
    pub fn toggle_pause(&mut self) -> bool {
        self.state.phase = match self.state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            phase => {
                debug!("pause toggle ignored in {:?}", phase);
                return false;
            }
        };
        info!("game {:?}", self.state.phase);
        true
    }

    /// Input-facing pause intent
    pub fn request_pause_toggle(&mut self) -> bool {
        self.toggle_pause()
    }

    /// Continue a paused run
    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.toggle_pause()
    }

    /// Ask the snake to turn
    ///
    /// The first direction of a run takes effect immediately. Later ones are
    /// queued for the next tick, with the latest request winning; reversals
    /// of the current direction are refused.
    pub fn request_direction(&mut self, direction: Direction) -> DirectionChange {
        if self.state.phase != GamePhase::Running {
            return DirectionChange::Ignored;
        }

        if !self.state.has_started_moving {
            self.state.current_direction = Some(direction);
            self.state.has_started_moving = true;
            debug!("snake starts moving {:?}", direction);
            return DirectionChange::Started;
        }

        if let Some(current) = self.state.current_direction {
            if current.is_opposite(direction) {
                debug!("reversal {:?} -> {:?} rejected", current, direction);
                return DirectionChange::Rejected;
            }
        }

        self.state.pending_direction = Some(direction);
        self.events.push(GameEvent::MoveAccepted(direction));
        DirectionChange::Queued
    }

    /// Change the base speed; the current speed is reset to it as well
    ///
    /// The value is clamped to the range of the speed setting. Returns the
    /// speed actually applied.
    pub fn set_base_speed(&mut self, speed_ms: u64) -> u64 {
        let speed_ms = progression::clamp_base_speed(speed_ms);
        self.config.base_speed_ms = speed_ms;
        self.state.speed_ms = speed_ms;
        info!(
            "base speed set to {}ms ({})",
            speed_ms,
            progression::speed_label(speed_ms)
        );
        speed_ms
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.phase != GamePhase::Running {
            return TickOutcome::NoOp;
        }

        if let Some(next) = self.state.pending_direction.take() {
            self.state.current_direction = Some(next);
        }

        let Some(direction) = self.state.current_direction else {
            return TickOutcome::NoOp;
        };

        let new_head = self.state.snake.head().moved_in_direction(direction);

        if let Some(collision) = self.check_collision(new_head) {
            self.end_game(collision);
            return TickOutcome::Collided(collision);
        }

        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);

        if !ate_food {
            trace!("moved to ({}, {})", new_head.x, new_head.y);
            return TickOutcome::Moved;
        }

        self.state.score += self.config.score_per_food;
        self.state.food = place_food(
            &mut self.rng,
            self.state.tile_count,
            &self.state.snake,
            self.config.max_food_attempts,
        );
        self.state.speed_ms = progression::next_speed(
            self.state.speed_ms,
            self.config.speed_step_ms,
            self.config.min_speed_ms,
        );
        self.events.push(GameEvent::FoodEaten {
            score: self.state.score,
        });
        debug!(
            "ate food, score {} length {} speed {}ms",
            self.state.score,
            self.state.snake.len(),
            self.state.speed_ms
        );

        TickOutcome::Ate
    }

    fn begin_run(&mut self) {
        self.state = Self::initial_state(&self.config, &mut self.rng);
        self.state.phase = GamePhase::Running;
        self.new_record = false;
        info!(
            "run started at ({}, {}), speed {}ms",
            self.config.start_position.x, self.config.start_position.y, self.state.speed_ms
        );
    }

    /// Check if the new head position causes a collision
    ///
    /// Compares against the body before the tail moves, so chasing the tail
    /// into the cell it is vacating is fatal.
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn end_game(&mut self, collision: CollisionType) {
        self.state.phase = GamePhase::Over;

        let score = self.state.score;
        let new_record = score > self.high_score;
        if new_record {
            self.high_score = score;
        }
        self.new_record = new_record;

        let summary = GameOverSummary {
            score,
            length: self.state.snake.len(),
            high_score: self.high_score,
            new_record,
            collision,
        };
        info!(
            "game over ({:?}): score {} length {}{}",
            collision,
            summary.score,
            summary.length,
            if new_record { ", new high score" } else { "" }
        );
        self.events.push(GameEvent::GameOver(summary));
    }
}

/// Pick a random cell for the food
///
/// Samples up to `max_attempts` cells looking for one off the snake. When
/// every sample lands on the snake the last one is used anyway.
pub fn place_food<R: Rng>(
    rng: &mut R,
    tile_count: usize,
    snake: &Snake,
    max_attempts: u32,
) -> Position {
    let mut random_cell = || {
        Position::new(
            rng.gen_range(0..tile_count) as i32,
            rng.gen_range(0..tile_count) as i32,
        )
    };

    let mut candidate = random_cell();
    let mut attempts = 1;
    while snake.occupies(candidate) && attempts < max_attempts {
        candidate = random_cell();
        attempts += 1;
    }

    if snake.occupies(candidate) {
        debug!(
            "no free cell found in {} attempts, food placed on the snake",
            attempts
        );
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Running engine with a hand-built snake already moving
    fn moving_engine(body: Vec<Position>, direction: Direction) -> GameEngine {
        let mut engine = GameEngine::new(GameConfig::default());
        assert!(engine.start());
        engine.state.snake = Snake::from_segments(body);
        engine.state.current_direction = Some(direction);
        engine.state.has_started_moving = true;
        engine.state.food = Position::new(0, 0);
        engine
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = GameEngine::new(GameConfig::default());
        let state = engine.state();

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.snake.body, vec![Position::new(10, 10)]);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_ms, 150);
        assert!(state.is_in_bounds(state.food));
        assert_ne!(state.food, Position::new(10, 10));
    }

    #[test]
    fn test_start_resets_run() {
        let mut engine = moving_engine(
            vec![Position::new(3, 3), Position::new(2, 3)],
            Direction::Right,
        );
        engine.state.score = 70;
        engine.state.speed_ms = 80;
        engine.state.phase = GamePhase::Over;

        assert!(engine.start());
        let state = engine.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.snake.body, vec![Position::new(10, 10)]);
        assert_eq!(state.current_direction, None);
        assert_eq!(state.pending_direction, None);
        assert!(!state.has_started_moving);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_ms, 150);
    }

    #[test]
    fn test_start_is_noop_while_running_or_paused() {
        let mut engine = moving_engine(vec![Position::new(3, 3)], Direction::Right);
        let before = engine.state().clone();

        assert!(!engine.start());
        assert_eq!(engine.state(), &before);

        engine.toggle_pause();
        assert!(!engine.start());
        assert_eq!(engine.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_first_direction_moves_snake() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.start();
        engine.state.food = Position::new(0, 0);

        assert_eq!(
            engine.request_direction(Direction::Right),
            DirectionChange::Started
        );
        assert_eq!(engine.state().current_direction, Some(Direction::Right));
        assert_eq!(engine.state().pending_direction, None);

        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(engine.state().snake.head(), Position::new(11, 10));
        assert_eq!(engine.state().snake.len(), 1);
    }

    #[test]
    fn test_waiting_for_first_direction() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.start();
        let before = engine.state().clone();

        assert_eq!(engine.tick(), TickOutcome::NoOp);
        assert_eq!(engine.tick(), TickOutcome::NoOp);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_first_direction_bypass_resets_each_run() {
        let mut engine = moving_engine(vec![Position::new(19, 5)], Direction::Right);
        assert!(matches!(engine.tick(), TickOutcome::Collided(_)));

        engine.restart();
        assert!(!engine.state().has_started_moving);
        // Any direction is fine as the opening move, even the reverse of the last run
        assert_eq!(
            engine.request_direction(Direction::Left),
            DirectionChange::Started
        );
    }

    #[test]
    fn test_ticks_outside_running_change_nothing() {
        let mut engine = GameEngine::new(GameConfig::default());
        let idle = engine.state().clone();
        assert_eq!(engine.tick(), TickOutcome::NoOp);
        assert_eq!(engine.state(), &idle);

        let mut engine = moving_engine(vec![Position::new(5, 5)], Direction::Right);
        engine.request_direction(Direction::Down);
        engine.toggle_pause();
        let paused = engine.state().clone();
        for _ in 0..5 {
            assert_eq!(engine.tick(), TickOutcome::NoOp);
        }
        assert_eq!(engine.state(), &paused);

        let mut engine = moving_engine(vec![Position::new(19, 5)], Direction::Right);
        engine.tick();
        let over = engine.state().clone();
        assert_eq!(engine.tick(), TickOutcome::NoOp);
        assert_eq!(engine.state(), &over);
    }

    #[test]
    fn test_wall_collision() {
        let body = vec![Position::new(19, 10), Position::new(18, 10)];
        let mut engine = moving_engine(body.clone(), Direction::Right);

        assert_eq!(engine.tick(), TickOutcome::Collided(CollisionType::Wall));
        assert_eq!(engine.phase(), GamePhase::Over);
        assert_eq!(engine.state().snake.body, body);
    }

    #[test]
    fn test_wall_collision_every_edge() {
        for (start, direction) in [
            (Position::new(0, 4), Direction::Left),
            (Position::new(4, 0), Direction::Up),
            (Position::new(19, 4), Direction::Right),
            (Position::new(4, 19), Direction::Down),
        ] {
            let mut engine = moving_engine(vec![start], direction);
            assert_eq!(engine.tick(), TickOutcome::Collided(CollisionType::Wall));
        }
    }

    #[test]
    fn test_self_collision() {
        // Head at (5,5) heading Down into its own body at (5,6)
        let mut engine = moving_engine(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
                Position::new(4, 6),
            ],
            Direction::Down,
        );

        assert_eq!(
            engine.tick(),
            TickOutcome::Collided(CollisionType::SelfCollision)
        );
        assert_eq!(engine.phase(), GamePhase::Over);
        assert_eq!(engine.state().snake.len(), 5);
    }

    #[test]
    fn test_moving_into_vacating_tail_is_fatal() {
        // The tail at (6,5) would move away this tick, but it still counts
        let mut engine = moving_engine(
            vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
            ],
            Direction::Right,
        );

        assert_eq!(
            engine.tick(),
            TickOutcome::Collided(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = moving_engine(vec![Position::new(5, 5)], Direction::Right);
        engine.state.food = Position::new(6, 5);

        assert_eq!(engine.tick(), TickOutcome::Ate);
        let state = engine.state();
        assert_eq!(state.score, 10);
        assert_eq!(
            state.snake.body,
            vec![Position::new(6, 5), Position::new(5, 5)]
        );
        assert_eq!(state.speed_ms, 149);
        assert!(!state.snake.occupies(state.food));

        engine.state.food = Position::new(7, 5);
        assert_eq!(engine.tick(), TickOutcome::Ate);
        assert_eq!(engine.state().score, 20);
        assert_eq!(engine.state().snake.len(), 3);
        assert_eq!(engine.state().speed_ms, 148);

        let events = engine.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::FoodEaten { score: 10 },
                GameEvent::FoodEaten { score: 20 },
            ]
        );
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let mut engine = moving_engine(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );

        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(
            engine.state().snake.body,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn test_speed_stops_at_floor() {
        let mut engine = moving_engine(vec![Position::new(2, 2)], Direction::Right);
        engine.state.speed_ms = 51;

        for (x, expected) in [(3, 50), (4, 50), (5, 50)] {
            engine.state.food = Position::new(x, 2);
            assert_eq!(engine.tick(), TickOutcome::Ate);
            assert_eq!(engine.state().speed_ms, expected);
        }
        assert_eq!(engine.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut engine = moving_engine(vec![Position::new(5, 5)], Direction::Down);

        assert_eq!(
            engine.request_direction(Direction::Down),
            DirectionChange::Queued
        );
        assert_eq!(
            engine.request_direction(Direction::Up),
            DirectionChange::Rejected
        );
        assert_eq!(engine.state().current_direction, Some(Direction::Down));
        assert_eq!(engine.state().pending_direction, Some(Direction::Down));
    }

    #[test]
    fn test_last_queued_direction_wins() {
        let mut engine = moving_engine(vec![Position::new(5, 5)], Direction::Right);
        engine.request_direction(Direction::Up);
        engine.request_direction(Direction::Down);

        assert_eq!(engine.state().pending_direction, Some(Direction::Down));
        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(engine.state().snake.head(), Position::new(5, 6));
        assert_eq!(engine.state().current_direction, Some(Direction::Down));
        assert_eq!(engine.state().pending_direction, None);
    }

    #[test]
    fn test_queued_move_emits_event() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.start();
        engine.request_direction(Direction::Up);
        engine.request_direction(Direction::Left);
        engine.request_direction(Direction::Down);

        // Opening move is silent; the reversal is dropped
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::MoveAccepted(Direction::Left)]
        );
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_intents_ignored_when_not_running() {
        let mut engine = GameEngine::new(GameConfig::default());
        assert_eq!(
            engine.request_direction(Direction::Up),
            DirectionChange::Ignored
        );
        assert!(!engine.request_pause_toggle());
        assert!(!engine.state().has_started_moving);

        let mut engine = moving_engine(vec![Position::new(5, 5)], Direction::Right);
        engine.toggle_pause();
        assert_eq!(
            engine.request_direction(Direction::Up),
            DirectionChange::Ignored
        );
        assert_eq!(engine.state().pending_direction, None);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut engine = moving_engine(vec![Position::new(5, 5)], Direction::Right);

        assert!(engine.request_pause_toggle());
        assert_eq!(engine.phase(), GamePhase::Paused);
        assert!(engine.resume());
        assert_eq!(engine.phase(), GamePhase::Running);
        assert!(!engine.resume());
        assert_eq!(engine.tick(), TickOutcome::Moved);
    }

    #[test]
    fn test_restart_from_pause() {
        let mut engine = moving_engine(
            vec![Position::new(5, 5), Position::new(4, 5)],
            Direction::Right,
        );
        engine.state.score = 30;
        assert!(!engine.restart_from_pause());

        engine.toggle_pause();
        assert!(engine.restart_from_pause());
        assert_eq!(engine.phase(), GamePhase::Running);
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().snake.body, vec![Position::new(10, 10)]);
    }

    #[test]
    fn test_game_over_transitions() {
        let mut engine = moving_engine(vec![Position::new(19, 5)], Direction::Right);
        engine.tick();
        assert_eq!(engine.phase(), GamePhase::Over);
        assert!(!engine.toggle_pause());

        assert!(engine.new_game());
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert_eq!(engine.state().snake.body, vec![Position::new(10, 10)]);
        assert!(!engine.new_game());
        assert!(!engine.restart());

        assert!(engine.start());
        assert_eq!(engine.phase(), GamePhase::Running);
    }

    #[test]
    fn test_new_high_score_reported() {
        let config = GameConfig::default();
        let mut engine = GameEngine::with_high_score(config, 30);
        engine.start();
        engine.state.snake = Snake::new(Position::new(19, 0));
        engine.state.current_direction = Some(Direction::Right);
        engine.state.has_started_moving = true;
        engine.state.score = 40;

        engine.tick();
        assert_eq!(engine.high_score(), 40);
        assert!(engine.view().new_record);
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::GameOver(GameOverSummary {
                score: 40,
                length: 1,
                high_score: 40,
                new_record: true,
                collision: CollisionType::Wall,
            })]
        );
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut engine = GameEngine::with_high_score(GameConfig::default(), 30);
        engine.start();
        engine.state.snake = Snake::new(Position::new(0, 0));
        engine.state.current_direction = Some(Direction::Up);
        engine.state.has_started_moving = true;
        engine.state.score = 10;

        engine.tick();
        assert_eq!(engine.high_score(), 30);
        match engine.drain_events().as_slice() {
            [GameEvent::GameOver(summary)] => {
                assert!(!summary.new_record);
                assert_eq!(summary.high_score, 30);
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }

    #[test]
    fn test_set_base_speed() {
        let mut engine = GameEngine::new(GameConfig::default());
        assert_eq!(engine.set_base_speed(100), 100);
        assert_eq!(engine.state().speed_ms, 100);
        assert_eq!(engine.view().base_speed_ms, 100);

        assert_eq!(engine.set_base_speed(5), progression::MIN_BASE_SPEED_MS);
        engine.start();
        assert_eq!(engine.state().speed_ms, progression::MIN_BASE_SPEED_MS);
    }

    #[test]
    fn test_view_matches_state() {
        let mut engine = GameEngine::with_high_score(GameConfig::small(), 90);
        engine.start();
        engine.request_direction(Direction::Up);
        let view = engine.view();

        assert_eq!(view.snake, &[Position::new(5, 5)][..]);
        assert_eq!(view.phase, GamePhase::Running);
        assert!(view.has_started_moving);
        assert_eq!(view.high_score, 90);
        assert_eq!(view.tile_count, 10);
    }

    #[test]
    fn test_food_avoids_snake() {
        let mut rng = rand::thread_rng();
        // Only (1, 1) is free on a 2x2 board
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(0, 1),
        ]);

        for _ in 0..20 {
            assert_eq!(place_food(&mut rng, 2, &snake, 100), Position::new(1, 1));
        }
    }

    #[test]
    fn test_food_fallback_on_full_board() {
        let mut rng = rand::thread_rng();
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(0, 1),
        ]);

        let food = place_food(&mut rng, 2, &snake, 100);
        assert!(snake.occupies(food));
    }

    /// The cells a fresh `StdRng` with this seed would sample, in order
    fn sampled_cells(seed: u64, tile_count: usize, count: usize) -> Vec<Position> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Position::new(
                    rng.gen_range(0..tile_count) as i32,
                    rng.gen_range(0..tile_count) as i32,
                )
            })
            .collect()
    }

    #[test]
    fn test_food_attempts_stop_at_bound() {
        let samples = sampled_cells(7, 20, 10);

        for bound in 1..=3usize {
            // Every cell sampled within the bound is taken by the snake
            let snake = Snake::from_segments(samples[..bound].to_vec());
            let mut rng = StdRng::seed_from_u64(7);

            let food = place_food(&mut rng, 20, &snake, bound as u32);
            assert_eq!(food, samples[bound - 1]);
            assert!(snake.occupies(food));
        }
    }

    #[test]
    fn test_food_larger_bound_finds_free_cell() {
        let samples = sampled_cells(11, 20, 10);
        let snake = Snake::from_segments(samples[..2].to_vec());
        let expected = samples
            .iter()
            .copied()
            .find(|cell| !snake.occupies(*cell))
            .unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let food = place_food(&mut rng, 20, &snake, 10);

        assert_eq!(food, expected);
        assert!(!snake.occupies(food));
    }

    #[test]
    fn test_regenerated_food_rarely_on_snake() {
        let mut rng = rand::thread_rng();
        let body: Vec<Position> = (0..20).map(|x| Position::new(x, 0)).collect();
        let snake = Snake::from_segments(body);

        let misses = (0..1000)
            .filter(|_| snake.occupies(place_food(&mut rng, 20, &snake, 100)))
            .count();
        assert!(misses <= 10);
    }
}
