use std::time::{Duration, Instant};

use crate::game::GameEvent;

/// Per-session statistics shown in the HUD
pub struct GameMetrics {
    /// Start of the current stretch of unpaused play
    pub resumed_at: Option<Instant>,
    /// Play time banked before the current stretch
    pub banked_time: Duration,
    pub elapsed_time: Duration,
    pub games_played: u32,
    /// Turns queued during the current run
    pub turns: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            resumed_at: None,
            banked_time: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            games_played: 0,
            turns: 0,
        }
    }

    pub fn update(&mut self) {
        let running = self.resumed_at.map_or(Duration::ZERO, |t| t.elapsed());
        self.elapsed_time = self.banked_time + running;
    }

    pub fn on_game_start(&mut self) {
        self.resumed_at = Some(Instant::now());
        self.banked_time = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.turns = 0;
    }

    /// Stop the clock (pause or game over)
    pub fn on_stop(&mut self) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.banked_time += resumed_at.elapsed();
        }
        self.elapsed_time = self.banked_time;
    }

    pub fn on_resume(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    /// Clear the clock for an idle board
    pub fn on_reset(&mut self) {
        self.resumed_at = None;
        self.banked_time = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.turns = 0;
    }

    pub fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MoveAccepted(_) => self.turns += 1,
            GameEvent::FoodEaten { .. } => {}
            GameEvent::GameOver(_) => {
                self.games_played += 1;
                self.on_stop();
            }
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Direction, GameOverSummary};

    fn game_over() -> GameEvent {
        GameEvent::GameOver(GameOverSummary {
            score: 0,
            length: 1,
            high_score: 0,
            new_record: false,
            collision: CollisionType::Wall,
        })
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_event_counting() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();

        metrics.on_event(&GameEvent::MoveAccepted(Direction::Up));
        metrics.on_event(&GameEvent::MoveAccepted(Direction::Left));
        metrics.on_event(&GameEvent::FoodEaten { score: 10 });
        assert_eq!(metrics.turns, 2);

        metrics.on_event(&game_over());
        assert_eq!(metrics.games_played, 1);
        assert!(metrics.resumed_at.is_none());

        metrics.on_game_start();
        assert_eq!(metrics.turns, 0);
        assert_eq!(metrics.games_played, 1);
    }

    #[test]
    fn test_pause_stops_clock() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(50));
        metrics.on_stop();
        let paused_at = metrics.elapsed_time;
        assert!(paused_at.as_millis() >= 50);

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, paused_at);

        metrics.on_resume();
        std::thread::sleep(Duration::from_millis(10));
        metrics.update();
        assert!(metrics.elapsed_time > paused_at);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);

        metrics.on_reset();
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
    }
}
