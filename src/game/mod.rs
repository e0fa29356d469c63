//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Presentation code drives it through [`GameEngine`] and reacts to the
//! [`TickOutcome`]s and [`GameEvent`]s it produces.

pub mod action;
pub mod config;
pub mod engine;
pub mod progression;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, DirectionChange};
pub use config::GameConfig;
pub use engine::{place_food, BoardView, GameEngine, GameEvent, GameOverSummary, TickOutcome};
pub use state::{CollisionType, GamePhase, GameState, Position, Snake};
