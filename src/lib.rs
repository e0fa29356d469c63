//! Term Snake - the classic grid snake arcade game for the terminal
//!
//! This library provides:
//! - Core game simulation and lifecycle (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Sound cues and high score storage (audio, persistence modules)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
