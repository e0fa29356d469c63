//! Keyboard mapping from crossterm key events to game intents

pub mod handler;

pub use handler::{InputHandler, KeyAction};
