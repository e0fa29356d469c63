//! Sound cues for game events
//!
//! The engine never plays sounds itself; the driver forwards each
//! [`GameEvent`] here. Whether sound is on is decided here too.

use anyhow::{Context, Result};
use std::io::Write;

use crate::game::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Move,
    Food,
    GameOver,
}

impl SoundCue {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::MoveAccepted(_) => SoundCue::Move,
            GameEvent::FoodEaten { .. } => SoundCue::Food,
            GameEvent::GameOver(_) => SoundCue::GameOver,
        }
    }
}

/// Something that can make a noise
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Result<()>;
}

/// Rings the terminal bell
///
/// Turns are silent. Food rings once, game over twice.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) -> Result<()> {
        let bells = match cue {
            SoundCue::Move => return Ok(()),
            SoundCue::Food => "\x07",
            SoundCue::GameOver => "\x07\x07",
        };
        self.out
            .write_all(bells.as_bytes())
            .and_then(|_| self.out.flush())
            .context("Failed to ring terminal bell")
    }
}

/// Sound on/off switch in front of a sink
pub struct Audio<S: AudioSink> {
    sink: S,
    enabled: bool,
}

impl<S: AudioSink> Audio<S> {
    pub fn new(sink: S, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip sound on or off, returning the new setting
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn on_event(&mut self, event: &GameEvent) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.sink.play(SoundCue::for_event(event))
    }
}
