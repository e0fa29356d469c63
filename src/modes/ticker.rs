//! One-shot tick timer for the game loop
//!
//! The driver arms the ticker with the engine's current speed, waits for it
//! inside `tokio::select!`, runs one tick and arms it again. Disarmed, the
//! ticker never fires, so a paused or finished game schedules nothing.

use std::future::pending;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{sleep, Sleep};

#[derive(Default)]
pub struct Ticker {
    sleep: Option<Pin<Box<Sleep>>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick `delay` from now, replacing any pending one
    pub fn arm(&mut self, delay: Duration) {
        self.sleep = Some(Box::pin(sleep(delay)));
    }

    pub fn disarm(&mut self) {
        self.sleep = None;
    }

    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Resolve when the armed delay elapses, leaving the ticker disarmed
    ///
    /// Pends forever while disarmed. Safe to drop mid-wait: the deadline is
    /// kept until it has actually fired.
    pub async fn wait(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.await;
                self.sleep = None;
            }
            None => pending().await,
        }
    }
}
