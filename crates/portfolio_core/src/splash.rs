//! One-shot loading overlay timer.

use std::time::{Duration, Instant};

pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplashState {
    Armed { deadline: Instant },
    Fired,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SplashTimer {
    state: SplashState,
}

impl SplashTimer {
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            state: SplashState::Armed {
                deadline: now + delay,
            },
        }
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            SplashState::Armed { deadline } if now >= deadline => {
                self.state = SplashState::Fired;
                tracing::debug!("splash timer fired");
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.state, SplashState::Armed { .. }) {
            self.state = SplashState::Cancelled;
            tracing::debug!("splash timer cancelled before firing");
        }
    }

    /// The overlay stays up while the timer is armed.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SplashState::Armed { .. })
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            SplashState::Armed { deadline } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }
}
