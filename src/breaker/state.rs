//! Breaker state enum.

use std::fmt;

/// Dispatch mode of a circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BreakerState {
    /// Calls pass through to the protected operation.
    #[default]
    Closed,
    /// Tripped: calls are short-circuited to the fallback.
    Open,
    /// Cooldown elapsed: calls are probes that decide between Closed and Open.
    HalfOpen,
}

impl BreakerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakerState::Closed => "closed",
            BreakerState::Open => "open",
            BreakerState::HalfOpen => "half_open",
        }
    }
}

impl fmt::Display for BreakerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
