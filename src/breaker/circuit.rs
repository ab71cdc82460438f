//! Circuit breaker core.
//!
//! # Responsibilities
//! - Decide, per call, whether the protected operation may run
//! - Count failures and probe successes
//! - Trip, probe and close according to the configured thresholds
//!
//! # Design Decisions
//! - `main`'s error is logged and dropped; the fallback's result is returned
//! - Failures in Half-Open add to the count that tripped the breaker
//! - `last_failure` is only written when the breaker trips
//! - Time comes from `tokio::time::Instant` so tests can pause the clock

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

use crate::breaker::state::BreakerState;
use crate::config::BreakerConfig;

/// Errors raised when building a breaker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakerError {
    /// A threshold of zero would trip (or close) without any evidence.
    #[error("{0} threshold must be greater than zero")]
    ZeroThreshold(&'static str),
}

/// Point-in-time view of a breaker's mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerSnapshot {
    pub state: BreakerState,
    pub failure_count: u32,
    pub success_count: u32,
    /// When the breaker last tripped, if it ever has.
    pub last_failure: Option<Instant>,
}

/// Outcome of the admission check at the top of `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Attempt,
    ShortCircuit,
}

/// A three-state circuit breaker guarding one dependency.
#[derive(Debug)]
pub struct CircuitBreaker {
    state: BreakerState,
    failure_count: u32,
    success_count: u32,
    failure_threshold: u32,
    success_threshold: u32,
    open_timeout: Duration,
    last_failure: Option<Instant>,
}

impl CircuitBreaker {
    /// Create a closed breaker.
    ///
    /// Both thresholds must be positive.
    pub fn new(
        failure_threshold: u32,
        open_timeout: Duration,
        success_threshold: u32,
    ) -> Result<Self, BreakerError> {
        if failure_threshold == 0 {
            return Err(BreakerError::ZeroThreshold("failure"));
        }
        if success_threshold == 0 {
            return Err(BreakerError::ZeroThreshold("success"));
        }

        tracing::debug!(
            failure_threshold,
            success_threshold,
            open_timeout_ms = open_timeout.as_millis() as u64,
            "Circuit breaker created"
        );

        Ok(Self {
            state: BreakerState::Closed,
            failure_count: 0,
            success_count: 0,
            failure_threshold,
            success_threshold,
            open_timeout,
            last_failure: None,
        })
    }

    /// Create a breaker from the `[breaker]` config section.
    pub fn from_config(config: &BreakerConfig) -> Result<Self, BreakerError> {
        Self::new(
            config.failure_threshold,
            config.open_timeout(),
            config.success_threshold,
        )
    }

    pub fn state(&self) -> BreakerState {
        self.state
    }

    pub fn failure_threshold(&self) -> u32 {
        self.failure_threshold
    }

    pub fn success_threshold(&self) -> u32 {
        self.success_threshold
    }

    pub fn open_timeout(&self) -> Duration {
        self.open_timeout
    }

    /// Read the current state without triggering any transition.
    pub fn snapshot(&self) -> BreakerSnapshot {
        BreakerSnapshot {
            state: self.state,
            failure_count: self.failure_count,
            success_count: self.success_count,
            last_failure: self.last_failure,
        }
    }

    /// Run `main` under the breaker, falling back to `fallback` when the
    /// breaker is open or `main` fails.
    ///
    /// Returns `main`'s value on success, otherwise whatever `fallback`
    /// returns. An error from `main` never reaches the caller.
    pub fn run<T, E, FE, M, F>(&mut self, main: M, fallback: F) -> Result<T, FE>
    where
        M: FnOnce() -> Result<T, E>,
        F: FnOnce() -> Result<T, FE>,
        E: fmt::Display,
    {
        if self.admit() == Admission::ShortCircuit {
            return fallback();
        }

        match main() {
            Ok(value) => {
                self.record_success();
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, state = %self.state, "Protected call failed");
                self.record_failure();
                fallback()
            }
        }
    }

    /// Async form of [`CircuitBreaker::run`]; the same policy applies.
    pub async fn run_async<T, E, FE, M, MFut, F, FFut>(&mut self, main: M, fallback: F) -> Result<T, FE>
    where
        M: FnOnce() -> MFut,
        MFut: Future<Output = Result<T, E>>,
        F: FnOnce() -> FFut,
        FFut: Future<Output = Result<T, FE>>,
        E: fmt::Display,
    {
        if self.admit() == Admission::ShortCircuit {
            return fallback().await;
        }

        match main().await {
            Ok(value) => {
                self.record_success();
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, state = %self.state, "Protected call failed");
                self.record_failure();
                fallback().await
            }
        }
    }

    fn admit(&mut self) -> Admission {
        if self.state != BreakerState::Open {
            return Admission::Attempt;
        }

        match self.last_failure {
            Some(tripped_at) if tripped_at.elapsed() <= self.open_timeout => {
                tracing::debug!(
                    remaining_ms = self.open_timeout.saturating_sub(tripped_at.elapsed()).as_millis() as u64,
                    "Circuit open, short-circuiting to fallback"
                );
                Admission::ShortCircuit
            }
            _ => {
                self.transition(BreakerState::HalfOpen);
                tracing::info!(
                    failure_count = self.failure_count,
                    success_count = self.success_count,
                    "Open timeout elapsed, admitting probe"
                );
                Admission::Attempt
            }
        }
    }

    fn record_failure(&mut self) {
        self.failure_count = self.failure_count.saturating_add(1);

        if self.failure_count >= self.failure_threshold {
            self.last_failure = Some(Instant::now());
            self.transition(BreakerState::Open);
        }
    }

    fn record_success(&mut self) {
        if self.state == BreakerState::HalfOpen {
            self.success_count = self.success_count.saturating_add(1);
            if self.success_count >= self.success_threshold {
                self.reset();
            }
        } else {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.transition(BreakerState::Closed);
        self.failure_count = 0;
        self.success_count = 0;
    }

    fn transition(&mut self, to: BreakerState) {
        if self.state == to {
            return;
        }

        tracing::info!(
            from = %self.state,
            to = %to,
            failure_count = self.failure_count,
            success_count = self.success_count,
            "Circuit breaker state changed"
        );
        self.state = to;
    }
}
