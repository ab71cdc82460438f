//! Fixed-cadence driver for the breaker.
//!
//! # Responsibilities
//! - Build the breaker and probe from config
//! - Call through the breaker on every tick
//! - Surface fallback errors in the log

use std::time::Duration;

use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::breaker::{BreakerError, CircuitBreaker, SharedBreaker};
use crate::config::loader::join_errors;
use crate::config::{validate_config, GuardConfig, ValidationError};
use crate::probe::{fallback, FallbackError, HttpProbe, ProbeError};

/// Errors raised while assembling a supervisor.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("config: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    #[error("breaker: {0}")]
    Breaker(#[from] BreakerError),

    #[error("probe: {0}")]
    Probe(#[from] ProbeError),
}

pub struct Supervisor {
    breaker: SharedBreaker,
    probe: HttpProbe,
    interval: Duration,
}

impl Supervisor {
    /// Validates `config` before building anything from it.
    pub fn new(config: &GuardConfig) -> Result<Self, SupervisorError> {
        validate_config(config).map_err(SupervisorError::Config)?;
        let breaker = CircuitBreaker::from_config(&config.breaker)?;
        let probe = HttpProbe::new(&config.target)?;

        Ok(Self {
            breaker: SharedBreaker::new(breaker),
            probe,
            interval: config.supervisor.interval(),
        })
    }

    /// Handle to the breaker, for inspection while the loop runs.
    pub fn breaker(&self) -> SharedBreaker {
        self.breaker.clone()
    }

    /// One call through the breaker.
    pub async fn tick(&self) -> Result<(), FallbackError> {
        self.breaker.run(|| self.probe.call(), fallback).await
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            target_url = %self.probe.url(),
            interval_ms = self.interval.as_millis() as u64,
            "Supervisor starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.tick().await {
                        tracing::error!(error = %e, "Service call failed");
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("Supervisor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}
