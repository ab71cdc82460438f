//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the guard.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the circuit guard.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GuardConfig {
    /// Breaker thresholds and open timeout.
    pub breaker: BreakerConfig,

    /// The protected endpoint.
    pub target: TargetConfig,

    /// Call cadence of the supervisor loop.
    pub supervisor: SupervisorConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Circuit breaker configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct BreakerConfig {
    /// Failures required to trip the breaker open.
    pub failure_threshold: u32,

    /// Successful probes in half-open required to close the breaker.
    pub success_threshold: u32,

    /// Time the breaker stays open before admitting a probe, in milliseconds.
    pub open_timeout_ms: u64,
}

impl BreakerConfig {
    pub fn open_timeout(&self) -> Duration {
        Duration::from_millis(self.open_timeout_ms)
    }
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
            success_threshold: 2,
            open_timeout_ms: 5_000,
        }
    }
}

/// Protected endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TargetConfig {
    /// URL fetched with GET on every admitted call.
    pub url: String,

    /// HTTP client timeout for the GET, in milliseconds.
    pub request_timeout_ms: u64,
}

impl TargetConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/swagger/doc.json".to_string(),
            request_timeout_ms: 2_000,
        }
    }
}

/// Supervisor loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SupervisorConfig {
    /// Delay between consecutive calls, in milliseconds.
    pub interval_ms: u64,
}

impl SupervisorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self { interval_ms: 1_000 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for terminals.
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
