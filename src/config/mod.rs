//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → GuardConfig (validated, immutable)
//!     → breaker thresholds, probe target, supervisor cadence
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; breaker thresholds cannot change at runtime
//! - All fields have defaults, so an empty file (or no file) is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::BreakerConfig;
pub use schema::GuardConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::SupervisorConfig;
pub use schema::TargetConfig;
pub use validation::{validate_config, ValidationError};
