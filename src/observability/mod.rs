//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Breaker, probe and supervisor produce:
//!     → tracing events (state changes, admitted probes, call errors)
//!     → logging.rs subscriber (pretty or JSON to stdout)
//! ```
//!
//! # Design Decisions
//! - Structured fields (`from`, `to`, `failure_count`) over formatted strings
//! - `RUST_LOG` wins over the configured level when set

pub mod logging;

pub use logging::init_logging;
