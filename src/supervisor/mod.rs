//! Supervisor loop.
//!
//! # Data Flow
//! ```text
//! Periodic timer
//!     → SharedBreaker::run(probe, fallback)
//!     → error from fallback? log it
//!     → wait for next tick or shutdown
//! ```
//!
//! # Design Decisions
//! - One breaker per supervisor, built from config at startup
//! - The loop never exits on call errors; only shutdown stops it
//! - A missed tick is delayed, not burst, so calls keep a fixed spacing

pub mod runner;

pub use runner::{Supervisor, SupervisorError};
