//! Circuit breaker subsystem.
//!
//! # States
//! - Closed: normal operation, calls reach the protected operation
//! - Open: dependency assumed down, calls go straight to the fallback
//! - Half-Open: cooldown elapsed, real calls are let through as probes
//!
//! # State Transitions
//! ```text
//! Closed → Open: failure_count >= failure_threshold
//! Open → Half-Open: elapsed since last trip > open_timeout (checked on the next call)
//! Half-Open → Closed: success_count >= success_threshold
//! Half-Open → Open: failure_count >= failure_threshold (counter is cumulative)
//! ```
//!
//! # Data Flow
//! ```text
//! run(main, fallback)
//!     → state.rs (which state are we in)
//!     → circuit.rs (admit, dispatch, record outcome)
//!     → shared.rs (same, serialized behind a mutex for shared use)
//! ```
//!
//! # Design Decisions
//! - Failures of `main` are absorbed; callers only see the fallback's result
//! - The failure counter is only zeroed by a transition to Closed
//! - `run` borrows the breaker mutably, so one decision is in flight at a time

pub mod circuit;
pub mod shared;
pub mod state;

pub use circuit::{BreakerError, BreakerSnapshot, CircuitBreaker};
pub use shared::SharedBreaker;
pub use state::BreakerState;
