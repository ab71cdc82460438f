//! Circuit breaker guarding a remote dependency.

pub mod breaker;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod supervisor;

pub use breaker::{BreakerState, CircuitBreaker, SharedBreaker};
pub use config::GuardConfig;
pub use lifecycle::Shutdown;
pub use supervisor::Supervisor;
