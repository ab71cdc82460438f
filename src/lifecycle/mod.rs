//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging → Spawn supervisor
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast → Supervisor leaves its loop → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - A call in flight is allowed to finish before the loop exits
//! - Breaker state is not persisted across restarts

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
