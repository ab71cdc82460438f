//! Collaborators guarded by the breaker.
//!
//! # Data Flow
//! ```text
//! Admitted call:
//!     → http.rs (GET the target, 200 OK is success)
//!
//! Short-circuited or failed call:
//!     → fallback.rs (degraded substitute)
//! ```
//!
//! # Design Decisions
//! - Only `200 OK` counts as success; redirects and other 2xx do not
//! - Transport errors and bad statuses are both plain failures to the breaker
//! - The fallback is infallible today but keeps a typed error for callers

pub mod fallback;
pub mod http;

pub use fallback::{fallback, FallbackError};
pub use http::{HttpProbe, ProbeError};
