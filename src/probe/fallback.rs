//! Degraded-mode substitute for the protected call.

use thiserror::Error;

/// Errors from the fallback path. These reach the caller unchanged.
#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("fallback unavailable: {0}")]
    Unavailable(String),
}

/// Stand-in for the protected call while the dependency is degraded.
pub async fn fallback() -> Result<(), FallbackError> {
    tracing::info!("Executing fallback call");
    Ok(())
}
