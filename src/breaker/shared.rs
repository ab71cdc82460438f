//! Breaker shared between tasks.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::breaker::circuit::{BreakerSnapshot, CircuitBreaker};

/// A cloneable handle to one [`CircuitBreaker`].
///
/// The lock is held for the whole of `run`, from the admission check through
/// the call to recording its outcome, so concurrent callers observe the same
/// transitions a single caller would.
#[derive(Debug, Clone)]
pub struct SharedBreaker {
    inner: Arc<Mutex<CircuitBreaker>>,
}

impl SharedBreaker {
    pub fn new(breaker: CircuitBreaker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(breaker)),
        }
    }

    /// See [`CircuitBreaker::run_async`].
    pub async fn run<T, E, FE, M, MFut, F, FFut>(&self, main: M, fallback: F) -> Result<T, FE>
    where
        M: FnOnce() -> MFut,
        MFut: Future<Output = Result<T, E>>,
        F: FnOnce() -> FFut,
        FFut: Future<Output = Result<T, FE>>,
        E: fmt::Display,
    {
        let mut breaker = self.inner.lock().await;
        breaker.run_async(main, fallback).await
    }

    /// Waits for any in-flight `run` to finish.
    pub async fn snapshot(&self) -> BreakerSnapshot {
        self.inner.lock().await.snapshot()
    }
}

impl From<CircuitBreaker> for SharedBreaker {
    fn from(breaker: CircuitBreaker) -> Self {
        Self::new(breaker)
    }
}
