//! Bounded fan-out: run every task, at most K at a time, report one failure.
//!
//! ## Overview
//!
//! [`fan_out`] launches one tokio task per input. Before each launch the caller acquires a permit
//! from a semaphore of capacity K; the permit moves into the spawned task and is released when
//! the task finishes, whatever its outcome. The caller then joins every task before returning.
//!
//! - Failures never stop siblings: no cancellation, no retry, no timeout.
//! - The first failure recorded is returned. Under concurrent failures which one lands first is
//!   not deterministic.
//! - A panicking task counts as a failure ([`FanOutError::Panicked`]).
//!
//! ## Example
//! ```rust
//! use roman_exec::{ConcurrencyLimit, fan_out};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let limit = ConcurrencyLimit::new(2).unwrap();
//! let res = fan_out(["a", "b", "c"], limit, |site| async move {
//!     if site.is_empty() { Err("empty") } else { Ok(()) }
//! })
//! .await;
//! assert!(res.is_ok());
//! # }
//! ```
mod slot;

use std::{any::Any, future::Future, num::NonZeroUsize, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{debug, trace, warn};

use crate::error::{ExecError, FanOutError};
use slot::ErrorSlot;

const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Upper bound on simultaneously running tasks. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConcurrencyLimit(NonZeroUsize);

impl ConcurrencyLimit {
    /// Returns `None` for `0`.
    #[inline]
    pub fn new(limit: usize) -> Option<Self> {
        NonZeroUsize::new(limit).map(Self)
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for ConcurrencyLimit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<NonZeroUsize> for ConcurrencyLimit {
    fn from(n: NonZeroUsize) -> Self {
        Self(n)
    }
}

impl TryFrom<usize> for ConcurrencyLimit {
    type Error = ExecError;

    fn try_from(limit: usize) -> Result<Self, Self::Error> {
        Self::new(limit).ok_or(ExecError::ZeroConcurrency)
    }
}

/// Run `f` once per input with at most `limit` executions in flight.
///
/// Waits for every execution before returning. Returns `Ok(())` if all succeeded, otherwise
/// the first failure recorded.
pub async fn fan_out<I, T, F, Fut, E>(
    inputs: I,
    limit: ConcurrencyLimit,
    f: F,
) -> Result<(), FanOutError<E>>
where
    I: IntoIterator<Item = T>,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let gate = Arc::new(Semaphore::new(limit.get()));
    let slot = Arc::new(ErrorSlot::new());
    let mut running = JoinSet::new();

    for input in inputs {
        // The gate is owned here and never closed.
        let Ok(permit) = Arc::clone(&gate).acquire_owned().await else {
            break;
        };

        let fut = AssertUnwindSafe(f(input)).catch_unwind();
        let slot = Arc::clone(&slot);
        running.spawn(async move {
            let _permit = permit;
            let failure = match fut.await {
                Ok(Ok(())) => return,
                Ok(Err(e)) => {
                    warn!(error = %e, "fan-out task failed");
                    FanOutError::Task(e)
                }
                Err(payload) => {
                    let msg = panic_message(payload.as_ref());
                    warn!(panic = %msg, "fan-out task panicked");
                    FanOutError::Panicked(msg)
                }
            };
            if !slot.record(failure) {
                trace!("error slot occupied; dropping failure");
            }
        });
    }

    let launched = running.len();
    while running.join_next().await.is_some() {}

    let outcome = slot.take();
    debug!(
        tasks = launched,
        limit = limit.get(),
        failed = outcome.is_some(),
        "fan-out finished"
    );
    match outcome {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
