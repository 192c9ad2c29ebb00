// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval polling of a probe until it succeeds, fails fatally or times out.
//!
//! The poller knows nothing about Kubernetes: a probe is any async closure
//! returning a [`Probe`]. Transient failures are logged and retried, only the
//! final [`Outcome`] reaches the caller.

use crate::error::{ReadinessError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

/// Result of a single probe attempt
#[derive(Debug)]
pub enum Probe<E> {
    /// The condition holds, stop polling
    Success,
    /// Transient failure, try again after the interval
    Retry(String),
    /// Unrecoverable failure, stop polling immediately
    Fatal(E),
}

/// Terminal state of a poll
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<E> {
    Succeeded,
    TimedOut,
    Failed(E),
}

impl<E> Outcome<E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

/// Everything one poll needs. Built per check and consumed by [`poll`].
pub struct PollSpec<F> {
    interval: Duration,
    timeout: Duration,
    condition: F,
}

impl<F> PollSpec<F> {
    /// Rejects a zero interval, which would turn the poll into a busy loop.
    pub fn new(interval: Duration, timeout: Duration, condition: F) -> Result<Self> {
        if interval.is_zero() {
            return Err(ReadinessError::InvalidPollSpec(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            interval,
            timeout,
            condition,
        })
    }
}

/// Invoke the condition right away, then every `interval` while it asks for a
/// retry. Another attempt is only scheduled when it would still start at or
/// before `timeout`, so a zero timeout means exactly one attempt.
///
/// An attempt still running when the deadline passes is dropped and the poll
/// times out. A result that is already available at the deadline still counts.
pub async fn poll<F, Fut, E>(spec: PollSpec<F>) -> Outcome<E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Probe<E>>,
{
    let PollSpec {
        interval,
        timeout,
        mut condition,
    } = spec;

    let start = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        let remaining = timeout.saturating_sub(start.elapsed());
        let Ok(probe) = time::timeout(remaining, condition()).await else {
            warn!(
                "Attempt {} still running at the {:?} timeout, giving up",
                attempt, timeout
            );
            return Outcome::TimedOut;
        };

        match probe {
            Probe::Success => {
                debug!(
                    "Condition met after {} attempt(s) in {:?}",
                    attempt,
                    start.elapsed()
                );
                return Outcome::Succeeded;
            }
            Probe::Fatal(e) => {
                debug!("Attempt {} failed fatally, not retrying", attempt);
                return Outcome::Failed(e);
            }
            Probe::Retry(reason) => {
                let elapsed = start.elapsed();
                warn!("Attempt {} failed after {:?}: {}", attempt, elapsed, reason);

                if elapsed.saturating_add(interval) > timeout {
                    debug!(
                        "Giving up after {} attempt(s), timeout is {:?}",
                        attempt, timeout
                    );
                    return Outcome::TimedOut;
                }
            }
        }

        time::sleep(interval).await;
    }
}
