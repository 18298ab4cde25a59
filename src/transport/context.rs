//! Per-call cancellation and deadline.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{ChainError, ChainResult, TransportError};

/// Cancellation scope threaded through both round trips of a call.
///
/// Cloning shares the cancellation token and the deadline.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that never expires and is only cancelled explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().deadline_in(timeout)
    }

    /// Bind to an existing token, e.g. a child of an application token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Set the deadline `timeout` from now. An earlier deadline is kept.
    pub fn deadline_in(mut self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < candidate => existing,
            _ => candidate,
        });
        self
    }

    /// Cancel every call running under this context.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, `None` when unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// The error this context imposes, if it is already done.
    pub fn err(&self) -> Option<ChainError> {
        if self.cancellation.is_cancelled() {
            return Some(ChainError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ChainError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Fail fast when the context is already done.
    pub fn check(&self) -> ChainResult<()> {
        match self.err() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Drive a transport future under this context.
    ///
    /// Cancellation and deadline take precedence over a transport error
    /// that races with them.
    pub async fn run<T, F>(&self, fut: F) -> ChainResult<T>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        self.check()?;

        let expiry = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(ChainError::Cancelled),
            _ = expiry => Err(ChainError::DeadlineExceeded),
            result = fut => match result {
                Ok(value) => Ok(value),
                Err(e) => Err(self.err().unwrap_or(ChainError::Transport(e))),
            },
        }
    }
}
