//! Bounded retries
//!
//! A failed attempt is resubmitted with an identical copy of the request until
//! the retry ceiling is reached. The attempt counter lives in the retry loop,
//! so one [`RetryPolicy`] can serve any number of concurrent calls.
//!
//! By default only transient failures are retried (transport errors and
//! 408/429/5xx responses) and resubmission is immediate. Both are
//! configurable:
//!
//! ```
//! use contentstack_management::{RetryOn, RetryPolicy};
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::new(5)
//!     .retry_on(RetryOn::AnyFailure)
//!     .exponential(Duration::from_millis(100), Duration::from_secs(5));
//! assert_eq!(policy.max_retries(), 5);
//! ```

use crate::{
    errors::{is_retryable_status, Error, Result},
    request::Request,
    response::RawResponse,
    transport::Transport,
};
use backoff::{backoff::Backoff, ExponentialBackoff};
use std::{sync::Arc, time::Duration};
use tracing::{debug, warn};

/// Which failures are resubmitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryOn {
    /// Transport failures and 408/429/5xx responses
    #[default]
    Transient,
    /// Every transport failure and every non-2xx response
    AnyFailure,
}

/// Delay between attempts
#[derive(Debug, Clone, PartialEq)]
pub enum RetryDelay {
    /// Resubmit immediately
    Immediate,
    /// Exponential backoff with jitter
    Exponential {
        /// First delay
        initial: Duration,
        /// Upper bound for any single delay
        max: Duration,
    },
}

/// Retry configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_retries: u32,
    retry_on: RetryOn,
    delay: RetryDelay,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(crate::DEFAULT_RETRIES)
    }
}

impl RetryPolicy {
    /// Policy with the given retry ceiling, transient failures only, no delay
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            retry_on: RetryOn::Transient,
            delay: RetryDelay::Immediate,
        }
    }

    /// Policy that never retries
    pub fn none() -> Self {
        Self::new(0)
    }

    /// Set which failures are retried
    pub fn retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    /// Wait with exponential backoff between attempts
    pub fn exponential(mut self, initial: Duration, max: Duration) -> Self {
        self.delay = RetryDelay::Exponential { initial, max };
        self
    }

    /// Retry ceiling
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Failure classification in use
    pub fn classification(&self) -> RetryOn {
        self.retry_on
    }

    fn should_retry_error(&self, error: &Error) -> bool {
        match self.retry_on {
            RetryOn::Transient => error.is_retryable(),
            RetryOn::AnyFailure => !matches!(
                error,
                Error::InvalidArgument(_) | Error::InvalidState(_) | Error::Config(_)
            ),
        }
    }

    fn should_retry_response(&self, response: &RawResponse) -> bool {
        match self.retry_on {
            RetryOn::Transient => is_retryable_status(response.status().as_u16()),
            RetryOn::AnyFailure => !response.is_success(),
        }
    }

    fn backoff(&self) -> Option<ExponentialBackoff> {
        match &self.delay {
            RetryDelay::Immediate => None,
            RetryDelay::Exponential { initial, max } => {
                let mut backoff = ExponentialBackoff {
                    initial_interval: *initial,
                    randomization_factor: 0.3,
                    multiplier: 2.0,
                    max_interval: *max,
                    max_elapsed_time: None,
                    ..Default::default()
                };
                backoff.reset();
                Some(backoff)
            }
        }
    }
}

/// Send a request, resubmitting failures up to the policy's ceiling
///
/// `notify` is called before each resubmission with the retry number
/// (starting at 1) and the reason. When the ceiling is reached the last
/// outcome is returned as is: the final error, or the final non-2xx response.
pub(crate) async fn send_with_retry<F>(
    transport: &dyn Transport,
    request: Request,
    policy: &RetryPolicy,
    mut notify: F,
) -> Result<RawResponse>
where
    F: FnMut(u32, &str) + Send,
{
    let mut retries: u32 = 0;
    let mut backoff = policy.backoff();

    loop {
        let outcome = transport.execute(request.clone()).await;

        let reason = match &outcome {
            Ok(response) if policy.should_retry_response(response) => {
                Some(format!("status {}", response.status()))
            }
            Ok(_) => None,
            Err(error) if policy.should_retry_error(error) => Some(error.to_string()),
            Err(_) => None,
        };

        let Some(reason) = reason else {
            return outcome;
        };

        if retries >= policy.max_retries {
            warn!(
                "Giving up on {} {} after {} retries: {}",
                request.method(),
                request.path(),
                retries,
                reason
            );
            return outcome;
        }

        retries += 1;
        notify(retries, &reason);
        let delay = backoff.as_mut().and_then(|b| b.next_backoff());
        debug!("Retry {} after {:?} due to: {}", retries, delay, reason);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Receives the outcome of an [`enqueue`](crate::PendingRequest::enqueue)d request
pub trait Callback: Send + 'static {
    /// Called with the final response, successful or not
    fn on_response(self, response: RawResponse)
    where
        Self: Sized;

    /// Called when the request failed and retries are exhausted
    fn on_failure(self, error: Error)
    where
        Self: Sized;

    /// Called before each resubmission
    fn on_retry(&mut self, _attempt: u32, _reason: &str) {}
}

/// Wraps a [`Callback`] with the retry loop
#[derive(Debug)]
pub struct RetryCallback<C> {
    inner: C,
    policy: RetryPolicy,
}

impl<C: Callback> RetryCallback<C> {
    /// Wrap a callback with a retry policy
    pub fn new(inner: C, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// Run the request to completion and report the outcome
    pub async fn run(self, transport: Arc<dyn Transport>, request: Request) {
        let Self { mut inner, policy } = self;
        let outcome = send_with_retry(transport.as_ref(), request, &policy, |attempt, reason| {
            inner.on_retry(attempt, reason)
        })
        .await;

        match outcome {
            Ok(response) => inner.on_response(response),
            Err(error) => inner.on_failure(error),
        }
    }
}
