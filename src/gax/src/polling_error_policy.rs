// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error handling while polling long-running operations.
//!
//! The pollers must tell transient polling failures apart from permanent
//! ones, and need a way to bound the polling loop. Implementations of
//! [PollingErrorPolicy] do both.
//!
//! # Example
//! ```
//! # use vertex_gax::polling_error_policy::*;
//! use std::time::Duration;
//! // Poll for at most 15 minutes or 50 attempts, whichever comes first.
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(15 * 60))
//!     .with_attempt_limit(50);
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Determines how errors are handled in the polling loop.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the policy after a failed poll.
    ///
    /// # Parameters
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of polls, including the failed one.
    /// * `error` - the error from the last poll.
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult;

    /// Called after a successful poll that found the operation still running.
    ///
    /// Returning an error stops the polling loop with that error.
    fn on_in_progress(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _operation_name: &str,
    ) -> Option<Error> {
        None
    }
}

/// A helper type to use [PollingErrorPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingErrorPolicyArg(Arc<dyn PollingErrorPolicy>);

impl<T: PollingErrorPolicy + 'static> From<T> for PollingErrorPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingErrorPolicyArg> for Arc<dyn PollingErrorPolicy> {
    fn from(value: PollingErrorPolicyArg) -> Self {
        value.0
    }
}

/// Decorators for [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Bounds the time spent in the polling loop, including the backoff.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Bounds the number of polls.
    ///
    /// # Example
    /// ```
    /// # use vertex_gax::polling_error_policy::*;
    /// # use vertex_gax::error::{Error, rpc::{Code, Status}};
    /// use std::time::Instant;
    /// let policy = Aip194Strict.with_attempt_limit(3);
    /// let transient = || Error::service(Status::default().set_code(Code::Unavailable));
    /// assert!(policy.on_error(Instant::now(), 2, transient()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, transient()).is_exhausted());
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// A polling error policy that strictly follows [AIP-194].
///
/// Polls are always idempotent. The loop continues on `UNAVAILABLE`, on
/// HTTP 503, on I/O errors, and on transient credential errors.
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl PollingErrorPolicy for Aip194Strict {
    fn on_error(&self, _: Instant, _: u32, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() || error.is_io() || error.is_connect() {
            return RetryResult::Continue(error);
        }
        if let Some(status) = error.status() {
            return if status.code == Code::Unavailable {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        match error.http_status_code() {
            Some(503) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A polling error policy that continues on every error.
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(&self, _: Instant, _: u32, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// Limits the time in the polling loop.
///
/// Once the limit is reached the policy reports an exhausted loop, both on
/// errors and when the operation is still in progress.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict> {
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Limits [Aip194Strict] to `maximum_duration`.
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(Aip194Strict, maximum_duration)
    }
}

impl<P: PollingErrorPolicy> LimitedElapsedTime<P> {
    /// Limits a custom policy to `maximum_duration`.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn expired(&self, loop_start: Instant) -> bool {
        Instant::now() >= loop_start + self.maximum_duration
    }
}

impl<P: PollingErrorPolicy> PollingErrorPolicy for LimitedElapsedTime<P> {
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(loop_start, attempt_count, error) {
            RetryResult::Continue(e) if self.expired(loop_start) => RetryResult::Exhausted(e),
            flow => flow,
        }
    }

    fn on_in_progress(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        operation_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(loop_start, attempt_count, operation_name)
            .or_else(|| {
                self.expired(loop_start).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "elapsed time",
                        format!("{:?}", self.maximum_duration),
                    ))
                })
            })
    }
}

/// Limits the number of polls.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict> {
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Limits [Aip194Strict] to `maximum_attempts`.
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(Aip194Strict, maximum_attempts)
    }
}

impl<P: PollingErrorPolicy> LimitedAttemptCount<P> {
    /// Limits a custom policy to `maximum_attempts`.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P: PollingErrorPolicy> PollingErrorPolicy for LimitedAttemptCount<P> {
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(loop_start, attempt_count, error) {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            flow => flow,
        }
    }

    fn on_in_progress(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        operation_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(loop_start, attempt_count, operation_name)
            .or_else(|| {
                (attempt_count >= self.maximum_attempts).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "attempt count",
                        self.maximum_attempts.to_string(),
                    ))
                })
            })
    }
}

/// The polling loop stopped before the operation completed.
#[derive(Debug)]
pub struct Exhausted {
    operation_name: String,
    limit_name: &'static str,
    limit: String,
}

impl Exhausted {
    pub fn new(operation_name: &str, limit_name: &'static str, limit: String) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            limit_name,
            limit,
        }
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "polling loop for {} exhausted, {} limit ({}) reached",
            self.operation_name, self.limit_name, self.limit
        )
    }
}

impl std::error::Error for Exhausted {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Status;

    fn transient() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    fn permanent() -> Error {
        Error::service(Status::default().set_code(Code::Aborted))
    }

    #[test]
    fn aip194_strict() {
        let p = Aip194Strict;
        let now = Instant::now();
        assert!(p.on_error(now, 1, transient()).is_continue());
        assert!(p.on_error(now, 1, Error::io("reset")).is_continue());
        assert!(p.on_error(now, 1, permanent()).is_permanent());
        assert!(p.on_error(now, 1, Error::deser("bad")).is_permanent());
        assert!(p.on_in_progress(now, 1, "operations/op").is_none());
    }

    #[test]
    fn always_continue() {
        let now = Instant::now();
        assert!(AlwaysContinue.on_error(now, 1, permanent()).is_continue());
    }

    #[test]
    fn attempt_limit() {
        let p = AlwaysContinue.with_attempt_limit(3);
        let now = Instant::now();
        assert!(p.on_error(now, 2, permanent()).is_continue());
        assert!(p.on_error(now, 3, permanent()).is_exhausted());
        assert!(p.on_in_progress(now, 2, "operations/op").is_none());
        let error = p.on_in_progress(now, 3, "operations/op");
        assert!(error.as_ref().is_some_and(|e| e.is_exhausted()), "{error:?}");
        let fmt = error.map(|e| e.to_string()).unwrap_or_default();
        assert!(fmt.contains("operations/op") && fmt.contains("attempt count"), "{fmt}");
    }

    #[test]
    fn time_limit() {
        let p = Aip194Strict.with_time_limit(Duration::from_secs(60));
        let now = Instant::now();
        assert!(p.on_error(now, 1, transient()).is_continue());
        assert!(p.on_in_progress(now, 1, "operations/op").is_none());

        let expired = now - Duration::from_secs(120);
        assert!(p.on_error(expired, 1, transient()).is_exhausted());
        assert!(p.on_error(expired, 1, permanent()).is_permanent());
        let error = p.on_in_progress(expired, 1, "operations/op");
        assert!(error.is_some_and(|e| e.is_exhausted()));
    }
}
