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

//! Retry policies for RPCs.
//!
//! The clients do not retry by default. Applications opt in by configuring a
//! retry policy, either for all the RPCs in a client, with
//! [ClientBuilder::with_retry_policy], or for a single request, with
//! [RequestOptionsBuilder::with_retry_policy].
//!
//! Every attempt sends the same request and the same metadata.
//!
//! # Example
//! ```
//! # use vertex_gax::retry_policy::*;
//! use std::time::Duration;
//! // Retry transient errors at most 5 times, and for at most 30 seconds.
//! let policy = Aip194Strict
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(30));
//! ```
//!
//! [ClientBuilder::with_retry_policy]: crate::client_builder::ClientBuilder::with_retry_policy
//! [RequestOptionsBuilder::with_retry_policy]: crate::options::RequestOptionsBuilder::with_retry_policy

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Determines how errors are handled in the retry loop.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts, including the failed one.
    /// * `idempotent` - if `true` the request is safe to send more than once.
    /// * `error` - the error from the last attempt.
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The time remaining in the retry loop, for policies that limit it.
    ///
    /// The retry loop uses this value to bound the deadline of each attempt.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// Decorators for [RetryPolicy].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Stops the loop after `maximum_attempts` attempts.
    ///
    /// # Example
    /// ```
    /// # use vertex_gax::retry_policy::*;
    /// # use vertex_gax::error::{Error, rpc::{Code, Status}};
    /// use std::time::Instant;
    /// let policy = AlwaysRetry.with_attempt_limit(3);
    /// let error = || Error::service(Status::default().set_code(Code::Unavailable));
    /// assert!(policy.on_error(Instant::now(), 2, true, error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, true, error()).is_exhausted());
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }

    /// Stops the loop once `maximum_duration` has elapsed.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that strictly follows [AIP-194].
///
/// Only idempotent requests are retried, and only on `UNAVAILABLE`, on HTTP
/// 503, or when the connection failed. Errors creating the credentials are
/// retried if the credentials say a new attempt may succeed, as such requests
/// never left the client.
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(&self, _: Instant, _: u32, idempotent: bool, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() || error.is_connect() {
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

/// A retry policy that retries every error.
///
/// Combine with [RetryPolicyExt::with_attempt_limit] or
/// [RetryPolicyExt::with_time_limit].
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _: Instant, _: u32, _: bool, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _: Instant, _: u32, _: bool, error: Error) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// Limits the number of attempts made by an inner policy.
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

impl<P: RetryPolicy> LimitedAttemptCount<P> {
    /// Limits a custom policy to `maximum_attempts`.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P: RetryPolicy> RetryPolicy for LimitedAttemptCount<P> {
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            flow => flow,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

/// Limits the total time spent in the retry loop.
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

impl<P: RetryPolicy> LimitedElapsedTime<P> {
    /// Limits a custom policy to `maximum_duration`.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn deadline(&self, loop_start: Instant) -> Instant {
        loop_start + self.maximum_duration
    }
}

impl<P: RetryPolicy> RetryPolicy for LimitedElapsedTime<P> {
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if Instant::now() >= self.deadline(loop_start) => {
                RetryResult::Exhausted(e)
            }
            flow => flow,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let remaining = self
            .deadline(loop_start)
            .saturating_duration_since(Instant::now());
        Some(
            self.inner
                .remaining_time(loop_start, attempt_count)
                .map_or(remaining, |inner| inner.min(remaining)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use crate::error::rpc::Status;
    use http::HeaderMap;
    use test_case::test_case;

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    fn permission_denied() -> Error {
        Error::service(Status::default().set_code(Code::PermissionDenied))
    }

    fn http_unavailable() -> Error {
        Error::http(503, HeaderMap::new(), bytes::Bytes::from_static(b"try again"))
    }

    #[test_case(true, true)]
    #[test_case(false, false)]
    fn aip194_strict_unavailable(idempotent: bool, want: bool) {
        let p = Aip194Strict;
        let now = Instant::now();
        assert_eq!(p.on_error(now, 1, idempotent, unavailable()).is_continue(), want);
        assert_eq!(p.on_error(now, 1, idempotent, http_unavailable()).is_continue(), want);
        assert_eq!(p.on_error(now, 1, idempotent, Error::io("reset")).is_continue(), want);
    }

    #[test]
    fn aip194_strict_permanent() {
        let p = Aip194Strict;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, permission_denied()).is_permanent());
        assert!(p.on_error(now, 1, true, Error::ser("bad")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::argument("bad")).is_permanent());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn aip194_strict_authentication() {
        let p = Aip194Strict;
        let now = Instant::now();
        let transient = Error::authentication(CredentialsError::from_msg(true, "try again"));
        assert!(p.on_error(now, 1, false, transient).is_continue());
        let permanent = Error::authentication(CredentialsError::from_msg(false, "bad key"));
        assert!(p.on_error(now, 1, false, permanent).is_permanent());
    }

    #[test]
    fn always_and_never() {
        let now = Instant::now();
        assert!(AlwaysRetry.on_error(now, 1, false, permission_denied()).is_continue());
        assert!(NeverRetry.on_error(now, 1, true, unavailable()).is_exhausted());
    }

    #[test]
    fn attempt_limit() {
        let p = LimitedAttemptCount::new(3);
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, unavailable()).is_continue());
        assert!(p.on_error(now, 2, true, unavailable()).is_continue());
        assert!(p.on_error(now, 3, true, unavailable()).is_exhausted());
        assert!(p.on_error(now, 1, true, permission_denied()).is_permanent());
    }

    #[test]
    fn time_limit() {
        let p = AlwaysRetry.with_time_limit(Duration::from_secs(10));
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, unavailable()).is_continue());
        let remaining = p.remaining_time(now, 1);
        assert!(remaining.is_some_and(|r| r <= Duration::from_secs(10)), "{remaining:?}");

        let expired = now - Duration::from_secs(20);
        assert!(p.on_error(expired, 1, true, unavailable()).is_exhausted());
        assert_eq!(p.remaining_time(expired, 1), Some(Duration::ZERO));
    }

    #[test]
    fn composed() {
        let p = AlwaysRetry
            .with_attempt_limit(2)
            .with_time_limit(Duration::from_secs(60));
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, permission_denied()).is_continue());
        assert!(p.on_error(now, 2, true, permission_denied()).is_exhausted());
    }

    #[test]
    fn policy_arg() {
        let arg = RetryPolicyArg::from(AlwaysRetry);
        let policy: Arc<dyn RetryPolicy> = arg.into();
        let arg = RetryPolicyArg::from(policy);
        assert!(format!("{arg:?}").contains("AlwaysRetry"), "{arg:?}");
    }
}
