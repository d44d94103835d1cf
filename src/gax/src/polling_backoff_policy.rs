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

//! The delay between polls of a long-running operation.
//!
//! Unlike retry backoff, polling backoff does not use jitter. The expected
//! execution time of an operation is rarely known, truncated exponential
//! growth of the period works well in practice.
//!
//! # Example
//! ```
//! # use vertex_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
//! use std::time::Duration;
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(500))
//!     .with_maximum_delay(Duration::from_secs(30))
//!     .build()?;
//! // `policy` implements `PollingBackoffPolicy`.
//! # Ok::<(), Error>(())
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Computes the delay between polls of a long-running operation.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next poll.
    ///
    /// # Parameters
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of polls so far, always at least 1.
    fn wait_period(&self, loop_start: Instant, attempt_count: u32) -> Duration;
}

/// A helper type to use [PollingBackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingBackoffPolicyArg(Arc<dyn PollingBackoffPolicy>);

impl<T: PollingBackoffPolicy + 'static> From<T> for PollingBackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingBackoffPolicyArg> for Arc<dyn PollingBackoffPolicy> {
    fn from(value: PollingBackoffPolicyArg) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;

    #[test]
    fn polling_backoff_policy_arg() {
        let policy = ExponentialBackoffBuilder::default().clamp();
        let arg = PollingBackoffPolicyArg::from(policy);
        let policy: Arc<dyn PollingBackoffPolicy> = arg.into();
        assert_eq!(policy.wait_period(Instant::now(), 1), Duration::from_secs(1));
        assert_eq!(policy.wait_period(Instant::now(), 2), Duration::from_secs(2));
    }
}
