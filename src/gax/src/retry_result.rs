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

//! The decision returned by retry and polling error policies.

use crate::error::Error;

/// The result of a loop control decision.
///
/// Retry policies and polling error policies return this type after each
/// failed attempt. Every variant carries the error, which allows decorators
/// to turn a `Continue` into an `Exhausted` without losing the cause.
#[derive(Debug)]
pub enum RetryResult {
    /// The error is not retryable, stop the loop.
    Permanent(Error),

    /// The error is retryable, but a limit on the loop has been reached.
    Exhausted(Error),

    /// The error is retryable, make another attempt.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Extracts the error, discarding the decision.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    #[test]
    fn predicates() {
        let flow = RetryResult::Permanent(unavailable());
        assert!(flow.is_permanent() && !flow.is_exhausted() && !flow.is_continue());
        let flow = RetryResult::Exhausted(unavailable());
        assert!(!flow.is_permanent() && flow.is_exhausted() && !flow.is_continue());
        let flow = RetryResult::Continue(unavailable());
        assert!(!flow.is_permanent() && !flow.is_exhausted() && flow.is_continue());
    }

    #[test]
    fn into_error() {
        let error = RetryResult::Continue(unavailable()).into_error();
        assert_eq!(error.status().map(|s| s.code), Some(Code::Unavailable));
    }
}
