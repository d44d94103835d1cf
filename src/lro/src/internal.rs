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

//! This module contains common implementation details for generated code.
//!
//! It is not part of the public API of this crate. Types and functions in this
//! module may be changed or removed without notice. Applications should not use
//! any types or functions contained within.

use crate::details;
use crate::{Poller, PollingBackoffPolicy, PollingErrorPolicy, PollingResult, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

pub use details::Operation;

/// Creates a new `impl Poller<R, M>` from the closures created by the clients.
///
/// # Parameters
/// * `error_policy` - decides which polling errors stop the loop.
/// * `backoff_policy` - the delay between polls in [Poller::until_done].
/// * `start` - starts the operation. It captures the request, the stub, and
///   the request options.
/// * `query` - queries the status of the operation started by `start`. It
///   receives the name of the operation.
pub fn new_poller<R, M, S, SF, Q, QF>(
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<R, M>
where
    R: wkt::message::Message + Send + 'static,
    M: wkt::message::Message + Send + 'static,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    PollerImpl {
        error_policy,
        backoff_policy,
        start: Some(start),
        query,
        operation: None,
        loop_start: tokio::time::Instant::now().into_std(),
        attempt_count: 0,
    }
}

struct PollerImpl<S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: Option<S>,
    query: Q,
    operation: Option<String>,
    loop_start: Instant,
    attempt_count: u32,
}

impl<R, M, S, SF, Q, QF> Poller<R, M> for PollerImpl<S, Q>
where
    R: wkt::message::Message + Send + 'static,
    M: wkt::message::Message + Send + 'static,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    fn operation_name(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        if let Some(start) = self.start.take() {
            let result = start().await;
            let (op, poll) = details::handle_start(result);
            self.operation = op;
            return Some(poll);
        }
        if let Some(name) = self.operation.take() {
            self.attempt_count += 1;
            let query = self.query.clone();
            let result = query(name.clone()).await;
            let (op, poll) = details::handle_poll(
                self.error_policy.clone(),
                self.loop_start,
                self.attempt_count,
                name,
                result,
            );
            self.operation = op;
            return Some(poll);
        }
        None
    }

    async fn until_done(mut self) -> Result<R> {
        let mut waits = 0_u32;
        while let Some(p) = self.poll().await {
            match p {
                PollingResult::Completed(r) => return r,
                PollingResult::InProgress(_) | PollingResult::PollingError(_) => {
                    waits += 1;
                    let delay = self.backoff_policy.wait_period(self.loop_start, waits);
                    tracing::trace!("operation {:?} in progress, waiting {delay:?}", self.operation);
                    tokio::time::sleep(delay).await;
                }
            }
        }
        Err(crate::Error::exhausted(
            "the long-running operation has no name, it cannot be polled",
        ))
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin {
        use futures::stream::unfold;
        Box::pin(unfold(Some(self), move |state| async move {
            if let Some(mut poller) = state {
                if let Some(pr) = poller.poll().await {
                    return Some((pr, Some(poller)));
                }
            };
            None
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use gax::error::rpc::{Code, Status};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::polling_error_policy::{Aip194Strict, AlwaysContinue, PollingErrorPolicyExt};
    use longrunning::model::operation;
    use std::sync::Mutex;
    use std::time::Duration;

    type ResponseType = wkt::Duration;
    type MetadataType = wkt::Timestamp;
    type TestOperation = Operation<ResponseType, MetadataType>;

    fn backoff() -> Arc<dyn PollingBackoffPolicy> {
        Arc::new(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(10))
                .with_maximum_delay(Duration::from_millis(100))
                .build()
                .expect("valid backoff"),
        )
    }

    fn metadata() -> wkt::Timestamp {
        wkt::Timestamp::new(123, 0).expect("in range")
    }

    fn in_progress() -> Result<TestOperation> {
        let any = wkt::Any::from_msg(&metadata()).map_err(Error::ser)?;
        let op = longrunning::model::Operation::default()
            .set_name("test-only-name")
            .set_metadata(any);
        Ok(TestOperation::new(op))
    }

    fn done() -> Result<TestOperation> {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(234, 0)).map_err(Error::ser)?;
        let op = longrunning::model::Operation::default()
            .set_name("test-only-name")
            .set_done(true)
            .set_result(operation::Result::Response(Box::new(any)));
        Ok(TestOperation::new(op))
    }

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable).set_message("try-again"))
    }

    #[tokio::test]
    async fn poll_basic_flow() -> anyhow::Result<()> {
        let start = || async move { in_progress() };
        let query = |_: String| async move { done() };
        let mut poller = new_poller(Arc::new(Aip194Strict), backoff(), start, query);
        assert_eq!(poller.operation_name(), None);

        let p0 = poller.poll().await;
        assert!(
            matches!(&p0, Some(PollingResult::InProgress(Some(m))) if m == &metadata()),
            "{p0:?}"
        );
        assert_eq!(poller.operation_name(), Some("test-only-name"));

        let p1 = poller.poll().await;
        match p1 {
            Some(PollingResult::Completed(r)) => assert_eq!(r?, wkt::Duration::clamp(234, 0)),
            r => panic!("unexpected polling result {r:?}"),
        }

        let p2 = poller.poll().await;
        assert!(p2.is_none(), "{p2:?}");
        Ok(())
    }

    #[tokio::test]
    async fn start_error_completes() {
        let start = || async move { Err::<TestOperation, Error>(unavailable()) };
        let query = |_: String| async move { done() };
        let mut poller = new_poller(Arc::new(Aip194Strict), backoff(), start, query);
        let p0 = poller.poll().await;
        assert!(
            matches!(&p0, Some(PollingResult::Completed(Err(e))) if e.status().is_some()),
            "{p0:?}"
        );
        assert!(poller.poll().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_with_transient_errors() -> anyhow::Result<()> {
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let start = || async move { in_progress() };
        let query = move |name: String| {
            let counter = counter.clone();
            async move {
                assert_eq!(name, "test-only-name");
                let mut count = counter.lock().expect("never poisoned");
                *count += 1;
                match *count {
                    1 => Err(unavailable()),
                    2 => in_progress(),
                    _ => done(),
                }
            }
        };
        let poller = new_poller(Arc::new(AlwaysContinue), backoff(), start, query);
        let response = poller.until_done().await?;
        assert_eq!(response, wkt::Duration::clamp(234, 0));
        assert_eq!(*calls.lock().expect("never poisoned"), 3);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_permanent_error() {
        let start = || async move { in_progress() };
        let query = |_: String| async move {
            Err::<TestOperation, Error>(Error::service(
                Status::default().set_code(Code::PermissionDenied),
            ))
        };
        let poller = new_poller(Arc::new(Aip194Strict), backoff(), start, query);
        let err = poller.until_done().await.expect_err("permanent errors stop the loop");
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_policy_exhausted() {
        let start = || async move { in_progress() };
        let query = |_: String| async move { in_progress() };
        let policy = AlwaysContinue.with_attempt_limit(3);
        let poller = new_poller(Arc::new(policy), backoff(), start, query);
        let err = poller.until_done().await.expect_err("the policy limits the attempts");
        assert!(err.is_exhausted(), "{err:?}");
    }

    #[tokio::test]
    async fn poll_stream() -> anyhow::Result<()> {
        use futures::StreamExt;
        let start = || async move { in_progress() };
        let query = |_: String| async move { done() };
        let mut stream = new_poller(Arc::new(Aip194Strict), backoff(), start, query).into_stream();
        assert!(
            matches!(stream.next().await, Some(PollingResult::InProgress(Some(_)))),
            "expected an in-progress result first"
        );
        match stream.next().await {
            Some(PollingResult::Completed(r)) => assert_eq!(r?, wkt::Duration::clamp(234, 0)),
            r => panic!("unexpected polling result {r:?}"),
        }
        assert!(stream.next().await.is_none());
        Ok(())
    }
}
