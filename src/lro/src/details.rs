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

//! Simplifies the implementation of the pollers.

use crate::{Error, PollingErrorPolicy, PollingResult, Result};
use gax::retry_result::RetryResult;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

/// A wrapper around [longrunning::model::Operation] with typed responses.
///
/// This is intended as an implementation detail of the generated clients.
/// Applications should have no need to create or use this struct.
#[derive(Debug)]
pub struct Operation<R, M> {
    inner: longrunning::model::Operation,
    response: PhantomData<R>,
    metadata: PhantomData<M>,
}

impl<R, M> Operation<R, M> {
    pub fn new(inner: longrunning::model::Operation) -> Self {
        Self {
            inner,
            response: PhantomData,
            metadata: PhantomData,
        }
    }

    fn name(&self) -> &str {
        &self.inner.name
    }
    fn done(&self) -> bool {
        self.inner.done
    }
    fn metadata(&self) -> Option<&wkt::Any> {
        self.inner.metadata.as_ref()
    }
    fn response(&self) -> Option<&wkt::Any> {
        self.inner.response()
    }
    fn error(&self) -> Option<&gax::error::rpc::Status> {
        self.inner.error()
    }
}

pub(crate) fn handle_start<R, M>(
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    match result {
        Err(e) => (None, PollingResult::Completed(Err(e))),
        Ok(op) => handle_common(op),
    }
}

pub(crate) fn handle_poll<R, M>(
    error_policy: Arc<dyn PollingErrorPolicy>,
    loop_start: Instant,
    attempt_count: u32,
    operation_name: String,
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    match result {
        Err(e) => {
            let state = error_policy.on_error(loop_start, attempt_count, e);
            handle_polling_error(state, operation_name)
        }
        Ok(op) => {
            let (name, result) = handle_common(op);
            if !matches!(result, PollingResult::InProgress(_)) {
                return (name, result);
            }
            match error_policy.on_in_progress(loop_start, attempt_count, &operation_name) {
                None => (name, result),
                Some(e) => (None, PollingResult::Completed(Err(e))),
            }
        }
    }
}

fn handle_polling_error<R, M>(
    state: RetryResult,
    operation_name: String,
) -> (Option<String>, PollingResult<R, M>) {
    match state {
        RetryResult::Continue(e) => (Some(operation_name), PollingResult::PollingError(e)),
        RetryResult::Exhausted(e) | RetryResult::Permanent(e) => {
            (None, PollingResult::Completed(Err(e)))
        }
    }
}

fn handle_common<R, M>(op: Operation<R, M>) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    if op.done() {
        return (None, PollingResult::Completed(as_result(op)));
    }
    let name = op.name().to_string();
    (Some(name), PollingResult::InProgress(as_metadata(op)))
}

fn as_result<R, M>(op: Operation<R, M>) -> Result<R>
where
    R: wkt::message::Message,
{
    // A completed operation sets either the response or the error. Setting
    // neither does not satisfy the invariants of the receiving type.
    match (op.response(), op.error()) {
        (Some(any), None) => any.to_msg::<R>().map_err(Error::deser),
        (None, Some(e)) => Err(Error::service(e.clone())),
        (None, None) => Err(Error::deser("neither result nor error set in LRO result")),
        (Some(_), Some(_)) => Err(Error::deser("both result and error set in LRO result")),
    }
}

fn as_metadata<R, M>(op: Operation<R, M>) -> Option<M>
where
    M: wkt::message::Message,
{
    op.metadata().and_then(|a| a.to_msg::<M>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use gax::polling_error_policy::{Aip194Strict, AlwaysContinue, PollingErrorPolicyExt};
    use longrunning::model::operation;

    type ResponseType = wkt::Duration;
    type MetadataType = wkt::Timestamp;
    type TestOperation = Operation<ResponseType, MetadataType>;

    fn metadata() -> wkt::Timestamp {
        wkt::Timestamp::new(123, 0).expect("in range")
    }

    #[test]
    fn typed_operation_with_metadata() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&metadata())?;
        let op = longrunning::model::Operation::default()
            .set_name("test-only-name")
            .set_metadata(any);
        let op = TestOperation::new(op);
        assert_eq!(op.name(), "test-only-name");
        assert!(!op.done());
        assert!(op.response().is_none());
        assert!(op.error().is_none());
        let got = op.metadata().map(|a| a.to_msg::<wkt::Timestamp>()).transpose()?;
        assert_eq!(got, Some(metadata()));
        Ok(())
    }

    #[test]
    fn start_in_progress() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&metadata())?;
        let op = longrunning::model::Operation::default()
            .set_name("test-only-name")
            .set_metadata(any);
        let (name, poll) = handle_start(Ok(TestOperation::new(op)));
        assert_eq!(name.as_deref(), Some("test-only-name"));
        assert!(
            matches!(&poll, PollingResult::InProgress(Some(m)) if m == &metadata()),
            "{poll:?}"
        );
        Ok(())
    }

    #[test]
    fn start_with_error() {
        let (name, poll) = handle_start::<ResponseType, MetadataType>(Err(Error::deser("bad")));
        assert!(name.is_none());
        assert!(matches!(poll, PollingResult::Completed(Err(_))), "{poll:?}");
    }

    #[test]
    fn done_with_response() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(234, 0))?;
        let op = longrunning::model::Operation::default()
            .set_name("test-only-name")
            .set_done(true)
            .set_result(operation::Result::Response(Box::new(any)));
        let (name, poll) = handle_start(Ok(TestOperation::new(op)));
        assert!(name.is_none());
        match poll {
            PollingResult::Completed(r) => assert_eq!(r?, wkt::Duration::clamp(234, 0)),
            p => panic!("unexpected result {p:?}"),
        }
        Ok(())
    }

    #[test]
    fn done_with_error() {
        let status = Status::default()
            .set_code(Code::FailedPrecondition)
            .set_message("job is running");
        let op = longrunning::model::Operation::default()
            .set_name("test-only-name")
            .set_done(true)
            .set_error(status.clone());
        let (_, poll) = handle_start(Ok(TestOperation::new(op)));
        match poll {
            PollingResult::Completed(Err(e)) => assert_eq!(e.status(), Some(&status)),
            p => panic!("unexpected result {p:?}"),
        }
    }

    #[test]
    fn done_without_result() {
        let op = longrunning::model::Operation::default()
            .set_name("test-only-name")
            .set_done(true);
        let (_, poll) = handle_start(Ok(TestOperation::new(op)));
        assert!(
            matches!(&poll, PollingResult::Completed(Err(e)) if e.is_deserialization()),
            "{poll:?}"
        );
    }

    #[test]
    fn poll_transient_error_continues() {
        let error = Error::service(Status::default().set_code(Code::Unavailable));
        let (name, poll) = handle_poll::<ResponseType, MetadataType>(
            Arc::new(Aip194Strict),
            Instant::now(),
            1,
            "op".to_string(),
            Err(error),
        );
        assert_eq!(name.as_deref(), Some("op"));
        assert!(matches!(poll, PollingResult::PollingError(_)), "{poll:?}");
    }

    #[test]
    fn poll_permanent_error_stops() {
        let error = Error::service(Status::default().set_code(Code::NotFound));
        let (name, poll) = handle_poll::<ResponseType, MetadataType>(
            Arc::new(Aip194Strict),
            Instant::now(),
            1,
            "op".to_string(),
            Err(error),
        );
        assert!(name.is_none());
        assert!(matches!(poll, PollingResult::Completed(Err(_))), "{poll:?}");
    }

    #[test]
    fn poll_in_progress_exhausted() {
        let op = longrunning::model::Operation::default().set_name("op");
        let (name, poll) = handle_poll(
            Arc::new(AlwaysContinue.with_attempt_limit(2)),
            Instant::now(),
            2,
            "op".to_string(),
            Ok(TestOperation::new(op)),
        );
        assert!(name.is_none());
        assert!(
            matches!(&poll, PollingResult::Completed(Err(e)) if e.is_exhausted()),
            "{poll:?}"
        );
    }
}
