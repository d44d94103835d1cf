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

//! Types and functions to make LROs easier to use and to require less boilerplate.
//!
//! Some methods of the Job Service start a long-running operation (LRO) on
//! the server. The client libraries return a [Poller] from these methods.
//! Applications can poll the operation step by step, or simply wait until it
//! completes:
//!
//! ```no_run
//! # use vertex_lro::Poller;
//! # async fn sample(poller: impl Poller<wkt::Empty, wkt::Empty>) -> gax::Result<()> {
//! let response = poller.until_done().await?;
//! # Ok(()) }
//! ```
//!
//! Dropping a poller does not cancel the operation on the server. Use the
//! corresponding `Cancel*` method for that.

pub use gax::Result;
pub use gax::error::Error;
pub use gax::polling_backoff_policy::PollingBackoffPolicy;
pub use gax::polling_error_policy::PollingErrorPolicy;
use std::future::Future;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Not all errors indicate that the operation failed. For example, this
    /// may fail because it was not possible to connect to the service. Such
    /// transient errors may disappear in the next polling attempt.
    ///
    /// Errors that will never recover end the polling loop with a
    /// [PollingResult::Completed] result instead.
    PollingError(Error),
}

/// The trait implemented by LRO helpers.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub trait Poller<R, M>: Send {
    /// The name of the operation, once it has started.
    fn operation_name(&self) -> Option<&str>;

    /// Query the current status of the long-running operation.
    ///
    /// The first call starts the operation. Returns `None` once the operation
    /// completed.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Poll the long-running operation until it completes.
    ///
    /// The polling policies configured in the client, or in the request
    /// options, control how often the operation is polled and which errors
    /// stop the loop.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Convert a poller to a [futures::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin;
}

mod details;

#[doc(hidden)]
pub mod internal;
