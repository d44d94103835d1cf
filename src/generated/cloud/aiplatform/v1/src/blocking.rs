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

//! A blocking facade over [JobService][crate::client::JobService].
//!
//! Applications without an asynchronous runtime use [JobService] to send
//! requests and wait for their results. The facade owns a current-thread
//! runtime, each call blocks the calling thread until the request completes.
//!
//! # Example
//! ```no_run
//! # use vertex_jobs_v1::blocking::JobService;
//! # use vertex_jobs_v1::client;
//! # fn sample() -> anyhow::Result<()> {
//! let service = JobService::new(client::JobService::builder())?;
//! let parent = "projects/my-project/locations/us-central1";
//! for job in service.items(service.client().list_custom_jobs().set_parent(parent).by_item()) {
//!     println!("{:?}", job?);
//! }
//! # Ok(()) }
//! ```

use crate::builder::job_service::ClientBuilder;
use gax::client_builder::Error as BuilderError;
use gax::paginator::blocking::{ItemIter, PageIter};
use gax::paginator::{ItemPaginator, PageableResponse, Paginator};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Sends requests to the Job Service, blocking until they complete.
///
/// Must not be used from within an asynchronous context, the runtime panics
/// if it is asked to block inside another runtime.
#[derive(Clone, Debug)]
pub struct JobService {
    client: crate::client::JobService,
    runtime: Arc<Runtime>,
}

impl JobService {
    /// Builds the client in `builder` on a new runtime.
    pub fn new(builder: ClientBuilder) -> gax::client_builder::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(BuilderError::transport)?;
        let client = runtime.block_on(builder.build())?;
        Ok(Self {
            client,
            runtime: Arc::new(runtime),
        })
    }

    /// The asynchronous client, used to create the request builders.
    pub fn client(&self) -> &crate::client::JobService {
        &self.client
    }

    /// Blocks until `future` completes.
    ///
    /// ```no_run
    /// # use vertex_jobs_v1::blocking::JobService;
    /// # fn sample(service: &JobService) -> vertex_jobs_v1::Result<()> {
    /// let name = "projects/my-project/locations/us-central1/customJobs/my-job";
    /// let job = service.send(service.client().get_custom_job().set_name(name).send())?;
    /// # Ok(()) }
    /// ```
    pub fn send<F, T>(&self, future: F) -> T
    where
        F: Future<Output = T>,
    {
        self.runtime.block_on(future)
    }

    /// Iterates over the pages of a list RPC.
    pub fn paginate<T, E>(&self, pages: Paginator<T, E>) -> PageIter<T, E> {
        PageIter::new(self.runtime.clone(), pages)
    }

    /// Iterates over the items of a list RPC.
    pub fn items<T, E>(&self, items: ItemPaginator<T, E>) -> ItemIter<T, E>
    where
        T: PageableResponse,
    {
        ItemIter::new(self.runtime.clone(), items)
    }

    /// Blocks until the long-running operation completes.
    pub fn wait<P, R, M>(&self, poller: P) -> crate::Result<R>
    where
        P: lro::Poller<R, M>,
    {
        self.runtime.block_on(poller.until_done())
    }

    /// Closes the transport of the client.
    pub fn close(&self) {
        self.runtime.block_on(self.client.close())
    }
}
