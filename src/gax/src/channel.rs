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

//! The channel used by the binary RPC transport.
//!
//! The binary transport sends each RPC as a single framed message over a
//! channel. By default the transport creates its own channel, connected to
//! the resolved endpoint. Applications may inject a pre-built channel with
//! [ClientBuilder::with_channel], for example to share one connection pool
//! between several clients or to talk to an in-process fake.
//!
//! An injected channel is shared: the transport never closes it.
//!
//! [ClientBuilder::with_channel]: crate::client_builder::ClientBuilder::with_channel

use crate::Result;
use bytes::Bytes;
use http::HeaderMap;
use std::time::Duration;

/// A connection capable of sending unary RPCs.
#[async_trait::async_trait]
pub trait Channel: Send + Sync + std::fmt::Debug {
    /// Sends one unary RPC.
    ///
    /// # Parameters
    /// * `path` - the RPC path, e.g. `/google.cloud.aiplatform.v1.JobService/GetCustomJob`.
    /// * `metadata` - the request metadata, including the routing header.
    /// * `payload` - the encoded request message.
    /// * `timeout` - the deadline for this attempt, if any.
    async fn unary(
        &self,
        path: &'static str,
        metadata: HeaderMap,
        payload: Bytes,
        timeout: Option<Duration>,
    ) -> Result<Bytes>;

    /// Releases any resources held by the channel.
    ///
    /// The default implementation does nothing.
    async fn close(&self) {}
}
