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

//! Implementation details for the Vertex AI clients.
//!
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. The generated clients depend on them, and both
//! change together without notice.
//!
//! The crate contains the logic shared by every transport:
//! - reading the environment variables that control mTLS and the universe
//!   domain,
//! - resolving the endpoint and validating the universe domain,
//! - binding the credentials to the client configuration,
//! - the routing header and REST transcoding helpers,
//! - the REST (`reqwest`) and binary RPC (`tonic`) executors, and the
//!   `prost` conversions used by the latter.

pub mod api_header;
pub mod credentials;
pub mod endpoint;
pub mod environment;
pub mod grpc;
pub mod host;
pub mod http;
pub mod options;
pub mod path_parameter;
pub mod prost;
pub mod query_parameter;
pub mod routing_parameter;
pub mod universe;
pub mod unimplemented;

#[doc(hidden)]
pub mod google {
    pub mod rpc {
        include!("generated/protos/rpc/google.rpc.rs");
        include!("generated/convert/rpc/convert.rs");
    }
}
