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

//! Vertex AI client libraries for Rust - Job Service
//!
//! This crate contains the client for the Vertex AI Job Service. The service
//! creates and manages the custom, data labeling, hyperparameter tuning, NAS,
//! batch prediction and model deployment monitoring jobs of a project. The
//! client also exposes the Locations, IAM policy and Operations mixins of the
//! service.
//!
//! The client sends requests over the binary RPC protocol by default, use
//! `with_transport("rest")` in the [builder][client::JobService::builder] to
//! send JSON over HTTP instead.
//!
//! # Quickstart
//!
//! ```no_run
//! # use vertex_jobs_v1::client::JobService;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = JobService::builder().build().await?;
//! let mut jobs = client
//!     .list_custom_jobs()
//!     .set_parent("projects/my-project/locations/us-central1")
//!     .by_item();
//! while let Some(job) = jobs.next().await {
//!     println!("{:?}", job?);
//! }
//! # Ok(()) }
//! ```
//!
//! # Available Clients
//!
//! * [JobService](client/struct.JobService.html)
//! * [blocking::JobService](blocking/struct.JobService.html)

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

pub mod blocking;
pub mod builder;
pub mod client;
pub mod method;
pub mod stub;
pub mod transport;

pub(crate) mod protobuf;

/// The binary encoding of the messages, used by the gRPC transport.
#[doc(hidden)]
pub mod google {
    pub mod cloud {
        pub mod aiplatform {
            #[allow(clippy::enum_variant_names)]
            pub mod v1 {
                include!("generated/protos/aiplatform/google.cloud.aiplatform.v1.rs");
                include!("generated/convert/aiplatform/convert.rs");
            }
        }
        pub mod location {
            include!("generated/protos/location/google.cloud.location.rs");
            include!("generated/convert/location/convert.rs");
        }
    }
    pub mod iam {
        pub mod v1 {
            include!("generated/protos/iam/google.iam.v1.rs");
            include!("generated/convert/iam/convert.rs");
        }
    }
    pub mod longrunning {
        include!("generated/protos/longrunning/google.longrunning.rs");
        include!("generated/convert/longrunning/convert.rs");
    }
}

#[doc(hidden)]
pub(crate) mod tracing;

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        static ref CLIENT_HEADER: gaxi::api_header::XGoogApiClient = gaxi::api_header::XGoogApiClient {
            name: NAME,
            version: VERSION,
            library_type: gaxi::api_header::GCCL,
        };
        pub(crate) static ref X_GOOG_API_CLIENT_GRPC: String = CLIENT_HEADER.grpc_header_value();
        pub(crate) static ref X_GOOG_API_CLIENT_REST: String = CLIENT_HEADER.rest_header_value();
    }
}
