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

//! Vertex AI client libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate applications
//! calling Vertex AI. The clients consume an implementation of
//! [credentials::Credentials] and use it to create the authentication
//! headers of each RPC.
//!
//! [Authentication methods at Google] is a good introduction on the topic of
//! authentication for Google Cloud services. The guide also describes the
//! common terminology used with authentication, such as [Principals],
//! [Tokens], and [Credentials].
//!
//! [Authentication methods at Google]: https://cloud.google.com/docs/authentication
//! [Principals]: https://cloud.google.com/docs/authentication#principal
//! [Tokens]: https://cloud.google.com/docs/authentication#token
//! [Credentials]: https://cloud.google.com/docs/authentication#credentials

pub mod build_errors;
pub mod errors;

/// Types and functions to work with Google Cloud authentication [Credentials].
///
/// [Credentials]: https://cloud.google.com/docs/authentication#credentials
pub mod credentials;

/// Types and functions to work with auth [Tokens].
///
/// [Tokens]: https://cloud.google.com/docs/authentication#token
pub mod token;

pub(crate) mod constants;
pub(crate) mod headers_util;
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// [CredentialsError][errors::CredentialsError].
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// The result of building credentials.
pub type BuildResult<T> = std::result::Result<T, build_errors::Error>;
