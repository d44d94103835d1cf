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

//! Hooks around each request sent over REST.
//!
//! An [Interceptor] observes, and may modify, every request before it is
//! serialized and every response after it is deserialized. The hooks are
//! keyed by the method id, e.g. `GetCustomJob`, and receive the request and
//! response messages as [Any] values that downcast to the concrete message
//! types of the method.
//!
//! Interceptors only run on the REST transport. The binary RPC transport
//! ignores them.
//!
//! # Example
//! ```
//! # use vertex_gax::interceptor::Interceptor;
//! # use vertex_gax::Result;
//! use std::any::Any;
//! use http::{HeaderMap, HeaderValue};
//!
//! #[derive(Debug)]
//! struct Tagger;
//! impl Interceptor for Tagger {
//!     fn pre_call(&self, method: &'static str, _request: &mut dyn Any, headers: &mut HeaderMap) -> Result<()> {
//!         headers.insert("x-example-method", HeaderValue::from_static(method));
//!         Ok(())
//!     }
//! }
//! ```
//!
//! [Any]: std::any::Any

use crate::Result;
use http::HeaderMap;
use std::any::Any;

/// A pair of hooks invoked around each REST request.
///
/// Returning an error from either hook fails the call with that error.
pub trait Interceptor: Send + Sync + std::fmt::Debug {
    /// Called before the request is serialized.
    ///
    /// `request` downcasts to the request message of `method`. `headers`
    /// holds the metadata computed for the call, including the routing
    /// header.
    fn pre_call(
        &self,
        _method: &'static str,
        _request: &mut dyn Any,
        _headers: &mut HeaderMap,
    ) -> Result<()> {
        Ok(())
    }

    /// Called after the response is deserialized.
    ///
    /// `response` downcasts to the response message of `method`.
    fn post_call(&self, _method: &'static str, _response: &mut dyn Any) -> Result<()> {
        Ok(())
    }
}
