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

//! The response type returned by the stubs.
//!
//! Stubs return the decoded message together with the response metadata.
//! The clients usually return only the message, but tests that mock a stub
//! build responses with [Response::from].
//!
//! # Example
//! ```
//! # use vertex_gax::response::Response;
//! # use vertex_gax::Result;
//! #[derive(Default)]
//! struct CustomJob { name: String }
//! fn mock_response() -> Result<Response<CustomJob>> {
//!     Ok(Response::from(CustomJob { name: "name_value".into() }))
//! }
//! ```

/// A decoded response and its metadata.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from its metadata and body.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The response metadata, e.g. the HTTP headers or the gRPC initial
    /// metadata.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }

    /// The decoded message.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response, returning the metadata and the body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response, returning the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// The metadata of a [Response].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The response headers.
    pub headers: http::HeaderMap,
}

impl Parts {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the headers.
    pub fn set_headers<V: Into<http::HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};

    #[test]
    fn from_body() {
        let response = Response::from("abc".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.body(), "abc");
        assert_eq!(response.into_body(), "abc");
    }

    #[test]
    fn from_parts() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let response = Response::from_parts(Parts::new().set_headers(headers), 42);
        assert!(response.headers().contains_key("content-type"));
        let response = response.map(|v| v + 1);
        let (parts, body) = response.into_parts();
        assert_eq!(body, 43);
        assert!(parts.headers.contains_key("content-type"));
    }
}
