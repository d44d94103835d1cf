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

//! Serializes query parameters.
//!
//! The REST transcoding produces the query parameters as JSON values. Nested
//! messages use `.`-separated names, and repeated fields repeat the name.

use serde_json::{Map, Value};

pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, n.to_string())]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}

/// Adds all the fields in `query` to the request.
pub fn add_all(builder: reqwest::RequestBuilder, query: Map<String, Value>) -> reqwest::RequestBuilder {
    query
        .into_iter()
        .fold(builder, |builder, (name, value)| value.add(builder, &name))
}
