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

//! Helpers to create the `x-goog-request-params` header.
//!
//! The service uses this header to route each request. Its value is a
//! `&`-separated list of `field=value` pairs. The values are percent-encoded,
//! except for the characters that appear in resource names.

use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The name of the routing header.
pub const REQUEST_PARAMS: HeaderName = HeaderName::from_static("x-goog-request-params");

// Unreserved characters (RFC 3986) and `/` are sent as-is.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes a routing or path value.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, ENCODE_SET).to_string()
}

/// Formats a single `field=value` pair.
pub fn format((field, value): (&str, &str)) -> String {
    format!("{field}={}", encode(value))
}

/// Formats the header value for all the routing parameters.
///
/// Empty values are kept, the service expects the field name even if the
/// request leaves the field unset.
pub fn header_value(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|p| format(*p))
        .collect::<Vec<_>>()
        .join("&")
}

/// Inserts the routing header into `headers`.
pub fn insert(headers: &mut HeaderMap, params: &[(&str, &str)]) -> gax::Result<()> {
    let value = HeaderValue::from_str(&header_value(params)).map_err(gax::error::Error::ser)?;
    headers.insert(REQUEST_PARAMS, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("projects/p/locations/l/customJobs/j", "projects/p/locations/l/customJobs/j")]
    #[test_case("", "")]
    #[test_case("a b", "a%20b")]
    #[test_case("a&b=c", "a%26b%3Dc")]
    #[test_case("safe-_.~/", "safe-_.~/")]
    #[test_case("ünïcode", "%C3%BCn%C3%AFcode")]
    fn encoding(input: &str, want: &str) {
        assert_eq!(encode(input), want);
    }

    #[test]
    fn single() {
        assert_eq!(
            header_value(&[("name", "projects/p/locations/l/customJobs/j")]),
            "name=projects/p/locations/l/customJobs/j"
        );
    }

    #[test]
    fn empty_value() {
        assert_eq!(header_value(&[("parent", "")]), "parent=");
    }

    #[test]
    fn nested_field() {
        assert_eq!(
            header_value(&[("model_deployment_monitoring_job.name", "projects/p")]),
            "model_deployment_monitoring_job.name=projects/p"
        );
    }

    #[test]
    fn multiple() {
        assert_eq!(
            header_value(&[("name", "a"), ("location", "b c")]),
            "name=a&location=b%20c"
        );
    }

    #[test]
    fn insert_header() -> anyhow::Result<()> {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &[("resource", "projects/p/locations/l/models/m")])?;
        assert_eq!(
            headers.get("x-goog-request-params"),
            Some(&HeaderValue::from_static(
                "resource=projects/p/locations/l/models/m"
            ))
        );
        Ok(())
    }
}
