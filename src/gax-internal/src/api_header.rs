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

//! The `x-goog-api-client` telemetry header.

use http::header::HeaderName;

/// The name of the telemetry header.
pub const X_GOOG_API_CLIENT: HeaderName = HeaderName::from_static("x-goog-api-client");

pub const GAPIC: &str = "gapic";
pub const GCCL: &str = "gccl";

mod build_info {
    // Written by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Describes a client library in the telemetry header.
///
/// Each client creates one static instance and formats it once, in a
/// lazily initialized static.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

impl XGoogApiClient {
    /// The header value for the REST transport.
    pub fn rest_header_value(&self) -> String {
        self.header_value("rest")
    }

    /// The header value for the binary RPC transport.
    pub fn grpc_header_value(&self) -> String {
        self.header_value("grpc")
    }

    fn header_value(&self, transport: &str) -> String {
        let rustc = build_info::RUSTC_VERSION
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        let gax = build_info::PKG_VERSION;
        format!(
            "gl-rust/{rustc} gax/{gax} {transport}/{gax} {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn breakdown(formatted: &str) -> HashMap<&str, &str> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .collect()
    }

    const HEADER: XGoogApiClient = XGoogApiClient {
        name: "vertex-jobs-v1",
        library_type: GCCL,
        version: "1.2.3",
    };

    #[test_case(HEADER.rest_header_value(), "rest", "grpc")]
    #[test_case(HEADER.grpc_header_value(), "grpc", "rest")]
    fn format(value: String, present: &str, absent: &str) {
        let fields = breakdown(&value);
        assert_eq!(fields.get(GCCL), Some(&"1.2.3"), "{value}");
        assert_eq!(fields.get("gax"), Some(&build_info::PKG_VERSION), "{value}");
        assert_eq!(fields.get(present), Some(&build_info::PKG_VERSION), "{value}");
        assert!(fields.get(absent).is_none(), "{value}");
        let rustc = fields.get("gl-rust").copied().unwrap_or_default();
        assert!(
            !rustc.is_empty() && build_info::RUSTC_VERSION.contains(rustc),
            "{value}"
        );
        assert!(value.starts_with("gl-rust/"), "{value}");
    }

    #[test]
    fn header_name() {
        assert_eq!(X_GOOG_API_CLIENT.as_str(), "x-goog-api-client");
        assert_eq!(HEADER.name, "vertex-jobs-v1");
        assert_ne!(GAPIC, GCCL);
    }
}
