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

//! Derives the transport addresses from the resolved endpoint.
//!
//! Endpoints are usually bare hosts, such as `aiplatform.googleapis.com`.
//! Applications may provide endpoints with a scheme or a port, for example
//! to use a local emulator. These are used as-is.

use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

fn has_scheme(endpoint: &str) -> bool {
    endpoint.starts_with("https://") || endpoint.starts_with("http://")
}

/// The `host` reported by the binary RPC transport, `{host}:443` by default.
pub fn grpc_host(endpoint: &str) -> String {
    if has_scheme(endpoint) || endpoint.contains(':') {
        return endpoint.to_string();
    }
    format!("{endpoint}:443")
}

/// The URI used to connect the binary RPC transport.
pub fn grpc_origin(endpoint: &str) -> String {
    if has_scheme(endpoint) {
        return endpoint.to_string();
    }
    format!("https://{}", grpc_host(endpoint))
}

/// The `host` reported by the REST transport, `https://{host}` by default.
pub fn rest_origin(endpoint: &str) -> String {
    let origin = if has_scheme(endpoint) {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    };
    origin.trim_end_matches('/').to_string()
}

/// The default audience of self-signed JWTs, `https://{host}/`.
pub fn audience(endpoint: &str) -> gax::client_builder::Result<String> {
    let uri = Uri::from_str(&rest_origin(endpoint)).map_err(BuilderError::transport)?;
    let host = uri
        .authority()
        .ok_or_else(|| BuilderError::transport(format!("missing host in endpoint {endpoint}")))?
        .host();
    Ok(format!("https://{host}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("aiplatform.googleapis.com", "aiplatform.googleapis.com:443")]
    #[test_case("localhost:1234", "localhost:1234")]
    #[test_case("http://localhost:1234", "http://localhost:1234")]
    fn grpc(endpoint: &str, want: &str) {
        assert_eq!(grpc_host(endpoint), want);
    }

    #[test_case("aiplatform.googleapis.com", "https://aiplatform.googleapis.com:443")]
    #[test_case("http://localhost:1234", "http://localhost:1234")]
    fn grpc_uri(endpoint: &str, want: &str) {
        assert_eq!(grpc_origin(endpoint), want);
    }

    #[test_case("aiplatform.googleapis.com", "https://aiplatform.googleapis.com")]
    #[test_case("https://aiplatform.googleapis.com/", "https://aiplatform.googleapis.com")]
    #[test_case("http://127.0.0.1:8080", "http://127.0.0.1:8080")]
    fn rest(endpoint: &str, want: &str) {
        assert_eq!(rest_origin(endpoint), want);
    }

    #[test_case("aiplatform.googleapis.com", "https://aiplatform.googleapis.com/")]
    #[test_case("aiplatform.mtls.googleapis.com", "https://aiplatform.mtls.googleapis.com/")]
    #[test_case("http://localhost:8080", "https://localhost/")]
    #[test_case("us-central1-aiplatform.googleapis.com:443", "https://us-central1-aiplatform.googleapis.com/")]
    fn audiences(endpoint: &str, want: &str) -> anyhow::Result<()> {
        assert_eq!(audience(endpoint)?, want);
        Ok(())
    }

    #[test]
    fn bad_endpoint() {
        let got = audience("not a valid endpoint");
        assert!(got.as_ref().is_err_and(|e| e.is_transport()), "{got:?}");
    }
}
