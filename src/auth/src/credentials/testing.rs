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

//! Helpers for testing code that uses [Credentials].
//!
//! These credentials never contact any authentication service. The module
//! is only compiled for this crate's unit tests, or with the
//! `_internal-testing` feature, which the other workspace crates enable in
//! their `[dev-dependencies]`.

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, Result};
use crate::errors::CredentialsError;
use http::header::{AUTHORIZATION, HeaderValue};
use http::HeaderMap;

/// The `authorization` header value created by [test_credentials].
pub const TEST_AUTHORIZATION: &str = "Bearer test-only-token";

/// Credentials that always return the same, fake, `authorization` header.
pub fn test_credentials() -> Credentials {
    Credentials::from(TestCredentials { universe_domain: None })
}

/// Like [test_credentials], in the given universe domain.
pub fn test_credentials_in_universe<S: Into<String>>(universe_domain: S) -> Credentials {
    Credentials::from(TestCredentials {
        universe_domain: Some(universe_domain.into()),
    })
}

/// Credentials that always fail to create the headers.
pub fn error_credentials(retryable: bool) -> Credentials {
    Credentials::from(ErrorCredentials(retryable))
}

#[derive(Debug)]
struct TestCredentials {
    universe_domain: Option<String>,
}

#[async_trait::async_trait]
impl CredentialsProvider for TestCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(TEST_AUTHORIZATION));
        Ok(headers)
    }

    async fn universe_domain(&self) -> Option<String> {
        self.universe_domain.clone()
    }
}

#[derive(Debug)]
struct ErrorCredentials(bool);

#[async_trait::async_trait]
impl CredentialsProvider for ErrorCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Err(CredentialsError::from_msg(self.0, "test-only error credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_credentials_headers() -> anyhow::Result<()> {
        let creds = test_credentials();
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static(TEST_AUTHORIZATION))
        );
        assert_eq!(creds.universe_domain().await, None);

        let creds = test_credentials_in_universe("my-universe.com");
        assert_eq!(creds.universe_domain().await.as_deref(), Some("my-universe.com"));
        Ok(())
    }

    #[tokio::test]
    async fn error_credentials_fail() {
        let got = error_credentials(true).headers().await;
        assert!(got.as_ref().is_err_and(|e| e.is_retryable()), "{got:?}");
        let got = error_credentials(false).headers().await;
        assert!(got.as_ref().is_err_and(|e| !e.is_retryable()), "{got:?}");
    }
}
