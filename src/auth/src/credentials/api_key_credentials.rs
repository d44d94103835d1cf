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

//! [API Key] Credentials type.
//!
//! An API key is a simple encrypted string that you can use when calling
//! Google Cloud APIs. When you use API keys in your applications, ensure that
//! they are kept secure during both storage and transmission.
//!
//! [API Key]: https://cloud.google.com/api-keys/docs/overview

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, Result};
use crate::headers_util::build_api_key_headers;
use crate::token::Token;
use http::HeaderMap;
use std::sync::Arc;

struct ApiKeyCredentials {
    api_key: String,
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

/// A builder for creating credentials that authenticate using an [API key].
///
/// API keys are convenient because no [principal] is needed. The API key
/// associates the request with a Google Cloud project for billing and quota
/// purposes.
///
/// [API key]: https://cloud.google.com/docs/authentication/api-keys-use
/// [principal]: https://cloud.google.com/docs/authentication#principal
#[derive(Debug)]
pub struct Builder {
    api_key: String,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder with given API key.
    ///
    /// # Example
    /// ```
    /// # use vertex_auth::credentials::api_key_credentials::Builder;
    /// let credentials = Builder::new("my-api-key").build();
    /// ```
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            api_key: api_key.into(),
            quota_project_id: None,
        }
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, quota_project_id: T) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(ApiKeyCredentials {
                api_key: self.api_key,
                quota_project_id: self.quota_project_id,
            }),
        }
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for ApiKeyCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let token = Token {
            token: self.api_key.clone(),
            token_type: String::new(),
            expires_at: None,
        };
        build_api_key_headers(&token, &self.quota_project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{API_KEY_HEADER_KEY, QUOTA_PROJECT_KEY};
    use http::HeaderValue;
    use http::header::AUTHORIZATION;

    #[test]
    fn debug_censors_api_key() {
        let creds = Builder::new("super-secret-api-key").build();
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret-api-key"), "{fmt}");
    }

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let creds = Builder::new("test-api-key").build();
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(API_KEY_HEADER_KEY),
            Some(&HeaderValue::from_static("test-api-key"))
        );
        assert!(headers.get(AUTHORIZATION).is_none(), "{headers:?}");
        assert!(headers.get(QUOTA_PROJECT_KEY).is_none(), "{headers:?}");
        assert_eq!(creds.universe_domain().await, None);
        Ok(())
    }

    #[tokio::test]
    async fn headers_with_quota_project() -> anyhow::Result<()> {
        let creds = Builder::new("test-api-key")
            .with_quota_project_id("qp-project")
            .build();
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(QUOTA_PROJECT_KEY),
            Some(&HeaderValue::from_static("qp-project"))
        );
        Ok(())
    }
}
