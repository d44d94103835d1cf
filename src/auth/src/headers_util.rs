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

use crate::Result;
use crate::constants::{API_KEY_HEADER_KEY, QUOTA_PROJECT_KEY};
use crate::errors;
use crate::token::Token;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// Creates the `authorization` header, and the quota project header if any.
pub(crate) fn build_bearer_headers(
    token: &Token,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("{} {}", token.token_type, token.token))
        .map_err(errors::non_retryable)?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    add_quota_project(&mut headers, quota_project_id)?;
    Ok(headers)
}

/// Creates the API key header, and the quota project header if any.
pub(crate) fn build_api_key_headers(
    token: &Token,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&token.token).map_err(errors::non_retryable)?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER_KEY), value);
    add_quota_project(&mut headers, quota_project_id)?;
    Ok(headers)
}

fn add_quota_project(headers: &mut HeaderMap, quota_project_id: &Option<String>) -> Result<()> {
    if let Some(project) = quota_project_id {
        headers.insert(
            HeaderName::from_static(QUOTA_PROJECT_KEY),
            HeaderValue::from_str(project).map_err(errors::non_retryable)?,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_token(token: &str, token_type: &str) -> Token {
        Token {
            token: token.to_string(),
            token_type: token_type.to_string(),
            expires_at: None,
        }
    }

    #[test]
    fn bearer_headers() -> anyhow::Result<()> {
        let token = create_test_token("test_token", "Bearer");
        let headers = build_bearer_headers(&token, &None)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).expect("authorization header");
        assert_eq!(value, HeaderValue::from_static("Bearer test_token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn bearer_headers_with_quota_project() -> anyhow::Result<()> {
        let token = create_test_token("test_token", "Bearer");
        let headers = build_bearer_headers(&token, &Some("test-project-123".to_string()))?;
        assert_eq!(headers.len(), 2, "{headers:?}");
        let value = headers.get(QUOTA_PROJECT_KEY).expect("quota project header");
        assert_eq!(value, HeaderValue::from_static("test-project-123"));
        assert!(!value.is_sensitive());
        Ok(())
    }

    #[test]
    fn bearer_headers_different_token_type() -> anyhow::Result<()> {
        let token = create_test_token("special_token", "MAC");
        let headers = build_bearer_headers(&token, &None)?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("MAC special_token"))
        );
        Ok(())
    }

    #[test]
    fn bearer_headers_invalid_token() {
        let token = create_test_token("token with \n invalid chars", "Bearer");
        let result = build_bearer_headers(&token, &None);
        assert!(result.is_err(), "{result:?}");
    }

    #[test]
    fn api_key_headers() -> anyhow::Result<()> {
        let token = create_test_token("api_key_12345", "");
        let headers = build_api_key_headers(&token, &Some("test-project-123".to_string()))?;
        assert_eq!(headers.len(), 2, "{headers:?}");
        let value = headers.get(API_KEY_HEADER_KEY).expect("api key header");
        assert_eq!(value, HeaderValue::from_static("api_key_12345"));
        assert!(value.is_sensitive());
        assert!(headers.get(AUTHORIZATION).is_none(), "{headers:?}");
        Ok(())
    }

    #[test]
    fn api_key_headers_invalid_token() {
        let token = create_test_token("api_key with \n invalid chars", "");
        let result = build_api_key_headers(&token, &None);
        assert!(result.is_err(), "{result:?}");
    }
}
