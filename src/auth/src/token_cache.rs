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
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
// Using tokio's wrapper makes the cache testable without relying on clock times.
use tokio::time::Instant;

// Tokens are refreshed slightly before they expire, so a request does not
// start with a token that expires in flight.
const EXPIRATION_MARGIN: Duration = Duration::from_secs(10);

/// Caches the token of a [TokenProvider] until it expires.
///
/// Errors are never cached, the next call retries the provider. Concurrent
/// callers wait on the same refresh.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    token: Mutex<Option<Token>>,
    inner: Arc<T>,
}

fn valid(token: &Token) -> bool {
    token
        .expires_at
        .is_none_or(|e| e > Instant::now() + EXPIRATION_MARGIN)
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            token: Mutex::new(None),
            inner: Arc::new(inner),
        }
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref().filter(|t| valid(t)) {
            return Ok(token.clone());
        }
        let token = self.inner.token().await?;
        tracing::trace!("refreshed token, expires_at={:?}", token.expires_at);
        *guard = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CredentialsError;
    use crate::token::tests::MockTokenProvider;

    fn token(value: &str, expires_at: Option<Instant>) -> Token {
        Token {
            token: value.to_string(),
            token_type: "Bearer".to_string(),
            expires_at,
        }
    }

    #[tokio::test]
    async fn initial_token_success() -> anyhow::Result<()> {
        let expected = token("test-token", None);
        let expected_clone = expected.clone();

        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Ok(expected_clone));

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?, expected);

        // Verify that we use the cached token instead of making a new request
        // to the mock token provider.
        assert_eq!(cache.token().await?, expected);
        Ok(())
    }

    #[tokio::test]
    async fn errors_are_not_cached() -> anyhow::Result<()> {
        let expected = token("test-token", None);
        let expected_clone = expected.clone();

        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(CredentialsError::from_msg(true, "try again")));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(expected_clone));

        let cache = TokenCache::new(mock);
        let got = cache.token().await;
        assert!(got.as_ref().is_err_and(|e| e.is_retryable()), "{got:?}");
        assert_eq!(cache.token().await?, expected);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn expired_token_is_refreshed() -> anyhow::Result<()> {
        let now = Instant::now();
        let initial = token("initial-token", Some(now + Duration::from_secs(300)));
        let refreshed = token("refreshed-token", Some(now + Duration::from_secs(600)));
        let (initial_clone, refreshed_clone) = (initial.clone(), refreshed.clone());

        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(refreshed_clone));

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?, initial);

        tokio::time::advance(Duration::from_secs(100)).await;
        assert_eq!(cache.token().await?, initial);

        tokio::time::advance(Duration::from_secs(195)).await;
        assert_eq!(cache.token().await?, refreshed);
        Ok(())
    }
}
