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

//! Drives the REST executor against a local HTTP server.
//!
//! The server replies with a scripted sequence of responses and records
//! every request it receives.

#[cfg(test)]
mod tests {
    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptions;
    use gax::retry_policy::{Aip194Strict, RetryPolicyExt};
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use auth::credentials::testing::{TEST_AUTHORIZATION, test_credentials};
    use vertex_gax_internal::http::{NoBody, ReqwestClient};
    use vertex_gax_internal::options::ClientConfig;

    type Result<T> = anyhow::Result<T>;

    #[derive(Clone, Debug, Default)]
    struct Recorded {
        headers: HeaderMap,
        body: Bytes,
    }

    #[derive(Clone, Default)]
    struct Script {
        replies: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
        received: Arc<Mutex<Vec<Recorded>>>,
    }

    impl Script {
        fn new(replies: Vec<(StatusCode, String)>) -> Self {
            Self {
                replies: Arc::new(Mutex::new(replies.into())),
                received: Arc::default(),
            }
        }

        fn received(&self) -> Vec<Recorded> {
            self.received.lock().expect("never poisoned").clone()
        }
    }

    async fn handler(
        State(script): State<Script>,
        headers: HeaderMap,
        body: Bytes,
    ) -> (StatusCode, String) {
        script
            .received
            .lock()
            .expect("never poisoned")
            .push(Recorded { headers, body });
        let next = script.replies.lock().expect("never poisoned").pop_front();
        next.unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, "script exhausted".into()))
    }

    async fn slow() -> (StatusCode, String) {
        tokio::time::sleep(Duration::from_secs(5)).await;
        (StatusCode::OK, "{}".into())
    }

    async fn start(script: Script) -> Result<(String, tokio::task::JoinHandle<()>)> {
        let app = axum::Router::new()
            .route("/v1/{*path}", axum::routing::any(handler))
            .route("/slow", axum::routing::get(slow))
            .with_state(script);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async {
            let _ = axum::serve(listener, app).await;
        });
        Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
    }

    fn unavailable() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": 503,
            "message": "try-again",
            "status": "UNAVAILABLE",
        }});
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn client(endpoint: &str) -> Result<ReqwestClient> {
        let client =
            ReqwestClient::new(&ClientConfig::default(), endpoint, test_credentials(), None)?;
        Ok(client)
    }

    fn retry_options() -> Result<RequestOptions> {
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_retry_policy(Aip194Strict.with_attempt_limit(3));
        options.set_backoff_policy(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(2))
                .build()?,
        );
        Ok(options)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn sends_auth_and_options_headers() -> Result<()> {
        let script = Script::new(vec![(StatusCode::OK, json!({"name": "n"}).to_string())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint)?;

        let mut options = RequestOptions::default();
        options.set_user_agent("test-agent/1.0");
        let builder = client
            .builder(reqwest::Method::GET, "/v1/projects/p/customJobs/1".into())
            .header("x-goog-request-params", "name=projects%2Fp");
        let response = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        assert_eq!(response.body(), &json!({"name": "n"}));

        let received = script.received();
        assert_eq!(received.len(), 1);
        let headers = &received[0].headers;
        assert_eq!(
            headers.get("authorization").map(|v| v.as_bytes()),
            Some(TEST_AUTHORIZATION.as_bytes())
        );
        assert_eq!(
            headers.get("x-goog-request-params").map(|v| v.as_bytes()),
            Some(b"name=projects%2Fp".as_slice())
        );
        assert_eq!(
            headers.get("user-agent").map(|v| v.as_bytes()),
            Some(b"test-agent/1.0".as_slice())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retries_send_the_same_request() -> Result<()> {
        let script = Script::new(vec![
            unavailable(),
            unavailable(),
            (StatusCode::OK, "{}".into()),
        ]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint)?;

        let builder = client
            .builder(reqwest::Method::POST, "/v1/projects/p/customJobs".into())
            .header("x-goog-request-params", "parent=projects%2Fp");
        let body = json!({"displayName": "job"});
        let response = client
            .execute::<Value, Value>(builder, Some(body.clone()), retry_options()?)
            .await?;
        assert_eq!(response.body(), &json!({}));

        let received = script.received();
        assert_eq!(received.len(), 3);
        for r in &received {
            let got = serde_json::from_slice::<Value>(&r.body)?;
            assert_eq!(got, body);
            assert_eq!(
                r.headers.get("x-goog-request-params"),
                received[0].headers.get("x-goog-request-params")
            );
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retries_exhausted() -> Result<()> {
        let script = Script::new(vec![unavailable(), unavailable(), unavailable()]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint)?;

        let builder = client.builder(reqwest::Method::GET, "/v1/projects/p".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, retry_options()?)
            .await
            .expect_err("all attempts fail");
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code, gax::error::rpc::Code::Unavailable);
        assert_eq!(script.received().len(), 3);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn non_idempotent_requests_are_not_retried() -> Result<()> {
        let script = Script::new(vec![unavailable(), (StatusCode::OK, "{}".into())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint)?;

        let mut options = retry_options()?;
        options.set_idempotency(false);
        let builder = client.builder(reqwest::Method::POST, "/v1/projects/p:cancel".into());
        let err = client
            .execute::<Value, Value>(builder, Some(json!({})), options)
            .await
            .expect_err("the first attempt fails");
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(script.received().len(), 1);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let (endpoint, _server) = start(Script::default()).await?;
        let client = client(&endpoint)?;

        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, options)
            .await
            .expect_err("the server is too slow");
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);
        let client = client(&format!("http://{addr}"))?;

        let builder = client.builder(reqwest::Method::GET, "/v1/projects/p".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .expect_err("nothing listens on the port");
        assert!(err.is_transport() || err.is_io(), "{err:?}");
        Ok(())
    }
}
