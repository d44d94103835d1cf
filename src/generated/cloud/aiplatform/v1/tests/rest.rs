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

//! Sends Job Service RPCs over REST to a local HTTP server.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::{TEST_AUTHORIZATION, test_credentials};
    use axum::body::Bytes;
    use axum::extract::{OriginalUri, State};
    use axum::http::{HeaderMap, Method, StatusCode};
    use gax::interceptor::Interceptor;
    use http::HeaderValue;
    use serde_json::{Value, json};
    use std::any::Any;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use vertex_jobs_v1::client::JobService;
    use vertex_jobs_v1::model;
    use vertex_jobs_v1::transport::TransportKind;

    type Result<T> = anyhow::Result<T>;

    const JOB: &str = "projects/p/locations/l/customJobs/j";

    #[derive(Clone, Debug)]
    struct Recorded {
        method: Method,
        uri: String,
        headers: HeaderMap,
        body: Bytes,
    }

    impl Recorded {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers.get(name).and_then(|v| v.to_str().ok())
        }

        fn json(&self) -> Value {
            serde_json::from_slice(&self.body).unwrap_or_default()
        }
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
        method: Method,
        OriginalUri(uri): OriginalUri,
        headers: HeaderMap,
        body: Bytes,
    ) -> (StatusCode, String) {
        script.received.lock().expect("never poisoned").push(Recorded {
            method,
            uri: uri.to_string(),
            headers,
            body,
        });
        let next = script.replies.lock().expect("never poisoned").pop_front();
        next.unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, "script exhausted".into()))
    }

    async fn start(script: Script) -> Result<(String, tokio::task::JoinHandle<()>)> {
        let app = axum::Router::new()
            .route("/v1/{*path}", axum::routing::any(handler))
            .with_state(script);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async {
            let _ = axum::serve(listener, app).await;
        });
        Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
    }

    async fn client(endpoint: &str) -> Result<JobService> {
        let client = JobService::builder()
            .with_endpoint(endpoint)
            .with_credentials(test_credentials())
            .with_transport("rest")
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_custom_job() -> Result<()> {
        let reply = json!({"name": JOB, "displayName": "d", "state": "JOB_STATE_RUNNING"});
        let script = Script::new(vec![(StatusCode::OK, reply.to_string())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint).await?;
        assert_eq!(
            client.transport().map(|t| t.kind()),
            Some(TransportKind::Rest)
        );
        assert_eq!(client.transport().map(|t| t.host()), Some(endpoint.as_str()));

        let job = client.get_custom_job().set_name(JOB).send().await?;
        assert_eq!(job.display_name, "d");
        assert_eq!(job.state, model::JobState::Running);

        let received = script.received();
        assert_eq!(received.len(), 1);
        let request = &received[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.uri, format!("/v1/{JOB}"));
        assert_eq!(
            request.header("x-goog-request-params"),
            Some(format!("name={JOB}").as_str())
        );
        assert_eq!(request.header("authorization"), Some(TEST_AUTHORIZATION));
        let telemetry = request.header("x-goog-api-client").unwrap_or_default();
        assert!(telemetry.contains(" rest/"), "{telemetry}");
        assert!(telemetry.contains(" gccl/"), "{telemetry}");
        assert!(request.body.is_empty(), "{:?}", request.body);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_sends_body() -> Result<()> {
        let script = Script::new(vec![(StatusCode::OK, json!({"name": JOB}).to_string())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint).await?;

        let job = client
            .create_custom_job()
            .set_parent("projects/p/locations/l")
            .set_custom_job(model::CustomJob::new().set_display_name("d"))
            .send()
            .await?;
        assert_eq!(job.name, JOB);

        let received = script.received();
        assert_eq!(received.len(), 1);
        let request = &received[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.uri, "/v1/projects/p/locations/l/customJobs");
        assert_eq!(request.json(), json!({"displayName": "d"}));
        assert_eq!(
            request.header("x-goog-request-params"),
            Some("parent=projects/p/locations/l")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_sends_query() -> Result<()> {
        let script = Script::new(vec![
            (
                StatusCode::OK,
                json!({"customJobs": [{"name": "a"}], "nextPageToken": "abc"}).to_string(),
            ),
            (StatusCode::OK, json!({"customJobs": [{"name": "b"}]}).to_string()),
        ]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint).await?;

        let mut items = client
            .list_custom_jobs()
            .with_request(
                model::ListCustomJobsRequest::new()
                    .set_parent("projects/p/locations/l")
                    .set_page_size(10),
            )
            .by_item();
        let mut names = Vec::new();
        while let Some(job) = items.next().await {
            names.push(job?.name);
        }
        assert_eq!(names, vec!["a", "b"]);

        let received = script.received();
        assert_eq!(received.len(), 2);
        assert!(
            received[0].uri.starts_with("/v1/projects/p/locations/l/customJobs?"),
            "{}",
            received[0].uri
        );
        assert!(received[0].uri.contains("pageSize=10"), "{}", received[0].uri);
        assert!(!received[0].uri.contains("pageToken"), "{}", received[0].uri);
        assert!(received[1].uri.contains("pageToken=abc"), "{}", received[1].uri);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_returns_operation() -> Result<()> {
        let reply = json!({"name": "projects/p/locations/l/operations/o"});
        let script = Script::new(vec![(StatusCode::OK, reply.to_string())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint).await?;

        let operation = client.delete_custom_job().set_name(JOB).send().await?;
        assert_eq!(operation.name, "projects/p/locations/l/operations/o");
        assert!(!operation.done);
        let received = script.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].method, Method::DELETE);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn binding_error_before_io() -> Result<()> {
        let script = Script::new(vec![]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint).await?;

        let err = client
            .get_custom_job()
            .set_name("not-a-job")
            .send()
            .await
            .expect_err("the name does not match the path template");
        assert!(err.is_binding(), "{err:?}");
        assert!(script.received().is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let status = json!({"error": {
            "code": 404,
            "message": "job not found",
            "status": "NOT_FOUND",
        }});
        let script = Script::new(vec![(StatusCode::NOT_FOUND, status.to_string())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint).await?;

        let err = client
            .get_custom_job()
            .set_name(JOB)
            .send()
            .await
            .expect_err("the server returns an error");
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("the error has a status");
        assert_eq!(status.code, gax::error::rpc::Code::NotFound);
        assert_eq!(status.message, "job not found");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn api_key_and_quota_project() -> Result<()> {
        let script = Script::new(vec![(StatusCode::OK, "{}".into())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = JobService::builder()
            .with_endpoint(&endpoint)
            .with_api_key("test-api-key")
            .with_quota_project("test-quota-project")
            .with_transport("rest")
            .build()
            .await?;
        client.get_custom_job().set_name(JOB).send().await?;

        let received = script.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].header("x-goog-api-key"), Some("test-api-key"));
        assert_eq!(
            received[0].header("x-goog-user-project"),
            Some("test-quota-project")
        );
        assert_eq!(received[0].header("authorization"), None);
        Ok(())
    }

    #[derive(Debug, Default)]
    struct Tagger {
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Interceptor for Tagger {
        fn pre_call(
            &self,
            method: &'static str,
            request: &mut dyn Any,
            headers: &mut HeaderMap,
        ) -> gax::Result<()> {
            self.calls.lock().expect("never poisoned").push(method);
            if let Some(request) = request.downcast_ref::<model::GetCustomJobRequest>() {
                let value = HeaderValue::from_str(&request.name).map_err(gax::error::Error::ser)?;
                headers.insert("x-test-name", value);
            }
            Ok(())
        }

        fn post_call(&self, method: &'static str, response: &mut dyn Any) -> gax::Result<()> {
            self.calls.lock().expect("never poisoned").push(method);
            if let Some(job) = response.downcast_mut::<model::CustomJob>() {
                job.display_name = "intercepted".to_string();
            }
            Ok(())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn interceptor() -> Result<()> {
        let script = Script::new(vec![(StatusCode::OK, json!({"displayName": "d"}).to_string())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let tagger = Tagger::default();
        let calls = tagger.calls.clone();
        let client = JobService::builder()
            .with_endpoint(&endpoint)
            .with_credentials(test_credentials())
            .with_transport("rest")
            .with_interceptor(tagger)
            .build()
            .await?;

        let job = client.get_custom_job().set_name(JOB).send().await?;
        assert_eq!(job.display_name, "intercepted");
        assert_eq!(
            *calls.lock().expect("never poisoned"),
            vec!["GetCustomJob", "GetCustomJob"]
        );
        let received = script.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].header("x-test-name"), Some(JOB));
        Ok(())
    }

    #[derive(Debug)]
    struct Reject;

    impl Interceptor for Reject {
        fn pre_call(
            &self,
            _method: &'static str,
            _request: &mut dyn Any,
            _headers: &mut HeaderMap,
        ) -> gax::Result<()> {
            Err(gax::error::Error::argument("rejected by the interceptor"))
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn interceptor_error_before_io() -> Result<()> {
        let script = Script::new(vec![]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = JobService::builder()
            .with_endpoint(&endpoint)
            .with_credentials(test_credentials())
            .with_transport("rest")
            .with_interceptor(Reject)
            .build()
            .await?;
        let err = client
            .get_custom_job()
            .set_name(JOB)
            .send()
            .await
            .expect_err("the interceptor rejects all calls");
        assert!(err.is_argument(), "{err:?}");
        assert!(script.received().is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn operations_client() -> Result<()> {
        let reply = json!({"name": "projects/p/locations/l/operations/o", "done": true});
        let script = Script::new(vec![(StatusCode::OK, reply.to_string())]);
        let (endpoint, _server) = start(script.clone()).await?;
        let client = client(&endpoint).await?;
        let operations = client
            .transport()
            .expect("built clients have a transport")
            .operations_client();
        let operation = operations
            .wait_operation(
                longrunning::model::WaitOperationRequest::new()
                    .set_name("projects/p/locations/l/operations/o"),
                gax::options::RequestOptions::default(),
            )
            .await?
            .into_body();
        assert!(operation.done);
        let received = script.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].method, Method::POST);
        assert_eq!(received[0].uri, "/v1/projects/p/locations/l/operations/o:wait");
        Ok(())
    }
}
