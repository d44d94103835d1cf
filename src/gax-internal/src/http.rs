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

//! The REST executor.

use crate::options::{ClientConfig, ClientPolicies, Credentials};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use std::sync::Arc;

/// Installs the default crypto provider for `rustls`.
///
/// Another provider may be installed already, in which case this does
/// nothing.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    policies: ClientPolicies,
}

impl ReqwestClient {
    /// Creates a client sending requests to `endpoint`.
    ///
    /// `client_cert` is the PEM encoded certificate and key for mTLS.
    pub fn new(
        config: &ClientConfig,
        endpoint: &str,
        cred: Credentials,
        client_cert: Option<(Vec<u8>, Vec<u8>)>,
    ) -> gax::client_builder::Result<Self> {
        install_crypto_provider();
        let mut builder = reqwest::Client::builder();
        if let Some((cert, key)) = client_cert {
            let pem = [cert, key].concat();
            let identity = reqwest::Identity::from_pem(&pem).map_err(BuilderError::transport)?;
            builder = builder.identity(identity);
        }
        let inner = builder.build().map_err(BuilderError::transport)?;
        let endpoint = crate::host::rest_origin(endpoint);
        tracing::debug!("created REST client for {endpoint}");
        Ok(Self {
            inner,
            cred,
            endpoint,
            policies: ClientPolicies::new(config),
        })
    }

    /// The origin of all requests, e.g. `https://aiplatform.googleapis.com`.
    pub fn host(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.cred
    }

    pub fn policies(&self) -> &ClientPolicies {
        &self.policies
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends the request, retrying as configured in `options`.
    ///
    /// Every attempt sends the same body and headers.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        builder = builder.headers(options.headers().clone());
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload);
        }
        match self.policies.retry_policy(&options) {
            None => self.request_attempt::<O>(builder, &options, None).await,
            Some(policy) => self.retry_loop::<O>(builder, options, policy).await,
        }
    }

    async fn retry_loop<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Response<O>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.policies.backoff_policy(&options);
        let this = self.clone();
        let inner = async move |remaining_time| {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::io("cannot clone the request for a retry attempt"))?;
            this.request_attempt(builder, &options, remaining_time).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff).await
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining_time: Option<std::time::Duration>,
    ) -> Result<Response<O>> {
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);
        tracing::trace!("sending REST request");
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e if e.is_connect() => Error::connect(e),
            e => Error::io(e),
        }
    }
}

/// The body of requests without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 has no body, which is not valid JSON.
    let no_content = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let response = match body {
        content if content.is_empty() && no_content => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        response,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;

    fn response(code: u16, body: &str) -> anyhow::Result<reqwest::Response> {
        let response = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(body.to_string())?;
        Ok(response.into())
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers
    }

    #[tokio::test]
    async fn error_without_status() -> anyhow::Result<()> {
        let got = to_http_error::<()>(response(400, r#"{"error": "bad request"}"#)?).await;
        let err = got.expect_err("non-success responses are errors");
        assert!(err.status().is_none(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(err.http_headers(), Some(&json_headers()));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from(r#"{"error": "bad request"}"#))
        );
        Ok(())
    }

    #[tokio::test]
    async fn error_with_status() -> anyhow::Result<()> {
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "The custom job does not exist",
            "status": "NOT_FOUND",
        }});
        let got = to_http_error::<()>(response(404, &body.to_string())?).await;
        let err = got.expect_err("non-success responses are errors");
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_message("The custom job does not exist");
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.http_headers(), Some(&json_headers()));
        Ok(())
    }

    #[tokio::test]
    async fn bad_request() -> anyhow::Result<()> {
        let body = serde_json::json!({"error": {
            "code": 400,
            "message": "invalid parent",
            "status": "INVALID_ARGUMENT",
        }});
        let got = to_http_error::<()>(response(400, &body.to_string())?).await;
        let err = got.expect_err("non-success responses are errors");
        assert!(err.is_bad_request(), "{err:?}");
        assert_eq!(err.status().map(|s| s.code), Some(Code::InvalidArgument));
        Ok(())
    }

    #[test_case(200, "{}")]
    #[test_case(204, "{}")]
    #[test_case(204, "")]
    #[tokio::test]
    async fn empty_content(code: u16, content: &str) -> anyhow::Result<()> {
        let got = to_http_response::<wkt::Empty>(response(code, content)?).await?;
        assert_eq!(got.into_body(), wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn empty_content_needs_204() -> anyhow::Result<()> {
        let got = to_http_response::<wkt::Empty>(response(200, "")?).await;
        assert!(got.as_ref().is_err_and(|e| e.is_deserialization()), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn json_content() -> anyhow::Result<()> {
        let got =
            to_http_response::<serde_json::Value>(response(200, r#"{"name": "abc"}"#)?).await?;
        assert_eq!(got.headers(), &json_headers());
        assert_eq!(got.into_body(), serde_json::json!({"name": "abc"}));
        Ok(())
    }
}
