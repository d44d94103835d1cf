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

//! Implements the common features of all gRPC-based clients.
//!
//! The payloads are the protobuf encoding of each message, produced by
//! `prost`. `tonic` handles the framing and the deadlines.

mod from_status;

use crate::options::{ClientConfig, ClientPolicies, Credentials};
use bytes::{Buf, BufMut, Bytes};
use gax::Result;
use gax::channel::Channel;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;
use gax::retry_policy::RetryPolicy;
use http::HeaderMap;
use std::sync::Arc;
use std::time::Duration;
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};

pub use from_status::to_gax_error;

/// A [Codec] passing the already encoded payloads through.
#[derive(Clone, Copy, Debug, Default)]
pub struct BytesCodec;

impl Codec for BytesCodec {
    type Encode = Bytes;
    type Decode = Bytes;
    type Encoder = BytesCodec;
    type Decoder = BytesCodec;

    fn encoder(&mut self) -> Self::Encoder {
        *self
    }

    fn decoder(&mut self) -> Self::Decoder {
        *self
    }
}

impl Encoder for BytesCodec {
    type Item = Bytes;
    type Error = tonic::Status;

    fn encode(&mut self, item: Bytes, dst: &mut EncodeBuf<'_>) -> std::result::Result<(), Self::Error> {
        dst.put_slice(&item);
        Ok(())
    }
}

impl Decoder for BytesCodec {
    type Item = Bytes;
    type Error = tonic::Status;

    fn decode(
        &mut self,
        src: &mut DecodeBuf<'_>,
    ) -> std::result::Result<Option<Self::Item>, Self::Error> {
        Ok(Some(src.copy_to_bytes(src.remaining())))
    }
}

/// A [Channel] over a `tonic` connection.
///
/// The connection is established lazily, on the first request.
#[derive(Clone, Debug)]
pub struct GrpcChannel {
    inner: tonic::client::Grpc<tonic::transport::Channel>,
}

impl GrpcChannel {
    /// Creates a channel to `endpoint`.
    ///
    /// `client_cert` is the PEM encoded certificate and key for mTLS. Must
    /// be called within a `tokio` runtime.
    pub fn new(
        endpoint: &str,
        client_cert: Option<(Vec<u8>, Vec<u8>)>,
    ) -> gax::client_builder::Result<Self> {
        use tonic::transport::{ClientTlsConfig, Endpoint, Identity};
        let origin = crate::host::grpc_origin(endpoint);
        let mut endpoint =
            Endpoint::from_shared(origin.clone()).map_err(BuilderError::transport)?;
        // Plaintext endpoints are only used with local emulators.
        if origin.starts_with("https://") {
            let mut tls = ClientTlsConfig::new().with_native_roots();
            if let Some((cert, key)) = client_cert {
                tls = tls.identity(Identity::from_pem(cert, key));
            }
            endpoint = endpoint.tls_config(tls).map_err(BuilderError::transport)?;
        }
        let conn = endpoint.connect_lazy();
        tracing::debug!("created gRPC channel for {origin}");
        Ok(Self {
            inner: tonic::client::Grpc::new(conn),
        })
    }
}

#[async_trait::async_trait]
impl Channel for GrpcChannel {
    async fn unary(
        &self,
        path: &'static str,
        metadata: HeaderMap,
        payload: Bytes,
        timeout: Option<Duration>,
    ) -> Result<Bytes> {
        let mut inner = self.inner.clone();
        let mut request = tonic::Request::new(payload);
        *request.metadata_mut() = tonic::metadata::MetadataMap::from_headers(metadata);
        if let Some(timeout) = timeout {
            request.set_timeout(timeout);
        }
        inner.ready().await.map_err(Error::connect)?;
        let response = inner
            .unary(
                request,
                http::uri::PathAndQuery::from_static(path),
                BytesCodec,
            )
            .await
            .map_err(to_gax_error)?;
        Ok(response.into_inner())
    }
}

/// Sends requests over a [Channel], with retries and authentication.
#[derive(Clone, Debug)]
pub struct Client {
    channel: Arc<dyn Channel>,
    cred: Credentials,
    host: String,
    policies: ClientPolicies,
}

impl Client {
    /// Creates a client.
    ///
    /// Uses the channel in `config` if there is one. Otherwise creates a
    /// [GrpcChannel] to `endpoint`.
    pub fn new(
        config: &ClientConfig,
        endpoint: &str,
        cred: Credentials,
        client_cert: Option<(Vec<u8>, Vec<u8>)>,
    ) -> gax::client_builder::Result<Self> {
        let channel: Arc<dyn Channel> = match &config.channel {
            Some(c) => c.clone(),
            None => Arc::new(GrpcChannel::new(endpoint, client_cert)?),
        };
        Ok(Self {
            channel,
            cred,
            host: crate::host::grpc_host(endpoint),
            policies: ClientPolicies::new(config),
        })
    }

    /// The `host:port` of all requests.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn credentials(&self) -> &Credentials {
        &self.cred
    }

    pub fn policies(&self) -> &ClientPolicies {
        &self.policies
    }

    pub fn channel(&self) -> &Arc<dyn Channel> {
        &self.channel
    }

    /// Sends `request` to `path`, retrying as configured in `options`.
    ///
    /// The request is encoded once. Every attempt sends the same payload
    /// and metadata, with fresh authentication headers.
    pub async fn execute<Req, Resp>(
        &self,
        path: &'static str,
        request: &Req,
        mut headers: HeaderMap,
        options: RequestOptions,
    ) -> Result<Response<Resp>>
    where
        Req: ::prost::Message,
        Resp: ::prost::Message + Default,
    {
        let payload = Bytes::from(request.encode_to_vec());
        for (k, v) in options.headers() {
            headers.append(k.clone(), v.clone());
        }
        let body = match self.policies.retry_policy(&options) {
            None => {
                self.request_attempt(path, &headers, payload, &options, None)
                    .await?
            }
            Some(policy) => {
                self.retry_loop(path, headers, payload, options, policy)
                    .await?
            }
        };
        let response = Resp::decode(body).map_err(Error::deser)?;
        Ok(Response::from(response))
    }

    async fn retry_loop(
        &self,
        path: &'static str,
        headers: HeaderMap,
        payload: Bytes,
        options: RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Bytes> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.policies.backoff_policy(&options);
        let this = self.clone();
        let inner = async move |remaining_time| {
            this.request_attempt(path, &headers, payload.clone(), &options, remaining_time)
                .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        let attempts: std::pin::Pin<Box<dyn std::future::Future<Output = Result<Bytes>> + Send + '_>> =
            Box::pin(gax::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff));
        attempts.await
    }

    async fn request_attempt(
        &self,
        path: &'static str,
        headers: &HeaderMap,
        payload: Bytes,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<Bytes> {
        let mut metadata = headers.clone();
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        metadata.extend(auth_headers);
        let timeout = gax::retry_loop_internal::effective_timeout(options, remaining_time);
        tracing::trace!("sending gRPC request to {path}");
        self.channel.unary(path, metadata, payload, timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::testing::{TEST_AUTHORIZATION, error_credentials, test_credentials};
    use gax::error::rpc::{Code, Status};
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use ::prost::Message as _;
    use std::sync::Mutex;

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct GetJobRequest {
        #[prost(string, tag = "1")]
        name: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct Job {
        #[prost(string, tag = "1")]
        name: String,
        #[prost(int32, tag = "5")]
        state: i32,
    }

    fn get_job(name: &str) -> GetJobRequest {
        GetJobRequest {
            name: name.to_string(),
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        Channel {}

        #[async_trait::async_trait]
        impl Channel for Channel {
            async fn unary(
                &self,
                path: &'static str,
                metadata: HeaderMap,
                payload: Bytes,
                timeout: Option<Duration>,
            ) -> Result<Bytes>;
            async fn close(&self);
        }
    }

    const PATH: &str = "/google.cloud.aiplatform.v1.JobService/GetCustomJob";

    fn client(channel: MockChannel) -> Client {
        let mut config = ClientConfig::default();
        config.channel = Some(Arc::new(channel));
        Client::new(&config, "aiplatform.googleapis.com", test_credentials(), None)
            .expect("injected channels never fail")
    }

    fn unavailable() -> Error {
        Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("try-again"),
        )
    }

    #[test]
    fn host() {
        let mut channel = MockChannel::new();
        channel.expect_unary().never();
        let client = client(channel);
        assert_eq!(client.host(), "aiplatform.googleapis.com:443");
    }

    #[tokio::test]
    async fn single_attempt() -> anyhow::Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .withf(|path, metadata, payload, timeout| {
                path == PATH
                    && metadata.get("x-goog-request-params").map(|v| v.as_bytes())
                        == Some(b"name=jobs/123".as_slice())
                    && metadata.get(http::header::AUTHORIZATION).map(|v| v.as_bytes())
                        == Some(TEST_AUTHORIZATION.as_bytes())
                    && payload.as_ref() == b"\x0a\x08jobs/123"
                    && timeout.is_none()
            })
            .returning(|_, _, _, _| {
                let job = Job {
                    name: "jobs/123".into(),
                    state: 1,
                };
                Ok(Bytes::from(job.encode_to_vec()))
            });
        let client = client(channel);

        let mut headers = HeaderMap::new();
        headers.insert("x-goog-request-params", "name=jobs/123".parse()?);
        let response: Response<Job> = client
            .execute(PATH, &get_job("jobs/123"), headers, RequestOptions::default())
            .await?;
        assert_eq!(
            response.body(),
            &Job {
                name: "jobs/123".into(),
                state: 1
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn empty_payload_is_default() -> anyhow::Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .returning(|_, _, _, _| Ok(Bytes::new()));
        let client = client(channel);
        let response: Response<Job> = client
            .execute(PATH, &(), HeaderMap::new(), RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), Job::default());
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> anyhow::Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .withf(|_, _, _, timeout| timeout == &Some(Duration::from_secs(7)))
            .returning(|_, _, _, _| Ok(Bytes::new()));
        let client = client(channel);
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(7));
        let _: Response<()> = client
            .execute(PATH, &(), HeaderMap::new(), options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn retries_reuse_payload_and_metadata() -> anyhow::Result<()> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let mut count = 0;
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(3)
            .returning(move |_, metadata, payload, _| {
                captured
                    .lock()
                    .expect("test lock is never poisoned")
                    .push((metadata, payload));
                count += 1;
                if count < 3 {
                    return Err(unavailable());
                }
                Ok(Bytes::new())
            });
        let client = client(channel);

        let mut headers = HeaderMap::new();
        headers.insert("x-goog-request-params", "parent=projects/p".parse()?);
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_retry_policy(AlwaysRetry.with_attempt_limit(5));
        options.set_backoff_policy(
            gax::exponential_backoff::ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(1))
                .build()?,
        );
        let _: Response<()> = client
            .execute(PATH, &get_job("jobs/123"), headers, options)
            .await?;

        let seen = seen.lock().expect("test lock is never poisoned");
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].1, Bytes::from(get_job("jobs/123").encode_to_vec()));
        for (metadata, payload) in seen.iter() {
            assert_eq!(metadata, &seen[0].0);
            assert_eq!(payload, &seen[0].1);
        }
        Ok(())
    }

    #[tokio::test]
    async fn authentication_error() {
        let mut channel = MockChannel::new();
        channel.expect_unary().never();
        let mut config = ClientConfig::default();
        config.channel = Some(Arc::new(channel));
        let client = Client::new(
            &config,
            "aiplatform.googleapis.com",
            error_credentials(false),
            None,
        )
        .expect("injected channels never fail");
        let got = client
            .execute::<_, ()>(PATH, &(), HeaderMap::new(), RequestOptions::default())
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_authentication()), "{got:?}");
    }

    #[tokio::test]
    async fn bad_payload() {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .returning(|_, _, _, _| Ok(Bytes::from_static(b"\xff\xff\xff")));
        let client = client(channel);
        let got = client
            .execute::<_, Job>(PATH, &get_job("jobs/123"), HeaderMap::new(), RequestOptions::default())
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn codec_passes_bytes() {
        let mut codec = BytesCodec;
        let _encoder: BytesCodec = codec.encoder();
        let _decoder: BytesCodec = codec.decoder();
    }
}
