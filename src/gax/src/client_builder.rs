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

//! Types for client construction.
//!
//! Each client defines a `builder()` function returning a [ClientBuilder]
//! with the right generic parameters. The builder collects the client
//! configuration and `build()` validates it, reads the environment, resolves
//! the endpoint, loads the credentials, and creates the transport.
//!
//! Configuration errors are reported by `build()`, before any RPC is made.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::channel::Channel;
use crate::interceptor::Interceptor;
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Indicates a problem while constructing a client.
///
/// # Example
/// ```
/// # use vertex_gax::client_builder::Error;
/// fn report(e: &Error) {
///     if e.is_config() {
///         println!("fix the client configuration: {e}");
///     } else if e.is_default_credentials() {
///         println!("see https://cloud.google.com/docs/authentication/client-libraries");
///     }
/// }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The configuration is invalid.
    ///
    /// For example, an environment variable has an unsupported value, the
    /// universe domain is empty, or mutually exclusive options were set.
    pub fn is_config(&self) -> bool {
        matches!(&self.0, ErrorKind::Config(_))
    }

    /// A client certificate is in use, but the universe domain is not
    /// `googleapis.com`.
    pub fn is_mtls_universe(&self) -> bool {
        matches!(&self.0, ErrorKind::MtlsUniverse)
    }

    /// A transport instance was provided together with options that only
    /// apply when the client creates its own transport.
    pub fn is_transport_conflict(&self) -> bool {
        matches!(&self.0, ErrorKind::TransportConflict(_))
    }

    /// The client could not load the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// The client could not initialize the transport.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    #[doc(hidden)]
    pub fn config<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Config(source.into()))
    }

    #[doc(hidden)]
    pub fn mtls_universe() -> Self {
        Self(ErrorKind::MtlsUniverse)
    }

    #[doc(hidden)]
    pub fn transport_conflict<T: Into<String>>(option: T) -> Self {
        Self(ErrorKind::TransportConflict(option.into()))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid client configuration: {0}")]
    Config(#[source] BoxError),
    #[error("mTLS is not supported in any universe other than googleapis.com.")]
    MtlsUniverse,
    #[error(
        "transport already configured, when providing a transport instance, provide its {0} directly"
    )]
    TransportConflict(String),
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

/// Returns the client certificate and private key, both PEM encoded.
pub type ClientCertSource =
    Arc<dyn Fn() -> std::result::Result<(Vec<u8>, Vec<u8>), BoxError> + Send + Sync>;

/// Selects the transport of a client.
///
/// Either a transport name, `"grpc"`, `"grpc_asyncio"` or `"rest"`, or a
/// pre-built transport instance. Each client converts its own transport
/// type into this type.
#[derive(Clone)]
pub enum TransportArg {
    /// A transport name.
    Name(String),
    /// A pre-built transport.
    Instance(Arc<dyn Any + Send + Sync>),
}

impl std::fmt::Debug for TransportArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

impl From<&str> for TransportArg {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for TransportArg {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// A generic builder for clients.
///
/// Applications obtain a builder with the right generic parameters from the
/// `builder()` function of each client, change the configuration as needed,
/// and call `build()`.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Overrides the endpoint.
    ///
    /// An explicit endpoint always wins over the endpoint derived from the
    /// universe domain and the mTLS settings.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client emits one [tracing] span per RPC.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configures the authentication credentials.
    ///
    /// Mutually exclusive with [with_credentials_file][Self::with_credentials_file]
    /// and [with_api_key][Self::with_api_key].
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Loads the credentials from a service account key file.
    pub fn with_credentials_file<V: Into<PathBuf>>(mut self, v: V) -> Self {
        self.config.credentials_file = Some(v.into());
        self
    }

    /// Uses the service account key in `v`.
    ///
    /// The credentials are created when the client is built, so they honor
    /// the scopes, the quota project and the JWT settings of the builder.
    pub fn with_credentials_info(mut self, v: serde_json::Value) -> Self {
        self.config.credentials_info = Some(v);
        self
    }

    /// Overrides the default scopes.
    pub fn with_scopes<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.config.scopes = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the project billed for quota.
    pub fn with_quota_project<V: Into<String>>(mut self, v: V) -> Self {
        self.config.quota_project = Some(v.into());
        self
    }

    /// Authenticates with an API key instead of credentials.
    pub fn with_api_key<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_key = Some(v.into());
        self
    }

    /// Sets the audience of self-signed JWTs.
    pub fn with_api_audience<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_audience = Some(v.into());
        self
    }

    /// Sets the universe domain.
    ///
    /// Takes precedence over the `GOOGLE_CLOUD_UNIVERSE_DOMAIN` environment
    /// variable. The default is `googleapis.com`.
    pub fn with_universe_domain<V: Into<String>>(mut self, v: V) -> Self {
        self.config.universe_domain = Some(v.into());
        self
    }

    /// Sets the source of the client certificate for mTLS.
    ///
    /// The certificate is only used if `GOOGLE_API_USE_CLIENT_CERTIFICATE`
    /// is `true`.
    pub fn with_client_cert_source<S>(mut self, v: S) -> Self
    where
        S: Fn() -> std::result::Result<(Vec<u8>, Vec<u8>), BoxError> + Send + Sync + 'static,
    {
        self.config.client_cert_source = Some(Arc::new(v));
        self
    }

    /// Controls whether service account credentials always use self-signed
    /// JWTs. The default is `true`.
    pub fn with_always_use_jwt_access(mut self, v: bool) -> Self {
        self.config.always_use_jwt_access = v;
        self
    }

    /// Selects the transport by name, or provides a transport instance.
    pub fn with_transport<V: Into<TransportArg>>(mut self, v: V) -> Self {
        self.config.transport = Some(v.into());
        self
    }

    /// Provides a pre-built channel for the binary RPC transport.
    pub fn with_channel<V: Channel + 'static>(mut self, v: V) -> Self {
        self.config.channel = Some(Arc::new(v));
        self
    }

    /// Installs an interceptor for the REST transport.
    pub fn with_interceptor<V: Interceptor + 'static>(mut self, v: V) -> Self {
        self.config.interceptor = Some(Arc::new(v));
        self
    }

    /// Configures the retry policy.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configures the retry backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Configures the polling error policy for long-running operations.
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().into());
        self
    }

    /// Configures the polling backoff policy for long-running operations.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The configuration of a client.
    ///
    /// Collected by [ClientBuilder][super::ClientBuilder], immutable after the
    /// client is built.
    #[derive(Clone)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub credentials_file: Option<PathBuf>,
        pub credentials_info: Option<serde_json::Value>,
        pub scopes: Option<Vec<String>>,
        pub quota_project: Option<String>,
        pub api_key: Option<String>,
        pub api_audience: Option<String>,
        pub universe_domain: Option<String>,
        pub client_cert_source: Option<ClientCertSource>,
        pub always_use_jwt_access: bool,
        pub transport: Option<TransportArg>,
        pub channel: Option<Arc<dyn Channel>>,
        pub interceptor: Option<Arc<dyn Interceptor>>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    }

    impl<Cr> ClientConfig<Cr> {
        /// Verifies that at most one of the credential sources is set.
        pub fn check_credential_sources(&self) -> Result<()> {
            let sources = [
                self.cred.is_some(),
                self.credentials_file.is_some(),
                self.credentials_info.is_some(),
            ];
            if sources.into_iter().filter(|s| *s).count() > 1 {
                return Err(Error::config(
                    "`credentials`, `credentials_file` and `credentials_info` are mutually exclusive",
                ));
            }
            if self.api_key.is_some() && sources.contains(&true) {
                return Err(Error::config(
                    "`api_key` is mutually exclusive with the other credential sources",
                ));
            }
            Ok(())
        }
    }

    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                credentials_file: None,
                credentials_info: None,
                scopes: None,
                quota_project: None,
                api_key: None,
                api_audience: None,
                universe_domain: None,
                client_cert_source: None,
                always_use_jwt_access: true,
                transport: None,
                channel: None,
                interceptor: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                polling_error_policy: None,
                polling_backoff_policy: None,
            }
        }
    }

    impl<Cr: std::fmt::Debug> std::fmt::Debug for ClientConfig<Cr> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ClientConfig")
                .field("endpoint", &self.endpoint)
                .field("cred", &self.cred)
                .field("credentials_file", &self.credentials_file)
                .field(
                    "credentials_info",
                    &self.credentials_info.as_ref().map(|_| "[censored]"),
                )
                .field("scopes", &self.scopes)
                .field("quota_project", &self.quota_project)
                .field("api_key", &self.api_key.as_ref().map(|_| "[censored]"))
                .field("api_audience", &self.api_audience)
                .field("universe_domain", &self.universe_domain)
                .field("client_cert_source", &self.client_cert_source.is_some())
                .field("always_use_jwt_access", &self.always_use_jwt_access)
                .field("transport", &self.transport)
                .field("channel", &self.channel)
                .field("interceptor", &self.interceptor)
                .field("tracing", &self.tracing)
                .field("retry_policy", &self.retry_policy)
                .field("backoff_policy", &self.backoff_policy)
                .field("polling_error_policy", &self.polling_error_policy)
                .field("polling_backoff_policy", &self.polling_backoff_policy)
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::{ClientConfig, ClientFactory, new_builder};
    use super::*;
    use std::error::Error as _;

    static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestCredentials(String);

    impl From<&str> for TestCredentials {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    struct TestFactory;
    impl ClientFactory for TestFactory {
        type Client = ClientConfig<TestCredentials>;
        type Credentials = TestCredentials;
        async fn build(self, config: ClientConfig<TestCredentials>) -> Result<Self::Client> {
            config.check_credential_sources()?;
            Ok(config)
        }
    }

    fn builder() -> ClientBuilder<TestFactory, TestCredentials> {
        new_builder(TestFactory)
    }

    #[derive(Debug)]
    struct TestChannel;
    #[async_trait::async_trait]
    impl Channel for TestChannel {
        async fn unary(
            &self,
            _path: &'static str,
            _metadata: http::HeaderMap,
            payload: bytes::Bytes,
            _timeout: Option<std::time::Duration>,
        ) -> crate::Result<bytes::Bytes> {
            Ok(payload)
        }
    }

    #[derive(Debug)]
    struct TestInterceptor;
    impl Interceptor for TestInterceptor {}

    #[tokio::test]
    async fn build_default() -> anyhow::Result<()> {
        let config = builder().build().await?;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(config.always_use_jwt_access);
        assert!(!config.tracing);
        assert!(config.transport.is_none(), "{config:?}");
        assert!(config.channel.is_none(), "{config:?}");
        assert!(config.retry_policy.is_none(), "{config:?}");
        Ok(())
    }

    #[tokio::test]
    async fn setters() -> anyhow::Result<()> {
        use crate::exponential_backoff::ExponentialBackoff;
        let config = builder()
            .with_endpoint("api.example.com")
            .with_tracing()
            .with_credentials("test-only")
            .with_scopes(["scope1", "scope2"])
            .with_quota_project("quota-project")
            .with_api_audience("audience")
            .with_universe_domain("bar.com")
            .with_client_cert_source(|| Ok((b"cert".to_vec(), b"key".to_vec())))
            .with_always_use_jwt_access(false)
            .with_transport("rest")
            .with_channel(TestChannel)
            .with_interceptor(TestInterceptor)
            .with_retry_policy(crate::retry_policy::AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(ExponentialBackoff::default())
            .with_polling_error_policy(crate::polling_error_policy::AlwaysContinue)
            .with_polling_backoff_policy(ExponentialBackoff::default())
            .build()
            .await?;
        assert_eq!(config.endpoint.as_deref(), Some("api.example.com"));
        assert!(config.tracing);
        assert_eq!(config.cred, Some(TestCredentials("test-only".into())));
        assert_eq!(
            config.scopes,
            Some(vec!["scope1".to_string(), "scope2".to_string()])
        );
        assert_eq!(config.quota_project.as_deref(), Some("quota-project"));
        assert_eq!(config.api_audience.as_deref(), Some("audience"));
        assert_eq!(config.universe_domain.as_deref(), Some("bar.com"));
        let source = config.client_cert_source.as_ref().expect("cert source");
        let (cert, _) = source().map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(cert, b"cert".to_vec());
        assert!(!config.always_use_jwt_access);
        assert!(matches!(&config.transport, Some(TransportArg::Name(n)) if n == "rest"));
        assert!(config.channel.is_some(), "{config:?}");
        assert!(config.interceptor.is_some(), "{config:?}");
        assert!(config.retry_policy.is_some(), "{config:?}");
        assert!(config.backoff_policy.is_some(), "{config:?}");
        assert!(config.polling_error_policy.is_some(), "{config:?}");
        assert!(config.polling_backoff_policy.is_some(), "{config:?}");
        Ok(())
    }

    use crate::retry_policy::RetryPolicyExt;

    #[tokio::test]
    async fn credential_sources() {
        let got = builder()
            .with_credentials("test-only")
            .with_credentials_file("/dev/null")
            .build()
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_config()), "{got:?}");

        let got = builder()
            .with_api_key("key")
            .with_credentials("test-only")
            .build()
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_config()), "{got:?}");

        let got = builder()
            .with_api_key("key")
            .with_credentials_file("/dev/null")
            .build()
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_config()), "{got:?}");

        let got = builder()
            .with_credentials_info(serde_json::json!({"type": "service_account"}))
            .with_credentials_file("/dev/null")
            .build()
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_config()), "{got:?}");

        let got = builder()
            .with_credentials_info(serde_json::json!({"type": "service_account"}))
            .with_api_key("key")
            .build()
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_config()), "{got:?}");
    }

    #[tokio::test]
    async fn debug_censors_credentials_info() -> anyhow::Result<()> {
        let config = builder()
            .with_credentials_info(serde_json::json!({"private_key": "super-secret"}))
            .build()
            .await?;
        let fmt = format!("{config:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn debug_censors_api_key() -> anyhow::Result<()> {
        let config = builder().with_api_key("super-secret").build().await?;
        let fmt = format!("{config:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        Ok(())
    }

    #[test]
    fn transport_arg() {
        let arg = TransportArg::from("grpc");
        assert!(matches!(&arg, TransportArg::Name(n) if n == "grpc"), "{arg:?}");
        let arg = TransportArg::Instance(Arc::new(42_i32));
        assert_eq!(format!("{arg:?}"), "Instance(..)");
    }

    #[test]
    fn errors() {
        let error = Error::config("bad value");
        assert!(error.is_config(), "{error:?}");
        assert!(error.to_string().contains("bad value"), "{error}");

        let error = Error::mtls_universe();
        assert!(error.is_mtls_universe(), "{error:?}");
        assert_eq!(
            error.to_string(),
            "mTLS is not supported in any universe other than googleapis.com."
        );

        let error = Error::transport_conflict("credentials");
        assert!(error.is_transport_conflict(), "{error:?}");
        assert!(error.to_string().contains("transport already configured"), "{error}");

        let error = Error::cred("no credentials");
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");

        let error = Error::transport("cannot connect");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
    }
}
