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

//! Resolves the endpoint of a client.
//!
//! The endpoint depends on the explicit endpoint override, the mTLS
//! configuration, and the universe domain. The first matching rule wins:
//!
//! 1. An explicit endpoint is always used as-is.
//! 2. With `GOOGLE_API_USE_MTLS_ENDPOINT=always`, use the mTLS endpoint.
//! 3. With `GOOGLE_API_USE_MTLS_ENDPOINT=auto` and an active client
//!    certificate, use the mTLS endpoint.
//! 4. Otherwise, use the endpoint template for the universe domain.
//!
//! The mTLS endpoint only exists in the default universe. Selecting it in
//! any other universe is an error.

use crate::environment::{EnvironmentState, MtlsEndpointMode};
use gax::client_builder::internal::ClientConfig;
use gax::client_builder::{ClientCertSource, Error as BuilderError, Result};

/// The universe domain used when none is configured.
pub const DEFAULT_UNIVERSE_DOMAIN: &str = "googleapis.com";

const UNIVERSE_PLACEHOLDER: &str = "{UNIVERSE_DOMAIN}";

/// The endpoints of a service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceEndpoints {
    /// The endpoint in the default universe, e.g. `aiplatform.googleapis.com`.
    pub default_endpoint: &'static str,
    /// The mTLS endpoint, e.g. `aiplatform.mtls.googleapis.com`.
    pub mtls_endpoint: &'static str,
    /// The endpoint for any universe, e.g. `aiplatform.{UNIVERSE_DOMAIN}`.
    pub endpoint_template: &'static str,
}

impl ServiceEndpoints {
    /// The endpoint of the service in `universe_domain`.
    pub fn for_universe(&self, universe_domain: &str) -> String {
        self.endpoint_template
            .replace(UNIVERSE_PLACEHOLDER, universe_domain)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum EndpointError {
    #[error("Universe Domain cannot be an empty string.")]
    EmptyUniverseDomain,
}

/// Returns the universe domain of a client.
///
/// The client option wins over the environment variable, which wins over the
/// default universe domain. Blank values are rejected.
pub fn universe_domain(option: Option<&str>, env: Option<&str>) -> Result<String> {
    let universe = option.or(env).unwrap_or(DEFAULT_UNIVERSE_DOMAIN);
    if universe.trim().is_empty() {
        return Err(BuilderError::config(EndpointError::EmptyUniverseDomain));
    }
    Ok(universe.to_string())
}

/// Applies the endpoint rules.
///
/// `client_cert` is true when a client certificate source is configured
/// *and* `GOOGLE_API_USE_CLIENT_CERTIFICATE` is `true`.
pub fn api_endpoint(
    service: &ServiceEndpoints,
    endpoint_override: Option<&str>,
    client_cert: bool,
    universe_domain: &str,
    mode: MtlsEndpointMode,
) -> Result<String> {
    if let Some(endpoint) = endpoint_override {
        return Ok(endpoint.to_string());
    }
    let use_mtls = match mode {
        MtlsEndpointMode::Always => true,
        MtlsEndpointMode::Auto => client_cert,
        MtlsEndpointMode::Never => false,
    };
    if !use_mtls {
        return Ok(service.for_universe(universe_domain));
    }
    if universe_domain != DEFAULT_UNIVERSE_DOMAIN {
        return Err(BuilderError::mtls_universe());
    }
    Ok(service.mtls_endpoint.to_string())
}

/// The endpoint and universe domain of a client.
#[derive(Clone)]
pub struct ResolvedEndpoint {
    /// The host, without any scheme or port, unless the application
    /// provided an endpoint with them.
    pub host: String,
    pub universe_domain: String,
    /// The source of the mTLS client certificate, when mTLS is active.
    pub client_cert_source: Option<ClientCertSource>,
}

impl ResolvedEndpoint {
    pub fn uses_mtls(&self) -> bool {
        self.client_cert_source.is_some()
    }
}

impl std::fmt::Debug for ResolvedEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedEndpoint")
            .field("host", &self.host)
            .field("universe_domain", &self.universe_domain)
            .field("uses_mtls", &self.uses_mtls())
            .finish()
    }
}

/// Resolves the endpoint for a client configuration.
pub fn resolve<Cr>(
    config: &ClientConfig<Cr>,
    env: &EnvironmentState,
    service: &ServiceEndpoints,
) -> Result<ResolvedEndpoint> {
    let client_cert_source = config
        .client_cert_source
        .clone()
        .filter(|_| env.use_client_certificate.enabled());
    let universe_domain = universe_domain(
        config.universe_domain.as_deref(),
        env.universe_domain.as_deref(),
    )?;
    let host = api_endpoint(
        service,
        config.endpoint.as_deref(),
        client_cert_source.is_some(),
        &universe_domain,
        env.mtls_endpoint,
    )?;
    let resolved = ResolvedEndpoint {
        host,
        universe_domain,
        client_cert_source,
    };
    tracing::debug!("resolved endpoint: {resolved:?}");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::UseClientCertificate;
    use std::sync::Arc;
    use test_case::test_case;

    const SERVICE: ServiceEndpoints = ServiceEndpoints {
        default_endpoint: "aiplatform.googleapis.com",
        mtls_endpoint: "aiplatform.mtls.googleapis.com",
        endpoint_template: "aiplatform.{UNIVERSE_DOMAIN}",
    };
    const OVERRIDE: &str = "api.example.com";
    const OTHER_UNIVERSE: &str = "bar.com";

    type Config = ClientConfig<()>;

    #[test_case(Some(OVERRIDE), false, DEFAULT_UNIVERSE_DOMAIN, MtlsEndpointMode::Always, OVERRIDE)]
    #[test_case(Some(OVERRIDE), true, OTHER_UNIVERSE, MtlsEndpointMode::Auto, OVERRIDE)]
    #[test_case(None, false, DEFAULT_UNIVERSE_DOMAIN, MtlsEndpointMode::Always, "aiplatform.mtls.googleapis.com")]
    #[test_case(None, true, DEFAULT_UNIVERSE_DOMAIN, MtlsEndpointMode::Auto, "aiplatform.mtls.googleapis.com")]
    #[test_case(None, false, DEFAULT_UNIVERSE_DOMAIN, MtlsEndpointMode::Auto, "aiplatform.googleapis.com")]
    #[test_case(None, false, OTHER_UNIVERSE, MtlsEndpointMode::Auto, "aiplatform.bar.com")]
    #[test_case(None, true, DEFAULT_UNIVERSE_DOMAIN, MtlsEndpointMode::Never, "aiplatform.googleapis.com")]
    #[test_case(None, true, OTHER_UNIVERSE, MtlsEndpointMode::Never, "aiplatform.bar.com")]
    fn endpoints(
        endpoint_override: Option<&str>,
        client_cert: bool,
        universe: &str,
        mode: MtlsEndpointMode,
        want: &str,
    ) -> anyhow::Result<()> {
        let got = api_endpoint(&SERVICE, endpoint_override, client_cert, universe, mode)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(true, MtlsEndpointMode::Auto)]
    #[test_case(false, MtlsEndpointMode::Always)]
    #[test_case(true, MtlsEndpointMode::Always)]
    fn mtls_in_other_universe(client_cert: bool, mode: MtlsEndpointMode) {
        let got = api_endpoint(&SERVICE, None, client_cert, OTHER_UNIVERSE, mode);
        let err = got.expect_err("mTLS requires the default universe");
        assert!(err.is_mtls_universe(), "{err:?}");
        assert_eq!(
            err.to_string(),
            "mTLS is not supported in any universe other than googleapis.com."
        );
    }

    #[test_case(None, None, DEFAULT_UNIVERSE_DOMAIN)]
    #[test_case(None, Some("env.com"), "env.com")]
    #[test_case(Some("option.com"), Some("env.com"), "option.com")]
    #[test_case(Some("option.com"), None, "option.com")]
    fn universe_precedence(option: Option<&str>, env: Option<&str>, want: &str) -> anyhow::Result<()> {
        assert_eq!(universe_domain(option, env)?, want);
        Ok(())
    }

    #[test_case(Some(""), None)]
    #[test_case(None, Some(""))]
    #[test_case(Some("  "), Some("env.com"))]
    fn empty_universe(option: Option<&str>, env: Option<&str>) {
        let err = universe_domain(option, env).expect_err("blank universes are invalid");
        assert!(err.is_config(), "{err:?}");
        assert!(
            err.to_string()
                .contains("Universe Domain cannot be an empty string."),
            "{err}"
        );
    }

    fn with_cert_source(mut config: Config) -> Config {
        type BoxError = Box<dyn std::error::Error + Send + Sync>;
        config.client_cert_source = Some(Arc::new(|| {
            Ok::<_, BoxError>((b"cert".to_vec(), b"key".to_vec()))
        }));
        config
    }

    #[test]
    fn resolve_ignores_cert_without_env() -> anyhow::Result<()> {
        let config = with_cert_source(Config::default());
        let got = resolve(&config, &EnvironmentState::default(), &SERVICE)?;
        assert_eq!(got.host, "aiplatform.googleapis.com");
        assert_eq!(got.universe_domain, DEFAULT_UNIVERSE_DOMAIN);
        assert!(!got.uses_mtls(), "{got:?}");
        Ok(())
    }

    #[test]
    fn resolve_with_cert() -> anyhow::Result<()> {
        let config = with_cert_source(Config::default());
        let env = EnvironmentState {
            use_client_certificate: UseClientCertificate::True,
            ..Default::default()
        };
        let got = resolve(&config, &env, &SERVICE)?;
        assert_eq!(got.host, "aiplatform.mtls.googleapis.com");
        assert!(got.uses_mtls(), "{got:?}");
        let fmt = format!("{got:?}");
        assert!(fmt.contains("uses_mtls: true"), "{fmt}");
        Ok(())
    }

    #[test]
    fn resolve_with_cert_in_other_universe() {
        let mut config = with_cert_source(Config::default());
        config.universe_domain = Some(OTHER_UNIVERSE.to_string());
        let env = EnvironmentState {
            use_client_certificate: UseClientCertificate::True,
            ..Default::default()
        };
        let got = resolve(&config, &env, &SERVICE);
        assert!(got.as_ref().is_err_and(|e| e.is_mtls_universe()), "{got:?}");
    }

    #[test]
    fn resolve_universe_from_env() -> anyhow::Result<()> {
        let env = EnvironmentState {
            universe_domain: Some(OTHER_UNIVERSE.to_string()),
            ..Default::default()
        };
        let got = resolve(&Config::default(), &env, &SERVICE)?;
        assert_eq!(got.host, "aiplatform.bar.com");
        assert_eq!(got.universe_domain, OTHER_UNIVERSE);
        Ok(())
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .expect("poisoned capture buffer")
                .extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn resolve_logs_endpoint() -> anyhow::Result<()> {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            resolve(&Config::default(), &EnvironmentState::default(), &SERVICE)
        })?;
        let logs = String::from_utf8(capture.0.lock().expect("poisoned capture buffer").clone())?;
        assert!(logs.contains("resolved endpoint"), "{logs}");
        assert!(logs.contains("aiplatform.googleapis.com"), "{logs}");
        Ok(())
    }

    #[test]
    fn default_endpoint_matches_template() {
        assert_eq!(
            SERVICE.for_universe(DEFAULT_UNIVERSE_DOMAIN),
            SERVICE.default_endpoint
        );
    }
}
