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

//! Parses the environment variables that control endpoint selection.
//!
//! Each client reads these variables once, when it is built. Invalid values
//! are configuration errors.

use gax::client_builder::Error as BuilderError;
use std::str::FromStr;

/// Whether the client certificate, if any, should be used.
pub const USE_CLIENT_CERTIFICATE: &str = "GOOGLE_API_USE_CLIENT_CERTIFICATE";
/// When to use the mTLS endpoint.
pub const USE_MTLS_ENDPOINT: &str = "GOOGLE_API_USE_MTLS_ENDPOINT";
/// Overrides the default universe domain.
pub const UNIVERSE_DOMAIN: &str = "GOOGLE_CLOUD_UNIVERSE_DOMAIN";

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum EnvironmentError {
    #[error("Environment variable `GOOGLE_API_USE_CLIENT_CERTIFICATE` must be either `true` or `false`")]
    UseClientCertificate,
    #[error("Environment variable `GOOGLE_API_USE_MTLS_ENDPOINT` must be `never`, `auto` or `always`")]
    UseMtlsEndpoint,
}

/// The value of `GOOGLE_API_USE_CLIENT_CERTIFICATE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UseClientCertificate {
    #[default]
    Unset,
    True,
    False,
}

impl UseClientCertificate {
    pub fn enabled(&self) -> bool {
        matches!(self, Self::True)
    }
}

impl FromStr for UseClientCertificate {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            _ => Err(EnvironmentError::UseClientCertificate),
        }
    }
}

/// The value of `GOOGLE_API_USE_MTLS_ENDPOINT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MtlsEndpointMode {
    Never,
    #[default]
    Auto,
    Always,
}

impl FromStr for MtlsEndpointMode {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            _ => Err(EnvironmentError::UseMtlsEndpoint),
        }
    }
}

/// The endpoint configuration found in the environment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvironmentState {
    pub use_client_certificate: UseClientCertificate,
    pub mtls_endpoint: MtlsEndpointMode,
    pub universe_domain: Option<String>,
}

impl EnvironmentState {
    /// Reads the process environment.
    pub fn from_env() -> gax::client_builder::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration from `lookup`, which returns `None` for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> gax::client_builder::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let use_client_certificate = lookup(USE_CLIENT_CERTIFICATE)
            .map(|v| v.parse())
            .transpose()
            .map_err(BuilderError::config)?
            .unwrap_or_default();
        let mtls_endpoint = lookup(USE_MTLS_ENDPOINT)
            .map(|v| v.parse())
            .transpose()
            .map_err(BuilderError::config)?
            .unwrap_or_default();
        let state = Self {
            use_client_certificate,
            mtls_endpoint,
            universe_domain: lookup(UNIVERSE_DOMAIN),
        };
        tracing::debug!("endpoint environment: {state:?}");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn unset() -> anyhow::Result<()> {
        let got = EnvironmentState::from_lookup(lookup(&[]))?;
        assert_eq!(got, EnvironmentState::default());
        assert!(!got.use_client_certificate.enabled());
        assert_eq!(got.mtls_endpoint, MtlsEndpointMode::Auto);
        Ok(())
    }

    #[test_case("true", UseClientCertificate::True)]
    #[test_case("false", UseClientCertificate::False)]
    #[test_case("TRUE", UseClientCertificate::True)]
    fn client_certificate(value: &str, want: UseClientCertificate) -> anyhow::Result<()> {
        let got = EnvironmentState::from_lookup(lookup(&[(USE_CLIENT_CERTIFICATE, value)]))?;
        assert_eq!(got.use_client_certificate, want);
        Ok(())
    }

    #[test_case("never", MtlsEndpointMode::Never)]
    #[test_case("auto", MtlsEndpointMode::Auto)]
    #[test_case("always", MtlsEndpointMode::Always)]
    #[test_case("Always", MtlsEndpointMode::Always)]
    fn mtls_endpoint(value: &str, want: MtlsEndpointMode) -> anyhow::Result<()> {
        let got = EnvironmentState::from_lookup(lookup(&[(USE_MTLS_ENDPOINT, value)]))?;
        assert_eq!(got.mtls_endpoint, want);
        Ok(())
    }

    #[test]
    fn bad_client_certificate() {
        let got = EnvironmentState::from_lookup(lookup(&[(USE_CLIENT_CERTIFICATE, "maybe")]));
        let err = got.expect_err("invalid values should fail");
        assert!(err.is_config(), "{err:?}");
        assert!(
            err.to_string().contains("must be either `true` or `false`"),
            "{err}"
        );
    }

    #[test]
    fn bad_mtls_endpoint() {
        let got = EnvironmentState::from_lookup(lookup(&[(USE_MTLS_ENDPOINT, "Unsupported")]));
        let err = got.expect_err("invalid values should fail");
        assert!(err.is_config(), "{err:?}");
        assert!(
            err.to_string().contains("must be `never`, `auto` or `always`"),
            "{err}"
        );
    }

    #[test]
    fn universe_domain() -> anyhow::Result<()> {
        let got = EnvironmentState::from_lookup(lookup(&[(UNIVERSE_DOMAIN, "bar.com")]))?;
        assert_eq!(got.universe_domain.as_deref(), Some("bar.com"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env() -> anyhow::Result<()> {
        let _c = ScopedEnv::set(USE_CLIENT_CERTIFICATE, "true");
        let _m = ScopedEnv::set(USE_MTLS_ENDPOINT, "never");
        let _u = ScopedEnv::remove(UNIVERSE_DOMAIN);
        let got = EnvironmentState::from_env()?;
        assert!(got.use_client_certificate.enabled());
        assert_eq!(got.mtls_endpoint, MtlsEndpointMode::Never);
        assert_eq!(got.universe_domain, None);
        Ok(())
    }
}
