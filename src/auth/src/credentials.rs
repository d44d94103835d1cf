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

use crate::BuildResult;
use crate::build_errors::Error as BuildError;
use crate::constants::GOOGLE_APPLICATION_CREDENTIALS_VAR;
use http::HeaderMap;
use std::path::PathBuf;
use std::sync::Arc;

pub mod anonymous;
pub mod api_key_credentials;
pub mod service_account;
#[cfg(any(test, feature = "_internal-testing"))]
pub mod testing;

pub use service_account::AccessSpecifier;

pub(crate) use crate::Result;

/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but a private RSA key may be a better example.
///
/// Modern authentication protocols do not send the credentials to
/// authenticate with a service. Even when sent over encrypted transports,
/// the credentials may be accidentally exposed via logging or may be
/// captured if there are errors in the transport encryption. Because the
/// credentials are often long-lived, that risk of exposure is also
/// long-lived.
///
/// Instead, modern authentication protocols exchange the credentials for a
/// time-limited [Token][token-link], a digital object that shows the caller
/// was in possession of the credentials. The clients only see the headers
/// created from the token.
///
/// [credentials-link]: https://cloud.google.com/docs/authentication#credentials
/// [token-link]: https://cloud.google.com/docs/authentication#token
#[derive(Clone, Debug)]
pub struct Credentials {
    // We use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the clients create copies.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    ///
    /// The headers are refreshed when the underlying token expires, and the
    /// same headers are returned otherwise.
    ///
    /// # Example
    /// ```
    /// # use vertex_auth::credentials::api_key_credentials;
    /// # tokio_test::block_on(async {
    /// let credentials = api_key_credentials::Builder::new("my-api-key").build();
    /// let headers = credentials.headers().await?;
    /// assert!(headers.contains_key("x-goog-api-key"));
    /// # Ok::<(), anyhow::Error>(()) });
    /// ```
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }

    /// The universe domain of these credentials.
    ///
    /// `None` means the credentials do not declare a universe domain. The
    /// clients treat them as valid in the default universe.
    pub async fn universe_domain(&self) -> Option<String> {
        self.inner.universe_domain().await
    }
}

/// The trait implemented by all credential types.
pub mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// Creates the authentication headers for a request.
    ///
    /// Applications may implement this trait to provide custom credentials,
    /// and convert them into [Credentials][super::Credentials] with `from()`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<HeaderMap>;

        /// Retrieves the universe domain associated with the credentials, if
        /// any.
        async fn universe_domain(&self) -> Option<String> {
            None
        }
    }
}

pub use dynamic::CredentialsProvider;

/// A builder for [Application Default Credentials].
///
/// The builder looks for a credentials file in:
/// 1. the path named by the `GOOGLE_APPLICATION_CREDENTIALS` environment
///    variable,
/// 2. the well-known location used by `gcloud auth application-default login`.
///
/// Only service account keys are supported. If no file is found, `build()`
/// returns an error satisfying [is_loading][BuildError::is_loading].
///
/// # Example
/// ```
/// # use vertex_auth::credentials::Builder;
/// # fn sample() -> anyhow::Result<()> {
/// let credentials = Builder::default()
///     .with_quota_project_id("my-project")
///     .build()?;
/// # Ok(()) }
/// ```
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
#[derive(Debug, Default)]
pub struct Builder {
    access_specifier: Option<AccessSpecifier>,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Sets the scopes or audience of the self-signed JWTs.
    pub fn with_access_specifier(mut self, access_specifier: AccessSpecifier) -> Self {
        self.access_specifier = Some(access_specifier);
        self
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> BuildResult<Credentials> {
        let json = load_adc()?;
        let cred_type = json
            .get("type")
            .ok_or_else(|| BuildError::parsing("no `type` field found."))?
            .as_str()
            .ok_or_else(|| BuildError::parsing("`type` field is not a string."))?;
        match cred_type {
            "service_account" => {
                let mut builder = service_account::Builder::new(json.clone());
                if let Some(a) = self.access_specifier {
                    builder = builder.with_access_specifier(a);
                }
                if let Some(p) = self.quota_project_id {
                    builder = builder.with_quota_project_id(p);
                }
                builder.build()
            }
            _ => Err(BuildError::unknown_type(format!(
                "`{cred_type}`, only `service_account` keys are supported"
            ))),
        }
    }
}

fn load_adc() -> BuildResult<serde_json::Value> {
    let path = match adc_path() {
        Some(AdcPath::FromEnv(path)) => {
            tracing::debug!("loading credentials from {GOOGLE_APPLICATION_CREDENTIALS_VAR}");
            path
        }
        Some(AdcPath::WellKnown(path)) if path.exists() => path,
        _ => {
            return Err(BuildError::loading(format!(
                "could not find default credentials, set {GOOGLE_APPLICATION_CREDENTIALS_VAR} or run `gcloud auth application-default login`"
            )));
        }
    };
    let contents = std::fs::read_to_string(&path).map_err(|e| {
        BuildError::loading(format!(
            "failed to load Application Default Credentials (ADC) from {}: {e}",
            path.display()
        ))
    })?;
    serde_json::from_str(&contents).map_err(BuildError::parsing)
}

#[derive(Debug, PartialEq)]
enum AdcPath {
    FromEnv(PathBuf),
    WellKnown(PathBuf),
}

fn adc_path() -> Option<AdcPath> {
    if let Ok(path) = std::env::var(GOOGLE_APPLICATION_CREDENTIALS_VAR) {
        return Some(AdcPath::FromEnv(path.into()));
    }
    adc_well_known_path().map(AdcPath::WellKnown)
}

// The location used by `gcloud auth application-default login`.
fn adc_well_known_path() -> Option<PathBuf> {
    let mut path = if cfg!(windows) {
        PathBuf::from(std::env::var("APPDATA").ok()?)
    } else {
        let mut path = PathBuf::from(std::env::var("HOME").ok()?);
        path.push(".config");
        path
    };
    path.push("gcloud");
    path.push("application_default_credentials.json");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::service_account::tests::{
        generate_pkcs8_private_key, service_account_key,
    };
    use scoped_env::ScopedEnv;
    use std::io::Write;

    fn write_key(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    #[serial_test::serial]
    #[cfg(unix)]
    fn adc_well_known_path_unix() {
        let _creds = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS_VAR);
        let _home = ScopedEnv::set("HOME", "/home/foo");
        assert_eq!(
            adc_path(),
            Some(AdcPath::WellKnown(
                "/home/foo/.config/gcloud/application_default_credentials.json".into()
            ))
        );
    }

    #[test]
    #[serial_test::serial]
    #[cfg(unix)]
    fn adc_no_home() {
        let _creds = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS_VAR);
        let _home = ScopedEnv::remove("HOME");
        assert_eq!(adc_path(), None);
        let got = Builder::default().build();
        assert!(got.as_ref().is_err_and(|e| e.is_loading()), "{got:?}");
    }

    #[test]
    #[serial_test::serial]
    fn adc_env_takes_precedence() {
        let _creds = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_VAR, "/tmp/creds.json");
        let _home = ScopedEnv::set("HOME", "/home/foo");
        assert_eq!(adc_path(), Some(AdcPath::FromEnv("/tmp/creds.json".into())));
    }

    #[test]
    #[serial_test::serial]
    fn adc_env_file_missing() {
        let _creds = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_VAR, "file-does-not-exist.json");
        let got = Builder::default().build();
        let err = got.expect_err("missing file should fail");
        assert!(err.is_loading(), "{err:?}");
        assert!(err.to_string().contains("file-does-not-exist.json"), "{err}");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn adc_service_account() -> anyhow::Result<()> {
        let key = service_account_key(&generate_pkcs8_private_key());
        let file = write_key(&key.to_string())?;
        let path = file.path().to_str().expect("UTF-8 path").to_string();
        let _creds = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_VAR, &path);
        let creds = Builder::default()
            .with_quota_project_id("qp")
            .with_access_specifier(AccessSpecifier::from_audience("https://aud/"))
            .build()?;
        let headers = creds.headers().await?;
        assert!(headers.contains_key(http::header::AUTHORIZATION), "{headers:?}");
        assert_eq!(
            headers.get("x-goog-user-project"),
            Some(&http::HeaderValue::from_static("qp"))
        );
        assert_eq!(creds.universe_domain().await.as_deref(), Some("googleapis.com"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn adc_unsupported_type() -> anyhow::Result<()> {
        let file = write_key(r#"{"type": "authorized_user"}"#)?;
        let path = file.path().to_str().expect("UTF-8 path").to_string();
        let _creds = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_VAR, &path);
        let got = Builder::default().build();
        assert!(got.as_ref().is_err_and(|e| e.is_unknown_type()), "{got:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn adc_malformed() -> anyhow::Result<()> {
        let file = write_key("not JSON")?;
        let path = file.path().to_str().expect("UTF-8 path").to_string();
        let _creds = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_VAR, &path);
        let got = Builder::default().build();
        assert!(got.as_ref().is_err_and(|e| e.is_parsing()), "{got:?}");

        let file = write_key(r#"{"client_email": "foo"}"#)?;
        let path = file.path().to_str().expect("UTF-8 path").to_string();
        let _creds = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_VAR, &path);
        let got = Builder::default().build();
        assert!(got.as_ref().is_err_and(|e| e.is_parsing()), "{got:?}");
        Ok(())
    }

    #[derive(Debug)]
    struct Custom;
    #[async_trait::async_trait]
    impl CredentialsProvider for Custom {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            headers.insert("x-custom", http::HeaderValue::from_static("custom"));
            Ok(headers)
        }
        async fn universe_domain(&self) -> Option<String> {
            Some("custom.com".to_string())
        }
    }

    #[tokio::test]
    async fn from_custom_provider() -> anyhow::Result<()> {
        let creds = Credentials::from(Custom);
        let headers = creds.headers().await?;
        assert!(headers.contains_key("x-custom"), "{headers:?}");
        assert_eq!(creds.universe_domain().await.as_deref(), Some("custom.com"));
        Ok(())
    }
}
