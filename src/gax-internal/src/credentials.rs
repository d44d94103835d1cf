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

//! Binds the credentials to the client configuration.
//!
//! At most one credential source may be configured: a [Credentials] object,
//! a service account key (inline or in a file), or an API key. Without any,
//! the client uses the application default credentials.

use crate::options::{ClientConfig, Credentials};
use auth::credentials::{AccessSpecifier, api_key_credentials, service_account};
use gax::client_builder::{Error as BuilderError, Result};

/// Creates the credentials of a client.
///
/// Service account credentials use self-signed JWTs. With
/// `always_use_jwt_access` the JWTs carry the scopes, otherwise they carry the
/// audience, which is `audience` unless the configuration overrides it.
pub fn make_credentials(
    config: &ClientConfig,
    audience: &str,
    default_scopes: &[&str],
) -> Result<Credentials> {
    config.check_credential_sources()?;
    if let Some(cred) = config.cred.clone() {
        return Ok(cred);
    }
    if let Some(key) = config.api_key.as_ref() {
        let builder = api_key_credentials::Builder::new(key);
        let builder = match config.quota_project.as_ref() {
            Some(p) => builder.with_quota_project_id(p),
            None => builder,
        };
        return Ok(builder.build());
    }
    let access = access_specifier(config, audience, default_scopes);
    let service_account = match (&config.credentials_file, &config.credentials_info) {
        (Some(path), _) => {
            tracing::debug!("loading service account credentials from {path:?}");
            Some(service_account::Builder::from_file(path).map_err(BuilderError::cred)?)
        }
        (None, Some(info)) => Some(service_account::Builder::new(info.clone())),
        (None, None) => None,
    };
    if let Some(builder) = service_account {
        let mut builder = builder.with_access_specifier(access);
        if let Some(p) = config.quota_project.as_ref() {
            builder = builder.with_quota_project_id(p);
        }
        return builder.build().map_err(BuilderError::cred);
    }
    let mut builder = auth::credentials::Builder::default().with_access_specifier(access);
    if let Some(p) = config.quota_project.as_ref() {
        builder = builder.with_quota_project_id(p);
    }
    builder.build().map_err(BuilderError::cred)
}

fn access_specifier(config: &ClientConfig, audience: &str, default_scopes: &[&str]) -> AccessSpecifier {
    if config.always_use_jwt_access {
        return match config.scopes.as_ref() {
            Some(scopes) => AccessSpecifier::from_scopes(scopes.iter().cloned()),
            None => AccessSpecifier::from_scopes(default_scopes.iter().map(|s| s.to_string())),
        };
    }
    AccessSpecifier::from_audience(config.api_audience.as_deref().unwrap_or(audience))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::testing::{TEST_AUTHORIZATION, test_credentials};
    use http::HeaderValue;
    use rsa::RsaPrivateKey;
    use rsa::pkcs8::{EncodePrivateKey, LineEnding};
    use rsa::rand_core::OsRng;
    use scoped_env::ScopedEnv;
    use std::io::Write;

    const AUDIENCE: &str = "https://aiplatform.googleapis.com/";
    const SCOPES: [&str; 2] = [
        "https://www.googleapis.com/auth/cloud-platform",
        "https://www.googleapis.com/auth/cloud-platform.read-only",
    ];

    fn key() -> anyhow::Result<serde_json::Value> {
        let private_key = RsaPrivateKey::new(&mut OsRng, 2048)?
            .to_pkcs8_pem(LineEnding::LF)?
            .to_string();
        Ok(serde_json::json!({
            "type": "service_account",
            "client_email": "sa@my-project.iam.gserviceaccount.com",
            "private_key_id": "test-key-id",
            "private_key": private_key,
            "project_id": "my-project",
        }))
    }

    fn key_file() -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(key()?.to_string().as_bytes())?;
        Ok(file)
    }

    // Returns the claims of the self-signed JWT in the authorization header.
    async fn jwt_claims(cred: &Credentials) -> anyhow::Result<serde_json::Value> {
        use base64::Engine;
        use base64::prelude::BASE64_URL_SAFE_NO_PAD;
        let headers = cred.headers().await?;
        let auth = headers
            .get(http::header::AUTHORIZATION)
            .map(|v| v.to_str())
            .transpose()?
            .unwrap_or_default();
        let token = auth.strip_prefix("Bearer ").unwrap_or_default();
        let claims = token.split('.').nth(1).unwrap_or_default();
        let claims = BASE64_URL_SAFE_NO_PAD.decode(claims)?;
        Ok(serde_json::from_slice(&claims)?)
    }

    #[tokio::test]
    async fn explicit_credentials() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.cred = Some(test_credentials());
        let cred = make_credentials(&config, AUDIENCE, &SCOPES)?;
        let headers = cred.headers().await?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&HeaderValue::from_static(TEST_AUTHORIZATION))
        );
        Ok(())
    }

    #[tokio::test]
    async fn api_key() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.api_key = Some("test-api-key".to_string());
        config.quota_project = Some("my-quota".to_string());
        let cred = make_credentials(&config, AUDIENCE, &SCOPES)?;
        let headers = cred.headers().await?;
        assert_eq!(
            headers.get("x-goog-api-key"),
            Some(&HeaderValue::from_static("test-api-key"))
        );
        assert_eq!(
            headers.get("x-goog-user-project"),
            Some(&HeaderValue::from_static("my-quota"))
        );
        Ok(())
    }

    #[test]
    fn conflicting_sources() {
        let mut config = ClientConfig::default();
        config.cred = Some(test_credentials());
        config.api_key = Some("test-api-key".to_string());
        let got = make_credentials(&config, AUDIENCE, &SCOPES);
        assert!(got.as_ref().is_err_and(|e| e.is_config()), "{got:?}");
    }

    #[tokio::test]
    async fn credentials_file() -> anyhow::Result<()> {
        let file = key_file()?;
        let mut config = ClientConfig::default();
        config.credentials_file = Some(file.path().to_path_buf());
        config.quota_project = Some("my-quota".to_string());
        let cred = make_credentials(&config, AUDIENCE, &SCOPES)?;
        let headers = cred.headers().await?;
        let auth = headers
            .get(http::header::AUTHORIZATION)
            .map(|v| v.to_str())
            .transpose()?
            .unwrap_or_default();
        assert!(auth.starts_with("Bearer "), "{headers:?}");
        assert_eq!(
            headers.get("x-goog-user-project"),
            Some(&HeaderValue::from_static("my-quota"))
        );
        assert_eq!(cred.universe_domain().await.as_deref(), Some("googleapis.com"));
        Ok(())
    }

    #[tokio::test]
    async fn credentials_info_honors_config() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.credentials_info = Some(key()?);
        config.scopes = Some(vec!["scope-a".to_string(), "scope-b".to_string()]);
        config.quota_project = Some("my-quota".to_string());
        let cred = make_credentials(&config, AUDIENCE, &SCOPES)?;
        let claims = jwt_claims(&cred).await?;
        assert_eq!(claims["scope"], "scope-a scope-b", "{claims:?}");
        assert!(claims.get("aud").is_none(), "{claims:?}");
        let headers = cred.headers().await?;
        assert_eq!(
            headers.get("x-goog-user-project"),
            Some(&HeaderValue::from_static("my-quota"))
        );

        config.always_use_jwt_access = false;
        let cred = make_credentials(&config, AUDIENCE, &SCOPES)?;
        let claims = jwt_claims(&cred).await?;
        assert_eq!(claims["aud"], AUDIENCE, "{claims:?}");
        assert!(claims.get("scope").is_none(), "{claims:?}");
        Ok(())
    }

    #[tokio::test]
    async fn credentials_info_default_scopes() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.credentials_info = Some(key()?);
        let cred = make_credentials(&config, AUDIENCE, &SCOPES)?;
        let claims = jwt_claims(&cred).await?;
        assert_eq!(claims["scope"], SCOPES.join(" "), "{claims:?}");
        Ok(())
    }

    #[test]
    fn missing_file() {
        let mut config = ClientConfig::default();
        config.credentials_file = Some("/does/not/exist.json".into());
        let got = make_credentials(&config, AUDIENCE, &SCOPES);
        assert!(
            got.as_ref().is_err_and(|e| e.is_default_credentials()),
            "{got:?}"
        );
    }

    #[test]
    #[serial_test::serial]
    fn default_credentials_missing() {
        let _e = ScopedEnv::set("GOOGLE_APPLICATION_CREDENTIALS", "/does/not/exist.json");
        let got = make_credentials(&ClientConfig::default(), AUDIENCE, &SCOPES);
        assert!(
            got.as_ref().is_err_and(|e| e.is_default_credentials()),
            "{got:?}"
        );
    }

    #[test]
    fn access_specifiers() {
        let config = ClientConfig::default();
        assert_eq!(
            access_specifier(&config, AUDIENCE, &SCOPES),
            AccessSpecifier::from_scopes(SCOPES.map(String::from))
        );

        let mut config = ClientConfig::default();
        config.scopes = Some(vec!["scope-a".to_string()]);
        assert_eq!(
            access_specifier(&config, AUDIENCE, &SCOPES),
            AccessSpecifier::from_scopes(["scope-a"])
        );

        let mut config = ClientConfig::default();
        config.always_use_jwt_access = false;
        assert_eq!(
            access_specifier(&config, AUDIENCE, &SCOPES),
            AccessSpecifier::from_audience(AUDIENCE)
        );
        config.api_audience = Some("https://custom/".to_string());
        assert_eq!(
            access_specifier(&config, AUDIENCE, &SCOPES),
            AccessSpecifier::from_audience("https://custom/")
        );
    }
}
