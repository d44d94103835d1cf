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

//! Creates clients from service account keys.

#[cfg(test)]
mod tests {
    use rsa::RsaPrivateKey;
    use rsa::pkcs8::{EncodePrivateKey, LineEnding};
    use rsa::rand_core::OsRng;
    use serde_json::{Value, json};
    use std::io::Write;
    use vertex_jobs_v1::client::JobService;

    type Result<T> = anyhow::Result<T>;

    fn key() -> Result<Value> {
        let private_key = RsaPrivateKey::new(&mut OsRng, 2048)?
            .to_pkcs8_pem(LineEnding::LF)?
            .to_string();
        Ok(json!({
            "type": "service_account",
            "client_email": "sa@my-project.iam.gserviceaccount.com",
            "private_key_id": "test-key-id",
            "private_key": private_key,
            "project_id": "my-project",
        }))
    }

    async fn authorization(client: &JobService) -> Result<String> {
        let transport = client.transport().expect("built clients have a transport");
        let headers = transport.credentials().headers().await?;
        let value = headers
            .get(http::header::AUTHORIZATION)
            .map(|v| v.to_str())
            .transpose()?
            .unwrap_or_default();
        Ok(value.to_string())
    }

    #[tokio::test]
    async fn from_info() -> Result<()> {
        let client = JobService::from_service_account_info(key()?)?
            .with_transport("rest")
            .build()
            .await?;
        let value = authorization(&client).await?;
        assert!(value.starts_with("Bearer "), "{value}");
        Ok(())
    }

    async fn jwt_claims(client: &JobService) -> Result<Value> {
        use base64::Engine;
        use base64::prelude::BASE64_URL_SAFE_NO_PAD;
        let value = authorization(client).await?;
        let token = value.strip_prefix("Bearer ").unwrap_or_default();
        let claims = token.split('.').nth(1).unwrap_or_default();
        Ok(serde_json::from_slice(&BASE64_URL_SAFE_NO_PAD.decode(claims)?)?)
    }

    #[tokio::test]
    async fn from_info_default_scopes() -> Result<()> {
        let client = JobService::from_service_account_info(key()?)?
            .with_transport("rest")
            .build()
            .await?;
        let claims = jwt_claims(&client).await?;
        let want = vertex_jobs_v1::transport::DEFAULT_SCOPES.join(" ");
        assert_eq!(claims["scope"], want.as_str(), "{claims:?}");
        Ok(())
    }

    #[tokio::test]
    async fn from_info_honors_builder_settings() -> Result<()> {
        let client = JobService::from_service_account_info(key()?)?
            .with_scopes(["https://www.googleapis.com/auth/cloud-platform.read-only"])
            .with_quota_project("my-quota")
            .with_transport("rest")
            .build()
            .await?;
        let claims = jwt_claims(&client).await?;
        assert_eq!(
            claims["scope"],
            "https://www.googleapis.com/auth/cloud-platform.read-only",
            "{claims:?}"
        );
        let transport = client.transport().expect("built clients have a transport");
        let headers = transport.credentials().headers().await?;
        assert_eq!(
            headers.get("x-goog-user-project").map(|v| v.as_bytes()),
            Some("my-quota".as_bytes())
        );

        let client = JobService::from_service_account_info(key()?)?
            .with_always_use_jwt_access(false)
            .with_transport("grpc")
            .build()
            .await?;
        let claims = jwt_claims(&client).await?;
        assert_eq!(claims["aud"], "https://aiplatform.googleapis.com/", "{claims:?}");
        assert!(claims.get("scope").is_none(), "{claims:?}");
        Ok(())
    }

    #[test]
    fn from_info_malformed() {
        let got = JobService::from_service_account_info(json!({"type": "service_account"}));
        let err = got.expect_err("the key is missing required fields");
        assert!(err.is_default_credentials(), "{err:?}");
    }

    #[tokio::test]
    async fn from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(key()?.to_string().as_bytes())?;

        let client = JobService::from_service_account_file(file.path())
            .with_transport("rest")
            .build()
            .await?;
        let value = authorization(&client).await?;
        assert!(value.starts_with("Bearer "), "{value}");

        let client = JobService::from_service_account_json(file.path())
            .with_transport("grpc")
            .build()
            .await?;
        let value = authorization(&client).await?;
        assert!(value.starts_with("Bearer "), "{value}");
        Ok(())
    }

    #[tokio::test]
    async fn from_file_missing() {
        let err = JobService::from_service_account_file("/does/not/exist/key.json")
            .build()
            .await
            .expect_err("the file does not exist");
        assert!(err.is_default_credentials(), "{err:?}");
    }

    #[tokio::test]
    async fn file_and_credentials_conflict() -> Result<()> {
        let err = JobService::from_service_account_info(key()?)?
            .with_credentials_file("key.json")
            .build()
            .await
            .expect_err("only one credential source is allowed");
        assert!(err.is_config(), "{err:?}");
        Ok(())
    }
}
