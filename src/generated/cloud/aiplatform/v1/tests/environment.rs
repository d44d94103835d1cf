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

//! Verifies how the environment variables change the client configuration.
//!
//! These tests change the process environment, they run serially.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::test_credentials;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vertex_jobs_v1::client::JobService;

    type Result<T> = anyhow::Result<T>;

    const USE_MTLS_ENDPOINT: &str = "GOOGLE_API_USE_MTLS_ENDPOINT";
    const USE_CLIENT_CERTIFICATE: &str = "GOOGLE_API_USE_CLIENT_CERTIFICATE";
    const UNIVERSE_DOMAIN: &str = "GOOGLE_CLOUD_UNIVERSE_DOMAIN";

    fn builder() -> vertex_jobs_v1::builder::job_service::ClientBuilder {
        JobService::builder()
            .with_credentials(test_credentials())
            .with_transport("rest")
    }

    #[tokio::test]
    #[serial]
    async fn unsupported_mtls_endpoint() {
        let _e = ScopedEnv::set(USE_MTLS_ENDPOINT, "Unsupported");
        let err = builder()
            .build()
            .await
            .expect_err("the environment variable has an invalid value");
        assert!(err.is_config(), "{err:?}");
        assert!(
            err.to_string().contains("must be `never`, `auto` or `always`"),
            "{err}"
        );
    }

    #[tokio::test]
    #[serial]
    async fn unsupported_client_certificate() {
        let _e = ScopedEnv::set(USE_CLIENT_CERTIFICATE, "maybe");
        let err = builder()
            .build()
            .await
            .expect_err("the environment variable has an invalid value");
        assert!(err.is_config(), "{err:?}");
        assert!(
            err.to_string().contains("must be either `true` or `false`"),
            "{err}"
        );
    }

    #[tokio::test]
    #[serial]
    async fn mtls_always() -> Result<()> {
        let _e = ScopedEnv::set(USE_MTLS_ENDPOINT, "always");
        let client = builder().build().await?;
        assert_eq!(
            client.transport().map(|t| t.host()),
            Some("https://aiplatform.mtls.googleapis.com")
        );
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn mtls_never() -> Result<()> {
        let _e = ScopedEnv::set(USE_MTLS_ENDPOINT, "never");
        let client = builder().build().await?;
        assert_eq!(
            client.transport().map(|t| t.host()),
            Some("https://aiplatform.googleapis.com")
        );
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn mtls_in_other_universe() {
        let _e = ScopedEnv::set(USE_MTLS_ENDPOINT, "always");
        let err = builder()
            .with_universe_domain("bar.com")
            .build()
            .await
            .expect_err("mTLS is only available in the default universe");
        assert!(err.is_mtls_universe(), "{err:?}");
    }

    #[tokio::test]
    #[serial]
    async fn universe_from_environment() -> Result<()> {
        let _e = ScopedEnv::set(UNIVERSE_DOMAIN, "bar.com");
        let client = builder().build().await?;
        let transport = client.transport().expect("built clients have a transport");
        assert_eq!(transport.universe_domain(), "bar.com");
        assert_eq!(transport.host(), "https://aiplatform.bar.com");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn universe_option_wins() -> Result<()> {
        let _e = ScopedEnv::set(UNIVERSE_DOMAIN, "bar.com");
        let client = builder().with_universe_domain("foo.com").build().await?;
        assert_eq!(
            client.transport().map(|t| t.universe_domain()),
            Some("foo.com")
        );
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn empty_universe() {
        let _e = ScopedEnv::set(UNIVERSE_DOMAIN, "bar.com");
        let err = builder()
            .with_universe_domain("")
            .build()
            .await
            .expect_err("the universe domain cannot be empty");
        assert!(err.is_config(), "{err:?}");
    }

    #[tokio::test]
    #[serial]
    async fn client_certificate_enabled() {
        let _e = ScopedEnv::set(USE_CLIENT_CERTIFICATE, "true");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let err = builder()
            .with_client_cert_source(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Err("no certificate in this test".into())
            })
            .build()
            .await
            .expect_err("the certificate source fails");
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    #[serial]
    async fn client_certificate_disabled() -> Result<()> {
        let _e = ScopedEnv::set(USE_CLIENT_CERTIFICATE, "false");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let client = builder()
            .with_client_cert_source(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Err("no certificate in this test".into())
            })
            .build()
            .await?;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            client.transport().map(|t| t.host()),
            Some("https://aiplatform.googleapis.com")
        );
        Ok(())
    }
}
