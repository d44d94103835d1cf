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

pub use auth::credentials::Credentials;
use gax::backoff_policy::BackoffPolicy;
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicy};
use gax::retry_policy::RetryPolicy;
use std::sync::Arc;

/// The client configuration used by the transports.
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled<Cr>(config: &gax::client_builder::internal::ClientConfig<Cr>) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// The retry and polling policies of a client.
///
/// The policies in the request options override the client policies.
#[derive(Clone, Debug, Default)]
pub struct ClientPolicies {
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl ClientPolicies {
    pub fn new<Cr>(config: &gax::client_builder::internal::ClientConfig<Cr>) -> Self {
        Self {
            retry_policy: config.retry_policy.clone(),
            backoff_policy: config.backoff_policy.clone(),
            polling_error_policy: config.polling_error_policy.clone(),
            polling_backoff_policy: config.polling_backoff_policy.clone(),
        }
    }

    /// `None` if the request should not be retried.
    pub fn retry_policy(&self, options: &RequestOptions) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    pub fn backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    pub fn polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.polling_error_policy.clone())
            .unwrap_or_else(|| Arc::new(Aip194Strict))
    }

    pub fn polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::retry_policy::{AlwaysRetry, NeverRetry};
    use scoped_env::ScopedEnv;

    // Manipulates the environment, must run serially.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    fn policies_default() {
        let policies = ClientPolicies::new(&ClientConfig::default());
        let options = RequestOptions::default();
        assert!(policies.retry_policy(&options).is_none());
        let backoff = format!("{:?}", policies.backoff_policy(&options));
        assert!(backoff.contains("ExponentialBackoff"), "{backoff}");
        let polling = format!("{:?}", policies.polling_error_policy(&options));
        assert!(polling.contains("Aip194Strict"), "{polling}");
        let polling = format!("{:?}", policies.polling_backoff_policy(&options));
        assert!(polling.contains("ExponentialBackoff"), "{polling}");
    }

    #[test]
    fn policies_override() {
        let mut config = ClientConfig::default();
        config.retry_policy = Some(Arc::new(AlwaysRetry));
        let policies = ClientPolicies::new(&config);

        let options = RequestOptions::default();
        let got = format!("{:?}", policies.retry_policy(&options));
        assert!(got.contains("AlwaysRetry"), "{got}");

        let mut options = RequestOptions::default();
        options.set_retry_policy(NeverRetry);
        let got = format!("{:?}", policies.retry_policy(&options));
        assert!(got.contains("NeverRetry"), "{got}");
    }
}
