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

//! Validates the universe domain of the credentials.
//!
//! The credentials must belong to the same universe as the client. Older
//! credentials may not report a universe domain, they are assumed to belong
//! to the default universe.

use crate::endpoint::DEFAULT_UNIVERSE_DOMAIN;
use auth::credentials::Credentials;
use gax::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(thiserror::Error, Debug, PartialEq)]
#[error(
    "The configured universe domain ({configured}) does not match the universe domain found in the credentials ({found}). If you haven't configured the universe domain explicitly, 'googleapis.com' is the default."
)]
pub struct UniverseMismatch {
    pub configured: String,
    pub found: String,
}

/// Compares the configured universe domain against the credentials.
pub fn compare_universes(
    configured: &str,
    credentials_universe: Option<&str>,
) -> Result<(), UniverseMismatch> {
    let found = credentials_universe.unwrap_or(DEFAULT_UNIVERSE_DOMAIN);
    if configured == found {
        return Ok(());
    }
    Err(UniverseMismatch {
        configured: configured.to_string(),
        found: found.to_string(),
    })
}

/// Validates the universe domain on the first RPC.
///
/// A successful validation is cached, later RPCs skip the check. Failures
/// are not cached.
#[derive(Debug)]
pub struct UniverseValidator {
    universe_domain: String,
    validated: AtomicBool,
}

impl UniverseValidator {
    pub fn new<T: Into<String>>(universe_domain: T) -> Self {
        Self {
            universe_domain: universe_domain.into(),
            validated: AtomicBool::new(false),
        }
    }

    pub fn universe_domain(&self) -> &str {
        &self.universe_domain
    }

    pub fn is_validated(&self) -> bool {
        self.validated.load(Ordering::Acquire)
    }

    /// Validates the credentials, if any.
    pub async fn validate(&self, credentials: Option<&Credentials>) -> gax::Result<()> {
        if self.is_validated() {
            return Ok(());
        }
        if let Some(credentials) = credentials {
            let found = credentials.universe_domain().await;
            compare_universes(&self.universe_domain, found.as_deref())
                .map_err(Error::universe_mismatch)?;
        }
        self.validated.store(true, Ordering::Release);
        Ok(())
    }
}
