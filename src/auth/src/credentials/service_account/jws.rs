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

use crate::credentials::Result;
use crate::errors;
use base64::prelude::{BASE64_URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;

// Services reject assertions with `iat` in the future. Machines have some
// clock skew, create the assertion with a 10 second margin.
pub const CLOCK_SKEW_FUDGE: Duration = Duration::from_secs(10);
pub const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(3600);

/// The claims of a self-signed JWT.
#[derive(Serialize)]
pub struct JwsClaims {
    pub iss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(with = "time::serde::timestamp")]
    pub exp: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub iat: OffsetDateTime,
    pub sub: String,
}

impl JwsClaims {
    pub fn encode(&self) -> Result<String> {
        if self.exp < self.iat {
            return Err(errors::non_retryable_from_str(format!(
                "expiration time {:?}, must be later than issued time {:?}",
                self.exp, self.iat
            )));
        }
        if self.aud.is_some() && self.scope.is_some() {
            return Err(errors::non_retryable_from_str(format!(
                "found {:?} for audience and {:?} for scope, however expecting only 1 of them to be set",
                self.aud, self.scope
            )));
        }
        let json = serde_json::to_string(&self).map_err(errors::non_retryable)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

/// The header that describes who, what, and how a token was created.
#[derive(Serialize, Debug)]
pub struct JwsHeader<'a> {
    pub alg: &'a str,
    pub typ: &'a str,
    pub kid: &'a str,
}

impl JwsHeader<'_> {
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(&self).map_err(errors::non_retryable)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn decode(encoded: String) -> anyhow::Result<Value> {
        let decoded = BASE64_URL_SAFE_NO_PAD.decode(encoded)?;
        Ok(serde_json::from_slice(&decoded)?)
    }

    #[test]
    fn claims_with_audience() -> anyhow::Result<()> {
        let now = OffsetDateTime::now_utc();
        let then = now + Duration::from_secs(4200);
        let claims = JwsClaims {
            iss: "test_iss".to_string(),
            scope: None,
            aud: Some("test_aud".to_string()),
            exp: then,
            iat: now,
            sub: "test_sub".to_string(),
        };
        let v = decode(claims.encode()?)?;
        assert_eq!(v["iss"], "test_iss");
        assert_eq!(v.get("scope"), None);
        assert_eq!(v["aud"], "test_aud");
        assert_eq!(v["iat"], now.unix_timestamp());
        assert_eq!(v["exp"], then.unix_timestamp());
        assert_eq!(v["sub"], "test_sub");
        Ok(())
    }

    #[test]
    fn claims_with_scopes() -> anyhow::Result<()> {
        let now = OffsetDateTime::now_utc();
        let claims = JwsClaims {
            iss: "test_iss".to_string(),
            scope: Some("scope1 scope2".to_string()),
            aud: None,
            exp: now + Duration::from_secs(3600),
            iat: now,
            sub: "test_sub".to_string(),
        };
        let v = decode(claims.encode()?)?;
        assert_eq!(v["scope"], "scope1 scope2");
        assert_eq!(v.get("aud"), None);
        Ok(())
    }

    #[test]
    fn claims_expired() {
        let now = OffsetDateTime::now_utc();
        let claims = JwsClaims {
            iss: "test_iss".to_string(),
            scope: None,
            aud: None,
            exp: now - Duration::from_secs(10),
            iat: now,
            sub: "test_sub".to_string(),
        };
        let got = claims.encode();
        assert!(
            got.as_ref()
                .is_err_and(|e| e.to_string().contains("must be later than issued time")),
            "{got:?}"
        );
    }

    #[test]
    fn claims_with_scope_and_audience() {
        let now = OffsetDateTime::now_utc();
        let claims = JwsClaims {
            iss: "test_iss".to_string(),
            scope: Some("scope".to_string()),
            aud: Some("aud".to_string()),
            exp: now + Duration::from_secs(3600),
            iat: now,
            sub: "test_sub".to_string(),
        };
        let got = claims.encode();
        assert!(
            got.as_ref()
                .is_err_and(|e| e.to_string().contains("expecting only 1 of them")),
            "{got:?}"
        );
    }

    #[test]
    fn header() -> anyhow::Result<()> {
        let header = JwsHeader {
            alg: "RS256",
            typ: "JWT",
            kid: "some_key_id",
        };
        let v = decode(header.encode()?)?;
        assert_eq!(v["alg"], "RS256");
        assert_eq!(v["typ"], "JWT");
        assert_eq!(v["kid"], "some_key_id");
        Ok(())
    }
}
