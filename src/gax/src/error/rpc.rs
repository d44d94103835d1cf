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

//! The `google.rpc.Status` model and its error codes.

use serde::{Deserialize, Serialize};

/// The status of a failed RPC.
///
/// Services return this as the error payload of failed requests, and
/// long-running operations embed it when they complete with an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// A list of messages that carry the error details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<wkt::Any>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<wkt::Any>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

// The JSON error payload returned by REST endpoints. The `code` field holds
// the HTTP status code, while `status` holds the canonical code name.
#[derive(Deserialize)]
struct ErrorWrapper {
    error: HttpStatus,
}

#[derive(Deserialize)]
#[serde(default)]
#[derive(Default)]
struct HttpStatus {
    code: u16,
    message: String,
    status: Option<String>,
    details: Vec<wkt::Any>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)?;
        let http = wrapper.error;
        let code = http
            .status
            .as_deref()
            .and_then(|s| Code::try_from(s).ok())
            .unwrap_or_else(|| Code::from_http_status(http.code));
        Ok(Status {
            code,
            message: http.message,
            details: http.details,
        })
    }
}

/// The canonical error codes for APIs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    Ok = 0,
    /// The operation was cancelled, typically by the caller.
    Cancelled = 1,
    /// Unknown error.
    #[default]
    Unknown = 2,
    /// The client specified an invalid argument.
    InvalidArgument = 3,
    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4,
    /// Some requested entity was not found.
    NotFound = 5,
    /// The entity that a client attempted to create already exists.
    AlreadyExists = 6,
    /// The caller does not have permission to execute the operation.
    PermissionDenied = 7,
    /// Some resource has been exhausted.
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation.
    FailedPrecondition = 9,
    /// The operation was aborted.
    Aborted = 10,
    /// The operation was attempted past the valid range.
    OutOfRange = 11,
    /// The operation is not implemented or enabled in this service.
    Unimplemented = 12,
    /// Internal errors.
    Internal = 13,
    /// The service is currently unavailable.
    Unavailable = 14,
    /// Unrecoverable data loss or corruption.
    DataLoss = 15,
    /// The request does not have valid authentication credentials.
    Unauthenticated = 16,
}

impl Code {
    /// The canonical name of the code, e.g. `NOT_FOUND`.
    pub fn name(&self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// Maps an HTTP status code to the closest canonical code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            500..=599 => Code::Internal,
            _ => Code::Unknown,
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::Unknown,
        }
    }
}

impl From<Code> for i32 {
    fn from(value: Code) -> Self {
        value as i32
    }
}

impl TryFrom<&str> for Code {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        (0..=16)
            .map(Code::from)
            .find(|c| c.name() == value)
            .ok_or_else(|| format!("{value} is not a valid code name"))
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Code::Ok)]
    #[test_case(Code::Cancelled)]
    #[test_case(Code::Unknown)]
    #[test_case(Code::InvalidArgument)]
    #[test_case(Code::DeadlineExceeded)]
    #[test_case(Code::NotFound)]
    #[test_case(Code::AlreadyExists)]
    #[test_case(Code::PermissionDenied)]
    #[test_case(Code::ResourceExhausted)]
    #[test_case(Code::FailedPrecondition)]
    #[test_case(Code::Aborted)]
    #[test_case(Code::OutOfRange)]
    #[test_case(Code::Unimplemented)]
    #[test_case(Code::Internal)]
    #[test_case(Code::Unavailable)]
    #[test_case(Code::DataLoss)]
    #[test_case(Code::Unauthenticated)]
    fn code_conversions(code: Code) {
        assert_eq!(Code::from(i32::from(code)), code);
        assert_eq!(Code::try_from(code.name()), Ok(code));
        assert_eq!(code.to_string(), code.name());
    }

    #[test]
    fn unknown_code() {
        assert_eq!(Code::from(42), Code::Unknown);
        assert!(Code::try_from("NOT_A_CODE").is_err());
    }

    #[test]
    fn status_serde() -> anyhow::Result<()> {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("job not found");
        let got = serde_json::to_value(&status)?;
        assert_eq!(got, json!({"code": 5, "message": "job not found"}));
        let back = serde_json::from_value::<Status>(got)?;
        assert_eq!(back, status);
        Ok(())
    }

    #[test]
    fn from_http_payload() -> anyhow::Result<()> {
        let payload = json!({"error": {
            "code": 404,
            "message": "The thing is not there, oh noes!",
            "status": "NOT_FOUND",
        }});
        let bytes = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::NotFound);
        assert_eq!(got.message, "The thing is not there, oh noes!");
        Ok(())
    }

    #[test]
    fn from_http_payload_without_status() -> anyhow::Result<()> {
        let payload = json!({"error": {"code": 400, "message": "bad"}});
        let bytes = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::InvalidArgument);
        Ok(())
    }

    #[test]
    fn from_http_payload_error() {
        let bytes = bytes::Bytes::from_static(b"<html>oops</html>");
        assert!(Status::try_from(&bytes).is_err());
    }

    #[test_case(200, Code::Ok)]
    #[test_case(400, Code::InvalidArgument)]
    #[test_case(404, Code::NotFound)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(502, Code::Internal)]
    #[test_case(302, Code::Unknown)]
    fn http_mapping(status: u16, want: Code) {
        assert_eq!(Code::from_http_status(status), want);
    }
}
