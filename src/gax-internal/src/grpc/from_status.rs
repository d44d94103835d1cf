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

//! Maps `tonic::Status` to the client library errors.

use crate::prost::FromProto;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use std::error::Error as _;

/// Converts the status of a failed RPC.
///
/// Services send the full status, encoded as a `google.rpc.Status`, in the
/// `grpc-status-details-bin` trailer. Without it, or if it cannot be decoded,
/// the status carries the code and message of the response.
pub(crate) fn to_gax_status(status: &tonic::Status) -> Status {
    let fallback = || {
        Status::default()
            .set_code(Code::from(status.code() as i32))
            .set_message(status.message())
    };
    if status.details().is_empty() {
        return fallback();
    }
    let details = <crate::google::rpc::Status as ::prost::Message>::decode(status.details())
        .map_err(crate::prost::ConvertError::other)
        .and_then(|s| s.cnv());
    match details {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!("cannot decode the status details: {e}");
            fallback()
        }
    }
}

fn as_inner<T>(status: &tonic::Status) -> Option<&T>
where
    T: std::error::Error + 'static,
{
    let mut e = status.source()?;
    // Cycles in `source()` are unlikely, but cheap to rule out.
    for _ in 0..32 {
        if let Some(value) = e.downcast_ref::<T>() {
            return Some(value);
        }
        e = e.source()?;
    }
    None
}

pub fn to_gax_error(status: tonic::Status) -> Error {
    if as_inner::<tonic::TimeoutExpired>(&status).is_some() {
        return Error::timeout(status);
    }
    if as_inner::<tonic::ConnectError>(&status).is_some() {
        return Error::connect(status);
    }
    let headers = status.metadata().clone().into_headers();
    if as_inner::<tonic::transport::Error>(&status).is_some() {
        return Error::transport(headers, status);
    }

    let content_type = headers.get("content-type").map(|v| v.as_bytes());
    if content_type.is_some_and(|v| !v.starts_with(b"application/grpc")) {
        return Error::transport(headers, GrpcError::BadContentType(status));
    }

    Error::service_with_http_metadata(to_gax_status(&status), None, Some(headers))
}

#[derive(Debug, thiserror::Error)]
enum GrpcError {
    #[error(
        "unexpected value in content-type header, should start with application/grpc. This usually means the endpoint does not support the binary RPC transport."
    )]
    BadContentType(#[source] tonic::Status),
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(tonic::Code::Ok, Code::Ok)]
    #[test_case(tonic::Code::Cancelled, Code::Cancelled)]
    #[test_case(tonic::Code::Unknown, Code::Unknown)]
    #[test_case(tonic::Code::InvalidArgument, Code::InvalidArgument)]
    #[test_case(tonic::Code::DeadlineExceeded, Code::DeadlineExceeded)]
    #[test_case(tonic::Code::NotFound, Code::NotFound)]
    #[test_case(tonic::Code::AlreadyExists, Code::AlreadyExists)]
    #[test_case(tonic::Code::PermissionDenied, Code::PermissionDenied)]
    #[test_case(tonic::Code::ResourceExhausted, Code::ResourceExhausted)]
    #[test_case(tonic::Code::FailedPrecondition, Code::FailedPrecondition)]
    #[test_case(tonic::Code::Aborted, Code::Aborted)]
    #[test_case(tonic::Code::OutOfRange, Code::OutOfRange)]
    #[test_case(tonic::Code::Unimplemented, Code::Unimplemented)]
    #[test_case(tonic::Code::Internal, Code::Internal)]
    #[test_case(tonic::Code::Unavailable, Code::Unavailable)]
    #[test_case(tonic::Code::DataLoss, Code::DataLoss)]
    #[test_case(tonic::Code::Unauthenticated, Code::Unauthenticated)]
    fn check_code(input: tonic::Code, want: Code) {
        let got = to_gax_status(&tonic::Status::new(input, "test-only"));
        assert_eq!(got.code, want);
        assert_eq!(&got.message, "test-only");
    }

    #[test]
    fn status_details() {
        use ::prost::Message as _;
        let details = crate::google::rpc::Status {
            code: Code::FailedPrecondition as i32,
            message: "the job is already running".into(),
            details: vec![prost_types::Any {
                type_url: "type.googleapis.com/google.rpc.ErrorInfo".into(),
                value: Vec::new(),
            }],
        };
        let input = tonic::Status::with_details(
            tonic::Code::FailedPrecondition,
            "short message",
            bytes::Bytes::from(details.encode_to_vec()),
        );
        let got = to_gax_status(&input);
        assert_eq!(got.code, Code::FailedPrecondition);
        assert_eq!(&got.message, "the job is already running");
        assert!(got.details.is_empty(), "{got:?}");
    }

    #[test]
    fn status_details_garbage() {
        let input = tonic::Status::with_details(
            tonic::Code::NotFound,
            "no such job",
            bytes::Bytes::from_static(b"\xff\xff\xff"),
        );
        let got = to_gax_status(&input);
        assert_eq!(got.code, Code::NotFound);
        assert_eq!(&got.message, "no such job");
    }

    #[test]
    fn status_to_proto() -> anyhow::Result<()> {
        use crate::prost::ToProto;
        let input = Status::default()
            .set_code(Code::Aborted)
            .set_message("try again");
        let got = input.clone().to_proto()?;
        assert_eq!(got.code, 10);
        assert_eq!(&got.message, "try again");
        assert_eq!(got.cnv()?, input);
        Ok(())
    }

    #[test]
    fn service_error() {
        let mut input = tonic::Status::not_found("no such job");
        input.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static("application/grpc"),
        );
        let got = to_gax_error(input);
        let status = got.status().expect("service errors have a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(&status.message, "no such job");
        assert!(got.http_headers().is_some(), "{got:?}");
    }

    #[test]
    fn bad_content_type() {
        let mut status = tonic::Status::internal("oh noes");
        status.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static("text/html; charset=UTF-8"),
        );
        let got = to_gax_error(status);
        assert!(got.is_transport(), "{got:?}");
        assert!(got.status().is_none(), "{got:?}");
        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<GrpcError>())
            .expect("want a GrpcError as source");
        assert!(matches!(source, GrpcError::BadContentType(_)), "{source:?}");
        let fmt = got.to_string();
        assert!(fmt.contains("should start with application/grpc"), "{fmt}");
    }
}
