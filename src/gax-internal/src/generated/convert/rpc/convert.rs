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

impl crate::prost::ToProto<Status> for gax::error::rpc::Status {
    type Output = Status;
    fn to_proto(self) -> std::result::Result<Status, crate::prost::ConvertError> {
        if !self.details.is_empty() {
            tracing::debug!(
                "dropping {} error details without a binary encoding",
                self.details.len()
            );
        }
        Ok(Status {
            code: self.code.into(),
            message: self.message,
            details: std::vec::Vec::new(),
        })
    }
}

impl crate::prost::FromProto<gax::error::rpc::Status> for Status {
    fn cnv(self) -> std::result::Result<gax::error::rpc::Status, crate::prost::ConvertError> {
        for detail in &self.details {
            tracing::debug!("dropping error detail of type {}", detail.type_url);
        }
        Ok(gax::error::rpc::Status::default()
            .set_code(self.code)
            .set_message(self.message))
    }
}
