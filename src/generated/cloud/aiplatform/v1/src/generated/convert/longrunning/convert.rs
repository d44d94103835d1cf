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

use gaxi::prost::{FromProto, ToProto};

impl ToProto<Operation> for ::longrunning::model::Operation {
    type Output = Operation;
    fn to_proto(self) -> gaxi::prost::Result<Operation> {
        use ::longrunning::model::operation::Result as R;
        let result = match self.result {
            None => None,
            Some(R::Error(status)) => Some(operation::Result::Error((*status).to_proto()?)),
            Some(R::Response(any)) => Some(operation::Result::Response(
                crate::protobuf::any_to_prost(*any)?,
            )),
            Some(_) => None,
        };
        Ok(Operation {
            name: self.name,
            metadata: self
                .metadata
                .map(crate::protobuf::any_to_prost)
                .transpose()?,
            done: self.done,
            result,
        })
    }
}

impl FromProto<::longrunning::model::Operation> for Operation {
    fn cnv(self) -> gaxi::prost::Result<::longrunning::model::Operation> {
        use ::longrunning::model::operation::Result as R;
        let mut result = ::longrunning::model::Operation::new();
        result.name = self.name;
        result.metadata = crate::protobuf::metadata_from_prost(self.metadata)?;
        result.done = self.done;
        result.result = match self.result {
            None => None,
            Some(operation::Result::Error(status)) => Some(R::Error(Box::new(status.cnv()?))),
            Some(operation::Result::Response(any)) => Some(R::Response(Box::new(
                crate::protobuf::any_from_prost(any)?,
            ))),
        };
        Ok(result)
    }
}

impl ToProto<GetOperationRequest> for ::longrunning::model::GetOperationRequest {
    type Output = GetOperationRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetOperationRequest> {
        Ok(GetOperationRequest { name: self.name })
    }
}

impl FromProto<::longrunning::model::GetOperationRequest> for GetOperationRequest {
    fn cnv(self) -> gaxi::prost::Result<::longrunning::model::GetOperationRequest> {
        Ok(::longrunning::model::GetOperationRequest::new().set_name(self.name))
    }
}

impl ToProto<ListOperationsRequest> for ::longrunning::model::ListOperationsRequest {
    type Output = ListOperationsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListOperationsRequest> {
        Ok(ListOperationsRequest {
            name: self.name,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
            return_partial_success: self.return_partial_success,
        })
    }
}

impl FromProto<::longrunning::model::ListOperationsRequest> for ListOperationsRequest {
    fn cnv(self) -> gaxi::prost::Result<::longrunning::model::ListOperationsRequest> {
        let mut result = ::longrunning::model::ListOperationsRequest::new();
        result.name = self.name;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.return_partial_success = self.return_partial_success;
        Ok(result)
    }
}

impl ToProto<ListOperationsResponse> for ::longrunning::model::ListOperationsResponse {
    type Output = ListOperationsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListOperationsResponse> {
        Ok(ListOperationsResponse {
            operations: self
                .operations
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
            unreachable: self.unreachable,
        })
    }
}

impl FromProto<::longrunning::model::ListOperationsResponse> for ListOperationsResponse {
    fn cnv(self) -> gaxi::prost::Result<::longrunning::model::ListOperationsResponse> {
        let mut result = ::longrunning::model::ListOperationsResponse::new();
        result.operations = self
            .operations
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        result.unreachable = self.unreachable;
        Ok(result)
    }
}

impl ToProto<CancelOperationRequest> for ::longrunning::model::CancelOperationRequest {
    type Output = CancelOperationRequest;
    fn to_proto(self) -> gaxi::prost::Result<CancelOperationRequest> {
        Ok(CancelOperationRequest { name: self.name })
    }
}

impl FromProto<::longrunning::model::CancelOperationRequest> for CancelOperationRequest {
    fn cnv(self) -> gaxi::prost::Result<::longrunning::model::CancelOperationRequest> {
        Ok(::longrunning::model::CancelOperationRequest::new().set_name(self.name))
    }
}

impl ToProto<DeleteOperationRequest> for ::longrunning::model::DeleteOperationRequest {
    type Output = DeleteOperationRequest;
    fn to_proto(self) -> gaxi::prost::Result<DeleteOperationRequest> {
        Ok(DeleteOperationRequest { name: self.name })
    }
}

impl FromProto<::longrunning::model::DeleteOperationRequest> for DeleteOperationRequest {
    fn cnv(self) -> gaxi::prost::Result<::longrunning::model::DeleteOperationRequest> {
        Ok(::longrunning::model::DeleteOperationRequest::new().set_name(self.name))
    }
}

impl ToProto<WaitOperationRequest> for ::longrunning::model::WaitOperationRequest {
    type Output = WaitOperationRequest;
    fn to_proto(self) -> gaxi::prost::Result<WaitOperationRequest> {
        Ok(WaitOperationRequest {
            name: self.name,
            timeout: self.timeout.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl FromProto<::longrunning::model::WaitOperationRequest> for WaitOperationRequest {
    fn cnv(self) -> gaxi::prost::Result<::longrunning::model::WaitOperationRequest> {
        let mut result = ::longrunning::model::WaitOperationRequest::new();
        result.name = self.name;
        result.timeout = self.timeout.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}
