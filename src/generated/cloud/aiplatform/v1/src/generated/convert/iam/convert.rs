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

impl ToProto<SetIamPolicyRequest> for ::iam_v1::model::SetIamPolicyRequest {
    type Output = SetIamPolicyRequest;
    fn to_proto(self) -> gaxi::prost::Result<SetIamPolicyRequest> {
        Ok(SetIamPolicyRequest {
            resource: self.resource,
            policy: self.policy.map(|v| v.to_proto()).transpose()?,
            update_mask: self.update_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl FromProto<::iam_v1::model::SetIamPolicyRequest> for SetIamPolicyRequest {
    fn cnv(self) -> gaxi::prost::Result<::iam_v1::model::SetIamPolicyRequest> {
        let mut result = ::iam_v1::model::SetIamPolicyRequest::new();
        result.resource = self.resource;
        result.policy = self.policy.map(|v| v.cnv()).transpose()?;
        result.update_mask = self.update_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl ToProto<GetIamPolicyRequest> for ::iam_v1::model::GetIamPolicyRequest {
    type Output = GetIamPolicyRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetIamPolicyRequest> {
        Ok(GetIamPolicyRequest {
            resource: self.resource,
            options: self.options.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl FromProto<::iam_v1::model::GetIamPolicyRequest> for GetIamPolicyRequest {
    fn cnv(self) -> gaxi::prost::Result<::iam_v1::model::GetIamPolicyRequest> {
        let mut result = ::iam_v1::model::GetIamPolicyRequest::new();
        result.resource = self.resource;
        result.options = self.options.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl ToProto<GetPolicyOptions> for ::iam_v1::model::GetPolicyOptions {
    type Output = GetPolicyOptions;
    fn to_proto(self) -> gaxi::prost::Result<GetPolicyOptions> {
        Ok(GetPolicyOptions {
            requested_policy_version: self.requested_policy_version,
        })
    }
}

impl FromProto<::iam_v1::model::GetPolicyOptions> for GetPolicyOptions {
    fn cnv(self) -> gaxi::prost::Result<::iam_v1::model::GetPolicyOptions> {
        let mut result = ::iam_v1::model::GetPolicyOptions::new();
        result.requested_policy_version = self.requested_policy_version;
        Ok(result)
    }
}

impl ToProto<TestIamPermissionsRequest> for ::iam_v1::model::TestIamPermissionsRequest {
    type Output = TestIamPermissionsRequest;
    fn to_proto(self) -> gaxi::prost::Result<TestIamPermissionsRequest> {
        Ok(TestIamPermissionsRequest {
            resource: self.resource,
            permissions: self.permissions,
        })
    }
}

impl FromProto<::iam_v1::model::TestIamPermissionsRequest> for TestIamPermissionsRequest {
    fn cnv(self) -> gaxi::prost::Result<::iam_v1::model::TestIamPermissionsRequest> {
        let mut result = ::iam_v1::model::TestIamPermissionsRequest::new();
        result.resource = self.resource;
        result.permissions = self.permissions;
        Ok(result)
    }
}

impl ToProto<TestIamPermissionsResponse> for ::iam_v1::model::TestIamPermissionsResponse {
    type Output = TestIamPermissionsResponse;
    fn to_proto(self) -> gaxi::prost::Result<TestIamPermissionsResponse> {
        Ok(TestIamPermissionsResponse {
            permissions: self.permissions,
        })
    }
}

impl FromProto<::iam_v1::model::TestIamPermissionsResponse> for TestIamPermissionsResponse {
    fn cnv(self) -> gaxi::prost::Result<::iam_v1::model::TestIamPermissionsResponse> {
        let mut result = ::iam_v1::model::TestIamPermissionsResponse::new();
        result.permissions = self.permissions;
        Ok(result)
    }
}

impl ToProto<Policy> for ::iam_v1::model::Policy {
    type Output = Policy;
    fn to_proto(self) -> gaxi::prost::Result<Policy> {
        Ok(Policy {
            version: self.version,
            bindings: self
                .bindings
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            etag: self.etag,
        })
    }
}

impl FromProto<::iam_v1::model::Policy> for Policy {
    fn cnv(self) -> gaxi::prost::Result<::iam_v1::model::Policy> {
        let mut result = ::iam_v1::model::Policy::new();
        result.version = self.version;
        result.bindings = self
            .bindings
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.etag = self.etag;
        Ok(result)
    }
}

impl ToProto<Binding> for ::iam_v1::model::Binding {
    type Output = Binding;
    fn to_proto(self) -> gaxi::prost::Result<Binding> {
        Ok(Binding {
            role: self.role,
            members: self.members,
        })
    }
}

impl FromProto<::iam_v1::model::Binding> for Binding {
    fn cnv(self) -> gaxi::prost::Result<::iam_v1::model::Binding> {
        let mut result = ::iam_v1::model::Binding::new();
        result.role = self.role;
        result.members = self.members;
        Ok(result)
    }
}
