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

impl ToProto<ListLocationsRequest> for ::location::model::ListLocationsRequest {
    type Output = ListLocationsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListLocationsRequest> {
        Ok(ListLocationsRequest {
            name: self.name,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
        })
    }
}

impl FromProto<::location::model::ListLocationsRequest> for ListLocationsRequest {
    fn cnv(self) -> gaxi::prost::Result<::location::model::ListLocationsRequest> {
        let mut result = ::location::model::ListLocationsRequest::new();
        result.name = self.name;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        Ok(result)
    }
}

impl ToProto<ListLocationsResponse> for ::location::model::ListLocationsResponse {
    type Output = ListLocationsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListLocationsResponse> {
        Ok(ListLocationsResponse {
            locations: self
                .locations
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl FromProto<::location::model::ListLocationsResponse> for ListLocationsResponse {
    fn cnv(self) -> gaxi::prost::Result<::location::model::ListLocationsResponse> {
        let mut result = ::location::model::ListLocationsResponse::new();
        result.locations = self
            .locations
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl ToProto<GetLocationRequest> for ::location::model::GetLocationRequest {
    type Output = GetLocationRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetLocationRequest> {
        Ok(GetLocationRequest { name: self.name })
    }
}

impl FromProto<::location::model::GetLocationRequest> for GetLocationRequest {
    fn cnv(self) -> gaxi::prost::Result<::location::model::GetLocationRequest> {
        let mut result = ::location::model::GetLocationRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl ToProto<Location> for ::location::model::Location {
    type Output = Location;
    fn to_proto(self) -> gaxi::prost::Result<Location> {
        Ok(Location {
            name: self.name,
            location_id: self.location_id,
            display_name: self.display_name,
            labels: self.labels,
            metadata: self
                .metadata
                .map(crate::protobuf::any_to_prost)
                .transpose()?,
        })
    }
}

impl FromProto<::location::model::Location> for Location {
    fn cnv(self) -> gaxi::prost::Result<::location::model::Location> {
        let mut result = ::location::model::Location::new();
        result.name = self.name;
        result.location_id = self.location_id;
        result.display_name = self.display_name;
        result.labels = self.labels;
        result.metadata = crate::protobuf::metadata_from_prost(self.metadata)?;
        Ok(result)
    }
}
