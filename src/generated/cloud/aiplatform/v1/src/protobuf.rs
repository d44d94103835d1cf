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

//! Maps the messages of the service to their binary encoding.

use crate::google::cloud::aiplatform::v1 as pb;
use crate::google::cloud::location as location_pb;
use crate::google::iam::v1 as iam_pb;
use crate::google::longrunning as lro_pb;
use crate::model;
use gaxi::prost::{ConvertError, FromProto, Result, ToProto};
use prost::Message as _;

/// A message that the binary RPC transport can send or receive.
pub(crate) trait Protobuf: Sized {
    type Proto: prost::Message + Default + FromProto<Self> + Send + Sync + 'static;

    fn to_protobuf(self) -> Result<Self::Proto>;

    fn from_protobuf(proto: Self::Proto) -> Result<Self> {
        proto.cnv()
    }
}

macro_rules! impl_protobuf {
    ($($model:ty => $proto:ty),* $(,)?) => {
        $(
            impl Protobuf for $model {
                type Proto = $proto;
                fn to_protobuf(self) -> Result<$proto> {
                    self.to_proto()
                }
            }
        )*
    };
}

macro_rules! impl_any {
    ($($model:ty => $proto:ty),* $(,)?) => {
        /// Converts an [Any][prost_types::Any] received over the binary
        /// protocol into its JSON representation.
        pub(crate) fn any_from_prost(any: prost_types::Any) -> Result<wkt::Any> {
            $(
                if any.type_url == <$model as wkt::message::Message>::typename() {
                    let proto = <$proto>::decode(any.value.as_slice()).map_err(ConvertError::other)?;
                    let model: $model = proto.cnv()?;
                    return wkt::Any::from_msg(&model).map_err(ConvertError::other);
                }
            )*
            Err(ConvertError::UnexpectedTypeUrl(any.type_url))
        }

        pub(crate) fn any_to_prost(any: wkt::Any) -> Result<prost_types::Any> {
            let type_url = any.type_url().unwrap_or_default().to_string();
            $(
                if type_url == <$model as wkt::message::Message>::typename() {
                    let model = any.to_msg::<$model>().map_err(ConvertError::other)?;
                    let proto: $proto = model.to_proto()?;
                    return Ok(prost_types::Any {
                        type_url,
                        value: proto.encode_to_vec(),
                    });
                }
            )*
            Err(ConvertError::UnexpectedTypeUrl(type_url))
        }
    };
}

/// Converts the metadata of an operation or a location.
///
/// Metadata of a type this crate does not know is dropped.
pub(crate) fn metadata_from_prost(any: Option<prost_types::Any>) -> Result<Option<wkt::Any>> {
    match any.map(any_from_prost) {
        None => Ok(None),
        Some(Ok(any)) => Ok(Some(any)),
        Some(Err(ConvertError::UnexpectedTypeUrl(type_url))) => {
            tracing::debug!("dropping metadata of type {type_url}");
            Ok(None)
        }
        Some(Err(e)) => Err(e),
    }
}

impl_any!(
    wkt::Empty => (),
    model::GenericOperationMetadata => pb::GenericOperationMetadata,
    model::DeleteOperationMetadata => pb::DeleteOperationMetadata,
    model::UpdateModelDeploymentMonitoringJobOperationMetadata => pb::UpdateModelDeploymentMonitoringJobOperationMetadata,
    model::ModelDeploymentMonitoringJob => pb::ModelDeploymentMonitoringJob,
);

impl_protobuf!(
    wkt::Empty => (),
    model::CreateCustomJobRequest => pb::CreateCustomJobRequest,
    model::GetCustomJobRequest => pb::GetCustomJobRequest,
    model::ListCustomJobsRequest => pb::ListCustomJobsRequest,
    model::ListCustomJobsResponse => pb::ListCustomJobsResponse,
    model::DeleteCustomJobRequest => pb::DeleteCustomJobRequest,
    model::CancelCustomJobRequest => pb::CancelCustomJobRequest,
    model::CustomJob => pb::CustomJob,
    model::CreateDataLabelingJobRequest => pb::CreateDataLabelingJobRequest,
    model::GetDataLabelingJobRequest => pb::GetDataLabelingJobRequest,
    model::ListDataLabelingJobsRequest => pb::ListDataLabelingJobsRequest,
    model::ListDataLabelingJobsResponse => pb::ListDataLabelingJobsResponse,
    model::DeleteDataLabelingJobRequest => pb::DeleteDataLabelingJobRequest,
    model::CancelDataLabelingJobRequest => pb::CancelDataLabelingJobRequest,
    model::DataLabelingJob => pb::DataLabelingJob,
    model::CreateHyperparameterTuningJobRequest => pb::CreateHyperparameterTuningJobRequest,
    model::GetHyperparameterTuningJobRequest => pb::GetHyperparameterTuningJobRequest,
    model::ListHyperparameterTuningJobsRequest => pb::ListHyperparameterTuningJobsRequest,
    model::ListHyperparameterTuningJobsResponse => pb::ListHyperparameterTuningJobsResponse,
    model::DeleteHyperparameterTuningJobRequest => pb::DeleteHyperparameterTuningJobRequest,
    model::CancelHyperparameterTuningJobRequest => pb::CancelHyperparameterTuningJobRequest,
    model::HyperparameterTuningJob => pb::HyperparameterTuningJob,
    model::CreateNasJobRequest => pb::CreateNasJobRequest,
    model::GetNasJobRequest => pb::GetNasJobRequest,
    model::ListNasJobsRequest => pb::ListNasJobsRequest,
    model::ListNasJobsResponse => pb::ListNasJobsResponse,
    model::DeleteNasJobRequest => pb::DeleteNasJobRequest,
    model::CancelNasJobRequest => pb::CancelNasJobRequest,
    model::NasJob => pb::NasJob,
    model::GetNasTrialDetailRequest => pb::GetNasTrialDetailRequest,
    model::ListNasTrialDetailsRequest => pb::ListNasTrialDetailsRequest,
    model::ListNasTrialDetailsResponse => pb::ListNasTrialDetailsResponse,
    model::NasTrialDetail => pb::NasTrialDetail,
    model::CreateBatchPredictionJobRequest => pb::CreateBatchPredictionJobRequest,
    model::GetBatchPredictionJobRequest => pb::GetBatchPredictionJobRequest,
    model::ListBatchPredictionJobsRequest => pb::ListBatchPredictionJobsRequest,
    model::ListBatchPredictionJobsResponse => pb::ListBatchPredictionJobsResponse,
    model::DeleteBatchPredictionJobRequest => pb::DeleteBatchPredictionJobRequest,
    model::CancelBatchPredictionJobRequest => pb::CancelBatchPredictionJobRequest,
    model::BatchPredictionJob => pb::BatchPredictionJob,
    model::CreateModelDeploymentMonitoringJobRequest => pb::CreateModelDeploymentMonitoringJobRequest,
    model::SearchModelDeploymentMonitoringStatsAnomaliesRequest => pb::SearchModelDeploymentMonitoringStatsAnomaliesRequest,
    model::SearchModelDeploymentMonitoringStatsAnomaliesResponse => pb::SearchModelDeploymentMonitoringStatsAnomaliesResponse,
    model::GetModelDeploymentMonitoringJobRequest => pb::GetModelDeploymentMonitoringJobRequest,
    model::ListModelDeploymentMonitoringJobsRequest => pb::ListModelDeploymentMonitoringJobsRequest,
    model::ListModelDeploymentMonitoringJobsResponse => pb::ListModelDeploymentMonitoringJobsResponse,
    model::DeleteModelDeploymentMonitoringJobRequest => pb::DeleteModelDeploymentMonitoringJobRequest,
    model::UpdateModelDeploymentMonitoringJobRequest => pb::UpdateModelDeploymentMonitoringJobRequest,
    model::PauseModelDeploymentMonitoringJobRequest => pb::PauseModelDeploymentMonitoringJobRequest,
    model::ResumeModelDeploymentMonitoringJobRequest => pb::ResumeModelDeploymentMonitoringJobRequest,
    model::ModelDeploymentMonitoringJob => pb::ModelDeploymentMonitoringJob,
    location::model::ListLocationsRequest => location_pb::ListLocationsRequest,
    location::model::ListLocationsResponse => location_pb::ListLocationsResponse,
    location::model::GetLocationRequest => location_pb::GetLocationRequest,
    location::model::Location => location_pb::Location,
    iam_v1::model::SetIamPolicyRequest => iam_pb::SetIamPolicyRequest,
    iam_v1::model::GetIamPolicyRequest => iam_pb::GetIamPolicyRequest,
    iam_v1::model::TestIamPermissionsRequest => iam_pb::TestIamPermissionsRequest,
    iam_v1::model::TestIamPermissionsResponse => iam_pb::TestIamPermissionsResponse,
    iam_v1::model::Policy => iam_pb::Policy,
    longrunning::model::ListOperationsRequest => lro_pb::ListOperationsRequest,
    longrunning::model::ListOperationsResponse => lro_pb::ListOperationsResponse,
    longrunning::model::GetOperationRequest => lro_pb::GetOperationRequest,
    longrunning::model::DeleteOperationRequest => lro_pb::DeleteOperationRequest,
    longrunning::model::CancelOperationRequest => lro_pb::CancelOperationRequest,
    longrunning::model::WaitOperationRequest => lro_pb::WaitOperationRequest,
    longrunning::model::Operation => lro_pb::Operation,
);

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    type TestResult = anyhow::Result<()>;

    fn metadata() -> anyhow::Result<model::UpdateModelDeploymentMonitoringJobOperationMetadata> {
        let generic = model::GenericOperationMetadata::new()
            .set_create_time(wkt::Timestamp::new(123, 0)?)
            .set_partial_failures([gax::error::rpc::Status::default()
                .set_code(gax::error::rpc::Code::NotFound)
                .set_message("gone")]);
        Ok(model::UpdateModelDeploymentMonitoringJobOperationMetadata::new()
            .set_generic_metadata(generic))
    }

    #[test]
    fn any_round_trip() -> TestResult {
        let input = wkt::Any::from_msg(&metadata()?)?;
        let proto = any_to_prost(input.clone())?;
        assert_eq!(
            proto.type_url,
            "type.googleapis.com/google.cloud.aiplatform.v1.UpdateModelDeploymentMonitoringJobOperationMetadata"
        );
        let decoded = pb::UpdateModelDeploymentMonitoringJobOperationMetadata::decode(
            proto.value.as_slice(),
        )?;
        let generic = decoded.generic_metadata.unwrap_or_default();
        assert_eq!(generic.create_time.map(|t| t.seconds), Some(123));
        assert_eq!(generic.partial_failures.len(), 1);

        let output = any_from_prost(proto)?;
        assert_eq!(output, input);
        Ok(())
    }

    #[test]
    fn empty_any() -> TestResult {
        let proto = any_to_prost(wkt::Any::from_msg(&wkt::Empty::default())?)?;
        assert_eq!(proto.type_url, "type.googleapis.com/google.protobuf.Empty");
        assert!(proto.value.is_empty());
        let got = any_from_prost(proto)?.to_msg::<wkt::Empty>()?;
        assert_eq!(got, wkt::Empty::default());
        Ok(())
    }

    #[test]
    fn unknown_any() -> TestResult {
        let unknown = prost_types::Any {
            type_url: "type.googleapis.com/google.cloud.aiplatform.v1.Unknown".into(),
            value: Vec::new(),
        };
        let got = any_from_prost(unknown.clone());
        assert!(
            matches!(got, Err(ConvertError::UnexpectedTypeUrl(ref t)) if t == &unknown.type_url),
            "{got:?}"
        );
        assert_eq!(metadata_from_prost(Some(unknown))?, None);
        assert_eq!(metadata_from_prost(None)?, None);

        let got = any_to_prost(wkt::Any::from_msg(&model::NasTrial::new())?);
        assert!(
            matches!(got, Err(ConvertError::UnexpectedTypeUrl(_))),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn corrupt_any() {
        let corrupt = prost_types::Any {
            type_url: "type.googleapis.com/google.cloud.aiplatform.v1.DeleteOperationMetadata"
                .into(),
            value: vec![0xff, 0xff, 0xff],
        };
        let got = metadata_from_prost(Some(corrupt));
        assert!(matches!(got, Err(ConvertError::Other(_))), "{got:?}");
    }

    #[test]
    fn rest_only_inputs() {
        let spec = wkt::Struct::from_iter([("k".to_string(), wkt::Value::from("v"))]);
        let got = model::NasJob::new().set_nas_job_spec(spec.clone()).to_protobuf();
        assert!(
            matches!(
                got,
                Err(ConvertError::RestOnlyField(
                    "google.cloud.aiplatform.v1.NasJob.nas_job_spec"
                ))
            ),
            "{got:?}"
        );
        let got = model::CreateModelDeploymentMonitoringJobRequest::new()
            .set_model_deployment_monitoring_job(
                model::ModelDeploymentMonitoringJob::new().set_logging_sampling_strategy(spec),
            )
            .to_protobuf();
        assert!(matches!(got, Err(ConvertError::RestOnlyField(_))), "{got:?}");
    }

    #[test]
    fn rest_only_outputs() -> TestResult {
        let output = wkt::Struct::from_iter([("k".to_string(), wkt::Value::from("v"))]);
        let job = model::NasJob::new()
            .set_name("projects/p/locations/l/nasJobs/n")
            .set_nas_job_output(output)
            .to_protobuf()?;
        assert_eq!(job.name, "projects/p/locations/l/nasJobs/n");
        let back = model::NasJob::from_protobuf(job)?;
        assert_eq!(back.nas_job_output, None);
        Ok(())
    }

    #[test]
    fn unknown_enum_string() {
        let got = model::CustomJob::new()
            .set_state(model::JobState::from("JOB_STATE_FROM_THE_FUTURE"))
            .to_protobuf();
        assert!(
            matches!(got, Err(ConvertError::EnumNoIntegerValue(_))),
            "{got:?}"
        );
    }

    #[test]
    fn custom_job_round_trip() -> TestResult {
        let job = model::CustomJob::new()
            .set_name("projects/p/locations/l/customJobs/j")
            .set_display_name("d")
            .set_state(model::JobState::Running)
            .set_labels([("k", "v")])
            .set_web_access_uris([("workerpool0-0", "https://example.com")])
            .set_update_time(wkt::Timestamp::new(456, 789)?)
            .set_job_spec(
                model::CustomJobSpec::new()
                    .set_service_account("sa@p.iam.gserviceaccount.com")
                    .set_base_output_directory(
                        model::GcsDestination::new().set_output_uri_prefix("gs://b/o"),
                    )
                    .set_worker_pool_specs([model::WorkerPoolSpec::new()
                        .set_replica_count(1)
                        .set_container_spec(
                            model::ContainerSpec::new()
                                .set_image_uri("gcr.io/p/i")
                                .set_args(["--epochs", "3"])
                                .set_env([model::EnvVar::new().set_name("A").set_value("1")]),
                        )]),
            );
        let proto = job.clone().to_protobuf()?;
        assert_eq!(proto.state, pb::JobState::Running as i32);
        let bytes = proto.encode_to_vec();
        let got = model::CustomJob::from_protobuf(pb::CustomJob::decode(bytes.as_slice())?)?;
        assert_eq!(got, job);
        Ok(())
    }
}
