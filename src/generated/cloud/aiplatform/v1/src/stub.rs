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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::JobService].
///
/// Application developers may need to implement this trait to mock
/// `client::JobService`. In other use-cases, application developers only
/// use `client::JobService` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait JobService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::JobService::create_custom_job].
    fn create_custom_job(
        &self,
        _req: crate::model::CreateCustomJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::CustomJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CreateCustomJob")
    }

    /// Implements [super::client::JobService::get_custom_job].
    fn get_custom_job(
        &self,
        _req: crate::model::GetCustomJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::CustomJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetCustomJob")
    }

    /// Implements [super::client::JobService::list_custom_jobs].
    fn list_custom_jobs(
        &self,
        _req: crate::model::ListCustomJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListCustomJobsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListCustomJobs")
    }

    /// Implements [super::client::JobService::delete_custom_job].
    fn delete_custom_job(
        &self,
        _req: crate::model::DeleteCustomJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteCustomJob")
    }

    /// Implements [super::client::JobService::cancel_custom_job].
    fn cancel_custom_job(
        &self,
        _req: crate::model::CancelCustomJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CancelCustomJob")
    }

    /// Implements [super::client::JobService::create_data_labeling_job].
    fn create_data_labeling_job(
        &self,
        _req: crate::model::CreateDataLabelingJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::DataLabelingJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CreateDataLabelingJob")
    }

    /// Implements [super::client::JobService::get_data_labeling_job].
    fn get_data_labeling_job(
        &self,
        _req: crate::model::GetDataLabelingJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::DataLabelingJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetDataLabelingJob")
    }

    /// Implements [super::client::JobService::list_data_labeling_jobs].
    fn list_data_labeling_jobs(
        &self,
        _req: crate::model::ListDataLabelingJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListDataLabelingJobsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListDataLabelingJobs")
    }

    /// Implements [super::client::JobService::delete_data_labeling_job].
    fn delete_data_labeling_job(
        &self,
        _req: crate::model::DeleteDataLabelingJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteDataLabelingJob")
    }

    /// Implements [super::client::JobService::cancel_data_labeling_job].
    fn cancel_data_labeling_job(
        &self,
        _req: crate::model::CancelDataLabelingJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CancelDataLabelingJob")
    }

    /// Implements [super::client::JobService::create_hyperparameter_tuning_job].
    fn create_hyperparameter_tuning_job(
        &self,
        _req: crate::model::CreateHyperparameterTuningJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::HyperparameterTuningJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CreateHyperparameterTuningJob")
    }

    /// Implements [super::client::JobService::get_hyperparameter_tuning_job].
    fn get_hyperparameter_tuning_job(
        &self,
        _req: crate::model::GetHyperparameterTuningJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::HyperparameterTuningJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetHyperparameterTuningJob")
    }

    /// Implements [super::client::JobService::list_hyperparameter_tuning_jobs].
    fn list_hyperparameter_tuning_jobs(
        &self,
        _req: crate::model::ListHyperparameterTuningJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListHyperparameterTuningJobsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListHyperparameterTuningJobs")
    }

    /// Implements [super::client::JobService::delete_hyperparameter_tuning_job].
    fn delete_hyperparameter_tuning_job(
        &self,
        _req: crate::model::DeleteHyperparameterTuningJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteHyperparameterTuningJob")
    }

    /// Implements [super::client::JobService::cancel_hyperparameter_tuning_job].
    fn cancel_hyperparameter_tuning_job(
        &self,
        _req: crate::model::CancelHyperparameterTuningJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CancelHyperparameterTuningJob")
    }

    /// Implements [super::client::JobService::create_nas_job].
    fn create_nas_job(
        &self,
        _req: crate::model::CreateNasJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::NasJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CreateNasJob")
    }

    /// Implements [super::client::JobService::get_nas_job].
    fn get_nas_job(
        &self,
        _req: crate::model::GetNasJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::NasJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetNasJob")
    }

    /// Implements [super::client::JobService::list_nas_jobs].
    fn list_nas_jobs(
        &self,
        _req: crate::model::ListNasJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListNasJobsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListNasJobs")
    }

    /// Implements [super::client::JobService::delete_nas_job].
    fn delete_nas_job(
        &self,
        _req: crate::model::DeleteNasJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteNasJob")
    }

    /// Implements [super::client::JobService::cancel_nas_job].
    fn cancel_nas_job(
        &self,
        _req: crate::model::CancelNasJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CancelNasJob")
    }

    /// Implements [super::client::JobService::get_nas_trial_detail].
    fn get_nas_trial_detail(
        &self,
        _req: crate::model::GetNasTrialDetailRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::NasTrialDetail>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetNasTrialDetail")
    }

    /// Implements [super::client::JobService::list_nas_trial_details].
    fn list_nas_trial_details(
        &self,
        _req: crate::model::ListNasTrialDetailsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListNasTrialDetailsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListNasTrialDetails")
    }

    /// Implements [super::client::JobService::create_batch_prediction_job].
    fn create_batch_prediction_job(
        &self,
        _req: crate::model::CreateBatchPredictionJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::BatchPredictionJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CreateBatchPredictionJob")
    }

    /// Implements [super::client::JobService::get_batch_prediction_job].
    fn get_batch_prediction_job(
        &self,
        _req: crate::model::GetBatchPredictionJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::BatchPredictionJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetBatchPredictionJob")
    }

    /// Implements [super::client::JobService::list_batch_prediction_jobs].
    fn list_batch_prediction_jobs(
        &self,
        _req: crate::model::ListBatchPredictionJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListBatchPredictionJobsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListBatchPredictionJobs")
    }

    /// Implements [super::client::JobService::delete_batch_prediction_job].
    fn delete_batch_prediction_job(
        &self,
        _req: crate::model::DeleteBatchPredictionJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteBatchPredictionJob")
    }

    /// Implements [super::client::JobService::cancel_batch_prediction_job].
    fn cancel_batch_prediction_job(
        &self,
        _req: crate::model::CancelBatchPredictionJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CancelBatchPredictionJob")
    }

    /// Implements [super::client::JobService::create_model_deployment_monitoring_job].
    fn create_model_deployment_monitoring_job(
        &self,
        _req: crate::model::CreateModelDeploymentMonitoringJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ModelDeploymentMonitoringJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CreateModelDeploymentMonitoringJob")
    }

    /// Implements [super::client::JobService::search_model_deployment_monitoring_stats_anomalies].
    fn search_model_deployment_monitoring_stats_anomalies(
        &self,
        _req: crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("SearchModelDeploymentMonitoringStatsAnomalies")
    }

    /// Implements [super::client::JobService::get_model_deployment_monitoring_job].
    fn get_model_deployment_monitoring_job(
        &self,
        _req: crate::model::GetModelDeploymentMonitoringJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ModelDeploymentMonitoringJob>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetModelDeploymentMonitoringJob")
    }

    /// Implements [super::client::JobService::list_model_deployment_monitoring_jobs].
    fn list_model_deployment_monitoring_jobs(
        &self,
        _req: crate::model::ListModelDeploymentMonitoringJobsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListModelDeploymentMonitoringJobsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListModelDeploymentMonitoringJobs")
    }

    /// Implements [super::client::JobService::delete_model_deployment_monitoring_job].
    fn delete_model_deployment_monitoring_job(
        &self,
        _req: crate::model::DeleteModelDeploymentMonitoringJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteModelDeploymentMonitoringJob")
    }

    /// Implements [super::client::JobService::update_model_deployment_monitoring_job].
    fn update_model_deployment_monitoring_job(
        &self,
        _req: crate::model::UpdateModelDeploymentMonitoringJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("UpdateModelDeploymentMonitoringJob")
    }

    /// Implements [super::client::JobService::pause_model_deployment_monitoring_job].
    fn pause_model_deployment_monitoring_job(
        &self,
        _req: crate::model::PauseModelDeploymentMonitoringJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("PauseModelDeploymentMonitoringJob")
    }

    /// Implements [super::client::JobService::resume_model_deployment_monitoring_job].
    fn resume_model_deployment_monitoring_job(
        &self,
        _req: crate::model::ResumeModelDeploymentMonitoringJobRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ResumeModelDeploymentMonitoringJob")
    }

    /// Implements [super::client::JobService::list_locations].
    fn list_locations(
        &self,
        _req: location::model::ListLocationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<location::model::ListLocationsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListLocations")
    }

    /// Implements [super::client::JobService::get_location].
    fn get_location(
        &self,
        _req: location::model::GetLocationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<location::model::Location>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetLocation")
    }

    /// Implements [super::client::JobService::set_iam_policy].
    fn set_iam_policy(
        &self,
        _req: iam_v1::model::SetIamPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<iam_v1::model::Policy>>> + Send {
        gaxi::unimplemented::unimplemented_stub("SetIamPolicy")
    }

    /// Implements [super::client::JobService::get_iam_policy].
    fn get_iam_policy(
        &self,
        _req: iam_v1::model::GetIamPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<iam_v1::model::Policy>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetIamPolicy")
    }

    /// Implements [super::client::JobService::test_iam_permissions].
    fn test_iam_permissions(
        &self,
        _req: iam_v1::model::TestIamPermissionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<iam_v1::model::TestIamPermissionsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("TestIamPermissions")
    }

    /// Implements [super::client::JobService::list_operations].
    fn list_operations(
        &self,
        _req: longrunning::model::ListOperationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::ListOperationsResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListOperations")
    }

    /// Implements [super::client::JobService::get_operation].
    fn get_operation(
        &self,
        _req: longrunning::model::GetOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetOperation")
    }

    /// Implements [super::client::JobService::delete_operation].
    fn delete_operation(
        &self,
        _req: longrunning::model::DeleteOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteOperation")
    }

    /// Implements [super::client::JobService::cancel_operation].
    fn cancel_operation(
        &self,
        _req: longrunning::model::CancelOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub("CancelOperation")
    }

    /// Implements [super::client::JobService::wait_operation].
    fn wait_operation(
        &self,
        _req: longrunning::model::WaitOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub("WaitOperation")
    }

    /// Returns the polling error policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_error_policy(
        &self,
        _options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        std::sync::Arc::new(gax::polling_error_policy::Aip194Strict)
    }

    /// Returns the polling backoff policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        _options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        std::sync::Arc::new(gax::exponential_backoff::ExponentialBackoff::default())
    }
}
