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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use crate::transport::Transport;
use auth::credentials::service_account;
use gax::client_builder::Error as BuilderError;
use std::path::Path;
use std::sync::Arc;

/// Implements a client for the Vertex AI API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use vertex_jobs_v1::client::JobService;
/// let client = JobService::builder().build().await?;
/// let job = client
///     .get_custom_job()
///     .set_name("projects/my-project/locations/us-central1/customJobs/my-job")
///     .send()
///     .await?;
/// println!("{job:?}");
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// A service for creating and managing Vertex AI's jobs.
///
/// # Configuration
///
/// To configure `JobService` use the `with_*` methods in the type returned
/// by [builder()][JobService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://aiplatform.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_transport()]: selects `"grpc"` (the default), `"grpc_asyncio"`,
///   `"rest"`, or a pre-built [Transport].
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::job_service::ClientBuilder::with_endpoint
/// [with_transport()]: super::builder::job_service::ClientBuilder::with_transport
/// [with_credentials()]: super::builder::job_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `JobService` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `JobService` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct JobService {
    inner: Arc<dyn super::stub::dynamic::JobService>,
    transport: Option<Transport>,
}

impl JobService {
    /// Returns a builder for [JobService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use vertex_jobs_v1::client::JobService;
    /// let client = JobService::builder().with_transport("rest").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::job_service::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::job_service::client::Factory)
    }

    /// Returns a builder using the service account key in `info`.
    ///
    /// The key is parsed immediately, malformed keys are reported here. The
    /// credentials are created by `build()`, with the scopes, quota project
    /// and JWT settings configured on the returned builder.
    ///
    /// ```
    /// # use vertex_jobs_v1::client::JobService;
    /// # async fn sample(key: serde_json::Value) -> anyhow::Result<()> {
    /// let client = JobService::from_service_account_info(key)?.build().await?;
    /// # Ok(()) }
    /// ```
    pub fn from_service_account_info(
        info: serde_json::Value,
    ) -> gax::client_builder::Result<super::builder::job_service::ClientBuilder> {
        service_account::Builder::new(info.clone())
            .build()
            .map_err(BuilderError::cred)?;
        Ok(Self::builder().with_credentials_info(info))
    }

    /// Returns a builder using the service account key file at `path`.
    ///
    /// The file is read when the client is built.
    pub fn from_service_account_file<P: AsRef<Path>>(
        path: P,
    ) -> super::builder::job_service::ClientBuilder {
        Self::builder().with_credentials_file(path.as_ref())
    }

    /// An alias of [from_service_account_file][JobService::from_service_account_file].
    pub fn from_service_account_json<P: AsRef<Path>>(
        path: P,
    ) -> super::builder::job_service::ClientBuilder {
        Self::from_service_account_file(path)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::JobService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            transport: None,
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let tracing = gaxi::options::tracing_enabled(&config);
        let transport = Transport::from_config(config).await?;
        let inner: Arc<dyn super::stub::dynamic::JobService> = if tracing {
            Arc::new(super::tracing::JobService::new(transport.clone()))
        } else {
            Arc::new(transport.clone())
        };
        Ok(Self {
            inner,
            transport: Some(transport),
        })
    }

    /// The transport used by this client.
    ///
    /// Clients created with [from_stub][JobService::from_stub] have no
    /// transport.
    pub fn transport(&self) -> Option<&Transport> {
        self.transport.as_ref()
    }

    /// Closes the transport of this client.
    ///
    /// Pending calls are not interrupted. New calls fail with a transport
    /// error, on this client and on any other client sharing the transport.
    pub async fn close(&self) {
        if let Some(transport) = &self.transport {
            transport.close().await;
        }
    }

    /// Creates a CustomJob.
    ///
    /// A created CustomJob right away will be attempted to be run.
    pub fn create_custom_job(&self) -> super::builder::job_service::CreateCustomJob {
        super::builder::job_service::CreateCustomJob::new(self.inner.clone())
    }

    /// Gets a CustomJob.
    pub fn get_custom_job(&self) -> super::builder::job_service::GetCustomJob {
        super::builder::job_service::GetCustomJob::new(self.inner.clone())
    }

    /// Lists CustomJobs in a Location.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_custom_jobs(&self) -> super::builder::job_service::ListCustomJobs {
        super::builder::job_service::ListCustomJobs::new(self.inner.clone())
    }

    /// Deletes a CustomJob.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `.poller()` on the returned builder to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn delete_custom_job(&self) -> super::builder::job_service::DeleteCustomJob {
        super::builder::job_service::DeleteCustomJob::new(self.inner.clone())
    }

    /// Cancels a CustomJob.
    ///
    /// Starts asynchronous cancellation on the job. The server makes a best
    /// effort to cancel the job, but success is not guaranteed. On successful
    /// cancellation the job is not deleted; instead its state is set to
    /// `CANCELLED`.
    pub fn cancel_custom_job(&self) -> super::builder::job_service::CancelCustomJob {
        super::builder::job_service::CancelCustomJob::new(self.inner.clone())
    }

    /// Creates a DataLabelingJob.
    pub fn create_data_labeling_job(&self) -> super::builder::job_service::CreateDataLabelingJob {
        super::builder::job_service::CreateDataLabelingJob::new(self.inner.clone())
    }

    /// Gets a DataLabelingJob.
    pub fn get_data_labeling_job(&self) -> super::builder::job_service::GetDataLabelingJob {
        super::builder::job_service::GetDataLabelingJob::new(self.inner.clone())
    }

    /// Lists DataLabelingJobs in a Location.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_data_labeling_jobs(&self) -> super::builder::job_service::ListDataLabelingJobs {
        super::builder::job_service::ListDataLabelingJobs::new(self.inner.clone())
    }

    /// Deletes a DataLabelingJob.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `.poller()` on the returned builder to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn delete_data_labeling_job(&self) -> super::builder::job_service::DeleteDataLabelingJob {
        super::builder::job_service::DeleteDataLabelingJob::new(self.inner.clone())
    }

    /// Cancels a DataLabelingJob.
    ///
    /// Starts asynchronous cancellation on the job. The server makes a best
    /// effort to cancel the job, but success is not guaranteed. On successful
    /// cancellation the job is not deleted; instead its state is set to
    /// `CANCELLED`.
    pub fn cancel_data_labeling_job(&self) -> super::builder::job_service::CancelDataLabelingJob {
        super::builder::job_service::CancelDataLabelingJob::new(self.inner.clone())
    }

    /// Creates a HyperparameterTuningJob.
    pub fn create_hyperparameter_tuning_job(&self) -> super::builder::job_service::CreateHyperparameterTuningJob {
        super::builder::job_service::CreateHyperparameterTuningJob::new(self.inner.clone())
    }

    /// Gets a HyperparameterTuningJob.
    pub fn get_hyperparameter_tuning_job(&self) -> super::builder::job_service::GetHyperparameterTuningJob {
        super::builder::job_service::GetHyperparameterTuningJob::new(self.inner.clone())
    }

    /// Lists HyperparameterTuningJobs in a Location.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_hyperparameter_tuning_jobs(&self) -> super::builder::job_service::ListHyperparameterTuningJobs {
        super::builder::job_service::ListHyperparameterTuningJobs::new(self.inner.clone())
    }

    /// Deletes a HyperparameterTuningJob.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `.poller()` on the returned builder to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn delete_hyperparameter_tuning_job(&self) -> super::builder::job_service::DeleteHyperparameterTuningJob {
        super::builder::job_service::DeleteHyperparameterTuningJob::new(self.inner.clone())
    }

    /// Cancels a HyperparameterTuningJob.
    ///
    /// Starts asynchronous cancellation on the job. The server makes a best
    /// effort to cancel the job, but success is not guaranteed. On successful
    /// cancellation the job is not deleted; instead its state is set to
    /// `CANCELLED`.
    pub fn cancel_hyperparameter_tuning_job(&self) -> super::builder::job_service::CancelHyperparameterTuningJob {
        super::builder::job_service::CancelHyperparameterTuningJob::new(self.inner.clone())
    }

    /// Creates a NasJob.
    pub fn create_nas_job(&self) -> super::builder::job_service::CreateNasJob {
        super::builder::job_service::CreateNasJob::new(self.inner.clone())
    }

    /// Gets a NasJob.
    pub fn get_nas_job(&self) -> super::builder::job_service::GetNasJob {
        super::builder::job_service::GetNasJob::new(self.inner.clone())
    }

    /// Lists NasJobs in a Location.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_nas_jobs(&self) -> super::builder::job_service::ListNasJobs {
        super::builder::job_service::ListNasJobs::new(self.inner.clone())
    }

    /// Deletes a NasJob.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `.poller()` on the returned builder to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn delete_nas_job(&self) -> super::builder::job_service::DeleteNasJob {
        super::builder::job_service::DeleteNasJob::new(self.inner.clone())
    }

    /// Cancels a NasJob.
    ///
    /// Starts asynchronous cancellation on the job. The server makes a best
    /// effort to cancel the job, but success is not guaranteed. On successful
    /// cancellation the job is not deleted; instead its state is set to
    /// `CANCELLED`.
    pub fn cancel_nas_job(&self) -> super::builder::job_service::CancelNasJob {
        super::builder::job_service::CancelNasJob::new(self.inner.clone())
    }

    /// Gets a NasTrialDetail.
    pub fn get_nas_trial_detail(&self) -> super::builder::job_service::GetNasTrialDetail {
        super::builder::job_service::GetNasTrialDetail::new(self.inner.clone())
    }

    /// List top NasTrialDetails of a NasJob.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_nas_trial_details(&self) -> super::builder::job_service::ListNasTrialDetails {
        super::builder::job_service::ListNasTrialDetails::new(self.inner.clone())
    }

    /// Creates a BatchPredictionJob.
    pub fn create_batch_prediction_job(&self) -> super::builder::job_service::CreateBatchPredictionJob {
        super::builder::job_service::CreateBatchPredictionJob::new(self.inner.clone())
    }

    /// Gets a BatchPredictionJob.
    pub fn get_batch_prediction_job(&self) -> super::builder::job_service::GetBatchPredictionJob {
        super::builder::job_service::GetBatchPredictionJob::new(self.inner.clone())
    }

    /// Lists BatchPredictionJobs in a Location.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_batch_prediction_jobs(&self) -> super::builder::job_service::ListBatchPredictionJobs {
        super::builder::job_service::ListBatchPredictionJobs::new(self.inner.clone())
    }

    /// Deletes a BatchPredictionJob.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `.poller()` on the returned builder to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn delete_batch_prediction_job(&self) -> super::builder::job_service::DeleteBatchPredictionJob {
        super::builder::job_service::DeleteBatchPredictionJob::new(self.inner.clone())
    }

    /// Cancels a BatchPredictionJob.
    ///
    /// Starts asynchronous cancellation on the job. The server makes a best
    /// effort to cancel the job, but success is not guaranteed. On successful
    /// cancellation the job is not deleted; instead its state is set to
    /// `CANCELLED`.
    pub fn cancel_batch_prediction_job(&self) -> super::builder::job_service::CancelBatchPredictionJob {
        super::builder::job_service::CancelBatchPredictionJob::new(self.inner.clone())
    }

    /// Creates a ModelDeploymentMonitoringJob.
    pub fn create_model_deployment_monitoring_job(&self) -> super::builder::job_service::CreateModelDeploymentMonitoringJob {
        super::builder::job_service::CreateModelDeploymentMonitoringJob::new(self.inner.clone())
    }

    /// Searches Model Monitoring Statistics generated within a given time window.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn search_model_deployment_monitoring_stats_anomalies(&self) -> super::builder::job_service::SearchModelDeploymentMonitoringStatsAnomalies {
        super::builder::job_service::SearchModelDeploymentMonitoringStatsAnomalies::new(self.inner.clone())
    }

    /// Gets a ModelDeploymentMonitoringJob.
    pub fn get_model_deployment_monitoring_job(&self) -> super::builder::job_service::GetModelDeploymentMonitoringJob {
        super::builder::job_service::GetModelDeploymentMonitoringJob::new(self.inner.clone())
    }

    /// Lists ModelDeploymentMonitoringJobs in a Location.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_model_deployment_monitoring_jobs(&self) -> super::builder::job_service::ListModelDeploymentMonitoringJobs {
        super::builder::job_service::ListModelDeploymentMonitoringJobs::new(self.inner.clone())
    }

    /// Deletes a ModelDeploymentMonitoringJob.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `.poller()` on the returned builder to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn delete_model_deployment_monitoring_job(&self) -> super::builder::job_service::DeleteModelDeploymentMonitoringJob {
        super::builder::job_service::DeleteModelDeploymentMonitoringJob::new(self.inner.clone())
    }

    /// Updates a ModelDeploymentMonitoringJob.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `.poller()` on the returned builder to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn update_model_deployment_monitoring_job(&self) -> super::builder::job_service::UpdateModelDeploymentMonitoringJob {
        super::builder::job_service::UpdateModelDeploymentMonitoringJob::new(self.inner.clone())
    }

    /// Pauses a ModelDeploymentMonitoringJob. If the job is running, the server
    /// makes a best effort to cancel the job. Will mark
    /// [ModelDeploymentMonitoringJob.state][crate::model::ModelDeploymentMonitoringJob::state]
    /// to `PAUSED`.
    pub fn pause_model_deployment_monitoring_job(&self) -> super::builder::job_service::PauseModelDeploymentMonitoringJob {
        super::builder::job_service::PauseModelDeploymentMonitoringJob::new(self.inner.clone())
    }

    /// Resumes a paused ModelDeploymentMonitoringJob. It will start to run from
    /// next scheduled time. A deleted ModelDeploymentMonitoringJob can't be
    /// resumed.
    pub fn resume_model_deployment_monitoring_job(&self) -> super::builder::job_service::ResumeModelDeploymentMonitoringJob {
        super::builder::job_service::ResumeModelDeploymentMonitoringJob::new(self.inner.clone())
    }

    /// Lists information about the supported locations for this service.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_locations(&self) -> super::builder::job_service::ListLocations {
        super::builder::job_service::ListLocations::new(self.inner.clone())
    }

    /// Gets information about a location.
    pub fn get_location(&self) -> super::builder::job_service::GetLocation {
        super::builder::job_service::GetLocation::new(self.inner.clone())
    }

    /// Sets the access control policy on the specified resource. Replaces
    /// any existing policy.
    pub fn set_iam_policy(&self) -> super::builder::job_service::SetIamPolicy {
        super::builder::job_service::SetIamPolicy::new(self.inner.clone())
    }

    /// Gets the access control policy for a resource. Returns an empty policy
    /// if the resource exists and does not have a policy set.
    pub fn get_iam_policy(&self) -> super::builder::job_service::GetIamPolicy {
        super::builder::job_service::GetIamPolicy::new(self.inner.clone())
    }

    /// Returns permissions that a caller has on the specified resource. If the
    /// resource does not exist, this will return an empty set of
    /// permissions, not a `NOT_FOUND` error.
    pub fn test_iam_permissions(&self) -> super::builder::job_service::TestIamPermissions {
        super::builder::job_service::TestIamPermissions::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    ///
    /// Use `.by_page()` or `.by_item()` on the returned builder to iterate
    /// over every page of the results.
    pub fn list_operations(&self) -> super::builder::job_service::ListOperations {
        super::builder::job_service::ListOperations::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn get_operation(&self) -> super::builder::job_service::GetOperation {
        super::builder::job_service::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn delete_operation(&self) -> super::builder::job_service::DeleteOperation {
        super::builder::job_service::DeleteOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn cancel_operation(&self) -> super::builder::job_service::CancelOperation {
        super::builder::job_service::CancelOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn wait_operation(&self) -> super::builder::job_service::WaitOperation {
        super::builder::job_service::WaitOperation::new(self.inner.clone())
    }
}
