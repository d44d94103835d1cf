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

//! The transports of the Job Service.
//!
//! A [Transport] sends the RPCs of a client, either over the binary RPC
//! protocol or as REST requests. It owns the credentials, the resolved
//! endpoint and the channel or HTTP client. Applications rarely use it
//! directly; [JobService::transport][crate::client::JobService::transport]
//! exposes it for introspection, and a pre-built transport can be shared by
//! several clients with `ClientBuilder::with_transport()`.

use crate::method::Method;
use crate::protobuf::Protobuf;
use gax::client_builder::{Error as BuilderError, Result as BuilderResult, TransportArg};
use gax::error::Error;
use gax::interceptor::Interceptor;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::api_header::X_GOOG_API_CLIENT;
use gaxi::endpoint::ServiceEndpoints;
use gaxi::options::{ClientConfig, ClientPolicies, Credentials};
use gaxi::universe::UniverseValidator;
use http::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) const ENDPOINTS: ServiceEndpoints = ServiceEndpoints {
    default_endpoint: "aiplatform.googleapis.com",
    mtls_endpoint: "aiplatform.mtls.googleapis.com",
    endpoint_template: "aiplatform.{UNIVERSE_DOMAIN}",
};

/// The OAuth2 scopes requested when the application does not set any.
pub const DEFAULT_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/cloud-platform.read-only",
];

/// The wire protocol of a [Transport].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// The binary RPC protocol.
    #[default]
    Grpc,
    /// The binary RPC protocol, requested with its asynchronous name.
    ///
    /// All transports are asynchronous in this library, this kind behaves
    /// exactly as [TransportKind::Grpc].
    GrpcAsyncio,
    /// JSON over HTTP/1.1.
    Rest,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grpc => "grpc",
            Self::GrpcAsyncio => "grpc_asyncio",
            Self::Rest => "rest",
        }
    }

    fn uses_grpc(&self) -> bool {
        matches!(self, Self::Grpc | Self::GrpcAsyncio)
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = UnknownTransport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grpc" => Ok(Self::Grpc),
            "grpc_asyncio" => Ok(Self::GrpcAsyncio),
            "rest" => Ok(Self::Rest),
            _ => Err(UnknownTransport(s.to_string())),
        }
    }
}

/// The transport name is not one of the supported names.
#[derive(Debug, thiserror::Error)]
#[error("unknown transport `{0}`, must be `grpc`, `grpc_asyncio` or `rest`")]
pub struct UnknownTransport(String);

/// The transport instance given to the client builder has the wrong type.
#[derive(Debug, thiserror::Error)]
#[error("the transport instance is not a Job Service transport")]
pub struct ForeignTransport;

/// The RPC was started after the transport was closed.
#[derive(Debug, thiserror::Error)]
#[error("the transport is closed")]
pub struct TransportClosed;

/// Sends the RPCs of a [JobService][crate::client::JobService] client.
///
/// Cloning a transport is cheap, all the clones share the same channel and
/// closing any of them closes all of them.
#[derive(Clone, Debug)]
pub struct Transport {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    kind: TransportKind,
    executor: Executor,
    validator: UniverseValidator,
    interceptor: Option<Arc<dyn Interceptor>>,
    owns_channel: bool,
    closed: AtomicBool,
}

#[derive(Debug)]
enum Executor {
    Grpc(gaxi::grpc::Client),
    Rest(gaxi::http::ReqwestClient),
}

impl Transport {
    /// Returns a builder for a transport.
    ///
    /// The builder accepts the same configuration as the client builder. Use
    /// the resulting transport with `with_transport()` to share it.
    ///
    /// ```
    /// # use vertex_jobs_v1::client::JobService;
    /// # use vertex_jobs_v1::transport::Transport;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let transport = Transport::builder().with_transport("rest").build().await?;
    /// let client = JobService::builder().with_transport(transport).build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> TransportBuilder {
        gax::client_builder::internal::new_builder(Factory)
    }

    /// Creates the transport selected by `config`.
    ///
    /// A pre-built transport is used as-is. It already carries its own
    /// credentials, setting any credential option as well is an error.
    pub(crate) async fn from_config(config: ClientConfig) -> BuilderResult<Self> {
        match config.transport.clone() {
            Some(TransportArg::Instance(instance)) => {
                check_conflicts(&config)?;
                instance
                    .downcast_ref::<Transport>()
                    .cloned()
                    .ok_or_else(|| BuilderError::config(ForeignTransport))
            }
            Some(TransportArg::Name(name)) => {
                let kind = name.parse::<TransportKind>().map_err(BuilderError::config)?;
                Self::new(kind, config)
            }
            None => Self::new(TransportKind::default(), config),
        }
    }

    /// Creates a new transport of the given kind.
    ///
    /// Reads the environment, resolves the endpoint and creates the
    /// credentials. Must be called within a `tokio` runtime.
    pub(crate) fn new(kind: TransportKind, config: ClientConfig) -> BuilderResult<Self> {
        let env = gaxi::environment::EnvironmentState::from_env()?;
        let endpoint = gaxi::endpoint::resolve(&config, &env, &ENDPOINTS)?;
        let audience = gaxi::host::audience(&endpoint.host)?;
        let credentials =
            gaxi::credentials::make_credentials(&config, &audience, &DEFAULT_SCOPES)?;
        let client_cert = endpoint
            .client_cert_source
            .as_ref()
            .map(|source| source())
            .transpose()
            .map_err(BuilderError::transport)?;
        let executor = if kind.uses_grpc() {
            Executor::Grpc(gaxi::grpc::Client::new(
                &config,
                &endpoint.host,
                credentials,
                client_cert,
            )?)
        } else {
            Executor::Rest(gaxi::http::ReqwestClient::new(
                &config,
                &endpoint.host,
                credentials,
                client_cert,
            )?)
        };
        let transport = Self {
            inner: Arc::new(Inner {
                kind,
                executor,
                validator: UniverseValidator::new(endpoint.universe_domain),
                interceptor: config.interceptor.clone(),
                owns_channel: config.channel.is_none(),
                closed: AtomicBool::new(false),
            }),
        };
        tracing::debug!("created {kind} transport for {}", transport.host());
        Ok(transport)
    }

    pub fn kind(&self) -> TransportKind {
        self.inner.kind
    }

    /// The host receiving the RPCs.
    ///
    /// For the binary RPC transports this is `host:port`, for REST it is the
    /// origin, e.g. `https://aiplatform.googleapis.com`.
    pub fn host(&self) -> &str {
        match &self.inner.executor {
            Executor::Grpc(client) => client.host(),
            Executor::Rest(client) => client.host(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        match &self.inner.executor {
            Executor::Grpc(client) => client.credentials(),
            Executor::Rest(client) => client.credentials(),
        }
    }

    /// The universe domain configured for this transport.
    pub fn universe_domain(&self) -> &str {
        self.inner.validator.universe_domain()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Returns a client for the Operations mixin, sharing this transport.
    pub fn operations_client(&self) -> OperationsClient {
        OperationsClient {
            transport: self.clone(),
        }
    }

    /// Closes the transport.
    ///
    /// Only the first call has any effect. Channels injected with
    /// `with_channel()` belong to the application and stay open.
    pub async fn close(&self) {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!("the {} transport is already closed", self.inner.kind);
            return;
        }
        if let Executor::Grpc(client) = &self.inner.executor {
            if self.inner.owns_channel {
                client.channel().close().await;
            }
        }
        tracing::debug!("closed the {} transport", self.inner.kind);
    }

    fn policies(&self) -> &ClientPolicies {
        match &self.inner.executor {
            Executor::Grpc(client) => client.policies(),
            Executor::Rest(client) => client.policies(),
        }
    }

    /// Sends a single RPC.
    ///
    /// Validates the universe domain on the first call, adds the routing and
    /// telemetry headers, and sends the request over the configured protocol.
    /// The gRPC transport encodes the messages with protobuf, the REST
    /// transport with JSON.
    pub(crate) async fn invoke<Req, Resp>(
        &self,
        method: Method,
        request: Req,
        options: RequestOptions,
    ) -> gax::Result<Response<Resp>>
    where
        Req: Serialize + Any + Send + Protobuf,
        Resp: DeserializeOwned + Default + Any + Send + Protobuf,
    {
        if self.is_closed() {
            return Err(Error::transport(HeaderMap::new(), TransportClosed));
        }
        self.inner
            .validator
            .validate(Some(self.credentials()))
            .await?;
        let options =
            gax::options::internal::set_default_idempotency(options, method.is_idempotent());
        let headers = routing_headers(method, &request)?;
        match &self.inner.executor {
            Executor::Grpc(client) => {
                let mut headers = headers;
                headers.insert(X_GOOG_API_CLIENT, telemetry(&crate::info::X_GOOG_API_CLIENT_GRPC)?);
                let request = request.to_protobuf().map_err(Error::ser)?;
                let response = client
                    .execute::<Req::Proto, Resp::Proto>(method.grpc_path(), &request, headers, options)
                    .await?;
                let (parts, body) = response.into_parts();
                let body = Resp::from_protobuf(body).map_err(Error::deser)?;
                Ok(Response::from_parts(parts, body))
            }
            Executor::Rest(client) => self.rest(client, method, request, headers, options).await,
        }
    }

    async fn rest<Req, Resp>(
        &self,
        client: &gaxi::http::ReqwestClient,
        method: Method,
        mut request: Req,
        mut headers: HeaderMap,
        options: RequestOptions,
    ) -> gax::Result<Response<Resp>>
    where
        Req: Serialize + Any + Send,
        Resp: DeserializeOwned + Default + Any + Send,
    {
        headers.insert(X_GOOG_API_CLIENT, telemetry(&crate::info::X_GOOG_API_CLIENT_REST)?);
        if let Some(interceptor) = &self.inner.interceptor {
            interceptor.pre_call(method.name(), &mut request, &mut headers)?;
        }
        let value = serde_json::to_value(&request).map_err(Error::ser)?;
        let transcoded =
            gaxi::path_parameter::transcode(method.name(), method.http_rules(), &value)
                .map_err(Error::binding)?;
        let builder = client.builder(transcoded.method, transcoded.path);
        let builder = gaxi::query_parameter::add_all(builder, transcoded.query).headers(headers);
        let response = client
            .execute::<serde_json::Value, Resp>(builder, transcoded.body, options)
            .await?;
        match &self.inner.interceptor {
            None => Ok(response),
            Some(interceptor) => {
                let (parts, mut body) = response.into_parts();
                interceptor.post_call(method.name(), &mut body)?;
                Ok(Response::from_parts(parts, body))
            }
        }
    }
}

/// Computes the `x-goog-request-params` header of a request.
///
/// The header is sent even if the routing field is empty.
fn routing_headers<Req: Serialize>(method: Method, request: &Req) -> gax::Result<HeaderMap> {
    let value = serde_json::to_value(request).map_err(Error::ser)?;
    let field = method.routing_field();
    let routing = gaxi::path_parameter::lookup(&value, field)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    let mut headers = HeaderMap::new();
    gaxi::routing_parameter::insert(&mut headers, &[(field, routing)])?;
    Ok(headers)
}

fn telemetry(value: &str) -> gax::Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(Error::ser)
}

fn check_conflicts(config: &ClientConfig) -> BuilderResult<()> {
    let options = [
        ("credentials", config.cred.is_some()),
        ("credentials_file", config.credentials_file.is_some()),
        ("scopes", config.scopes.is_some()),
        ("api_key", config.api_key.is_some()),
    ];
    match options.into_iter().find(|(_, set)| *set) {
        Some((option, _)) => Err(BuilderError::transport_conflict(option)),
        None => Ok(()),
    }
}

impl From<Transport> for TransportArg {
    fn from(value: Transport) -> Self {
        TransportArg::Instance(Arc::new(value))
    }
}

/// A builder for [Transport].
pub type TransportBuilder = gax::client_builder::ClientBuilder<Factory, Credentials>;

#[doc(hidden)]
#[derive(Debug)]
pub struct Factory;

impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = Transport;
    type Credentials = Credentials;
    async fn build(self, config: ClientConfig) -> BuilderResult<Self::Client> {
        Transport::from_config(config).await
    }
}

/// Sends the RPCs of the Operations mixin over a [Transport].
///
/// Obtained from [Transport::operations_client]. The long-running operations
/// started by the client are polled through the same RPCs.
#[derive(Clone, Debug)]
pub struct OperationsClient {
    transport: Transport,
}

impl OperationsClient {
    pub async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::ListOperationsResponse>> {
        self.transport
            .invoke(Method::ListOperations, req, options)
            .await
    }

    pub async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.transport.invoke(Method::GetOperation, req, options).await
    }

    pub async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.transport
            .invoke(Method::DeleteOperation, req, options)
            .await
    }

    pub async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.transport
            .invoke(Method::CancelOperation, req, options)
            .await
    }

    /// Waits until the operation completes or the server-side timeout elapses.
    ///
    /// Returns the operation in either case, check `done` in the result.
    pub async fn wait_operation(
        &self,
        req: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.transport.invoke(Method::WaitOperation, req, options).await
    }
}

impl crate::stub::JobService for Transport {
    async fn create_custom_job(
        &self,
        req: crate::model::CreateCustomJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::CustomJob>> {
        self.invoke(Method::CreateCustomJob, req, options).await
    }

    async fn get_custom_job(
        &self,
        req: crate::model::GetCustomJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::CustomJob>> {
        self.invoke(Method::GetCustomJob, req, options).await
    }

    async fn list_custom_jobs(
        &self,
        req: crate::model::ListCustomJobsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ListCustomJobsResponse>> {
        self.invoke(Method::ListCustomJobs, req, options).await
    }

    async fn delete_custom_job(
        &self,
        req: crate::model::DeleteCustomJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::DeleteCustomJob, req, options).await
    }

    async fn cancel_custom_job(
        &self,
        req: crate::model::CancelCustomJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::CancelCustomJob, req, options).await
    }

    async fn create_data_labeling_job(
        &self,
        req: crate::model::CreateDataLabelingJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::DataLabelingJob>> {
        self.invoke(Method::CreateDataLabelingJob, req, options).await
    }

    async fn get_data_labeling_job(
        &self,
        req: crate::model::GetDataLabelingJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::DataLabelingJob>> {
        self.invoke(Method::GetDataLabelingJob, req, options).await
    }

    async fn list_data_labeling_jobs(
        &self,
        req: crate::model::ListDataLabelingJobsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ListDataLabelingJobsResponse>> {
        self.invoke(Method::ListDataLabelingJobs, req, options).await
    }

    async fn delete_data_labeling_job(
        &self,
        req: crate::model::DeleteDataLabelingJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::DeleteDataLabelingJob, req, options).await
    }

    async fn cancel_data_labeling_job(
        &self,
        req: crate::model::CancelDataLabelingJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::CancelDataLabelingJob, req, options).await
    }

    async fn create_hyperparameter_tuning_job(
        &self,
        req: crate::model::CreateHyperparameterTuningJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::HyperparameterTuningJob>> {
        self.invoke(Method::CreateHyperparameterTuningJob, req, options).await
    }

    async fn get_hyperparameter_tuning_job(
        &self,
        req: crate::model::GetHyperparameterTuningJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::HyperparameterTuningJob>> {
        self.invoke(Method::GetHyperparameterTuningJob, req, options).await
    }

    async fn list_hyperparameter_tuning_jobs(
        &self,
        req: crate::model::ListHyperparameterTuningJobsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ListHyperparameterTuningJobsResponse>> {
        self.invoke(Method::ListHyperparameterTuningJobs, req, options).await
    }

    async fn delete_hyperparameter_tuning_job(
        &self,
        req: crate::model::DeleteHyperparameterTuningJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::DeleteHyperparameterTuningJob, req, options).await
    }

    async fn cancel_hyperparameter_tuning_job(
        &self,
        req: crate::model::CancelHyperparameterTuningJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::CancelHyperparameterTuningJob, req, options).await
    }

    async fn create_nas_job(
        &self,
        req: crate::model::CreateNasJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::NasJob>> {
        self.invoke(Method::CreateNasJob, req, options).await
    }

    async fn get_nas_job(
        &self,
        req: crate::model::GetNasJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::NasJob>> {
        self.invoke(Method::GetNasJob, req, options).await
    }

    async fn list_nas_jobs(
        &self,
        req: crate::model::ListNasJobsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ListNasJobsResponse>> {
        self.invoke(Method::ListNasJobs, req, options).await
    }

    async fn delete_nas_job(
        &self,
        req: crate::model::DeleteNasJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::DeleteNasJob, req, options).await
    }

    async fn cancel_nas_job(
        &self,
        req: crate::model::CancelNasJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::CancelNasJob, req, options).await
    }

    async fn get_nas_trial_detail(
        &self,
        req: crate::model::GetNasTrialDetailRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::NasTrialDetail>> {
        self.invoke(Method::GetNasTrialDetail, req, options).await
    }

    async fn list_nas_trial_details(
        &self,
        req: crate::model::ListNasTrialDetailsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ListNasTrialDetailsResponse>> {
        self.invoke(Method::ListNasTrialDetails, req, options).await
    }

    async fn create_batch_prediction_job(
        &self,
        req: crate::model::CreateBatchPredictionJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::BatchPredictionJob>> {
        self.invoke(Method::CreateBatchPredictionJob, req, options).await
    }

    async fn get_batch_prediction_job(
        &self,
        req: crate::model::GetBatchPredictionJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::BatchPredictionJob>> {
        self.invoke(Method::GetBatchPredictionJob, req, options).await
    }

    async fn list_batch_prediction_jobs(
        &self,
        req: crate::model::ListBatchPredictionJobsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ListBatchPredictionJobsResponse>> {
        self.invoke(Method::ListBatchPredictionJobs, req, options).await
    }

    async fn delete_batch_prediction_job(
        &self,
        req: crate::model::DeleteBatchPredictionJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::DeleteBatchPredictionJob, req, options).await
    }

    async fn cancel_batch_prediction_job(
        &self,
        req: crate::model::CancelBatchPredictionJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::CancelBatchPredictionJob, req, options).await
    }

    async fn create_model_deployment_monitoring_job(
        &self,
        req: crate::model::CreateModelDeploymentMonitoringJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ModelDeploymentMonitoringJob>> {
        self.invoke(Method::CreateModelDeploymentMonitoringJob, req, options).await
    }

    async fn search_model_deployment_monitoring_stats_anomalies(
        &self,
        req: crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse>> {
        self.invoke(Method::SearchModelDeploymentMonitoringStatsAnomalies, req, options).await
    }

    async fn get_model_deployment_monitoring_job(
        &self,
        req: crate::model::GetModelDeploymentMonitoringJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ModelDeploymentMonitoringJob>> {
        self.invoke(Method::GetModelDeploymentMonitoringJob, req, options).await
    }

    async fn list_model_deployment_monitoring_jobs(
        &self,
        req: crate::model::ListModelDeploymentMonitoringJobsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<crate::model::ListModelDeploymentMonitoringJobsResponse>> {
        self.invoke(Method::ListModelDeploymentMonitoringJobs, req, options).await
    }

    async fn delete_model_deployment_monitoring_job(
        &self,
        req: crate::model::DeleteModelDeploymentMonitoringJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::DeleteModelDeploymentMonitoringJob, req, options).await
    }

    async fn update_model_deployment_monitoring_job(
        &self,
        req: crate::model::UpdateModelDeploymentMonitoringJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::UpdateModelDeploymentMonitoringJob, req, options).await
    }

    async fn pause_model_deployment_monitoring_job(
        &self,
        req: crate::model::PauseModelDeploymentMonitoringJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::PauseModelDeploymentMonitoringJob, req, options).await
    }

    async fn resume_model_deployment_monitoring_job(
        &self,
        req: crate::model::ResumeModelDeploymentMonitoringJobRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::ResumeModelDeploymentMonitoringJob, req, options).await
    }

    async fn list_locations(
        &self,
        req: location::model::ListLocationsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<location::model::ListLocationsResponse>> {
        self.invoke(Method::ListLocations, req, options).await
    }

    async fn get_location(
        &self,
        req: location::model::GetLocationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<location::model::Location>> {
        self.invoke(Method::GetLocation, req, options).await
    }

    async fn set_iam_policy(
        &self,
        req: iam_v1::model::SetIamPolicyRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<iam_v1::model::Policy>> {
        self.invoke(Method::SetIamPolicy, req, options).await
    }

    async fn get_iam_policy(
        &self,
        req: iam_v1::model::GetIamPolicyRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<iam_v1::model::Policy>> {
        self.invoke(Method::GetIamPolicy, req, options).await
    }

    async fn test_iam_permissions(
        &self,
        req: iam_v1::model::TestIamPermissionsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<iam_v1::model::TestIamPermissionsResponse>> {
        self.invoke(Method::TestIamPermissions, req, options).await
    }

    async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::ListOperationsResponse>> {
        self.invoke(Method::ListOperations, req, options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::GetOperation, req, options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::DeleteOperation, req, options).await
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<wkt::Empty>> {
        self.invoke(Method::CancelOperation, req, options).await
    }

    async fn wait_operation(
        &self,
        req: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        self.invoke(Method::WaitOperation, req, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.policies().polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.policies().polling_backoff_policy(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::JobService as _;
    use auth::credentials::anonymous;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn rest_config() -> ClientConfig {
        ClientConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            cred: Some(anonymous::Builder::new().build()),
            ..ClientConfig::default()
        }
    }

    #[test_case("grpc", TransportKind::Grpc)]
    #[test_case("grpc_asyncio", TransportKind::GrpcAsyncio)]
    #[test_case("rest", TransportKind::Rest)]
    fn parse_kind(input: &str, want: TransportKind) -> TestResult {
        let got = input.parse::<TransportKind>()?;
        assert_eq!(got, want);
        assert_eq!(got.as_str(), input);
        assert_eq!(got.to_string(), input);
        Ok(())
    }

    #[test]
    fn parse_kind_unknown() {
        let got = "carrier-pigeon".parse::<TransportKind>();
        let err = got.expect_err("unknown transports are rejected");
        assert!(err.to_string().contains("`carrier-pigeon`"), "{err}");
    }

    #[test]
    fn default_kind() {
        assert_eq!(TransportKind::default(), TransportKind::Grpc);
    }

    #[test_case("credentials")]
    #[test_case("credentials_file")]
    #[test_case("scopes")]
    #[test_case("api_key")]
    fn conflicts(option: &str) {
        let mut config = ClientConfig::default();
        match option {
            "credentials" => config.cred = Some(anonymous::Builder::new().build()),
            "credentials_file" => config.credentials_file = Some("key.json".into()),
            "scopes" => config.scopes = Some(vec!["scope".to_string()]),
            _ => config.api_key = Some("key".to_string()),
        }
        let err = check_conflicts(&config).expect_err("options conflict with an instance");
        assert!(err.is_transport_conflict(), "{err:?}");
        assert!(err.to_string().contains("transport already configured"), "{err}");
        assert!(err.to_string().contains(option), "{err}");
    }

    #[test]
    fn no_conflicts() -> TestResult {
        let config = ClientConfig {
            quota_project: Some("quota".to_string()),
            ..ClientConfig::default()
        };
        check_conflicts(&config)?;
        Ok(())
    }

    fn set_field(request: &mut serde_json::Value, field: &str, value: &str) {
        let mut target = request;
        let mut names = field.split('.').peekable();
        while let Some(name) = names.next() {
            let json_name = name
                .split('_')
                .enumerate()
                .map(|(i, s)| match i {
                    0 => s.to_string(),
                    _ => s[..1].to_uppercase() + &s[1..],
                })
                .collect::<String>();
            if names.peek().is_none() {
                target[json_name.as_str()] = json!(value);
                return;
            }
            target = &mut target[json_name.as_str()];
        }
    }

    #[test]
    fn routing_header_every_method() -> TestResult {
        for method in Method::ALL {
            let mut request = json!({});
            set_field(&mut request, method.routing_field(), "X");
            let headers = routing_headers(method, &request)?;
            let got = headers
                .get(gaxi::routing_parameter::REQUEST_PARAMS)
                .map(|v| v.to_str())
                .transpose()?;
            let want = format!("{}=X", method.routing_field());
            assert_eq!(got, Some(want.as_str()), "{method}");
        }
        Ok(())
    }

    #[test]
    fn routing_header_empty_field() -> TestResult {
        let request = crate::model::GetCustomJobRequest::new();
        let headers = routing_headers(Method::GetCustomJob, &request)?;
        let got = headers.get(gaxi::routing_parameter::REQUEST_PARAMS);
        assert_eq!(got, Some(&HeaderValue::from_static("name=")));
        Ok(())
    }

    #[test]
    fn routing_header_nested() -> TestResult {
        let name = "projects/p/locations/l/modelDeploymentMonitoringJobs/j";
        let request = crate::model::UpdateModelDeploymentMonitoringJobRequest::new()
            .set_model_deployment_monitoring_job(
                crate::model::ModelDeploymentMonitoringJob::new().set_name(name),
            );
        let headers = routing_headers(Method::UpdateModelDeploymentMonitoringJob, &request)?;
        let got = headers
            .get(gaxi::routing_parameter::REQUEST_PARAMS)
            .map(|v| v.to_str())
            .transpose()?;
        let want = format!("model_deployment_monitoring_job.name={name}");
        assert_eq!(got, Some(want.as_str()));
        Ok(())
    }

    #[tokio::test]
    async fn rest_transport() -> TestResult {
        let transport = Transport::new(TransportKind::Rest, rest_config())?;
        assert_eq!(transport.kind(), TransportKind::Rest);
        assert_eq!(transport.host(), "http://127.0.0.1:1");
        assert_eq!(transport.universe_domain(), "googleapis.com");
        assert!(!transport.is_closed());
        Ok(())
    }

    #[tokio::test]
    async fn close_once() -> TestResult {
        let transport = Transport::new(TransportKind::Rest, rest_config())?;
        let clone = transport.clone();
        transport.close().await;
        assert!(transport.is_closed());
        assert!(clone.is_closed());
        // A second close is a no-op.
        clone.close().await;
        assert!(clone.is_closed());
        Ok(())
    }

    #[tokio::test]
    async fn closed_transport_fails_without_io() -> TestResult {
        let transport = Transport::new(TransportKind::Rest, rest_config())?;
        transport.close().await;
        let err = transport
            .get_custom_job(
                crate::model::GetCustomJobRequest::new().set_name("projects/p/locations/l/customJobs/j"),
                RequestOptions::default(),
            )
            .await
            .expect_err("the transport is closed");
        assert!(err.is_transport(), "{err:?}");
        assert!(err.to_string().contains("closed") || format!("{err:?}").contains("closed"), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn binding_error_before_io() -> TestResult {
        let transport = Transport::new(TransportKind::Rest, rest_config())?;
        let err = transport
            .get_custom_job(
                crate::model::GetCustomJobRequest::new().set_name("not-a-job-name"),
                RequestOptions::default(),
            )
            .await
            .expect_err("the request does not match any path");
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn from_config_instance() -> TestResult {
        let transport = Transport::new(TransportKind::Rest, rest_config())?;
        let config = ClientConfig {
            transport: Some(transport.clone().into()),
            ..ClientConfig::default()
        };
        let got = Transport::from_config(config).await?;
        assert!(Arc::ptr_eq(&got.inner, &transport.inner));
        Ok(())
    }

    #[tokio::test]
    async fn from_config_instance_conflict() -> TestResult {
        let transport = Transport::new(TransportKind::Rest, rest_config())?;
        let config = ClientConfig {
            transport: Some(transport.into()),
            api_key: Some("key".to_string()),
            ..ClientConfig::default()
        };
        let err = Transport::from_config(config)
            .await
            .expect_err("the api key conflicts with the transport instance");
        assert!(err.is_transport_conflict(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn from_config_foreign_instance() {
        let config = ClientConfig {
            transport: Some(TransportArg::Instance(Arc::new("not a transport"))),
            ..ClientConfig::default()
        };
        let err = Transport::from_config(config)
            .await
            .expect_err("only Job Service transports are accepted");
        assert!(err.is_config(), "{err:?}");
    }

    #[tokio::test]
    async fn from_config_unknown_name() {
        let config = ClientConfig {
            transport: Some("smoke-signals".into()),
            ..rest_config()
        };
        let err = Transport::from_config(config)
            .await
            .expect_err("unknown transport names are rejected");
        assert!(err.is_config(), "{err:?}");
    }
}
