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

//! The RPCs of the Job Service and the mixins it serves.

use gaxi::path_parameter::HttpRule;

/// Identifies an RPC.
///
/// Every RPC has a single routing field and one or more REST bindings. The
/// binary RPC path is derived from the service and method names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Method {
    // google.cloud.aiplatform.v1.JobService
    CreateCustomJob,
    GetCustomJob,
    ListCustomJobs,
    DeleteCustomJob,
    CancelCustomJob,
    CreateDataLabelingJob,
    GetDataLabelingJob,
    ListDataLabelingJobs,
    DeleteDataLabelingJob,
    CancelDataLabelingJob,
    CreateHyperparameterTuningJob,
    GetHyperparameterTuningJob,
    ListHyperparameterTuningJobs,
    DeleteHyperparameterTuningJob,
    CancelHyperparameterTuningJob,
    CreateNasJob,
    GetNasJob,
    ListNasJobs,
    DeleteNasJob,
    CancelNasJob,
    GetNasTrialDetail,
    ListNasTrialDetails,
    CreateBatchPredictionJob,
    GetBatchPredictionJob,
    ListBatchPredictionJobs,
    DeleteBatchPredictionJob,
    CancelBatchPredictionJob,
    CreateModelDeploymentMonitoringJob,
    SearchModelDeploymentMonitoringStatsAnomalies,
    GetModelDeploymentMonitoringJob,
    ListModelDeploymentMonitoringJobs,
    DeleteModelDeploymentMonitoringJob,
    UpdateModelDeploymentMonitoringJob,
    PauseModelDeploymentMonitoringJob,
    ResumeModelDeploymentMonitoringJob,

    // google.cloud.location.Locations
    ListLocations,
    GetLocation,

    // google.iam.v1.IAMPolicy
    SetIamPolicy,
    GetIamPolicy,
    TestIamPermissions,

    // google.longrunning.Operations
    ListOperations,
    GetOperation,
    DeleteOperation,
    CancelOperation,
    WaitOperation,
}

impl Method {
    /// All the RPCs, in declaration order.
    pub const ALL: [Method; 45] = [
        Method::CreateCustomJob,
        Method::GetCustomJob,
        Method::ListCustomJobs,
        Method::DeleteCustomJob,
        Method::CancelCustomJob,
        Method::CreateDataLabelingJob,
        Method::GetDataLabelingJob,
        Method::ListDataLabelingJobs,
        Method::DeleteDataLabelingJob,
        Method::CancelDataLabelingJob,
        Method::CreateHyperparameterTuningJob,
        Method::GetHyperparameterTuningJob,
        Method::ListHyperparameterTuningJobs,
        Method::DeleteHyperparameterTuningJob,
        Method::CancelHyperparameterTuningJob,
        Method::CreateNasJob,
        Method::GetNasJob,
        Method::ListNasJobs,
        Method::DeleteNasJob,
        Method::CancelNasJob,
        Method::GetNasTrialDetail,
        Method::ListNasTrialDetails,
        Method::CreateBatchPredictionJob,
        Method::GetBatchPredictionJob,
        Method::ListBatchPredictionJobs,
        Method::DeleteBatchPredictionJob,
        Method::CancelBatchPredictionJob,
        Method::CreateModelDeploymentMonitoringJob,
        Method::SearchModelDeploymentMonitoringStatsAnomalies,
        Method::GetModelDeploymentMonitoringJob,
        Method::ListModelDeploymentMonitoringJobs,
        Method::DeleteModelDeploymentMonitoringJob,
        Method::UpdateModelDeploymentMonitoringJob,
        Method::PauseModelDeploymentMonitoringJob,
        Method::ResumeModelDeploymentMonitoringJob,
        Method::ListLocations,
        Method::GetLocation,
        Method::SetIamPolicy,
        Method::GetIamPolicy,
        Method::TestIamPermissions,
        Method::ListOperations,
        Method::GetOperation,
        Method::DeleteOperation,
        Method::CancelOperation,
        Method::WaitOperation,
    ];

    /// The name of the RPC, e.g. `GetCustomJob`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateCustomJob => "CreateCustomJob",
            Self::GetCustomJob => "GetCustomJob",
            Self::ListCustomJobs => "ListCustomJobs",
            Self::DeleteCustomJob => "DeleteCustomJob",
            Self::CancelCustomJob => "CancelCustomJob",
            Self::CreateDataLabelingJob => "CreateDataLabelingJob",
            Self::GetDataLabelingJob => "GetDataLabelingJob",
            Self::ListDataLabelingJobs => "ListDataLabelingJobs",
            Self::DeleteDataLabelingJob => "DeleteDataLabelingJob",
            Self::CancelDataLabelingJob => "CancelDataLabelingJob",
            Self::CreateHyperparameterTuningJob => "CreateHyperparameterTuningJob",
            Self::GetHyperparameterTuningJob => "GetHyperparameterTuningJob",
            Self::ListHyperparameterTuningJobs => "ListHyperparameterTuningJobs",
            Self::DeleteHyperparameterTuningJob => "DeleteHyperparameterTuningJob",
            Self::CancelHyperparameterTuningJob => "CancelHyperparameterTuningJob",
            Self::CreateNasJob => "CreateNasJob",
            Self::GetNasJob => "GetNasJob",
            Self::ListNasJobs => "ListNasJobs",
            Self::DeleteNasJob => "DeleteNasJob",
            Self::CancelNasJob => "CancelNasJob",
            Self::GetNasTrialDetail => "GetNasTrialDetail",
            Self::ListNasTrialDetails => "ListNasTrialDetails",
            Self::CreateBatchPredictionJob => "CreateBatchPredictionJob",
            Self::GetBatchPredictionJob => "GetBatchPredictionJob",
            Self::ListBatchPredictionJobs => "ListBatchPredictionJobs",
            Self::DeleteBatchPredictionJob => "DeleteBatchPredictionJob",
            Self::CancelBatchPredictionJob => "CancelBatchPredictionJob",
            Self::CreateModelDeploymentMonitoringJob => "CreateModelDeploymentMonitoringJob",
            Self::SearchModelDeploymentMonitoringStatsAnomalies => "SearchModelDeploymentMonitoringStatsAnomalies",
            Self::GetModelDeploymentMonitoringJob => "GetModelDeploymentMonitoringJob",
            Self::ListModelDeploymentMonitoringJobs => "ListModelDeploymentMonitoringJobs",
            Self::DeleteModelDeploymentMonitoringJob => "DeleteModelDeploymentMonitoringJob",
            Self::UpdateModelDeploymentMonitoringJob => "UpdateModelDeploymentMonitoringJob",
            Self::PauseModelDeploymentMonitoringJob => "PauseModelDeploymentMonitoringJob",
            Self::ResumeModelDeploymentMonitoringJob => "ResumeModelDeploymentMonitoringJob",
            Self::ListLocations => "ListLocations",
            Self::GetLocation => "GetLocation",
            Self::SetIamPolicy => "SetIamPolicy",
            Self::GetIamPolicy => "GetIamPolicy",
            Self::TestIamPermissions => "TestIamPermissions",
            Self::ListOperations => "ListOperations",
            Self::GetOperation => "GetOperation",
            Self::DeleteOperation => "DeleteOperation",
            Self::CancelOperation => "CancelOperation",
            Self::WaitOperation => "WaitOperation",
        }
    }

    /// The fully qualified name of the service declaring the RPC.
    pub const fn service(&self) -> &'static str {
        match self {
            Self::CreateCustomJob
            | Self::GetCustomJob
            | Self::ListCustomJobs
            | Self::DeleteCustomJob
            | Self::CancelCustomJob
            | Self::CreateDataLabelingJob
            | Self::GetDataLabelingJob
            | Self::ListDataLabelingJobs
            | Self::DeleteDataLabelingJob
            | Self::CancelDataLabelingJob
            | Self::CreateHyperparameterTuningJob
            | Self::GetHyperparameterTuningJob
            | Self::ListHyperparameterTuningJobs
            | Self::DeleteHyperparameterTuningJob
            | Self::CancelHyperparameterTuningJob
            | Self::CreateNasJob
            | Self::GetNasJob
            | Self::ListNasJobs
            | Self::DeleteNasJob
            | Self::CancelNasJob
            | Self::GetNasTrialDetail
            | Self::ListNasTrialDetails
            | Self::CreateBatchPredictionJob
            | Self::GetBatchPredictionJob
            | Self::ListBatchPredictionJobs
            | Self::DeleteBatchPredictionJob
            | Self::CancelBatchPredictionJob
            | Self::CreateModelDeploymentMonitoringJob
            | Self::SearchModelDeploymentMonitoringStatsAnomalies
            | Self::GetModelDeploymentMonitoringJob
            | Self::ListModelDeploymentMonitoringJobs
            | Self::DeleteModelDeploymentMonitoringJob
            | Self::UpdateModelDeploymentMonitoringJob
            | Self::PauseModelDeploymentMonitoringJob
            | Self::ResumeModelDeploymentMonitoringJob => "google.cloud.aiplatform.v1.JobService",
            Self::ListLocations
            | Self::GetLocation => "google.cloud.location.Locations",
            Self::SetIamPolicy
            | Self::GetIamPolicy
            | Self::TestIamPermissions => "google.iam.v1.IAMPolicy",
            Self::ListOperations
            | Self::GetOperation
            | Self::DeleteOperation
            | Self::CancelOperation
            | Self::WaitOperation => "google.longrunning.Operations",
        }
    }

    /// The path of the RPC in the binary protocol.
    pub const fn grpc_path(&self) -> &'static str {
        match self {
            Self::CreateCustomJob => "/google.cloud.aiplatform.v1.JobService/CreateCustomJob",
            Self::GetCustomJob => "/google.cloud.aiplatform.v1.JobService/GetCustomJob",
            Self::ListCustomJobs => "/google.cloud.aiplatform.v1.JobService/ListCustomJobs",
            Self::DeleteCustomJob => "/google.cloud.aiplatform.v1.JobService/DeleteCustomJob",
            Self::CancelCustomJob => "/google.cloud.aiplatform.v1.JobService/CancelCustomJob",
            Self::CreateDataLabelingJob => "/google.cloud.aiplatform.v1.JobService/CreateDataLabelingJob",
            Self::GetDataLabelingJob => "/google.cloud.aiplatform.v1.JobService/GetDataLabelingJob",
            Self::ListDataLabelingJobs => "/google.cloud.aiplatform.v1.JobService/ListDataLabelingJobs",
            Self::DeleteDataLabelingJob => "/google.cloud.aiplatform.v1.JobService/DeleteDataLabelingJob",
            Self::CancelDataLabelingJob => "/google.cloud.aiplatform.v1.JobService/CancelDataLabelingJob",
            Self::CreateHyperparameterTuningJob => "/google.cloud.aiplatform.v1.JobService/CreateHyperparameterTuningJob",
            Self::GetHyperparameterTuningJob => "/google.cloud.aiplatform.v1.JobService/GetHyperparameterTuningJob",
            Self::ListHyperparameterTuningJobs => "/google.cloud.aiplatform.v1.JobService/ListHyperparameterTuningJobs",
            Self::DeleteHyperparameterTuningJob => "/google.cloud.aiplatform.v1.JobService/DeleteHyperparameterTuningJob",
            Self::CancelHyperparameterTuningJob => "/google.cloud.aiplatform.v1.JobService/CancelHyperparameterTuningJob",
            Self::CreateNasJob => "/google.cloud.aiplatform.v1.JobService/CreateNasJob",
            Self::GetNasJob => "/google.cloud.aiplatform.v1.JobService/GetNasJob",
            Self::ListNasJobs => "/google.cloud.aiplatform.v1.JobService/ListNasJobs",
            Self::DeleteNasJob => "/google.cloud.aiplatform.v1.JobService/DeleteNasJob",
            Self::CancelNasJob => "/google.cloud.aiplatform.v1.JobService/CancelNasJob",
            Self::GetNasTrialDetail => "/google.cloud.aiplatform.v1.JobService/GetNasTrialDetail",
            Self::ListNasTrialDetails => "/google.cloud.aiplatform.v1.JobService/ListNasTrialDetails",
            Self::CreateBatchPredictionJob => "/google.cloud.aiplatform.v1.JobService/CreateBatchPredictionJob",
            Self::GetBatchPredictionJob => "/google.cloud.aiplatform.v1.JobService/GetBatchPredictionJob",
            Self::ListBatchPredictionJobs => "/google.cloud.aiplatform.v1.JobService/ListBatchPredictionJobs",
            Self::DeleteBatchPredictionJob => "/google.cloud.aiplatform.v1.JobService/DeleteBatchPredictionJob",
            Self::CancelBatchPredictionJob => "/google.cloud.aiplatform.v1.JobService/CancelBatchPredictionJob",
            Self::CreateModelDeploymentMonitoringJob => "/google.cloud.aiplatform.v1.JobService/CreateModelDeploymentMonitoringJob",
            Self::SearchModelDeploymentMonitoringStatsAnomalies => "/google.cloud.aiplatform.v1.JobService/SearchModelDeploymentMonitoringStatsAnomalies",
            Self::GetModelDeploymentMonitoringJob => "/google.cloud.aiplatform.v1.JobService/GetModelDeploymentMonitoringJob",
            Self::ListModelDeploymentMonitoringJobs => "/google.cloud.aiplatform.v1.JobService/ListModelDeploymentMonitoringJobs",
            Self::DeleteModelDeploymentMonitoringJob => "/google.cloud.aiplatform.v1.JobService/DeleteModelDeploymentMonitoringJob",
            Self::UpdateModelDeploymentMonitoringJob => "/google.cloud.aiplatform.v1.JobService/UpdateModelDeploymentMonitoringJob",
            Self::PauseModelDeploymentMonitoringJob => "/google.cloud.aiplatform.v1.JobService/PauseModelDeploymentMonitoringJob",
            Self::ResumeModelDeploymentMonitoringJob => "/google.cloud.aiplatform.v1.JobService/ResumeModelDeploymentMonitoringJob",
            Self::ListLocations => "/google.cloud.location.Locations/ListLocations",
            Self::GetLocation => "/google.cloud.location.Locations/GetLocation",
            Self::SetIamPolicy => "/google.iam.v1.IAMPolicy/SetIamPolicy",
            Self::GetIamPolicy => "/google.iam.v1.IAMPolicy/GetIamPolicy",
            Self::TestIamPermissions => "/google.iam.v1.IAMPolicy/TestIamPermissions",
            Self::ListOperations => "/google.longrunning.Operations/ListOperations",
            Self::GetOperation => "/google.longrunning.Operations/GetOperation",
            Self::DeleteOperation => "/google.longrunning.Operations/DeleteOperation",
            Self::CancelOperation => "/google.longrunning.Operations/CancelOperation",
            Self::WaitOperation => "/google.longrunning.Operations/WaitOperation",
        }
    }

    /// The request field sent in the `x-goog-request-params` header.
    ///
    /// Nested fields use a dotted path.
    pub const fn routing_field(&self) -> &'static str {
        match self {
            Self::CreateCustomJob
            | Self::ListCustomJobs
            | Self::CreateDataLabelingJob
            | Self::ListDataLabelingJobs
            | Self::CreateHyperparameterTuningJob
            | Self::ListHyperparameterTuningJobs
            | Self::CreateNasJob
            | Self::ListNasJobs
            | Self::ListNasTrialDetails
            | Self::CreateBatchPredictionJob
            | Self::ListBatchPredictionJobs
            | Self::CreateModelDeploymentMonitoringJob
            | Self::ListModelDeploymentMonitoringJobs => "parent",
            Self::GetCustomJob
            | Self::DeleteCustomJob
            | Self::CancelCustomJob
            | Self::GetDataLabelingJob
            | Self::DeleteDataLabelingJob
            | Self::CancelDataLabelingJob
            | Self::GetHyperparameterTuningJob
            | Self::DeleteHyperparameterTuningJob
            | Self::CancelHyperparameterTuningJob
            | Self::GetNasJob
            | Self::DeleteNasJob
            | Self::CancelNasJob
            | Self::GetNasTrialDetail
            | Self::GetBatchPredictionJob
            | Self::DeleteBatchPredictionJob
            | Self::CancelBatchPredictionJob
            | Self::GetModelDeploymentMonitoringJob
            | Self::DeleteModelDeploymentMonitoringJob
            | Self::PauseModelDeploymentMonitoringJob
            | Self::ResumeModelDeploymentMonitoringJob
            | Self::ListLocations
            | Self::GetLocation
            | Self::ListOperations
            | Self::GetOperation
            | Self::DeleteOperation
            | Self::CancelOperation
            | Self::WaitOperation => "name",
            Self::SearchModelDeploymentMonitoringStatsAnomalies => "model_deployment_monitoring_job",
            Self::UpdateModelDeploymentMonitoringJob => "model_deployment_monitoring_job.name",
            Self::SetIamPolicy
            | Self::GetIamPolicy
            | Self::TestIamPermissions => "resource",
        }
    }

    /// The REST bindings, in the order they are tried.
    pub fn http_rules(&self) -> &'static [HttpRule] {
        match self {
            Self::CreateCustomJob => &CREATE_CUSTOM_JOB,
            Self::GetCustomJob => &GET_CUSTOM_JOB,
            Self::ListCustomJobs => &LIST_CUSTOM_JOBS,
            Self::DeleteCustomJob => &DELETE_CUSTOM_JOB,
            Self::CancelCustomJob => &CANCEL_CUSTOM_JOB,
            Self::CreateDataLabelingJob => &CREATE_DATA_LABELING_JOB,
            Self::GetDataLabelingJob => &GET_DATA_LABELING_JOB,
            Self::ListDataLabelingJobs => &LIST_DATA_LABELING_JOBS,
            Self::DeleteDataLabelingJob => &DELETE_DATA_LABELING_JOB,
            Self::CancelDataLabelingJob => &CANCEL_DATA_LABELING_JOB,
            Self::CreateHyperparameterTuningJob => &CREATE_HYPERPARAMETER_TUNING_JOB,
            Self::GetHyperparameterTuningJob => &GET_HYPERPARAMETER_TUNING_JOB,
            Self::ListHyperparameterTuningJobs => &LIST_HYPERPARAMETER_TUNING_JOBS,
            Self::DeleteHyperparameterTuningJob => &DELETE_HYPERPARAMETER_TUNING_JOB,
            Self::CancelHyperparameterTuningJob => &CANCEL_HYPERPARAMETER_TUNING_JOB,
            Self::CreateNasJob => &CREATE_NAS_JOB,
            Self::GetNasJob => &GET_NAS_JOB,
            Self::ListNasJobs => &LIST_NAS_JOBS,
            Self::DeleteNasJob => &DELETE_NAS_JOB,
            Self::CancelNasJob => &CANCEL_NAS_JOB,
            Self::GetNasTrialDetail => &GET_NAS_TRIAL_DETAIL,
            Self::ListNasTrialDetails => &LIST_NAS_TRIAL_DETAILS,
            Self::CreateBatchPredictionJob => &CREATE_BATCH_PREDICTION_JOB,
            Self::GetBatchPredictionJob => &GET_BATCH_PREDICTION_JOB,
            Self::ListBatchPredictionJobs => &LIST_BATCH_PREDICTION_JOBS,
            Self::DeleteBatchPredictionJob => &DELETE_BATCH_PREDICTION_JOB,
            Self::CancelBatchPredictionJob => &CANCEL_BATCH_PREDICTION_JOB,
            Self::CreateModelDeploymentMonitoringJob => &CREATE_MODEL_DEPLOYMENT_MONITORING_JOB,
            Self::SearchModelDeploymentMonitoringStatsAnomalies => &SEARCH_MODEL_DEPLOYMENT_MONITORING_STATS_ANOMALIES,
            Self::GetModelDeploymentMonitoringJob => &GET_MODEL_DEPLOYMENT_MONITORING_JOB,
            Self::ListModelDeploymentMonitoringJobs => &LIST_MODEL_DEPLOYMENT_MONITORING_JOBS,
            Self::DeleteModelDeploymentMonitoringJob => &DELETE_MODEL_DEPLOYMENT_MONITORING_JOB,
            Self::UpdateModelDeploymentMonitoringJob => &UPDATE_MODEL_DEPLOYMENT_MONITORING_JOB,
            Self::PauseModelDeploymentMonitoringJob => &PAUSE_MODEL_DEPLOYMENT_MONITORING_JOB,
            Self::ResumeModelDeploymentMonitoringJob => &RESUME_MODEL_DEPLOYMENT_MONITORING_JOB,
            Self::ListLocations => &LIST_LOCATIONS,
            Self::GetLocation => &GET_LOCATION,
            Self::SetIamPolicy => &SET_IAM_POLICY,
            Self::GetIamPolicy => &GET_IAM_POLICY,
            Self::TestIamPermissions => &TEST_IAM_PERMISSIONS,
            Self::ListOperations => &LIST_OPERATIONS,
            Self::GetOperation => &GET_OPERATION,
            Self::DeleteOperation => &DELETE_OPERATION,
            Self::CancelOperation => &CANCEL_OPERATION,
            Self::WaitOperation => &WAIT_OPERATION,
        }
    }

    /// Whether the RPC can be retried without side effects.
    pub fn is_idempotent(&self) -> bool {
        self.http_rules()
            .first()
            .is_some_and(|rule| rule.method.is_idempotent())
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static CREATE_CUSTOM_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{parent=projects/*/locations/*}/customJobs",
        body: Some("custom_job"),
    },
];

static GET_CUSTOM_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/customJobs/*}",
        body: None,
    },
];

static LIST_CUSTOM_JOBS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{parent=projects/*/locations/*}/customJobs",
        body: None,
    },
];

static DELETE_CUSTOM_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/customJobs/*}",
        body: None,
    },
];

static CANCEL_CUSTOM_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/customJobs/*}:cancel",
        body: Some("*"),
    },
];

static CREATE_DATA_LABELING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{parent=projects/*/locations/*}/dataLabelingJobs",
        body: Some("data_labeling_job"),
    },
];

static GET_DATA_LABELING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*}",
        body: None,
    },
];

static LIST_DATA_LABELING_JOBS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{parent=projects/*/locations/*}/dataLabelingJobs",
        body: None,
    },
];

static DELETE_DATA_LABELING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*}",
        body: None,
    },
];

static CANCEL_DATA_LABELING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*}:cancel",
        body: Some("*"),
    },
];

static CREATE_HYPERPARAMETER_TUNING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{parent=projects/*/locations/*}/hyperparameterTuningJobs",
        body: Some("hyperparameter_tuning_job"),
    },
];

static GET_HYPERPARAMETER_TUNING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*}",
        body: None,
    },
];

static LIST_HYPERPARAMETER_TUNING_JOBS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{parent=projects/*/locations/*}/hyperparameterTuningJobs",
        body: None,
    },
];

static DELETE_HYPERPARAMETER_TUNING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*}",
        body: None,
    },
];

static CANCEL_HYPERPARAMETER_TUNING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*}:cancel",
        body: Some("*"),
    },
];

static CREATE_NAS_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{parent=projects/*/locations/*}/nasJobs",
        body: Some("nas_job"),
    },
];

static GET_NAS_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*}",
        body: None,
    },
];

static LIST_NAS_JOBS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{parent=projects/*/locations/*}/nasJobs",
        body: None,
    },
];

static DELETE_NAS_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*}",
        body: None,
    },
];

static CANCEL_NAS_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*}:cancel",
        body: Some("*"),
    },
];

static GET_NAS_TRIAL_DETAIL: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*/nasTrialDetails/*}",
        body: None,
    },
];

static LIST_NAS_TRIAL_DETAILS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{parent=projects/*/locations/*/nasJobs/*}/nasTrialDetails",
        body: None,
    },
];

static CREATE_BATCH_PREDICTION_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{parent=projects/*/locations/*}/batchPredictionJobs",
        body: Some("batch_prediction_job"),
    },
];

static GET_BATCH_PREDICTION_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/batchPredictionJobs/*}",
        body: None,
    },
];

static LIST_BATCH_PREDICTION_JOBS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{parent=projects/*/locations/*}/batchPredictionJobs",
        body: None,
    },
];

static DELETE_BATCH_PREDICTION_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/batchPredictionJobs/*}",
        body: None,
    },
];

static CANCEL_BATCH_PREDICTION_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/batchPredictionJobs/*}:cancel",
        body: Some("*"),
    },
];

static CREATE_MODEL_DEPLOYMENT_MONITORING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{parent=projects/*/locations/*}/modelDeploymentMonitoringJobs",
        body: Some("model_deployment_monitoring_job"),
    },
];

static SEARCH_MODEL_DEPLOYMENT_MONITORING_STATS_ANOMALIES: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{model_deployment_monitoring_job=projects/*/locations/*/modelDeploymentMonitoringJobs/*}:searchModelDeploymentMonitoringStatsAnomalies",
        body: Some("*"),
    },
];

static GET_MODEL_DEPLOYMENT_MONITORING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*}",
        body: None,
    },
];

static LIST_MODEL_DEPLOYMENT_MONITORING_JOBS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{parent=projects/*/locations/*}/modelDeploymentMonitoringJobs",
        body: None,
    },
];

static DELETE_MODEL_DEPLOYMENT_MONITORING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*}",
        body: None,
    },
];

static UPDATE_MODEL_DEPLOYMENT_MONITORING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::PATCH,
        path: "/v1/{model_deployment_monitoring_job.name=projects/*/locations/*/modelDeploymentMonitoringJobs/*}",
        body: Some("model_deployment_monitoring_job"),
    },
];

static PAUSE_MODEL_DEPLOYMENT_MONITORING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*}:pause",
        body: Some("*"),
    },
];

static RESUME_MODEL_DEPLOYMENT_MONITORING_JOB: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*}:resume",
        body: Some("*"),
    },
];

static LIST_LOCATIONS: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*}/locations",
        body: None,
    },
];

static GET_LOCATION: [HttpRule; 1] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*}",
        body: None,
    },
];

static SET_IAM_POLICY: [HttpRule; 7] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featurestores/*}:setIamPolicy",
        body: Some("*"),
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featurestores/*/entityTypes/*}:setIamPolicy",
        body: Some("*"),
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/models/*}:setIamPolicy",
        body: Some("*"),
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/endpoints/*}:setIamPolicy",
        body: Some("*"),
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/notebookRuntimeTemplates/*}:setIamPolicy",
        body: Some("*"),
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featureOnlineStores/*}:setIamPolicy",
        body: Some("*"),
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featureOnlineStores/*/featureViews/*}:setIamPolicy",
        body: Some("*"),
    },
];

static GET_IAM_POLICY: [HttpRule; 7] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featurestores/*}:getIamPolicy",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featurestores/*/entityTypes/*}:getIamPolicy",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/models/*}:getIamPolicy",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/endpoints/*}:getIamPolicy",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/notebookRuntimeTemplates/*}:getIamPolicy",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featureOnlineStores/*}:getIamPolicy",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featureOnlineStores/*/featureViews/*}:getIamPolicy",
        body: None,
    },
];

static TEST_IAM_PERMISSIONS: [HttpRule; 7] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featurestores/*}:testIamPermissions",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featurestores/*/entityTypes/*}:testIamPermissions",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/models/*}:testIamPermissions",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/endpoints/*}:testIamPermissions",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/notebookRuntimeTemplates/*}:testIamPermissions",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featureOnlineStores/*}:testIamPermissions",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{resource=projects/*/locations/*/featureOnlineStores/*/featureViews/*}:testIamPermissions",
        body: None,
    },
];

static LIST_OPERATIONS: [HttpRule; 6] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*}/operations",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/customJobs/*}/operations",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*}/operations",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*}/operations",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*}/operations",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*}/operations",
        body: None,
    },
];

static GET_OPERATION: [HttpRule; 6] = [
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/customJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::GET,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*/operations/*}",
        body: None,
    },
];

static DELETE_OPERATION: [HttpRule; 6] = [
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/customJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*/operations/*}",
        body: None,
    },
    HttpRule {
        method: http::Method::DELETE,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*/operations/*}",
        body: None,
    },
];

static CANCEL_OPERATION: [HttpRule; 6] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/operations/*}:cancel",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/customJobs/*/operations/*}:cancel",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*/operations/*}:cancel",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*/operations/*}:cancel",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*/operations/*}:cancel",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*/operations/*}:cancel",
        body: None,
    },
];

static WAIT_OPERATION: [HttpRule; 6] = [
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/operations/*}:wait",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/customJobs/*/operations/*}:wait",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/dataLabelingJobs/*/operations/*}:wait",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/hyperparameterTuningJobs/*/operations/*}:wait",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/nasJobs/*/operations/*}:wait",
        body: None,
    },
    HttpRule {
        method: http::Method::POST,
        path: "/v1/{name=projects/*/locations/*/modelDeploymentMonitoringJobs/*/operations/*}:wait",
        body: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use gaxi::path_parameter::transcode;
    use serde_json::json;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn names_are_unique() {
        let names = Method::ALL.iter().map(Method::name).collect::<HashSet<_>>();
        assert_eq!(names.len(), Method::ALL.len());
        let paths = Method::ALL
            .iter()
            .map(Method::grpc_path)
            .collect::<HashSet<_>>();
        assert_eq!(paths.len(), Method::ALL.len());
    }

    #[test]
    fn grpc_paths() {
        for method in Method::ALL {
            let want = format!("/{}/{}", method.service(), method.name());
            assert_eq!(method.grpc_path(), want, "{method}");
        }
    }

    #[test]
    fn every_method_has_rules() {
        for method in Method::ALL {
            let rules = method.http_rules();
            assert!(!rules.is_empty(), "{method}");
            let field = method.routing_field().split('.').next().unwrap_or_default();
            for rule in rules {
                assert!(
                    rule.path.contains(&format!("{{{field}")),
                    "{method} {} does not bind {field}",
                    rule.path
                );
            }
        }
    }

    #[test_case(Method::CreateCustomJob, "parent")]
    #[test_case(Method::GetCustomJob, "name")]
    #[test_case(Method::ListBatchPredictionJobs, "parent")]
    #[test_case(Method::DeleteNasJob, "name")]
    #[test_case(Method::CancelDataLabelingJob, "name")]
    #[test_case(Method::UpdateModelDeploymentMonitoringJob, "model_deployment_monitoring_job.name")]
    #[test_case(Method::PauseModelDeploymentMonitoringJob, "name")]
    #[test_case(
        Method::SearchModelDeploymentMonitoringStatsAnomalies,
        "model_deployment_monitoring_job"
    )]
    #[test_case(Method::GetIamPolicy, "resource")]
    #[test_case(Method::WaitOperation, "name")]
    #[test_case(Method::ListLocations, "name")]
    fn routing_fields(method: Method, want: &str) {
        assert_eq!(method.routing_field(), want);
    }

    #[test_case(Method::GetCustomJob, true)]
    #[test_case(Method::ListCustomJobs, true)]
    #[test_case(Method::DeleteCustomJob, true)]
    #[test_case(Method::CreateCustomJob, false)]
    #[test_case(Method::CancelCustomJob, false)]
    #[test_case(Method::UpdateModelDeploymentMonitoringJob, false)]
    fn idempotency(method: Method, want: bool) {
        assert_eq!(method.is_idempotent(), want);
    }

    #[test]
    fn transcode_create() -> anyhow::Result<()> {
        let request = json!({
            "parent": "projects/p/locations/l",
            "customJob": {"displayName": "my-job"},
        });
        let got = transcode(
            Method::CreateCustomJob.name(),
            Method::CreateCustomJob.http_rules(),
            &request,
        )?;
        assert_eq!(got.method, http::Method::POST);
        assert_eq!(got.path, "/v1/projects/p/locations/l/customJobs");
        assert_eq!(got.body, Some(json!({"displayName": "my-job"})));
        assert!(got.query.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn transcode_list() -> anyhow::Result<()> {
        let request = json!({
            "parent": "projects/p/locations/l",
            "pageSize": 10,
            "pageToken": "abc",
        });
        let got = transcode(
            Method::ListCustomJobs.name(),
            Method::ListCustomJobs.http_rules(),
            &request,
        )?;
        assert_eq!(got.method, http::Method::GET);
        assert_eq!(got.path, "/v1/projects/p/locations/l/customJobs");
        assert_eq!(got.body, None);
        assert_eq!(got.query.get("pageSize"), Some(&json!(10)));
        assert_eq!(got.query.get("pageToken"), Some(&json!("abc")));
        Ok(())
    }

    #[test]
    fn transcode_nested_field() -> anyhow::Result<()> {
        let name = "projects/p/locations/l/modelDeploymentMonitoringJobs/j";
        let request = json!({
            "modelDeploymentMonitoringJob": {"name": name, "displayName": "d"},
            "updateMask": "displayName",
        });
        let method = Method::UpdateModelDeploymentMonitoringJob;
        let got = transcode(method.name(), method.http_rules(), &request)?;
        assert_eq!(got.method, http::Method::PATCH);
        assert_eq!(got.path, format!("/v1/{name}"));
        // The path binds the name, the body keeps the remaining fields.
        assert_eq!(got.body, Some(json!({"displayName": "d"})));
        assert_eq!(got.query.get("updateMask"), Some(&json!("displayName")));
        Ok(())
    }

    #[test]
    fn transcode_second_rule() -> anyhow::Result<()> {
        let name = "projects/p/locations/l/customJobs/j/operations/o";
        let request = json!({ "name": name });
        let method = Method::GetOperation;
        let got = transcode(method.name(), method.http_rules(), &request)?;
        assert_eq!(got.path, format!("/v1/{name}"));
        Ok(())
    }

    #[test]
    fn transcode_mismatch() {
        let request = json!({ "name": "not-a-job" });
        let method = Method::GetCustomJob;
        let got = transcode(method.name(), method.http_rules(), &request);
        let err = got.expect_err("the name does not match the template");
        let msg = err.to_string();
        assert!(msg.contains("GetCustomJob"), "{msg}");
        assert!(msg.contains("projects/*/locations/*/customJobs/*"), "{msg}");
    }
}
