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

//! The messages and enums of the Job Service.

#![allow(rustdoc::broken_intra_doc_links)]

/// The Google Cloud Storage location for the input content.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsSource {
    /// Required. Google Cloud Storage URI(-s) to the input file(s).
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub uris: std::vec::Vec<std::string::String>,
}

impl GcsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uris][crate::model::GcsSource::uris].
    pub fn set_uris<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.uris = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for GcsSource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GcsSource"
    }
}

/// The Google Cloud Storage location where the output is to be written to.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsDestination {
    /// Required. Google Cloud Storage URI to output directory.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub output_uri_prefix: std::string::String,
}

impl GcsDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [output_uri_prefix][crate::model::GcsDestination::output_uri_prefix].
    pub fn set_output_uri_prefix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_uri_prefix = v.into();
        self
    }
}

impl wkt::message::Message for GcsDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GcsDestination"
    }
}

/// Represents an environment variable present in a Container or Python Module.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnvVar {
    /// Required. Name of the environment variable.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. Variables that reference a $(VAR_NAME) are expanded using the previous defined environment variables in the container.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub value: std::string::String,
}

impl EnvVar {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::EnvVar::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [value][crate::model::EnvVar::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }
}

impl wkt::message::Message for EnvVar {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.EnvVar"
    }
}

/// The spec of a Container.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerSpec {
    /// Required. The URI of a container image in the Container Registry that is to be run on each worker replica.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub image_uri: std::string::String,

    /// The command to be invoked when the container is started.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub command: std::vec::Vec<std::string::String>,

    /// The arguments to be passed when starting the container.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub args: std::vec::Vec<std::string::String>,

    /// Environment variables to be passed to the container.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub env: std::vec::Vec<crate::model::EnvVar>,
}

impl ContainerSpec {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_uri][crate::model::ContainerSpec::image_uri].
    pub fn set_image_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_uri = v.into();
        self
    }

    /// Sets the value of [command][crate::model::ContainerSpec::command].
    pub fn set_command<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.command = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [args][crate::model::ContainerSpec::args].
    pub fn set_args<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.args = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [env][crate::model::ContainerSpec::env].
    pub fn set_env<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.env = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for ContainerSpec {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ContainerSpec"
    }
}

/// Specification of a single machine.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineSpec {
    /// Immutable. The type of the machine.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub machine_type: std::string::String,

    /// The number of accelerators to attach to the machine.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub accelerator_count: i32,
}

impl MachineSpec {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [machine_type][crate::model::MachineSpec::machine_type].
    pub fn set_machine_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.machine_type = v.into();
        self
    }

    /// Sets the value of [accelerator_count][crate::model::MachineSpec::accelerator_count].
    pub fn set_accelerator_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.accelerator_count = v.into();
        self
    }
}

impl wkt::message::Message for MachineSpec {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.MachineSpec"
    }
}

/// Represents the spec of a worker pool in a job.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkerPoolSpec {
    /// The custom container task.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub container_spec: std::option::Option<crate::model::ContainerSpec>,

    /// Optional. Immutable. The specification of a single machine.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub machine_spec: std::option::Option<crate::model::MachineSpec>,

    /// Optional. The number of worker replicas to use for this worker pool.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub replica_count: i64,
}

impl WorkerPoolSpec {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [container_spec][crate::model::WorkerPoolSpec::container_spec].
    pub fn set_container_spec<T: std::convert::Into<std::option::Option<crate::model::ContainerSpec>>>(mut self, v: T) -> Self {
        self.container_spec = v.into();
        self
    }

    /// Sets the value of [machine_spec][crate::model::WorkerPoolSpec::machine_spec].
    pub fn set_machine_spec<T: std::convert::Into<std::option::Option<crate::model::MachineSpec>>>(mut self, v: T) -> Self {
        self.machine_spec = v.into();
        self
    }

    /// Sets the value of [replica_count][crate::model::WorkerPoolSpec::replica_count].
    pub fn set_replica_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.replica_count = v.into();
        self
    }
}

impl wkt::message::Message for WorkerPoolSpec {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.WorkerPoolSpec"
    }
}

/// Represents the spec of a CustomJob.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomJobSpec {
    /// Required. The spec of the worker pools including machine type and Docker image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub worker_pool_specs: std::vec::Vec<crate::model::WorkerPoolSpec>,

    /// Specifies the service account for workload run-as account.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service_account: std::string::String,

    /// Optional. The full name of the Compute Engine network to which the Job should be peered.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub network: std::string::String,

    /// Optional. A list of names for the reserved ip ranges under the VPC network that can be used for this job.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub reserved_ip_ranges: std::vec::Vec<std::string::String>,

    /// The Cloud Storage location to store the output of this CustomJob or HyperparameterTuningJob.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub base_output_directory: std::option::Option<crate::model::GcsDestination>,

    /// Optional. Whether you want Vertex AI to enable interactive shell access to training containers.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub enable_web_access: bool,

    /// Optional. The Experiment associated with this job.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub experiment: std::string::String,
}

impl CustomJobSpec {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [worker_pool_specs][crate::model::CustomJobSpec::worker_pool_specs].
    pub fn set_worker_pool_specs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::WorkerPoolSpec>,
    {
        use std::iter::Iterator;
        self.worker_pool_specs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [service_account][crate::model::CustomJobSpec::service_account].
    pub fn set_service_account<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.service_account = v.into();
        self
    }

    /// Sets the value of [network][crate::model::CustomJobSpec::network].
    pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [reserved_ip_ranges][crate::model::CustomJobSpec::reserved_ip_ranges].
    pub fn set_reserved_ip_ranges<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.reserved_ip_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [base_output_directory][crate::model::CustomJobSpec::base_output_directory].
    pub fn set_base_output_directory<T: std::convert::Into<std::option::Option<crate::model::GcsDestination>>>(mut self, v: T) -> Self {
        self.base_output_directory = v.into();
        self
    }

    /// Sets the value of [enable_web_access][crate::model::CustomJobSpec::enable_web_access].
    pub fn set_enable_web_access<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_web_access = v.into();
        self
    }

    /// Sets the value of [experiment][crate::model::CustomJobSpec::experiment].
    pub fn set_experiment<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.experiment = v.into();
        self
    }
}

impl wkt::message::Message for CustomJobSpec {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CustomJobSpec"
    }
}

/// Represents a job that runs custom workloads such as a Docker container or a Python package.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomJob {
    /// Output only. Resource name of a CustomJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The display name of the CustomJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Required. Job spec.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_spec: std::option::Option<crate::model::CustomJobSpec>,

    /// Output only. The detailed state of the job.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub state: crate::model::JobState,

    /// Output only. Time when the job was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job first entered the `JOB_STATE_RUNNING` state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job entered any of the final states.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job was most recently updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Only populated when job's state is `JOB_STATE_FAILED` or `JOB_STATE_CANCELLED`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<gax::error::rpc::Status>,

    /// The labels with user-defined metadata to organize CustomJobs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Output only. URIs for accessing interactive shells, one URI for each training node.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub web_access_uris: std::collections::HashMap<std::string::String, std::string::String>,

    /// Output only. Reserved for future use.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub satisfies_pzs: bool,

    /// Output only. Reserved for future use.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub satisfies_pzi: bool,
}

impl CustomJob {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CustomJob::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::CustomJob::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [job_spec][crate::model::CustomJob::job_spec].
    pub fn set_job_spec<T: std::convert::Into<std::option::Option<crate::model::CustomJobSpec>>>(mut self, v: T) -> Self {
        self.job_spec = v.into();
        self
    }

    /// Sets the value of [state][crate::model::CustomJob::state].
    pub fn set_state<T: std::convert::Into<crate::model::JobState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::CustomJob::create_time].
    pub fn set_create_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.create_time = v.into();
        self
    }

    /// Sets the value of [start_time][crate::model::CustomJob::start_time].
    pub fn set_start_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][crate::model::CustomJob::end_time].
    pub fn set_end_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::CustomJob::update_time].
    pub fn set_update_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.update_time = v.into();
        self
    }

    /// Sets the value of [error][crate::model::CustomJob::error].
    pub fn set_error<T: std::convert::Into<std::option::Option<gax::error::rpc::Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::CustomJob::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [web_access_uris][crate::model::CustomJob::web_access_uris].
    pub fn set_web_access_uris<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.web_access_uris = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [satisfies_pzs][crate::model::CustomJob::satisfies_pzs].
    pub fn set_satisfies_pzs<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.satisfies_pzs = v.into();
        self
    }

    /// Sets the value of [satisfies_pzi][crate::model::CustomJob::satisfies_pzi].
    pub fn set_satisfies_pzi<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.satisfies_pzi = v.into();
        self
    }
}

impl wkt::message::Message for CustomJob {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CustomJob"
    }
}

/// DataLabelingJob is used to trigger a human labeling job on unlabeled data from the following Dataset.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataLabelingJob {
    /// Output only. Resource name of the DataLabelingJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The user-defined name of the DataLabelingJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Required. Dataset resource names. Right now we only support labeling from a single Dataset.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub datasets: std::vec::Vec<std::string::String>,

    /// Labels to assign to annotations generated by this DataLabelingJob.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub annotation_labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Required. Number of labelers to work on each DataItem.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub labeler_count: i32,

    /// Required. The Google Cloud Storage location of the instruction pdf.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub instruction_uri: std::string::String,

    /// Required. Points to a YAML file stored on Google Cloud Storage describing the config for a specific type of DataLabelingJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub inputs_schema_uri: std::string::String,

    /// Required. Input config parameters for the DataLabelingJob.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inputs: std::option::Option<wkt::Value>,

    /// Output only. The detailed state of the job.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub state: crate::model::JobState,

    /// Output only. Current labeling job progress percentage scaled in interval [0, 100].
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub labeling_progress: i32,

    /// Output only. Timestamp when this DataLabelingJob was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Timestamp when this DataLabelingJob was updated most recently.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// Output only. DataLabelingJob errors.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<gax::error::rpc::Status>,

    /// The labels with user-defined metadata to organize your DataLabelingJobs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// The SpecialistPools' resource names associated with this job.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub specialist_pools: std::vec::Vec<std::string::String>,
}

impl DataLabelingJob {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DataLabelingJob::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::DataLabelingJob::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [datasets][crate::model::DataLabelingJob::datasets].
    pub fn set_datasets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.datasets = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [annotation_labels][crate::model::DataLabelingJob::annotation_labels].
    pub fn set_annotation_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.annotation_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [labeler_count][crate::model::DataLabelingJob::labeler_count].
    pub fn set_labeler_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.labeler_count = v.into();
        self
    }

    /// Sets the value of [instruction_uri][crate::model::DataLabelingJob::instruction_uri].
    pub fn set_instruction_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instruction_uri = v.into();
        self
    }

    /// Sets the value of [inputs_schema_uri][crate::model::DataLabelingJob::inputs_schema_uri].
    pub fn set_inputs_schema_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.inputs_schema_uri = v.into();
        self
    }

    /// Sets the value of [inputs][crate::model::DataLabelingJob::inputs].
    pub fn set_inputs<T: std::convert::Into<std::option::Option<wkt::Value>>>(mut self, v: T) -> Self {
        self.inputs = v.into();
        self
    }

    /// Sets the value of [state][crate::model::DataLabelingJob::state].
    pub fn set_state<T: std::convert::Into<crate::model::JobState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [labeling_progress][crate::model::DataLabelingJob::labeling_progress].
    pub fn set_labeling_progress<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.labeling_progress = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::DataLabelingJob::create_time].
    pub fn set_create_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.create_time = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::DataLabelingJob::update_time].
    pub fn set_update_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.update_time = v.into();
        self
    }

    /// Sets the value of [error][crate::model::DataLabelingJob::error].
    pub fn set_error<T: std::convert::Into<std::option::Option<gax::error::rpc::Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::DataLabelingJob::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [specialist_pools][crate::model::DataLabelingJob::specialist_pools].
    pub fn set_specialist_pools<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.specialist_pools = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for DataLabelingJob {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DataLabelingJob"
    }
}

/// A message representing a Trial.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Trial {
    /// Output only. Resource name of the Trial assigned by the service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Output only. The identifier of the Trial assigned by the service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Output only. The CustomJob name linked to the Trial.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub custom_job: std::string::String,

    /// Output only. Time when the Trial was started.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the Trial's status changed to `SUCCEEDED` or `INFEASIBLE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,
}

impl Trial {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Trial::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [id][crate::model::Trial::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [custom_job][crate::model::Trial::custom_job].
    pub fn set_custom_job<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.custom_job = v.into();
        self
    }

    /// Sets the value of [start_time][crate::model::Trial::start_time].
    pub fn set_start_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][crate::model::Trial::end_time].
    pub fn set_end_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }
}

impl wkt::message::Message for Trial {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.Trial"
    }
}

/// Represents a HyperparameterTuningJob.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HyperparameterTuningJob {
    /// Output only. Resource name of the HyperparameterTuningJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The display name of the HyperparameterTuningJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Required. Study configuration of the HyperparameterTuningJob.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub study_spec: std::option::Option<wkt::Struct>,

    /// Required. The desired total number of Trials.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub max_trial_count: i32,

    /// Required. The desired number of Trials to run in parallel.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub parallel_trial_count: i32,

    /// The number of failed Trials that need to be seen before failing the HyperparameterTuningJob.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub max_failed_trial_count: i32,

    /// Required. The spec of a trial job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub trial_job_spec: std::option::Option<crate::model::CustomJobSpec>,

    /// Output only. Trials of the HyperparameterTuningJob.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub trials: std::vec::Vec<crate::model::Trial>,

    /// Output only. The detailed state of the job.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub state: crate::model::JobState,

    /// Output only. Time when the job was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job first entered the `JOB_STATE_RUNNING` state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job entered any of the final states.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job was most recently updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Only populated when job's state is JOB_STATE_FAILED or JOB_STATE_CANCELLED.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<gax::error::rpc::Status>,

    /// The labels with user-defined metadata to organize HyperparameterTuningJobs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl HyperparameterTuningJob {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::HyperparameterTuningJob::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::HyperparameterTuningJob::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [study_spec][crate::model::HyperparameterTuningJob::study_spec].
    pub fn set_study_spec<T: std::convert::Into<std::option::Option<wkt::Struct>>>(mut self, v: T) -> Self {
        self.study_spec = v.into();
        self
    }

    /// Sets the value of [max_trial_count][crate::model::HyperparameterTuningJob::max_trial_count].
    pub fn set_max_trial_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.max_trial_count = v.into();
        self
    }

    /// Sets the value of [parallel_trial_count][crate::model::HyperparameterTuningJob::parallel_trial_count].
    pub fn set_parallel_trial_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.parallel_trial_count = v.into();
        self
    }

    /// Sets the value of [max_failed_trial_count][crate::model::HyperparameterTuningJob::max_failed_trial_count].
    pub fn set_max_failed_trial_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.max_failed_trial_count = v.into();
        self
    }

    /// Sets the value of [trial_job_spec][crate::model::HyperparameterTuningJob::trial_job_spec].
    pub fn set_trial_job_spec<T: std::convert::Into<std::option::Option<crate::model::CustomJobSpec>>>(mut self, v: T) -> Self {
        self.trial_job_spec = v.into();
        self
    }

    /// Sets the value of [trials][crate::model::HyperparameterTuningJob::trials].
    pub fn set_trials<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Trial>,
    {
        use std::iter::Iterator;
        self.trials = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [state][crate::model::HyperparameterTuningJob::state].
    pub fn set_state<T: std::convert::Into<crate::model::JobState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::HyperparameterTuningJob::create_time].
    pub fn set_create_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.create_time = v.into();
        self
    }

    /// Sets the value of [start_time][crate::model::HyperparameterTuningJob::start_time].
    pub fn set_start_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][crate::model::HyperparameterTuningJob::end_time].
    pub fn set_end_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::HyperparameterTuningJob::update_time].
    pub fn set_update_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.update_time = v.into();
        self
    }

    /// Sets the value of [error][crate::model::HyperparameterTuningJob::error].
    pub fn set_error<T: std::convert::Into<std::option::Option<gax::error::rpc::Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::HyperparameterTuningJob::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for HyperparameterTuningJob {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.HyperparameterTuningJob"
    }
}

/// Represents a Neural Architecture Search (NAS) job.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NasJob {
    /// Output only. Resource name of the NasJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The display name of the NasJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Required. The specification of a NasJob.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub nas_job_spec: std::option::Option<wkt::Struct>,

    /// Output only. Output of the NasJob.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub nas_job_output: std::option::Option<wkt::Struct>,

    /// Output only. The detailed state of the job.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub state: crate::model::JobState,

    /// Output only. Time when the job was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job first entered the `JOB_STATE_RUNNING` state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job entered any of the final states.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job was most recently updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Only populated when job's state is JOB_STATE_FAILED or JOB_STATE_CANCELLED.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<gax::error::rpc::Status>,

    /// The labels with user-defined metadata to organize NasJobs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Optional. Enable a separation of Custom model training and restricted image training for tenant project.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub enable_restricted_image_training: bool,
}

impl NasJob {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::NasJob::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::NasJob::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [nas_job_spec][crate::model::NasJob::nas_job_spec].
    pub fn set_nas_job_spec<T: std::convert::Into<std::option::Option<wkt::Struct>>>(mut self, v: T) -> Self {
        self.nas_job_spec = v.into();
        self
    }

    /// Sets the value of [nas_job_output][crate::model::NasJob::nas_job_output].
    pub fn set_nas_job_output<T: std::convert::Into<std::option::Option<wkt::Struct>>>(mut self, v: T) -> Self {
        self.nas_job_output = v.into();
        self
    }

    /// Sets the value of [state][crate::model::NasJob::state].
    pub fn set_state<T: std::convert::Into<crate::model::JobState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::NasJob::create_time].
    pub fn set_create_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.create_time = v.into();
        self
    }

    /// Sets the value of [start_time][crate::model::NasJob::start_time].
    pub fn set_start_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][crate::model::NasJob::end_time].
    pub fn set_end_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::NasJob::update_time].
    pub fn set_update_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.update_time = v.into();
        self
    }

    /// Sets the value of [error][crate::model::NasJob::error].
    pub fn set_error<T: std::convert::Into<std::option::Option<gax::error::rpc::Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::NasJob::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [enable_restricted_image_training][crate::model::NasJob::enable_restricted_image_training].
    pub fn set_enable_restricted_image_training<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_restricted_image_training = v.into();
        self
    }
}

impl wkt::message::Message for NasJob {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.NasJob"
    }
}

/// Represents a uCAIP NasJob trial.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NasTrial {
    /// Output only. The identifier of the NasTrial assigned by the service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Output only. Time when the NasTrial was started.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the NasTrial's status changed to `SUCCEEDED` or `INFEASIBLE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,
}

impl NasTrial {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::NasTrial::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [start_time][crate::model::NasTrial::start_time].
    pub fn set_start_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][crate::model::NasTrial::end_time].
    pub fn set_end_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }
}

impl wkt::message::Message for NasTrial {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.NasTrial"
    }
}

/// Represents a NasTrial details along with its parameters.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NasTrialDetail {
    /// Output only. Resource name of the NasTrialDetail.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The parameters for the NasJob NasTrial.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parameters: std::string::String,

    /// The requested search NasTrial.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub search_trial: std::option::Option<crate::model::NasTrial>,

    /// The train NasTrial corresponding to search_trial.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub train_trial: std::option::Option<crate::model::NasTrial>,
}

impl NasTrialDetail {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::NasTrialDetail::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [parameters][crate::model::NasTrialDetail::parameters].
    pub fn set_parameters<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parameters = v.into();
        self
    }

    /// Sets the value of [search_trial][crate::model::NasTrialDetail::search_trial].
    pub fn set_search_trial<T: std::convert::Into<std::option::Option<crate::model::NasTrial>>>(mut self, v: T) -> Self {
        self.search_trial = v.into();
        self
    }

    /// Sets the value of [train_trial][crate::model::NasTrialDetail::train_trial].
    pub fn set_train_trial<T: std::convert::Into<std::option::Option<crate::model::NasTrial>>>(mut self, v: T) -> Self {
        self.train_trial = v.into();
        self
    }
}

impl wkt::message::Message for NasTrialDetail {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.NasTrialDetail"
    }
}

/// Success and error statistics of processing multiple entities (for example, DataItems or structured data rows) in batch.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompletionStats {
    /// Output only. The number of entities that had been processed successfully.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub successful_count: i64,

    /// Output only. The number of entities for which any error was encountered.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub failed_count: i64,

    /// Output only. In cases when enough errors are encountered a job, pipeline, or operation may be failed as a whole.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub incomplete_count: i64,
}

impl CompletionStats {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [successful_count][crate::model::CompletionStats::successful_count].
    pub fn set_successful_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.successful_count = v.into();
        self
    }

    /// Sets the value of [failed_count][crate::model::CompletionStats::failed_count].
    pub fn set_failed_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.failed_count = v.into();
        self
    }

    /// Sets the value of [incomplete_count][crate::model::CompletionStats::incomplete_count].
    pub fn set_incomplete_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.incomplete_count = v.into();
        self
    }
}

impl wkt::message::Message for CompletionStats {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CompletionStats"
    }
}

/// A job that uses a Model to produce predictions on multiple input instances.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchPredictionJob {
    /// Output only. Resource name of the BatchPredictionJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The user-defined name of this BatchPredictionJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// The name of the Model resource that produces the predictions via this job.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub model: std::string::String,

    /// Output only. The version ID of the Model that produces the predictions via this job.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub model_version_id: std::string::String,

    /// Required. Input configuration of the instances on which predictions are performed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_config: std::option::Option<crate::model::batch_prediction_job::InputConfig>,

    /// The parameters that govern the predictions.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_parameters: std::option::Option<wkt::Value>,

    /// Required. The Configuration specifying where output predictions should be written.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_config: std::option::Option<crate::model::batch_prediction_job::OutputConfig>,

    /// The service account that the DeployedModel's container runs as.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service_account: std::string::String,

    /// Generate explanation with the batch prediction results.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub generate_explanation: bool,

    /// Output only. The detailed state of the job.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub state: crate::model::JobState,

    /// Output only. Only populated when the job's state is JOB_STATE_FAILED or JOB_STATE_CANCELLED.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<gax::error::rpc::Status>,

    /// Output only. Partial failures encountered.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub partial_failures: std::vec::Vec<gax::error::rpc::Status>,

    /// Output only. Statistics on completed and failed prediction instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub completion_stats: std::option::Option<crate::model::CompletionStats>,

    /// Output only. Time when the job was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job first entered the `JOB_STATE_RUNNING` state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job entered any of the final states.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the job was most recently updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// The labels with user-defined metadata to organize BatchPredictionJobs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// For custom-trained Models and AutoML Tabular Models, the container of the DeployedModel instances will send `stderr` and `stdout` streams to Cloud Logging by default.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub disable_container_logging: bool,
}

impl BatchPredictionJob {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::BatchPredictionJob::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::BatchPredictionJob::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [model][crate::model::BatchPredictionJob::model].
    pub fn set_model<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.model = v.into();
        self
    }

    /// Sets the value of [model_version_id][crate::model::BatchPredictionJob::model_version_id].
    pub fn set_model_version_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.model_version_id = v.into();
        self
    }

    /// Sets the value of [input_config][crate::model::BatchPredictionJob::input_config].
    pub fn set_input_config<T: std::convert::Into<std::option::Option<crate::model::batch_prediction_job::InputConfig>>>(mut self, v: T) -> Self {
        self.input_config = v.into();
        self
    }

    /// Sets the value of [model_parameters][crate::model::BatchPredictionJob::model_parameters].
    pub fn set_model_parameters<T: std::convert::Into<std::option::Option<wkt::Value>>>(mut self, v: T) -> Self {
        self.model_parameters = v.into();
        self
    }

    /// Sets the value of [output_config][crate::model::BatchPredictionJob::output_config].
    pub fn set_output_config<T: std::convert::Into<std::option::Option<crate::model::batch_prediction_job::OutputConfig>>>(mut self, v: T) -> Self {
        self.output_config = v.into();
        self
    }

    /// Sets the value of [service_account][crate::model::BatchPredictionJob::service_account].
    pub fn set_service_account<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.service_account = v.into();
        self
    }

    /// Sets the value of [generate_explanation][crate::model::BatchPredictionJob::generate_explanation].
    pub fn set_generate_explanation<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.generate_explanation = v.into();
        self
    }

    /// Sets the value of [state][crate::model::BatchPredictionJob::state].
    pub fn set_state<T: std::convert::Into<crate::model::JobState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [error][crate::model::BatchPredictionJob::error].
    pub fn set_error<T: std::convert::Into<std::option::Option<gax::error::rpc::Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }

    /// Sets the value of [partial_failures][crate::model::BatchPredictionJob::partial_failures].
    pub fn set_partial_failures<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<gax::error::rpc::Status>,
    {
        use std::iter::Iterator;
        self.partial_failures = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [completion_stats][crate::model::BatchPredictionJob::completion_stats].
    pub fn set_completion_stats<T: std::convert::Into<std::option::Option<crate::model::CompletionStats>>>(mut self, v: T) -> Self {
        self.completion_stats = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::BatchPredictionJob::create_time].
    pub fn set_create_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.create_time = v.into();
        self
    }

    /// Sets the value of [start_time][crate::model::BatchPredictionJob::start_time].
    pub fn set_start_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][crate::model::BatchPredictionJob::end_time].
    pub fn set_end_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::BatchPredictionJob::update_time].
    pub fn set_update_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.update_time = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::BatchPredictionJob::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [disable_container_logging][crate::model::BatchPredictionJob::disable_container_logging].
    pub fn set_disable_container_logging<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.disable_container_logging = v.into();
        self
    }
}

impl wkt::message::Message for BatchPredictionJob {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.BatchPredictionJob"
    }
}

/// Defines additional types related to [BatchPredictionJob].
pub mod batch_prediction_job {
    #[allow(unused_imports)]
    use super::*;

    /// Configures the input to BatchPredictionJob.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct InputConfig {
        /// Required. The format in which instances are given.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub instances_format: std::string::String,

        /// The Cloud Storage location for the input instances.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub gcs_source: std::option::Option<crate::model::GcsSource>,
    }

    impl InputConfig {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instances_format][crate::model::batch_prediction_job::InputConfig::instances_format].
    pub fn set_instances_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instances_format = v.into();
        self
    }

        /// Sets the value of [gcs_source][crate::model::batch_prediction_job::InputConfig::gcs_source].
    pub fn set_gcs_source<T: std::convert::Into<std::option::Option<crate::model::GcsSource>>>(mut self, v: T) -> Self {
        self.gcs_source = v.into();
        self
    }
    }

    impl wkt::message::Message for InputConfig {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.aiplatform.v1.BatchPredictionJob.InputConfig"
        }
    }

    /// Configures the output of BatchPredictionJob.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct OutputConfig {
        /// Required. The format in which Vertex AI gives the predictions.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub predictions_format: std::string::String,

        /// The Cloud Storage location of the directory where the output is to be written to.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub gcs_destination: std::option::Option<crate::model::GcsDestination>,
    }

    impl OutputConfig {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [predictions_format][crate::model::batch_prediction_job::OutputConfig::predictions_format].
    pub fn set_predictions_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.predictions_format = v.into();
        self
    }

        /// Sets the value of [gcs_destination][crate::model::batch_prediction_job::OutputConfig::gcs_destination].
    pub fn set_gcs_destination<T: std::convert::Into<std::option::Option<crate::model::GcsDestination>>>(mut self, v: T) -> Self {
        self.gcs_destination = v.into();
        self
    }
    }

    impl wkt::message::Message for OutputConfig {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.aiplatform.v1.BatchPredictionJob.OutputConfig"
        }
    }
}

/// The config for scheduling monitoring job.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ModelDeploymentMonitoringScheduleConfig {
    /// Required. The model monitoring job scheduling interval.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub monitor_interval: std::option::Option<wkt::Duration>,

    /// The time window of the prediction data being included in each prediction dataset.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub monitor_window: std::option::Option<wkt::Duration>,
}

impl ModelDeploymentMonitoringScheduleConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [monitor_interval][crate::model::ModelDeploymentMonitoringScheduleConfig::monitor_interval].
    pub fn set_monitor_interval<T: std::convert::Into<std::option::Option<wkt::Duration>>>(mut self, v: T) -> Self {
        self.monitor_interval = v.into();
        self
    }

    /// Sets the value of [monitor_window][crate::model::ModelDeploymentMonitoringScheduleConfig::monitor_window].
    pub fn set_monitor_window<T: std::convert::Into<std::option::Option<wkt::Duration>>>(mut self, v: T) -> Self {
        self.monitor_window = v.into();
        self
    }
}

impl wkt::message::Message for ModelDeploymentMonitoringScheduleConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ModelDeploymentMonitoringScheduleConfig"
    }
}

/// ModelDeploymentMonitoringObjectiveConfig contains the pair of deployed_model_id to ModelMonitoringObjectiveConfig.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ModelDeploymentMonitoringObjectiveConfig {
    /// The DeployedModel ID of the objective config.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deployed_model_id: std::string::String,

    /// The objective config of for the modelmonitoring job of this deployed model.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub objective_config: std::option::Option<wkt::Struct>,
}

impl ModelDeploymentMonitoringObjectiveConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [deployed_model_id][crate::model::ModelDeploymentMonitoringObjectiveConfig::deployed_model_id].
    pub fn set_deployed_model_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.deployed_model_id = v.into();
        self
    }

    /// Sets the value of [objective_config][crate::model::ModelDeploymentMonitoringObjectiveConfig::objective_config].
    pub fn set_objective_config<T: std::convert::Into<std::option::Option<wkt::Struct>>>(mut self, v: T) -> Self {
        self.objective_config = v.into();
        self
    }
}

impl wkt::message::Message for ModelDeploymentMonitoringObjectiveConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ModelDeploymentMonitoringObjectiveConfig"
    }
}

/// Represents a job that runs periodically to monitor the deployed models in an endpoint.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ModelDeploymentMonitoringJob {
    /// Output only. Resource name of a ModelDeploymentMonitoringJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The user-defined name of the ModelDeploymentMonitoringJob.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Required. Endpoint resource name.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub endpoint: std::string::String,

    /// Output only. The detailed state of the monitoring job.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub state: crate::model::JobState,

    /// Output only. Schedule state when the monitoring job is in Running state.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub schedule_state: crate::model::model_deployment_monitoring_job::MonitoringScheduleState,

    /// Required. The config for monitoring objectives.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub model_deployment_monitoring_objective_configs: std::vec::Vec<crate::model::ModelDeploymentMonitoringObjectiveConfig>,

    /// Required. Schedule config for running the monitoring job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_deployment_monitoring_schedule_config: std::option::Option<crate::model::ModelDeploymentMonitoringScheduleConfig>,

    /// Required. Sample Strategy for logging.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub logging_sampling_strategy: std::option::Option<wkt::Struct>,

    /// YAML schema file uri describing the format of a single instance, which are given to format this Endpoint's prediction.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub predict_instance_schema_uri: std::string::String,

    /// YAML schema file uri describing the format of a single instance that you want Tensorflow Data Validation (TFDV) to analyze.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub analysis_instance_schema_uri: std::string::String,

    /// The TTL of BigQuery tables in user projects which stores logs.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_ttl: std::option::Option<wkt::Duration>,

    /// The labels with user-defined metadata to organize your ModelDeploymentMonitoringJob.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Output only. Timestamp when this ModelDeploymentMonitoringJob was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Timestamp when this ModelDeploymentMonitoringJob was updated most recently.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Timestamp when this monitoring pipeline will be scheduled to run for the next round.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_schedule_time: std::option::Option<wkt::Timestamp>,

    /// Stats anomalies base folder path.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stats_anomalies_base_directory: std::option::Option<crate::model::GcsDestination>,

    /// If true, the scheduled monitoring pipeline logs are sent to Google Cloud Logging.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub enable_monitoring_pipeline_logs: bool,

    /// Output only. Only populated when the job's state is `JOB_STATE_FAILED` or `JOB_STATE_CANCELLED`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<gax::error::rpc::Status>,
}

impl ModelDeploymentMonitoringJob {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ModelDeploymentMonitoringJob::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::ModelDeploymentMonitoringJob::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [endpoint][crate::model::ModelDeploymentMonitoringJob::endpoint].
    pub fn set_endpoint<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.endpoint = v.into();
        self
    }

    /// Sets the value of [state][crate::model::ModelDeploymentMonitoringJob::state].
    pub fn set_state<T: std::convert::Into<crate::model::JobState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [schedule_state][crate::model::ModelDeploymentMonitoringJob::schedule_state].
    pub fn set_schedule_state<T: std::convert::Into<crate::model::model_deployment_monitoring_job::MonitoringScheduleState>>(mut self, v: T) -> Self {
        self.schedule_state = v.into();
        self
    }

    /// Sets the value of [model_deployment_monitoring_objective_configs][crate::model::ModelDeploymentMonitoringJob::model_deployment_monitoring_objective_configs].
    pub fn set_model_deployment_monitoring_objective_configs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ModelDeploymentMonitoringObjectiveConfig>,
    {
        use std::iter::Iterator;
        self.model_deployment_monitoring_objective_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [model_deployment_monitoring_schedule_config][crate::model::ModelDeploymentMonitoringJob::model_deployment_monitoring_schedule_config].
    pub fn set_model_deployment_monitoring_schedule_config<T: std::convert::Into<std::option::Option<crate::model::ModelDeploymentMonitoringScheduleConfig>>>(mut self, v: T) -> Self {
        self.model_deployment_monitoring_schedule_config = v.into();
        self
    }

    /// Sets the value of [logging_sampling_strategy][crate::model::ModelDeploymentMonitoringJob::logging_sampling_strategy].
    pub fn set_logging_sampling_strategy<T: std::convert::Into<std::option::Option<wkt::Struct>>>(mut self, v: T) -> Self {
        self.logging_sampling_strategy = v.into();
        self
    }

    /// Sets the value of [predict_instance_schema_uri][crate::model::ModelDeploymentMonitoringJob::predict_instance_schema_uri].
    pub fn set_predict_instance_schema_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.predict_instance_schema_uri = v.into();
        self
    }

    /// Sets the value of [analysis_instance_schema_uri][crate::model::ModelDeploymentMonitoringJob::analysis_instance_schema_uri].
    pub fn set_analysis_instance_schema_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.analysis_instance_schema_uri = v.into();
        self
    }

    /// Sets the value of [log_ttl][crate::model::ModelDeploymentMonitoringJob::log_ttl].
    pub fn set_log_ttl<T: std::convert::Into<std::option::Option<wkt::Duration>>>(mut self, v: T) -> Self {
        self.log_ttl = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::ModelDeploymentMonitoringJob::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [create_time][crate::model::ModelDeploymentMonitoringJob::create_time].
    pub fn set_create_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.create_time = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::ModelDeploymentMonitoringJob::update_time].
    pub fn set_update_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.update_time = v.into();
        self
    }

    /// Sets the value of [next_schedule_time][crate::model::ModelDeploymentMonitoringJob::next_schedule_time].
    pub fn set_next_schedule_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.next_schedule_time = v.into();
        self
    }

    /// Sets the value of [stats_anomalies_base_directory][crate::model::ModelDeploymentMonitoringJob::stats_anomalies_base_directory].
    pub fn set_stats_anomalies_base_directory<T: std::convert::Into<std::option::Option<crate::model::GcsDestination>>>(mut self, v: T) -> Self {
        self.stats_anomalies_base_directory = v.into();
        self
    }

    /// Sets the value of [enable_monitoring_pipeline_logs][crate::model::ModelDeploymentMonitoringJob::enable_monitoring_pipeline_logs].
    pub fn set_enable_monitoring_pipeline_logs<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_monitoring_pipeline_logs = v.into();
        self
    }

    /// Sets the value of [error][crate::model::ModelDeploymentMonitoringJob::error].
    pub fn set_error<T: std::convert::Into<std::option::Option<gax::error::rpc::Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }
}

impl wkt::message::Message for ModelDeploymentMonitoringJob {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ModelDeploymentMonitoringJob"
    }
}

/// Defines additional types related to [ModelDeploymentMonitoringJob].
pub mod model_deployment_monitoring_job {
    #[allow(unused_imports)]
    use super::*;

    /// The state to specify the monitoring pipeline.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum MonitoringScheduleState {
        /// Unspecified state.
        #[default]
        Unspecified,
        /// The pipeline is picked up and wait to run.
        Pending,
        /// The pipeline is offline and will be scheduled for next run.
        Offline,
        /// The pipeline is running.
        Running,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [MonitoringScheduleState::value] or
        /// [MonitoringScheduleState::name].
        UnknownValue(monitoring_schedule_state::UnknownValue),
    }

    #[doc(hidden)]
    pub mod monitoring_schedule_state {
        /// A value of [MonitoringScheduleState][super::MonitoringScheduleState] unknown to this version of the library.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct UnknownValue(pub(crate) wkt::internal::EnumValue);
    }

    impl MonitoringScheduleState {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Unspecified => std::option::Option::Some(0),
                Self::Pending => std::option::Option::Some(1),
                Self::Offline => std::option::Option::Some(2),
                Self::Running => std::option::Option::Some(3),
                Self::UnknownValue(u) => match &u.0 {
                    wkt::internal::EnumValue::Integer(v) => std::option::Option::Some(*v),
                    wkt::internal::EnumValue::String(_) => std::option::Option::None,
                },
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Unspecified => std::option::Option::Some("MONITORING_SCHEDULE_STATE_UNSPECIFIED"),
                Self::Pending => std::option::Option::Some("PENDING"),
                Self::Offline => std::option::Option::Some("OFFLINE"),
                Self::Running => std::option::Option::Some("RUNNING"),
                Self::UnknownValue(u) => match &u.0 {
                    wkt::internal::EnumValue::String(s) => std::option::Option::Some(s.as_str()),
                    wkt::internal::EnumValue::Integer(_) => std::option::Option::None,
                },
            }
        }
    }

    impl std::fmt::Display for MonitoringScheduleState {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match (self.name(), self.value()) {
                (std::option::Option::Some(name), _) => f.write_str(name),
                (std::option::Option::None, v) => write!(f, "{}", v.unwrap_or_default()),
            }
        }
    }

    impl std::convert::From<i32> for MonitoringScheduleState {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Pending,
                2 => Self::Offline,
                3 => Self::Running,
                _ => Self::UnknownValue(monitoring_schedule_state::UnknownValue(
                    wkt::internal::EnumValue::Integer(value),
                )),
            }
        }
    }

    impl std::convert::From<&str> for MonitoringScheduleState {
        fn from(value: &str) -> Self {
            use std::string::ToString;
            match value {
                "MONITORING_SCHEDULE_STATE_UNSPECIFIED" => Self::Unspecified,
                "PENDING" => Self::Pending,
                "OFFLINE" => Self::Offline,
                "RUNNING" => Self::Running,
                _ => Self::UnknownValue(monitoring_schedule_state::UnknownValue(
                    wkt::internal::EnumValue::String(value.to_string()),
                )),
            }
        }
    }

    impl serde::ser::Serialize for MonitoringScheduleState {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            match self.name() {
                std::option::Option::Some(name) => serializer.serialize_str(name),
                std::option::Option::None => serializer.serialize_i32(self.value().unwrap_or_default()),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for MonitoringScheduleState {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <wkt::internal::EnumValue as serde::de::Deserialize>::deserialize(deserializer)?;
            std::result::Result::Ok(match value {
                wkt::internal::EnumValue::Integer(v) => Self::from(v),
                wkt::internal::EnumValue::String(s) => Self::from(s.as_str()),
            })
        }
    }
}

/// Statistics and anomalies generated by Model Monitoring.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ModelMonitoringStatsAnomalies {
    /// Model Monitoring Objective those stats and anomalies belonging to.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub objective: crate::model::ModelDeploymentMonitoringObjectiveType,

    /// Deployed Model ID.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deployed_model_id: std::string::String,

    /// Number of anomalies within all stats.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub anomaly_count: i32,

    /// A list of historical Stats and Anomalies generated for all Features.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub feature_stats: std::vec::Vec<wkt::Struct>,
}

impl ModelMonitoringStatsAnomalies {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [objective][crate::model::ModelMonitoringStatsAnomalies::objective].
    pub fn set_objective<T: std::convert::Into<crate::model::ModelDeploymentMonitoringObjectiveType>>(mut self, v: T) -> Self {
        self.objective = v.into();
        self
    }

    /// Sets the value of [deployed_model_id][crate::model::ModelMonitoringStatsAnomalies::deployed_model_id].
    pub fn set_deployed_model_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.deployed_model_id = v.into();
        self
    }

    /// Sets the value of [anomaly_count][crate::model::ModelMonitoringStatsAnomalies::anomaly_count].
    pub fn set_anomaly_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.anomaly_count = v.into();
        self
    }

    /// Sets the value of [feature_stats][crate::model::ModelMonitoringStatsAnomalies::feature_stats].
    pub fn set_feature_stats<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Struct>,
    {
        use std::iter::Iterator;
        self.feature_stats = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for ModelMonitoringStatsAnomalies {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ModelMonitoringStatsAnomalies"
    }
}

/// Generic Metadata shared by all operations.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GenericOperationMetadata {
    /// Output only. Partial failures encountered.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub partial_failures: std::vec::Vec<gax::error::rpc::Status>,

    /// Output only. Time when the operation was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the operation was updated for the last time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,
}

impl GenericOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [partial_failures][crate::model::GenericOperationMetadata::partial_failures].
    pub fn set_partial_failures<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<gax::error::rpc::Status>,
    {
        use std::iter::Iterator;
        self.partial_failures = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [create_time][crate::model::GenericOperationMetadata::create_time].
    pub fn set_create_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.create_time = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::GenericOperationMetadata::update_time].
    pub fn set_update_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.update_time = v.into();
        self
    }
}

impl wkt::message::Message for GenericOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GenericOperationMetadata"
    }
}

/// Details of operations that perform deletes of any entities.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteOperationMetadata {
    /// The common part of the operation metadata.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub generic_metadata: std::option::Option<crate::model::GenericOperationMetadata>,
}

impl DeleteOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [generic_metadata][crate::model::DeleteOperationMetadata::generic_metadata].
    pub fn set_generic_metadata<T: std::convert::Into<std::option::Option<crate::model::GenericOperationMetadata>>>(mut self, v: T) -> Self {
        self.generic_metadata = v.into();
        self
    }
}

impl wkt::message::Message for DeleteOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DeleteOperationMetadata"
    }
}

/// Runtime operation information for [JobService.UpdateModelDeploymentMonitoringJob][google.cloud.aiplatform.v1.JobService.UpdateModelDeploymentMonitoringJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateModelDeploymentMonitoringJobOperationMetadata {
    /// The operation generic information.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub generic_metadata: std::option::Option<crate::model::GenericOperationMetadata>,
}

impl UpdateModelDeploymentMonitoringJobOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [generic_metadata][crate::model::UpdateModelDeploymentMonitoringJobOperationMetadata::generic_metadata].
    pub fn set_generic_metadata<T: std::convert::Into<std::option::Option<crate::model::GenericOperationMetadata>>>(mut self, v: T) -> Self {
        self.generic_metadata = v.into();
        self
    }
}

impl wkt::message::Message for UpdateModelDeploymentMonitoringJobOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.UpdateModelDeploymentMonitoringJobOperationMetadata"
    }
}

/// Request message for [JobService.CreateCustomJob][google.cloud.aiplatform.v1.JobService.CreateCustomJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateCustomJobRequest {
    /// Required. The resource name of the Location to create the CustomJob in. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The CustomJob to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub custom_job: std::option::Option<crate::model::CustomJob>,
}

impl CreateCustomJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateCustomJobRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [custom_job][crate::model::CreateCustomJobRequest::custom_job].
    pub fn set_custom_job<T: std::convert::Into<std::option::Option<crate::model::CustomJob>>>(mut self, v: T) -> Self {
        self.custom_job = v.into();
        self
    }
}

impl wkt::message::Message for CreateCustomJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CreateCustomJobRequest"
    }
}

/// Request message for [JobService.GetCustomJob][google.cloud.aiplatform.v1.JobService.GetCustomJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetCustomJobRequest {
    /// Required. The name of the CustomJob resource.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetCustomJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetCustomJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetCustomJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GetCustomJobRequest"
    }
}

/// Request message for [JobService.ListCustomJobs][google.cloud.aiplatform.v1.JobService.ListCustomJobs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCustomJobsRequest {
    /// Required. The resource name of the Location to list the CustomJobs from. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Mask specifying which fields to read.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl ListCustomJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListCustomJobsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListCustomJobsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListCustomJobsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListCustomJobsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [read_mask][crate::model::ListCustomJobsRequest::read_mask].
    pub fn set_read_mask<T: std::convert::Into<std::option::Option<wkt::FieldMask>>>(mut self, v: T) -> Self {
        self.read_mask = v.into();
        self
    }
}

impl wkt::message::Message for ListCustomJobsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListCustomJobsRequest"
    }
}

/// Response message for [JobService.ListCustomJobs][google.cloud.aiplatform.v1.JobService.ListCustomJobs]
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCustomJobsResponse {
    /// List of CustomJobs in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub custom_jobs: std::vec::Vec<crate::model::CustomJob>,

    /// A token to retrieve the next page of results. Pass to [ListCustomJobsRequest.page_token][google.cloud.aiplatform.v1.ListCustomJobsRequest.page_token] to obtain that page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListCustomJobsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [custom_jobs][crate::model::ListCustomJobsResponse::custom_jobs].
    pub fn set_custom_jobs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CustomJob>,
    {
        use std::iter::Iterator;
        self.custom_jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListCustomJobsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListCustomJobsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListCustomJobsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListCustomJobsResponse {
    type PageItem = crate::model::CustomJob;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.custom_jobs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.DeleteCustomJob][google.cloud.aiplatform.v1.JobService.DeleteCustomJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteCustomJobRequest {
    /// Required. The name of the CustomJob resource to be deleted.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteCustomJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteCustomJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteCustomJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DeleteCustomJobRequest"
    }
}

/// Request message for [JobService.CancelCustomJob][google.cloud.aiplatform.v1.JobService.CancelCustomJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelCustomJobRequest {
    /// Required. The name of the CustomJob to cancel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl CancelCustomJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CancelCustomJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for CancelCustomJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CancelCustomJobRequest"
    }
}

/// Request message for [JobService.CreateDataLabelingJob][google.cloud.aiplatform.v1.JobService.CreateDataLabelingJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateDataLabelingJobRequest {
    /// Required. The resource name of the Location to create the DataLabelingJob in. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The DataLabelingJob to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_labeling_job: std::option::Option<crate::model::DataLabelingJob>,
}

impl CreateDataLabelingJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateDataLabelingJobRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [data_labeling_job][crate::model::CreateDataLabelingJobRequest::data_labeling_job].
    pub fn set_data_labeling_job<T: std::convert::Into<std::option::Option<crate::model::DataLabelingJob>>>(mut self, v: T) -> Self {
        self.data_labeling_job = v.into();
        self
    }
}

impl wkt::message::Message for CreateDataLabelingJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CreateDataLabelingJobRequest"
    }
}

/// Request message for [JobService.GetDataLabelingJob][google.cloud.aiplatform.v1.JobService.GetDataLabelingJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDataLabelingJobRequest {
    /// Required. The name of the DataLabelingJob resource.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetDataLabelingJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetDataLabelingJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetDataLabelingJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GetDataLabelingJobRequest"
    }
}

/// Request message for [JobService.ListDataLabelingJobs][google.cloud.aiplatform.v1.JobService.ListDataLabelingJobs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDataLabelingJobsRequest {
    /// Required. The resource name of the Location to list the DataLabelingJobs from. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Mask specifying which fields to read.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl ListDataLabelingJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListDataLabelingJobsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListDataLabelingJobsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListDataLabelingJobsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListDataLabelingJobsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [read_mask][crate::model::ListDataLabelingJobsRequest::read_mask].
    pub fn set_read_mask<T: std::convert::Into<std::option::Option<wkt::FieldMask>>>(mut self, v: T) -> Self {
        self.read_mask = v.into();
        self
    }
}

impl wkt::message::Message for ListDataLabelingJobsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListDataLabelingJobsRequest"
    }
}

/// Response message for [JobService.ListDataLabelingJobs][google.cloud.aiplatform.v1.JobService.ListDataLabelingJobs]
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDataLabelingJobsResponse {
    /// List of DataLabelingJobs in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub data_labeling_jobs: std::vec::Vec<crate::model::DataLabelingJob>,

    /// A token to retrieve the next page of results. Pass to [ListDataLabelingJobsRequest.page_token][google.cloud.aiplatform.v1.ListDataLabelingJobsRequest.page_token] to obtain that page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListDataLabelingJobsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data_labeling_jobs][crate::model::ListDataLabelingJobsResponse::data_labeling_jobs].
    pub fn set_data_labeling_jobs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::DataLabelingJob>,
    {
        use std::iter::Iterator;
        self.data_labeling_jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDataLabelingJobsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListDataLabelingJobsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListDataLabelingJobsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListDataLabelingJobsResponse {
    type PageItem = crate::model::DataLabelingJob;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.data_labeling_jobs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.DeleteDataLabelingJob][google.cloud.aiplatform.v1.JobService.DeleteDataLabelingJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteDataLabelingJobRequest {
    /// Required. The name of the DataLabelingJob resource to be deleted.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteDataLabelingJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteDataLabelingJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteDataLabelingJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DeleteDataLabelingJobRequest"
    }
}

/// Request message for [JobService.CancelDataLabelingJob][google.cloud.aiplatform.v1.JobService.CancelDataLabelingJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelDataLabelingJobRequest {
    /// Required. The name of the DataLabelingJob to cancel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl CancelDataLabelingJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CancelDataLabelingJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for CancelDataLabelingJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CancelDataLabelingJobRequest"
    }
}

/// Request message for [JobService.CreateHyperparameterTuningJob][google.cloud.aiplatform.v1.JobService.CreateHyperparameterTuningJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateHyperparameterTuningJobRequest {
    /// Required. The resource name of the Location to create the HyperparameterTuningJob in. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The HyperparameterTuningJob to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyperparameter_tuning_job: std::option::Option<crate::model::HyperparameterTuningJob>,
}

impl CreateHyperparameterTuningJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateHyperparameterTuningJobRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [hyperparameter_tuning_job][crate::model::CreateHyperparameterTuningJobRequest::hyperparameter_tuning_job].
    pub fn set_hyperparameter_tuning_job<T: std::convert::Into<std::option::Option<crate::model::HyperparameterTuningJob>>>(mut self, v: T) -> Self {
        self.hyperparameter_tuning_job = v.into();
        self
    }
}

impl wkt::message::Message for CreateHyperparameterTuningJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CreateHyperparameterTuningJobRequest"
    }
}

/// Request message for [JobService.GetHyperparameterTuningJob][google.cloud.aiplatform.v1.JobService.GetHyperparameterTuningJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetHyperparameterTuningJobRequest {
    /// Required. The name of the HyperparameterTuningJob resource.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetHyperparameterTuningJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetHyperparameterTuningJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetHyperparameterTuningJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GetHyperparameterTuningJobRequest"
    }
}

/// Request message for [JobService.ListHyperparameterTuningJobs][google.cloud.aiplatform.v1.JobService.ListHyperparameterTuningJobs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListHyperparameterTuningJobsRequest {
    /// Required. The resource name of the Location to list the HyperparameterTuningJobs from. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Mask specifying which fields to read.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl ListHyperparameterTuningJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListHyperparameterTuningJobsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListHyperparameterTuningJobsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListHyperparameterTuningJobsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListHyperparameterTuningJobsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [read_mask][crate::model::ListHyperparameterTuningJobsRequest::read_mask].
    pub fn set_read_mask<T: std::convert::Into<std::option::Option<wkt::FieldMask>>>(mut self, v: T) -> Self {
        self.read_mask = v.into();
        self
    }
}

impl wkt::message::Message for ListHyperparameterTuningJobsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListHyperparameterTuningJobsRequest"
    }
}

/// Response message for [JobService.ListHyperparameterTuningJobs][google.cloud.aiplatform.v1.JobService.ListHyperparameterTuningJobs]
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListHyperparameterTuningJobsResponse {
    /// List of HyperparameterTuningJobs in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub hyperparameter_tuning_jobs: std::vec::Vec<crate::model::HyperparameterTuningJob>,

    /// A token to retrieve the next page of results. Pass to [ListHyperparameterTuningJobsRequest.page_token][google.cloud.aiplatform.v1.ListHyperparameterTuningJobsRequest.page_token] to obtain that page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListHyperparameterTuningJobsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hyperparameter_tuning_jobs][crate::model::ListHyperparameterTuningJobsResponse::hyperparameter_tuning_jobs].
    pub fn set_hyperparameter_tuning_jobs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::HyperparameterTuningJob>,
    {
        use std::iter::Iterator;
        self.hyperparameter_tuning_jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListHyperparameterTuningJobsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListHyperparameterTuningJobsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListHyperparameterTuningJobsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListHyperparameterTuningJobsResponse {
    type PageItem = crate::model::HyperparameterTuningJob;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.hyperparameter_tuning_jobs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.DeleteHyperparameterTuningJob][google.cloud.aiplatform.v1.JobService.DeleteHyperparameterTuningJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteHyperparameterTuningJobRequest {
    /// Required. The name of the HyperparameterTuningJob resource to be deleted.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteHyperparameterTuningJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteHyperparameterTuningJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteHyperparameterTuningJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DeleteHyperparameterTuningJobRequest"
    }
}

/// Request message for [JobService.CancelHyperparameterTuningJob][google.cloud.aiplatform.v1.JobService.CancelHyperparameterTuningJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelHyperparameterTuningJobRequest {
    /// Required. The name of the HyperparameterTuningJob to cancel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl CancelHyperparameterTuningJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CancelHyperparameterTuningJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for CancelHyperparameterTuningJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CancelHyperparameterTuningJobRequest"
    }
}

/// Request message for [JobService.CreateNasJob][google.cloud.aiplatform.v1.JobService.CreateNasJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateNasJobRequest {
    /// Required. The resource name of the Location to create the NasJob in. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The NasJob to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub nas_job: std::option::Option<crate::model::NasJob>,
}

impl CreateNasJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateNasJobRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [nas_job][crate::model::CreateNasJobRequest::nas_job].
    pub fn set_nas_job<T: std::convert::Into<std::option::Option<crate::model::NasJob>>>(mut self, v: T) -> Self {
        self.nas_job = v.into();
        self
    }
}

impl wkt::message::Message for CreateNasJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CreateNasJobRequest"
    }
}

/// Request message for [JobService.GetNasJob][google.cloud.aiplatform.v1.JobService.GetNasJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetNasJobRequest {
    /// Required. The name of the NasJob resource.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetNasJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetNasJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetNasJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GetNasJobRequest"
    }
}

/// Request message for [JobService.ListNasJobs][google.cloud.aiplatform.v1.JobService.ListNasJobs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNasJobsRequest {
    /// Required. The resource name of the Location to list the NasJobs from. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Mask specifying which fields to read.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl ListNasJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListNasJobsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListNasJobsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListNasJobsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListNasJobsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [read_mask][crate::model::ListNasJobsRequest::read_mask].
    pub fn set_read_mask<T: std::convert::Into<std::option::Option<wkt::FieldMask>>>(mut self, v: T) -> Self {
        self.read_mask = v.into();
        self
    }
}

impl wkt::message::Message for ListNasJobsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListNasJobsRequest"
    }
}

/// Response message for [JobService.ListNasJobs][google.cloud.aiplatform.v1.JobService.ListNasJobs]
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNasJobsResponse {
    /// List of NasJobs in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub nas_jobs: std::vec::Vec<crate::model::NasJob>,

    /// A token to retrieve the next page of results. Pass to [ListNasJobsRequest.page_token][google.cloud.aiplatform.v1.ListNasJobsRequest.page_token] to obtain that page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListNasJobsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [nas_jobs][crate::model::ListNasJobsResponse::nas_jobs].
    pub fn set_nas_jobs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NasJob>,
    {
        use std::iter::Iterator;
        self.nas_jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListNasJobsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNasJobsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListNasJobsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListNasJobsResponse {
    type PageItem = crate::model::NasJob;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.nas_jobs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.DeleteNasJob][google.cloud.aiplatform.v1.JobService.DeleteNasJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteNasJobRequest {
    /// Required. The name of the NasJob resource to be deleted.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteNasJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteNasJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteNasJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DeleteNasJobRequest"
    }
}

/// Request message for [JobService.CancelNasJob][google.cloud.aiplatform.v1.JobService.CancelNasJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelNasJobRequest {
    /// Required. The name of the NasJob to cancel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl CancelNasJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CancelNasJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for CancelNasJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CancelNasJobRequest"
    }
}

/// Request message for [JobService.GetNasTrialDetail][google.cloud.aiplatform.v1.JobService.GetNasTrialDetail].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetNasTrialDetailRequest {
    /// Required. The name of the NasTrialDetail resource.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetNasTrialDetailRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetNasTrialDetailRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetNasTrialDetailRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GetNasTrialDetailRequest"
    }
}

/// Request message for [JobService.ListNasTrialDetails][google.cloud.aiplatform.v1.JobService.ListNasTrialDetails].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNasTrialDetailsRequest {
    /// Required. The name of the NasJob resource. Format: `projects/{project}/locations/{location}/nasJobs/{nas_job}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,
}

impl ListNasTrialDetailsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListNasTrialDetailsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListNasTrialDetailsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListNasTrialDetailsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNasTrialDetailsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListNasTrialDetailsRequest"
    }
}

/// Response message for [JobService.ListNasTrialDetails][google.cloud.aiplatform.v1.JobService.ListNasTrialDetails]
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNasTrialDetailsResponse {
    /// List of top NasTrials in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub nas_trial_details: std::vec::Vec<crate::model::NasTrialDetail>,

    /// A token to retrieve the next page of results.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListNasTrialDetailsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [nas_trial_details][crate::model::ListNasTrialDetailsResponse::nas_trial_details].
    pub fn set_nas_trial_details<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NasTrialDetail>,
    {
        use std::iter::Iterator;
        self.nas_trial_details = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListNasTrialDetailsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNasTrialDetailsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListNasTrialDetailsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListNasTrialDetailsResponse {
    type PageItem = crate::model::NasTrialDetail;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.nas_trial_details
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.CreateBatchPredictionJob][google.cloud.aiplatform.v1.JobService.CreateBatchPredictionJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateBatchPredictionJobRequest {
    /// Required. The resource name of the Location to create the BatchPredictionJob in. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The BatchPredictionJob to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub batch_prediction_job: std::option::Option<crate::model::BatchPredictionJob>,
}

impl CreateBatchPredictionJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateBatchPredictionJobRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [batch_prediction_job][crate::model::CreateBatchPredictionJobRequest::batch_prediction_job].
    pub fn set_batch_prediction_job<T: std::convert::Into<std::option::Option<crate::model::BatchPredictionJob>>>(mut self, v: T) -> Self {
        self.batch_prediction_job = v.into();
        self
    }
}

impl wkt::message::Message for CreateBatchPredictionJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CreateBatchPredictionJobRequest"
    }
}

/// Request message for [JobService.GetBatchPredictionJob][google.cloud.aiplatform.v1.JobService.GetBatchPredictionJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetBatchPredictionJobRequest {
    /// Required. The name of the BatchPredictionJob resource.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetBatchPredictionJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetBatchPredictionJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetBatchPredictionJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GetBatchPredictionJobRequest"
    }
}

/// Request message for [JobService.ListBatchPredictionJobs][google.cloud.aiplatform.v1.JobService.ListBatchPredictionJobs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBatchPredictionJobsRequest {
    /// Required. The resource name of the Location to list the BatchPredictionJobs from. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Mask specifying which fields to read.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl ListBatchPredictionJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListBatchPredictionJobsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListBatchPredictionJobsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListBatchPredictionJobsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListBatchPredictionJobsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [read_mask][crate::model::ListBatchPredictionJobsRequest::read_mask].
    pub fn set_read_mask<T: std::convert::Into<std::option::Option<wkt::FieldMask>>>(mut self, v: T) -> Self {
        self.read_mask = v.into();
        self
    }
}

impl wkt::message::Message for ListBatchPredictionJobsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListBatchPredictionJobsRequest"
    }
}

/// Response message for [JobService.ListBatchPredictionJobs][google.cloud.aiplatform.v1.JobService.ListBatchPredictionJobs]
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBatchPredictionJobsResponse {
    /// List of BatchPredictionJobs in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub batch_prediction_jobs: std::vec::Vec<crate::model::BatchPredictionJob>,

    /// A token to retrieve the next page of results. Pass to [ListBatchPredictionJobsRequest.page_token][google.cloud.aiplatform.v1.ListBatchPredictionJobsRequest.page_token] to obtain that page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListBatchPredictionJobsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [batch_prediction_jobs][crate::model::ListBatchPredictionJobsResponse::batch_prediction_jobs].
    pub fn set_batch_prediction_jobs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BatchPredictionJob>,
    {
        use std::iter::Iterator;
        self.batch_prediction_jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListBatchPredictionJobsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListBatchPredictionJobsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListBatchPredictionJobsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListBatchPredictionJobsResponse {
    type PageItem = crate::model::BatchPredictionJob;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.batch_prediction_jobs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.DeleteBatchPredictionJob][google.cloud.aiplatform.v1.JobService.DeleteBatchPredictionJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteBatchPredictionJobRequest {
    /// Required. The name of the BatchPredictionJob resource to be deleted.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteBatchPredictionJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteBatchPredictionJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteBatchPredictionJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DeleteBatchPredictionJobRequest"
    }
}

/// Request message for [JobService.CancelBatchPredictionJob][google.cloud.aiplatform.v1.JobService.CancelBatchPredictionJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelBatchPredictionJobRequest {
    /// Required. The name of the BatchPredictionJob to cancel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl CancelBatchPredictionJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CancelBatchPredictionJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for CancelBatchPredictionJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CancelBatchPredictionJobRequest"
    }
}

/// Request message for [JobService.CreateModelDeploymentMonitoringJob][google.cloud.aiplatform.v1.JobService.CreateModelDeploymentMonitoringJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateModelDeploymentMonitoringJobRequest {
    /// Required. The resource name of the Location to create the ModelDeploymentMonitoringJob in. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The ModelDeploymentMonitoringJob to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_deployment_monitoring_job: std::option::Option<crate::model::ModelDeploymentMonitoringJob>,
}

impl CreateModelDeploymentMonitoringJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateModelDeploymentMonitoringJobRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [model_deployment_monitoring_job][crate::model::CreateModelDeploymentMonitoringJobRequest::model_deployment_monitoring_job].
    pub fn set_model_deployment_monitoring_job<T: std::convert::Into<std::option::Option<crate::model::ModelDeploymentMonitoringJob>>>(mut self, v: T) -> Self {
        self.model_deployment_monitoring_job = v.into();
        self
    }
}

impl wkt::message::Message for CreateModelDeploymentMonitoringJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.CreateModelDeploymentMonitoringJobRequest"
    }
}

/// Request message for [JobService.GetModelDeploymentMonitoringJob][google.cloud.aiplatform.v1.JobService.GetModelDeploymentMonitoringJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetModelDeploymentMonitoringJobRequest {
    /// Required. The name of the ModelDeploymentMonitoringJob resource.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetModelDeploymentMonitoringJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetModelDeploymentMonitoringJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetModelDeploymentMonitoringJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.GetModelDeploymentMonitoringJobRequest"
    }
}

/// Request message for [JobService.ListModelDeploymentMonitoringJobs][google.cloud.aiplatform.v1.JobService.ListModelDeploymentMonitoringJobs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListModelDeploymentMonitoringJobsRequest {
    /// Required. The resource name of the Location to list the ModelDeploymentMonitoringJobs from. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Mask specifying which fields to read.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl ListModelDeploymentMonitoringJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListModelDeploymentMonitoringJobsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListModelDeploymentMonitoringJobsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListModelDeploymentMonitoringJobsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListModelDeploymentMonitoringJobsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [read_mask][crate::model::ListModelDeploymentMonitoringJobsRequest::read_mask].
    pub fn set_read_mask<T: std::convert::Into<std::option::Option<wkt::FieldMask>>>(mut self, v: T) -> Self {
        self.read_mask = v.into();
        self
    }
}

impl wkt::message::Message for ListModelDeploymentMonitoringJobsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListModelDeploymentMonitoringJobsRequest"
    }
}

/// Response message for [JobService.ListModelDeploymentMonitoringJobs][google.cloud.aiplatform.v1.JobService.ListModelDeploymentMonitoringJobs]
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListModelDeploymentMonitoringJobsResponse {
    /// List of ModelDeploymentMonitoringJobs in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub model_deployment_monitoring_jobs: std::vec::Vec<crate::model::ModelDeploymentMonitoringJob>,

    /// A token to retrieve the next page of results. Pass to [ListModelDeploymentMonitoringJobsRequest.page_token][google.cloud.aiplatform.v1.ListModelDeploymentMonitoringJobsRequest.page_token] to obtain that page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListModelDeploymentMonitoringJobsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [model_deployment_monitoring_jobs][crate::model::ListModelDeploymentMonitoringJobsResponse::model_deployment_monitoring_jobs].
    pub fn set_model_deployment_monitoring_jobs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ModelDeploymentMonitoringJob>,
    {
        use std::iter::Iterator;
        self.model_deployment_monitoring_jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListModelDeploymentMonitoringJobsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListModelDeploymentMonitoringJobsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ListModelDeploymentMonitoringJobsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListModelDeploymentMonitoringJobsResponse {
    type PageItem = crate::model::ModelDeploymentMonitoringJob;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.model_deployment_monitoring_jobs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.DeleteModelDeploymentMonitoringJob][google.cloud.aiplatform.v1.JobService.DeleteModelDeploymentMonitoringJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteModelDeploymentMonitoringJobRequest {
    /// Required. The name of the ModelDeploymentMonitoringJob resource to be deleted.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteModelDeploymentMonitoringJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteModelDeploymentMonitoringJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteModelDeploymentMonitoringJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.DeleteModelDeploymentMonitoringJobRequest"
    }
}

/// Request message for [JobService.SearchModelDeploymentMonitoringStatsAnomalies][google.cloud.aiplatform.v1.JobService.SearchModelDeploymentMonitoringStatsAnomalies].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchModelDeploymentMonitoringStatsAnomaliesRequest {
    /// Required. ModelDeploymentMonitoring Job resource name. Format: `projects/{project}/locations/{location}/modelDeploymentMonitoringJobs/{model_deployment_monitoring_job}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub model_deployment_monitoring_job: std::string::String,

    /// Required. The DeployedModel ID of the [ModelDeploymentMonitoringObjectiveConfig.deployed_model_id].
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deployed_model_id: std::string::String,

    /// The feature display name. If specified, only return the stats belonging to this feature.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub feature_display_name: std::string::String,

    /// Required. Objectives of the stats to retrieve.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub objectives: std::vec::Vec<crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective>,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// A page token received from a previous call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// The earliest timestamp of stats being generated. If not set, indicates fetching stats till the earliest possible one.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    /// The latest timestamp of stats being generated. If not set, indicates feching stats till the latest possible one.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,
}

impl SearchModelDeploymentMonitoringStatsAnomaliesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [model_deployment_monitoring_job][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::model_deployment_monitoring_job].
    pub fn set_model_deployment_monitoring_job<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.model_deployment_monitoring_job = v.into();
        self
    }

    /// Sets the value of [deployed_model_id][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::deployed_model_id].
    pub fn set_deployed_model_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.deployed_model_id = v.into();
        self
    }

    /// Sets the value of [feature_display_name][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::feature_display_name].
    pub fn set_feature_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.feature_display_name = v.into();
        self
    }

    /// Sets the value of [objectives][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::objectives].
    pub fn set_objectives<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective>,
    {
        use std::iter::Iterator;
        self.objectives = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [page_size][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [start_time][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::start_time].
    pub fn set_start_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::end_time].
    pub fn set_end_time<T: std::convert::Into<std::option::Option<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }
}

impl wkt::message::Message for SearchModelDeploymentMonitoringStatsAnomaliesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.SearchModelDeploymentMonitoringStatsAnomaliesRequest"
    }
}

/// Defines additional types related to [SearchModelDeploymentMonitoringStatsAnomaliesRequest].
pub mod search_model_deployment_monitoring_stats_anomalies_request {
    #[allow(unused_imports)]
    use super::*;

    /// Stats requested for specific objective.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct StatsAnomaliesObjective {
        /// The type of the objective.
        #[serde(skip_serializing_if = "wkt::internal::is_default")]
        pub r#type: crate::model::ModelDeploymentMonitoringObjectiveType,

        /// If set, all attribution scores between the start and end time are returned, sorted by the score.
        #[serde(skip_serializing_if = "wkt::internal::is_default")]
        pub top_feature_count: i32,
    }

    impl StatsAnomaliesObjective {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [type][crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective::r#type].
    pub fn set_type<T: std::convert::Into<crate::model::ModelDeploymentMonitoringObjectiveType>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

        /// Sets the value of [top_feature_count][crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective::top_feature_count].
    pub fn set_top_feature_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.top_feature_count = v.into();
        self
    }
    }

    impl wkt::message::Message for StatsAnomaliesObjective {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.aiplatform.v1.SearchModelDeploymentMonitoringStatsAnomaliesRequest.StatsAnomaliesObjective"
        }
    }
}

/// Response message for [JobService.SearchModelDeploymentMonitoringStatsAnomalies][google.cloud.aiplatform.v1.JobService.SearchModelDeploymentMonitoringStatsAnomalies].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchModelDeploymentMonitoringStatsAnomaliesResponse {
    /// Stats retrieved for requested objectives. There are at most 1000 ModelMonitoringStatsAnomalies.FeatureHistoricStatsAnomalies.prediction_stats in the response.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub monitoring_stats: std::vec::Vec<crate::model::ModelMonitoringStatsAnomalies>,

    /// The page token that can be used by the next call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl SearchModelDeploymentMonitoringStatsAnomaliesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [monitoring_stats][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse::monitoring_stats].
    pub fn set_monitoring_stats<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ModelMonitoringStatsAnomalies>,
    {
        use std::iter::Iterator;
        self.monitoring_stats = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for SearchModelDeploymentMonitoringStatsAnomaliesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.SearchModelDeploymentMonitoringStatsAnomaliesResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for SearchModelDeploymentMonitoringStatsAnomaliesResponse {
    type PageItem = crate::model::ModelMonitoringStatsAnomalies;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.monitoring_stats
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for [JobService.UpdateModelDeploymentMonitoringJob][google.cloud.aiplatform.v1.JobService.UpdateModelDeploymentMonitoringJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateModelDeploymentMonitoringJobRequest {
    /// Required. The model monitoring configuration which replaces the resource on the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_deployment_monitoring_job: std::option::Option<crate::model::ModelDeploymentMonitoringJob>,

    /// Required. The update mask is used to specify the fields to be overwritten in the ModelDeploymentMonitoringJob resource by the update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,
}

impl UpdateModelDeploymentMonitoringJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [model_deployment_monitoring_job][crate::model::UpdateModelDeploymentMonitoringJobRequest::model_deployment_monitoring_job].
    pub fn set_model_deployment_monitoring_job<T: std::convert::Into<std::option::Option<crate::model::ModelDeploymentMonitoringJob>>>(mut self, v: T) -> Self {
        self.model_deployment_monitoring_job = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateModelDeploymentMonitoringJobRequest::update_mask].
    pub fn set_update_mask<T: std::convert::Into<std::option::Option<wkt::FieldMask>>>(mut self, v: T) -> Self {
        self.update_mask = v.into();
        self
    }
}

impl wkt::message::Message for UpdateModelDeploymentMonitoringJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.UpdateModelDeploymentMonitoringJobRequest"
    }
}

/// Request message for [JobService.PauseModelDeploymentMonitoringJob][google.cloud.aiplatform.v1.JobService.PauseModelDeploymentMonitoringJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PauseModelDeploymentMonitoringJobRequest {
    /// Required. The resource name of the ModelDeploymentMonitoringJob to pause.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl PauseModelDeploymentMonitoringJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::PauseModelDeploymentMonitoringJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for PauseModelDeploymentMonitoringJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.PauseModelDeploymentMonitoringJobRequest"
    }
}

/// Request message for [JobService.ResumeModelDeploymentMonitoringJob][google.cloud.aiplatform.v1.JobService.ResumeModelDeploymentMonitoringJob].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResumeModelDeploymentMonitoringJobRequest {
    /// Required. The resource name of the ModelDeploymentMonitoringJob to resume.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl ResumeModelDeploymentMonitoringJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ResumeModelDeploymentMonitoringJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for ResumeModelDeploymentMonitoringJobRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1.ResumeModelDeploymentMonitoringJobRequest"
    }
}

/// Describes the state of a job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JobState {
    /// The job state is unspecified.
    #[default]
    Unspecified,
    /// The job has been just created or resumed and processing has not yet begun.
    Queued,
    /// The service is preparing to run the job.
    Pending,
    /// The job is in progress.
    Running,
    /// The job completed successfully.
    Succeeded,
    /// The job failed.
    Failed,
    /// The job is being cancelled.
    Cancelling,
    /// The job has been cancelled.
    Cancelled,
    /// The job has been stopped, and can be resumed.
    Paused,
    /// The job has expired.
    Expired,
    /// The job is being updated.
    Updating,
    /// The job partially succeeded, some results may be missing.
    PartiallySucceeded,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [JobState::value] or
    /// [JobState::name].
    UnknownValue(job_state::UnknownValue),
}

#[doc(hidden)]
pub mod job_state {
    /// A value of [JobState][super::JobState] unknown to this version of the library.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct UnknownValue(pub(crate) wkt::internal::EnumValue);
}

impl JobState {
    /// Gets the enum value.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the string representation of enums.
    pub fn value(&self) -> std::option::Option<i32> {
        match self {
            Self::Unspecified => std::option::Option::Some(0),
            Self::Queued => std::option::Option::Some(1),
            Self::Pending => std::option::Option::Some(2),
            Self::Running => std::option::Option::Some(3),
            Self::Succeeded => std::option::Option::Some(4),
            Self::Failed => std::option::Option::Some(5),
            Self::Cancelling => std::option::Option::Some(6),
            Self::Cancelled => std::option::Option::Some(7),
            Self::Paused => std::option::Option::Some(8),
            Self::Expired => std::option::Option::Some(9),
            Self::Updating => std::option::Option::Some(10),
            Self::PartiallySucceeded => std::option::Option::Some(11),
            Self::UnknownValue(u) => match &u.0 {
                wkt::internal::EnumValue::Integer(v) => std::option::Option::Some(*v),
                wkt::internal::EnumValue::String(_) => std::option::Option::None,
            },
        }
    }

    /// Gets the enum value as a string.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the integer representation of enums.
    pub fn name(&self) -> std::option::Option<&str> {
        match self {
            Self::Unspecified => std::option::Option::Some("JOB_STATE_UNSPECIFIED"),
            Self::Queued => std::option::Option::Some("JOB_STATE_QUEUED"),
            Self::Pending => std::option::Option::Some("JOB_STATE_PENDING"),
            Self::Running => std::option::Option::Some("JOB_STATE_RUNNING"),
            Self::Succeeded => std::option::Option::Some("JOB_STATE_SUCCEEDED"),
            Self::Failed => std::option::Option::Some("JOB_STATE_FAILED"),
            Self::Cancelling => std::option::Option::Some("JOB_STATE_CANCELLING"),
            Self::Cancelled => std::option::Option::Some("JOB_STATE_CANCELLED"),
            Self::Paused => std::option::Option::Some("JOB_STATE_PAUSED"),
            Self::Expired => std::option::Option::Some("JOB_STATE_EXPIRED"),
            Self::Updating => std::option::Option::Some("JOB_STATE_UPDATING"),
            Self::PartiallySucceeded => std::option::Option::Some("JOB_STATE_PARTIALLY_SUCCEEDED"),
            Self::UnknownValue(u) => match &u.0 {
                wkt::internal::EnumValue::String(s) => std::option::Option::Some(s.as_str()),
                wkt::internal::EnumValue::Integer(_) => std::option::Option::None,
            },
        }
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.name(), self.value()) {
            (std::option::Option::Some(name), _) => f.write_str(name),
            (std::option::Option::None, v) => write!(f, "{}", v.unwrap_or_default()),
        }
    }
}

impl std::convert::From<i32> for JobState {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Queued,
            2 => Self::Pending,
            3 => Self::Running,
            4 => Self::Succeeded,
            5 => Self::Failed,
            6 => Self::Cancelling,
            7 => Self::Cancelled,
            8 => Self::Paused,
            9 => Self::Expired,
            10 => Self::Updating,
            11 => Self::PartiallySucceeded,
            _ => Self::UnknownValue(job_state::UnknownValue(
                wkt::internal::EnumValue::Integer(value),
            )),
        }
    }
}

impl std::convert::From<&str> for JobState {
    fn from(value: &str) -> Self {
        use std::string::ToString;
        match value {
            "JOB_STATE_UNSPECIFIED" => Self::Unspecified,
            "JOB_STATE_QUEUED" => Self::Queued,
            "JOB_STATE_PENDING" => Self::Pending,
            "JOB_STATE_RUNNING" => Self::Running,
            "JOB_STATE_SUCCEEDED" => Self::Succeeded,
            "JOB_STATE_FAILED" => Self::Failed,
            "JOB_STATE_CANCELLING" => Self::Cancelling,
            "JOB_STATE_CANCELLED" => Self::Cancelled,
            "JOB_STATE_PAUSED" => Self::Paused,
            "JOB_STATE_EXPIRED" => Self::Expired,
            "JOB_STATE_UPDATING" => Self::Updating,
            "JOB_STATE_PARTIALLY_SUCCEEDED" => Self::PartiallySucceeded,
            _ => Self::UnknownValue(job_state::UnknownValue(
                wkt::internal::EnumValue::String(value.to_string()),
            )),
        }
    }
}

impl serde::ser::Serialize for JobState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.name() {
            std::option::Option::Some(name) => serializer.serialize_str(name),
            std::option::Option::None => serializer.serialize_i32(self.value().unwrap_or_default()),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for JobState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <wkt::internal::EnumValue as serde::de::Deserialize>::deserialize(deserializer)?;
        std::result::Result::Ok(match value {
            wkt::internal::EnumValue::Integer(v) => Self::from(v),
            wkt::internal::EnumValue::String(s) => Self::from(s.as_str()),
        })
    }
}

/// The model monitoring objective types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ModelDeploymentMonitoringObjectiveType {
    /// Default value, should not be set.
    #[default]
    Unspecified,
    /// Raw feature values' stats to detect skew between training and prediction datasets.
    RawFeatureSkew,
    /// Raw feature values' stats to detect drift between serving prediction datasets.
    RawFeatureDrift,
    /// Feature attribution scores to detect skew between training and prediction datasets.
    FeatureAttributionSkew,
    /// Feature attribution scores to detect drift between prediction datasets collected within different time windows.
    FeatureAttributionDrift,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [ModelDeploymentMonitoringObjectiveType::value] or
    /// [ModelDeploymentMonitoringObjectiveType::name].
    UnknownValue(model_deployment_monitoring_objective_type::UnknownValue),
}

#[doc(hidden)]
pub mod model_deployment_monitoring_objective_type {
    /// A value of [ModelDeploymentMonitoringObjectiveType][super::ModelDeploymentMonitoringObjectiveType] unknown to this version of the library.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct UnknownValue(pub(crate) wkt::internal::EnumValue);
}

impl ModelDeploymentMonitoringObjectiveType {
    /// Gets the enum value.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the string representation of enums.
    pub fn value(&self) -> std::option::Option<i32> {
        match self {
            Self::Unspecified => std::option::Option::Some(0),
            Self::RawFeatureSkew => std::option::Option::Some(1),
            Self::RawFeatureDrift => std::option::Option::Some(2),
            Self::FeatureAttributionSkew => std::option::Option::Some(3),
            Self::FeatureAttributionDrift => std::option::Option::Some(4),
            Self::UnknownValue(u) => match &u.0 {
                wkt::internal::EnumValue::Integer(v) => std::option::Option::Some(*v),
                wkt::internal::EnumValue::String(_) => std::option::Option::None,
            },
        }
    }

    /// Gets the enum value as a string.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the integer representation of enums.
    pub fn name(&self) -> std::option::Option<&str> {
        match self {
            Self::Unspecified => std::option::Option::Some("MODEL_DEPLOYMENT_MONITORING_OBJECTIVE_TYPE_UNSPECIFIED"),
            Self::RawFeatureSkew => std::option::Option::Some("RAW_FEATURE_SKEW"),
            Self::RawFeatureDrift => std::option::Option::Some("RAW_FEATURE_DRIFT"),
            Self::FeatureAttributionSkew => std::option::Option::Some("FEATURE_ATTRIBUTION_SKEW"),
            Self::FeatureAttributionDrift => std::option::Option::Some("FEATURE_ATTRIBUTION_DRIFT"),
            Self::UnknownValue(u) => match &u.0 {
                wkt::internal::EnumValue::String(s) => std::option::Option::Some(s.as_str()),
                wkt::internal::EnumValue::Integer(_) => std::option::Option::None,
            },
        }
    }
}

impl std::fmt::Display for ModelDeploymentMonitoringObjectiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.name(), self.value()) {
            (std::option::Option::Some(name), _) => f.write_str(name),
            (std::option::Option::None, v) => write!(f, "{}", v.unwrap_or_default()),
        }
    }
}

impl std::convert::From<i32> for ModelDeploymentMonitoringObjectiveType {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::RawFeatureSkew,
            2 => Self::RawFeatureDrift,
            3 => Self::FeatureAttributionSkew,
            4 => Self::FeatureAttributionDrift,
            _ => Self::UnknownValue(model_deployment_monitoring_objective_type::UnknownValue(
                wkt::internal::EnumValue::Integer(value),
            )),
        }
    }
}

impl std::convert::From<&str> for ModelDeploymentMonitoringObjectiveType {
    fn from(value: &str) -> Self {
        use std::string::ToString;
        match value {
            "MODEL_DEPLOYMENT_MONITORING_OBJECTIVE_TYPE_UNSPECIFIED" => Self::Unspecified,
            "RAW_FEATURE_SKEW" => Self::RawFeatureSkew,
            "RAW_FEATURE_DRIFT" => Self::RawFeatureDrift,
            "FEATURE_ATTRIBUTION_SKEW" => Self::FeatureAttributionSkew,
            "FEATURE_ATTRIBUTION_DRIFT" => Self::FeatureAttributionDrift,
            _ => Self::UnknownValue(model_deployment_monitoring_objective_type::UnknownValue(
                wkt::internal::EnumValue::String(value.to_string()),
            )),
        }
    }
}

impl serde::ser::Serialize for ModelDeploymentMonitoringObjectiveType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.name() {
            std::option::Option::Some(name) => serializer.serialize_str(name),
            std::option::Option::None => serializer.serialize_i32(self.value().unwrap_or_default()),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for ModelDeploymentMonitoringObjectiveType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <wkt::internal::EnumValue as serde::de::Deserialize>::deserialize(deserializer)?;
        std::result::Result::Ok(match value {
            wkt::internal::EnumValue::Integer(v) => Self::from(v),
            wkt::internal::EnumValue::String(s) => Self::from(s.as_str()),
        })
    }
}
