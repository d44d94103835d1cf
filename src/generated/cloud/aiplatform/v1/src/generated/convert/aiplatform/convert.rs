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

impl gaxi::prost::ToProto<JobState> for crate::model::JobState {
    type Output = i32;
    fn to_proto(self) -> gaxi::prost::Result<i32> {
        self.value()
            .ok_or(gaxi::prost::ConvertError::EnumNoIntegerValue("google.cloud.aiplatform.v1.JobState"))
    }
}

impl gaxi::prost::ToProto<ModelDeploymentMonitoringObjectiveType> for crate::model::ModelDeploymentMonitoringObjectiveType {
    type Output = i32;
    fn to_proto(self) -> gaxi::prost::Result<i32> {
        self.value()
            .ok_or(gaxi::prost::ConvertError::EnumNoIntegerValue("google.cloud.aiplatform.v1.ModelDeploymentMonitoringObjectiveType"))
    }
}

impl gaxi::prost::ToProto<GcsSource> for crate::model::GcsSource {
    type Output = GcsSource;
    fn to_proto(self) -> gaxi::prost::Result<GcsSource> {
        Ok(GcsSource {
            uris: self.uris,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GcsSource> for GcsSource {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GcsSource> {
        let mut result = crate::model::GcsSource::new();
        result.uris = self.uris;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GcsDestination> for crate::model::GcsDestination {
    type Output = GcsDestination;
    fn to_proto(self) -> gaxi::prost::Result<GcsDestination> {
        Ok(GcsDestination {
            output_uri_prefix: self.output_uri_prefix,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GcsDestination> for GcsDestination {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GcsDestination> {
        let mut result = crate::model::GcsDestination::new();
        result.output_uri_prefix = self.output_uri_prefix;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<EnvVar> for crate::model::EnvVar {
    type Output = EnvVar;
    fn to_proto(self) -> gaxi::prost::Result<EnvVar> {
        Ok(EnvVar {
            name: self.name,
            value: self.value,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::EnvVar> for EnvVar {
    fn cnv(self) -> gaxi::prost::Result<crate::model::EnvVar> {
        let mut result = crate::model::EnvVar::new();
        result.name = self.name;
        result.value = self.value;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ContainerSpec> for crate::model::ContainerSpec {
    type Output = ContainerSpec;
    fn to_proto(self) -> gaxi::prost::Result<ContainerSpec> {
        Ok(ContainerSpec {
            image_uri: self.image_uri,
            command: self.command,
            args: self.args,
            env: self.env
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ContainerSpec> for ContainerSpec {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ContainerSpec> {
        let mut result = crate::model::ContainerSpec::new();
        result.image_uri = self.image_uri;
        result.command = self.command;
        result.args = self.args;
        result.env = self.env
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<MachineSpec> for crate::model::MachineSpec {
    type Output = MachineSpec;
    fn to_proto(self) -> gaxi::prost::Result<MachineSpec> {
        Ok(MachineSpec {
            machine_type: self.machine_type,
            accelerator_count: self.accelerator_count,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::MachineSpec> for MachineSpec {
    fn cnv(self) -> gaxi::prost::Result<crate::model::MachineSpec> {
        let mut result = crate::model::MachineSpec::new();
        result.machine_type = self.machine_type;
        result.accelerator_count = self.accelerator_count;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<WorkerPoolSpec> for crate::model::WorkerPoolSpec {
    type Output = WorkerPoolSpec;
    fn to_proto(self) -> gaxi::prost::Result<WorkerPoolSpec> {
        Ok(WorkerPoolSpec {
            container_spec: self.container_spec.map(|v| v.to_proto()).transpose()?,
            machine_spec: self.machine_spec.map(|v| v.to_proto()).transpose()?,
            replica_count: self.replica_count,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::WorkerPoolSpec> for WorkerPoolSpec {
    fn cnv(self) -> gaxi::prost::Result<crate::model::WorkerPoolSpec> {
        let mut result = crate::model::WorkerPoolSpec::new();
        result.container_spec = self.container_spec.map(|v| v.cnv()).transpose()?;
        result.machine_spec = self.machine_spec.map(|v| v.cnv()).transpose()?;
        result.replica_count = self.replica_count;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CustomJobSpec> for crate::model::CustomJobSpec {
    type Output = CustomJobSpec;
    fn to_proto(self) -> gaxi::prost::Result<CustomJobSpec> {
        Ok(CustomJobSpec {
            worker_pool_specs: self.worker_pool_specs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            service_account: self.service_account,
            network: self.network,
            reserved_ip_ranges: self.reserved_ip_ranges,
            base_output_directory: self.base_output_directory.map(|v| v.to_proto()).transpose()?,
            enable_web_access: self.enable_web_access,
            experiment: self.experiment,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CustomJobSpec> for CustomJobSpec {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CustomJobSpec> {
        let mut result = crate::model::CustomJobSpec::new();
        result.worker_pool_specs = self.worker_pool_specs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.service_account = self.service_account;
        result.network = self.network;
        result.reserved_ip_ranges = self.reserved_ip_ranges;
        result.base_output_directory = self.base_output_directory.map(|v| v.cnv()).transpose()?;
        result.enable_web_access = self.enable_web_access;
        result.experiment = self.experiment;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CustomJob> for crate::model::CustomJob {
    type Output = CustomJob;
    fn to_proto(self) -> gaxi::prost::Result<CustomJob> {
        Ok(CustomJob {
            name: self.name,
            display_name: self.display_name,
            job_spec: self.job_spec.map(|v| v.to_proto()).transpose()?,
            state: self.state.to_proto()?,
            create_time: self.create_time.map(|v| v.to_proto()).transpose()?,
            start_time: self.start_time.map(|v| v.to_proto()).transpose()?,
            end_time: self.end_time.map(|v| v.to_proto()).transpose()?,
            update_time: self.update_time.map(|v| v.to_proto()).transpose()?,
            error: self.error.map(|v| v.to_proto()).transpose()?,
            labels: self.labels,
            web_access_uris: self.web_access_uris,
            satisfies_pzs: self.satisfies_pzs,
            satisfies_pzi: self.satisfies_pzi,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CustomJob> for CustomJob {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CustomJob> {
        let mut result = crate::model::CustomJob::new();
        result.name = self.name;
        result.display_name = self.display_name;
        result.job_spec = self.job_spec.map(|v| v.cnv()).transpose()?;
        result.state = crate::model::JobState::from(self.state);
        result.create_time = self.create_time.map(|v| v.cnv()).transpose()?;
        result.start_time = self.start_time.map(|v| v.cnv()).transpose()?;
        result.end_time = self.end_time.map(|v| v.cnv()).transpose()?;
        result.update_time = self.update_time.map(|v| v.cnv()).transpose()?;
        result.error = self.error.map(|v| v.cnv()).transpose()?;
        result.labels = self.labels;
        result.web_access_uris = self.web_access_uris;
        result.satisfies_pzs = self.satisfies_pzs;
        result.satisfies_pzi = self.satisfies_pzi;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DataLabelingJob> for crate::model::DataLabelingJob {
    type Output = DataLabelingJob;
    fn to_proto(self) -> gaxi::prost::Result<DataLabelingJob> {
        Ok(DataLabelingJob {
            name: self.name,
            display_name: self.display_name,
            datasets: self.datasets,
            annotation_labels: self.annotation_labels,
            labeler_count: self.labeler_count,
            instruction_uri: self.instruction_uri,
            inputs_schema_uri: self.inputs_schema_uri,
            inputs: self.inputs.map(|v| v.to_proto()).transpose()?,
            state: self.state.to_proto()?,
            labeling_progress: self.labeling_progress,
            create_time: self.create_time.map(|v| v.to_proto()).transpose()?,
            update_time: self.update_time.map(|v| v.to_proto()).transpose()?,
            error: self.error.map(|v| v.to_proto()).transpose()?,
            labels: self.labels,
            specialist_pools: self.specialist_pools,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DataLabelingJob> for DataLabelingJob {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DataLabelingJob> {
        let mut result = crate::model::DataLabelingJob::new();
        result.name = self.name;
        result.display_name = self.display_name;
        result.datasets = self.datasets;
        result.annotation_labels = self.annotation_labels;
        result.labeler_count = self.labeler_count;
        result.instruction_uri = self.instruction_uri;
        result.inputs_schema_uri = self.inputs_schema_uri;
        result.inputs = self.inputs.map(|v| v.cnv()).transpose()?;
        result.state = crate::model::JobState::from(self.state);
        result.labeling_progress = self.labeling_progress;
        result.create_time = self.create_time.map(|v| v.cnv()).transpose()?;
        result.update_time = self.update_time.map(|v| v.cnv()).transpose()?;
        result.error = self.error.map(|v| v.cnv()).transpose()?;
        result.labels = self.labels;
        result.specialist_pools = self.specialist_pools;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<Trial> for crate::model::Trial {
    type Output = Trial;
    fn to_proto(self) -> gaxi::prost::Result<Trial> {
        Ok(Trial {
            name: self.name,
            id: self.id,
            custom_job: self.custom_job,
            start_time: self.start_time.map(|v| v.to_proto()).transpose()?,
            end_time: self.end_time.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::Trial> for Trial {
    fn cnv(self) -> gaxi::prost::Result<crate::model::Trial> {
        let mut result = crate::model::Trial::new();
        result.name = self.name;
        result.id = self.id;
        result.custom_job = self.custom_job;
        result.start_time = self.start_time.map(|v| v.cnv()).transpose()?;
        result.end_time = self.end_time.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<HyperparameterTuningJob> for crate::model::HyperparameterTuningJob {
    type Output = HyperparameterTuningJob;
    fn to_proto(self) -> gaxi::prost::Result<HyperparameterTuningJob> {
        if self.study_spec.is_some() {
            return Err(gaxi::prost::ConvertError::RestOnlyField("google.cloud.aiplatform.v1.HyperparameterTuningJob.study_spec"));
        }
        Ok(HyperparameterTuningJob {
            name: self.name,
            display_name: self.display_name,
            max_trial_count: self.max_trial_count,
            parallel_trial_count: self.parallel_trial_count,
            max_failed_trial_count: self.max_failed_trial_count,
            trial_job_spec: self.trial_job_spec.map(|v| v.to_proto()).transpose()?,
            trials: self.trials
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            state: self.state.to_proto()?,
            create_time: self.create_time.map(|v| v.to_proto()).transpose()?,
            start_time: self.start_time.map(|v| v.to_proto()).transpose()?,
            end_time: self.end_time.map(|v| v.to_proto()).transpose()?,
            update_time: self.update_time.map(|v| v.to_proto()).transpose()?,
            error: self.error.map(|v| v.to_proto()).transpose()?,
            labels: self.labels,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::HyperparameterTuningJob> for HyperparameterTuningJob {
    fn cnv(self) -> gaxi::prost::Result<crate::model::HyperparameterTuningJob> {
        let mut result = crate::model::HyperparameterTuningJob::new();
        result.name = self.name;
        result.display_name = self.display_name;
        result.max_trial_count = self.max_trial_count;
        result.parallel_trial_count = self.parallel_trial_count;
        result.max_failed_trial_count = self.max_failed_trial_count;
        result.trial_job_spec = self.trial_job_spec.map(|v| v.cnv()).transpose()?;
        result.trials = self.trials
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.state = crate::model::JobState::from(self.state);
        result.create_time = self.create_time.map(|v| v.cnv()).transpose()?;
        result.start_time = self.start_time.map(|v| v.cnv()).transpose()?;
        result.end_time = self.end_time.map(|v| v.cnv()).transpose()?;
        result.update_time = self.update_time.map(|v| v.cnv()).transpose()?;
        result.error = self.error.map(|v| v.cnv()).transpose()?;
        result.labels = self.labels;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<NasJob> for crate::model::NasJob {
    type Output = NasJob;
    fn to_proto(self) -> gaxi::prost::Result<NasJob> {
        if self.nas_job_spec.is_some() {
            return Err(gaxi::prost::ConvertError::RestOnlyField("google.cloud.aiplatform.v1.NasJob.nas_job_spec"));
        }
        Ok(NasJob {
            name: self.name,
            display_name: self.display_name,
            state: self.state.to_proto()?,
            create_time: self.create_time.map(|v| v.to_proto()).transpose()?,
            start_time: self.start_time.map(|v| v.to_proto()).transpose()?,
            end_time: self.end_time.map(|v| v.to_proto()).transpose()?,
            update_time: self.update_time.map(|v| v.to_proto()).transpose()?,
            error: self.error.map(|v| v.to_proto()).transpose()?,
            labels: self.labels,
            enable_restricted_image_training: self.enable_restricted_image_training,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::NasJob> for NasJob {
    fn cnv(self) -> gaxi::prost::Result<crate::model::NasJob> {
        let mut result = crate::model::NasJob::new();
        result.name = self.name;
        result.display_name = self.display_name;
        result.state = crate::model::JobState::from(self.state);
        result.create_time = self.create_time.map(|v| v.cnv()).transpose()?;
        result.start_time = self.start_time.map(|v| v.cnv()).transpose()?;
        result.end_time = self.end_time.map(|v| v.cnv()).transpose()?;
        result.update_time = self.update_time.map(|v| v.cnv()).transpose()?;
        result.error = self.error.map(|v| v.cnv()).transpose()?;
        result.labels = self.labels;
        result.enable_restricted_image_training = self.enable_restricted_image_training;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<NasTrial> for crate::model::NasTrial {
    type Output = NasTrial;
    fn to_proto(self) -> gaxi::prost::Result<NasTrial> {
        Ok(NasTrial {
            id: self.id,
            start_time: self.start_time.map(|v| v.to_proto()).transpose()?,
            end_time: self.end_time.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::NasTrial> for NasTrial {
    fn cnv(self) -> gaxi::prost::Result<crate::model::NasTrial> {
        let mut result = crate::model::NasTrial::new();
        result.id = self.id;
        result.start_time = self.start_time.map(|v| v.cnv()).transpose()?;
        result.end_time = self.end_time.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<NasTrialDetail> for crate::model::NasTrialDetail {
    type Output = NasTrialDetail;
    fn to_proto(self) -> gaxi::prost::Result<NasTrialDetail> {
        Ok(NasTrialDetail {
            name: self.name,
            parameters: self.parameters,
            search_trial: self.search_trial.map(|v| v.to_proto()).transpose()?,
            train_trial: self.train_trial.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::NasTrialDetail> for NasTrialDetail {
    fn cnv(self) -> gaxi::prost::Result<crate::model::NasTrialDetail> {
        let mut result = crate::model::NasTrialDetail::new();
        result.name = self.name;
        result.parameters = self.parameters;
        result.search_trial = self.search_trial.map(|v| v.cnv()).transpose()?;
        result.train_trial = self.train_trial.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CompletionStats> for crate::model::CompletionStats {
    type Output = CompletionStats;
    fn to_proto(self) -> gaxi::prost::Result<CompletionStats> {
        Ok(CompletionStats {
            successful_count: self.successful_count,
            failed_count: self.failed_count,
            incomplete_count: self.incomplete_count,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CompletionStats> for CompletionStats {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CompletionStats> {
        let mut result = crate::model::CompletionStats::new();
        result.successful_count = self.successful_count;
        result.failed_count = self.failed_count;
        result.incomplete_count = self.incomplete_count;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<BatchPredictionJob> for crate::model::BatchPredictionJob {
    type Output = BatchPredictionJob;
    fn to_proto(self) -> gaxi::prost::Result<BatchPredictionJob> {
        Ok(BatchPredictionJob {
            name: self.name,
            display_name: self.display_name,
            model: self.model,
            model_version_id: self.model_version_id,
            input_config: self.input_config.map(|v| v.to_proto()).transpose()?,
            model_parameters: self.model_parameters.map(|v| v.to_proto()).transpose()?,
            output_config: self.output_config.map(|v| v.to_proto()).transpose()?,
            service_account: self.service_account,
            generate_explanation: self.generate_explanation,
            state: self.state.to_proto()?,
            error: self.error.map(|v| v.to_proto()).transpose()?,
            partial_failures: self.partial_failures
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            completion_stats: self.completion_stats.map(|v| v.to_proto()).transpose()?,
            create_time: self.create_time.map(|v| v.to_proto()).transpose()?,
            start_time: self.start_time.map(|v| v.to_proto()).transpose()?,
            end_time: self.end_time.map(|v| v.to_proto()).transpose()?,
            update_time: self.update_time.map(|v| v.to_proto()).transpose()?,
            labels: self.labels,
            disable_container_logging: self.disable_container_logging,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::BatchPredictionJob> for BatchPredictionJob {
    fn cnv(self) -> gaxi::prost::Result<crate::model::BatchPredictionJob> {
        let mut result = crate::model::BatchPredictionJob::new();
        result.name = self.name;
        result.display_name = self.display_name;
        result.model = self.model;
        result.model_version_id = self.model_version_id;
        result.input_config = self.input_config.map(|v| v.cnv()).transpose()?;
        result.model_parameters = self.model_parameters.map(|v| v.cnv()).transpose()?;
        result.output_config = self.output_config.map(|v| v.cnv()).transpose()?;
        result.service_account = self.service_account;
        result.generate_explanation = self.generate_explanation;
        result.state = crate::model::JobState::from(self.state);
        result.error = self.error.map(|v| v.cnv()).transpose()?;
        result.partial_failures = self.partial_failures
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.completion_stats = self.completion_stats.map(|v| v.cnv()).transpose()?;
        result.create_time = self.create_time.map(|v| v.cnv()).transpose()?;
        result.start_time = self.start_time.map(|v| v.cnv()).transpose()?;
        result.end_time = self.end_time.map(|v| v.cnv()).transpose()?;
        result.update_time = self.update_time.map(|v| v.cnv()).transpose()?;
        result.labels = self.labels;
        result.disable_container_logging = self.disable_container_logging;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<batch_prediction_job::InputConfig> for crate::model::batch_prediction_job::InputConfig {
    type Output = batch_prediction_job::InputConfig;
    fn to_proto(self) -> gaxi::prost::Result<batch_prediction_job::InputConfig> {
        Ok(batch_prediction_job::InputConfig {
            instances_format: self.instances_format,
            gcs_source: self.gcs_source.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::batch_prediction_job::InputConfig> for batch_prediction_job::InputConfig {
    fn cnv(self) -> gaxi::prost::Result<crate::model::batch_prediction_job::InputConfig> {
        let mut result = crate::model::batch_prediction_job::InputConfig::new();
        result.instances_format = self.instances_format;
        result.gcs_source = self.gcs_source.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<batch_prediction_job::OutputConfig> for crate::model::batch_prediction_job::OutputConfig {
    type Output = batch_prediction_job::OutputConfig;
    fn to_proto(self) -> gaxi::prost::Result<batch_prediction_job::OutputConfig> {
        Ok(batch_prediction_job::OutputConfig {
            predictions_format: self.predictions_format,
            gcs_destination: self.gcs_destination.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::batch_prediction_job::OutputConfig> for batch_prediction_job::OutputConfig {
    fn cnv(self) -> gaxi::prost::Result<crate::model::batch_prediction_job::OutputConfig> {
        let mut result = crate::model::batch_prediction_job::OutputConfig::new();
        result.predictions_format = self.predictions_format;
        result.gcs_destination = self.gcs_destination.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ModelDeploymentMonitoringScheduleConfig> for crate::model::ModelDeploymentMonitoringScheduleConfig {
    type Output = ModelDeploymentMonitoringScheduleConfig;
    fn to_proto(self) -> gaxi::prost::Result<ModelDeploymentMonitoringScheduleConfig> {
        Ok(ModelDeploymentMonitoringScheduleConfig {
            monitor_interval: self.monitor_interval.map(|v| v.to_proto()).transpose()?,
            monitor_window: self.monitor_window.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ModelDeploymentMonitoringScheduleConfig> for ModelDeploymentMonitoringScheduleConfig {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ModelDeploymentMonitoringScheduleConfig> {
        let mut result = crate::model::ModelDeploymentMonitoringScheduleConfig::new();
        result.monitor_interval = self.monitor_interval.map(|v| v.cnv()).transpose()?;
        result.monitor_window = self.monitor_window.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ModelDeploymentMonitoringObjectiveConfig> for crate::model::ModelDeploymentMonitoringObjectiveConfig {
    type Output = ModelDeploymentMonitoringObjectiveConfig;
    fn to_proto(self) -> gaxi::prost::Result<ModelDeploymentMonitoringObjectiveConfig> {
        if self.objective_config.is_some() {
            return Err(gaxi::prost::ConvertError::RestOnlyField("google.cloud.aiplatform.v1.ModelDeploymentMonitoringObjectiveConfig.objective_config"));
        }
        Ok(ModelDeploymentMonitoringObjectiveConfig {
            deployed_model_id: self.deployed_model_id,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ModelDeploymentMonitoringObjectiveConfig> for ModelDeploymentMonitoringObjectiveConfig {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ModelDeploymentMonitoringObjectiveConfig> {
        let mut result = crate::model::ModelDeploymentMonitoringObjectiveConfig::new();
        result.deployed_model_id = self.deployed_model_id;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<model_deployment_monitoring_job::MonitoringScheduleState> for crate::model::model_deployment_monitoring_job::MonitoringScheduleState {
    type Output = i32;
    fn to_proto(self) -> gaxi::prost::Result<i32> {
        self.value()
            .ok_or(gaxi::prost::ConvertError::EnumNoIntegerValue("google.cloud.aiplatform.v1.ModelDeploymentMonitoringJob.MonitoringScheduleState"))
    }
}

impl gaxi::prost::ToProto<ModelDeploymentMonitoringJob> for crate::model::ModelDeploymentMonitoringJob {
    type Output = ModelDeploymentMonitoringJob;
    fn to_proto(self) -> gaxi::prost::Result<ModelDeploymentMonitoringJob> {
        if self.logging_sampling_strategy.is_some() {
            return Err(gaxi::prost::ConvertError::RestOnlyField("google.cloud.aiplatform.v1.ModelDeploymentMonitoringJob.logging_sampling_strategy"));
        }
        Ok(ModelDeploymentMonitoringJob {
            name: self.name,
            display_name: self.display_name,
            endpoint: self.endpoint,
            state: self.state.to_proto()?,
            schedule_state: self.schedule_state.to_proto()?,
            model_deployment_monitoring_objective_configs: self.model_deployment_monitoring_objective_configs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            model_deployment_monitoring_schedule_config: self.model_deployment_monitoring_schedule_config.map(|v| v.to_proto()).transpose()?,
            predict_instance_schema_uri: self.predict_instance_schema_uri,
            analysis_instance_schema_uri: self.analysis_instance_schema_uri,
            log_ttl: self.log_ttl.map(|v| v.to_proto()).transpose()?,
            labels: self.labels,
            create_time: self.create_time.map(|v| v.to_proto()).transpose()?,
            update_time: self.update_time.map(|v| v.to_proto()).transpose()?,
            next_schedule_time: self.next_schedule_time.map(|v| v.to_proto()).transpose()?,
            stats_anomalies_base_directory: self.stats_anomalies_base_directory.map(|v| v.to_proto()).transpose()?,
            enable_monitoring_pipeline_logs: self.enable_monitoring_pipeline_logs,
            error: self.error.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ModelDeploymentMonitoringJob> for ModelDeploymentMonitoringJob {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ModelDeploymentMonitoringJob> {
        let mut result = crate::model::ModelDeploymentMonitoringJob::new();
        result.name = self.name;
        result.display_name = self.display_name;
        result.endpoint = self.endpoint;
        result.state = crate::model::JobState::from(self.state);
        result.schedule_state = crate::model::model_deployment_monitoring_job::MonitoringScheduleState::from(self.schedule_state);
        result.model_deployment_monitoring_objective_configs = self.model_deployment_monitoring_objective_configs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.model_deployment_monitoring_schedule_config = self.model_deployment_monitoring_schedule_config.map(|v| v.cnv()).transpose()?;
        result.predict_instance_schema_uri = self.predict_instance_schema_uri;
        result.analysis_instance_schema_uri = self.analysis_instance_schema_uri;
        result.log_ttl = self.log_ttl.map(|v| v.cnv()).transpose()?;
        result.labels = self.labels;
        result.create_time = self.create_time.map(|v| v.cnv()).transpose()?;
        result.update_time = self.update_time.map(|v| v.cnv()).transpose()?;
        result.next_schedule_time = self.next_schedule_time.map(|v| v.cnv()).transpose()?;
        result.stats_anomalies_base_directory = self.stats_anomalies_base_directory.map(|v| v.cnv()).transpose()?;
        result.enable_monitoring_pipeline_logs = self.enable_monitoring_pipeline_logs;
        result.error = self.error.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ModelMonitoringStatsAnomalies> for crate::model::ModelMonitoringStatsAnomalies {
    type Output = ModelMonitoringStatsAnomalies;
    fn to_proto(self) -> gaxi::prost::Result<ModelMonitoringStatsAnomalies> {
        Ok(ModelMonitoringStatsAnomalies {
            objective: self.objective.to_proto()?,
            deployed_model_id: self.deployed_model_id,
            anomaly_count: self.anomaly_count,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ModelMonitoringStatsAnomalies> for ModelMonitoringStatsAnomalies {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ModelMonitoringStatsAnomalies> {
        let mut result = crate::model::ModelMonitoringStatsAnomalies::new();
        result.objective = crate::model::ModelDeploymentMonitoringObjectiveType::from(self.objective);
        result.deployed_model_id = self.deployed_model_id;
        result.anomaly_count = self.anomaly_count;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GenericOperationMetadata> for crate::model::GenericOperationMetadata {
    type Output = GenericOperationMetadata;
    fn to_proto(self) -> gaxi::prost::Result<GenericOperationMetadata> {
        Ok(GenericOperationMetadata {
            partial_failures: self.partial_failures
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            create_time: self.create_time.map(|v| v.to_proto()).transpose()?,
            update_time: self.update_time.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GenericOperationMetadata> for GenericOperationMetadata {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GenericOperationMetadata> {
        let mut result = crate::model::GenericOperationMetadata::new();
        result.partial_failures = self.partial_failures
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.create_time = self.create_time.map(|v| v.cnv()).transpose()?;
        result.update_time = self.update_time.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DeleteOperationMetadata> for crate::model::DeleteOperationMetadata {
    type Output = DeleteOperationMetadata;
    fn to_proto(self) -> gaxi::prost::Result<DeleteOperationMetadata> {
        Ok(DeleteOperationMetadata {
            generic_metadata: self.generic_metadata.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DeleteOperationMetadata> for DeleteOperationMetadata {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DeleteOperationMetadata> {
        let mut result = crate::model::DeleteOperationMetadata::new();
        result.generic_metadata = self.generic_metadata.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<UpdateModelDeploymentMonitoringJobOperationMetadata> for crate::model::UpdateModelDeploymentMonitoringJobOperationMetadata {
    type Output = UpdateModelDeploymentMonitoringJobOperationMetadata;
    fn to_proto(self) -> gaxi::prost::Result<UpdateModelDeploymentMonitoringJobOperationMetadata> {
        Ok(UpdateModelDeploymentMonitoringJobOperationMetadata {
            generic_metadata: self.generic_metadata.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::UpdateModelDeploymentMonitoringJobOperationMetadata> for UpdateModelDeploymentMonitoringJobOperationMetadata {
    fn cnv(self) -> gaxi::prost::Result<crate::model::UpdateModelDeploymentMonitoringJobOperationMetadata> {
        let mut result = crate::model::UpdateModelDeploymentMonitoringJobOperationMetadata::new();
        result.generic_metadata = self.generic_metadata.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CreateCustomJobRequest> for crate::model::CreateCustomJobRequest {
    type Output = CreateCustomJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CreateCustomJobRequest> {
        Ok(CreateCustomJobRequest {
            parent: self.parent,
            custom_job: self.custom_job.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CreateCustomJobRequest> for CreateCustomJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CreateCustomJobRequest> {
        let mut result = crate::model::CreateCustomJobRequest::new();
        result.parent = self.parent;
        result.custom_job = self.custom_job.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GetCustomJobRequest> for crate::model::GetCustomJobRequest {
    type Output = GetCustomJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetCustomJobRequest> {
        Ok(GetCustomJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GetCustomJobRequest> for GetCustomJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GetCustomJobRequest> {
        let mut result = crate::model::GetCustomJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListCustomJobsRequest> for crate::model::ListCustomJobsRequest {
    type Output = ListCustomJobsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListCustomJobsRequest> {
        Ok(ListCustomJobsRequest {
            parent: self.parent,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
            read_mask: self.read_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListCustomJobsRequest> for ListCustomJobsRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListCustomJobsRequest> {
        let mut result = crate::model::ListCustomJobsRequest::new();
        result.parent = self.parent;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.read_mask = self.read_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListCustomJobsResponse> for crate::model::ListCustomJobsResponse {
    type Output = ListCustomJobsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListCustomJobsResponse> {
        Ok(ListCustomJobsResponse {
            custom_jobs: self.custom_jobs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListCustomJobsResponse> for ListCustomJobsResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListCustomJobsResponse> {
        let mut result = crate::model::ListCustomJobsResponse::new();
        result.custom_jobs = self.custom_jobs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DeleteCustomJobRequest> for crate::model::DeleteCustomJobRequest {
    type Output = DeleteCustomJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<DeleteCustomJobRequest> {
        Ok(DeleteCustomJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DeleteCustomJobRequest> for DeleteCustomJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DeleteCustomJobRequest> {
        let mut result = crate::model::DeleteCustomJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CancelCustomJobRequest> for crate::model::CancelCustomJobRequest {
    type Output = CancelCustomJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CancelCustomJobRequest> {
        Ok(CancelCustomJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CancelCustomJobRequest> for CancelCustomJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CancelCustomJobRequest> {
        let mut result = crate::model::CancelCustomJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CreateDataLabelingJobRequest> for crate::model::CreateDataLabelingJobRequest {
    type Output = CreateDataLabelingJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CreateDataLabelingJobRequest> {
        Ok(CreateDataLabelingJobRequest {
            parent: self.parent,
            data_labeling_job: self.data_labeling_job.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CreateDataLabelingJobRequest> for CreateDataLabelingJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CreateDataLabelingJobRequest> {
        let mut result = crate::model::CreateDataLabelingJobRequest::new();
        result.parent = self.parent;
        result.data_labeling_job = self.data_labeling_job.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GetDataLabelingJobRequest> for crate::model::GetDataLabelingJobRequest {
    type Output = GetDataLabelingJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetDataLabelingJobRequest> {
        Ok(GetDataLabelingJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GetDataLabelingJobRequest> for GetDataLabelingJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GetDataLabelingJobRequest> {
        let mut result = crate::model::GetDataLabelingJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListDataLabelingJobsRequest> for crate::model::ListDataLabelingJobsRequest {
    type Output = ListDataLabelingJobsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListDataLabelingJobsRequest> {
        Ok(ListDataLabelingJobsRequest {
            parent: self.parent,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
            read_mask: self.read_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListDataLabelingJobsRequest> for ListDataLabelingJobsRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListDataLabelingJobsRequest> {
        let mut result = crate::model::ListDataLabelingJobsRequest::new();
        result.parent = self.parent;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.read_mask = self.read_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListDataLabelingJobsResponse> for crate::model::ListDataLabelingJobsResponse {
    type Output = ListDataLabelingJobsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListDataLabelingJobsResponse> {
        Ok(ListDataLabelingJobsResponse {
            data_labeling_jobs: self.data_labeling_jobs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListDataLabelingJobsResponse> for ListDataLabelingJobsResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListDataLabelingJobsResponse> {
        let mut result = crate::model::ListDataLabelingJobsResponse::new();
        result.data_labeling_jobs = self.data_labeling_jobs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DeleteDataLabelingJobRequest> for crate::model::DeleteDataLabelingJobRequest {
    type Output = DeleteDataLabelingJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<DeleteDataLabelingJobRequest> {
        Ok(DeleteDataLabelingJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DeleteDataLabelingJobRequest> for DeleteDataLabelingJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DeleteDataLabelingJobRequest> {
        let mut result = crate::model::DeleteDataLabelingJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CancelDataLabelingJobRequest> for crate::model::CancelDataLabelingJobRequest {
    type Output = CancelDataLabelingJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CancelDataLabelingJobRequest> {
        Ok(CancelDataLabelingJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CancelDataLabelingJobRequest> for CancelDataLabelingJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CancelDataLabelingJobRequest> {
        let mut result = crate::model::CancelDataLabelingJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CreateHyperparameterTuningJobRequest> for crate::model::CreateHyperparameterTuningJobRequest {
    type Output = CreateHyperparameterTuningJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CreateHyperparameterTuningJobRequest> {
        Ok(CreateHyperparameterTuningJobRequest {
            parent: self.parent,
            hyperparameter_tuning_job: self.hyperparameter_tuning_job.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CreateHyperparameterTuningJobRequest> for CreateHyperparameterTuningJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CreateHyperparameterTuningJobRequest> {
        let mut result = crate::model::CreateHyperparameterTuningJobRequest::new();
        result.parent = self.parent;
        result.hyperparameter_tuning_job = self.hyperparameter_tuning_job.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GetHyperparameterTuningJobRequest> for crate::model::GetHyperparameterTuningJobRequest {
    type Output = GetHyperparameterTuningJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetHyperparameterTuningJobRequest> {
        Ok(GetHyperparameterTuningJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GetHyperparameterTuningJobRequest> for GetHyperparameterTuningJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GetHyperparameterTuningJobRequest> {
        let mut result = crate::model::GetHyperparameterTuningJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListHyperparameterTuningJobsRequest> for crate::model::ListHyperparameterTuningJobsRequest {
    type Output = ListHyperparameterTuningJobsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListHyperparameterTuningJobsRequest> {
        Ok(ListHyperparameterTuningJobsRequest {
            parent: self.parent,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
            read_mask: self.read_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListHyperparameterTuningJobsRequest> for ListHyperparameterTuningJobsRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListHyperparameterTuningJobsRequest> {
        let mut result = crate::model::ListHyperparameterTuningJobsRequest::new();
        result.parent = self.parent;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.read_mask = self.read_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListHyperparameterTuningJobsResponse> for crate::model::ListHyperparameterTuningJobsResponse {
    type Output = ListHyperparameterTuningJobsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListHyperparameterTuningJobsResponse> {
        Ok(ListHyperparameterTuningJobsResponse {
            hyperparameter_tuning_jobs: self.hyperparameter_tuning_jobs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListHyperparameterTuningJobsResponse> for ListHyperparameterTuningJobsResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListHyperparameterTuningJobsResponse> {
        let mut result = crate::model::ListHyperparameterTuningJobsResponse::new();
        result.hyperparameter_tuning_jobs = self.hyperparameter_tuning_jobs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DeleteHyperparameterTuningJobRequest> for crate::model::DeleteHyperparameterTuningJobRequest {
    type Output = DeleteHyperparameterTuningJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<DeleteHyperparameterTuningJobRequest> {
        Ok(DeleteHyperparameterTuningJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DeleteHyperparameterTuningJobRequest> for DeleteHyperparameterTuningJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DeleteHyperparameterTuningJobRequest> {
        let mut result = crate::model::DeleteHyperparameterTuningJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CancelHyperparameterTuningJobRequest> for crate::model::CancelHyperparameterTuningJobRequest {
    type Output = CancelHyperparameterTuningJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CancelHyperparameterTuningJobRequest> {
        Ok(CancelHyperparameterTuningJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CancelHyperparameterTuningJobRequest> for CancelHyperparameterTuningJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CancelHyperparameterTuningJobRequest> {
        let mut result = crate::model::CancelHyperparameterTuningJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CreateNasJobRequest> for crate::model::CreateNasJobRequest {
    type Output = CreateNasJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CreateNasJobRequest> {
        Ok(CreateNasJobRequest {
            parent: self.parent,
            nas_job: self.nas_job.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CreateNasJobRequest> for CreateNasJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CreateNasJobRequest> {
        let mut result = crate::model::CreateNasJobRequest::new();
        result.parent = self.parent;
        result.nas_job = self.nas_job.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GetNasJobRequest> for crate::model::GetNasJobRequest {
    type Output = GetNasJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetNasJobRequest> {
        Ok(GetNasJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GetNasJobRequest> for GetNasJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GetNasJobRequest> {
        let mut result = crate::model::GetNasJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListNasJobsRequest> for crate::model::ListNasJobsRequest {
    type Output = ListNasJobsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListNasJobsRequest> {
        Ok(ListNasJobsRequest {
            parent: self.parent,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
            read_mask: self.read_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListNasJobsRequest> for ListNasJobsRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListNasJobsRequest> {
        let mut result = crate::model::ListNasJobsRequest::new();
        result.parent = self.parent;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.read_mask = self.read_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListNasJobsResponse> for crate::model::ListNasJobsResponse {
    type Output = ListNasJobsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListNasJobsResponse> {
        Ok(ListNasJobsResponse {
            nas_jobs: self.nas_jobs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListNasJobsResponse> for ListNasJobsResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListNasJobsResponse> {
        let mut result = crate::model::ListNasJobsResponse::new();
        result.nas_jobs = self.nas_jobs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DeleteNasJobRequest> for crate::model::DeleteNasJobRequest {
    type Output = DeleteNasJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<DeleteNasJobRequest> {
        Ok(DeleteNasJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DeleteNasJobRequest> for DeleteNasJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DeleteNasJobRequest> {
        let mut result = crate::model::DeleteNasJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CancelNasJobRequest> for crate::model::CancelNasJobRequest {
    type Output = CancelNasJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CancelNasJobRequest> {
        Ok(CancelNasJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CancelNasJobRequest> for CancelNasJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CancelNasJobRequest> {
        let mut result = crate::model::CancelNasJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GetNasTrialDetailRequest> for crate::model::GetNasTrialDetailRequest {
    type Output = GetNasTrialDetailRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetNasTrialDetailRequest> {
        Ok(GetNasTrialDetailRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GetNasTrialDetailRequest> for GetNasTrialDetailRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GetNasTrialDetailRequest> {
        let mut result = crate::model::GetNasTrialDetailRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListNasTrialDetailsRequest> for crate::model::ListNasTrialDetailsRequest {
    type Output = ListNasTrialDetailsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListNasTrialDetailsRequest> {
        Ok(ListNasTrialDetailsRequest {
            parent: self.parent,
            page_size: self.page_size,
            page_token: self.page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListNasTrialDetailsRequest> for ListNasTrialDetailsRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListNasTrialDetailsRequest> {
        let mut result = crate::model::ListNasTrialDetailsRequest::new();
        result.parent = self.parent;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListNasTrialDetailsResponse> for crate::model::ListNasTrialDetailsResponse {
    type Output = ListNasTrialDetailsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListNasTrialDetailsResponse> {
        Ok(ListNasTrialDetailsResponse {
            nas_trial_details: self.nas_trial_details
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListNasTrialDetailsResponse> for ListNasTrialDetailsResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListNasTrialDetailsResponse> {
        let mut result = crate::model::ListNasTrialDetailsResponse::new();
        result.nas_trial_details = self.nas_trial_details
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CreateBatchPredictionJobRequest> for crate::model::CreateBatchPredictionJobRequest {
    type Output = CreateBatchPredictionJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CreateBatchPredictionJobRequest> {
        Ok(CreateBatchPredictionJobRequest {
            parent: self.parent,
            batch_prediction_job: self.batch_prediction_job.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CreateBatchPredictionJobRequest> for CreateBatchPredictionJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CreateBatchPredictionJobRequest> {
        let mut result = crate::model::CreateBatchPredictionJobRequest::new();
        result.parent = self.parent;
        result.batch_prediction_job = self.batch_prediction_job.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GetBatchPredictionJobRequest> for crate::model::GetBatchPredictionJobRequest {
    type Output = GetBatchPredictionJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetBatchPredictionJobRequest> {
        Ok(GetBatchPredictionJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GetBatchPredictionJobRequest> for GetBatchPredictionJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GetBatchPredictionJobRequest> {
        let mut result = crate::model::GetBatchPredictionJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListBatchPredictionJobsRequest> for crate::model::ListBatchPredictionJobsRequest {
    type Output = ListBatchPredictionJobsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListBatchPredictionJobsRequest> {
        Ok(ListBatchPredictionJobsRequest {
            parent: self.parent,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
            read_mask: self.read_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListBatchPredictionJobsRequest> for ListBatchPredictionJobsRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListBatchPredictionJobsRequest> {
        let mut result = crate::model::ListBatchPredictionJobsRequest::new();
        result.parent = self.parent;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.read_mask = self.read_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListBatchPredictionJobsResponse> for crate::model::ListBatchPredictionJobsResponse {
    type Output = ListBatchPredictionJobsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListBatchPredictionJobsResponse> {
        Ok(ListBatchPredictionJobsResponse {
            batch_prediction_jobs: self.batch_prediction_jobs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListBatchPredictionJobsResponse> for ListBatchPredictionJobsResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListBatchPredictionJobsResponse> {
        let mut result = crate::model::ListBatchPredictionJobsResponse::new();
        result.batch_prediction_jobs = self.batch_prediction_jobs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DeleteBatchPredictionJobRequest> for crate::model::DeleteBatchPredictionJobRequest {
    type Output = DeleteBatchPredictionJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<DeleteBatchPredictionJobRequest> {
        Ok(DeleteBatchPredictionJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DeleteBatchPredictionJobRequest> for DeleteBatchPredictionJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DeleteBatchPredictionJobRequest> {
        let mut result = crate::model::DeleteBatchPredictionJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CancelBatchPredictionJobRequest> for crate::model::CancelBatchPredictionJobRequest {
    type Output = CancelBatchPredictionJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CancelBatchPredictionJobRequest> {
        Ok(CancelBatchPredictionJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CancelBatchPredictionJobRequest> for CancelBatchPredictionJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CancelBatchPredictionJobRequest> {
        let mut result = crate::model::CancelBatchPredictionJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<CreateModelDeploymentMonitoringJobRequest> for crate::model::CreateModelDeploymentMonitoringJobRequest {
    type Output = CreateModelDeploymentMonitoringJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<CreateModelDeploymentMonitoringJobRequest> {
        Ok(CreateModelDeploymentMonitoringJobRequest {
            parent: self.parent,
            model_deployment_monitoring_job: self.model_deployment_monitoring_job.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::CreateModelDeploymentMonitoringJobRequest> for CreateModelDeploymentMonitoringJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::CreateModelDeploymentMonitoringJobRequest> {
        let mut result = crate::model::CreateModelDeploymentMonitoringJobRequest::new();
        result.parent = self.parent;
        result.model_deployment_monitoring_job = self.model_deployment_monitoring_job.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<GetModelDeploymentMonitoringJobRequest> for crate::model::GetModelDeploymentMonitoringJobRequest {
    type Output = GetModelDeploymentMonitoringJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<GetModelDeploymentMonitoringJobRequest> {
        Ok(GetModelDeploymentMonitoringJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::GetModelDeploymentMonitoringJobRequest> for GetModelDeploymentMonitoringJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::GetModelDeploymentMonitoringJobRequest> {
        let mut result = crate::model::GetModelDeploymentMonitoringJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListModelDeploymentMonitoringJobsRequest> for crate::model::ListModelDeploymentMonitoringJobsRequest {
    type Output = ListModelDeploymentMonitoringJobsRequest;
    fn to_proto(self) -> gaxi::prost::Result<ListModelDeploymentMonitoringJobsRequest> {
        Ok(ListModelDeploymentMonitoringJobsRequest {
            parent: self.parent,
            filter: self.filter,
            page_size: self.page_size,
            page_token: self.page_token,
            read_mask: self.read_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListModelDeploymentMonitoringJobsRequest> for ListModelDeploymentMonitoringJobsRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListModelDeploymentMonitoringJobsRequest> {
        let mut result = crate::model::ListModelDeploymentMonitoringJobsRequest::new();
        result.parent = self.parent;
        result.filter = self.filter;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.read_mask = self.read_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ListModelDeploymentMonitoringJobsResponse> for crate::model::ListModelDeploymentMonitoringJobsResponse {
    type Output = ListModelDeploymentMonitoringJobsResponse;
    fn to_proto(self) -> gaxi::prost::Result<ListModelDeploymentMonitoringJobsResponse> {
        Ok(ListModelDeploymentMonitoringJobsResponse {
            model_deployment_monitoring_jobs: self.model_deployment_monitoring_jobs
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ListModelDeploymentMonitoringJobsResponse> for ListModelDeploymentMonitoringJobsResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ListModelDeploymentMonitoringJobsResponse> {
        let mut result = crate::model::ListModelDeploymentMonitoringJobsResponse::new();
        result.model_deployment_monitoring_jobs = self.model_deployment_monitoring_jobs
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<DeleteModelDeploymentMonitoringJobRequest> for crate::model::DeleteModelDeploymentMonitoringJobRequest {
    type Output = DeleteModelDeploymentMonitoringJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<DeleteModelDeploymentMonitoringJobRequest> {
        Ok(DeleteModelDeploymentMonitoringJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::DeleteModelDeploymentMonitoringJobRequest> for DeleteModelDeploymentMonitoringJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::DeleteModelDeploymentMonitoringJobRequest> {
        let mut result = crate::model::DeleteModelDeploymentMonitoringJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<SearchModelDeploymentMonitoringStatsAnomaliesRequest> for crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest {
    type Output = SearchModelDeploymentMonitoringStatsAnomaliesRequest;
    fn to_proto(self) -> gaxi::prost::Result<SearchModelDeploymentMonitoringStatsAnomaliesRequest> {
        Ok(SearchModelDeploymentMonitoringStatsAnomaliesRequest {
            model_deployment_monitoring_job: self.model_deployment_monitoring_job,
            deployed_model_id: self.deployed_model_id,
            feature_display_name: self.feature_display_name,
            objectives: self.objectives
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            page_size: self.page_size,
            page_token: self.page_token,
            start_time: self.start_time.map(|v| v.to_proto()).transpose()?,
            end_time: self.end_time.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest> for SearchModelDeploymentMonitoringStatsAnomaliesRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest> {
        let mut result = crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::new();
        result.model_deployment_monitoring_job = self.model_deployment_monitoring_job;
        result.deployed_model_id = self.deployed_model_id;
        result.feature_display_name = self.feature_display_name;
        result.objectives = self.objectives
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.page_size = self.page_size;
        result.page_token = self.page_token;
        result.start_time = self.start_time.map(|v| v.cnv()).transpose()?;
        result.end_time = self.end_time.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective> for crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective {
    type Output = search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective;
    fn to_proto(self) -> gaxi::prost::Result<search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective> {
        Ok(search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective {
            r#type: self.r#type.to_proto()?,
            top_feature_count: self.top_feature_count,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective> for search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective {
    fn cnv(self) -> gaxi::prost::Result<crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective> {
        let mut result = crate::model::search_model_deployment_monitoring_stats_anomalies_request::StatsAnomaliesObjective::new();
        result.r#type = crate::model::ModelDeploymentMonitoringObjectiveType::from(self.r#type);
        result.top_feature_count = self.top_feature_count;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<SearchModelDeploymentMonitoringStatsAnomaliesResponse> for crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse {
    type Output = SearchModelDeploymentMonitoringStatsAnomaliesResponse;
    fn to_proto(self) -> gaxi::prost::Result<SearchModelDeploymentMonitoringStatsAnomaliesResponse> {
        Ok(SearchModelDeploymentMonitoringStatsAnomaliesResponse {
            monitoring_stats: self.monitoring_stats
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<gaxi::prost::Result<_>>()?,
            next_page_token: self.next_page_token,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse> for SearchModelDeploymentMonitoringStatsAnomaliesResponse {
    fn cnv(self) -> gaxi::prost::Result<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse> {
        let mut result = crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse::new();
        result.monitoring_stats = self.monitoring_stats
            .into_iter()
            .map(|v| v.cnv())
            .collect::<gaxi::prost::Result<_>>()?;
        result.next_page_token = self.next_page_token;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<UpdateModelDeploymentMonitoringJobRequest> for crate::model::UpdateModelDeploymentMonitoringJobRequest {
    type Output = UpdateModelDeploymentMonitoringJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<UpdateModelDeploymentMonitoringJobRequest> {
        Ok(UpdateModelDeploymentMonitoringJobRequest {
            model_deployment_monitoring_job: self.model_deployment_monitoring_job.map(|v| v.to_proto()).transpose()?,
            update_mask: self.update_mask.map(|v| v.to_proto()).transpose()?,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::UpdateModelDeploymentMonitoringJobRequest> for UpdateModelDeploymentMonitoringJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::UpdateModelDeploymentMonitoringJobRequest> {
        let mut result = crate::model::UpdateModelDeploymentMonitoringJobRequest::new();
        result.model_deployment_monitoring_job = self.model_deployment_monitoring_job.map(|v| v.cnv()).transpose()?;
        result.update_mask = self.update_mask.map(|v| v.cnv()).transpose()?;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<PauseModelDeploymentMonitoringJobRequest> for crate::model::PauseModelDeploymentMonitoringJobRequest {
    type Output = PauseModelDeploymentMonitoringJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<PauseModelDeploymentMonitoringJobRequest> {
        Ok(PauseModelDeploymentMonitoringJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::PauseModelDeploymentMonitoringJobRequest> for PauseModelDeploymentMonitoringJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::PauseModelDeploymentMonitoringJobRequest> {
        let mut result = crate::model::PauseModelDeploymentMonitoringJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}

impl gaxi::prost::ToProto<ResumeModelDeploymentMonitoringJobRequest> for crate::model::ResumeModelDeploymentMonitoringJobRequest {
    type Output = ResumeModelDeploymentMonitoringJobRequest;
    fn to_proto(self) -> gaxi::prost::Result<ResumeModelDeploymentMonitoringJobRequest> {
        Ok(ResumeModelDeploymentMonitoringJobRequest {
            name: self.name,
        })
    }
}

impl gaxi::prost::FromProto<crate::model::ResumeModelDeploymentMonitoringJobRequest> for ResumeModelDeploymentMonitoringJobRequest {
    fn cnv(self) -> gaxi::prost::Result<crate::model::ResumeModelDeploymentMonitoringJobRequest> {
        let mut result = crate::model::ResumeModelDeploymentMonitoringJobRequest::new();
        result.name = self.name;
        Ok(result)
    }
}
