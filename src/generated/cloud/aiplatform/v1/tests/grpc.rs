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

//! Sends Job Service RPCs through an injected binary RPC channel.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous;
    use auth::credentials::testing::{test_credentials, test_credentials_in_universe};
    use bytes::Bytes;
    use gax::channel::Channel;
    use http::HeaderMap;
    use lro::{Poller, PollingResult};
    use prost::Message;
    use std::time::Duration;
    use vertex_jobs_v1::client::JobService;
    use vertex_jobs_v1::google::cloud::aiplatform::v1 as pb;
    use vertex_jobs_v1::google::longrunning as lro_pb;
    use vertex_jobs_v1::model::JobState;
    use vertex_jobs_v1::transport::TransportKind;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        Channel {}

        #[async_trait::async_trait]
        impl Channel for Channel {
            async fn unary(
                &self,
                path: &'static str,
                metadata: HeaderMap,
                payload: Bytes,
                timeout: Option<Duration>,
            ) -> gax::Result<Bytes>;
            async fn close(&self);
        }
    }

    const JOB: &str = "projects/p/locations/l/customJobs/j";

    fn header<'a>(metadata: &'a HeaderMap, name: &str) -> Option<&'a str> {
        metadata.get(name).and_then(|v| v.to_str().ok())
    }

    fn encode<M: Message>(message: M) -> Bytes {
        Bytes::from(message.encode_to_vec())
    }

    fn pack<M: Message>(type_name: &str, message: M) -> prost_types::Any {
        prost_types::Any {
            type_url: format!("type.googleapis.com/{type_name}"),
            value: message.encode_to_vec(),
        }
    }

    #[tokio::test]
    async fn get_custom_job() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .withf(|path, metadata, payload, _| {
                let request = pb::GetCustomJobRequest::decode(payload.clone()).unwrap_or_default();
                path == "/google.cloud.aiplatform.v1.JobService/GetCustomJob"
                    && header(metadata, "x-goog-request-params")
                        == Some("name=projects/p/locations/l/customJobs/j")
                    && header(metadata, "x-goog-api-client").is_some_and(|v| v.contains(" grpc/"))
                    && !metadata.contains_key(http::header::AUTHORIZATION)
                    && request.name == JOB
            })
            .returning(|_, _, _, _| {
                Ok(encode(pb::CustomJob {
                    name: "name_value".into(),
                    display_name: "display_name_value".into(),
                    state: pb::JobState::Queued as i32,
                    ..Default::default()
                }))
            });
        channel.expect_close().never();

        let client = JobService::builder()
            .with_credentials(anonymous::Builder::new().build())
            .with_transport("grpc")
            .with_channel(channel)
            .build()
            .await?;
        let job = client.get_custom_job().set_name(JOB).send().await?;
        assert_eq!(job.name, "name_value");
        assert_eq!(job.display_name, "display_name_value");
        assert_eq!(job.state, JobState::Queued);

        let transport = client.transport().expect("built clients have a transport");
        assert_eq!(transport.kind(), TransportKind::Grpc);
        assert_eq!(transport.host(), "aiplatform.googleapis.com:443");
        Ok(())
    }

    #[tokio::test]
    async fn empty_routing_field_still_sends_header() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .withf(|_, metadata, _, _| header(metadata, "x-goog-request-params") == Some("name="))
            .returning(|_, _, _, _| Ok(Bytes::new()));
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let job = client.get_custom_job().send().await?;
        assert_eq!(job, vertex_jobs_v1::model::CustomJob::default());
        Ok(())
    }

    #[tokio::test]
    async fn grpc_asyncio_uses_the_binary_protocol() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .withf(|path, metadata, _, _| {
                path == "/google.cloud.aiplatform.v1.JobService/CancelCustomJob"
                    && header(metadata, "x-goog-request-params") == Some(format!("name={JOB}").as_str())
            })
            .returning(|_, _, _, _| Ok(Bytes::new()));
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_transport("grpc_asyncio")
            .with_channel(channel)
            .build()
            .await?;
        assert_eq!(
            client.transport().map(|t| t.kind()),
            Some(TransportKind::GrpcAsyncio)
        );
        client.cancel_custom_job().set_name(JOB).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn mixin_routing() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .withf(|path, metadata, _, _| {
                path == "/google.longrunning.Operations/GetOperation"
                    && header(metadata, "x-goog-request-params")
                        == Some("name=projects/p/locations/l/operations/o")
            })
            .returning(|_, _, _, _| {
                Ok(encode(lro_pb::Operation {
                    name: "projects/p/locations/l/operations/o".into(),
                    done: true,
                    ..Default::default()
                }))
            });
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let operation = client
            .get_operation()
            .with_request(
                longrunning::model::GetOperationRequest::new()
                    .set_name("projects/p/locations/l/operations/o"),
            )
            .send()
            .await?;
        assert!(operation.done);
        Ok(())
    }

    #[tokio::test]
    async fn universe_mismatch() -> Result<()> {
        let mut channel = MockChannel::new();
        channel.expect_unary().never();
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_universe_domain("bar.com")
            .with_channel(channel)
            .build()
            .await?;
        let err = client
            .get_custom_job()
            .set_name(JOB)
            .send()
            .await
            .expect_err("the credentials belong to the default universe");
        assert!(err.is_universe_mismatch(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn universe_validated_once() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(2)
            .returning(|_, _, _, _| Ok(Bytes::new()));
        let client = JobService::builder()
            .with_credentials(test_credentials_in_universe("bar.com"))
            .with_universe_domain("bar.com")
            .with_channel(channel)
            .build()
            .await?;
        let transport = client.transport().expect("built clients have a transport");
        assert_eq!(transport.universe_domain(), "bar.com");
        assert_eq!(transport.host(), "aiplatform.bar.com:443");
        client.get_custom_job().set_name(JOB).send().await?;
        client.get_custom_job().set_name(JOB).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn closed_transport() -> Result<()> {
        let mut channel = MockChannel::new();
        channel.expect_unary().never();
        // Injected channels belong to the application.
        channel.expect_close().never();
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let other = client.clone();
        client.close().await;
        client.close().await;
        assert!(other.transport().is_some_and(|t| t.is_closed()));

        let err = other
            .get_custom_job()
            .set_name(JOB)
            .send()
            .await
            .expect_err("the transport is closed");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn shared_transport() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(2)
            .returning(|_, _, _, _| Ok(Bytes::new()));
        let transport = vertex_jobs_v1::transport::Transport::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let first = JobService::builder()
            .with_transport(transport.clone())
            .build()
            .await?;
        let second = JobService::builder()
            .with_transport(transport.clone())
            .build()
            .await?;
        first.get_custom_job().set_name(JOB).send().await?;
        second.get_custom_job().set_name(JOB).send().await?;

        first.close().await;
        assert!(transport.is_closed());
        assert!(second.transport().is_some_and(|t| t.is_closed()));
        Ok(())
    }

    #[tokio::test]
    async fn transport_conflict() -> Result<()> {
        let mut channel = MockChannel::new();
        channel.expect_unary().never();
        let transport = vertex_jobs_v1::transport::Transport::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let err = JobService::builder()
            .with_transport(transport)
            .with_credentials(test_credentials())
            .build()
            .await
            .expect_err("the transport already has credentials");
        assert!(err.is_transport_conflict(), "{err:?}");
        assert!(
            err.to_string().contains("transport already configured"),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn with_tracing() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .returning(|_, _, _, _| {
                Ok(encode(pb::CustomJob {
                    name: JOB.into(),
                    ..Default::default()
                }))
            });
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .with_tracing()
            .build()
            .await?;
        let job = client.get_custom_job().set_name(JOB).send().await?;
        assert_eq!(job.name, JOB);
        assert!(client.transport().is_some());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_transport() {
        let got = JobService::builder()
            .with_credentials(test_credentials())
            .with_transport("carrier-pigeon")
            .build()
            .await;
        let err = got.expect_err("unknown transports are rejected");
        assert!(err.is_config(), "{err:?}");
    }

    #[tokio::test]
    async fn create_custom_job_payload() -> Result<()> {
        let mut channel = MockChannel::new();
        channel
            .expect_unary()
            .times(1)
            .withf(|path, _, payload, _| {
                let Ok(request) = pb::CreateCustomJobRequest::decode(payload.clone()) else {
                    return false;
                };
                let job = request.custom_job.unwrap_or_default();
                let pool = job
                    .job_spec
                    .unwrap_or_default()
                    .worker_pool_specs
                    .into_iter()
                    .next()
                    .unwrap_or_default();
                path == "/google.cloud.aiplatform.v1.JobService/CreateCustomJob"
                    && request.parent == "projects/p/locations/l"
                    && job.display_name == "d"
                    && job.labels.get("k").map(String::as_str) == Some("v")
                    && pool.replica_count == 2
                    && pool.machine_spec.unwrap_or_default().machine_type == "n1-standard-4"
            })
            .returning(|_, _, _, _| {
                Ok(encode(pb::CustomJob {
                    name: JOB.into(),
                    state: pb::JobState::Failed as i32,
                    create_time: Some(prost_types::Timestamp {
                        seconds: 1_700_000_000,
                        nanos: 0,
                    }),
                    error: Some(gaxi::google::rpc::Status {
                        code: 10,
                        message: "quota".into(),
                        details: Vec::new(),
                    }),
                    ..Default::default()
                }))
            });
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let spec = vertex_jobs_v1::model::CustomJobSpec::new().set_worker_pool_specs([
            vertex_jobs_v1::model::WorkerPoolSpec::new()
                .set_replica_count(2)
                .set_machine_spec(
                    vertex_jobs_v1::model::MachineSpec::new().set_machine_type("n1-standard-4"),
                ),
        ]);
        let job = client
            .create_custom_job()
            .set_parent("projects/p/locations/l")
            .set_custom_job(
                vertex_jobs_v1::model::CustomJob::new()
                    .set_display_name("d")
                    .set_labels([("k", "v")])
                    .set_job_spec(spec),
            )
            .send()
            .await?;
        assert_eq!(job.name, JOB);
        assert_eq!(job.state, JobState::Failed);
        assert_eq!(
            job.create_time,
            Some(wkt::Timestamp::new(1_700_000_000, 0)?)
        );
        let error = job.error.expect("the response has an error");
        assert_eq!(error.code, gax::error::rpc::Code::Aborted);
        assert_eq!(error.message, "quota");
        Ok(())
    }

    #[tokio::test]
    async fn rest_only_field() -> Result<()> {
        let mut channel = MockChannel::new();
        channel.expect_unary().never();
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let study_spec = serde_json::Map::from_iter([(
            "algorithm".to_string(),
            serde_json::Value::from("RANDOM_SEARCH"),
        )]);
        let err = client
            .create_hyperparameter_tuning_job()
            .set_parent("projects/p/locations/l")
            .set_hyperparameter_tuning_job(
                vertex_jobs_v1::model::HyperparameterTuningJob::new().set_study_spec(study_spec),
            )
            .send()
            .await
            .expect_err("study_spec has no binary encoding");
        assert!(err.is_serialization(), "{err:?}");
        assert!(err.to_string().contains("study_spec"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_enum_value() -> Result<()> {
        let mut channel = MockChannel::new();
        channel.expect_unary().times(1).returning(|_, _, _, _| {
            Ok(encode(pb::CustomJob {
                state: 42,
                ..Default::default()
            }))
        });
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let job = client.get_custom_job().set_name(JOB).send().await?;
        assert_eq!(job.state.value(), Some(42));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn delete_poller_metadata() -> Result<()> {
        let metadata = || {
            pack(
                "google.cloud.aiplatform.v1.DeleteOperationMetadata",
                pb::DeleteOperationMetadata {
                    generic_metadata: Some(pb::GenericOperationMetadata {
                        create_time: Some(prost_types::Timestamp {
                            seconds: 123,
                            nanos: 0,
                        }),
                        ..Default::default()
                    }),
                },
            )
        };
        let mut channel = MockChannel::new();
        let mut seq = mockall::Sequence::new();
        channel
            .expect_unary()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|path, _, payload, _| {
                path == "/google.cloud.aiplatform.v1.JobService/DeleteCustomJob"
                    && pb::DeleteCustomJobRequest::decode(payload.clone())
                        .is_ok_and(|r| r.name == JOB)
            })
            .returning(move |_, _, _, _| {
                Ok(encode(lro_pb::Operation {
                    name: "operations/o".into(),
                    metadata: Some(metadata()),
                    ..Default::default()
                }))
            });
        channel
            .expect_unary()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|path, _, payload, _| {
                path == "/google.longrunning.Operations/GetOperation"
                    && lro_pb::GetOperationRequest::decode(payload.clone())
                        .is_ok_and(|r| r.name == "operations/o")
            })
            .returning(|_, _, _, _| {
                Ok(encode(lro_pb::Operation {
                    name: "operations/o".into(),
                    done: true,
                    result: Some(lro_pb::operation::Result::Response(pack(
                        "google.protobuf.Empty",
                        (),
                    ))),
                    ..Default::default()
                }))
            });
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;

        let mut poller = client.delete_custom_job().set_name(JOB).poller();
        match poller.poll().await {
            Some(PollingResult::InProgress(Some(m))) => {
                let create_time = m.generic_metadata.and_then(|g| g.create_time);
                assert_eq!(create_time, Some(wkt::Timestamp::new(123, 0)?));
            }
            got => panic!("unexpected polling result {got:?}"),
        }
        let got = poller.until_done().await?;
        assert_eq!(got, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_metadata_is_dropped() -> Result<()> {
        let mut channel = MockChannel::new();
        channel.expect_unary().times(1).returning(|_, _, _, _| {
            Ok(encode(lro_pb::Operation {
                name: "operations/o".into(),
                metadata: Some(pack("google.cloud.aiplatform.v1.Unknown", ())),
                ..Default::default()
            }))
        });
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let operation = client
            .get_operation()
            .with_request(longrunning::model::GetOperationRequest::new().set_name("operations/o"))
            .send()
            .await?;
        assert_eq!(operation.name, "operations/o");
        assert!(operation.metadata.is_none(), "{operation:?}");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_response_type() -> Result<()> {
        let mut channel = MockChannel::new();
        channel.expect_unary().times(1).returning(|_, _, _, _| {
            Ok(encode(lro_pb::Operation {
                name: "operations/o".into(),
                done: true,
                result: Some(lro_pb::operation::Result::Response(pack(
                    "google.cloud.aiplatform.v1.Unknown",
                    (),
                ))),
                ..Default::default()
            }))
        });
        let client = JobService::builder()
            .with_credentials(test_credentials())
            .with_channel(channel)
            .build()
            .await?;
        let err = client
            .get_operation()
            .with_request(longrunning::model::GetOperationRequest::new().set_name("operations/o"))
            .send()
            .await
            .expect_err("the response type is unknown");
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }
}
