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

//! Exercises the request router, the pagers and the pollers with a mocked
//! stub.

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use lro::{Poller, PollingResult};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use vertex_jobs_v1::client::JobService;
    use vertex_jobs_v1::model;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        JobService {}
        impl vertex_jobs_v1::stub::JobService for JobService {
            async fn get_custom_job(&self, req: model::GetCustomJobRequest, _options: RequestOptions) -> gax::Result<Response<model::CustomJob>>;
            async fn list_custom_jobs(&self, req: model::ListCustomJobsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListCustomJobsResponse>>;
            async fn delete_custom_job(&self, req: model::DeleteCustomJobRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
            async fn list_model_deployment_monitoring_jobs(&self, req: model::ListModelDeploymentMonitoringJobsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListModelDeploymentMonitoringJobsResponse>>;
            async fn update_model_deployment_monitoring_job(&self, req: model::UpdateModelDeploymentMonitoringJobRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
            async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
        }
    }

    const PARENT: &str = "projects/p/locations/l";
    const JOB: &str = "projects/p/locations/l/customJobs/j";
    const ARGUMENT_ERROR: &str =
        "If the `request` argument is set, then none of the individual field arguments should be set.";

    fn job(id: &str) -> model::CustomJob {
        model::CustomJob::new().set_name(format!("{PARENT}/customJobs/{id}"))
    }

    fn page(ids: &[&str], token: &str) -> model::ListCustomJobsResponse {
        model::ListCustomJobsResponse::new()
            .set_custom_jobs(ids.iter().map(|id| job(id)))
            .set_next_page_token(token)
    }

    fn four_pages() -> (MockJobService, Arc<Mutex<Vec<String>>>) {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let captured = tokens.clone();
        let mut mock = MockJobService::new();
        mock.expect_list_custom_jobs()
            .times(4)
            .withf(|r, _| r.parent == PARENT && r.filter == "state=JOB_STATE_RUNNING")
            .returning(move |r, _| {
                captured
                    .lock()
                    .expect("never poisoned")
                    .push(r.page_token.clone());
                let response = match r.page_token.as_str() {
                    "" => page(&["a", "b", "c"], "abc"),
                    "abc" => page(&[], "def"),
                    "def" => page(&["d"], "ghi"),
                    "ghi" => page(&["e", "f"], ""),
                    t => return Err(gax::error::Error::argument(format!("unexpected token {t}"))),
                };
                Ok(Response::from(response))
            });
        (mock, tokens)
    }

    #[tokio::test]
    async fn pages() -> Result<()> {
        let (mock, tokens) = four_pages();
        let client = JobService::from_stub(mock);
        let mut pages = client
            .list_custom_jobs()
            .with_request(
                model::ListCustomJobsRequest::new()
                    .set_parent(PARENT)
                    .set_filter("state=JOB_STATE_RUNNING"),
            )
            .by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            sizes.push(page?.custom_jobs.len());
        }
        assert_eq!(sizes, vec![3, 0, 1, 2]);
        assert_eq!(
            *tokens.lock().expect("never poisoned"),
            vec!["", "abc", "def", "ghi"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn items() -> Result<()> {
        let (mock, _) = four_pages();
        let client = JobService::from_stub(mock);
        let mut items = client
            .list_custom_jobs()
            .with_request(
                model::ListCustomJobsRequest::new()
                    .set_parent(PARENT)
                    .set_filter("state=JOB_STATE_RUNNING"),
            )
            .by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            names.push(item?.name);
        }
        let want = ["a", "b", "c", "d", "e", "f"]
            .map(|id| format!("{PARENT}/customJobs/{id}"))
            .to_vec();
        assert_eq!(names, want);
        Ok(())
    }

    #[tokio::test]
    async fn pages_as_stream() -> Result<()> {
        let (mock, _) = four_pages();
        let client = JobService::from_stub(mock);
        let pages = client
            .list_custom_jobs()
            .with_request(
                model::ListCustomJobsRequest::new()
                    .set_parent(PARENT)
                    .set_filter("state=JOB_STATE_RUNNING"),
            )
            .by_page()
            .into_stream()
            .try_collect::<Vec<_>>()
            .await?;
        let tokens = pages
            .iter()
            .map(|p| p.next_page_token.as_str())
            .collect::<Vec<_>>();
        assert_eq!(tokens, vec!["abc", "def", "ghi", ""]);
        Ok(())
    }

    #[tokio::test]
    async fn pages_start_at_request_token() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_list_custom_jobs()
            .times(1)
            .withf(|r, _| r.page_token == "ghi")
            .returning(|_, _| Ok(Response::from(page(&["e", "f"], ""))));
        let client = JobService::from_stub(mock);
        let mut pages = client
            .list_custom_jobs()
            .with_request(
                model::ListCustomJobsRequest::new()
                    .set_parent(PARENT)
                    .set_page_token("ghi"),
            )
            .by_page();
        let first = pages.next().await.transpose()?;
        assert_eq!(first.map(|p| p.custom_jobs.len()), Some(2));
        assert!(pages.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn pager_does_not_keep_client_alive() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_list_custom_jobs()
            .times(1)
            .returning(|_, _| Ok(Response::from(page(&["a"], "abc"))));
        let client = JobService::from_stub(mock);
        let mut pages = client.list_custom_jobs().set_parent(PARENT).by_page();
        assert!(pages.next().await.transpose()?.is_some());
        drop(client);
        let err = pages
            .next()
            .await
            .transpose()
            .expect_err("the client is gone");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn request_and_flattened() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_get_custom_job().never();
        mock.expect_list_custom_jobs().never();
        let client = JobService::from_stub(mock);

        let err = client
            .get_custom_job()
            .with_request(model::GetCustomJobRequest::new().set_name(JOB))
            .set_name(JOB)
            .send()
            .await
            .expect_err("a request and flattened fields are exclusive");
        assert!(err.is_argument(), "{err:?}");
        assert!(err.to_string().contains(ARGUMENT_ERROR), "{err}");

        // The order of the calls is irrelevant.
        let err = client
            .get_custom_job()
            .set_name(JOB)
            .with_request(model::GetCustomJobRequest::new())
            .send()
            .await
            .expect_err("a request and flattened fields are exclusive");
        assert!(err.is_argument(), "{err:?}");

        let mut pages = client
            .list_custom_jobs()
            .with_request(model::ListCustomJobsRequest::new())
            .set_parent(PARENT)
            .by_page();
        let err = pages
            .next()
            .await
            .transpose()
            .expect_err("a request and flattened fields are exclusive");
        assert!(err.is_argument(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn by_page_defers_argument_error() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_list_model_deployment_monitoring_jobs().never();
        let client = JobService::from_stub(mock);

        // Creating the pager does not validate the arguments.
        let mut pages = client
            .list_model_deployment_monitoring_jobs()
            .set_parent(PARENT)
            .with_request(
                model::ListModelDeploymentMonitoringJobsRequest::new().set_parent(PARENT),
            )
            .by_page();
        assert!(pages.next_page_token().is_none());

        let err = pages
            .next()
            .await
            .transpose()
            .expect_err("a request and flattened fields are exclusive");
        assert!(err.is_argument(), "{err:?}");
        assert!(err.to_string().contains(ARGUMENT_ERROR), "{err}");
        assert!(pages.next().await.is_none());

        let mut items = client
            .list_model_deployment_monitoring_jobs()
            .with_request(model::ListModelDeploymentMonitoringJobsRequest::new())
            .set_parent(PARENT)
            .by_item();
        let err = items
            .next()
            .await
            .transpose()
            .expect_err("a request and flattened fields are exclusive");
        assert!(err.is_argument(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn nested_update_fields_and_request() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_update_model_deployment_monitoring_job().never();
        let client = JobService::from_stub(mock);

        let err = client
            .update_model_deployment_monitoring_job()
            .with_request(model::UpdateModelDeploymentMonitoringJobRequest::new())
            .set_model_deployment_monitoring_job(
                model::ModelDeploymentMonitoringJob::new().set_display_name("renamed"),
            )
            .send()
            .await
            .expect_err("a request and flattened fields are exclusive");
        assert!(err.is_argument(), "{err:?}");
        assert!(err.to_string().contains(ARGUMENT_ERROR), "{err}");

        let err = client
            .update_model_deployment_monitoring_job()
            .set_update_mask(wkt::FieldMask::default().set_paths(["display_name"]))
            .with_request(model::UpdateModelDeploymentMonitoringJobRequest::new())
            .send()
            .await
            .expect_err("a request and flattened fields are exclusive");
        assert!(err.is_argument(), "{err:?}");

        let mut poller = client
            .update_model_deployment_monitoring_job()
            .with_request(model::UpdateModelDeploymentMonitoringJobRequest::new())
            .set_update_mask(wkt::FieldMask::default().set_paths(["display_name"]))
            .poller();
        match poller.poll().await {
            Some(PollingResult::Completed(Err(e))) => assert!(e.is_argument(), "{e:?}"),
            r => panic!("unexpected polling result {r:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn nested_update_fields() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_update_model_deployment_monitoring_job()
            .times(1)
            .withf(|r, _| {
                r.model_deployment_monitoring_job
                    .as_ref()
                    .is_some_and(|j| j.display_name == "renamed")
                    && r.update_mask
                        .as_ref()
                        .is_some_and(|m| m.paths == ["display_name"])
            })
            .returning(|_, _| Ok(Response::from(pending("operations/update"))));
        let client = JobService::from_stub(mock);
        let op = client
            .update_model_deployment_monitoring_job()
            .set_model_deployment_monitoring_job(
                model::ModelDeploymentMonitoringJob::new().set_display_name("renamed"),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["display_name"]))
            .send()
            .await?;
        assert_eq!(op.name, "operations/update");
        Ok(())
    }

    #[tokio::test]
    async fn no_request_no_fields() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_get_custom_job()
            .times(1)
            .withf(|r, _| r == &model::GetCustomJobRequest::default())
            .returning(|_, _| Ok(Response::from(model::CustomJob::new())));
        let client = JobService::from_stub(mock);
        let job = client.get_custom_job().send().await?;
        assert_eq!(job, model::CustomJob::default());
        Ok(())
    }

    #[tokio::test]
    async fn flattened_fields() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_get_custom_job()
            .times(1)
            .withf(|r, _| r.name == JOB)
            .returning(|r, _| Ok(Response::from(model::CustomJob::new().set_name(r.name))));
        let client = JobService::from_stub(mock);
        let job = client.get_custom_job().set_name(JOB).send().await?;
        assert_eq!(job.name, JOB);
        Ok(())
    }

    fn pending(name: &str) -> longrunning::model::Operation {
        longrunning::model::Operation::new().set_name(name)
    }

    #[tokio::test]
    async fn poller_first_poll() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_delete_custom_job()
            .times(1)
            .withf(|r, _| r.name == JOB)
            .returning(|_, _| Ok(Response::from(pending("operations/spam"))));
        mock.expect_get_operation().never();
        let client = JobService::from_stub(mock);

        let mut poller = client.delete_custom_job().set_name(JOB).poller();
        assert_eq!(poller.operation_name(), None);
        let got = poller.poll().await;
        assert!(
            matches!(got, Some(PollingResult::InProgress(None))),
            "{got:?}"
        );
        assert_eq!(poller.operation_name(), Some("operations/spam"));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn poller_until_done() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_delete_custom_job()
            .times(1)
            .returning(|_, _| Ok(Response::from(pending("operations/spam"))));
        mock.expect_get_operation()
            .times(1)
            .withf(|r, _| r.name == "operations/spam")
            .returning(|r, _| {
                let response = wkt::Any::from_msg(&wkt::Empty::default())
                    .map_err(gax::error::Error::deser)?;
                Ok(Response::from(
                    longrunning::model::Operation::new()
                        .set_name(r.name)
                        .set_done(true)
                        .set_response(response),
                ))
            });
        let client = JobService::from_stub(mock);

        let got = client
            .delete_custom_job()
            .set_name(JOB)
            .poller()
            .until_done()
            .await?;
        assert_eq!(got, wkt::Empty::default());
        Ok(())
    }

    const MONITORING_JOB: &str = "projects/p/locations/l/modelDeploymentMonitoringJobs/m";

    fn update_metadata(
        seconds: i64,
    ) -> Result<model::UpdateModelDeploymentMonitoringJobOperationMetadata> {
        let generic = model::GenericOperationMetadata::new()
            .set_create_time(wkt::Timestamp::new(seconds, 0)?)
            .set_update_time(wkt::Timestamp::new(seconds + 60, 0)?);
        Ok(model::UpdateModelDeploymentMonitoringJobOperationMetadata::new()
            .set_generic_metadata(generic))
    }

    #[tokio::test(start_paused = true)]
    async fn update_poller_typed_result() -> Result<()> {
        let metadata = wkt::Any::from_msg(&update_metadata(1_700_000_000)?)?;
        assert_eq!(
            metadata.type_url(),
            Some("type.googleapis.com/google.cloud.aiplatform.v1.UpdateModelDeploymentMonitoringJobOperationMetadata")
        );
        let done_metadata = wkt::Any::from_msg(&update_metadata(1_700_000_600)?)?;
        let job = model::ModelDeploymentMonitoringJob::new()
            .set_name(MONITORING_JOB)
            .set_display_name("renamed")
            .set_state(model::JobState::Running)
            .set_schedule_state(
                model::model_deployment_monitoring_job::MonitoringScheduleState::Pending,
            );
        let response = wkt::Any::from_msg(&job)?;
        assert_eq!(
            response.type_url(),
            Some("type.googleapis.com/google.cloud.aiplatform.v1.ModelDeploymentMonitoringJob")
        );

        let mut mock = MockJobService::new();
        mock.expect_update_model_deployment_monitoring_job()
            .times(1)
            .returning(move |_, _| {
                Ok(Response::from(
                    pending("operations/update").set_metadata(metadata.clone()),
                ))
            });
        mock.expect_get_operation()
            .times(1)
            .withf(|r, _| r.name == "operations/update")
            .returning(move |r, _| {
                Ok(Response::from(
                    longrunning::model::Operation::new()
                        .set_name(r.name)
                        .set_metadata(done_metadata.clone())
                        .set_done(true)
                        .set_response(response.clone()),
                ))
            });
        let client = JobService::from_stub(mock);

        let mut poller = client
            .update_model_deployment_monitoring_job()
            .set_model_deployment_monitoring_job(
                model::ModelDeploymentMonitoringJob::new().set_name(MONITORING_JOB),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["display_name"]))
            .poller();
        match poller.poll().await {
            Some(PollingResult::InProgress(Some(m))) => {
                assert_eq!(m, update_metadata(1_700_000_000)?);
                let created = m
                    .generic_metadata
                    .as_ref()
                    .and_then(|g| g.create_time.as_ref())
                    .map(|t| t.seconds());
                assert_eq!(created, Some(1_700_000_000));
            }
            r => panic!("unexpected polling result {r:?}"),
        }

        let got = poller.until_done().await?;
        assert_eq!(got, job);
        Ok(())
    }

    #[tokio::test]
    async fn poller_start_error() -> Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_delete_custom_job().never();
        let client = JobService::from_stub(mock);
        let mut poller = client
            .delete_custom_job()
            .with_request(model::DeleteCustomJobRequest::new().set_name(JOB))
            .set_name(JOB)
            .poller();
        match poller.poll().await {
            Some(PollingResult::Completed(Err(e))) => assert!(e.is_argument(), "{e:?}"),
            r => panic!("unexpected polling result {r:?}"),
        }
        assert!(poller.poll().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn unimplemented_methods() -> Result<()> {
        let client = JobService::from_stub(MockJobService::new());
        assert!(client.transport().is_none());
        // Closing a client without a transport is a no-op.
        client.close().await;
        let err = client
            .cancel_custom_job()
            .set_name(JOB)
            .send()
            .await
            .expect_err("the mock does not implement this method");
        assert!(format!("{err:?}").contains("CancelCustomJob"), "{err:?}");
        Ok(())
    }
}
