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

pub mod job_service {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [JobService][crate::client::JobService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use vertex_jobs_v1::*;
    /// # use builder::job_service::ClientBuilder;
    /// # use client::JobService;
    /// let builder : ClientBuilder = JobService::builder();
    /// let client = builder
    ///     .with_endpoint("https://aiplatform.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::JobService;
        #[derive(Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = JobService;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::JobService] request builders.
    ///
    /// A request is either set as a whole, with `with_request()`, or through
    /// the setters of its flattened fields. Mixing both fails the call.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::JobService>,
        request: R,
        options: gax::options::RequestOptions,
        has_request: bool,
        has_flattened: bool,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
                has_request: false,
                has_flattened: false,
            }
        }

        fn set_request(&mut self, v: R) {
            self.request = v;
            self.has_request = true;
        }

        fn flattened(&mut self) -> &mut R {
            self.has_flattened = true;
            &mut self.request
        }

        fn check(&self) -> Result<()> {
            if self.has_request && self.has_flattened {
                return Err(gax::error::Error::argument(
                    "If the `request` argument is set, then none of the individual field arguments should be set.",
                ));
            }
            Ok(())
        }
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default + Clone + Send + 'static,
    {
        /// Creates a paginator that re-sends the request with each page token.
        ///
        /// The paginator holds a weak reference to the stub, fetching a page
        /// after the client is dropped fails.
        fn paginator<T, F, Fut>(
            self,
            seed: std::string::String,
            set_token: fn(&mut R, std::string::String),
            call: F,
        ) -> gax::paginator::Paginator<T, gax::error::Error>
        where
            F: Fn(Arc<dyn super::super::stub::dynamic::JobService>, R, gax::options::RequestOptions) -> Fut
                + Send
                + 'static,
            Fut: std::future::Future<Output = Result<T>> + Send + 'static,
        {
            let mut error = self.check().err();
            let stub = Arc::downgrade(&self.stub);
            let (request, options) = (self.request, self.options);
            let execute = move |token: std::string::String| {
                let pending = match (error.take(), stub.upgrade()) {
                    (Some(e), _) => Err(e),
                    (None, None) => Err(client_dropped()),
                    (None, Some(stub)) => {
                        let mut request = request.clone();
                        set_token(&mut request, token);
                        Ok(call(stub, request, options.clone()))
                    }
                };
                async move { pending?.await }
            };
            gax::paginator::internal::new_paginator(seed, execute)
        }
    }

    fn client_dropped() -> gax::error::Error {
        gax::error::Error::transport(
            http::HeaderMap::new(),
            "the client was dropped before the last page was fetched",
        )
    }

    /// The request builder for [JobService::create_custom_job][crate::client::JobService::create_custom_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateCustomJob(RequestBuilder<crate::model::CreateCustomJobRequest>);

    impl CreateCustomJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateCustomJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CustomJob> {
            self.0.check()?;
            (*self.0.stub)
                .create_custom_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateCustomJobRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }

        /// Sets the value of [custom_job][crate::model::CreateCustomJobRequest::custom_job].
        pub fn set_custom_job<T: Into<crate::model::CustomJob>>(mut self, v: T) -> Self {
            self.0.flattened().custom_job = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateCustomJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_custom_job][crate::client::JobService::get_custom_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetCustomJob(RequestBuilder<crate::model::GetCustomJobRequest>);

    impl GetCustomJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCustomJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CustomJob> {
            self.0.check()?;
            (*self.0.stub)
                .get_custom_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetCustomJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCustomJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_custom_jobs][crate::client::JobService::list_custom_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListCustomJobs(RequestBuilder<crate::model::ListCustomJobsRequest>);

    impl ListCustomJobs {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListCustomJobsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListCustomJobsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_custom_jobs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListCustomJobsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_custom_jobs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListCustomJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListCustomJobsRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListCustomJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::delete_custom_job][crate::client::JobService::delete_custom_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteCustomJob(RequestBuilder<crate::model::DeleteCustomJobRequest>);

    impl DeleteCustomJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteCustomJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [delete_custom_job][crate::client::JobService::delete_custom_job].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .delete_custom_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_custom_job`.
        pub fn poller(self) -> impl lro::Poller<wkt::Empty, crate::model::DeleteOperationMetadata> {
            type Operation = lro::internal::Operation<wkt::Empty, crate::model::DeleteOperationMetadata>;
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

            let stub = self.0.stub.clone();
            let mut options = self.0.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            let query = move |name: std::string::String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    let op = GetOperation::new(stub)
                        .with_request(longrunning::model::GetOperationRequest::new().set_name(name))
                        .with_options(options)
                        .send()
                        .await?;
                    Ok(Operation::new(op))
                }
            };

            let start = move || async {
                let op = self.send().await?;
                Ok(Operation::new(op))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [name][crate::model::DeleteCustomJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteCustomJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::cancel_custom_job][crate::client::JobService::cancel_custom_job] calls.
    #[derive(Clone, Debug)]
    pub struct CancelCustomJob(RequestBuilder<crate::model::CancelCustomJobRequest>);

    impl CancelCustomJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelCustomJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .cancel_custom_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::CancelCustomJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelCustomJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::create_data_labeling_job][crate::client::JobService::create_data_labeling_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateDataLabelingJob(RequestBuilder<crate::model::CreateDataLabelingJobRequest>);

    impl CreateDataLabelingJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDataLabelingJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DataLabelingJob> {
            self.0.check()?;
            (*self.0.stub)
                .create_data_labeling_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateDataLabelingJobRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }

        /// Sets the value of [data_labeling_job][crate::model::CreateDataLabelingJobRequest::data_labeling_job].
        pub fn set_data_labeling_job<T: Into<crate::model::DataLabelingJob>>(mut self, v: T) -> Self {
            self.0.flattened().data_labeling_job = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDataLabelingJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_data_labeling_job][crate::client::JobService::get_data_labeling_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetDataLabelingJob(RequestBuilder<crate::model::GetDataLabelingJobRequest>);

    impl GetDataLabelingJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDataLabelingJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DataLabelingJob> {
            self.0.check()?;
            (*self.0.stub)
                .get_data_labeling_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetDataLabelingJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDataLabelingJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_data_labeling_jobs][crate::client::JobService::list_data_labeling_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListDataLabelingJobs(RequestBuilder<crate::model::ListDataLabelingJobsRequest>);

    impl ListDataLabelingJobs {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDataLabelingJobsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDataLabelingJobsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_data_labeling_jobs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListDataLabelingJobsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_data_labeling_jobs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListDataLabelingJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListDataLabelingJobsRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDataLabelingJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::delete_data_labeling_job][crate::client::JobService::delete_data_labeling_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteDataLabelingJob(RequestBuilder<crate::model::DeleteDataLabelingJobRequest>);

    impl DeleteDataLabelingJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDataLabelingJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [delete_data_labeling_job][crate::client::JobService::delete_data_labeling_job].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .delete_data_labeling_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_data_labeling_job`.
        pub fn poller(self) -> impl lro::Poller<wkt::Empty, crate::model::DeleteOperationMetadata> {
            type Operation = lro::internal::Operation<wkt::Empty, crate::model::DeleteOperationMetadata>;
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

            let stub = self.0.stub.clone();
            let mut options = self.0.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            let query = move |name: std::string::String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    let op = GetOperation::new(stub)
                        .with_request(longrunning::model::GetOperationRequest::new().set_name(name))
                        .with_options(options)
                        .send()
                        .await?;
                    Ok(Operation::new(op))
                }
            };

            let start = move || async {
                let op = self.send().await?;
                Ok(Operation::new(op))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [name][crate::model::DeleteDataLabelingJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDataLabelingJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::cancel_data_labeling_job][crate::client::JobService::cancel_data_labeling_job] calls.
    #[derive(Clone, Debug)]
    pub struct CancelDataLabelingJob(RequestBuilder<crate::model::CancelDataLabelingJobRequest>);

    impl CancelDataLabelingJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelDataLabelingJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .cancel_data_labeling_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::CancelDataLabelingJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelDataLabelingJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::create_hyperparameter_tuning_job][crate::client::JobService::create_hyperparameter_tuning_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateHyperparameterTuningJob(RequestBuilder<crate::model::CreateHyperparameterTuningJobRequest>);

    impl CreateHyperparameterTuningJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateHyperparameterTuningJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::HyperparameterTuningJob> {
            self.0.check()?;
            (*self.0.stub)
                .create_hyperparameter_tuning_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateHyperparameterTuningJobRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }

        /// Sets the value of [hyperparameter_tuning_job][crate::model::CreateHyperparameterTuningJobRequest::hyperparameter_tuning_job].
        pub fn set_hyperparameter_tuning_job<T: Into<crate::model::HyperparameterTuningJob>>(mut self, v: T) -> Self {
            self.0.flattened().hyperparameter_tuning_job = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateHyperparameterTuningJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_hyperparameter_tuning_job][crate::client::JobService::get_hyperparameter_tuning_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetHyperparameterTuningJob(RequestBuilder<crate::model::GetHyperparameterTuningJobRequest>);

    impl GetHyperparameterTuningJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetHyperparameterTuningJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::HyperparameterTuningJob> {
            self.0.check()?;
            (*self.0.stub)
                .get_hyperparameter_tuning_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetHyperparameterTuningJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetHyperparameterTuningJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_hyperparameter_tuning_jobs][crate::client::JobService::list_hyperparameter_tuning_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListHyperparameterTuningJobs(RequestBuilder<crate::model::ListHyperparameterTuningJobsRequest>);

    impl ListHyperparameterTuningJobs {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListHyperparameterTuningJobsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListHyperparameterTuningJobsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_hyperparameter_tuning_jobs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListHyperparameterTuningJobsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_hyperparameter_tuning_jobs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListHyperparameterTuningJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListHyperparameterTuningJobsRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListHyperparameterTuningJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::delete_hyperparameter_tuning_job][crate::client::JobService::delete_hyperparameter_tuning_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteHyperparameterTuningJob(RequestBuilder<crate::model::DeleteHyperparameterTuningJobRequest>);

    impl DeleteHyperparameterTuningJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteHyperparameterTuningJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [delete_hyperparameter_tuning_job][crate::client::JobService::delete_hyperparameter_tuning_job].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .delete_hyperparameter_tuning_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_hyperparameter_tuning_job`.
        pub fn poller(self) -> impl lro::Poller<wkt::Empty, crate::model::DeleteOperationMetadata> {
            type Operation = lro::internal::Operation<wkt::Empty, crate::model::DeleteOperationMetadata>;
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

            let stub = self.0.stub.clone();
            let mut options = self.0.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            let query = move |name: std::string::String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    let op = GetOperation::new(stub)
                        .with_request(longrunning::model::GetOperationRequest::new().set_name(name))
                        .with_options(options)
                        .send()
                        .await?;
                    Ok(Operation::new(op))
                }
            };

            let start = move || async {
                let op = self.send().await?;
                Ok(Operation::new(op))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [name][crate::model::DeleteHyperparameterTuningJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteHyperparameterTuningJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::cancel_hyperparameter_tuning_job][crate::client::JobService::cancel_hyperparameter_tuning_job] calls.
    #[derive(Clone, Debug)]
    pub struct CancelHyperparameterTuningJob(RequestBuilder<crate::model::CancelHyperparameterTuningJobRequest>);

    impl CancelHyperparameterTuningJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelHyperparameterTuningJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .cancel_hyperparameter_tuning_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::CancelHyperparameterTuningJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelHyperparameterTuningJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::create_nas_job][crate::client::JobService::create_nas_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateNasJob(RequestBuilder<crate::model::CreateNasJobRequest>);

    impl CreateNasJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateNasJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::NasJob> {
            self.0.check()?;
            (*self.0.stub)
                .create_nas_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateNasJobRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }

        /// Sets the value of [nas_job][crate::model::CreateNasJobRequest::nas_job].
        pub fn set_nas_job<T: Into<crate::model::NasJob>>(mut self, v: T) -> Self {
            self.0.flattened().nas_job = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateNasJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_nas_job][crate::client::JobService::get_nas_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetNasJob(RequestBuilder<crate::model::GetNasJobRequest>);

    impl GetNasJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetNasJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::NasJob> {
            self.0.check()?;
            (*self.0.stub)
                .get_nas_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetNasJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetNasJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_nas_jobs][crate::client::JobService::list_nas_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListNasJobs(RequestBuilder<crate::model::ListNasJobsRequest>);

    impl ListNasJobs {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListNasJobsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListNasJobsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_nas_jobs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListNasJobsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_nas_jobs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListNasJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListNasJobsRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListNasJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::delete_nas_job][crate::client::JobService::delete_nas_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteNasJob(RequestBuilder<crate::model::DeleteNasJobRequest>);

    impl DeleteNasJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteNasJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [delete_nas_job][crate::client::JobService::delete_nas_job].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .delete_nas_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_nas_job`.
        pub fn poller(self) -> impl lro::Poller<wkt::Empty, crate::model::DeleteOperationMetadata> {
            type Operation = lro::internal::Operation<wkt::Empty, crate::model::DeleteOperationMetadata>;
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

            let stub = self.0.stub.clone();
            let mut options = self.0.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            let query = move |name: std::string::String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    let op = GetOperation::new(stub)
                        .with_request(longrunning::model::GetOperationRequest::new().set_name(name))
                        .with_options(options)
                        .send()
                        .await?;
                    Ok(Operation::new(op))
                }
            };

            let start = move || async {
                let op = self.send().await?;
                Ok(Operation::new(op))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [name][crate::model::DeleteNasJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteNasJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::cancel_nas_job][crate::client::JobService::cancel_nas_job] calls.
    #[derive(Clone, Debug)]
    pub struct CancelNasJob(RequestBuilder<crate::model::CancelNasJobRequest>);

    impl CancelNasJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelNasJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .cancel_nas_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::CancelNasJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelNasJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_nas_trial_detail][crate::client::JobService::get_nas_trial_detail] calls.
    #[derive(Clone, Debug)]
    pub struct GetNasTrialDetail(RequestBuilder<crate::model::GetNasTrialDetailRequest>);

    impl GetNasTrialDetail {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetNasTrialDetailRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::NasTrialDetail> {
            self.0.check()?;
            (*self.0.stub)
                .get_nas_trial_detail(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetNasTrialDetailRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetNasTrialDetail {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_nas_trial_details][crate::client::JobService::list_nas_trial_details] calls.
    #[derive(Clone, Debug)]
    pub struct ListNasTrialDetails(RequestBuilder<crate::model::ListNasTrialDetailsRequest>);

    impl ListNasTrialDetails {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListNasTrialDetailsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListNasTrialDetailsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_nas_trial_details(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListNasTrialDetailsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_nas_trial_details(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListNasTrialDetailsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListNasTrialDetailsRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListNasTrialDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::create_batch_prediction_job][crate::client::JobService::create_batch_prediction_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateBatchPredictionJob(RequestBuilder<crate::model::CreateBatchPredictionJobRequest>);

    impl CreateBatchPredictionJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateBatchPredictionJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchPredictionJob> {
            self.0.check()?;
            (*self.0.stub)
                .create_batch_prediction_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateBatchPredictionJobRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }

        /// Sets the value of [batch_prediction_job][crate::model::CreateBatchPredictionJobRequest::batch_prediction_job].
        pub fn set_batch_prediction_job<T: Into<crate::model::BatchPredictionJob>>(mut self, v: T) -> Self {
            self.0.flattened().batch_prediction_job = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateBatchPredictionJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_batch_prediction_job][crate::client::JobService::get_batch_prediction_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetBatchPredictionJob(RequestBuilder<crate::model::GetBatchPredictionJobRequest>);

    impl GetBatchPredictionJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBatchPredictionJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchPredictionJob> {
            self.0.check()?;
            (*self.0.stub)
                .get_batch_prediction_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetBatchPredictionJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBatchPredictionJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_batch_prediction_jobs][crate::client::JobService::list_batch_prediction_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListBatchPredictionJobs(RequestBuilder<crate::model::ListBatchPredictionJobsRequest>);

    impl ListBatchPredictionJobs {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBatchPredictionJobsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListBatchPredictionJobsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_batch_prediction_jobs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListBatchPredictionJobsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_batch_prediction_jobs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListBatchPredictionJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListBatchPredictionJobsRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBatchPredictionJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::delete_batch_prediction_job][crate::client::JobService::delete_batch_prediction_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteBatchPredictionJob(RequestBuilder<crate::model::DeleteBatchPredictionJobRequest>);

    impl DeleteBatchPredictionJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBatchPredictionJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [delete_batch_prediction_job][crate::client::JobService::delete_batch_prediction_job].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .delete_batch_prediction_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_batch_prediction_job`.
        pub fn poller(self) -> impl lro::Poller<wkt::Empty, crate::model::DeleteOperationMetadata> {
            type Operation = lro::internal::Operation<wkt::Empty, crate::model::DeleteOperationMetadata>;
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

            let stub = self.0.stub.clone();
            let mut options = self.0.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            let query = move |name: std::string::String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    let op = GetOperation::new(stub)
                        .with_request(longrunning::model::GetOperationRequest::new().set_name(name))
                        .with_options(options)
                        .send()
                        .await?;
                    Ok(Operation::new(op))
                }
            };

            let start = move || async {
                let op = self.send().await?;
                Ok(Operation::new(op))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [name][crate::model::DeleteBatchPredictionJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBatchPredictionJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::cancel_batch_prediction_job][crate::client::JobService::cancel_batch_prediction_job] calls.
    #[derive(Clone, Debug)]
    pub struct CancelBatchPredictionJob(RequestBuilder<crate::model::CancelBatchPredictionJobRequest>);

    impl CancelBatchPredictionJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelBatchPredictionJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .cancel_batch_prediction_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::CancelBatchPredictionJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelBatchPredictionJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::create_model_deployment_monitoring_job][crate::client::JobService::create_model_deployment_monitoring_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateModelDeploymentMonitoringJob(RequestBuilder<crate::model::CreateModelDeploymentMonitoringJobRequest>);

    impl CreateModelDeploymentMonitoringJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateModelDeploymentMonitoringJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ModelDeploymentMonitoringJob> {
            self.0.check()?;
            (*self.0.stub)
                .create_model_deployment_monitoring_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateModelDeploymentMonitoringJobRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }

        /// Sets the value of [model_deployment_monitoring_job][crate::model::CreateModelDeploymentMonitoringJobRequest::model_deployment_monitoring_job].
        pub fn set_model_deployment_monitoring_job<T: Into<crate::model::ModelDeploymentMonitoringJob>>(mut self, v: T) -> Self {
            self.0.flattened().model_deployment_monitoring_job = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateModelDeploymentMonitoringJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::search_model_deployment_monitoring_stats_anomalies][crate::client::JobService::search_model_deployment_monitoring_stats_anomalies] calls.
    #[derive(Clone, Debug)]
    pub struct SearchModelDeploymentMonitoringStatsAnomalies(RequestBuilder<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest>);

    impl SearchModelDeploymentMonitoringStatsAnomalies {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse> {
            self.0.check()?;
            (*self.0.stub)
                .search_model_deployment_monitoring_stats_anomalies(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.search_model_deployment_monitoring_stats_anomalies(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::SearchModelDeploymentMonitoringStatsAnomaliesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [model_deployment_monitoring_job][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::model_deployment_monitoring_job].
        pub fn set_model_deployment_monitoring_job<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().model_deployment_monitoring_job = v.into();
            self
        }

        /// Sets the value of [deployed_model_id][crate::model::SearchModelDeploymentMonitoringStatsAnomaliesRequest::deployed_model_id].
        pub fn set_deployed_model_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().deployed_model_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SearchModelDeploymentMonitoringStatsAnomalies {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_model_deployment_monitoring_job][crate::client::JobService::get_model_deployment_monitoring_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetModelDeploymentMonitoringJob(RequestBuilder<crate::model::GetModelDeploymentMonitoringJobRequest>);

    impl GetModelDeploymentMonitoringJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetModelDeploymentMonitoringJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ModelDeploymentMonitoringJob> {
            self.0.check()?;
            (*self.0.stub)
                .get_model_deployment_monitoring_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetModelDeploymentMonitoringJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetModelDeploymentMonitoringJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_model_deployment_monitoring_jobs][crate::client::JobService::list_model_deployment_monitoring_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListModelDeploymentMonitoringJobs(RequestBuilder<crate::model::ListModelDeploymentMonitoringJobsRequest>);

    impl ListModelDeploymentMonitoringJobs {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListModelDeploymentMonitoringJobsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListModelDeploymentMonitoringJobsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_model_deployment_monitoring_jobs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListModelDeploymentMonitoringJobsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_model_deployment_monitoring_jobs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListModelDeploymentMonitoringJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListModelDeploymentMonitoringJobsRequest::parent].
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListModelDeploymentMonitoringJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::delete_model_deployment_monitoring_job][crate::client::JobService::delete_model_deployment_monitoring_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteModelDeploymentMonitoringJob(RequestBuilder<crate::model::DeleteModelDeploymentMonitoringJobRequest>);

    impl DeleteModelDeploymentMonitoringJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteModelDeploymentMonitoringJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [delete_model_deployment_monitoring_job][crate::client::JobService::delete_model_deployment_monitoring_job].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .delete_model_deployment_monitoring_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_model_deployment_monitoring_job`.
        pub fn poller(self) -> impl lro::Poller<wkt::Empty, crate::model::DeleteOperationMetadata> {
            type Operation = lro::internal::Operation<wkt::Empty, crate::model::DeleteOperationMetadata>;
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

            let stub = self.0.stub.clone();
            let mut options = self.0.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            let query = move |name: std::string::String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    let op = GetOperation::new(stub)
                        .with_request(longrunning::model::GetOperationRequest::new().set_name(name))
                        .with_options(options)
                        .send()
                        .await?;
                    Ok(Operation::new(op))
                }
            };

            let start = move || async {
                let op = self.send().await?;
                Ok(Operation::new(op))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [name][crate::model::DeleteModelDeploymentMonitoringJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteModelDeploymentMonitoringJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::update_model_deployment_monitoring_job][crate::client::JobService::update_model_deployment_monitoring_job] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateModelDeploymentMonitoringJob(RequestBuilder<crate::model::UpdateModelDeploymentMonitoringJobRequest>);

    impl UpdateModelDeploymentMonitoringJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateModelDeploymentMonitoringJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [update_model_deployment_monitoring_job][crate::client::JobService::update_model_deployment_monitoring_job].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .update_model_deployment_monitoring_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `update_model_deployment_monitoring_job`.
        pub fn poller(self) -> impl lro::Poller<crate::model::ModelDeploymentMonitoringJob, crate::model::UpdateModelDeploymentMonitoringJobOperationMetadata> {
            type Operation = lro::internal::Operation<crate::model::ModelDeploymentMonitoringJob, crate::model::UpdateModelDeploymentMonitoringJobOperationMetadata>;
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

            let stub = self.0.stub.clone();
            let mut options = self.0.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            let query = move |name: std::string::String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    let op = GetOperation::new(stub)
                        .with_request(longrunning::model::GetOperationRequest::new().set_name(name))
                        .with_options(options)
                        .send()
                        .await?;
                    Ok(Operation::new(op))
                }
            };

            let start = move || async {
                let op = self.send().await?;
                Ok(Operation::new(op))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [model_deployment_monitoring_job][crate::model::UpdateModelDeploymentMonitoringJobRequest::model_deployment_monitoring_job].
        pub fn set_model_deployment_monitoring_job<T: Into<crate::model::ModelDeploymentMonitoringJob>>(mut self, v: T) -> Self {
            self.0.flattened().model_deployment_monitoring_job = Some(v.into());
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateModelDeploymentMonitoringJobRequest::update_mask].
        pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
            self.0.flattened().update_mask = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateModelDeploymentMonitoringJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::pause_model_deployment_monitoring_job][crate::client::JobService::pause_model_deployment_monitoring_job] calls.
    #[derive(Clone, Debug)]
    pub struct PauseModelDeploymentMonitoringJob(RequestBuilder<crate::model::PauseModelDeploymentMonitoringJobRequest>);

    impl PauseModelDeploymentMonitoringJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PauseModelDeploymentMonitoringJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .pause_model_deployment_monitoring_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::PauseModelDeploymentMonitoringJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PauseModelDeploymentMonitoringJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::resume_model_deployment_monitoring_job][crate::client::JobService::resume_model_deployment_monitoring_job] calls.
    #[derive(Clone, Debug)]
    pub struct ResumeModelDeploymentMonitoringJob(RequestBuilder<crate::model::ResumeModelDeploymentMonitoringJobRequest>);

    impl ResumeModelDeploymentMonitoringJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ResumeModelDeploymentMonitoringJobRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .resume_model_deployment_monitoring_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::ResumeModelDeploymentMonitoringJobRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.flattened().name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ResumeModelDeploymentMonitoringJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_locations][crate::client::JobService::list_locations] calls.
    #[derive(Clone, Debug)]
    pub struct ListLocations(RequestBuilder<location::model::ListLocationsRequest>);

    impl ListLocations {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<location::model::ListLocationsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<location::model::ListLocationsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_locations(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<location::model::ListLocationsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_locations(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<location::model::ListLocationsResponse, gax::error::Error> {
            self.by_page().items()
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLocations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_location][crate::client::JobService::get_location] calls.
    #[derive(Clone, Debug)]
    pub struct GetLocation(RequestBuilder<location::model::GetLocationRequest>);

    impl GetLocation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<location::model::GetLocationRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<location::model::Location> {
            self.0.check()?;
            (*self.0.stub)
                .get_location(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLocation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::set_iam_policy][crate::client::JobService::set_iam_policy] calls.
    #[derive(Clone, Debug)]
    pub struct SetIamPolicy(RequestBuilder<iam_v1::model::SetIamPolicyRequest>);

    impl SetIamPolicy {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<iam_v1::model::SetIamPolicyRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<iam_v1::model::Policy> {
            self.0.check()?;
            (*self.0.stub)
                .set_iam_policy(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetIamPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_iam_policy][crate::client::JobService::get_iam_policy] calls.
    #[derive(Clone, Debug)]
    pub struct GetIamPolicy(RequestBuilder<iam_v1::model::GetIamPolicyRequest>);

    impl GetIamPolicy {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<iam_v1::model::GetIamPolicyRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<iam_v1::model::Policy> {
            self.0.check()?;
            (*self.0.stub)
                .get_iam_policy(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetIamPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::test_iam_permissions][crate::client::JobService::test_iam_permissions] calls.
    #[derive(Clone, Debug)]
    pub struct TestIamPermissions(RequestBuilder<iam_v1::model::TestIamPermissionsRequest>);

    impl TestIamPermissions {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<iam_v1::model::TestIamPermissionsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<iam_v1::model::TestIamPermissionsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .test_iam_permissions(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for TestIamPermissions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::list_operations][crate::client::JobService::list_operations] calls.
    #[derive(Clone, Debug)]
    pub struct ListOperations(RequestBuilder<longrunning::model::ListOperationsRequest>);

    impl ListOperations {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::ListOperationsRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::ListOperationsResponse> {
            self.0.check()?;
            (*self.0.stub)
                .list_operations(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<longrunning::model::ListOperationsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            self.0.paginator(
                token,
                |r, token| r.page_token = token,
                |stub, request, options| async move {
                    stub.list_operations(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                },
            )
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<longrunning::model::ListOperationsResponse, gax::error::Error> {
            self.by_page().items()
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOperations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::get_operation][crate::client::JobService::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<longrunning::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::delete_operation][crate::client::JobService::delete_operation] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteOperation(RequestBuilder<longrunning::model::DeleteOperationRequest>);

    impl DeleteOperation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::DeleteOperationRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .delete_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::cancel_operation][crate::client::JobService::cancel_operation] calls.
    #[derive(Clone, Debug)]
    pub struct CancelOperation(RequestBuilder<longrunning::model::CancelOperationRequest>);

    impl CancelOperation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::CancelOperationRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            self.0.check()?;
            (*self.0.stub)
                .cancel_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobService::wait_operation][crate::client::JobService::wait_operation] calls.
    #[derive(Clone, Debug)]
    pub struct WaitOperation(RequestBuilder<longrunning::model::WaitOperationRequest>);

    impl WaitOperation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::JobService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::WaitOperationRequest>>(mut self, v: V) -> Self {
            self.0.set_request(v.into());
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.check()?;
            (*self.0.stub)
                .wait_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for WaitOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
