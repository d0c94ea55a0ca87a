//! Resource client over the CMS REST API.
//!
//! One [`ApiClient`] per call site, built from the configured endpoint and
//! the current [`Session`]. Every request carries `Accept: application/json`
//! and the bearer token when present; every response goes through the
//! session's status check (401 side effect) and the envelope adapter.

use contracts::domain::a001_company_info::CompanyInfo;
use contracts::domain::a008_news::News;
use contracts::domain::common::{RecordId, Resource, StatusTracked, StatusUpdate};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::{ensure_accepted, unwrap_document_text, unwrap_envelope_text};
use contracts::shared::filter::ListFilter;
use contracts::shared::media::ApiEndpoint;
use contracts::shared::payload::{MultipartPart, RequestBody};
use contracts::shared::session::Session;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use web_sys::{File, FormData};

use crate::shared::config::AppConfig;
use crate::system::auth::context::use_auth;

/// Client for the current component: configured endpoint, current session
pub fn use_api() -> ApiClient {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    ApiClient::new(config.endpoint(), use_auth().session())
}

/// Body of a create/update request as built in the browser
pub type BrowserBody = RequestBody<File>;

#[derive(Clone, Debug)]
pub struct ApiClient {
    endpoint: ApiEndpoint,
    session: Session,
}

impl ApiClient {
    pub fn new(endpoint: ApiEndpoint, session: Session) -> Self {
        Self { endpoint, session }
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Typed client for one resource collection
    pub fn resource<R: Resource>(&self) -> ResourceApi<R> {
        ResourceApi {
            client: self.clone(),
            _marker: PhantomData,
        }
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.session.authorization_header() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    async fn dispatch(&self, request: Request) -> Result<String, ApiError> {
        let method = request.method();
        let url = request.url();
        let response = request.send().await.map_err(|e| {
            log::warn!("{:?} {} failed: {}", method, url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if let Err(e) = self.session.check_status(status) {
            log::warn!("{:?} {} -> {}", method, url, status);
            return Err(e);
        }
        log::debug!("{:?} {} -> {}", method, url, status);

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .prepare(Request::get(&self.endpoint.url(path)))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let text = self.dispatch(request).await?;
        unwrap_envelope_text(&text)
    }

    /// Write a record; the echoed document is returned when there is one
    async fn send_body<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: BrowserBody,
    ) -> Result<Option<T>, ApiError> {
        let request = attach_body(self.prepare(builder), body)?;
        let text = self.dispatch(request).await?;
        unwrap_document_text(&text)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let request = self
            .prepare(builder)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let text = self.dispatch(request).await?;
        ensure_accepted(&text)
    }

    async fn send_json_empty<B: serde::Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = self
            .prepare(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let text = self.dispatch(request).await?;
        ensure_accepted(&text)
    }
}

/// JSON body as-is; multipart parts appended in order to a `FormData`
fn attach_body(builder: RequestBuilder, body: BrowserBody) -> Result<Request, ApiError> {
    match body {
        RequestBody::Json(value) => builder
            .json(&value)
            .map_err(|e| ApiError::Encode(e.to_string())),
        RequestBody::Multipart(parts) => {
            let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
            for part in parts {
                let appended = match part {
                    MultipartPart::Text { name, value } => form.append_with_str(&name, &value),
                    MultipartPart::File { name, file } => {
                        form.append_with_blob_and_filename(&name, &file, &file.name())
                    }
                };
                appended.map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
            }
            builder
                .body(form)
                .map_err(|e| ApiError::Encode(e.to_string()))
        }
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// CRUD over one collection (`/{collection}`)
#[derive(Clone, Debug)]
pub struct ResourceApi<R> {
    client: ApiClient,
    _marker: PhantomData<R>,
}

impl<R: Resource> ResourceApi<R> {
    fn collection_url(&self) -> String {
        self.client.endpoint.url(R::collection_name())
    }

    fn item_path(&self, id: &RecordId) -> String {
        format!("{}/{}", R::collection_name(), segment(&id.as_string()))
    }

    pub async fn get_all(&self, filter: &ListFilter) -> Result<Vec<R>, ApiError> {
        let mut path = R::collection_name().to_string();
        if !filter.is_empty() {
            let query =
                serde_qs::to_string(filter).map_err(|e| ApiError::Encode(e.to_string()))?;
            path = format!("{}?{}", path, query);
        }
        self.client.get(&path).await
    }

    pub async fn get_by_id(&self, id: &RecordId) -> Result<R, ApiError> {
        self.client.get(&self.item_path(id)).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<R, ApiError> {
        let path = format!("{}/slug/{}", R::collection_name(), segment(slug));
        self.client.get(&path).await
    }

    /// The created record when the server echoes it back
    pub async fn create(&self, body: BrowserBody) -> Result<Option<R>, ApiError> {
        let builder = Request::post(&self.collection_url());
        self.client.send_body(builder, body).await
    }

    pub async fn update(&self, id: &RecordId, body: BrowserBody) -> Result<Option<R>, ApiError> {
        let builder = Request::put(&self.client.endpoint.url(&self.item_path(id)));
        self.client.send_body(builder, body).await
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        let builder = Request::delete(&self.client.endpoint.url(&self.item_path(id)));
        self.client.send_empty(builder).await
    }
}

impl<R: StatusTracked> ResourceApi<R> {
    /// `PATCH {collection}/{id}/status`
    pub async fn update_status(&self, id: &RecordId, status: &str) -> Result<(), ApiError> {
        let url = self
            .client
            .endpoint
            .url(&format!("{}/status", self.item_path(id)));
        self.client
            .send_json_empty(Request::patch(&url), &StatusUpdate::new(status))
            .await
    }
}

impl ResourceApi<News> {
    /// `PATCH news/{id}/publish`
    pub async fn publish(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = self
            .client
            .endpoint
            .url(&format!("{}/publish", self.item_path(id)));
        self.client.send_empty(Request::patch(&url)).await
    }
}

impl ResourceApi<CompanyInfo> {
    /// The single current company profile (`GET company-info`)
    pub async fn get_current(&self) -> Result<Option<CompanyInfo>, ApiError> {
        self.client.get(CompanyInfo::collection_name()).await
    }
}
