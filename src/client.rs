use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{ApiConfig, ApiError, ApiResponse, Page, RequestOptions, Result};

/// HTTP client for an objects CRUD API.
///
/// One instance per logical session. All configuration is immutable after
/// construction; per-call overrides live in [`RequestOptions`].
#[derive(Clone)]
pub struct ObjectsClient {
    http: reqwest::Client,
    config: ApiConfig,
    default_headers: Vec<(String, String)>,
}

impl fmt::Debug for ObjectsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectsClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .field("api_version", &self.config.api_version)
            .finish()
    }
}

impl ObjectsClient {
    /// Creates a client for the given deployment settings.
    pub fn new(config: ApiConfig) -> Self {
        let default_headers = vec![
            ("Accept".to_owned(), "application/json".to_owned()),
            ("Content-Type".to_owned(), "application/json".to_owned()),
        ];
        Self {
            http: reqwest::Client::new(),
            config,
            default_headers,
        }
    }

    /// Creates a client from `OBJECTS_API_*` environment variables.
    ///
    /// See [`ApiConfig::from_env`] for the variables read.
    pub fn from_env() -> std::result::Result<Self, String> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    /// Deployment settings this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolves an endpoint path against the base URL and appends query pairs.
    ///
    /// Pairs are appended in insertion order; a repeated key yields repeated
    /// query-string entries, never an overwrite. A query already embedded in
    /// the endpoint path survives.
    pub fn build_url(&self, endpoint: &str, query: &[(String, String)]) -> Result<Url> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|err| ApiError::Url(format!("base url '{}': {err}", self.config.base_url)))?;
        let mut url = base
            .join(endpoint)
            .map_err(|err| ApiError::Url(format!("endpoint '{endpoint}': {err}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Dispatches one request and returns the raw response envelope.
    ///
    /// Emits a request log event before dispatch and a response event after
    /// receipt; a transport failure is logged and passed through unchanged.
    /// No retry happens at this layer.
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let url = self.build_url(endpoint, &options.query).map_err(|error| {
            tracing::error!(%error, endpoint, "request could not be built");
            error
        })?;
        let headers = self.merge_headers(&options).map_err(|error| {
            tracing::error!(%error, endpoint, "request could not be built");
            error
        })?;

        tracing::debug!(
            method = %method,
            url = %url,
            body = ?options.body,
            "dispatching request"
        );

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .headers(headers)
            .timeout(Duration::from_millis(self.config.timeout_ms));
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|error| {
            tracing::error!(%error, method = %method, url = %url, "transport failure");
            ApiError::Transport(error)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            tracing::error!(%error, method = %method, url = %url, "failed to read response body");
            ApiError::Transport(error)
        })?;

        let envelope = ApiResponse::new(status, body);
        tracing::debug!(
            status = status.as_u16(),
            status_text = envelope.status_text(),
            "response received"
        );
        Ok(envelope)
    }

    /// GET request.
    pub async fn get(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.execute(Method::GET, endpoint, options).await
    }

    /// POST request with a JSON body.
    pub async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.execute(Method::POST, endpoint, options.body(body)).await
    }

    /// PUT request with a JSON body.
    pub async fn put(
        &self,
        endpoint: &str,
        body: serde_json::Value,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.execute(Method::PUT, endpoint, options.body(body)).await
    }

    /// PATCH request with a JSON body.
    pub async fn patch(
        &self,
        endpoint: &str,
        body: serde_json::Value,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.execute(Method::PATCH, endpoint, options.body(body)).await
    }

    /// DELETE request.
    pub async fn delete(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.execute(Method::DELETE, endpoint, options).await
    }

    /// Fetches every page of a listing and returns the items flattened.
    ///
    /// Pages are requested sequentially starting at 1, each with the given
    /// pagination query plus `page=N`. The loop continues while the current
    /// page number is below the server-reported `totalPages`; that count is
    /// trusted as-is. Any page failing validation aborts the whole
    /// aggregation and the items gathered so far are discarded.
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        pagination: &[(&str, &str)],
        expected: StatusCode,
    ) -> Result<Vec<T>> {
        let mut results = Vec::new();
        let mut current_page: u64 = 1;

        loop {
            let options = RequestOptions::new()
                .query_pairs(pagination.iter().copied())
                .query("page", current_page);
            let response = self.get(endpoint, options).await?;
            let page: Page<T> = response.validate_as(expected)?;

            results.extend(page.items);
            if current_page >= page.total_pages {
                break;
            }
            current_page += 1;
        }

        Ok(results)
    }

    fn merge_headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        // Defaults first, caller second: HeaderMap::insert makes the caller
        // win on key collision without touching the defaults themselves.
        for (name, value) in self.default_headers.iter().chain(options.headers.iter()) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| ApiError::Header(format!("name '{name}': {err}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|err| ApiError::Header(format!("value for '{name}': {err}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}
