//! Client for the Studium API.
//!
//! Every call issues exactly one request: no retries, no caching. Non-2xx
//! responses become [`ApiError::RequestFailure`] carrying the status and the
//! response text, so callers decide whether to surface or propagate them.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use common::api::{join_url, source_path, SOURCES_PATH};
use common::config::ClientConfig;
use common::model::source::Source;

mod error;

pub use error::ApiError;

/// Handle to the API, built once from the [`ClientConfig`] and passed to
/// components through their properties.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    /// Absolute URL for a path relative to the API base.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET`s `path` and decodes the JSON body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path)).send().await?;
        let response = ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// All sources, in the order the API returns them.
    pub async fn list_sources(&self) -> Result<Vec<Source>, ApiError> {
        self.get_json(SOURCES_PATH).await
    }

    pub async fn get_source(&self, id: &str) -> Result<Source, ApiError> {
        self.get_json(&source_path(id)).await
    }

    /// Posts the upload form as `multipart/form-data`. The response body of a
    /// successful upload is ignored.
    pub async fn upload_source(&self, form: FormData) -> Result<(), ApiError> {
        let response = Request::post(&self.url(SOURCES_PATH))
            .body(form)?
            .send()
            .await?;
        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::RequestFailure { status, body })
}
