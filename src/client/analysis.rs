//! reqwest-based client for the analysis endpoints.

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::dto::{
    AnalyzeBboxRequest, AnalyzeBboxResponse, RegionAnalysisRequest, RegionAnalysisResponse,
};
use crate::client::error::ClientError;

pub const ANALYZE_BBOX_PATH: &str = "/analyze-bbox/";
pub const ANALYZE_REGION_PATH: &str = "/api/analyze-wojewodztwo/";

/// HTTP client for the analysis backend.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Build a client with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(AnalysisClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a server-relative path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body; non-success statuses become `ClientError::Status`.
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response)
    }

    /// GET a server-relative or absolute URL with the status check applied.
    pub(crate) async fn get(&self, url_or_path: &str) -> Result<Response, ClientError> {
        let url = if url_or_path.starts_with("http://") || url_or_path.starts_with("https://") {
            url_or_path.to_string()
        } else {
            self.url(url_or_path)
        };
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response)
    }

    /// Decode a response body, keeping JSON-shape failures distinguishable
    /// from wire failures.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Run a bbox analysis. Returns the raw response; callers interpret the
    /// body's `error` field via [`AnalyzeBboxResponse::into_result`].
    pub async fn analyze_bbox(
        &self,
        request: &AnalyzeBboxRequest,
    ) -> Result<AnalyzeBboxResponse, ClientError> {
        let response = self.post_json(ANALYZE_BBOX_PATH, request).await?;
        Self::decode(response).await
    }

    /// Run (or replay) a region analysis.
    pub async fn analyze_region(
        &self,
        request: &RegionAnalysisRequest,
    ) -> Result<RegionAnalysisResponse, ClientError> {
        let response = self.post_json(ANALYZE_REGION_PATH, request).await?;
        Self::decode(response).await
    }

    /// Fetch a result image by URL (absolute or server-relative).
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        let response = self.get(url).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
