//! Wire DTOs for the analysis endpoints.
//!
//! Field names match the backend exactly; the blended overlay arrives as
//! `preview_image` and region requests key on `wojewodztwo_id`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::client::error::ClientError;
use crate::models::{
    AnalysisParams, AnalysisResult, BoundingBox, ImageSet, ImageSource, LandCoverStats,
    RegionParams,
};
use crate::tabs::{tabs_from_stats, tabs_from_wire, RawTab};

/// Request body for `POST /analyze-bbox/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeBboxRequest {
    pub bbox: BoundingBox,
    pub zoom: u8,
    pub model_path: String,
    pub params: AnalysisParams,
}

impl AnalyzeBboxRequest {
    /// Cache key for this request: sha256 over the canonical JSON of
    /// `{bbox (6 decimals), model basename, params, zoom}` with sorted keys,
    /// truncated to 32 hex chars. Matches the server's key recipe.
    pub fn cache_key(&self) -> String {
        let round6 = |v: f64| (v * 1e6).round() / 1e6;
        let bbox: [f64; 4] = self.bbox.into();
        let model = self
            .model_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.model_path);

        // serde_json objects are ordered maps, so key order is canonical.
        let canonical = serde_json::json!({
            "bbox": bbox.iter().map(|c| round6(*c)).collect::<Vec<f64>>(),
            "model": model,
            "params": self.params,
            "zoom": self.zoom,
        });
        let digest = Sha256::digest(canonical.to_string().as_bytes());
        hex::encode(digest)[..32].to_string()
    }
}

/// Response body for `POST /analyze-bbox/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeBboxResponse {
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub analysis_id: Option<i64>,
    /// Present on a domain failure, even with a success status.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub stats: Option<LandCoverStats>,
    #[serde(default)]
    pub tabs: Vec<RawTab>,
    #[serde(default)]
    pub original_image: Option<String>,
    #[serde(default)]
    pub mask_image: Option<String>,
    /// Blended overlay.
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub residential_image: Option<String>,
}

impl AnalyzeBboxResponse {
    /// Interpret the response as an outcome: domain error, or a typed result.
    pub fn into_result(self) -> Result<AnalysisResult, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::Domain(error));
        }
        let stats = self
            .stats
            .ok_or_else(|| ClientError::Domain("response carried no statistics".to_string()))?;

        let tabs = if self.tabs.is_empty() {
            tabs_from_stats(&stats)
        } else {
            tabs_from_wire(self.tabs)?
        };

        let parse = |field: Option<String>| field.as_deref().map(ImageSource::parse);
        let images = ImageSet {
            original: parse(self.original_image),
            mask: parse(self.mask_image),
            blended: parse(self.preview_image),
            residential: parse(self.residential_image),
        };

        Ok(AnalysisResult {
            analysis_id: self.analysis_id,
            stats,
            tabs,
            images,
        })
    }
}

/// Request body for `POST /api/analyze-wojewodztwo/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAnalysisRequest {
    pub wojewodztwo_id: i64,
    pub model_path: String,
    pub params: RegionParams,
    pub zoom: u8,
    #[serde(default)]
    pub force_recompute: bool,
}

/// Response body for `POST /api/analyze-wojewodztwo/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionAnalysisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub analysis_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RegionAnalysisResponse {
    /// Fresh success and cached replay both mean the result page is ready.
    pub fn is_ready(&self) -> bool {
        self.success || self.cached
    }
}
