//! The result object held for a completed analysis.

use serde::{Deserialize, Serialize};

use crate::models::stats::LandCoverStats;
use crate::tabs::Tab;

/// One raster image attached to an analysis result.
///
/// The backend returns either inline `data:` URLs (bbox analyses) or plain
/// URLs relative to the server (region analyses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Inline base64 payload with its MIME type.
    DataUrl { mime: String, data: String },
    /// Remote URL, absolute or server-relative.
    Url(String),
}

impl ImageSource {
    /// Classify a wire image field.
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix("data:") {
            if let Some((mime, data)) = rest.split_once(";base64,") {
                return ImageSource::DataUrl {
                    mime: mime.to_string(),
                    data: data.to_string(),
                };
            }
        }
        ImageSource::Url(raw.to_string())
    }

    /// File extension implied by the MIME type or URL, for download
    /// filenames. Falls back to `png` when the URL carries no usable suffix.
    pub fn extension(&self) -> &str {
        let mime = match self {
            ImageSource::DataUrl { mime, .. } => mime.as_str(),
            ImageSource::Url(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                return match path.rsplit_once('.') {
                    Some((_, ext))
                        if !ext.is_empty()
                            && ext.len() <= 5
                            && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
                    {
                        ext
                    }
                    _ => "png",
                };
            }
        };
        match mime {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            other => other.rsplit('/').next().unwrap_or("png"),
        }
    }
}

/// Which raster layer the image viewer shows; exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageView {
    #[default]
    Original,
    Mask,
    Blended,
    Residential,
}

impl ImageView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageView::Original => "original",
            ImageView::Mask => "mask",
            ImageView::Blended => "blended",
            ImageView::Residential => "residential",
        }
    }

    pub const ALL: [ImageView; 4] = [
        ImageView::Original,
        ImageView::Mask,
        ImageView::Blended,
        ImageView::Residential,
    ];
}

/// The raster layers attached to one analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageSet {
    pub original: Option<ImageSource>,
    pub mask: Option<ImageSource>,
    pub blended: Option<ImageSource>,
    pub residential: Option<ImageSource>,
}

impl ImageSet {
    pub fn get(&self, view: ImageView) -> Option<&ImageSource> {
        match view {
            ImageView::Original => self.original.as_ref(),
            ImageView::Mask => self.mask.as_ref(),
            ImageView::Blended => self.blended.as_ref(),
            ImageView::Residential => self.residential.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        ImageView::ALL.iter().all(|v| self.get(*v).is_none())
    }
}

/// A completed analysis: statistics, typed tabs, and raster layers.
///
/// Replaces the prior result wholesale; there is no merging across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis_id: Option<i64>,
    pub stats: LandCoverStats,
    pub tabs: Vec<Tab>,
    pub images: ImageSet,
}
