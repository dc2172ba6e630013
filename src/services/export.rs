//! Export affordances: stats download, raw view, active-image download.
//!
//! All exports operate on whatever the presenter currently holds and are
//! no-ops (`Ok(None)` / `None`) when no result is loaded.

use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine;

use crate::client::AnalysisClient;
use crate::models::ImageSource;
use crate::services::presenter::ResultsPresenter;

/// Fixed filename for the stats download.
pub const STATS_FILENAME: &str = "landcover_stats.json";

/// Pretty-printed raw statistics ("view raw"). `None` without a result.
pub fn stats_json(presenter: &ResultsPresenter) -> Option<String> {
    let result = presenter.result()?;
    serde_json::to_string_pretty(&result.stats).ok()
}

/// Write the held statistics to `dir`. Returns the written path, or `None`
/// when no result is held.
pub fn download_stats(
    presenter: &ResultsPresenter,
    dir: &Path,
) -> anyhow::Result<Option<PathBuf>> {
    let Some(json) = stats_json(presenter) else {
        return Ok(None);
    };
    let path = dir.join(STATS_FILENAME);
    std::fs::write(&path, json)
        .with_context(|| format!("writing stats to {}", path.display()))?;
    Ok(Some(path))
}

/// Write the currently visible image to `dir` as
/// `landcover_<view>_<timestamp>.<ext>`. Inline payloads are decoded, URL
/// payloads fetched through the client. `None` when no result is held or
/// the active view has no image.
pub async fn download_active_image(
    presenter: &ResultsPresenter,
    client: &AnalysisClient,
    dir: &Path,
) -> anyhow::Result<Option<PathBuf>> {
    let Some(source) = presenter.active_image_source() else {
        return Ok(None);
    };

    let bytes = match source {
        ImageSource::DataUrl { data, .. } => base64::engine::general_purpose::STANDARD
            .decode(data)
            .context("decoding inline image payload")?,
        ImageSource::Url(url) => client
            .fetch_image(url)
            .await
            .with_context(|| format!("fetching image {}", url))?,
    };

    let filename = format!(
        "landcover_{}_{}.{}",
        presenter.active_image().as_str(),
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        source.extension(),
    );
    let path = dir.join(filename);
    std::fs::write(&path, bytes)
        .with_context(|| format!("writing image to {}", path.display()))?;
    Ok(Some(path))
}
