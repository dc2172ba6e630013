//! Static GeoJSON boundary data (country outline, administrative regions).
//!
//! Read-only fetches; geometry is carried opaquely for the map layer. Region
//! names resolve through the property aliases the datasets disagree on.

use serde::{Deserialize, Serialize};

use crate::client::analysis::AnalysisClient;
use crate::client::error::ClientError;

pub const COUNTRY_OUTLINE_PATH: &str = "/static/geodata/poland.country.json";
pub const REGIONS_PATH: &str = "/static/geodata/wojewodztwa-max.geojson";

/// Label used when no name property is present.
pub const UNKNOWN_REGION_NAME: &str = "Nieznany";

/// Properties the region dataset may carry; name keys vary by dataset export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionProperties {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nazwa: Option<String>,
    #[serde(default, rename = "NAME_1")]
    pub name_1: Option<String>,
    #[serde(default, rename = "NAME")]
    pub name: Option<String>,
}

/// One administrative region feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionFeature {
    #[serde(default)]
    pub properties: RegionProperties,
    /// Opaque GeoJSON geometry; the client never edits it.
    #[serde(default)]
    pub geometry: serde_json::Value,
}

impl RegionFeature {
    /// Display name, resolved through the dataset's alias chain.
    pub fn name(&self) -> &str {
        self.properties
            .nazwa
            .as_deref()
            .or(self.properties.name_1.as_deref())
            .or(self.properties.name.as_deref())
            .unwrap_or(UNKNOWN_REGION_NAME)
    }
}

/// A GeoJSON feature collection of regions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionCollection {
    #[serde(default)]
    pub features: Vec<RegionFeature>,
}

impl RegionCollection {
    pub fn find(&self, id: i64) -> Option<&RegionFeature> {
        self.features.iter().find(|f| f.properties.id == Some(id))
    }
}

impl AnalysisClient {
    /// Fetch the country outline as opaque GeoJSON.
    pub async fn fetch_country_outline(&self) -> Result<serde_json::Value, ClientError> {
        let response = self.get(COUNTRY_OUTLINE_PATH).await?;
        Self::decode(response).await
    }

    /// Fetch the administrative region collection.
    pub async fn fetch_regions(&self) -> Result<RegionCollection, ClientError> {
        let response = self.get(REGIONS_PATH).await?;
        Self::decode(response).await
    }
}
