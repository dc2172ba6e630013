//! Public API surface for the viewer library.
//!
//! This file consolidates the types a frontend integration needs: the wire
//! DTOs, the typed view models, and the service handles.

pub use crate::client::dto::AnalyzeBboxRequest;
pub use crate::client::dto::AnalyzeBboxResponse;
pub use crate::client::dto::RegionAnalysisRequest;
pub use crate::client::dto::RegionAnalysisResponse;
pub use crate::client::AnalysisClient;
pub use crate::client::ClientError;
pub use crate::client::RegionCollection;
pub use crate::client::RegionFeature;
pub use crate::models::AnalysisParams;
pub use crate::models::AnalysisResult;
pub use crate::models::BoundingBox;
pub use crate::models::ImageView;
pub use crate::models::LandCoverStats;
pub use crate::models::Selection;
pub use crate::models::SelectionError;
pub use crate::models::SizeBounds;
pub use crate::services::ProgressPanel;
pub use crate::services::ProgressStage;
pub use crate::services::RequestCoordinator;
pub use crate::services::ResultsPresenter;
pub use crate::services::RunOutcome;
pub use crate::services::TabView;
pub use crate::services::ViewMsg;
pub use crate::tabs::Tab;
pub use crate::tabs::TabKind;

use serde::{Deserialize, Serialize};

/// Stored analysis identifier (backend database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AnalysisId(pub i64);

/// Administrative region (wojewodztwo) identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub i64);

impl AnalysisId {
    pub fn new(value: i64) -> Self {
        AnalysisId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RegionId {
    pub fn new(value: i64) -> Self {
        RegionId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AnalysisId> for i64 {
    fn from(id: AnalysisId) -> Self {
        id.0
    }
}
