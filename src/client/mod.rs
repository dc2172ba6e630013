//! HTTP client for the analysis backend.
//!
//! The backend is an external collaborator; this module defines the
//! client-observable contract only: wire DTOs, the error taxonomy, and the
//! reqwest-based client for the analysis and boundary endpoints.

pub mod analysis;
pub mod boundaries;
pub mod dto;
pub mod error;

pub use analysis::AnalysisClient;
pub use boundaries::{RegionCollection, RegionFeature};
pub use dto::{
    AnalyzeBboxRequest, AnalyzeBboxResponse, RegionAnalysisRequest, RegionAnalysisResponse,
};
pub use error::ClientError;
