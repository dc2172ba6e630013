//! Service layer: request orchestration and view-state logic.
//!
//! The coordinator owns the validate-request-interpret state machine, the
//! progress panel tracks the visible stage sequence, and the presenter holds
//! the dispatch-driven dashboard state for a loaded result.

pub mod coordinator;
pub mod export;
pub mod presenter;
pub mod progress;

pub use coordinator::{RegionOutcome, RequestCoordinator, RunOutcome};
pub use export::{download_active_image, download_stats, stats_json};
pub use presenter::{ResultsPresenter, TabView, ViewMsg};
pub use progress::{ProgressPanel, ProgressStage, StepState};
