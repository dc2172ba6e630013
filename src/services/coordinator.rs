//! Request coordinator: validate, submit, interpret.
//!
//! The coordinator drives one analysis attempt at a time through the
//! progress stages. Failures never propagate as errors: every run ends in a
//! [`RunOutcome`] the caller can surface directly. A generation counter
//! guarantees at most one in-flight request's result is ever handed to the
//! presenter: a newer selection supersedes (without cancelling) anything
//! still in flight.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::dto::{AnalyzeBboxRequest, AnalyzeBboxResponse};
use crate::client::{AnalysisClient, ClientError, RegionAnalysisRequest};
use crate::models::{AnalysisParams, AnalysisResult, Selection, SelectionError, SizeBounds};
use crate::services::progress::{ProgressPanel, ProgressStage};

/// Terminal outcome of one bbox analysis attempt.
#[derive(Debug)]
pub enum RunOutcome {
    /// Analysis completed; hand the result to the presenter.
    Completed(AnalysisResult),
    /// Selection failed the size bounds; no request was issued.
    Rejected(SelectionError),
    /// Transport or domain failure; the message is user-displayable.
    Failed(String),
    /// A newer selection was made while this request was in flight; the
    /// arrived result must be discarded.
    Superseded,
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Terminal outcome of one region analysis attempt.
#[derive(Debug)]
pub enum RegionOutcome {
    /// The result page is ready (freshly computed or cached).
    Ready { redirect_url: String, cached: bool },
    Failed(String),
}

/// Coordinates analysis requests against the backend.
pub struct RequestCoordinator {
    client: AnalysisClient,
    bounds: SizeBounds,
    progress: ProgressPanel,
    generation: AtomicU64,
}

impl RequestCoordinator {
    pub fn new(client: AnalysisClient, bounds: SizeBounds) -> Self {
        RequestCoordinator {
            client,
            bounds,
            progress: ProgressPanel::new(),
            generation: AtomicU64::new(0),
        }
    }

    /// Handle to the shared progress panel.
    pub fn progress(&self) -> ProgressPanel {
        self.progress.clone()
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    /// Invalidate any in-flight request without starting a new one
    /// (selection cleared or redrawn on the map).
    pub fn clear_selection(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.progress.reset();
    }

    /// Run one bbox analysis attempt end to end.
    pub async fn run_bbox(
        &self,
        selection: &Selection,
        model_path: &str,
        params: &AnalysisParams,
    ) -> RunOutcome {
        if let Err(e) = self.bounds.validate(selection) {
            log::warn!("selection rejected: {}", e);
            self.progress.reset();
            return RunOutcome::Rejected(e);
        }

        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = AnalyzeBboxRequest {
            bbox: selection.bbox,
            zoom: selection.zoom,
            model_path: model_path.to_string(),
            params: *params,
        };
        log::info!(
            "submitting bbox analysis (cache key {})",
            request.cache_key()
        );
        self.progress.set(ProgressStage::Submitted);

        let response = match self
            .client
            .post_json(crate::client::analysis::ANALYZE_BBOX_PATH, &request)
            .await
        {
            Ok(response) => response,
            Err(e) => return self.fail(token, e),
        };
        // Once the selection changes, this run no longer owns the panel.
        if !self.owns(token) {
            log::info!("discarding response of superseded request");
            return RunOutcome::Superseded;
        }
        self.progress.set(ProgressStage::Classifying);

        let payload: AnalyzeBboxResponse = match AnalysisClient::decode(response).await {
            Ok(payload) => payload,
            Err(e) => return self.fail(token, e),
        };
        let result = match payload.into_result() {
            Ok(result) => result,
            Err(e) => return self.fail(token, e),
        };

        if !self.owns(token) {
            log::info!("discarding result of superseded request");
            return RunOutcome::Superseded;
        }

        self.progress.set(ProgressStage::Done);
        RunOutcome::Completed(result)
    }

    /// Run one region analysis attempt.
    pub async fn run_region(&self, request: &RegionAnalysisRequest) -> RegionOutcome {
        match self.client.analyze_region(request).await {
            Ok(response) if response.is_ready() => RegionOutcome::Ready {
                redirect_url: response.redirect_url.unwrap_or_default(),
                cached: response.cached,
            },
            Ok(response) => RegionOutcome::Failed(
                response
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ),
            Err(e) => RegionOutcome::Failed(e.to_string()),
        }
    }

    /// Whether the given run still owns the current generation.
    fn owns(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    fn fail(&self, token: u64, error: ClientError) -> RunOutcome {
        if !self.owns(token) {
            log::info!("discarding failure of superseded request: {}", error);
            return RunOutcome::Superseded;
        }
        log::error!("analysis attempt failed: {}", error);
        self.progress.reset();
        RunOutcome::Failed(error.to_string())
    }
}
