//! Results presenter: explicit view state driven by a single dispatch
//! function.
//!
//! Holds at most one [`AnalysisResult`] and the pure presentation state
//! around it (active tab, active image, ranking toggle, viewer zoom).
//! Switching tabs or images never re-fetches and never mutates the held
//! statistics; `render()` recomputes the active view model from held data.

use crate::models::{AnalysisResult, ImageSource, ImageView};
use crate::tabs::{
    adjacency_view, area_view, density_view, fragmentation_view, percentage_bars, AdjacencyView,
    AreaView, DensityView, FragmentationEntry, PercentageBar, Tab, TabData, TabKind,
};

/// Image viewer zoom limits, matching the original viewer controls.
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 4.0;
pub const ZOOM_STEP: f64 = 0.25;

/// State-transition messages for the dashboard.
#[derive(Debug, Clone)]
pub enum ViewMsg {
    /// A completed analysis arrived; replaces any prior result wholesale.
    ResultLoaded(AnalysisResult),
    /// Selection cleared or redrawn; drop the held result.
    SelectionCleared,
    TabSelected(TabKind),
    ImageSelected(ImageView),
    /// Collapse/expand the ranked area list.
    ToggleAreaList,
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

/// The active tab rendered from held data.
#[derive(Debug, Clone, PartialEq)]
pub enum TabView {
    /// No result held, or the active tab has no data.
    Empty,
    Percentage(Vec<PercentageBar>),
    Area(AreaView),
    Density(DensityView),
    Adjacency(AdjacencyView),
    Fragmentation(Vec<FragmentationEntry>),
}

/// Dashboard view state.
#[derive(Debug, Clone)]
pub struct ResultsPresenter {
    result: Option<AnalysisResult>,
    active_tab: TabKind,
    active_image: ImageView,
    area_expanded: bool,
    zoom: f64,
}

impl Default for ResultsPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsPresenter {
    pub fn new() -> Self {
        ResultsPresenter {
            result: None,
            active_tab: TabKind::Percentage,
            active_image: ImageView::Original,
            area_expanded: false,
            zoom: 1.0,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn active_tab(&self) -> TabKind {
        self.active_tab
    }

    pub fn active_image(&self) -> ImageView {
        self.active_image
    }

    pub fn area_expanded(&self) -> bool {
        self.area_expanded
    }

    /// Viewer zoom as a display percentage (100 = 1.0x).
    pub fn zoom_pct(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn tabs(&self) -> &[Tab] {
        self.result.as_ref().map(|r| r.tabs.as_slice()).unwrap_or(&[])
    }

    /// Source of the currently visible image, if the result carries it.
    pub fn active_image_source(&self) -> Option<&ImageSource> {
        self.result.as_ref()?.images.get(self.active_image)
    }

    /// Apply one state transition.
    pub fn apply(&mut self, msg: ViewMsg) {
        match msg {
            ViewMsg::ResultLoaded(result) => {
                self.active_tab = result
                    .tabs
                    .iter()
                    .find(|t| t.kind == TabKind::Percentage)
                    .or_else(|| result.tabs.first())
                    .map(|t| t.kind)
                    .unwrap_or(TabKind::Percentage);
                self.active_image = ImageView::Original;
                self.area_expanded = false;
                self.zoom = 1.0;
                self.result = Some(result);
            }
            ViewMsg::SelectionCleared => {
                *self = ResultsPresenter::new();
            }
            ViewMsg::TabSelected(kind) => {
                // Only tabs the result actually carries can become active.
                if self.tabs().iter().any(|t| t.kind == kind) {
                    self.active_tab = kind;
                }
            }
            ViewMsg::ImageSelected(view) => {
                let present = self
                    .result
                    .as_ref()
                    .map(|r| r.images.get(view).is_some())
                    .unwrap_or(false);
                if present {
                    self.active_image = view;
                }
            }
            ViewMsg::ToggleAreaList => {
                self.area_expanded = !self.area_expanded;
            }
            ViewMsg::ZoomIn => self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX),
            ViewMsg::ZoomOut => self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN),
            ViewMsg::ZoomReset => self.zoom = 1.0,
        }
    }

    fn active_tab_data(&self) -> Option<&Tab> {
        self.tabs().iter().find(|t| t.kind == self.active_tab)
    }

    /// Compute the view model for the active tab from held data.
    pub fn render(&self) -> TabView {
        let Some(tab) = self.active_tab_data() else {
            return TabView::Empty;
        };
        if tab.is_empty() {
            return TabView::Empty;
        }
        match (&tab.kind, &tab.data) {
            (TabKind::Percentage, TabData::Classes(values)) => {
                TabView::Percentage(percentage_bars(values))
            }
            (TabKind::Area, TabData::Classes(values)) => {
                TabView::Area(area_view(values, self.area_expanded))
            }
            (TabKind::Density, TabData::Scalar(value)) => TabView::Density(density_view(*value)),
            (TabKind::Adjacency, TabData::Matrix(matrix)) => {
                TabView::Adjacency(adjacency_view(matrix))
            }
            (TabKind::Fragmentation, TabData::Classes(values)) => {
                TabView::Fragmentation(fragmentation_view(values))
            }
            // Kind/payload mismatch can only come from a malformed wire tab
            // that slipped through conversion; render nothing.
            _ => TabView::Empty,
        }
    }
}
