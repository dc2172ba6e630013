//! Shared progress panel for the analysis pipeline.
//!
//! Four discrete stages driven by the coordinator; any failure resets the
//! panel to idle. Shared between the coordinator and whatever renders the
//! step indicator.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Discrete stage of the current analysis attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStage {
    #[default]
    Idle,
    /// Request submitted to the backend.
    Submitted,
    /// Backend accepted the request; classification running.
    Classifying,
    Done,
}

impl ProgressStage {
    pub fn index(&self) -> usize {
        match self {
            ProgressStage::Idle => 0,
            ProgressStage::Submitted => 1,
            ProgressStage::Classifying => 2,
            ProgressStage::Done => 3,
        }
    }
}

/// Number of steps in the indicator.
pub const STEP_COUNT: usize = 4;

/// How one indicator step renders relative to the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Done,
    Active,
    Pending,
}

/// Cloneable handle to the shared progress state.
#[derive(Debug, Clone, Default)]
pub struct ProgressPanel {
    stage: Arc<RwLock<ProgressStage>>,
}

impl ProgressPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> ProgressStage {
        *self.stage.read()
    }

    pub fn set(&self, stage: ProgressStage) {
        *self.stage.write() = stage;
    }

    /// Back to idle; every failure path lands here.
    pub fn reset(&self) {
        self.set(ProgressStage::Idle);
    }

    /// Step states for the indicator: steps before the current stage are
    /// done, the current one active, the rest pending.
    pub fn steps(&self) -> [StepState; STEP_COUNT] {
        let index = self.stage().index();
        std::array::from_fn(|i| {
            if i < index {
                StepState::Done
            } else if i == index {
                StepState::Active
            } else {
                StepState::Pending
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_stage_is_idle() {
        let panel = ProgressPanel::new();
        assert_eq!(panel.stage(), ProgressStage::Idle);
        assert_eq!(
            panel.steps(),
            [
                StepState::Active,
                StepState::Pending,
                StepState::Pending,
                StepState::Pending,
            ]
        );
    }

    #[test]
    fn test_steps_track_stage() {
        let panel = ProgressPanel::new();
        panel.set(ProgressStage::Classifying);
        assert_eq!(
            panel.steps(),
            [
                StepState::Done,
                StepState::Done,
                StepState::Active,
                StepState::Pending,
            ]
        );
        panel.set(ProgressStage::Done);
        assert_eq!(
            panel.steps(),
            [
                StepState::Done,
                StepState::Done,
                StepState::Done,
                StepState::Active,
            ]
        );
    }

    #[test]
    fn test_reset_goes_idle() {
        let panel = ProgressPanel::new();
        panel.set(ProgressStage::Done);
        panel.reset();
        assert_eq!(panel.stage(), ProgressStage::Idle);
    }

    #[test]
    fn test_clones_share_state() {
        let panel = ProgressPanel::new();
        let other = panel.clone();
        panel.set(ProgressStage::Submitted);
        assert_eq!(other.stage(), ProgressStage::Submitted);
    }
}
