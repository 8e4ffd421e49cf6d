//! Chart view controller
//!
//! Single-selection state over [`ChartView`]. The only state is the active
//! view plus a transition counter; data is passed in at render time.

use serde::Serialize;

use super::encoding::ChartEncoding;
use super::render::{render, ChartData};
use super::view::ChartView;
use crate::error::SelectionError;

/// A complete rendered chart. A new frame replaces the previous one whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub view: ChartView,
    /// Transition counter at render time
    pub epoch: u64,
    pub encoding: ChartEncoding,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartViewController {
    active: ChartView,
    epoch: u64,
}

impl ChartViewController {
    /// Controller starting on Pie
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller starting on `view`
    pub fn with_view(view: ChartView) -> Self {
        Self {
            active: view,
            epoch: 0,
        }
    }

    pub fn active(&self) -> ChartView {
        self.active
    }

    /// Number of transitions so far
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Select a view. Returns true when the active view changed.
    pub fn select(&mut self, view: ChartView) -> bool {
        if view == self.active {
            return false;
        }
        tracing::debug!(from = %self.active, to = %view, "chart view transition");
        self.active = view;
        self.epoch += 1;
        true
    }

    /// Select by name. An unknown name leaves the state unchanged.
    pub fn select_named(&mut self, payload: &str) -> Result<ChartView, SelectionError> {
        let view = payload.parse::<ChartView>().inspect_err(|err| {
            tracing::warn!(code = err.error_code(), "rejected view selection: {}", err);
        })?;
        self.select(view);
        Ok(view)
    }

    /// Select by 1-based selector position
    pub fn select_number(&mut self, number: usize) -> Result<ChartView, SelectionError> {
        let view = ChartView::from_number(number).inspect_err(|err| {
            tracing::warn!(code = err.error_code(), "rejected view selection: {}", err);
        })?;
        self.select(view);
        Ok(view)
    }

    pub fn select_next(&mut self) -> ChartView {
        self.select(self.active.next());
        self.active
    }

    pub fn select_prev(&mut self) -> ChartView {
        self.select(self.active.prev());
        self.active
    }

    /// Render the active view
    pub fn render(&self, data: &ChartData<'_>) -> ChartFrame {
        ChartFrame {
            view: self.active,
            epoch: self.epoch,
            encoding: render(self.active, data),
        }
    }
}
