//! Application state for the dashboard shell.
//!
//! `App` owns the store, the chart controller and the log sort order, and
//! caches everything derived from them. Caches are rebuilt by
//! [`App::refresh`] after every state change; drawing only reads them.

mod handlers;
mod snapshot;

pub use snapshot::DashboardSnapshot;

use crate::analytics::{check_integrity, Scorecard};
use crate::chart::{ChartFrame, ChartView, ChartViewController};
use crate::config::DashboardConfig;
use crate::error::{IntegrityWarning, MoodscopeResult, SelectionError};
use crate::store::{LoadReport, MoodStore};
use crate::table::{LogSort, MoodLogTable};

pub struct App {
    config: DashboardConfig,
    store: MoodStore,
    controller: ChartViewController,
    sort: LogSort,
    frame: ChartFrame,
    table: MoodLogTable,
    scorecard: Scorecard,
    warnings: Vec<IntegrityWarning>,
    /// Highlighted log row
    pub selected_row: usize,
    /// Last rejected action, shown in the footer
    pub status: Option<String>,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Set when something visible changed since the last draw
    pub needs_redraw: bool,
    /// Poll ticks since start
    pub tick_count: u64,
}

impl App {
    /// Load the configured dataset and build the app
    pub fn new(config: DashboardConfig) -> MoodscopeResult<Self> {
        let store = MoodStore::open(config.data_path.as_deref())?;
        Ok(Self::with_store(store, config))
    }

    /// Build the app around an already loaded store
    pub fn with_store(store: MoodStore, config: DashboardConfig) -> Self {
        let controller = ChartViewController::with_view(config.initial_view);
        let sort = LogSort::default();
        let frame = controller.render(&store.chart_data());
        let table = MoodLogTable::build(store.observations(), sort, config.notes_width);
        let scorecard = Scorecard::from_store(&store);
        let warnings = check_integrity(&store, config.share_tolerance);

        Self {
            config,
            store,
            controller,
            sort,
            frame,
            table,
            scorecard,
            warnings,
            selected_row: 0,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    /// Rebuild the derived outputs from the current state
    pub fn refresh(&mut self) {
        self.frame = self.controller.render(&self.store.chart_data());
        if self.table.sort != self.sort {
            self.table =
                MoodLogTable::build(self.store.observations(), self.sort, self.config.notes_width);
        }
        self.scorecard = Scorecard::from_store(&self.store);
        self.selected_row = self.selected_row.min(self.table.len().saturating_sub(1));
        self.mark_dirty();
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    // ------------------------------------------------------------------------
    // Chart view
    // ------------------------------------------------------------------------

    pub fn active_view(&self) -> ChartView {
        self.controller.active()
    }

    pub fn select_view(&mut self, view: ChartView) {
        self.status = None;
        if self.controller.select(view) {
            self.refresh();
        }
    }

    /// Select by 1-based selector position; a bad number is reported in the
    /// footer and changes nothing else
    pub fn select_view_number(&mut self, number: usize) -> Result<ChartView, SelectionError> {
        let result = self.controller.select_number(number);
        self.after_selection(&result);
        result
    }

    /// Select by name; an unknown name is reported and changes nothing else
    pub fn select_view_named(&mut self, payload: &str) -> Result<ChartView, SelectionError> {
        let result = self.controller.select_named(payload);
        self.after_selection(&result);
        result
    }

    fn after_selection(&mut self, result: &Result<ChartView, SelectionError>) {
        match result {
            Ok(_) => {
                self.status = None;
                self.refresh();
            }
            Err(err) => {
                self.status = Some(err.to_string());
                self.mark_dirty();
            }
        }
    }

    pub fn next_view(&mut self) {
        self.select_view(self.active_view().next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.active_view().prev());
    }

    // ------------------------------------------------------------------------
    // Log
    // ------------------------------------------------------------------------

    pub fn sort(&self) -> LogSort {
        self.sort
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        tracing::debug!(sort = self.sort.display_name(), "log sort changed");
        self.refresh();
    }

    pub fn select_next_row(&mut self) {
        if self.selected_row + 1 < self.table.len() {
            self.selected_row += 1;
            self.mark_dirty();
        }
    }

    pub fn select_prev_row(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
            self.mark_dirty();
        }
    }

    // ------------------------------------------------------------------------
    // Read access for the UI
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> &MoodStore {
        &self.store
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn table(&self) -> &MoodLogTable {
        &self.table
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    pub fn warnings(&self) -> &[IntegrityWarning] {
        &self.warnings
    }

    pub fn load_report(&self) -> &LoadReport {
        self.store.load_report()
    }

    /// Records excluded at load plus rows the table skipped
    pub fn defect_count(&self) -> usize {
        self.load_report().excluded_count() + self.table.skipped
    }

    /// Everything the shell renders, in serializable form
    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        DashboardSnapshot::new(self)
    }
}
