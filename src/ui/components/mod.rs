//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal view selector with arrow marker
//! - `StatusBar` - Footer with key hints and diagnostics

mod status_bar;
mod tab_selector;

pub use status_bar::render_status_bar;
pub use tab_selector::{chart_view_tabs, render_tab_selector, TabItem};
