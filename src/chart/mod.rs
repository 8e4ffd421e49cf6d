//! Chart engine: view selection and the five renderers
//!
//! ```text
//! ChartViewController ──render(data)──▶ ChartFrame { view, epoch, ChartEncoding }
//!        │                                          ▲
//!        └── active ChartView ──▶ render::render ───┘
//! ```

mod controller;
pub mod encoding;
pub mod render;
mod view;

pub use controller::{ChartFrame, ChartViewController};
pub use encoding::{format_percent, tooltip_text, ChartEncoding, LegendItem};
pub use render::{
    render, render_area, render_bar, render_line, render_pie, render_radial, ChartData,
};
pub use view::ChartView;
