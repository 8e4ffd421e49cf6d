//! Serializable view of everything the dashboard renders (used by `--dump`)

use serde::Serialize;

use super::App;
use crate::analytics::Scorecard;
use crate::chart::{ChartFrame, ChartView};
use crate::error::IntegrityWarning;
use crate::store::LoadReport;
use crate::table::MoodLogTable;

#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub view: ChartView,
    pub chart: &'a ChartFrame,
    pub scorecard: &'a Scorecard,
    pub log: &'a MoodLogTable,
    pub warnings: &'a [IntegrityWarning],
    pub load_report: &'a LoadReport,
}

impl<'a> DashboardSnapshot<'a> {
    pub fn new(app: &'a App) -> Self {
        Self {
            view: app.active_view(),
            chart: app.frame(),
            scorecard: app.scorecard(),
            log: app.table(),
            warnings: app.warnings(),
            load_report: app.load_report(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::DashboardConfig;

    #[test]
    fn test_seed_snapshot_json() {
        let app = App::new(DashboardConfig::default()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&app.snapshot().to_json().unwrap()).unwrap();
        assert_eq!(json["view"], "pie");
        assert_eq!(json["chart"]["encoding"]["kind"], "ring");
        assert_eq!(json["scorecard"]["overall"], 86);
        assert_eq!(json["log"]["rows"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["load_report"]["excluded"].as_array().map(Vec::len), Some(0));
    }
}
