//! Derived metrics engine
//!
//! Overall wellness score, score banding, trend annotation, engagement
//! progress and the integrity checks that surface bad input.

mod integrity;
mod score;
mod scorecard;

pub use integrity::{check_integrity, DEFAULT_SHARE_TOLERANCE};
pub use score::{overall_score, ScoreBand};
pub use scorecard::{engagement_progress, EngagementRow, MetricRow, Scorecard};
