//! Data model of the mood dashboard
//!
//! Plain data: observations, the pre-aggregated distribution and weekly
//! series, wellness metrics, streaks and engagement stats. Nothing here knows
//! about terminals; colors are symbolic [`ColorToken`]s.

pub mod color;
pub mod distribution;
pub mod mood;
pub mod observation;
pub mod wellness;

pub use color::{ColorToken, Tone};
pub use distribution::{day_index, ColorTable, MoodDistributionEntry, WeeklySeriesPoint};
pub use mood::{MoodCategory, Shift, Trend};
pub use observation::{LocalTime, MoodObservation, MAX_INTENSITY};
pub use wellness::{EngagementStat, StreakCounters, WellnessMetric, MAX_SCORE};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize an optional id given as either string or integer
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, an integer or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
