//! Error handling for moodscope.
//!
//! Three tiers, from least to most severe:
//!
//! - **Integrity warnings** ([`IntegrityWarning`]): the data is suspicious
//!   (e.g. a current streak longer than the longest streak). Reported, logged,
//!   rendered as-is.
//! - **Record errors** ([`RecordError`]): one observation is malformed and is
//!   excluded from the table and the metrics; the exclusion count is reported.
//! - **Operation errors** ([`MoodscopeError`]): a file cannot be read, a
//!   dataset cannot be parsed, a flag is invalid, or a selection payload names
//!   no view. Returned through [`MoodscopeResult`].
//!
//! | Category | Description | Session continues |
//! |----------|-------------|-------------------|
//! | Data | Malformed record or dataset | Yes |
//! | Selection | Unknown chart view | Yes |
//! | Configuration | Bad flag / env value | No |
//! | System | Filesystem errors | No |

mod category;
mod integrity;
mod moodscope_error;
mod record;
mod selection;

pub use category::ErrorCategory;
pub use integrity::IntegrityWarning;
pub use moodscope_error::{MoodscopeError, MoodscopeResult};
pub use record::RecordError;
pub use selection::SelectionError;
