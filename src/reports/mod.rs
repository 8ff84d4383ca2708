//! Descriptive statistics over a filtered view of trips.
//!
//! Each report is computed independently from the same view. Reports that
//! need at least one value (modes, minimum, maximum) return `None` or
//! [`BirthYears::NoData`] rather than failing on an empty view.

pub mod duration;
pub mod station;
pub mod summary;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;

pub use duration::duration_stats;
pub use station::station_stats;
pub use summary::summarize;
pub use time::time_stats;
pub use types::{
    BirthYears, DurationReport, StationReport, Summary, TimeReport, UserReport, ValueCount,
};
pub use user::user_stats;
