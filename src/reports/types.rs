//! Data types produced by the report computations.

use serde::Serialize;

/// Most popular times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReport {
    pub month: &'static str,
    pub weekday: &'static str,
    /// 0..=23
    pub start_hour: u32,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReport {
    pub start_station: String,
    pub end_station: String,
    /// Formatted as `From: <start> To: <end>`.
    pub trip: String,
}

/// Travel time totals, in whole minutes (floored).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationReport {
    pub total_minutes: i64,
    pub mean_minutes: i64,
}

/// How many trips carry one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Birth-year summary when the dataset has a birth-year column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BirthYears {
    /// Column present but no trip in the view has a value.
    NoData,
    Summary {
        earliest: i32,
        most_recent: i32,
        most_common: i32,
    },
}

/// User demographics.
///
/// `genders` and `birth_years` are `None` when the dataset lacks that column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub user_types: Vec<ValueCount>,
    pub genders: Option<Vec<ValueCount>>,
    pub birth_years: Option<BirthYears>,
}

/// All four reports for one filtered view.
///
/// A `None` report means the view held nothing to compute it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub city: String,
    pub month: String,
    pub weekday: String,
    pub trips: usize,
    pub time: Option<TimeReport>,
    pub stations: Option<StationReport>,
    pub durations: Option<DurationReport>,
    pub users: UserReport,
}
