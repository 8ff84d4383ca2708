use chrono::{Month, Weekday};
use tracing::debug;

use crate::filter::{FilteredView, Selector};
use crate::reports::types::Summary;
use crate::reports::{duration_stats, station_stats, time_stats, user_stats};

/// Runs all four reports over `view` and bundles them with the selection.
pub fn summarize(
    city: &str,
    month: Selector<Month>,
    weekday: Selector<Weekday>,
    view: &FilteredView<'_>,
) -> Summary {
    let summary = Summary {
        city: city.to_string(),
        month: month.to_string(),
        weekday: weekday.to_string(),
        trips: view.len(),
        time: time_stats(view),
        stations: station_stats(view),
        durations: duration_stats(view),
        users: user_stats(view),
    };

    debug!(
        city,
        trips = summary.trips,
        has_time = summary.time.is_some(),
        "Summary computed"
    );
    summary
}
