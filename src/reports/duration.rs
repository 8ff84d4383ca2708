use crate::filter::FilteredView;
use crate::reports::types::DurationReport;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Total and mean trip duration, each floored to whole minutes.
///
/// Trips without a duration are left out of both. Returns `None` when no
/// trip in the view has one.
#[tracing::instrument(skip(view), fields(trips = view.len()))]
pub fn duration_stats(view: &FilteredView<'_>) -> Option<DurationReport> {
    let (total_secs, counted) = view
        .iter()
        .filter_map(|t| t.duration_secs)
        .fold((0.0_f64, 0_usize), |(sum, n), secs| (sum + secs, n + 1));

    if counted == 0 {
        return None;
    }

    let mean_secs = total_secs / counted as f64;
    Some(DurationReport {
        total_minutes: (total_secs / SECONDS_PER_MINUTE).floor() as i64,
        mean_minutes: (mean_secs / SECONDS_PER_MINUTE).floor() as i64,
    })
}
