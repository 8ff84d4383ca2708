use crate::filter::FilteredView;
use crate::reports::types::TimeReport;
use crate::reports::utility::mode;

/// Most frequent month, weekday and start hour in the view.
///
/// Returns `None` for an empty view.
#[tracing::instrument(skip(view), fields(trips = view.len()))]
pub fn time_stats(view: &FilteredView<'_>) -> Option<TimeReport> {
    if view.is_empty() {
        return None;
    }

    Some(TimeReport {
        month: mode(view.iter().map(|t| t.month_name()))?,
        weekday: mode(view.iter().map(|t| t.weekday_name()))?,
        start_hour: mode(view.iter().map(|t| t.start_hour()))?,
    })
}
