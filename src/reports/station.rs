use crate::filter::FilteredView;
use crate::reports::types::StationReport;
use crate::reports::utility::mode;

/// Most used start station, end station and start/end pair.
///
/// Returns `None` for an empty view.
#[tracing::instrument(skip(view), fields(trips = view.len()))]
pub fn station_stats(view: &FilteredView<'_>) -> Option<StationReport> {
    if view.is_empty() {
        return None;
    }

    Some(StationReport {
        start_station: mode(view.iter().map(|t| t.start_station.as_str()))?.to_string(),
        end_station: mode(view.iter().map(|t| t.end_station.as_str()))?.to_string(),
        trip: mode(
            view.iter()
                .map(|t| format!("From: {} To: {}", t.start_station, t.end_station)),
        )?,
    })
}
