//! Five-row windows over a filtered view, for showing raw data on request.

use crate::filter::FilteredView;
use crate::loader::TripRecord;

pub const PAGE_SIZE: usize = 5;

/// Returns the records at `[offset, offset + PAGE_SIZE)`.
///
/// When that window runs past the end of the view, the first `PAGE_SIZE`
/// records are returned instead of a short page. The caller owns the offset
/// and advances it by [`PAGE_SIZE`] after each page.
pub fn page<'v, 'a>(view: &'v FilteredView<'a>, offset: usize) -> &'v [&'a TripRecord] {
    let records = view.records();
    match offset.checked_add(PAGE_SIZE) {
        Some(end) if end <= records.len() => &records[offset..end],
        // overrun: start over from the top
        _ => &records[..PAGE_SIZE.min(records.len())],
    }
}

/// One record as `(column, cell)` pairs in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub fields: Vec<(&'a str, &'a str)>,
}

impl<'a> RawRow<'a> {
    pub fn new(headers: &'a [String], record: &'a TripRecord) -> Self {
        Self {
            fields: headers
                .iter()
                .zip(record.raw.iter())
                .map(|(h, v)| (h.as_str(), v.as_str()))
                .collect(),
        }
    }
}

/// [`page`], with each record paired with the view's header names.
pub fn raw_page<'a>(view: &FilteredView<'a>, offset: usize) -> Vec<RawRow<'a>> {
    page(view, offset)
        .iter()
        .map(|&record| RawRow::new(view.headers(), record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Selector, filter};
    use crate::loader::{Dataset, read_trips};

    fn seven_trips() -> Dataset {
        let mut csv = String::from("Start Time,Trip Duration,Start Station,End Station,User Type\n");
        for i in 0..7 {
            csv.push_str(&format!("2017-06-15 0{i}:00:00,60,S{i},E{i},Subscriber\n"));
        }
        read_trips(csv.as_bytes()).unwrap()
    }

    fn stations(rows: &[&TripRecord]) -> Vec<String> {
        rows.iter().map(|r| r.start_station.clone()).collect()
    }

    #[test]
    fn test_first_page() {
        let dataset = seven_trips();
        let view = filter(&dataset, Selector::All, Selector::All);

        assert_eq!(stations(page(&view, 0)), vec!["S0", "S1", "S2", "S3", "S4"]);
    }

    #[test]
    fn test_overrun_falls_back_to_start() {
        let dataset = seven_trips();
        let view = filter(&dataset, Selector::All, Selector::All);

        // 5 + 5 > 7
        assert_eq!(stations(page(&view, 5)), vec!["S0", "S1", "S2", "S3", "S4"]);
        assert_eq!(stations(page(&view, usize::MAX)), stations(page(&view, 0)));
    }

    #[test]
    fn test_exact_last_page_is_not_a_fallback() {
        let dataset = seven_trips();
        let view = filter(&dataset, Selector::All, Selector::All);

        assert_eq!(stations(page(&view, 2)), vec!["S2", "S3", "S4", "S5", "S6"]);
    }

    #[test]
    fn test_small_and_empty_views() {
        let dataset = seven_trips();
        let view = filter(&dataset, Selector::All, Selector::All);
        let small = read_trips(
            "Start Time,Trip Duration,Start Station,End Station,User Type\n\
             2017-06-15 08:00:00,60,X,Y,Customer\n"
                .as_bytes(),
        )
        .unwrap();
        let small_view = filter(&small, Selector::All, Selector::All);
        let empty_view = filter(&dataset, Selector::Only(chrono::Month::May), Selector::All);

        assert_eq!(stations(page(&small_view, 0)), vec!["X"]);
        assert_eq!(stations(page(&small_view, 5)), vec!["X"]);
        assert!(page(&empty_view, 0).is_empty());
        assert_eq!(page(&view, 0).len(), PAGE_SIZE);
    }

    #[test]
    fn test_page_does_not_mutate_view() {
        let dataset = seven_trips();
        let view = filter(&dataset, Selector::All, Selector::All);

        let _ = page(&view, 0);
        let _ = page(&view, 5);
        assert_eq!(view.len(), 7);
    }

    #[test]
    fn test_raw_rows_pair_headers_with_cells() {
        let dataset = seven_trips();
        let view = filter(&dataset, Selector::All, Selector::All);

        let rows = raw_page(&view, 0);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].fields[0], ("Start Time", "2017-06-15 01:00:00"));
        assert_eq!(rows[1].fields[2], ("Start Station", "S1"));
    }
}
