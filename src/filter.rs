//! Month / weekday filtering of a loaded dataset.

use chrono::{Month, Weekday};
use std::fmt;
use std::ops::Index;
use tracing::debug;

use crate::calendar::{month_name, title_case, weekday_name};
use crate::config::Catalog;
use crate::error::SelectorError;
use crate::loader::{Dataset, TripRecord};

/// Word that disables a filter dimension.
pub const ALL: &str = "All";

/// One filter dimension: either everything, or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl fmt::Display for Selector<Month> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL),
            Selector::Only(m) => f.write_str(month_name(*m)),
        }
    }
}

impl fmt::Display for Selector<Weekday> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL),
            Selector::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// Parses month selector text such as `"june"` or `"All"`.
///
/// Only months listed in the catalog are accepted.
pub fn parse_month(text: &str, catalog: &Catalog) -> Result<Selector<Month>, SelectorError> {
    let canonical = title_case(text.trim());
    if canonical == ALL {
        return Ok(Selector::All);
    }
    catalog
        .months()
        .iter()
        .find(|m| month_name(**m) == canonical)
        .map(|m| Selector::Only(*m))
        .ok_or(SelectorError::UnknownMonth(text.to_string()))
}

/// Parses day selector text such as `"monday"` or `"ALL"`.
pub fn parse_weekday(text: &str, catalog: &Catalog) -> Result<Selector<Weekday>, SelectorError> {
    let canonical = title_case(text.trim());
    if canonical == ALL {
        return Ok(Selector::All);
    }
    catalog
        .weekdays()
        .iter()
        .find(|d| weekday_name(**d) == canonical)
        .map(|d| Selector::Only(*d))
        .ok_or(SelectorError::UnknownWeekday(text.to_string()))
}

/// Records of a [`Dataset`] that passed the filters, in source order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    headers: &'a [String],
    records: Vec<&'a TripRecord>,
    has_gender: bool,
    has_birth_year: bool,
}

impl<'a> FilteredView<'a> {
    pub fn headers(&self) -> &'a [String] {
        self.headers
    }

    pub fn records(&self) -> &[&'a TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a TripRecord> {
        self.records.get(index).copied()
    }

    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Narrows this view further. Used to stack filters.
    pub fn refine(&self, month: Selector<Month>, weekday: Selector<Weekday>) -> FilteredView<'a> {
        FilteredView {
            records: self
                .iter()
                .filter(|r| month.matches(&r.month) && weekday.matches(&r.weekday))
                .collect(),
            ..*self
        }
    }
}

impl<'a> Index<usize> for FilteredView<'a> {
    type Output = TripRecord;

    fn index(&self, index: usize) -> &TripRecord {
        self.records[index]
    }
}

/// Keeps the records whose month and weekday match the selectors.
#[tracing::instrument(skip(dataset), fields(records = dataset.len()))]
pub fn filter(dataset: &Dataset, month: Selector<Month>, weekday: Selector<Weekday>) -> FilteredView<'_> {
    let view = FilteredView {
        headers: dataset.headers(),
        records: dataset.records().iter().collect(),
        has_gender: dataset.has_gender(),
        has_birth_year: dataset.has_birth_year(),
    }
    .refine(month, weekday);

    debug!(kept = view.len(), "Filter applied");
    view
}
