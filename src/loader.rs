//! CSV loader for per-city trip records.

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use tracing::{debug, info};

use crate::calendar::{month_name, weekday_name};
use crate::config::Catalog;
use crate::error::LoadError;

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const TRIP_DURATION: &str = "Trip Duration";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// Accepted start-time layouts, tried in order. `%.f` also matches no fraction.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// One trip, with calendar fields derived from the start time at load.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub month: Month,
    pub weekday: Weekday,
    pub end_time: Option<String>,
    pub duration_secs: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// Cells exactly as read, aligned with [`Dataset::headers`].
    pub raw: Vec<String>,
}

impl TripRecord {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// All trips of one city, in source order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<TripRecord>,
    has_gender: bool,
    has_birth_year: bool,
}

impl Dataset {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source carried a `Gender` column.
    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    /// Whether the source carried a `Birth Year` column.
    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }
}

/// Header positions of the columns the loader understands.
struct Columns {
    start_time: usize,
    end_time: Option<usize>,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(LoadError::MissingColumn { column: name });

        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: find(END_TIME),
            duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn parse(&self, row: &StringRecord, line: usize) -> Result<TripRecord, LoadError> {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let start_raw = cell(self.start_time);
        let start_time =
            parse_timestamp(start_raw).ok_or_else(|| LoadError::InvalidTimestamp {
                row: line,
                value: start_raw.to_string(),
            })?;

        Ok(TripRecord {
            start_time,
            month: month_of(start_time),
            weekday: start_time.weekday(),
            end_time: self.end_time.and_then(|i| non_blank(cell(i))),
            duration_secs: parse_number(cell(self.duration), TRIP_DURATION, line)?,
            start_station: cell(self.start_station).to_string(),
            end_station: cell(self.end_station).to_string(),
            user_type: non_blank(cell(self.user_type)),
            gender: self.gender.and_then(|i| non_blank(cell(i))),
            birth_year: match self.birth_year {
                Some(i) => parse_number(cell(i), BIRTH_YEAR, line)?,
                None => None,
            },
            raw: row.iter().map(str::to_string).collect(),
        })
    }
}

/// Parses a start-time cell, trying each accepted layout.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn month_of(ts: NaiveDateTime) -> Month {
    // month() is always 1..=12
    Month::try_from(ts.month() as u8).unwrap_or(Month::January)
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Blank, `NaN` and infinite cells are missing values; anything else must be numeric.
fn parse_number(value: &str, column: &'static str, row: usize) -> Result<Option<f64>, LoadError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(n) if !n.is_finite() => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(LoadError::InvalidNumber {
            row,
            column,
            value: value.to_string(),
        }),
    }
}

/// Reads trip records from any CSV source whose first row is a header.
pub fn read_trips<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let columns = Columns::locate(&headers)?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result?;
        // header is line 1
        let line = row.position().map_or(i + 2, |p| p.line() as usize);
        records.push(columns.parse(&row, line)?);
    }

    debug!(
        records = records.len(),
        has_gender = columns.gender.is_some(),
        has_birth_year = columns.birth_year.is_some(),
        "Trip records parsed"
    );

    Ok(Dataset {
        headers,
        records,
        has_gender: columns.gender.is_some(),
        has_birth_year: columns.birth_year.is_some(),
    })
}

/// Loads the dataset configured for `city` in the catalog.
///
/// # Errors
///
/// Returns a [`LoadError`] if the city is unknown, the file cannot be read,
/// or any row fails to parse. No partial dataset is ever returned.
#[tracing::instrument(skip(catalog))]
pub fn load_city(catalog: &Catalog, city: &str) -> Result<Dataset, LoadError> {
    let path = catalog
        .city_path(city)
        .ok_or_else(|| LoadError::UnknownCity(city.to_string()))?;

    let file = File::open(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let dataset = read_trips(file)?;
    info!(records = dataset.len(), path = %path.display(), "Dataset loaded");
    Ok(dataset)
}
