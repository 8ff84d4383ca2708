//! Static catalog of city datasets and selectable months.
//!
//! Built once at startup and handed to the loader and the shell.
//!
//! The built-in city mapping can be replaced by a plain JSON object on disk:
//! ```json
//! {
//!   "chicago": "chicago.csv",
//!   "new york city": "new_york_city.csv"
//! }
//! ```

use anyhow::{Context, Result, ensure};
use chrono::{Month, Weekday};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::calendar::{MONTHS, WEEKDAYS};

/// Months offered by the bundled datasets, which cover January through June.
const DEFAULT_MONTHS: usize = 6;

const DEFAULT_CITIES: &[(&str, &str)] = &[
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    data_dir: PathBuf,
    cities: BTreeMap<String, String>,
    months: Vec<Month>,
}

impl Catalog {
    /// Catalog with the built-in city mapping, resolving files under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let cities = DEFAULT_CITIES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::from_entries(data_dir, cities)
    }

    /// Catalog whose city mapping is read from the JSON file at `path`.
    pub fn load(data_dir: impl Into<PathBuf>, path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read city mapping '{path}'"))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("'{path}' is not a JSON object of city -> file"))?;
        ensure!(!entries.is_empty(), "city mapping '{path}' is empty");

        // Shell input is lower-cased before lookup.
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .collect();
        Ok(Self::from_entries(data_dir, entries))
    }

    pub fn from_entries(data_dir: impl Into<PathBuf>, cities: BTreeMap<String, String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cities,
            months: MONTHS[..DEFAULT_MONTHS].to_vec(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// Full path of the CSV file for `city`, if the city is configured.
    pub fn city_path(&self, city: &str) -> Option<PathBuf> {
        self.cities.get(city).map(|file| self.data_dir.join(file))
    }

    /// Iterates over all `(city, file name)` pairs in key order.
    pub fn cities(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cities.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn weekdays(&self) -> &[Weekday] {
        &WEEKDAYS
    }
}
