//! Configuration of a collection run.

use std::{ops::RangeInclusive, path::PathBuf};

use crate::error::ConfigError;

pub static DEFAULT_ENDPOINT: &str = "http://sholiday.faboul.se/dagar/v2.1/";
pub const DEFAULT_START_YEAR: i32 = 2025;
pub const DEFAULT_END_YEAR: i32 = 2050;

static YEAR_PLACEHOLDER: &str = "{year}";
const MAX_YEAR: i32 = 9999;

/// An inclusive range of calendar years.
///
/// A range whose start lies after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, ConfigError> {
        for year in [start, end] {
            if !is_plausible_year(year) {
                return Err(ConfigError::YearOutOfRange { year });
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }
}

fn is_plausible_year(year: i32) -> bool {
    (1..=MAX_YEAR).contains(&year)
}

/// Everything one run of the collector needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    pub years: YearRange,
    /// Either contains `{year}` or is a base URL the year gets appended to.
    pub endpoint_template: String,
    pub output_path: PathBuf,
}

impl CollectorConfig {
    /// Build a config writing to the default file name for the range.
    pub fn new(years: YearRange, endpoint_template: impl Into<String>) -> Self {
        Self {
            years,
            endpoint_template: endpoint_template.into(),
            output_path: PathBuf::from(default_output_file_name(&years)),
        }
    }

    /// Get the request URL for a single year.
    pub fn url_for(&self, year: i32) -> String {
        year_url(&self.endpoint_template, year)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self::new(YearRange::default(), DEFAULT_ENDPOINT)
    }
}

/// Substitute the year into an endpoint template.
pub fn year_url(endpoint_template: &str, year: i32) -> String {
    if endpoint_template.contains(YEAR_PLACEHOLDER) {
        endpoint_template.replace(YEAR_PLACEHOLDER, &year.to_string())
    } else {
        format!("{endpoint_template}{year}")
    }
}

/// The output file name reflecting the year range, e.g. `swedish_red_days_2025_2050.json`.
pub fn default_output_file_name(years: &YearRange) -> String {
    format!("swedish_red_days_{}_{}.json", years.start, years.end)
}
