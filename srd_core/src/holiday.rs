//! Holiday records and the JSON file they are stored in.

use std::{collections::HashMap, fs, path::Path};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

static DATE_FORMAT: &str = "%Y-%m-%d";

/// A single red day as it is written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The date exactly as the API returned it.
    pub date: String,
    pub name: String,
}

impl HolidayRecord {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
        }
    }
}

/// Write all holidays to `path` as a pretty-printed JSON array.
///
/// An existing file is overwritten.
pub fn persist(path: &Path, holidays: &[HolidayRecord]) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(holidays).map_err(StorageError::Serialize)?;
    fs::write(path, json).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = holidays.len(), "holidays written");
    Ok(())
}

/// Read holidays back from a file written by [`persist`].
pub fn load(path: &Path) -> Result<Vec<HolidayRecord>, StorageError> {
    let json = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| StorageError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

/// Date lookups on a list of holidays.
///
/// Dates are matched on their ISO string, so records whose date is not in
/// `YYYY-MM-DD` format never match.
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    holidays: Vec<HolidayRecord>,
    by_date: HashMap<String, usize>,
}

impl HolidayCalendar {
    pub fn new(holidays: Vec<HolidayRecord>) -> Self {
        let mut by_date = HashMap::with_capacity(holidays.len());
        for (index, holiday) in holidays.iter().enumerate() {
            by_date.entry(holiday.date.clone()).or_insert(index);
        }
        Self { holidays, by_date }
    }

    pub fn load(path: &Path) -> Result<Self, StorageError> {
        Ok(Self::new(load(path)?))
    }

    /// Get the holiday on `date`, the first one if the file lists several.
    pub fn holiday(&self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.by_date
            .get(&date.format(DATE_FORMAT).to_string())
            .map(|&index| &self.holidays[index])
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday(date).is_some()
    }

    /// Whether the day after `date` is a holiday.
    pub fn is_pre_holiday(&self, date: NaiveDate) -> bool {
        date.checked_add_days(Days::new(1))
            .is_some_and(|tomorrow| self.is_holiday(tomorrow))
    }

    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
