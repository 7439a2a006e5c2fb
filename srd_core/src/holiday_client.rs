//! This client fetches the days of a year and filters them into holiday records.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{config::year_url, error::CollectError, holiday::HolidayRecord};

static RED_DAY_AFFIRMATIVE: &str = "ja";
static SUNDAY: &str = "söndag";

/// One day as returned by the API.
///
/// The API sends more fields per day, only the ones needed are kept.
/// Missing and `null` fields are both read as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDay {
    pub datum: Option<String>,
    #[serde(rename = "röd dag", default)]
    pub red_day: Option<String>,
    #[serde(rename = "helgdag", default)]
    pub holiday: Option<String>,
}

/// The response body for a single year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DaysResponse {
    #[serde(default)]
    pub dagar: Vec<RawDay>,
}

/// What a request for one year yielded.
#[derive(Debug, PartialEq)]
pub enum YearOutcome {
    Days(Vec<HolidayRecord>),
    /// The server answered with something other than `200 OK`.
    Failed(StatusCode),
}

pub struct HolidayClient {
    client: reqwest::Client,
    endpoint_template: String,
}

impl HolidayClient {
    pub fn new(endpoint_template: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_template: endpoint_template.into(),
        }
    }

    /// Get the holidays of a single year.
    ///
    /// A non-OK status is not an error, it is reported as [`YearOutcome::Failed`].
    pub async fn get_year(&self, year: i32) -> Result<YearOutcome, CollectError> {
        let url = year_url(&self.endpoint_template, year);
        tracing::debug!(year, %url, "requesting days");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CollectError::Network { year, source })?;
        let status = response.status();
        if status != StatusCode::OK {
            return Ok(YearOutcome::Failed(status));
        }
        let body = response
            .text()
            .await
            .map_err(|source| CollectError::Network { year, source })?;
        let days =
            parse(&body).map_err(|source| CollectError::MalformedResponse { year, source })?;
        let holidays = filter_days(year, days.dagar)?;
        Ok(YearOutcome::Days(holidays))
    }
}

/// Parse the JSON body of a year.
pub fn parse(json: &str) -> Result<DaysResponse, serde_json::Error> {
    serde_json::from_str(json)
}

/// Get the trimmed holiday name if the day counts as a holiday.
///
/// Sundays are flagged as red days by the API but are not holidays.
pub fn holiday_name(day: &RawDay) -> Option<&str> {
    let red_day = day.red_day.as_deref().unwrap_or_default();
    if red_day.to_lowercase() != RED_DAY_AFFIRMATIVE {
        return None;
    }
    let name = day.holiday.as_deref().unwrap_or_default().trim();
    if name.is_empty() || name.to_lowercase() == SUNDAY {
        return None;
    }
    Some(name)
}

/// Keep only the holidays, in the order the API listed them.
pub fn filter_days(year: i32, days: Vec<RawDay>) -> Result<Vec<HolidayRecord>, CollectError> {
    let mut holidays = vec![];
    for (index, day) in days.iter().enumerate() {
        let Some(name) = holiday_name(day) else {
            continue;
        };
        let Some(date) = &day.datum else {
            return Err(CollectError::MalformedRecord {
                year,
                index,
                field: "datum",
            });
        };
        holidays.push(HolidayRecord::new(date.as_str(), name));
    }
    Ok(holidays)
}
