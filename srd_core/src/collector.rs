//! The collector walks a year range, gathers the holidays of every year and writes them to disk.

use reqwest::StatusCode;

use crate::{
    config::{CollectorConfig, YearRange},
    error::CollectError,
    holiday::{persist, HolidayRecord},
    holiday_client::{HolidayClient, YearOutcome},
};

/// A year whose request was answered with a non-OK status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedYear {
    pub year: i32,
    pub status: StatusCode,
}

/// Everything gathered during one pass over a year range.
#[derive(Debug, Default, PartialEq)]
pub struct CollectionReport {
    pub holidays: Vec<HolidayRecord>,
    pub succeeded_years: Vec<i32>,
    pub failed_years: Vec<FailedYear>,
}

/// Fetch every year of the range, one request after the other.
///
/// Years answered with a non-OK status are logged and skipped. Any other
/// error aborts the whole pass.
pub async fn collect(
    client: &HolidayClient,
    years: &YearRange,
) -> Result<CollectionReport, CollectError> {
    if years.is_empty() {
        tracing::warn!(
            start = years.start(),
            end = years.end(),
            "year range is empty, nothing to fetch"
        );
    }
    let mut report = CollectionReport::default();
    for year in years.years() {
        match client.get_year(year).await? {
            YearOutcome::Days(mut holidays) => {
                tracing::debug!(year, count = holidays.len(), "holidays collected");
                report.holidays.append(&mut holidays);
                report.succeeded_years.push(year);
            }
            YearOutcome::Failed(status) => {
                tracing::warn!("Failed to fetch data for year {year}: {}", status.as_u16());
                report.failed_years.push(FailedYear { year, status });
            }
        }
    }
    Ok(report)
}

/// Collect all holidays of the configured range and write them to the output path.
///
/// Nothing is written unless every request completed.
pub async fn run(config: &CollectorConfig) -> Result<CollectionReport, CollectError> {
    tracing::info!(
        start = config.years.start(),
        end = config.years.end(),
        endpoint = %config.endpoint_template,
        "collecting red days"
    );
    let client = HolidayClient::new(config.endpoint_template.as_str());
    let report = collect(&client, &config.years).await?;
    persist(&config.output_path, &report.holidays)?;
    tracing::info!(
        path = %config.output_path.display(),
        holidays = report.holidays.len(),
        failed_years = report.failed_years.len(),
        "red days written"
    );
    Ok(report)
}
