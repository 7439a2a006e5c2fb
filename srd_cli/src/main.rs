use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use srd_core::{
    collector,
    config::{
        default_output_file_name, CollectorConfig, YearRange, DEFAULT_END_YEAR, DEFAULT_ENDPOINT,
        DEFAULT_START_YEAR,
    },
    holiday::HolidayCalendar,
};
use tracing_subscriber::EnvFilter;

/// Collect Swedish red days into a JSON file.
#[derive(Debug, Parser)]
#[command()]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// fetch the red days of a year range and write them to a file
    Fetch {
        #[command(flatten)]
        args: FetchArgs,
    },
    /// look up a date in a file written by `fetch`
    ///
    /// Only the file entries count: weekends are not treated as red days.
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// the first year to fetch
    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    pub start_year: i32,
    /// the last year to fetch
    #[arg(long, default_value_t = DEFAULT_END_YEAR)]
    pub end_year: i32,
    /// the endpoint, either containing `{year}` or a base URL the year is appended to
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// the output file, defaults to `swedish_red_days_<start>_<end>.json`
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output: None,
        }
    }
}

impl TryFrom<&FetchArgs> for CollectorConfig {
    type Error = anyhow::Error;

    fn try_from(value: &FetchArgs) -> Result<Self> {
        let years = YearRange::new(value.start_year, value.end_year)?;
        let mut config = CollectorConfig::new(years, value.endpoint.as_str());
        if let Some(output) = &value.output {
            config.output_path = output.clone();
        }
        Ok(config)
    }
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// the date to look up (YYYY-MM-DD)
    pub date: NaiveDate,
    /// the holiday file, defaults to the file `fetch` writes without arguments
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl CheckArgs {
    fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| {
            PathBuf::from(default_output_file_name(&YearRange::default()))
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Arguments::parse();
    match args.command {
        Some(Command::Fetch { args }) => run_fetch(&args).await?,
        Some(Command::Check { args }) => run_check(&args)?,
        None => run_fetch(&FetchArgs::default()).await?,
    };
    Ok(())
}

async fn run_fetch(args: &FetchArgs) -> Result<()> {
    let config = CollectorConfig::try_from(args)?;
    let report = collector::run(&config).await.with_context(|| {
        format!(
            "could not collect red days into {}",
            config.output_path.display()
        )
    })?;
    if !report.failed_years.is_empty() {
        tracing::info!(
            failed_years = report.failed_years.len(),
            succeeded_years = report.succeeded_years.len(),
            "some years could not be fetched"
        );
    }
    println!("Done");
    Ok(())
}

fn run_check(args: &CheckArgs) -> Result<()> {
    let input_path = args.input_path();
    let calendar = HolidayCalendar::load(&input_path)?;
    tracing::debug!(path = %input_path.display(), holidays = calendar.len(), "holidays loaded");
    println!("{}", describe(&calendar, args.date));
    Ok(())
}

/// Describe whether a date is a red day or the day before one, according to the file entries.
fn describe(calendar: &HolidayCalendar, date: NaiveDate) -> String {
    match (calendar.holiday(date), calendar.is_pre_holiday(date)) {
        (Some(holiday), true) => {
            format!("{date} is a red day ({}) and the day before a red day", holiday.name)
        }
        (Some(holiday), false) => format!("{date} is a red day ({})", holiday.name),
        (None, true) => format!("{date} is the day before a red day"),
        (None, false) => format!("{date} is not a red day"),
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, str::FromStr};

    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};
    use srd_core::{
        config::{CollectorConfig, YearRange},
        holiday::{HolidayCalendar, HolidayRecord},
    };

    use crate::{describe, Arguments, Command, FetchArgs};

    fn parse_fetch(args: &[&str]) -> FetchArgs {
        match Arguments::try_parse_from(args).unwrap().command {
            Some(Command::Fetch { args }) => args,
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn test_default_fetch_config() {
        let config = CollectorConfig::try_from(&FetchArgs::default()).unwrap();
        assert_eq!(config, CollectorConfig::default());
        assert!(Arguments::try_parse_from(["srd_cli"]).unwrap().command.is_none());
    }

    #[test]
    fn test_fetch_args_to_config() {
        let args = parse_fetch(&[
            "srd_cli",
            "fetch",
            "--start-year",
            "2030",
            "--end-year",
            "2031",
        ]);
        let config = CollectorConfig::try_from(&args).unwrap();
        assert_eq!(config.years, YearRange::new(2030, 2031).unwrap());
        assert_eq!(
            config.output_path,
            PathBuf::from("swedish_red_days_2030_2031.json")
        );
        assert_eq!(config.url_for(2030), "http://sholiday.faboul.se/dagar/v2.1/2030");

        let args = parse_fetch(&[
            "srd_cli",
            "fetch",
            "--endpoint",
            "http://localhost:8080/dagar/{year}",
            "--output",
            "out.json",
        ]);
        let config = CollectorConfig::try_from(&args).unwrap();
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.url_for(2025), "http://localhost:8080/dagar/2025");
    }

    #[test]
    fn test_fetch_args_reject_implausible_year() {
        let args = parse_fetch(&["srd_cli", "fetch", "--start-year", "0"]);
        assert!(CollectorConfig::try_from(&args).is_err());
    }

    #[test]
    fn test_check_args() {
        let args = Arguments::try_parse_from(["srd_cli", "check", "2025-06-06"]).unwrap();
        let Some(Command::Check { args }) = args.command else {
            panic!("expected check command");
        };
        assert_eq!(args.date, NaiveDate::from_str("2025-06-06").unwrap());
        assert_eq!(
            args.input_path(),
            PathBuf::from("swedish_red_days_2025_2050.json")
        );
        assert!(Arguments::try_parse_from(["srd_cli", "check", "06/06/2025"]).is_err());
    }

    #[test]
    fn test_check_help_names_file_entries() {
        let command = Arguments::command();
        let check = command.find_subcommand("check").unwrap();
        let long_about = check.get_long_about().unwrap().to_string();
        assert!(long_about.contains("Only the file entries count"));
    }

    #[test]
    fn test_describe() {
        let calendar = HolidayCalendar::new(vec![
            HolidayRecord::new("2025-12-25", "Juldagen"),
            HolidayRecord::new("2025-12-26", "Annandag jul"),
        ]);
        let date = |s: &str| NaiveDate::from_str(s).unwrap();
        assert_eq!(
            describe(&calendar, date("2025-12-24")),
            "2025-12-24 is the day before a red day"
        );
        assert_eq!(
            describe(&calendar, date("2025-12-25")),
            "2025-12-25 is a red day (Juldagen) and the day before a red day"
        );
        assert_eq!(
            describe(&calendar, date("2025-12-26")),
            "2025-12-26 is a red day (Annandag jul)"
        );
        assert_eq!(
            describe(&calendar, date("2025-12-27")),
            "2025-12-27 is not a red day"
        );
        // a Sunday which is not in the file
        assert_eq!(
            describe(&calendar, date("2025-12-28")),
            "2025-12-28 is not a red day"
        );
    }
}
