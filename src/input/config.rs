use std::fs::File;
use std::path::Path;

use anyhow::Context;
use chrono_tz::Tz;
use log::{debug, info};
use thiserror::Error;

use crate::datasources::{
    BusinessHours, CategorySources, CompanyDays, InvalidBusinessHours, InvalidCompanyDay,
    PublicHoliday, SourceConfig, StatHolidays,
};
use crate::input::toml_input;
use crate::time::{InvalidPeriod, Period};
use crate::utils;

/// The validated settings for one report.
#[derive(Debug, Clone)]
pub struct Config {
    timezone: Tz,
    business_hours: BusinessHours,
    period: Period,
    holidays: Vec<String>,
    company_days: CompanyDays,
    public_holidays: Vec<PublicHoliday>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown timezone \"{name}\": {reason}")]
    UnknownTimezone { name: String, reason: String },
    #[error(transparent)]
    InvalidBusinessHours(#[from] InvalidBusinessHours),
    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriod),
    #[error(transparent)]
    InvalidCompanyDay(#[from] InvalidCompanyDay),
    #[error("no reporting period, either add a [period] table or pass a month")]
    MissingPeriod,
}

pub(crate) fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|reason| ConfigError::UnknownTimezone {
            name: name.to_string(),
            reason: reason.to_string(),
        })
}

pub struct ConfigBuilder {
    file: toml_input::ConfigFile,
    period: Option<Period>,
}

impl ConfigBuilder {
    fn new(file: toml_input::ConfigFile) -> Self {
        Self { file, period: None }
    }

    /// Replaces the reporting period of the file.
    pub fn period(&mut self, period: Period) -> &mut Self {
        self.period = Some(period);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let timezone = parse_timezone(self.file.timezone())?;

        let hours = self.file.business_hours();
        let business_hours = BusinessHours::new(hours.start(), hours.end())?;

        let period = match (self.period, self.file.period()) {
            (Some(period), _) => period,
            (None, Some(table)) => Period::new(table.start(), table.end())?,
            (None, None) => return Err(ConfigError::MissingPeriod),
        };

        let company_days = CompanyDays::parse(timezone, self.file.company_days())?;

        debug!(
            "reporting period {} in {} with business hours {}",
            period,
            timezone.name(),
            business_hours
        );

        Ok(Config {
            timezone,
            business_hours,
            period,
            holidays: self.file.holidays().to_vec(),
            company_days,
            public_holidays: self.file.public_holidays().to_vec(),
        })
    }
}

impl Config {
    #[must_use]
    pub fn from_toml(file: toml_input::ConfigFile) -> ConfigBuilder {
        ConfigBuilder::new(file)
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let path = path.as_ref();
        info!("reading config from \"{}\"", path.display());

        let file: toml_input::ConfigFile = utils::toml_from_reader(
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
        )
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

        Ok(Self::from_toml(file))
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    #[must_use]
    pub const fn business_hours(&self) -> BusinessHours {
        self.business_hours
    }

    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// The names of the public holidays that are observed.
    #[must_use]
    pub fn holidays(&self) -> &[String] {
        &self.holidays
    }

    #[must_use]
    pub const fn company_days(&self) -> &CompanyDays {
        &self.company_days
    }

    #[must_use]
    pub fn public_holidays(&self) -> &[PublicHoliday] {
        &self.public_holidays
    }

    #[must_use]
    pub const fn source_config(&self) -> SourceConfig {
        SourceConfig::new(self.timezone, self.business_hours, self.period)
    }

    /// Computes the category sources for the reporting period.
    #[must_use]
    pub fn category_sources(&self) -> CategorySources {
        let config = self.source_config();
        let stat_holidays = StatHolidays::new(&config, &self.public_holidays, &self.holidays);

        CategorySources::for_period(&config, self.company_days.clone(), stat_holidays)
    }
}
