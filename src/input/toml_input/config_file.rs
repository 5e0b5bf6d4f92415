use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::datasources::PublicHoliday;
use crate::utils;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    timezone: String,
    #[serde(default)]
    holidays: Vec<String>,
    #[serde(default)]
    company_days: Vec<String>,
    business_hours: BusinessHoursTable,
    period: Option<PeriodTable>,
    #[serde(default)]
    public_holidays: Vec<PublicHoliday>,
}

impl ConfigFile {
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// The names of the public holidays that are observed.
    pub fn holidays(&self) -> &[String] {
        &self.holidays
    }

    pub fn company_days(&self) -> &[String] {
        &self.company_days
    }

    pub fn business_hours(&self) -> &BusinessHoursTable {
        &self.business_hours
    }

    pub fn period(&self) -> Option<&PeriodTable> {
        self.period.as_ref()
    }

    pub fn public_holidays(&self) -> &[PublicHoliday] {
        &self.public_holidays
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessHoursTable {
    #[serde(with = "utils::serde_clock_time")]
    start: NaiveTime,
    #[serde(with = "utils::serde_clock_time")]
    end: NaiveTime,
}

impl BusinessHoursTable {
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodTable {
    #[serde(with = "utils::serde_toml_local_date")]
    start: NaiveDate,
    #[serde(with = "utils::serde_toml_local_date")]
    end: NaiveDate,
}

impl PeriodTable {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The first date that is no longer part of the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}
