use chrono::NaiveDate;
use chrono_tz::Tz;
use log::debug;
use thiserror::Error;

use crate::time::Span;

/// The format company days are written in, for example `24/12/2018`.
pub const COMPANY_DAY_FORMAT: &str = "%d/%m/%Y";

/// Days off that are given by the company, each one lasting from local
/// midnight to the next midnight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDays {
    pub(super) spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid company day \"{day}\", expected a date like 24/12/2018: {reason}")]
pub struct InvalidCompanyDay {
    day: String,
    reason: chrono::ParseError,
}

impl CompanyDays {
    /// Every configured day becomes a span, the reporting period does not
    /// restrict them.
    #[must_use]
    pub fn new(tz: Tz, days: impl IntoIterator<Item = NaiveDate>) -> Self {
        let spans = crate::time::deduplicate(days.into_iter().map(|date| Span::day(tz, date)));
        debug!("{} company days", spans.len());

        Self { spans }
    }

    /// Parses days in the [`COMPANY_DAY_FORMAT`].
    pub fn parse<S: AsRef<str>>(tz: Tz, days: &[S]) -> Result<Self, InvalidCompanyDay> {
        let dates = days
            .iter()
            .map(|day| parse_company_day(day.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(tz, dates))
    }
}

pub fn parse_company_day(day: &str) -> Result<NaiveDate, InvalidCompanyDay> {
    NaiveDate::parse_from_str(day.trim(), COMPANY_DAY_FORMAT).map_err(|reason| InvalidCompanyDay {
        day: day.to_string(),
        reason,
    })
}
