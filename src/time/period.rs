use chrono::{Datelike, Months, NaiveDate};
use chrono_tz::Tz;
use derive_more::Display;
use thiserror::Error;

use crate::time::Span;

/// A reporting period of local dates. The end date is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{start} to {end}")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPeriod {
    #[error("the reporting period {start} to {end} is empty")]
    Empty { start: NaiveDate, end: NaiveDate },
    #[error("{year:04}-{month:02} is not a valid month")]
    InvalidMonth { year: i32, month: u32 },
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidPeriod> {
        if end <= start {
            return Err(InvalidPeriod::Empty { start, end });
        }

        Ok(Self { start, end })
    }

    /// The period from the first day of the month to the first day of the next month.
    pub fn month(year: i32, month: u32) -> Result<Self, InvalidPeriod> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(InvalidPeriod::InvalidMonth { year, month })?;
        let end = start
            .checked_add_months(Months::new(1))
            .ok_or(InvalidPeriod::InvalidMonth { year, month })?;

        Self::new(start, end)
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// The first date that is no longer part of the period.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date < end)
    }

    #[must_use]
    pub fn to_span(&self, tz: Tz) -> Span {
        Span::new(
            crate::time::start_of_day(tz, self.start),
            crate::time::start_of_day(tz, self.end),
        )
    }

    /// A name for the period, like `2019-01` for a whole month.
    #[must_use]
    pub fn label(&self) -> String {
        if self.start.day() == 1 && self.start.checked_add_months(Months::new(1)) == Some(self.end) {
            format!("{:04}-{:02}", self.start.year(), self.start.month())
        } else {
            format!("{}_{}", self.start, self.end)
        }
    }
}
