use chrono::NaiveDate;
use derive_more::Display;
use log::{debug, trace};
use serde::Deserialize;

use crate::datasources::SourceConfig;
use crate::time::{Span, Trim};
use crate::utils;

/// An entry of a public holiday feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Display)]
#[display("{name} ({date})")]
pub struct PublicHoliday {
    name: String,
    #[serde(with = "utils::serde_toml_local_date")]
    date: NaiveDate,
}

impl PublicHoliday {
    #[must_use]
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Statutory holidays, each lasting the whole local day.
///
/// Only holidays whose name is on the whitelist are observed. Regional
/// holidays often share a date, the spans never overlap each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatHolidays {
    pub(super) spans: Vec<Span>,
}

impl StatHolidays {
    #[must_use]
    pub fn new<S: AsRef<str>>(
        config: &SourceConfig,
        holidays: &[PublicHoliday],
        whitelist: &[S],
    ) -> Self {
        let mut result = Self::default();

        for holiday in holidays {
            if !config.period().contains(holiday.date()) {
                continue;
            }

            if !whitelist.iter().any(|name| name.as_ref() == holiday.name()) {
                trace!("ignoring holiday {}", holiday);
                continue;
            }

            debug!("observing holiday {}", holiday);
            result.add_span(Span::day(config.timezone(), holiday.date()));
        }

        result.spans.sort();
        result
    }

    /// Adds the span, cutting off the parts that are already covered.
    fn add_span(&mut self, mut span: Span) {
        for existing in &self.spans {
            match span.trim_if_overlaps(existing) {
                Trim::Disjoint => {}
                Trim::Consumed => return,
                Trim::Remaining(remaining) => span = remaining,
            }
        }

        self.spans.push(span);
    }
}
