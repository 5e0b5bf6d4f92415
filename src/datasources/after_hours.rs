use chrono::{Datelike, Weekday};
use log::debug;

use crate::datasources::SourceConfig;
use crate::time::{merge_spans, Span};

/// The nights of the working week, from the close of business until
/// business opens the next day.
///
/// Friday evening and Monday morning are part of the weekend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AfterHours {
    pub(super) spans: Vec<Span>,
}

impl AfterHours {
    #[must_use]
    pub fn new(config: &SourceConfig) -> Self {
        let tz = config.timezone();
        let hours = config.business_hours();

        let mut daily = Vec::new();
        for date in config.period().dates() {
            match date.weekday() {
                Weekday::Mon => daily.push(hours.evening(tz, date)),
                Weekday::Tue | Weekday::Wed | Weekday::Thu => {
                    daily.push(hours.morning(tz, date));
                    daily.push(hours.evening(tz, date));
                }
                Weekday::Fri => daily.push(hours.morning(tz, date)),
                Weekday::Sat | Weekday::Sun => {}
            }
        }

        let spans = merge_spans(daily);
        debug!("{} after-hours spans in {}", spans.len(), config.period());

        Self { spans }
    }
}
