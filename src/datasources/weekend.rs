use chrono::{Datelike, Weekday};
use log::debug;

use crate::datasources::SourceConfig;
use crate::time::{merge_spans, Span};

/// The time from the close of business on Friday until business opens on
/// Monday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Weekends {
    pub(super) spans: Vec<Span>,
}

impl Weekends {
    #[must_use]
    pub fn new(config: &SourceConfig) -> Self {
        let tz = config.timezone();
        let hours = config.business_hours();

        let daily = config
            .period()
            .dates()
            .filter_map(|date| match date.weekday() {
                Weekday::Sat | Weekday::Sun => Some(Span::day(tz, date)),
                Weekday::Fri => Some(hours.evening(tz, date)),
                Weekday::Mon => Some(hours.morning(tz, date)),
                _ => None,
            });

        let spans = merge_spans(daily);
        debug!("{} weekends in {}", spans.len(), config.period());

        Self { spans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveTime};
    use chrono_tz::Pacific::Auckland;
    use pretty_assertions::assert_eq;

    use crate::datasources::{BusinessHours, CategorySource};
    use crate::datetime;
    use crate::time::Period;

    fn january() -> SourceConfig {
        SourceConfig::new(
            Auckland,
            BusinessHours::new(
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            )
            .unwrap(),
            Period::new(
                NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2019, 1, 31).unwrap(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_weekends_in_january() {
        let weekends = Weekends::new(&january());

        assert_eq!(weekends.spans().len(), 4);
        assert_eq!(
            weekends.spans()[0],
            Span::new(
                datetime!(2019:01:04 17:30 in Auckland),
                datetime!(2019:01:07 08:00 in Auckland)
            )
        );

        for span in weekends.spans() {
            let start = span.start().with_timezone(&Auckland);
            let end = span.end().with_timezone(&Auckland);

            assert_eq!(start.weekday(), Weekday::Fri);
            assert_eq!(start.time(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
            assert_eq!(end.weekday(), Weekday::Mon);
            assert_eq!(end.time(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
            assert_eq!(span.duration(), chrono::TimeDelta::minutes(62 * 60 + 30));
        }
    }

    #[test]
    fn test_period_starting_on_a_sunday() {
        let january = january();
        let config = SourceConfig::new(
            january.timezone(),
            january.business_hours(),
            Period::new(
                NaiveDate::from_ymd_opt(2019, 1, 6).unwrap(),
                NaiveDate::from_ymd_opt(2019, 1, 8).unwrap(),
            )
            .unwrap(),
        );

        assert_eq!(
            Weekends::new(&config).spans(),
            &[Span::new(
                datetime!(2019:01:06 00:00 in Auckland),
                datetime!(2019:01:07 08:00 in Auckland)
            )]
        );
    }
}
