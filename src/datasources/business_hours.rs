use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use derive_more::Display;
use thiserror::Error;

use crate::time::{at_local_time, Span};

/// The local wall-clock times at which a business day opens and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{} - {}", start.format("%H:%M"), end.format("%H:%M"))]
pub struct BusinessHours {
    start: NaiveTime,
    end: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("business hours have to open before they close, got {start} - {end}")]
pub struct InvalidBusinessHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl BusinessHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, InvalidBusinessHours> {
        if start >= end {
            return Err(InvalidBusinessHours { start, end });
        }

        Ok(Self { start, end })
    }

    /// The opening of business.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// The close of business.
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// The span from midnight until business opens on `date`.
    #[must_use]
    pub fn morning(&self, tz: Tz, date: NaiveDate) -> Span {
        let day = Span::day(tz, date);
        Span::new(day.start(), at_local_time(tz, date, self.start))
    }

    /// The span from the close of business until the next midnight.
    #[must_use]
    pub fn evening(&self, tz: Tz, date: NaiveDate) -> Span {
        let day = Span::day(tz, date);
        Span::new(at_local_time(tz, date, self.end), day.end())
    }

    /// The span in which business is open on `date`.
    #[must_use]
    pub fn open(&self, tz: Tz, date: NaiveDate) -> Span {
        Span::new(
            at_local_time(tz, date, self.start),
            at_local_time(tz, date, self.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono_tz::Pacific::Auckland;
    use pretty_assertions::assert_eq;

    use crate::datetime;

    fn hours() -> BusinessHours {
        BusinessHours::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_day_parts() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 8).unwrap();

        assert_eq!(
            hours().morning(Auckland, date),
            Span::new(
                datetime!(2019:01:08 00:00 in Auckland),
                datetime!(2019:01:08 08:00 in Auckland)
            )
        );
        assert_eq!(
            hours().open(Auckland, date).duration(),
            chrono::TimeDelta::minutes(9 * 60 + 30)
        );
        assert_eq!(
            hours().evening(Auckland, date),
            Span::new(
                datetime!(2019:01:08 17:30 in Auckland),
                datetime!(2019:01:09 00:00 in Auckland)
            )
        );
        assert_eq!(hours().to_string(), "08:00 - 17:30".to_string());
    }

    #[test]
    fn test_closes_before_opening() {
        assert!(BusinessHours::new(
            NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        )
        .is_err());
    }
}
