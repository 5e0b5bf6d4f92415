use std::fmt;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

/// Creates a [`DateTime<Utc>`] from a literal, checking the ranges at compile time.
///
/// ```
/// # use pager_tally::datetime;
/// let utc = datetime!(2019:01:04 17:00);
/// let auckland = datetime!(2019:01:04 17:00 in chrono_tz::Pacific::Auckland);
/// assert_eq!(utc - auckland, chrono::TimeDelta::hours(13));
/// ```
#[macro_export]
macro_rules! datetime {
    (@check $month:literal, $day:literal, $hour:literal, $minute:literal) => {
        static_assertions::const_assert!($month >= 1 && $month <= 12);
        static_assertions::const_assert!($day >= 1 && $day <= 31);
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);
    };
    ($year:literal : $month:literal : $day:literal $hour:literal : $minute:literal in $tz:expr) => {{
        $crate::datetime!(@check $month, $day, $hour, $minute);

        $crate::time::local_datetime_unchecked($tz, $year, $month, $day, $hour, $minute)
    }};
    ($year:literal : $month:literal : $day:literal $hour:literal : $minute:literal) => {{
        $crate::datetime!(@check $month, $day, $hour, $minute);

        $crate::time::local_datetime_unchecked(
            ::chrono_tz::Tz::UTC,
            $year,
            $month,
            $day,
            $hour,
            $minute,
        )
    }};
}

#[doc(hidden)]
#[must_use]
pub fn local_datetime_unchecked(
    tz: Tz,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("{:04}-{:02}-{:02} is not a valid date", year, month, day));

    // hour and minute have been checked by the macro
    resolve_local(tz, date.and_time(chrono::NaiveTime::MIN) + hours_and_minutes(hour, minute))
}

fn hours_and_minutes(hour: u32, minute: u32) -> TimeDelta {
    TimeDelta::minutes(i64::from(hour) * 60 + i64::from(minute))
}

/// Formats a duration for reports: `-` for nothing, otherwise `5h`, `5h 30m`
/// or `5h 30m 10s`.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    if duration <= TimeDelta::zero() {
        return "-".to_string();
    }

    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let seconds = duration.num_seconds() % 60;

    match (minutes, seconds) {
        (0, 0) => format!("{}h", hours),
        (_, 0) => format!("{}h {}m", hours, minutes),
        _ => format!("{}h {}m {}s", hours, minutes, seconds),
    }
}

/// A duration displayed as `HH:MM:SS`, where the hours are not wrapped at 24.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrettyDuration(TimeDelta);

impl fmt::Display for PrettyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < TimeDelta::zero() { "-" } else { "" };
        let duration = self.0.abs();

        write!(
            f,
            "{}{:02}:{:02}:{:02}",
            sign,
            duration.num_hours(),
            duration.num_minutes() % 60,
            duration.num_seconds() % 60
        )
    }
}

impl From<TimeDelta> for PrettyDuration {
    fn from(value: TimeDelta) -> Self {
        Self(value)
    }
}

mod attributed;
pub use attributed::*;
mod day;
pub use day::*;
mod period;
pub use period::*;
mod span;
pub use span::*;
mod spans;
pub use spans::*;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::zero()), "-".to_string());
        assert_eq!(format_duration(TimeDelta::hours(64)), "64h".to_string());
        assert_eq!(
            format_duration(TimeDelta::hours(172) + TimeDelta::minutes(30)),
            "172h 30m".to_string()
        );
        assert_eq!(
            format_duration(TimeDelta::hours(1) + TimeDelta::seconds(5)),
            "1h 0m 5s".to_string()
        );
    }

    #[test]
    fn test_pretty_duration() {
        assert_eq!(
            PrettyDuration::from(TimeDelta::hours(26) + TimeDelta::minutes(3)).to_string(),
            "26:03:00".to_string()
        );
        assert_eq!(
            PrettyDuration::from(TimeDelta::minutes(-90)).to_string(),
            "-01:30:00".to_string()
        );
    }

    #[test]
    fn test_datetime_macro() {
        assert_eq!(
            datetime!(2019:01:04 17:00).to_rfc3339(),
            "2019-01-04T17:00:00+00:00".to_string()
        );
        assert_eq!(
            datetime!(2019:01:04 17:00 in chrono_tz::Pacific::Auckland).to_rfc3339(),
            "2019-01-04T04:00:00+00:00".to_string()
        );
    }
}
