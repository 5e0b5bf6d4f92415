use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

// DST gaps are at most a few hours long
const MAX_GAP_MINUTES: i64 = 3 * 60;

/// Converts a wall-clock time in `tz` to an instant.
///
/// Ambiguous times resolve to the earlier instant, times that fall into a
/// DST gap are moved forward to the first time that exists.
#[must_use]
pub fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    let resolved = match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => (1..=MAX_GAP_MINUTES)
            .map(|minutes| local + TimeDelta::minutes(minutes))
            .find_map(|shifted| tz.from_local_datetime(&shifted).earliest()),
    };

    resolved
        .map(|instant| instant.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local))
}

/// The instant at which `date` starts in `tz`.
#[must_use]
pub fn start_of_day(tz: Tz, date: NaiveDate) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// The instant at which the wall clock in `tz` shows `time` on `date`.
#[must_use]
pub fn at_local_time(tz: Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(time))
}

/// The local date of `instant` in `tz`.
#[must_use]
pub fn local_date(tz: Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono_tz::America::Santiago;
    use chrono_tz::Pacific::Auckland;
    use pretty_assertions::assert_eq;

    use crate::datetime;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_start_of_day() {
        assert_eq!(
            start_of_day(Auckland, date(2019, 1, 2)),
            datetime!(2019:01:01 11:00)
        );
        // winter time, NZST is +12:00
        assert_eq!(
            start_of_day(Auckland, date(2019, 6, 3)),
            datetime!(2019:06:02 12:00)
        );
    }

    #[test]
    fn test_gap_moves_forward() {
        // NZ daylight saving started 2019-09-29 at 02:00, the clock jumped to 03:00
        let local = date(2019, 9, 29).and_hms_opt(2, 30, 0).unwrap();
        assert_eq!(resolve_local(Auckland, local), datetime!(2019:09:29 03:00 in Auckland));
        assert_eq!(datetime!(2019:09:29 03:00 in Auckland), datetime!(2019:09:28 14:00));
    }

    #[test]
    fn test_gap_at_midnight() {
        // Chile skipped from 2019-09-08 00:00 to 01:00
        assert_eq!(
            start_of_day(Santiago, date(2019, 9, 8)),
            datetime!(2019:09:08 04:00)
        );
    }

    #[test]
    fn test_ambiguous_takes_earliest() {
        // NZ daylight saving ended 2019-04-07 at 03:00, the clock went back to 02:00
        let local = date(2019, 4, 7).and_hms_opt(2, 30, 0).unwrap();
        assert_eq!(resolve_local(Auckland, local), datetime!(2019:04:06 13:30));
    }

    #[test]
    fn test_local_date() {
        assert_eq!(local_date(Auckland, datetime!(2019:01:04 11:00)), date(2019, 1, 5));
        assert_eq!(local_date(Auckland, datetime!(2019:01:04 10:59)), date(2019, 1, 4));
    }
}
