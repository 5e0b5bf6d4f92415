//! Checks the category spans that are computed for January 2019 in Auckland,
//! the period ends before the 31st.

use pager_tally::datasources::CategorySource;
use pager_tally::datetime;
use pager_tally::input::Config;
use pager_tally::time::{OnCallAttribute, Period, Span};

use chrono::NaiveDate;
use chrono_tz::Pacific::Auckland;
use pretty_assertions::assert_eq;

mod common;

use common::hours;

fn january() -> Config {
    let contents = common::DECEMBER_CONFIG
        .replace(
            "holidays = [\"Christmas Day\", \"Boxing Day\"]",
            "holidays = [\"Day after New Year's Day\", \"Wellington Anniversary Day\", \"Auckland Anniversary Day\"]",
        )
        .replace(
            "company_days = [\"24/12/2018\", \"27/12/2018\", \"28/12/2018\", \"31/12/2018\"]",
            "company_days = [\"15/01/2019\", \"23/01/2019\", \"31/01/2019\", \"01/04/2019\"]",
        );

    let mut builder = Config::from_toml(toml::from_str(&contents).unwrap());
    builder.period(
        Period::new(
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2019, 1, 31).unwrap(),
        )
        .unwrap(),
    );
    builder.build().unwrap()
}

#[test]
fn test_weekends() {
    let sources = january().category_sources();
    let weekends = sources.weekends().spans();

    assert_eq!(weekends.len(), 4);
    assert_eq!(
        weekends[0],
        Span::new(
            datetime!(2019:01:04 17:30 in Auckland),
            datetime!(2019:01:07 08:00 in Auckland)
        )
    );
    for weekend in weekends {
        assert_eq!(weekend.duration(), hours(62, 30));
    }
}

#[test]
fn test_after_hours() {
    let sources = january().category_sources();
    let after_hours = sources.after_hours().spans();

    assert_eq!(after_hours.len(), 19);
    // the period starts on a Tuesday
    assert_eq!(
        after_hours[0],
        Span::new(
            datetime!(2019:01:01 00:00 in Auckland),
            datetime!(2019:01:01 08:00 in Auckland)
        )
    );

    for span in after_hours {
        assert!(!sources
            .weekends()
            .spans()
            .iter()
            .any(|weekend| weekend.overlaps(span)));
    }
}

#[test]
fn test_stat_holidays() {
    let sources = january().category_sources();

    assert_eq!(
        sources.stat_holidays().spans(),
        &[
            Span::day(Auckland, NaiveDate::from_ymd_opt(2019, 1, 2).unwrap()),
            Span::day(Auckland, NaiveDate::from_ymd_opt(2019, 1, 21).unwrap()),
            Span::day(Auckland, NaiveDate::from_ymd_opt(2019, 1, 28).unwrap()),
        ]
    );
}

#[test]
fn test_company_days() {
    let config = january();
    let company_days = config.company_days().spans();

    // company days outside of the period are kept
    assert_eq!(company_days.len(), 4);
    assert_eq!(
        company_days[3],
        Span::new(
            datetime!(2019:04:01 00:00 in Auckland),
            datetime!(2019:04:02 00:00 in Auckland)
        )
    );
    // daylight saving time lasts until 7 April
    assert_eq!(company_days[3].start(), datetime!(2019:03:31 11:00));
}

#[test]
fn test_sources_by_priority() {
    let sources = january().category_sources();

    let counts: Vec<(OnCallAttribute, usize)> = sources
        .by_priority()
        .iter()
        .map(|source| (source.category(), source.spans().len()))
        .collect();

    assert_eq!(
        counts,
        vec![
            (OnCallAttribute::CompanyDay, 4),
            (OnCallAttribute::StatHoliday, 3),
            (OnCallAttribute::Weekend, 4),
            (OnCallAttribute::AfterHours, 19),
        ]
    );
}

#[test]
fn test_january_week() {
    let config = january();
    let contents = concat!(
        "[[shift]]\n",
        "schedule = \"Primary On Call\"\n",
        "user = \"User1\"\n",
        "start = 2019-01-14T08:00:00+13:00\n",
        "end = 2019-01-21T08:00:00+13:00\n",
    );
    let shifts = common::make_shifts(&config, contents);

    let data = pager_tally::tally(&config, &shifts);
    let durations = data.schedules()[0].user_shifts[0].durations;

    // Tuesday the 15th is a company day, Monday the 21st a holiday
    assert_eq!(durations.company_day, hours(24, 0));
    assert_eq!(durations.stat, hours(8, 0));
    assert_eq!(durations.weekend, hours(54, 30));
    assert_eq!(durations.business, hours(38, 0));
    assert_eq!(durations.after_hours, hours(43, 30));
    assert_eq!(durations.on_call, hours(7 * 24, 0));
}
