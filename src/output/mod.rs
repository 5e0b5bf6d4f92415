//! Summaries of the attributed shifts and the ways they can be written out.

use std::collections::BTreeMap;

use chrono::TimeDelta;
use chrono_tz::Tz;
use derive_more::AddAssign;
use log::error;
use serde::Serialize;

use crate::attribution::{ScheduleName, UserShiftResults};
use crate::time::{AttributedSpan, AttributedSpans, Period, Span};
use crate::utils;

mod csv;
mod json;
mod stdout;

pub use self::csv::*;
pub use json::*;
pub use stdout::*;

/// Something that writes the summary somewhere, for example to the terminal.
pub trait Outputter {
    fn print(&self, data: &OutputData) -> anyhow::Result<()>;
}

/// How long somebody was on call in each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AddAssign, Serialize)]
pub struct TypeDurations {
    #[serde(serialize_with = "utils::serialize_hours")]
    pub on_call: TimeDelta,
    #[serde(serialize_with = "utils::serialize_hours")]
    pub business: TimeDelta,
    #[serde(serialize_with = "utils::serialize_hours")]
    pub after_hours: TimeDelta,
    #[serde(serialize_with = "utils::serialize_hours")]
    pub weekend: TimeDelta,
    #[serde(serialize_with = "utils::serialize_hours")]
    pub stat: TimeDelta,
    #[serde(serialize_with = "utils::serialize_hours")]
    pub company_day: TimeDelta,
}

impl From<&AttributedSpans> for TypeDurations {
    fn from(breakdown: &AttributedSpans) -> Self {
        Self {
            on_call: breakdown.total_dur(),
            business: breakdown.business_hours_dur(),
            after_hours: breakdown.after_hours_dur(),
            weekend: breakdown.weekend_dur(),
            stat: breakdown.stat_dur(),
            company_day: breakdown.company_day_dur(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetails {
    pub name: String,
    #[serde(serialize_with = "utils::serialize_timezone")]
    pub timezone: Tz,
}

/// A single shift together with the parts it was split into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedShift {
    pub shift: Span,
    pub parts: Vec<AttributedSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftsSummary {
    pub user: UserDetails,
    pub attributed_shifts: Vec<AttributedShift>,
    pub durations: TypeDurations,
    pub company_days: usize,
    pub total_shifts: usize,
}

impl From<&UserShiftResults> for ShiftsSummary {
    fn from(results: &UserShiftResults) -> Self {
        let breakdown = results.breakdown();

        let attributed_shifts = results
            .shifts()
            .iter()
            .map(|shift| {
                let mut parts: Vec<AttributedSpan> =
                    breakdown.overlapping(shift).copied().collect();
                parts.sort_by_key(|part| part.span().start());

                AttributedShift {
                    shift: *shift,
                    parts,
                }
            })
            .collect();

        Self {
            user: UserDetails {
                name: results.user().name().to_string(),
                timezone: results.user().timezone(),
            },
            attributed_shifts,
            durations: TypeDurations::from(breakdown),
            company_days: breakdown.company_day_count(),
            total_shifts: results.total_shifts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub name: ScheduleName,
    /// Ordered by the name of the user.
    pub user_shifts: Vec<ShiftsSummary>,
}

/// The totals of a user across all schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserTotals {
    #[serde(flatten)]
    pub durations: TypeDurations,
    pub company_days: usize,
    pub total_shifts: usize,
}

/// Everything that is needed to write a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputData {
    period: Period,
    schedules: Vec<Schedule>,
}

impl OutputData {
    #[must_use]
    pub fn new(results: &BTreeMap<ScheduleName, Vec<UserShiftResults>>, period: Period) -> Self {
        let schedules = results
            .iter()
            .map(|(name, results)| {
                let mut user_shifts: Vec<ShiftsSummary> =
                    results.iter().map(ShiftsSummary::from).collect();
                user_shifts.sort_by(|a, b| a.user.name.cmp(&b.user.name));

                Schedule {
                    name: name.clone(),
                    user_shifts,
                }
            })
            .collect();

        Self { period, schedules }
    }

    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// The schedules, ordered by their name.
    #[must_use]
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Adds up the durations of every user across all schedules.
    #[must_use]
    pub fn totals_by_user(&self) -> BTreeMap<String, UserTotals> {
        let mut totals: BTreeMap<String, UserTotals> = BTreeMap::new();

        for summary in self.schedules.iter().flat_map(|schedule| &schedule.user_shifts) {
            let entry = totals.entry(summary.user.name.clone()).or_default();
            entry.durations += summary.durations;
            entry.company_days += summary.company_days;
            entry.total_shifts += summary.total_shifts;
        }

        totals
    }

    /// Runs every outputter, an error does not stop the remaining ones.
    pub fn print_output(&self, outputs: &[&dyn Outputter]) -> Vec<anyhow::Error> {
        let mut errors = Vec::new();

        for output in outputs {
            if let Err(e) = output.print(self) {
                error!("{:?}", e);
                errors.push(e);
            }
        }

        errors
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use chrono_tz::Pacific::Auckland;
    use pretty_assertions::assert_eq;

    use crate::attribution::User;
    use crate::datetime;
    use crate::time::OnCallAttribute;

    pub(crate) fn results() -> BTreeMap<ScheduleName, Vec<UserShiftResults>> {
        let night = Span::new(
            datetime!(2018:12:05 17:30 in Auckland),
            datetime!(2018:12:06 08:00 in Auckland),
        );
        let day = Span::new(
            datetime!(2018:12:06 08:00 in Auckland),
            datetime!(2018:12:06 17:30 in Auckland),
        );
        let company_day = Span::new(
            datetime!(2018:12:24 00:00 in Auckland),
            datetime!(2018:12:25 00:00 in Auckland),
        );

        let user1 = |schedule: &str, shifts: Vec<Span>, parts: Vec<AttributedSpan>| {
            UserShiftResults::new(
                User::new("User1", Auckland),
                ScheduleName::from(schedule),
                shifts,
                parts.into_iter().collect(),
            )
        };

        let mut results = BTreeMap::new();
        results.insert(
            ScheduleName::from("Primary On Call"),
            vec![
                UserShiftResults::new(
                    User::new("User2", Auckland),
                    ScheduleName::from("Primary On Call"),
                    vec![company_day],
                    [AttributedSpan::new(company_day, OnCallAttribute::CompanyDay)]
                        .into_iter()
                        .collect(),
                ),
                user1(
                    "Primary On Call",
                    vec![Span::new(night.start(), day.end())],
                    vec![
                        AttributedSpan::new(night, OnCallAttribute::AfterHours),
                        AttributedSpan::new(day, OnCallAttribute::Business),
                    ],
                ),
            ],
        );
        results.insert(
            ScheduleName::from("Secondary"),
            vec![user1(
                "Secondary",
                vec![night],
                vec![AttributedSpan::new(night, OnCallAttribute::AfterHours)],
            )],
        );

        results
    }

    #[test]
    fn test_output_data() {
        let data = OutputData::new(&results(), Period::month(2018, 12).unwrap());

        assert_eq!(data.schedules().len(), 2);

        let primary = &data.schedules()[0];
        assert_eq!(primary.name, ScheduleName::from("Primary On Call"));
        assert_eq!(primary.user_shifts[0].user.name, "User1".to_string());
        assert_eq!(primary.user_shifts[0].total_shifts, 1);
        assert_eq!(primary.user_shifts[0].attributed_shifts[0].parts.len(), 2);
        assert_eq!(
            primary.user_shifts[0].durations,
            TypeDurations {
                on_call: TimeDelta::hours(24),
                business: TimeDelta::minutes(9 * 60 + 30),
                after_hours: TimeDelta::minutes(14 * 60 + 30),
                ..TypeDurations::default()
            }
        );
        assert_eq!(primary.user_shifts[1].company_days, 1);
    }

    #[test]
    fn test_totals_by_user() {
        let data = OutputData::new(&results(), Period::month(2018, 12).unwrap());
        let totals = data.totals_by_user();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["User1"].durations.on_call, TimeDelta::minutes(38 * 60 + 30));
        assert_eq!(totals["User1"].durations.after_hours, TimeDelta::hours(29));
        assert_eq!(totals["User1"].total_shifts, 2);
        assert_eq!(totals["User2"].durations.company_day, TimeDelta::hours(24));
        assert_eq!(totals["User2"].company_days, 1);
    }

    struct Failing;

    impl Outputter for Failing {
        fn print(&self, _: &OutputData) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("failed on purpose"))
        }
    }

    #[test]
    fn test_print_output_collects_errors() {
        let data = OutputData::new(&results(), Period::month(2018, 12).unwrap());

        let errors = data.print_output(&[&Failing, &Failing]);

        assert_eq!(errors.len(), 2);
    }
}
