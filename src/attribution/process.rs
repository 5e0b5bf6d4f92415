use std::collections::BTreeMap;

use chrono::TimeDelta;
use log::{debug, error, log_enabled, trace, Level};
use rayon::prelude::*;

use crate::attribution::{attribute_shift, ScheduleName, ScheduleUserShifts, User, UserShiftResults};
use crate::datasources::CategorySources;
use crate::time::{PrettyDuration, Span};

/// Attributes the shifts of every user in every schedule.
///
/// The users of a schedule are ordered by their name.
#[must_use]
pub fn schedule_user_shifts(
    shifts: &ScheduleUserShifts,
    sources: &CategorySources,
) -> BTreeMap<ScheduleName, Vec<UserShiftResults>> {
    let jobs: Vec<(&ScheduleName, &User, &Vec<Span>)> = shifts
        .iter()
        .flat_map(|(schedule, users)| {
            users
                .iter()
                .map(move |(user, shifts)| (schedule, user, shifts))
        })
        .collect();

    let results: Vec<UserShiftResults> = jobs
        .into_par_iter()
        .map(|(schedule, user, shifts)| {
            let breakdown = attribute_shift(shifts, sources);
            let result =
                UserShiftResults::new(user.clone(), schedule.clone(), shifts.clone(), breakdown);
            check_result(&result);
            result
        })
        .collect();

    let mut output: BTreeMap<ScheduleName, Vec<UserShiftResults>> = BTreeMap::new();
    for result in results {
        output
            .entry(result.schedule().clone())
            .or_default()
            .push(result);
    }

    for (schedule, results) in &output {
        let total = results
            .iter()
            .fold(TimeDelta::zero(), |total, result| total + result.breakdown().total_dur());
        debug!(
            "total time from schedule {}: {}",
            schedule,
            PrettyDuration::from(total)
        );
    }

    output
}

fn check_result(result: &UserShiftResults) {
    let shift_duration = result.shift_duration();
    let attributed_duration = result.breakdown().total_dur();

    if log_enabled!(Level::Trace) {
        trace!("{}'s shifts in {}:", result.user(), result.schedule());
        for shift in result.shifts() {
            trace!("\t{} ({})", shift, PrettyDuration::from(shift.duration()));
        }
        trace!("{}'s breakdown:", result.user());
        for part in result.breakdown() {
            trace!("\t{} ({})", part, PrettyDuration::from(part.duration()));
        }
    }

    if shift_duration != attributed_duration {
        error!(
            "the shifts of {} in {} last {}, but {} have been attributed",
            result.user(),
            result.schedule(),
            PrettyDuration::from(shift_duration),
            PrettyDuration::from(attributed_duration)
        );
    }
}
