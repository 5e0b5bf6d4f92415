mod utils;

pub mod attribution;
pub mod datasources;
pub mod input;
pub mod output;
pub mod time;

use std::path::Path;

use log::info;

use crate::attribution::{schedule_user_shifts, ScheduleUserShifts};
use crate::datasources::CategorySource;
use crate::input::Config;
use crate::output::OutputData;
use crate::time::{format_duration, PrettyDuration};

/// Attributes all shifts to their categories and summarises them.
#[must_use]
pub fn tally(config: &Config, shifts: &ScheduleUserShifts) -> OutputData {
    let sources = config.category_sources();
    info!(
        "{} company days, {} stat holidays, {} weekends and {} after-hours spans",
        sources.company_days().spans().len(),
        sources.stat_holidays().spans().len(),
        sources.weekends().spans().len(),
        sources.after_hours().spans().len()
    );

    let results = schedule_user_shifts(shifts, &sources);
    let data = OutputData::new(&results, config.period());

    for (user, totals) in data.totals_by_user() {
        info!(
            "{} was on call for {} ({})",
            user,
            format_duration(totals.durations.on_call),
            PrettyDuration::from(totals.durations.on_call)
        );
    }

    data
}

/// Reads the shifts of the reporting period from `path` and tallies them.
pub fn tally_file(config: &Config, path: impl AsRef<Path>) -> anyhow::Result<OutputData> {
    let window = config.period().to_span(config.timezone());
    let shifts = input::read_shifts(path, config.timezone(), &window)?;

    Ok(tally(config, &shifts))
}
