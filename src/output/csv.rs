use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use csv::Writer;
use log::{info, warn};

use crate::output::{OutputData, Outputter, Schedule};
use crate::time::format_duration;
use crate::utils;

const HEADER: [&str; 7] = [
    "User",
    "BusinessHours",
    "AfterHours",
    "Weekend",
    "StatDays",
    "CompanyDays",
    "Total",
];

/// Writes one CSV file per schedule into a directory.
///
/// The files are named after the schedule, `Primary On Call` is written to
/// `primary_on_call.csv`. Schedules whose names end up the same get a
/// counter, the second one is written to `primary_on_call_2.csv`.
#[derive(Debug, Clone)]
pub struct CsvOutputter {
    directory: PathBuf,
}

impl CsvOutputter {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The file name of every schedule, in the same order.
    fn file_names(schedules: &[Schedule]) -> Vec<String> {
        let mut used = HashSet::new();

        schedules
            .iter()
            .map(|schedule| {
                let stem = utils::normalise_file_stem(schedule.name.as_str());
                let mut name = format!("{}.csv", stem);
                let mut counter = 1;

                while !used.insert(name.clone()) {
                    counter += 1;
                    name = format!("{}_{}.csv", stem, counter);
                }

                if counter > 1 {
                    warn!(
                        "schedule {} has the same file name as another schedule, using \"{}\"",
                        schedule.name, name
                    );
                }

                name
            })
            .collect()
    }

    /// The file the schedule is written to, if `data` has a schedule with
    /// this name.
    #[must_use]
    pub fn path_for(&self, data: &OutputData, schedule: &str) -> Option<PathBuf> {
        let schedules = data.schedules();

        schedules
            .iter()
            .zip(Self::file_names(schedules))
            .find(|(candidate, _)| candidate.name.as_str() == schedule)
            .map(|(_, name)| self.directory.join(name))
    }

    fn write_schedule(path: &Path, schedule: &Schedule) -> anyhow::Result<()> {
        let mut writer = Writer::from_path(path)?;

        writer.write_record(HEADER)?;
        for summary in &schedule.user_shifts {
            let durations = &summary.durations;
            writer.write_record(&[
                summary.user.name.clone(),
                format_duration(durations.business),
                format_duration(durations.after_hours),
                format_duration(durations.weekend),
                format_duration(durations.stat),
                format_duration(durations.company_day),
                format_duration(durations.on_call),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Outputter for CsvOutputter {
    fn print(&self, data: &OutputData) -> anyhow::Result<()> {
        fs::create_dir_all(&self.directory)
            .with_context(|| format!("failed to create `{}`", self.directory.display()))?;
        let directory = dunce::canonicalize(&self.directory)
            .with_context(|| format!("failed to resolve `{}`", self.directory.display()))?;

        let schedules = data.schedules();
        for (schedule, name) in schedules.iter().zip(Self::file_names(schedules)) {
            let path = directory.join(name);
            info!("writing schedule {} to \"{}\"", schedule.name, path.display());

            Self::write_schedule(&path, schedule)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
        }

        Ok(())
    }
}
