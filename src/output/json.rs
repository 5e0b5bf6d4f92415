use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::info;
use serde::Serialize;

use crate::output::{OutputData, Outputter, UserTotals};
use crate::utils;

/// Writes the totals of every user as JSON.
#[derive(Debug, Clone)]
pub struct JsonOutputter {
    path: PathBuf,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    period: String,
    schedules: BTreeMap<&'a str, BTreeMap<&'a str, UserTotals>>,
    users: BTreeMap<String, UserTotals>,
}

impl JsonOutputter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn to_json(data: &OutputData) -> anyhow::Result<String> {
        let schedules: BTreeMap<&str, BTreeMap<&str, UserTotals>> = data
            .schedules()
            .iter()
            .map(|schedule| {
                let users = schedule
                    .user_shifts
                    .iter()
                    .map(|summary| {
                        (
                            summary.user.name.as_str(),
                            UserTotals {
                                durations: summary.durations,
                                company_days: summary.company_days,
                                total_shifts: summary.total_shifts,
                            },
                        )
                    })
                    .collect();

                (schedule.name.as_str(), users)
            })
            .collect();

        let report = Report {
            period: data.period().label(),
            schedules,
            users: data.totals_by_user(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl Outputter for JsonOutputter {
    fn print(&self, data: &OutputData) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!("writing totals to \"{}\"", self.path.display());
        utils::write(&self.path, Self::to_json(data)?)
            .with_context(|| format!("failed to write `{}`", self.path.display()))?;

        Ok(())
    }
}
