use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use anyhow::Context;
use chrono_tz::Tz;
use log::{info, warn};
use thiserror::Error;

use crate::attribution::{ScheduleName, ScheduleUserShifts, User};
use crate::input::toml_input::ShiftFile;
use crate::input::{parse_timezone, ConfigError};
use crate::time::Span;
use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("invalid timezone for user {user}: {source}")]
    Timezone { user: String, source: ConfigError },
    #[error("user {user} has shifts in the timezones {first} and {second}")]
    ConflictingTimezone { user: String, first: Tz, second: Tz },
    #[error("the shifts {first} and {second} of {user} in {schedule} overlap")]
    Overlapping {
        schedule: ScheduleName,
        user: String,
        first: Span,
        second: Span,
    },
}

/// Reads the shifts from a TOML file.
///
/// Users without a timezone of their own use `timezone`, every shift of a
/// user has to resolve to the same one. Shifts are cut to `window`, shifts
/// outside of it are dropped.
pub fn read_shifts(
    path: impl AsRef<Path>,
    timezone: Tz,
    window: &Span,
) -> anyhow::Result<ScheduleUserShifts> {
    let path = path.as_ref();
    info!("reading shifts from \"{}\"", path.display());

    let file: ShiftFile = utils::toml_from_reader(
        File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
    )
    .with_context(|| format!("failed to parse `{}`", path.display()))?;

    Ok(collect_shifts(&file, timezone, window)?)
}

pub fn collect_shifts(
    file: &ShiftFile,
    timezone: Tz,
    window: &Span,
) -> Result<ScheduleUserShifts, ShiftError> {
    let mut result = ScheduleUserShifts::new();
    let mut timezones: BTreeMap<&str, Tz> = BTreeMap::new();

    for entry in file.shifts() {
        let user_timezone = match entry.timezone() {
            Some(name) => parse_timezone(name).map_err(|source| ShiftError::Timezone {
                user: entry.user().to_string(),
                source,
            })?,
            None => timezone,
        };

        let known = *timezones.entry(entry.user()).or_insert(user_timezone);
        if known != user_timezone {
            return Err(ShiftError::ConflictingTimezone {
                user: entry.user().to_string(),
                first: known,
                second: user_timezone,
            });
        }

        let shift = Span::new(entry.start(), entry.end());
        let Some(shift) = window.intersection(&shift).filter(|shift| !shift.is_zero()) else {
            warn!(
                "ignoring shift {} of {}, it is outside of {}",
                Span::new(entry.start(), entry.end()),
                entry.user(),
                window
            );
            continue;
        };

        result
            .entry(ScheduleName::from(entry.schedule()))
            .or_default()
            .entry(User::new(entry.user(), user_timezone))
            .or_default()
            .push(shift);
    }

    for (schedule, users) in &mut result {
        for (user, shifts) in users.iter_mut() {
            shifts.sort();

            if let Some(pair) = shifts.windows(2).find(|pair| pair[0].overlaps(&pair[1])) {
                return Err(ShiftError::Overlapping {
                    schedule: schedule.clone(),
                    user: user.name().to_string(),
                    first: pair[0],
                    second: pair[1],
                });
            }
        }
    }

    Ok(result)
}
