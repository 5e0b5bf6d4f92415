use core::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::TimeDelta;
use chrono_tz::Tz;
use derive_more::{Display, From};
use serde::Serialize;

use crate::time::{total_duration, AttributedSpans, Span};

/// Somebody who is on call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{name}")]
pub struct User {
    name: String,
    timezone: Tz,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, timezone: Tz) -> Self {
        Self {
            name: name.into(),
            timezone,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.timezone.name().cmp(other.timezone.name()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize)]
#[serde(transparent)]
pub struct ScheduleName(String);

impl ScheduleName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScheduleName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The shifts of every user.
pub type UserShifts = BTreeMap<User, Vec<Span>>;

/// The shifts of every user in every schedule.
pub type ScheduleUserShifts = BTreeMap<ScheduleName, UserShifts>;

/// The attributed shifts of one user in one schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserShiftResults {
    user: User,
    schedule: ScheduleName,
    shifts: Vec<Span>,
    breakdown: AttributedSpans,
}

impl UserShiftResults {
    #[must_use]
    pub fn new(
        user: User,
        schedule: ScheduleName,
        shifts: Vec<Span>,
        breakdown: AttributedSpans,
    ) -> Self {
        Self {
            user,
            schedule,
            shifts,
            breakdown,
        }
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub const fn schedule(&self) -> &ScheduleName {
        &self.schedule
    }

    #[must_use]
    pub fn shifts(&self) -> &[Span] {
        &self.shifts
    }

    #[must_use]
    pub const fn breakdown(&self) -> &AttributedSpans {
        &self.breakdown
    }

    #[must_use]
    pub fn total_shifts(&self) -> usize {
        self.shifts.len()
    }

    /// The duration of the shifts before they were attributed.
    #[must_use]
    pub fn shift_duration(&self) -> TimeDelta {
        total_duration(&self.shifts)
    }
}
