use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::utils;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShiftFile {
    #[serde(default, rename = "shift")]
    shifts: Vec<ShiftEntry>,
}

impl ShiftFile {
    pub fn shifts(&self) -> &[ShiftEntry] {
        &self.shifts
    }
}

/// A single on-call shift as it was exported from the scheduling tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShiftEntry {
    schedule: String,
    user: String,
    timezone: Option<String>,
    #[serde(with = "utils::serde_toml_offset_datetime")]
    start: DateTime<FixedOffset>,
    #[serde(with = "utils::serde_toml_offset_datetime")]
    end: DateTime<FixedOffset>,
}

impl ShiftEntry {
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }
}
