use std::fs;
use std::io;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::TimeDelta;
use chrono_tz::Tz;
use log::trace;
use serde::de::DeserializeOwned;
use serde::ser;

mod macros;

/// Serializes a duration as hours, rounded to two decimal places.
pub fn serialize_hours<S>(duration: &TimeDelta, s: S) -> Result<S::Ok, S::Error>
where
    S: ser::Serializer,
{
    let hours = duration.num_seconds() as f64 / 3600.0;
    s.serialize_f64((hours * 100.0).round() / 100.0)
}

pub fn serialize_timezone<S>(timezone: &Tz, s: S) -> Result<S::Ok, S::Error>
where
    S: ser::Serializer,
{
    s.serialize_str(timezone.name())
}

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(64 * 1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

/// Turns a name like `Primary On Call` into `primary_on_call`, so it can be
/// used as a file name.
///
/// Everything except letters, digits, `-` and `_` becomes `_`, so a name
/// like `Ops/On Call` can not point into another directory.
#[must_use]
pub fn normalise_file_stem(name: &str) -> String {
    let stem: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "unnamed".to_string()
    } else {
        stem
    }
}

pub mod serde_toml_local_date {
    use chrono::NaiveDate;
    use serde::de::{self, Deserialize};
    use toml::value::Datetime;

    // NOTE: `toml::value::Datetime` is used, because
    // `toml::value::Date` does not implement `Deserialize`

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let date = Datetime::deserialize(deserializer)?
            .date
            .ok_or_else(|| de::Error::custom("expected a date"))?;

        NaiveDate::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month),
            u32::from(date.day),
        )
        .ok_or_else(|| {
            de::Error::custom(format!(
                "{:04}-{:02}-{:02} is not a valid date",
                date.year, date.month, date.day
            ))
        })
    }
}

pub mod serde_toml_offset_datetime {
    use chrono::{DateTime, FixedOffset};
    use serde::de::{self, Deserialize};
    use toml::value::Datetime;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let datetime = Datetime::deserialize(deserializer)?;

        if datetime.offset.is_none() {
            return Err(de::Error::custom(format!(
                "the date time {} is missing an offset like `+13:00` or `Z`",
                datetime
            )));
        }

        DateTime::parse_from_rfc3339(&datetime.to_string()).map_err(de::Error::custom)
    }
}

pub mod serde_clock_time {
    use chrono::NaiveTime;
    use serde::de::{self, Deserialize};

    /// Parses times of the form `08:00`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;

        NaiveTime::parse_from_str(&string, "%H:%M").map_err(|e| {
            de::Error::custom(format!("\"{}\" is not a time like 08:00: {}", string, e))
        })
    }
}
