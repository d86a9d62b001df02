//! Date of birth as it travels over the wire.
//!
//! Clients send free-form date/time strings. We keep the exact text so a pet reads back
//! byte-for-byte as it was written, and keep the parsed UTC instant for day matching.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Accepted layouts besides RFC 3339. Offset-less values are read as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid date/time: {0:?}")]
pub struct InvalidDateOfBirth(pub String);

/// A validated date of birth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOfBirth {
    raw: String,
    instant: DateTime<Utc>,
}

impl DateOfBirth {
    pub fn parse(input: &str) -> Result<Self, InvalidDateOfBirth> {
        let text = input.trim();
        let instant = parse_instant(text).ok_or_else(|| InvalidDateOfBirth(input.to_string()))?;
        Ok(Self {
            raw: input.to_string(),
            instant,
        })
    }

    /// The text exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Calendar day in UTC.
    pub fn day(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// True when both values fall on the same UTC calendar day, whatever the time of day.
    pub fn same_day(&self, other: &DateOfBirth) -> bool {
        self.day() == other.day()
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl Serialize for DateOfBirth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for DateOfBirth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateOfBirth::parse(&raw).map_err(serde::de::Error::custom)
    }
}
