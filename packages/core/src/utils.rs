// ABOUTME: Shared utility functions for LearnPath
// ABOUTME: ID generation, calendar-day helpers and lenient serde adapters

use chrono::NaiveDate;

/// Generate a unique, prefixed entity ID such as `rm-V1StGXR8_Z`
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, nanoid::nanoid!(10))
}

/// Whole calendar days from `earlier` to `later` (negative when `later` is before `earlier`)
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Serde helpers for calendar dates that use `""` for "unset"
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_day(s).map(Some).map_err(serde::de::Error::custom),
        }
    }

    /// Accepts `YYYY-MM-DD` as well as full RFC 3339 timestamps (date part is kept)
    pub(crate) fn parse_day(s: &str) -> Result<NaiveDate, String> {
        if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(day);
        }
        chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.date_naive())
            .map_err(|e| format!("invalid date '{}': {}", s, e))
    }
}

/// Percentages stored as any JSON number; fractions are floored and the result clamped to 0..=100
pub mod percent {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(from_f64(raw))
    }

    pub(crate) fn from_f64(raw: f64) -> u8 {
        if raw.is_nan() {
            return 0;
        }
        raw.floor().clamp(0.0, 100.0) as u8
    }
}
