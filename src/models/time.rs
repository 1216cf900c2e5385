//! Wire formats for calendar values: dates are `YYYY-MM-DD`, times of day
//! are `HH:MM` (24-hour). Both are kept exact so existing boards can read
//! what we write.

use chrono::{NaiveDate, NaiveTime};

use crate::error::PlannerError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(s: &str) -> Result<NaiveDate, PlannerError> {
    // chrono accepts unpadded fields, the wire format does not
    if s.len() != 10 {
        return Err(PlannerError::invalid_date(s, "YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| PlannerError::invalid_date(s, "YYYY-MM-DD"))
}

pub fn parse_time(s: &str) -> Result<NaiveTime, PlannerError> {
    if s.len() != 5 {
        return Err(PlannerError::invalid_date(s, "HH:MM"));
    }
    NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|_| PlannerError::invalid_date(s, "HH:MM"))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// `#[serde(with = "ymd_opt")]` for `Option<NaiveDate>`.
pub mod ymd_opt {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_str(&super::format_date(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| super::parse_date(&s).map_err(|e| serde::de::Error::custom(e.message)))
            .transpose()
    }
}

/// `#[serde(with = "hhmm_opt")]` for `Option<NaiveTime>`.
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&super::format_time(*t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => super::parse_time(&s)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(e.message)),
            None => Ok(None),
        }
    }
}
