//! Month/day calendar dates as carried by the forecast record feed.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PipelineError;

// Day-in-month validation runs against a leap year so "02/29" is accepted.
const VALIDATION_YEAR: i32 = 2024;

/// Calendar date in `MM/DD` wire form.
///
/// The feed carries no year component; ordering and equality are defined on
/// the (month, day) pair against a single implied year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Parse a `MM/DD` string (leading zeros optional).
    pub fn parse(input: &str) -> Result<Self, PipelineError> {
        let mut parts = input.splitn(2, '/');
        let month = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
        let day = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
        match (month, day) {
            (Some(month), Some(day))
                if NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day).is_some() =>
            {
                Ok(Self { month, day })
            }
            _ => Err(PipelineError::InvalidInput(format!(
                "invalid date '{}': expected MM/DD",
                input
            ))),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Resolve against a concrete year, e.g. when exporting to timestamped
    /// storage.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MonthDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}
