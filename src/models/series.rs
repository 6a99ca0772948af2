//! Raw forecast feed records.

use serde::{Deserialize, Serialize};

use super::date::MonthDay;

/// Which series a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Historical,
    Prediction,
}

/// One labeled data point from the raw feed.
///
/// `scenario_id` is present only on prediction records and names which of
/// the parallel forecast runs the point belongs to. For a given
/// (entity, scenario) pair the feed carries at most one point per date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub entity: String,
    pub kind: SeriesKind,
    pub date: MonthDay,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scenario_id: Option<u32>,
}

impl RawRecord {
    pub fn historical(entity: String, date: MonthDay, value: f64) -> Self {
        Self {
            entity,
            kind: SeriesKind::Historical,
            date,
            value,
            scenario_id: None,
        }
    }

    pub fn prediction(entity: String, scenario_id: u32, date: MonthDay, value: f64) -> Self {
        Self {
            entity,
            kind: SeriesKind::Prediction,
            date,
            value,
            scenario_id: Some(scenario_id),
        }
    }
}
