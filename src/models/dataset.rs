//! Derived per-entity structures consumed by the chart conditions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::date::MonthDay;

/// A dated value on the historical or aggregated line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: MonthDay,
    pub value: f64,
}

/// A dated value attributed to one forecast scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPoint {
    pub scenario_id: u32,
    pub date: MonthDay,
    pub value: f64,
}

/// Per-date envelope across the selected scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub date: MonthDay,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Historical and scenario series for one entity, both ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySeries {
    pub historical: Vec<SeriesPoint>,
    pub alternatives: Vec<ScenarioPoint>,
}

/// Everything a rendering condition needs, rebuilt on each processing call.
///
/// `value_axis_range` is a configured constant rather than a data-derived
/// extent: the vertical scale must be identical across participants and
/// conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDataset {
    pub series_by_entity: BTreeMap<String, EntitySeries>,
    pub aggregated_by_entity: BTreeMap<String, Vec<SeriesPoint>>,
    pub bounds_by_entity: BTreeMap<String, Vec<BandPoint>>,
    pub value_axis_range: [f64; 2],
    pub selected_scenarios: Vec<u32>,
}
