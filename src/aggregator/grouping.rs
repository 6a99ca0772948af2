//! Per-date grouping over the scenario-restricted prediction points.

use std::collections::BTreeMap;

use crate::common::math;
use crate::models::dataset::{BandPoint, ScenarioPoint, SeriesPoint};
use crate::models::date::MonthDay;

/// Group values by exact calendar date.
///
/// Dates with no contributing points never appear; there is no zero-fill
/// and no interpolation across gaps.
pub fn group_by_date(points: &[ScenarioPoint]) -> BTreeMap<MonthDay, Vec<f64>> {
    let mut grouped: BTreeMap<MonthDay, Vec<f64>> = BTreeMap::new();
    for point in points {
        grouped.entry(point.date).or_default().push(point.value);
    }
    grouped
}

/// Per-date arithmetic mean, ascending by date.
pub fn mean_series(points: &[ScenarioPoint]) -> Vec<SeriesPoint> {
    group_by_date(points)
        .into_iter()
        .filter_map(|(date, values)| math::mean(&values).map(|value| SeriesPoint { date, value }))
        .collect()
}

/// Per-date [min, max, mean] envelope, ascending by date.
pub fn envelope_series(points: &[ScenarioPoint]) -> Vec<BandPoint> {
    group_by_date(points)
        .into_iter()
        .filter_map(|(date, values)| {
            let (min, max) = math::min_max(&values)?;
            let mean = math::mean(&values)?;
            Some(BandPoint {
                date,
                min,
                max,
                mean,
            })
        })
        .collect()
}
