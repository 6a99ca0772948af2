//! The series aggregation pipeline.
//!
//! Single authoritative transform from the flat labeled record feed to the
//! per-entity structures every chart condition renders: cutoff-filtered
//! historical series, scenario-restricted alternatives, the per-date mean
//! line, and the [min, max, mean] envelope.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::config::AggregatorConfig;
use crate::error::PipelineError;
use crate::models::dataset::{EntitySeries, ProcessedDataset, ScenarioPoint, SeriesPoint};
use crate::models::date::MonthDay;
use crate::models::series::{RawRecord, SeriesKind};

use super::grouping;

/// One aggregator per participant session.
///
/// Construction partitions the feed by entity and fixes the scenario
/// subset for the lifetime of the instance; later recomputation never
/// reshuffles which forecast runs a participant sees.
#[derive(Debug)]
pub struct SeriesAggregator {
    config: AggregatorConfig,
    original: BTreeMap<String, Vec<RawRecord>>,
    selection: Vec<u32>,
}

impl SeriesAggregator {
    /// Partition the feed and choose the scenario subset via the configured
    /// policy, drawn from the full collection across all entities.
    pub fn initialize(
        config: AggregatorConfig,
        records: Vec<RawRecord>,
    ) -> Result<Self, PipelineError> {
        let original = partition(records)?;
        let available = available_scenarios(&original);
        let selection = config.selection.select(&available);
        debug!(
            entities = original.len(),
            scenarios = ?selection,
            "aggregator initialized"
        );
        Ok(Self {
            config,
            original,
            selection,
        })
    }

    /// Like [`SeriesAggregator::initialize`], but adopt an already-fixed
    /// scenario subset.
    ///
    /// Used when fresh records arrive mid-session: the partition is
    /// rebuilt while the participant's subset survives. Ids are normalized
    /// to sorted, distinct order.
    pub fn with_selection(
        config: AggregatorConfig,
        records: Vec<RawRecord>,
        mut selection: Vec<u32>,
    ) -> Result<Self, PipelineError> {
        let original = partition(records)?;
        selection.sort_unstable();
        selection.dedup();
        Ok(Self {
            config,
            original,
            selection,
        })
    }

    /// The scenario subset fixed at construction, sorted ascending.
    pub fn selected_scenarios(&self) -> &[u32] {
        &self.selection
    }

    /// Derive the chart-ready dataset for one cutoff date.
    ///
    /// Only the historical series honors the cutoff; alternatives, the
    /// mean line, and the envelope always cover every prediction date, so
    /// moving the visible "today" boundary never changes the forecast side
    /// of the chart.
    pub fn process(&self, cutoff: MonthDay) -> ProcessedDataset {
        let mut series_by_entity = BTreeMap::new();
        let mut aggregated_by_entity = BTreeMap::new();
        let mut bounds_by_entity = BTreeMap::new();

        for (entity, records) in &self.original {
            let historical = self.historical_series(records, cutoff);
            let alternatives = self.alternative_series(records);

            aggregated_by_entity.insert(entity.clone(), grouping::mean_series(&alternatives));
            bounds_by_entity.insert(entity.clone(), grouping::envelope_series(&alternatives));
            series_by_entity.insert(
                entity.clone(),
                EntitySeries {
                    historical,
                    alternatives,
                },
            );
        }

        ProcessedDataset {
            series_by_entity,
            aggregated_by_entity,
            bounds_by_entity,
            value_axis_range: self.config.value_axis_range,
            selected_scenarios: self.selection.clone(),
        }
    }

    fn historical_series(&self, records: &[RawRecord], cutoff: MonthDay) -> Vec<SeriesPoint> {
        let mut points: Vec<SeriesPoint> = records
            .iter()
            .filter(|r| r.kind == SeriesKind::Historical && r.date >= cutoff)
            .map(|r| SeriesPoint {
                date: r.date,
                value: r.value,
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points
    }

    fn alternative_series(&self, records: &[RawRecord]) -> Vec<ScenarioPoint> {
        let mut points: Vec<ScenarioPoint> = records
            .iter()
            .filter(|r| r.kind == SeriesKind::Prediction)
            .filter_map(|r| {
                let scenario_id = r.scenario_id?;
                if !self.selection.contains(&scenario_id) {
                    return None;
                }
                Some(ScenarioPoint {
                    scenario_id,
                    date: r.date,
                    value: r.value,
                })
            })
            .collect();
        points.sort_by_key(|p| (p.date, p.scenario_id));
        points
    }
}

fn partition(records: Vec<RawRecord>) -> Result<BTreeMap<String, Vec<RawRecord>>, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::InvalidInput(
            "record collection is empty".to_string(),
        ));
    }
    let mut buckets: BTreeMap<String, Vec<RawRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.entity.clone()).or_default().push(record);
    }
    Ok(buckets)
}

fn available_scenarios(buckets: &BTreeMap<String, Vec<RawRecord>>) -> BTreeSet<u32> {
    buckets
        .values()
        .flatten()
        .filter(|r| r.kind == SeriesKind::Prediction)
        .filter_map(|r| r.scenario_id)
        .collect()
}
