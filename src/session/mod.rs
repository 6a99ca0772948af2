//! Participant session lifecycle around the aggregation pipeline.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::aggregator::pipeline::SeriesAggregator;
use crate::config::AggregatorConfig;
use crate::error::PipelineError;
use crate::models::dataset::ProcessedDataset;
use crate::models::date::MonthDay;
use crate::models::series::RawRecord;

/// One participant's view of the experiment data.
///
/// The session owns the aggregator instance. The survey runner calls
/// [`ExperimentSession::process`] once when the raw feed arrives and
/// [`ExperimentSession::reprocess`] whenever the participant-visible
/// "today" boundary moves; the scenario subset fixed on the first call
/// survives every later move.
pub struct ExperimentSession {
    config: AggregatorConfig,
    aggregator: Option<SeriesAggregator>,
    started_at: DateTime<Utc>,
}

impl ExperimentSession {
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            config,
            aggregator: None,
            started_at: Utc::now(),
        }
    }

    /// When the session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The scenario subset fixed for this session, once data is loaded.
    pub fn selected_scenarios(&self) -> Option<&[u32]> {
        self.aggregator.as_ref().map(|a| a.selected_scenarios())
    }

    /// Ingest the raw feed and derive the dataset for `cutoff`.
    ///
    /// The first call fixes the scenario subset. If fresh records are
    /// supplied later the partition is rebuilt but the subset survives.
    pub fn process(
        &mut self,
        records: Vec<RawRecord>,
        cutoff: &str,
    ) -> Result<ProcessedDataset, PipelineError> {
        let cutoff = MonthDay::parse(cutoff)?;
        let aggregator = match &self.aggregator {
            Some(existing) => SeriesAggregator::with_selection(
                self.config.clone(),
                records,
                existing.selected_scenarios().to_vec(),
            )?,
            None => SeriesAggregator::initialize(self.config.clone(), records)?,
        };
        let dataset = aggregator.process(cutoff);
        info!(
            scenarios = ?aggregator.selected_scenarios(),
            cutoff = %cutoff,
            "session dataset processed"
        );
        self.aggregator = Some(aggregator);
        Ok(dataset)
    }

    /// Re-derive the dataset for a new cutoff using the retained partition
    /// and the already-fixed scenario subset.
    pub fn reprocess(&self, cutoff: &str) -> Result<ProcessedDataset, PipelineError> {
        let cutoff = MonthDay::parse(cutoff)?;
        let aggregator = self
            .aggregator
            .as_ref()
            .ok_or(PipelineError::NotInitialized)?;
        Ok(aggregator.process(cutoff))
    }
}
