//! Shared data models spanning the pipeline layers.

pub mod dataset;
pub mod date;
pub mod series;

pub use dataset::{BandPoint, EntitySeries, ProcessedDataset, ScenarioPoint, SeriesPoint};
pub use date::MonthDay;
pub use series::{RawRecord, SeriesKind};
