//! Foresight: data backbone for a forecast-viewing behavioral experiment.
//!
//! Turns a flat collection of labeled time-series records into the
//! per-entity historical, alternative, aggregated, and confidence-bound
//! series every chart condition renders. Rendering and survey flow live
//! elsewhere and only consume [`models::ProcessedDataset`].

pub mod aggregator;
pub mod common;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
