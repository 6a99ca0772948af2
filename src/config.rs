//! Experiment configuration.
//!
//! Configuration is passed explicitly into constructors so parallel
//! sessions and tests run with independent settings instead of sharing
//! ambient state.

use std::env;

use serde::{Deserialize, Serialize};

use crate::aggregator::selection::SelectionPolicy;

/// Scenario ids shown when no explicit policy is configured.
pub const DEFAULT_FIXED_SCENARIOS: [u32; 5] = [1, 2, 3, 5, 8];

/// Vertical axis range shared by every chart condition; never derived
/// from the data.
pub const DEFAULT_VALUE_AXIS_RANGE: [f64; 2] = [0.0, 100.0];

/// Settings for one aggregator/session instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub value_axis_range: [f64; 2],
    pub selection: SelectionPolicy,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            value_axis_range: DEFAULT_VALUE_AXIS_RANGE,
            selection: SelectionPolicy::Fixed {
                scenarios: DEFAULT_FIXED_SCENARIOS.to_vec(),
            },
        }
    }
}

/// Current runtime environment from `FORESIGHT_ENV`, defaulting to sandbox.
pub fn get_environment() -> String {
    env::var("FORESIGHT_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
