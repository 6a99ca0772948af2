//! Cross-cutting helpers shared by the pipeline stages.

pub mod math;
