//! Raw feed loading.
//!
//! The feed arrives as a static JSON resource: either a bare array of
//! records or a wrapper object whose `data` field holds the array. Both
//! shapes are accepted; everything else is an invalid-input error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PipelineError;
use crate::models::series::RawRecord;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Records(Vec<RawRecord>),
    Wrapped { data: Vec<RawRecord> },
}

/// Parse the raw feed from JSON text.
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>, PipelineError> {
    let document: RawDocument = serde_json::from_str(json)
        .map_err(|e| PipelineError::InvalidInput(format!("malformed record feed: {}", e)))?;
    let records = match document {
        RawDocument::Records(records) => records,
        RawDocument::Wrapped { data } => data,
    };
    if records.is_empty() {
        return Err(PipelineError::InvalidInput(
            "record feed is empty".to_string(),
        ));
    }
    Ok(records)
}

/// Read and parse a feed file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, PipelineError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| {
        PipelineError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_records(&json)
}
