//! Unit tests for raw feed record models

use foresight::models::{MonthDay, RawRecord, SeriesKind};

#[test]
fn test_deserialize_prediction_record() {
    let json = r#"{"entity":"City A","kind":"prediction","date":"06/01","value":20.0,"scenarioId":3}"#;
    let record: RawRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.entity, "City A");
    assert_eq!(record.kind, SeriesKind::Prediction);
    assert_eq!(record.date, MonthDay::parse("06/01").unwrap());
    assert_eq!(record.value, 20.0);
    assert_eq!(record.scenario_id, Some(3));
}

#[test]
fn test_deserialize_historical_without_scenario() {
    let json = r#"{"entity":"City B","kind":"historical","date":"05/02","value":11.0}"#;
    let record: RawRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.kind, SeriesKind::Historical);
    assert_eq!(record.scenario_id, None);
}

#[test]
fn test_serialize_skips_absent_scenario_id() {
    let record = RawRecord::historical(
        "City A".to_string(),
        MonthDay::parse("05/01").unwrap(),
        10.0,
    );
    let json = serde_json::to_string(&record).unwrap();
    assert!(!json.contains("scenarioId"));
}

#[test]
fn test_constructors_set_kind() {
    let date = MonthDay::parse("06/01").unwrap();
    let historical = RawRecord::historical("City A".to_string(), date, 10.0);
    assert_eq!(historical.kind, SeriesKind::Historical);
    assert!(historical.scenario_id.is_none());

    let prediction = RawRecord::prediction("City A".to_string(), 2, date, 24.0);
    assert_eq!(prediction.kind, SeriesKind::Prediction);
    assert_eq!(prediction.scenario_id, Some(2));
}
