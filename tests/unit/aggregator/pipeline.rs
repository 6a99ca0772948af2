//! Unit tests for the series aggregation pipeline

use approx::assert_relative_eq;
use foresight::aggregator::{SelectionPolicy, SeriesAggregator};
use foresight::config::AggregatorConfig;
use foresight::error::PipelineError;
use foresight::models::{MonthDay, RawRecord};

fn date(input: &str) -> MonthDay {
    MonthDay::parse(input).unwrap()
}

fn fixed_config(scenarios: Vec<u32>) -> AggregatorConfig {
    AggregatorConfig {
        value_axis_range: [0.0, 100.0],
        selection: SelectionPolicy::Fixed { scenarios },
    }
}

/// Entity A: historical 05/01-05/03 valued 10/11/12, scenarios {1,2} each
/// with one prediction at 06/01 valued 20 and 24.
fn worked_example_records() -> Vec<RawRecord> {
    vec![
        RawRecord::historical("A".to_string(), date("05/01"), 10.0),
        RawRecord::historical("A".to_string(), date("05/02"), 11.0),
        RawRecord::historical("A".to_string(), date("05/03"), 12.0),
        RawRecord::prediction("A".to_string(), 1, date("06/01"), 20.0),
        RawRecord::prediction("A".to_string(), 2, date("06/01"), 24.0),
    ]
}

#[test]
fn test_worked_example() {
    let aggregator =
        SeriesAggregator::initialize(fixed_config(vec![1, 2]), worked_example_records()).unwrap();
    let dataset = aggregator.process(date("05/02"));

    let series = &dataset.series_by_entity["A"];
    let historical: Vec<(String, f64)> = series
        .historical
        .iter()
        .map(|p| (p.date.to_string(), p.value))
        .collect();
    assert_eq!(
        historical,
        vec![("05/02".to_string(), 11.0), ("05/03".to_string(), 12.0)]
    );

    let aggregated = &dataset.aggregated_by_entity["A"];
    assert_eq!(aggregated.len(), 1);
    assert_eq!(aggregated[0].date, date("06/01"));
    assert_relative_eq!(aggregated[0].value, 22.0);

    let bounds = &dataset.bounds_by_entity["A"];
    assert_eq!(bounds.len(), 1);
    assert_eq!(bounds[0].date, date("06/01"));
    assert_relative_eq!(bounds[0].min, 20.0);
    assert_relative_eq!(bounds[0].max, 24.0);
    assert_relative_eq!(bounds[0].mean, 22.0);
}

#[test]
fn test_empty_records_rejected() {
    let err = SeriesAggregator::initialize(fixed_config(vec![1]), Vec::new()).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[test]
fn test_cutoff_excludes_earlier_historical() {
    let aggregator =
        SeriesAggregator::initialize(fixed_config(vec![1, 2]), worked_example_records()).unwrap();
    let cutoff = date("05/03");
    let dataset = aggregator.process(cutoff);
    let historical = &dataset.series_by_entity["A"].historical;
    assert_eq!(historical.len(), 1);
    for point in historical {
        assert!(point.date >= cutoff);
    }
}

#[test]
fn test_output_series_are_sorted() {
    // Feed the records in scrambled order
    let mut records = vec![
        RawRecord::historical("A".to_string(), date("05/03"), 12.0),
        RawRecord::prediction("A".to_string(), 2, date("06/02"), 26.0),
        RawRecord::historical("A".to_string(), date("05/01"), 10.0),
        RawRecord::prediction("A".to_string(), 1, date("06/02"), 22.0),
        RawRecord::historical("A".to_string(), date("05/02"), 11.0),
        RawRecord::prediction("A".to_string(), 2, date("06/01"), 24.0),
        RawRecord::prediction("A".to_string(), 1, date("06/01"), 20.0),
    ];
    records.reverse();

    let aggregator = SeriesAggregator::initialize(fixed_config(vec![1, 2]), records).unwrap();
    let dataset = aggregator.process(date("05/01"));
    let series = &dataset.series_by_entity["A"];

    let historical_dates: Vec<MonthDay> = series.historical.iter().map(|p| p.date).collect();
    assert!(historical_dates.windows(2).all(|w| w[0] <= w[1]));

    let alternative_keys: Vec<(MonthDay, u32)> = series
        .alternatives
        .iter()
        .map(|p| (p.date, p.scenario_id))
        .collect();
    assert!(alternative_keys.windows(2).all(|w| w[0] <= w[1]));

    let aggregated_dates: Vec<MonthDay> =
        dataset.aggregated_by_entity["A"].iter().map(|p| p.date).collect();
    assert!(aggregated_dates.windows(2).all(|w| w[0] <= w[1]));

    let bound_dates: Vec<MonthDay> =
        dataset.bounds_by_entity["A"].iter().map(|p| p.date).collect();
    assert!(bound_dates.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_alternatives_restricted_to_selection() {
    let mut records = worked_example_records();
    records.push(RawRecord::prediction("A".to_string(), 9, date("06/01"), 99.0));

    let aggregator = SeriesAggregator::initialize(fixed_config(vec![1, 2]), records).unwrap();
    let dataset = aggregator.process(date("05/01"));

    for point in &dataset.series_by_entity["A"].alternatives {
        assert!(dataset.selected_scenarios.contains(&point.scenario_id));
    }
    // Scenario 9 must not leak into the mean either
    assert_relative_eq!(dataset.aggregated_by_entity["A"][0].value, 22.0);
}

#[test]
fn test_aggregation_ignores_historical_cutoff() {
    let aggregator =
        SeriesAggregator::initialize(fixed_config(vec![1, 2]), worked_example_records()).unwrap();
    // Cutoff past every date: historical empties, predictions are untouched
    let dataset = aggregator.process(date("12/31"));
    assert!(dataset.series_by_entity["A"].historical.is_empty());
    assert_eq!(dataset.series_by_entity["A"].alternatives.len(), 2);
    assert_eq!(dataset.aggregated_by_entity["A"].len(), 1);
    assert_eq!(dataset.bounds_by_entity["A"].len(), 1);
}

#[test]
fn test_empty_selection_degrades_to_empty_series() {
    let aggregator =
        SeriesAggregator::initialize(fixed_config(vec![40, 50]), worked_example_records())
            .unwrap();
    assert!(aggregator.selected_scenarios().is_empty());

    let dataset = aggregator.process(date("05/01"));
    assert!(dataset.series_by_entity["A"].alternatives.is_empty());
    assert!(dataset.aggregated_by_entity["A"].is_empty());
    assert!(dataset.bounds_by_entity["A"].is_empty());
    // Historical is unaffected by the scenario subset
    assert_eq!(dataset.series_by_entity["A"].historical.len(), 3);
}

#[test]
fn test_axis_range_is_configured_constant() {
    let config = AggregatorConfig {
        value_axis_range: [30.0, 90.0],
        selection: SelectionPolicy::Fixed {
            scenarios: vec![1, 2],
        },
    };
    let aggregator = SeriesAggregator::initialize(config, worked_example_records()).unwrap();
    assert_eq!(aggregator.process(date("05/01")).value_axis_range, [30.0, 90.0]);
    assert_eq!(aggregator.process(date("06/01")).value_axis_range, [30.0, 90.0]);
}

#[test]
fn test_entities_are_partitioned_independently() {
    let mut records = worked_example_records();
    records.push(RawRecord::historical("B".to_string(), date("05/01"), 40.0));
    records.push(RawRecord::prediction("B".to_string(), 1, date("06/01"), 50.0));

    let aggregator = SeriesAggregator::initialize(fixed_config(vec![1, 2]), records).unwrap();
    let dataset = aggregator.process(date("05/01"));

    assert_eq!(dataset.series_by_entity.len(), 2);
    assert_eq!(dataset.series_by_entity["B"].historical.len(), 1);
    assert_eq!(dataset.series_by_entity["B"].alternatives.len(), 1);
    assert_relative_eq!(dataset.aggregated_by_entity["B"][0].value, 50.0);
    // Entity A's numbers are untouched by B's records
    assert_relative_eq!(dataset.aggregated_by_entity["A"][0].value, 22.0);
}

#[test]
fn test_with_selection_adopts_subset() {
    let aggregator = SeriesAggregator::with_selection(
        fixed_config(vec![1, 2]),
        worked_example_records(),
        vec![2, 2, 1],
    )
    .unwrap();
    assert_eq!(aggregator.selected_scenarios(), &[1, 2]);
}

#[test]
fn test_selection_drawn_from_all_entities() {
    // Scenario 2 exists only under entity B; a fixed {1,2} policy must
    // still see it.
    let records = vec![
        RawRecord::prediction("A".to_string(), 1, date("06/01"), 20.0),
        RawRecord::prediction("B".to_string(), 2, date("06/01"), 24.0),
    ];
    let aggregator = SeriesAggregator::initialize(fixed_config(vec![1, 2]), records).unwrap();
    assert_eq!(aggregator.selected_scenarios(), &[1, 2]);
}
