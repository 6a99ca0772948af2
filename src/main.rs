use dotenvy::dotenv;
use foresight::config::AggregatorConfig;
use foresight::logging;
use foresight::models::{MonthDay, ProcessedDataset, RawRecord};
use foresight::session::ExperimentSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let mut session = ExperimentSession::new(AggregatorConfig::default());
    let records = sample_records()?;

    let dataset = session.process(records, "05/01")?;
    println!("Cutoff 05/01:");
    print_dataset(&dataset);
    println!();

    let dataset = session.reprocess("05/03")?;
    println!("Cutoff 05/03 (same scenario subset):");
    print_dataset(&dataset);

    Ok(())
}

fn sample_records() -> Result<Vec<RawRecord>, Box<dyn std::error::Error>> {
    let mut records = Vec::new();
    for (entity, base) in [("City A", 52.0), ("City B", 47.0)] {
        for day in 1..=5 {
            records.push(RawRecord::historical(
                entity.to_string(),
                MonthDay::parse(&format!("05/{:02}", day))?,
                base + day as f64 * 0.8,
            ));
        }
        for scenario in 1..=8 {
            for day in 1..=3 {
                records.push(RawRecord::prediction(
                    entity.to_string(),
                    scenario,
                    MonthDay::parse(&format!("06/{:02}", day))?,
                    base + 4.0 + scenario as f64 * 0.5 + day as f64 * 0.6,
                ));
            }
        }
    }
    Ok(records)
}

fn print_dataset(dataset: &ProcessedDataset) {
    println!("  Scenarios: {:?}", dataset.selected_scenarios);
    println!(
        "  Axis range: [{:.1}, {:.1}]",
        dataset.value_axis_range[0], dataset.value_axis_range[1]
    );
    for (entity, series) in &dataset.series_by_entity {
        println!("  {}:", entity);
        println!("    Historical points: {}", series.historical.len());
        println!("    Alternative points: {}", series.alternatives.len());
        if let Some(point) = dataset.aggregated_by_entity[entity].first() {
            println!("    First mean: {} -> {:.2}", point.date, point.value);
        }
        if let Some(band) = dataset.bounds_by_entity[entity].first() {
            println!(
                "    First band: {} -> [{:.2}, {:.2}]",
                band.date, band.min, band.max
            );
        }
    }
}
