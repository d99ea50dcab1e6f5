//! Console and CSV rendering of simulation results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::delivery::RouteSummary;
use crate::simulation::ScenarioSummary;

/// How many decision-log rows the console report shows.
const LOG_SAMPLE_ROWS: usize = 10;

/// Print summary counts and a bounded sample of the per-parcel decision log.
pub fn print_route_report(summary: &RouteSummary) {
    println!();
    println!("{}", "=".repeat(62));
    println!("DELIVERY REPORT");
    println!("{}", "=".repeat(62));

    println!("Total parcels:      {}", summary.total);
    if summary.total > 0 {
        let total = summary.total as f64;
        println!(
            "Delivered directly: {} ({:.1}%)",
            summary.direct,
            summary.direct as f64 / total * 100.0
        );
        println!(
            "Routed to pickup:   {} ({:.1}%)",
            summary.pickup,
            summary.pickup as f64 / total * 100.0
        );
    } else {
        println!("No parcels processed.");
    }

    println!();
    println!("Decision log (first {LOG_SAMPLE_ROWS} entries):");
    println!(
        "{:<10} {:<14} {:<8} {:<10} {}",
        "Parcel", "Mailbox", "Volume", "Capacity", "Outcome"
    );
    for record in summary.log.iter().take(LOG_SAMPLE_ROWS) {
        let capacity = record.capacity.map_or("N/A", |c| c.name());
        println!(
            "{:<10} {:<14} {:<8} {:<10} {}",
            record.parcel_id,
            record.mailbox_id,
            record.volume.name(),
            capacity,
            record.outcome.tag()
        );
    }
    if summary.log.len() > LOG_SAMPLE_ROWS {
        println!("... and {} more.", summary.log.len() - LOG_SAMPLE_ROWS);
    }
    println!("{}", "=".repeat(62));
}

/// Print one aligned row per scenario.
pub fn print_scenario_table(summaries: &[ScenarioSummary]) {
    println!();
    println!("=== SCENARIO RESULTS ===");
    println!(
        "{:<12} {:>6} {:>10} {:>8} {:>7} {:>7} {:>9}",
        "Scenario", "Noise", "Entrances", "Parcels", "Direct", "Pickup", "Direct %"
    );
    for s in summaries {
        println!(
            "{:<12} {:>6.2} {:>10} {:>8} {:>7} {:>7} {:>8.1}%",
            s.name, s.noise, s.entrance_count, s.parcel_count, s.direct, s.pickup, s.direct_pct
        );
    }
}

/// Write one CSV row per scenario: name, noise, entrances, parcels, direct,
/// pickup, direct percentage.
pub fn write_scenario_csv(path: &Path, summaries: &[ScenarioSummary]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "name,noise,entrance_count,parcel_count,direct,pickup,direct_pct"
    )?;
    for s in summaries {
        writeln!(
            writer,
            "{},{},{},{},{},{},{:.1}",
            s.name, s.noise, s.entrance_count, s.parcel_count, s.direct, s.pickup, s.direct_pct
        )?;
    }

    Ok(())
}
