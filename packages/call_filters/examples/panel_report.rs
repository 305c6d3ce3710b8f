use anyhow::{Context, Result};
use call_filters::{
    CallQuery, CallRecord, DatasetStats, FilterPanel, FilterState, FilterUpdate, Selection,
    TransferStatus, load_panel_config,
};
use std::path::Path;
use tracing_subscriber::prelude::*;

const SAMPLE_RECORDS: &str = r#"[
    {"name": "intake-001.json", "path": "2024/03/intake-001.json", "final_outcome": "Enrollment confirmed",
     "resolution_type": "resolved_on_call", "caller_type": "parent", "primary_intent": "enrollment",
     "resolution_achieved": true, "transfer_success": null, "call_duration": 412,
     "data": {"call_summary": {"multi_case_details": false}}},
    {"name": "intake-002.json", "path": "2024/03/intake-002.json", "final_outcome": "Transferred to billing",
     "resolution_type": "transferred", "caller_type": "parent", "primary_intent": "billing",
     "resolution_achieved": false, "transfer_success": true, "call_duration": 1310,
     "data": {"call_summary": {"multi_case_details": true}}},
    {"name": "intake-003.json", "path": "2024/04/intake-003.json", "final_outcome": "Left voicemail",
     "resolution_type": "callback_scheduled", "caller_type": "staff",
     "resolution_achieved": null, "transfer_success": false, "call_duration": 95},
    {"name": "intake-004.json", "path": "2024/04/intake-004.json", "final_outcome": "Dropped",
     "resolution_type": "callback_scheduled", "caller_type": "staff",
     "call_duration": null, "data": null}
]"#;

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("call_filters=debug"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    let config = load_panel_config(Path::new(".")).context("Failed to load panel config")?;
    let records: Vec<CallRecord> =
        serde_json::from_str(SAMPLE_RECORDS).context("Failed to parse sample records")?;

    let query = CallQuery::new(&records);
    let stats = query.stats();
    let mut filters = FilterState::for_dataset(&stats);

    println!("=== All records ===");
    print_panel(&FilterPanel::build(&records, &filters, &stats, &config));

    let mut transfer = Selection::Unrestricted;
    transfer.toggle(TransferStatus::Successful, true);
    transfer.toggle(TransferStatus::NoTransfer, true);
    filters.apply(FilterUpdate::transfer_status(transfer));

    println!("\n=== Successful or no transfer ===");
    print_panel(&FilterPanel::build(&records, &filters, &stats, &config));

    println!("\n=== Search \"billing\" within filters ===");
    for record in query.filtered_search(&filters, "billing") {
        println!("  {} ({})", record.name, record.final_outcome);
    }

    print_stats(&stats);
    Ok(())
}

fn print_panel(panel: &FilterPanel) {
    println!(
        "Filtered Files: {} / {}",
        panel.summary.filtered, panel.summary.total
    );
    println!("Total Duration: {}", panel.summary.duration_display());

    for section in &panel.sections {
        println!("\n{} [{}]", section.title, section.selected);
        for option in &section.options {
            let mark = if option.checked { "x" } else { " " };
            println!("  [{}] {:<24} {}", mark, option.label, option.display);
        }
    }

    let (from, to) = panel.duration.value_display();
    println!(
        "\nCall Duration: {} .. {} (step {}s)",
        from, to, panel.duration.step
    );
}

fn print_stats(stats: &DatasetStats) {
    println!("\n=== Dataset ===");
    println!("Records: {}", stats.total_records);
    println!("Resolution types: {}", stats.resolution_types.join(", "));
    println!("Caller types: {}", stats.caller_types.join(", "));
    println!("Primary intents: {}", stats.primary_intents.join(", "));
}
