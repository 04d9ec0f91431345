//! Output formatting helpers for CLI

use crate::analysis::PackingReport;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a fraction as a percentage with no decimals
pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Print the per-container breakdown and aggregate figures of a report
pub fn print_report(report: &PackingReport) {
    print_section(&format!(
        "Packing Results ({} strategy, capacity: {})",
        report.strategy, report.capacity
    ));

    for summary in &report.containers {
        let items = summary
            .items
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "Box {}: [{}] (used: {}/{}, {})",
            summary.index,
            items,
            summary.load,
            summary.capacity,
            format_percent(summary.fill_ratio)
        );
    }

    println!("{}", "-".repeat(60));
    print_kv("Total boxes used", &report.container_count.to_string());
    print_kv("Total weight", &report.total_weight.to_string());
    print_kv(
        "Average fill ratio",
        &format_percent(report.average_fill_ratio),
    );
}
