//! Output formatting utilities

use std::time::Duration;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;

use clientlink_core::domain::money::group_thousands;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Spinner on stderr while a slow backend call runs.
///
/// Hidden when `visible` is false so JSON output and fast calls stay quiet.
pub fn spinner(msg: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Format an amount with its currency, e.g. "$25,000" or "7,500 EUR"
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let grouped = group_thousands(amount);
    if currency == "USD" {
        match grouped.strip_prefix('-') {
            Some(abs) => format!("-${}", abs),
            None => format!("${}", grouped),
        }
    } else {
        format!("{} {}", grouped, currency)
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2_048_576), "2.0 MB");
        assert_eq!(format_size(15_728_640), "15.0 MB");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(25_000, 0), "USD"), "$25,000");
        assert_eq!(format_money(Decimal::new(-7_500, 0), "USD"), "-$7,500");
        assert_eq!(format_money(Decimal::new(1_250, 0), "EUR"), "1,250 EUR");
    }
}
