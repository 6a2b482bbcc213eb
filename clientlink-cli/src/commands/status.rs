//! Status command - record counts across the backends

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{get_context, get_logger, track};
use crate::output::create_table;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let status = track(&logger, "status", "all", ctx.status_service.get_status().await)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Integration Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec!["Accounts", &status.total_accounts.to_string()]);
    table.add_row(vec!["Sub-accounts", &status.total_sub_accounts.to_string()]);
    table.add_row(vec!["Work items", &status.total_work_items.to_string()]);
    table.add_row(vec!["Files", &status.total_files.to_string()]);
    table.add_row(vec!["Invoices", &status.total_invoices.to_string()]);
    table.add_row(vec!["Payments", &status.total_payments.to_string()]);

    println!("{}", table);
    println!();

    if !status.accounts.is_empty() {
        println!("{}", "Accounts".bold());
        let mut accounts = create_table();
        accounts.set_header(vec!["ID", "Name", "Company"]);
        for a in &status.accounts {
            accounts.add_row(vec![&a.id, &a.name, &a.company]);
        }
        println!("{}", accounts);
    }

    let latency = if ctx.config.simulate_latency { "on".yellow() } else { "off".green() };
    println!("Simulated latency: {}", latency);

    Ok(())
}
