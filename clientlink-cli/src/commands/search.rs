//! Search command - find accounts, sub-accounts and work items

use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color};

use super::{get_context, get_logger, track};
use crate::output::{create_table, info, spinner, warning};
use clientlink_core::services::search::{normalize_query, MIN_QUERY_CHARS};
use clientlink_core::SearchKind;

fn kind_cell(kind: SearchKind) -> Cell {
    match kind {
        SearchKind::Account => Cell::new("account").fg(Color::Cyan),
        SearchKind::SubAccount => Cell::new("sub-account").fg(Color::Magenta),
        SearchKind::WorkItem => Cell::new("work item").fg(Color::Green),
    }
}

pub async fn run(query: &str, account: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let pb = spinner("Searching...", ctx.config.simulate_latency && !json);
    let result = match account {
        Some(account_id) => ctx.search_service.search_within_account(query, account_id).await,
        None => ctx.search_service.search(query).await,
    };
    pb.finish_and_clear();
    let results = track(&logger, "search", "search", result)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        if normalize_query(query).is_none() {
            info(&format!("Type at least {} characters to search.", MIN_QUERY_CHARS));
        } else {
            warning(&format!("No matches for \"{}\".", query.trim()));
        }
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["Type", "ID", "Title", "Subtitle", "Details", "Status"]);

    for r in &results {
        table.add_row(vec![
            kind_cell(r.kind),
            Cell::new(&r.id),
            Cell::new(&r.title),
            Cell::new(&r.subtitle),
            Cell::new(r.description.as_deref().unwrap_or("")),
            Cell::new(r.status.as_deref().unwrap_or("")),
        ]);
    }

    println!("{}", table);
    println!("{} result(s)", results.len().to_string().bold());

    Ok(())
}
