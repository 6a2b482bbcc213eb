//! Billing command - payments, invoices and customer summaries

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use comfy_table::{Cell, Color};

use super::{get_context, get_logger, track};
use crate::output::{create_table, format_money, spinner};
use clientlink_core::Invoice;

/// Whose records to fetch; exactly one of the two
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Owner {
    /// Customer (sub-account) ID
    #[arg(long)]
    customer: Option<String>,
    /// Work item (project) ID
    #[arg(long)]
    project: Option<String>,
}

enum Scope<'a> {
    Customer(&'a str),
    Project(&'a str),
}

impl Owner {
    fn scope(&self) -> Result<Scope<'_>> {
        match (&self.customer, &self.project) {
            (Some(c), None) => Ok(Scope::Customer(c)),
            (None, Some(p)) => Ok(Scope::Project(p)),
            _ => Err(anyhow!("Pass exactly one of --customer or --project")),
        }
    }
}

#[derive(Subcommand)]
pub enum BillingCommands {
    /// List payments by customer or project
    Payments {
        #[command(flatten)]
        owner: Owner,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List invoices by customer or project
    Invoices {
        #[command(flatten)]
        owner: Owner,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Totals invoiced, paid and outstanding for a customer
    Summary {
        /// Customer (sub-account) ID
        customer_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn invoice_status_cell(invoice: &Invoice) -> Cell {
    let color = match invoice.status.as_str() {
        "Paid" => Color::Green,
        "Partially Paid" => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(&invoice.status).fg(color)
}

pub async fn run(command: BillingCommands) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let slow = ctx.config.simulate_latency;

    match command {
        BillingCommands::Payments { owner, json } => {
            let pb = spinner("Fetching payments...", slow && !json);
            let result = match owner.scope()? {
                Scope::Customer(id) => ctx.billing_service.payments_for_customer(id).await,
                Scope::Project(id) => ctx.billing_service.payments_for_project(id).await,
            };
            pb.finish_and_clear();
            let payments = track(&logger, "billing payments", "billing", result)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&payments)?);
                return Ok(());
            }
            if payments.is_empty() {
                println!("No payments found.");
                return Ok(());
            }

            let mut table = create_table();
            table.set_header(vec![
                "ID",
                "Date",
                "Amount",
                "Method",
                "Invoice",
                "Status",
                "Description",
            ]);
            for p in &payments {
                table.add_row(vec![
                    p.id.clone(),
                    p.payment_date.to_string(),
                    format_money(p.amount, &p.currency),
                    p.payment_method.clone(),
                    p.invoice_id.clone(),
                    p.status.clone(),
                    p.description.clone(),
                ]);
            }
            println!("{}", table);
        }
        BillingCommands::Invoices { owner, json } => {
            let pb = spinner("Fetching invoices...", slow && !json);
            let result = match owner.scope()? {
                Scope::Customer(id) => ctx.billing_service.invoices_for_customer(id).await,
                Scope::Project(id) => ctx.billing_service.invoices_for_project(id).await,
            };
            pb.finish_and_clear();
            let invoices = track(&logger, "billing invoices", "billing", result)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&invoices)?);
                return Ok(());
            }
            if invoices.is_empty() {
                println!("No invoices found.");
                return Ok(());
            }

            let mut table = create_table();
            table.set_header(vec![
                "Number", "Customer", "Issued", "Due", "Amount", "Paid", "Balance", "Status",
            ]);
            for i in &invoices {
                table.add_row(vec![
                    Cell::new(&i.invoice_number),
                    Cell::new(&i.customer_name),
                    Cell::new(i.issue_date),
                    Cell::new(i.due_date),
                    Cell::new(format_money(i.amount, &i.currency)),
                    Cell::new(format_money(i.paid_amount, &i.currency)),
                    Cell::new(format_money(i.balance_amount, &i.currency)),
                    invoice_status_cell(i),
                ]);
            }
            println!("{}", table);
        }
        BillingCommands::Summary { customer_id, json } => {
            let pb = spinner("Summarizing...", slow && !json);
            let result = ctx.billing_service.customer_summary(&customer_id).await;
            pb.finish_and_clear();
            let summary = track(&logger, "billing summary", "billing", result)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("{} {}", "Customer".bold(), summary.customer_id.bold());
            println!();

            let mut table = create_table();
            let money = |amount| format_money(amount, &summary.currency);
            table.add_row(vec!["Invoiced".to_string(), money(summary.total_invoiced)]);
            table.add_row(vec!["Paid".to_string(), money(summary.total_paid)]);
            table.add_row(vec!["Outstanding".to_string(), money(summary.total_outstanding)]);
            table.add_row(vec!["Last payment".to_string(), summary.last_payment_date.clone()]);
            println!("{}", table);
        }
    }

    Ok(())
}
