//! Billing records and the per-customer financial summary

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder used when a customer has never paid
pub const NO_PAYMENT_DATE: &str = "N/A";

/// Currency every summary is reported in
pub const SUMMARY_CURRENCY: &str = "USD";

/// A payment received against an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub invoice_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub payment_date: NaiveDate,
    /// "Bank Transfer", "Credit Card", "PayPal", ...
    pub payment_method: String,
    pub status: String,
    pub description: String,
    pub customer_id: String,
    pub project_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// Human-facing number, e.g. "INV-2024-001"
    pub invoice_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub project_id: String,
    pub amount: Decimal,
    pub currency: String,
    /// "Paid", "Partially Paid", "Pending", ...
    pub status: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub paid_amount: Decimal,
    pub balance_amount: Decimal,
}

/// Aggregated totals for one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_invoiced: Decimal,
    pub total_paid: Decimal,
    pub total_outstanding: Decimal,
    pub currency: String,
    /// Most recent payment date (`YYYY-MM-DD`), or "N/A"
    pub last_payment_date: String,
}

impl CustomerSummary {
    /// Aggregate the given records.
    ///
    /// The caller is responsible for passing only records that belong to
    /// `customer_id`. Outstanding is always `invoiced - paid`.
    pub fn from_records(
        customer_id: impl Into<String>,
        invoices: &[Invoice],
        payments: &[Payment],
    ) -> Self {
        let total_invoiced: Decimal = invoices.iter().map(|i| i.amount).sum();
        let total_paid: Decimal = payments.iter().map(|p| p.amount).sum();

        let last_payment_date = payments
            .iter()
            .map(|p| p.payment_date)
            .max()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NO_PAYMENT_DATE.to_string());

        Self {
            customer_id: customer_id.into(),
            total_invoiced,
            total_paid,
            total_outstanding: total_invoiced - total_paid,
            currency: SUMMARY_CURRENCY.to_string(),
            last_payment_date,
        }
    }
}
