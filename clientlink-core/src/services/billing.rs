//! Billing service - invoices, payments and customer summaries

use std::sync::Arc;

use tracing::{debug, error};

use super::latency::{Latency, Operation};
use crate::domain::result::{Error, Result};
use crate::domain::{CustomerSummary, Invoice, Payment};
use crate::ports::BillingRepository;

/// Billing service for the invoicing backend
pub struct BillingService {
    repository: Arc<dyn BillingRepository>,
    latency: Latency,
}

impl BillingService {
    pub fn new(repository: Arc<dyn BillingRepository>, latency: Latency) -> Self {
        Self { repository, latency }
    }

    /// Payments made by a customer
    pub async fn payments_for_customer(&self, customer_id: &str) -> Result<Vec<Payment>> {
        self.latency.wait(Operation::CustomerPayments).await;
        self.repository
            .find_payments(&|p| p.customer_id == customer_id)
            .await
            .map_err(|e| {
                error!(error = %e, customer_id, "payment lookup failed");
                Error::internal("failed to fetch payment data")
            })
    }

    /// Payments made against a work item
    pub async fn payments_for_project(&self, project_id: &str) -> Result<Vec<Payment>> {
        self.latency.wait(Operation::ProjectPayments).await;
        self.repository
            .find_payments(&|p| p.project_id == project_id)
            .await
            .map_err(|e| {
                error!(error = %e, project_id, "project payment lookup failed");
                Error::internal("failed to fetch project payment data")
            })
    }

    pub async fn invoices_for_customer(&self, customer_id: &str) -> Result<Vec<Invoice>> {
        self.latency.wait(Operation::CustomerInvoices).await;
        self.repository
            .find_invoices(&|i| i.customer_id == customer_id)
            .await
            .map_err(|e| {
                error!(error = %e, customer_id, "invoice lookup failed");
                Error::internal("failed to fetch invoice data")
            })
    }

    pub async fn invoices_for_project(&self, project_id: &str) -> Result<Vec<Invoice>> {
        self.latency.wait(Operation::ProjectInvoices).await;
        self.repository
            .find_invoices(&|i| i.project_id == project_id)
            .await
            .map_err(|e| {
                error!(error = %e, project_id, "project invoice lookup failed");
                Error::internal("failed to fetch project invoice data")
            })
    }

    /// Totals for one customer. Unknown customers get an all-zero summary.
    pub async fn customer_summary(&self, customer_id: &str) -> Result<CustomerSummary> {
        self.latency.wait(Operation::CustomerSummary).await;

        let lookup = async {
            let invoices = self
                .repository
                .find_invoices(&|i| i.customer_id == customer_id)
                .await?;
            let payments = self
                .repository
                .find_payments(&|p| p.customer_id == customer_id)
                .await?;
            Ok::<_, Error>((invoices, payments))
        };

        let (invoices, payments) = lookup.await.map_err(|e| {
            error!(error = %e, customer_id, "customer summary lookup failed");
            Error::internal("failed to fetch customer summary")
        })?;

        debug!(
            invoices = invoices.len(),
            payments = payments.len(),
            customer_id,
            "summarizing customer"
        );
        Ok(CustomerSummary::from_records(customer_id, &invoices, &payments))
    }
}
