//! Status service - record counts across the backends

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::ports::{BillingRepository, DirectoryRepository, FileRepository};

/// Status service for backend summaries
pub struct StatusService {
    directory: Arc<dyn DirectoryRepository>,
    files: Arc<dyn FileRepository>,
    billing: Arc<dyn BillingRepository>,
}

impl StatusService {
    pub fn new(
        directory: Arc<dyn DirectoryRepository>,
        files: Arc<dyn FileRepository>,
        billing: Arc<dyn BillingRepository>,
    ) -> Self {
        Self { directory, files, billing }
    }

    /// Get overall status summary
    pub async fn get_status(&self) -> Result<StatusSummary> {
        let accounts = self.directory.find_accounts(&|_| true).await?;
        let sub_accounts = self.directory.find_sub_accounts(&|_| true).await?;
        let work_items = self.directory.find_work_items(&|_| true).await?;
        let files = self.files.find_files(&|_| true).await?;
        let invoices = self.billing.find_invoices(&|_| true).await?;
        let payments = self.billing.find_payments(&|_| true).await?;

        Ok(StatusSummary {
            total_accounts: accounts.len(),
            total_sub_accounts: sub_accounts.len(),
            total_work_items: work_items.len(),
            total_files: files.len(),
            total_invoices: invoices.len(),
            total_payments: payments.len(),
            accounts: accounts
                .into_iter()
                .map(|a| AccountSummary {
                    id: a.id,
                    name: a.name,
                    company: a.company,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_accounts: usize,
    pub total_sub_accounts: usize,
    pub total_work_items: usize,
    pub total_files: usize,
    pub total_invoices: usize,
    pub total_payments: usize,
    pub accounts: Vec<AccountSummary>,
}

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub company: String,
}
