//! In-memory adapters
//!
//! Each adapter owns plain vectors behind a tokio `RwLock`. Reads clone the
//! accepted records out; writes append. Nothing outlives the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::demo;
use crate::domain::result::Result;
use crate::domain::{Account, Invoice, Payment, StoredFile, SubAccount, WorkItem};
use crate::ports::{BillingRepository, DirectoryRepository, FileRepository, RecordFilter};

fn select<T: Clone>(records: &[T], filter: RecordFilter<'_, T>) -> Vec<T> {
    records.iter().filter(|r| filter(r)).cloned().collect()
}

/// Directory tables for the records search backend
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    accounts: RwLock<Vec<Account>>,
    sub_accounts: RwLock<Vec<SubAccount>>,
    work_items: RwLock<Vec<WorkItem>>,
}

impl InMemoryDirectory {
    pub fn new(
        accounts: Vec<Account>,
        sub_accounts: Vec<SubAccount>,
        work_items: Vec<WorkItem>,
    ) -> Self {
        Self {
            accounts: RwLock::new(accounts),
            sub_accounts: RwLock::new(sub_accounts),
            work_items: RwLock::new(work_items),
        }
    }

    /// Directory preloaded with the demo tables
    pub fn demo() -> Self {
        Self::new(demo::demo_accounts(), demo::demo_sub_accounts(), demo::demo_work_items())
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectory {
    async fn find_accounts(&self, filter: RecordFilter<'_, Account>) -> Result<Vec<Account>> {
        Ok(select(&self.accounts.read().await, filter))
    }

    async fn find_sub_accounts(
        &self,
        filter: RecordFilter<'_, SubAccount>,
    ) -> Result<Vec<SubAccount>> {
        Ok(select(&self.sub_accounts.read().await, filter))
    }

    async fn find_work_items(&self, filter: RecordFilter<'_, WorkItem>) -> Result<Vec<WorkItem>> {
        Ok(select(&self.work_items.read().await, filter))
    }
}

/// File table for the storage backend
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    files: RwLock<Vec<StoredFile>>,
}

impl InMemoryFileStore {
    pub fn new(files: Vec<StoredFile>) -> Self {
        Self {
            files: RwLock::new(files),
        }
    }

    pub fn demo() -> Self {
        Self::new(demo::demo_files())
    }
}

#[async_trait]
impl FileRepository for InMemoryFileStore {
    async fn find_files(&self, filter: RecordFilter<'_, StoredFile>) -> Result<Vec<StoredFile>> {
        Ok(select(&self.files.read().await, filter))
    }

    async fn insert_file(&self, file: StoredFile) -> Result<()> {
        self.files.write().await.push(file);
        Ok(())
    }
}

/// Invoice and payment tables for the billing backend
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    payments: RwLock<Vec<Payment>>,
    invoices: RwLock<Vec<Invoice>>,
}

impl InMemoryLedger {
    pub fn new(payments: Vec<Payment>, invoices: Vec<Invoice>) -> Self {
        Self {
            payments: RwLock::new(payments),
            invoices: RwLock::new(invoices),
        }
    }

    pub fn demo() -> Self {
        Self::new(demo::demo_payments(), demo::demo_invoices())
    }
}

#[async_trait]
impl BillingRepository for InMemoryLedger {
    async fn find_payments(&self, filter: RecordFilter<'_, Payment>) -> Result<Vec<Payment>> {
        Ok(select(&self.payments.read().await, filter))
    }

    async fn find_invoices(&self, filter: RecordFilter<'_, Invoice>) -> Result<Vec<Invoice>> {
        Ok(select(&self.invoices.read().await, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filter_keeps_table_order() {
        let directory = InMemoryDirectory::demo();
        let all = directory.find_accounts(&|_| true).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let none = directory.find_work_items(&|w| w.account_id == "99").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_insert_file_is_visible() {
        let store = InMemoryFileStore::default();
        let mut file = demo::demo_files().remove(0);
        file.id = "new".to_string();
        store.insert_file(file).await.unwrap();

        let found = store.find_files(&|f| f.id == "new").await.unwrap();
        assert_eq!(found.len(), 1);
    }
}
