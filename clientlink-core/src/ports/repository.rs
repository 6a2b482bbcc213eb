//! Repository ports - record lookup abstraction
//!
//! Every port exposes the same capability for each record kind it owns:
//! return the records of that kind accepted by a predicate, in backend
//! order. Anything smarter (matching, ranking, aggregation) lives in the
//! services.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Account, Invoice, Payment, StoredFile, SubAccount, WorkItem};

/// Predicate applied to each record of one kind
pub type RecordFilter<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Records search backend: accounts, sub-accounts and work items
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn find_accounts(&self, filter: RecordFilter<'_, Account>) -> Result<Vec<Account>>;

    async fn find_sub_accounts(
        &self,
        filter: RecordFilter<'_, SubAccount>,
    ) -> Result<Vec<SubAccount>>;

    async fn find_work_items(&self, filter: RecordFilter<'_, WorkItem>) -> Result<Vec<WorkItem>>;
}

/// File storage backend
#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn find_files(&self, filter: RecordFilter<'_, StoredFile>) -> Result<Vec<StoredFile>>;

    /// Append a new file record
    async fn insert_file(&self, file: StoredFile) -> Result<()>;
}

/// Billing backend: invoices and the payments made against them
#[async_trait]
pub trait BillingRepository: Send + Sync {
    async fn find_payments(&self, filter: RecordFilter<'_, Payment>) -> Result<Vec<Payment>>;

    async fn find_invoices(&self, filter: RecordFilter<'_, Invoice>) -> Result<Vec<Invoice>>;
}
