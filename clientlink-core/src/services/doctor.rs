//! Doctor service - cross-table consistency checks
//!
//! The backends do not enforce references between their tables. These
//! checks report what a caller would trip over: records pointing at
//! accounts, work items or invoices that do not exist.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::result::Result;
use crate::ports::{BillingRepository, DirectoryRepository, FileRepository};

/// Doctor service for health checks
pub struct DoctorService {
    directory: Arc<dyn DirectoryRepository>,
    files: Arc<dyn FileRepository>,
    billing: Arc<dyn BillingRepository>,
}

impl DoctorService {
    pub fn new(
        directory: Arc<dyn DirectoryRepository>,
        files: Arc<dyn FileRepository>,
        billing: Arc<dyn BillingRepository>,
    ) -> Self {
        Self { directory, files, billing }
    }

    /// Run all health checks
    pub async fn run_checks(&self) -> Result<DoctorResult> {
        let mut checks = BTreeMap::new();

        let accounts = self.directory.find_accounts(&|_| true).await?;
        let account_names: HashMap<&str, &str> = accounts
            .iter()
            .map(|a| (a.id.as_str(), a.name.as_str()))
            .collect();

        // Orphaned sub-accounts
        let orphaned_subs: Vec<serde_json::Value> = self
            .directory
            .find_sub_accounts(&|s| !account_names.contains_key(s.account_id.as_str()))
            .await?
            .iter()
            .map(|s| json!({"sub_account_id": s.id, "account_id": s.account_id}))
            .collect();
        checks.insert(
            "orphaned_sub_accounts".to_string(),
            CheckResult::from_findings(
                orphaned_subs,
                CheckStatus::Error,
                "All sub-accounts belong to a known account",
                |n| format!("{} sub-account(s) reference missing accounts", n),
            ),
        );

        let work_items = self.directory.find_work_items(&|_| true).await?;

        // Orphaned work items
        let orphaned_items: Vec<serde_json::Value> = work_items
            .iter()
            .filter(|w| !account_names.contains_key(w.account_id.as_str()))
            .map(|w| json!({"work_item_id": w.id, "account_id": w.account_id}))
            .collect();
        checks.insert(
            "orphaned_work_items".to_string(),
            CheckResult::from_findings(
                orphaned_items,
                CheckStatus::Error,
                "All work items belong to a known account",
                |n| format!("{} work item(s) reference missing accounts", n),
            ),
        );

        // Stale denormalized account names on work items
        let stale_names: Vec<serde_json::Value> = work_items
            .iter()
            .filter_map(|w| {
                let actual = account_names.get(w.account_id.as_str())?;
                (*actual != w.account_name).then(|| {
                    json!({"work_item_id": w.id, "stored": w.account_name, "actual": actual})
                })
            })
            .collect();
        checks.insert(
            "work_item_account_names".to_string(),
            CheckResult::from_findings(
                stale_names,
                CheckStatus::Warning,
                "Work item account names are current",
                |n| format!("{} work item(s) carry an outdated account name", n),
            ),
        );

        // Files attached to unknown work items
        let work_item_ids: HashSet<&str> = work_items.iter().map(|w| w.id.as_str()).collect();
        let orphaned_files: Vec<serde_json::Value> = self
            .files
            .find_files(&|f| !work_item_ids.contains(f.project_id.as_str()))
            .await?
            .iter()
            .map(|f| json!({"file_id": f.id, "project_id": f.project_id}))
            .collect();
        checks.insert(
            "orphaned_files".to_string(),
            CheckResult::from_findings(
                orphaned_files,
                CheckStatus::Warning,
                "All files belong to a known work item",
                |n| format!("{} file(s) reference missing work items", n),
            ),
        );

        let invoices = self.billing.find_invoices(&|_| true).await?;
        let invoice_ids: HashSet<&str> = invoices.iter().map(|i| i.id.as_str()).collect();

        // Payments against unknown invoices
        let orphaned_payments: Vec<serde_json::Value> = self
            .billing
            .find_payments(&|p| !invoice_ids.contains(p.invoice_id.as_str()))
            .await?
            .iter()
            .map(|p| json!({"payment_id": p.id, "invoice_id": p.invoice_id}))
            .collect();
        checks.insert(
            "orphaned_payments".to_string(),
            CheckResult::from_findings(
                orphaned_payments,
                CheckStatus::Error,
                "All payments reference a known invoice",
                |n| format!("{} payment(s) reference missing invoices", n),
            ),
        );

        // Invoice amount must equal paid + balance
        let unbalanced: Vec<serde_json::Value> = invoices
            .iter()
            .filter(|i| i.amount != i.paid_amount + i.balance_amount)
            .map(|i| {
                json!({
                    "invoice_id": i.id,
                    "amount": i.amount.to_string(),
                    "paid": i.paid_amount.to_string(),
                    "balance": i.balance_amount.to_string()
                })
            })
            .collect();
        checks.insert(
            "invoice_balances".to_string(),
            CheckResult::from_findings(
                unbalanced,
                CheckStatus::Warning,
                "All invoice balances add up",
                |n| format!("{} invoice(s) where paid + balance differs from the amount", n),
            ),
        );

        let count = |status: CheckStatus| checks.values().filter(|c| c.status == status).count();
        let summary = DoctorSummary {
            passed: count(CheckStatus::Pass),
            warnings: count(CheckStatus::Warning),
            errors: count(CheckStatus::Error),
        };

        Ok(DoctorResult { checks, summary })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

#[derive(Debug, Serialize)]
pub struct DoctorResult {
    pub checks: BTreeMap<String, CheckResult>,
    pub summary: DoctorSummary,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<serde_json::Value>>,
}

impl CheckResult {
    /// Pass when there are no findings, otherwise `failure` with details
    fn from_findings(
        findings: Vec<serde_json::Value>,
        failure: CheckStatus,
        pass_message: &str,
        fail_message: impl Fn(usize) -> String,
    ) -> Self {
        if findings.is_empty() {
            Self {
                status: CheckStatus::Pass,
                message: pass_message.to_string(),
                details: None,
            }
        } else {
            Self {
                status: failure,
                message: fail_message(findings.len()),
                details: Some(findings),
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorSummary {
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo;
    use crate::adapters::memory::{InMemoryDirectory, InMemoryFileStore, InMemoryLedger};
    use crate::domain::WorkItem;

    #[tokio::test]
    async fn test_demo_data_passes() {
        let service = DoctorService::new(
            Arc::new(InMemoryDirectory::demo()),
            Arc::new(InMemoryFileStore::demo()),
            Arc::new(InMemoryLedger::demo()),
        );

        let result = service.run_checks().await.unwrap();
        assert_eq!(result.summary.errors, 0);
        assert_eq!(result.summary.warnings, 0);
        assert_eq!(result.summary.passed, result.checks.len());
    }

    #[tokio::test]
    async fn test_orphaned_work_item_is_an_error() {
        let mut items = demo::demo_work_items();
        items.push(WorkItem::new("9", "missing", "Ghost Project"));

        let service = DoctorService::new(
            Arc::new(InMemoryDirectory::new(
                demo::demo_accounts(),
                demo::demo_sub_accounts(),
                items,
            )),
            Arc::new(InMemoryFileStore::default()),
            Arc::new(InMemoryLedger::default()),
        );

        let result = service.run_checks().await.unwrap();
        let check = &result.checks["orphaned_work_items"];
        assert_eq!(check.status, CheckStatus::Error);
        assert_eq!(check.details.as_ref().map(Vec::len), Some(1));
        assert_eq!(result.summary.errors, 1);
    }
}
