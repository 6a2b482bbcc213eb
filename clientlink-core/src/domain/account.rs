//! Directory records: accounts, their sub-accounts and work items

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A top-level organization (a client of the agency)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    /// Display name, e.g. "Acme Corporation"
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Short organization name, e.g. "Acme Corp"
    pub company: String,
    pub status: String,
    pub created_date: NaiveDate,
    pub last_activity: NaiveDate,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            status: "Active".to_string(),
            created_date: today,
            last_activity: today,
        }
    }

    /// Fields a search query is matched against
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.company, &self.email]
    }
}

/// A billable contact under an account (a customer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Owning account
    pub account_id: String,
    /// Work items this contact is billed for
    pub work_item_ids: Vec<String>,
    pub total_spent: Decimal,
    pub status: String,
}

impl SubAccount {
    pub fn new(
        id: impl Into<String>,
        account_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            account_id: account_id.into(),
            work_item_ids: Vec::new(),
            total_spent: Decimal::ZERO,
            status: "Active".to_string(),
        }
    }

    pub fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.email]
    }
}

/// A tracked deliverable under an account (a project)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form: "Planning", "In Progress", "Completed", ...
    pub status: String,
    pub account_id: String,
    /// Denormalized display name of the owning account
    pub account_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Completion percentage, 0-100
    pub progress: u8,
    pub budget: Decimal,
    pub assigned_to: Vec<String>,
}

impl WorkItem {
    pub fn new(
        id: impl Into<String>,
        account_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: "Planning".to_string(),
            account_id: account_id.into(),
            account_name: String::new(),
            start_date: today,
            end_date: today,
            progress: 0,
            budget: Decimal::ZERO,
            assigned_to: Vec::new(),
        }
    }

    pub fn search_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.account_name]
    }
}
