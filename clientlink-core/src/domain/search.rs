//! Search result projection

use serde::Serialize;

use super::money::group_thousands;
use super::{Account, SubAccount, WorkItem};

/// Which kind of directory record a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Account,
    SubAccount,
    WorkItem,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Account => "account",
            SearchKind::SubAccount => "sub_account",
            SearchKind::WorkItem => "work_item",
        }
    }
}

/// The record a result was projected from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchRecord {
    Account(Account),
    SubAccount(SubAccount),
    WorkItem(WorkItem),
}

impl SearchRecord {
    pub fn kind(&self) -> SearchKind {
        match self {
            SearchRecord::Account(_) => SearchKind::Account,
            SearchRecord::SubAccount(_) => SearchKind::SubAccount,
            SearchRecord::WorkItem(_) => SearchKind::WorkItem,
        }
    }

    /// Owning account id; an account owns itself
    pub fn account_id(&self) -> &str {
        match self {
            SearchRecord::Account(a) => &a.id,
            SearchRecord::SubAccount(s) => &s.account_id,
            SearchRecord::WorkItem(w) => &w.account_id,
        }
    }

    /// Text fields the query is matched against
    pub fn search_fields(&self) -> Vec<&str> {
        match self {
            SearchRecord::Account(a) => a.search_fields().to_vec(),
            SearchRecord::SubAccount(s) => s.search_fields().to_vec(),
            SearchRecord::WorkItem(w) => w.search_fields().to_vec(),
        }
    }
}

/// One hit of a directory search, in a uniform display shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub data: SearchRecord,
}

impl From<Account> for SearchResult {
    fn from(account: Account) -> Self {
        Self {
            kind: SearchKind::Account,
            id: account.id.clone(),
            title: account.name.clone(),
            subtitle: account.company.clone(),
            description: Some(account.email.clone()),
            status: Some(account.status.clone()),
            data: SearchRecord::Account(account),
        }
    }
}

impl From<SubAccount> for SearchResult {
    fn from(sub: SubAccount) -> Self {
        Self {
            kind: SearchKind::SubAccount,
            id: sub.id.clone(),
            title: sub.name.clone(),
            subtitle: sub.email.clone(),
            description: Some(format!("Total Spent: ${}", group_thousands(sub.total_spent))),
            status: Some(sub.status.clone()),
            data: SearchRecord::SubAccount(sub),
        }
    }
}

impl From<WorkItem> for SearchResult {
    fn from(item: WorkItem) -> Self {
        Self {
            kind: SearchKind::WorkItem,
            id: item.id.clone(),
            title: item.title.clone(),
            subtitle: item.account_name.clone(),
            description: Some(item.description.clone()),
            status: Some(item.status.clone()),
            data: SearchRecord::WorkItem(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_sub_account_projection_formats_total() {
        let mut sub = SubAccount::new("1", "1", "Jane Customer");
        sub.email = "jane@customer.com".to_string();
        sub.total_spent = Decimal::new(25000, 0);

        let result = SearchResult::from(sub);
        assert_eq!(result.kind, SearchKind::SubAccount);
        assert_eq!(result.title, "Jane Customer");
        assert_eq!(result.subtitle, "jane@customer.com");
        assert_eq!(result.description.as_deref(), Some("Total Spent: $25,000"));
        assert_eq!(result.data.kind(), SearchKind::SubAccount);
    }

    #[test]
    fn test_work_item_projection() {
        let mut item = WorkItem::new("3", "3", "E-commerce Platform");
        item.account_name = "Digital Innovations Inc".to_string();
        item.status = "Completed".to_string();

        let result = SearchResult::from(item);
        assert_eq!(result.subtitle, "Digital Innovations Inc");
        assert_eq!(result.status.as_deref(), Some("Completed"));
        assert_eq!(result.data.account_id(), "3");
    }

    #[test]
    fn test_serializes_type_tag() {
        let result = SearchResult::from(Account::new("1", "Acme Corporation"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "account");
        assert_eq!(json["data"]["name"], "Acme Corporation");
    }
}
