//! Search service - cross-entity directory lookup
//!
//! A query is matched by plain case-insensitive substring containment
//! against a fixed set of text fields per record kind. Hits from all kinds
//! are concatenated and ranked: an exact title match first, then titles in
//! ascending collation order.

use std::cmp::Ordering;
use std::sync::Arc;

use feruca::Collator;
use tracing::{debug, error};

use super::latency::{Latency, Operation};
use crate::domain::result::{Error, Result};
use crate::domain::SearchResult;
use crate::ports::DirectoryRepository;

/// Queries shorter than this many UTF-16 code units (after trimming)
/// return no results
pub const MIN_QUERY_CHARS: usize = 2;

/// Search service over the records directory
pub struct SearchService {
    directory: Arc<dyn DirectoryRepository>,
    latency: Latency,
}

impl SearchService {
    pub fn new(directory: Arc<dyn DirectoryRepository>, latency: Latency) -> Self {
        Self { directory, latency }
    }

    /// Search accounts, sub-accounts and work items
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.latency.wait(Operation::Search).await;

        let Some(term) = normalize_query(query) else {
            return Ok(Vec::new());
        };

        let results = self.collect(&term, None).await.map_err(|e| {
            error!(error = %e, "directory search failed");
            Error::internal("failed to perform search")
        })?;

        debug!(hits = results.len(), "directory search complete");
        Ok(rank(results, &term))
    }

    /// Search the sub-accounts and work items owned by one account.
    ///
    /// Accounts themselves are never returned.
    pub async fn search_within_account(
        &self,
        query: &str,
        account_id: &str,
    ) -> Result<Vec<SearchResult>> {
        self.latency.wait(Operation::Search).await;

        let Some(term) = normalize_query(query) else {
            return Ok(Vec::new());
        };

        let results = self.collect(&term, Some(account_id)).await.map_err(|e| {
            error!(error = %e, account_id, "account search failed");
            Error::internal("failed to perform account search")
        })?;

        debug!(hits = results.len(), account_id, "account search complete");
        Ok(rank(results, &term))
    }

    async fn collect(&self, term: &str, scope: Option<&str>) -> Result<Vec<SearchResult>> {
        let in_scope = |account_id: &str| scope.map_or(true, |id| id == account_id);

        let mut results: Vec<SearchResult> = Vec::new();

        if scope.is_none() {
            let accounts = self
                .directory
                .find_accounts(&|a| matches_any(&a.search_fields(), term))
                .await?;
            results.extend(accounts.into_iter().map(SearchResult::from));
        }

        let sub_accounts = self
            .directory
            .find_sub_accounts(&|s| {
                in_scope(&s.account_id) && matches_any(&s.search_fields(), term)
            })
            .await?;
        results.extend(sub_accounts.into_iter().map(SearchResult::from));

        let work_items = self
            .directory
            .find_work_items(&|w| in_scope(&w.account_id) && matches_any(&w.search_fields(), term))
            .await?;
        results.extend(work_items.into_iter().map(SearchResult::from));

        Ok(results)
    }
}

/// Trim and lowercase a raw query; `None` when it is too short to search.
///
/// Length is counted in UTF-16 code units, so one emoji is long enough.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.encode_utf16().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Whether any field contains the normalized term
pub fn matches_any(fields: &[&str], term: &str) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(term))
}

/// Order results: exact title matches first, then by title.
///
/// The sort is stable, so results with equal titles and equal exactness
/// keep their concatenation order (accounts, sub-accounts, work items).
pub fn rank(mut results: Vec<SearchResult>, term: &str) -> Vec<SearchResult> {
    let mut collator = Collator::default();
    results.sort_by(|a, b| {
        let a_exact = a.title.to_lowercase() == term;
        let b_exact = b.title.to_lowercase() == term;
        b_exact
            .cmp(&a_exact)
            .then_with(|| collate(&mut collator, &a.title, &b.title))
    });
    results
}

/// Locale-aware title order (Unicode collation, CLDR root), with the raw
/// title as the final tie-breaker.
pub fn collate(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}
