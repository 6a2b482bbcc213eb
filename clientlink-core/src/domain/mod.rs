//! Core domain entities
//!
//! Plain data records read from the integration backends, plus the values
//! derived from them (search results, customer summaries). No I/O here.

mod account;
pub mod billing;
mod file;
pub mod money;
pub mod result;
pub mod search;

pub use account::{Account, SubAccount, WorkItem};
pub use billing::{CustomerSummary, Invoice, Payment};
pub use file::{FileUpload, StoredFile};
pub use search::{SearchKind, SearchRecord, SearchResult};
