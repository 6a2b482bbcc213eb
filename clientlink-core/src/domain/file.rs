//! Stored file records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A file held by the storage backend for a work item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: String,
    pub filename: String,
    pub url: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type, e.g. "application/pdf"
    pub content_type: String,
    pub upload_date: NaiveDate,
    /// Work item the file belongs to
    pub project_id: String,
    pub category: String,
    pub description: Option<String>,
}

/// Client-side description of a file about to be uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, size: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: content_type.into(),
        }
    }
}
