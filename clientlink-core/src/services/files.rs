//! File service - project file listing, download links and uploads

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use tracing::{debug, error, info};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::latency::{Latency, Operation};
use crate::domain::result::{Error, Result};
use crate::domain::{FileUpload, StoredFile};
use crate::ports::FileRepository;

const PLACEHOLDER_BASE: &str = "https://placehold.co/400x300";

/// Characters a URI component keeps unescaped besides ASCII alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique file ID based on timestamp + counter
fn generate_file_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    // Lower 16 bits for the counter, the rest for the millisecond timestamp
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    ((timestamp << 16) | counter).to_string()
}

/// Placeholder link standing in for a signed storage URL
fn placeholder_url(filename: &str) -> String {
    format!(
        "{}?text={}",
        PLACEHOLDER_BASE,
        utf8_percent_encode(filename, URI_COMPONENT)
    )
}

/// File service for the storage backend
pub struct FileService {
    repository: Arc<dyn FileRepository>,
    latency: Latency,
}

impl FileService {
    pub fn new(repository: Arc<dyn FileRepository>, latency: Latency) -> Self {
        Self { repository, latency }
    }

    /// List every file attached to a work item
    pub async fn list_files(&self, project_id: &str) -> Result<Vec<StoredFile>> {
        self.latency.wait(Operation::ListFiles).await;

        let files = self
            .repository
            .find_files(&|f| f.project_id == project_id)
            .await
            .map_err(|e| {
                error!(error = %e, project_id, "listing files failed");
                Error::internal("failed to fetch project files")
            })?;

        debug!(count = files.len(), project_id, "listed project files");
        Ok(files)
    }

    /// Resolve a download link for a stored file
    pub async fn download_url(&self, file_id: &str) -> Result<String> {
        self.latency.wait(Operation::DownloadUrl).await;

        let files = self
            .repository
            .find_files(&|f| f.id == file_id)
            .await
            .map_err(|e| {
                error!(error = %e, file_id, "download url lookup failed");
                Error::internal("failed to generate download url")
            })?;

        files
            .into_iter()
            .next()
            .map(|f| f.url)
            .ok_or_else(|| Error::not_found(format!("file {}", file_id)))
    }

    /// Store a new file under a work item and return its record
    pub async fn upload(
        &self,
        upload: &FileUpload,
        project_id: &str,
        category: &str,
        description: Option<&str>,
    ) -> Result<StoredFile> {
        if upload.name.trim().is_empty() {
            return Err(Error::invalid("file name cannot be empty"));
        }
        if project_id.trim().is_empty() {
            return Err(Error::invalid("project id cannot be empty"));
        }

        self.latency.wait(Operation::Upload).await;

        let file = StoredFile {
            id: generate_file_id(),
            filename: upload.name.clone(),
            url: placeholder_url(&upload.name),
            size: upload.size,
            content_type: upload.content_type.clone(),
            upload_date: Utc::now().date_naive(),
            project_id: project_id.to_string(),
            category: category.to_string(),
            description: description.map(str::to_string),
        };

        self.repository.insert_file(file.clone()).await.map_err(|e| {
            error!(error = %e, project_id, "storing uploaded file failed");
            Error::internal("failed to upload file")
        })?;

        info!(file_id = %file.id, project_id, size = file.size, "file uploaded");
        Ok(file)
    }
}
