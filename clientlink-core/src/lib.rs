//! Clientlink Core - stand-ins for the agency's external integrations
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Records (Account, SubAccount, WorkItem, StoredFile, Invoice, Payment)
//!   and derived values (SearchResult, CustomerSummary)
//! - **ports**: Repository traits for the records search, file storage and billing backends
//! - **adapters**: In-memory implementations seeded with demo tables
//! - **services**: Search ranking, file handling, billing aggregation, diagnostics

pub mod adapters;
pub mod config;
pub mod domain;
mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::memory::{InMemoryDirectory, InMemoryFileStore, InMemoryLedger};
use config::Config;
use ports::{BillingRepository, DirectoryRepository, FileRepository};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, ErrorKind};
pub use domain::{
    Account, CustomerSummary, FileUpload, Invoice, Payment, SearchKind, SearchResult,
    StoredFile, SubAccount, WorkItem,
};
pub use services::{ActivityEvent, ActivityLog, EntryPoint, Latency};

/// Main context for Clientlink operations
///
/// Holds the configuration, the backends and every service wired to them.
pub struct ClientLinkContext {
    pub config: Config,
    pub search_service: SearchService,
    pub file_service: FileService,
    pub billing_service: BillingService,
    pub status_service: StatusService,
    pub doctor_service: DoctorService,
}

impl ClientLinkContext {
    /// Create a context over the demo backends, configured from `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let latency = config.latency();

        Ok(Self::with_backends(
            config,
            latency,
            Arc::new(InMemoryDirectory::demo()),
            Arc::new(InMemoryFileStore::demo()),
            Arc::new(InMemoryLedger::demo()),
        ))
    }

    /// Demo backends, default configuration, no latency
    pub fn in_memory() -> Self {
        Self::with_backends(
            Config::default(),
            Latency::none(),
            Arc::new(InMemoryDirectory::demo()),
            Arc::new(InMemoryFileStore::demo()),
            Arc::new(InMemoryLedger::demo()),
        )
    }

    /// Wire services over arbitrary backends
    pub fn with_backends(
        config: Config,
        latency: Latency,
        directory: Arc<dyn DirectoryRepository>,
        files: Arc<dyn FileRepository>,
        billing: Arc<dyn BillingRepository>,
    ) -> Self {
        let search_service = SearchService::new(Arc::clone(&directory), latency.clone());
        let file_service = FileService::new(Arc::clone(&files), latency.clone());
        let billing_service = BillingService::new(Arc::clone(&billing), latency);
        let status_service = StatusService::new(
            Arc::clone(&directory),
            Arc::clone(&files),
            Arc::clone(&billing),
        );
        let doctor_service = DoctorService::new(directory, files, billing);

        Self {
            config,
            search_service,
            file_service,
            billing_service,
            status_service,
            doctor_service,
        }
    }
}
