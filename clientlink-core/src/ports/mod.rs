//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for the external backends. Services depend
//! only on these traits, so a real REST client can replace the in-memory
//! adapters without touching search, file or billing logic.

mod repository;

pub use repository::{BillingRepository, DirectoryRepository, FileRepository, RecordFilter};
