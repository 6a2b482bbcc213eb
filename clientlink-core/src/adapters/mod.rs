//! Adapter implementations
//!
//! Adapters implement the port traits. Only in-memory backends exist so
//! far, seeded from the demo tables:
//! - `InMemoryDirectory` for the records search backend
//! - `InMemoryFileStore` for file storage
//! - `InMemoryLedger` for billing

pub mod demo;
pub mod memory;
