//! Service layer - business logic orchestration
//!
//! Services wrap the repository ports with the behavior callers rely on:
//! simulated latency, matching and ranking, aggregation, and a typed error
//! kind per failure.

mod billing;
mod doctor;
mod files;
pub mod latency;
pub mod logging;
pub mod search;
mod status;

pub use billing::BillingService;
pub use doctor::{CheckResult, CheckStatus, DoctorResult, DoctorService, DoctorSummary};
pub use files::FileService;
pub use latency::{Latency, Operation};
pub use logging::{ActivityEntry, ActivityEvent, ActivityLog, EntryPoint};
pub use search::SearchService;
pub use status::{AccountSummary, StatusService, StatusSummary};
