//! Simulated backend latency
//!
//! Every service operation waits on its [`Latency`] before touching the
//! repositories. The default is no delay at all; the CLI turns on the
//! simulated profile from configuration.

use std::collections::HashMap;
use std::time::Duration;

/// Service operations that can be delayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search,
    ListFiles,
    DownloadUrl,
    Upload,
    CustomerPayments,
    ProjectPayments,
    CustomerInvoices,
    ProjectInvoices,
    CustomerSummary,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Search,
        Operation::ListFiles,
        Operation::DownloadUrl,
        Operation::Upload,
        Operation::CustomerPayments,
        Operation::ProjectPayments,
        Operation::CustomerInvoices,
        Operation::ProjectInvoices,
        Operation::CustomerSummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::ListFiles => "list_files",
            Operation::DownloadUrl => "download_url",
            Operation::Upload => "upload",
            Operation::CustomerPayments => "customer_payments",
            Operation::ProjectPayments => "project_payments",
            Operation::CustomerInvoices => "customer_invoices",
            Operation::ProjectInvoices => "project_invoices",
            Operation::CustomerSummary => "customer_summary",
        }
    }

    /// Round-trip time of the backend call this operation stands in for
    pub fn simulated_delay(&self) -> Duration {
        let ms = match self {
            Operation::Search => 300,
            Operation::ListFiles => 1200,
            Operation::DownloadUrl => 500,
            Operation::Upload => 2000,
            Operation::CustomerPayments => 1000,
            Operation::ProjectPayments => 800,
            Operation::CustomerInvoices => 900,
            Operation::ProjectInvoices => 700,
            Operation::CustomerSummary => 600,
        };
        Duration::from_millis(ms)
    }
}

/// Per-operation delay table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Latency {
    delays: HashMap<Operation, Duration>,
}

impl Latency {
    /// No delay for any operation
    pub fn none() -> Self {
        Self::default()
    }

    /// The simulated round-trip times of the real backends
    pub fn simulated() -> Self {
        Operation::ALL
            .iter()
            .fold(Self::none(), |latency, op| latency.with(*op, op.simulated_delay()))
    }

    /// Same delay for every operation
    pub fn uniform(delay: Duration) -> Self {
        Operation::ALL
            .iter()
            .fold(Self::none(), |latency, op| latency.with(*op, delay))
    }

    /// Override the delay of one operation
    pub fn with(mut self, op: Operation, delay: Duration) -> Self {
        if delay.is_zero() {
            self.delays.remove(&op);
        } else {
            self.delays.insert(op, delay);
        }
        self
    }

    pub fn delay_for(&self, op: Operation) -> Duration {
        self.delays.get(&op).copied().unwrap_or(Duration::ZERO)
    }

    pub fn is_none(&self) -> bool {
        self.delays.is_empty()
    }

    /// Suspend for the configured delay of `op`.
    ///
    /// Dropping the returned future is the only way to abandon the wait.
    pub async fn wait(&self, op: Operation) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
