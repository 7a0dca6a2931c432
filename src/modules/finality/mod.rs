use crate::types;

mod progress;
mod schemas;
mod waiter;

pub use progress::{ConsoleProgress, NoProgress, ProgressSink, TextProgress, TracingProgress};
pub use schemas::{ConfirmationStatus, Elapsed};
pub use waiter::FinalityWaiter;

/// Read-only view of the ledger's signature status cache.
#[async_trait::async_trait]
pub trait StatusQuery: Send + Sync {
    /// `None` means the ledger has not observed the transaction (yet).
    async fn query_status(
        &self,
        transaction_id: &types::TransactionId,
    ) -> crate::Result<Option<ConfirmationStatus>>;
}
