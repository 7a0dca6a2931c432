use crate::types;

mod extractor;
mod schemas;

pub use extractor::extract_cost;
pub use schemas::{CostResult, MessageAccountKeys, TransactionRecord};

/// Read of a transaction that already reached finality.
#[async_trait::async_trait]
pub trait RecordFetch: Send + Sync {
    /// `None` if the ledger has no such transaction at finalized commitment.
    async fn fetch_finalized_record(
        &self,
        transaction_id: &types::TransactionId,
    ) -> crate::Result<Option<TransactionRecord>>;
}
