//! Waits for a submitted Solana transaction to be finalized and reports what
//! it cost a given account: the transaction fee and the account's net balance change.

use std::future::Future;

pub mod config;
pub mod errors;
pub mod modules;
pub mod rpc_calls;
pub mod rpc_helpers;
pub mod types;

pub use modules::cost::{CostResult, RecordFetch, TransactionRecord};
pub use modules::finality::{FinalityWaiter, ProgressSink, StatusQuery};

pub type Result<T> = std::result::Result<T, errors::Error>;

pub const LOGGER_MSG: &str = "solana_tx_cost";

/// Waits for `transaction_id` to be finalized, fetches it and computes what it cost `payer`.
pub async fn get_transaction_cost(
    status_query: &dyn StatusQuery,
    record_fetch: &dyn RecordFetch,
    transaction_id: &types::TransactionId,
    payer: &types::AccountId,
    config: &config::WaitConfig,
    progress: &dyn ProgressSink,
) -> Result<CostResult> {
    get_transaction_cost_with_cancel(
        status_query,
        record_fetch,
        transaction_id,
        payer,
        config,
        progress,
        futures::future::pending(),
    )
    .await
}

/// [`get_transaction_cost`] that also stops waiting once `cancel` resolves.
pub async fn get_transaction_cost_with_cancel<C>(
    status_query: &dyn StatusQuery,
    record_fetch: &dyn RecordFetch,
    transaction_id: &types::TransactionId,
    payer: &types::AccountId,
    config: &config::WaitConfig,
    progress: &dyn ProgressSink,
    cancel: C,
) -> Result<CostResult>
where
    C: Future<Output = ()>,
{
    FinalityWaiter::new(*config)
        .wait_with_cancel(status_query, transaction_id, progress, cancel)
        .await?;

    let record = record_fetch
        .fetch_finalized_record(transaction_id)
        .await?
        .ok_or_else(|| {
            errors::ErrorKind::TransactionNotFound(format!(
                "{} was reported finalized but could not be fetched",
                transaction_id
            ))
        })?;
    modules::cost::extract_cost(&record, payer)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::modules::cost::MessageAccountKeys;
    use crate::modules::finality::{ConfirmationStatus, NoProgress};

    const SIGNATURE: &str =
        "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW";
    const PAYER: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";
    const RECIPIENT: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";

    /// In-memory ledger: finalizes after a number of polls and serves one record.
    struct FakeLedger {
        polls_until_finalized: usize,
        polls: AtomicUsize,
        fetches: AtomicUsize,
        record: Option<TransactionRecord>,
    }

    impl FakeLedger {
        fn new(polls_until_finalized: usize, record: Option<TransactionRecord>) -> Self {
            Self {
                polls_until_finalized,
                polls: AtomicUsize::new(0),
                fetches: AtomicUsize::new(0),
                record,
            }
        }
    }

    #[async_trait::async_trait]
    impl StatusQuery for FakeLedger {
        async fn query_status(
            &self,
            _: &types::TransactionId,
        ) -> Result<Option<ConfirmationStatus>> {
            let poll = self.polls.fetch_add(1, Ordering::SeqCst);
            Ok(if poll >= self.polls_until_finalized {
                Some(ConfirmationStatus::Finalized)
            } else if poll > 0 {
                Some(ConfirmationStatus::Confirmed)
            } else {
                None
            })
        }
    }

    #[async_trait::async_trait]
    impl RecordFetch for FakeLedger {
        async fn fetch_finalized_record(
            &self,
            _: &types::TransactionId,
        ) -> Result<Option<TransactionRecord>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.record.clone())
        }
    }

    fn record() -> TransactionRecord {
        TransactionRecord {
            slot: 250_000_000,
            block_time: None,
            account_keys: MessageAccountKeys::Static(vec![
                types::AccountId::from_str(PAYER).unwrap(),
                types::AccountId::from_str(RECIPIENT).unwrap(),
            ]),
            fee: 5,
            pre_balances: vec![1000, 500],
            post_balances: vec![995, 505],
        }
    }

    fn tx() -> types::TransactionId {
        types::TransactionId::from_str(SIGNATURE).unwrap()
    }

    fn account(key: &str) -> types::AccountId {
        types::AccountId::from_str(key).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_cost_after_finality() {
        let ledger = FakeLedger::new(3, Some(record()));

        let cost = get_transaction_cost(
            &ledger,
            &ledger,
            &tx(),
            &account(PAYER),
            &config::WaitConfig::default(),
            &NoProgress,
        )
        .await
        .unwrap();

        assert_eq!(cost, CostResult { fee: 5, total_spent: 5 });
        assert_eq!(ledger.polls.load(Ordering::SeqCst), 4);
        assert_eq!(ledger.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_skips_fetch() {
        let ledger = FakeLedger::new(usize::MAX, Some(record()));

        let err = get_transaction_cost(
            &ledger,
            &ledger,
            &tx(),
            &account(PAYER),
            &config::WaitConfig {
                max_wait_seconds: 3,
                poll_interval_seconds: 1,
            },
            &NoProgress,
        )
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(ledger.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finalized_but_missing_record() {
        let ledger = FakeLedger::new(0, None);

        let err = get_transaction_cost(
            &ledger,
            &ledger,
            &tx(),
            &account(PAYER),
            &config::WaitConfig::default(),
            &NoProgress,
        )
        .await
        .unwrap_err();

        assert!(matches!(err.kind, errors::ErrorKind::TransactionNotFound(_)));
        assert!(!err.retriable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_payer() {
        let ledger = FakeLedger::new(0, Some(record()));

        let err = get_transaction_cost(
            &ledger,
            &ledger,
            &tx(),
            &account("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
            &config::WaitConfig::default(),
            &NoProgress,
        )
        .await
        .unwrap_err();

        assert!(matches!(err.kind, errors::ErrorKind::AccountNotFound(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_fetch_gives_same_cost() {
        let ledger = FakeLedger::new(0, Some(record()));
        let wait = config::WaitConfig::default();

        let recipient = account(RECIPIENT);

        let first = get_transaction_cost(&ledger, &ledger, &tx(), &recipient, &wait, &NoProgress)
            .await
            .unwrap();
        let second = get_transaction_cost(&ledger, &ledger, &tx(), &recipient, &wait, &NoProgress)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.total_spent, -5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_finality() {
        let ledger = FakeLedger::new(usize::MAX, Some(record()));

        let err = get_transaction_cost_with_cancel(
            &ledger,
            &ledger,
            &tx(),
            &account(PAYER),
            &config::WaitConfig::default(),
            &NoProgress,
            tokio::time::sleep(Duration::from_secs(5)),
        )
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(ledger.fetches.load(Ordering::SeqCst), 0);
    }
}
