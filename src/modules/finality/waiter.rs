use std::future::Future;

use tokio::time::Instant;

use super::{ConfirmationStatus, Elapsed, ProgressSink, StatusQuery};
use crate::{config, errors, types};

/// Polls the ledger until a transaction is finalized or the wait budget runs out.
///
/// The waiter only holds its configuration, so one instance can serve any number
/// of concurrent waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalityWaiter {
    config: config::WaitConfig,
}

enum Stop {
    Finished(crate::Result<()>),
    Deadline,
    Cancelled,
}

impl FinalityWaiter {
    pub fn new(config: config::WaitConfig) -> Self {
        Self { config }
    }

    pub async fn wait(
        &self,
        status_query: &dyn StatusQuery,
        transaction_id: &types::TransactionId,
        progress: &dyn ProgressSink,
    ) -> crate::Result<Elapsed> {
        self.wait_with_cancel(
            status_query,
            transaction_id,
            progress,
            futures::future::pending(),
        )
        .await
    }

    /// Same as [`FinalityWaiter::wait`], but gives up as soon as `cancel` resolves.
    /// Cancellation is reported exactly like a timeout.
    ///
    /// Whatever the status query does, the wait ends by `max_wait + poll_interval`.
    pub async fn wait_with_cancel<C>(
        &self,
        status_query: &dyn StatusQuery,
        transaction_id: &types::TransactionId,
        progress: &dyn ProgressSink,
        cancel: C,
    ) -> crate::Result<Elapsed>
    where
        C: Future<Output = ()>,
    {
        if self.config.poll_interval_seconds == 0 {
            return Err(errors::ErrorKind::InvalidInput(
                "poll interval must be at least one second".to_string(),
            )
            .into());
        }

        let start = Instant::now();
        let deadline = start + self.config.max_wait() + self.config.poll_interval();
        let mut elapsed = Elapsed::default();
        progress.started(transaction_id);

        let stop = tokio::select! {
            polled = tokio::time::timeout_at(
                deadline,
                self.poll(status_query, transaction_id, progress, &mut elapsed, start),
            ) => match polled {
                Ok(result) => Stop::Finished(result),
                Err(_) => Stop::Deadline,
            },
            _ = cancel => Stop::Cancelled,
        };
        elapsed.seconds = start.elapsed().as_secs();
        progress.finished(&elapsed);

        let result = match stop {
            Stop::Finished(result) => result,
            Stop::Deadline => Err(errors::ErrorKind::FinalizationTimeout(format!(
                "no answer from the ledger after {} secs (limit {} secs)",
                elapsed, self.config.max_wait_seconds
            ))
            .into()),
            Stop::Cancelled => Err(errors::ErrorKind::FinalizationTimeout(format!(
                "cancelled after {} secs",
                elapsed
            ))
            .into()),
        };

        match &result {
            Ok(()) => tracing::info!(
                target: crate::LOGGER_MSG,
                "Transaction {} finalized after {} secs",
                transaction_id,
                elapsed
            ),
            Err(err) => tracing::warn!(
                target: crate::LOGGER_MSG,
                "Stopped waiting for transaction {}: {}",
                transaction_id,
                err
            ),
        }
        result.map(|_| elapsed)
    }

    async fn poll(
        &self,
        status_query: &dyn StatusQuery,
        transaction_id: &types::TransactionId,
        progress: &dyn ProgressSink,
        elapsed: &mut Elapsed,
        start: Instant,
    ) -> crate::Result<()> {
        let interval = self.config.poll_interval();
        loop {
            let status = status_query.query_status(transaction_id).await?;
            if status == Some(ConfirmationStatus::Finalized) {
                return Ok(());
            }
            tracing::debug!(
                target: crate::LOGGER_MSG,
                "Transaction {} status: {:?}",
                transaction_id,
                status
            );
            progress.tick(status);

            tokio::time::sleep(interval).await;
            elapsed.polls += 1;
            elapsed.seconds = start.elapsed().as_secs();

            if start.elapsed() > self.config.max_wait() {
                return Err(errors::ErrorKind::FinalizationTimeout(format!(
                    "not finalized after {} secs (limit {} secs)",
                    elapsed.seconds, self.config.max_wait_seconds
                ))
                .into());
            }
        }
    }
}
