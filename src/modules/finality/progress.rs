use std::io::Write;
use std::sync::Mutex;

use super::{ConfirmationStatus, Elapsed};
use crate::types;

/// Receives progress while a transaction is being waited on.
/// Not part of the functional result; failures to report are ignored.
pub trait ProgressSink: Send + Sync {
    fn started(&self, transaction_id: &types::TransactionId);
    fn tick(&self, status: Option<ConfirmationStatus>);
    fn finished(&self, elapsed: &Elapsed);
}

/// Headless sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn started(&self, _: &types::TransactionId) {}
    fn tick(&self, _: Option<ConfirmationStatus>) {}
    fn finished(&self, _: &Elapsed) {}
}

/// Renders `Waiting for transaction to finalize [...] N secs.` into a text stream,
/// one dot per poll.
pub struct TextProgress<W: Write + Send> {
    out: Mutex<W>,
}

pub type ConsoleProgress = TextProgress<std::io::Stdout>;

impl ConsoleProgress {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TextProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes()).and_then(|_| out.flush());
        }
    }
}

impl<W: Write + Send> ProgressSink for TextProgress<W> {
    fn started(&self, _: &types::TransactionId) {
        self.write("Waiting for transaction to finalize [");
    }

    fn tick(&self, _: Option<ConfirmationStatus>) {
        self.write(".");
    }

    fn finished(&self, elapsed: &Elapsed) {
        self.write(&format!("] {} secs.\n", elapsed));
    }
}

/// Sink for services where stdout is not a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn started(&self, transaction_id: &types::TransactionId) {
        tracing::info!(
            target: crate::LOGGER_MSG,
            "Waiting for transaction {} to finalize",
            transaction_id
        );
    }

    fn tick(&self, status: Option<ConfirmationStatus>) {
        tracing::debug!(target: crate::LOGGER_MSG, "Not finalized yet: {:?}", status);
    }

    fn finished(&self, elapsed: &Elapsed) {
        tracing::info!(
            target: crate::LOGGER_MSG,
            "Stopped waiting after {} secs ({} polls)",
            elapsed,
            elapsed.polls
        );
    }
}
