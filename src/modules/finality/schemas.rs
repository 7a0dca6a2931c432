use std::fmt;

/// Commitment level the ledger reports for a transaction.
/// Stages only move forward for a given transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    Processed,
    Confirmed,
    Finalized,
    /// Anything the node reports that is not one of the commitment levels above
    #[serde(other)]
    Unknown,
}

/// Unsuccessful polls made and whole seconds spent waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub polls: u64,
    pub seconds: u64,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            f.write_str("<1")
        } else {
            write!(f, "{}", self.seconds)
        }
    }
}
