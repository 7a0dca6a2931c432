use crate::{errors, types};

/// How a transaction message lists its accounts.
///
/// Versioned (v0) messages carry a static key list that may be extended by
/// address-table lookups; legacy messages carry one flat list. Both put the
/// fee payer first and both index the balance snapshots the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageAccountKeys {
    Static(Vec<types::AccountId>),
    Flat(Vec<types::AccountId>),
    /// The node returned a message shape we cannot read keys from
    Unrecognized(String),
}

impl MessageAccountKeys {
    pub fn keys(&self) -> crate::Result<&[types::AccountId]> {
        match self {
            Self::Static(keys) | Self::Flat(keys) => Ok(keys.as_slice()),
            Self::Unrecognized(shape) => {
                Err(errors::ErrorKind::UnsupportedMessageEncoding(shape.clone()).into())
            }
        }
    }
}

/// Finalized transaction as far as cost accounting is concerned.
/// `pre_balances[i]` and `post_balances[i]` belong to account `i` of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub slot: u64,
    pub block_time: Option<i64>,
    pub account_keys: MessageAccountKeys,
    pub fee: u64,
    pub pre_balances: Vec<u64>,
    pub post_balances: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CostResult {
    /// Fee charged for the whole transaction, in lamports
    pub fee: u64,
    /// Balance decrease of the account, in lamports. Negative if it gained funds.
    pub total_spent: i64,
}

impl CostResult {
    pub fn fee_sol(&self) -> f64 {
        types::lamports::unsigned_lamports_to_sol(self.fee)
    }

    pub fn total_spent_sol(&self) -> f64 {
        types::lamports::lamports_to_sol(self.total_spent)
    }
}
