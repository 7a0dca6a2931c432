use std::fmt;
use std::str::FromStr;

use derive_more::{AsRef, Deref, Into};
use serde::{Deserialize, Serialize};

use crate::{errors, types};

/// Base58 transaction signature, the identifier the ledger indexes transactions by.
#[derive(Eq, Hash, Clone, PartialEq, Into, AsRef, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub(crate) String);

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 64 signature bytes encode to 87 or 88 base58 characters, fewer with leading zeros
        types::check_base58("transaction signature", s, 64..=88, 64)?;
        Ok(Self(s.to_string()))
    }
}
