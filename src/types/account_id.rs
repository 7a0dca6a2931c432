use std::fmt;
use std::str::FromStr;

use derive_more::{AsRef, Deref, Into};
use serde::{Deserialize, Serialize};

use crate::{errors, types};

/// Base58 address of a ledger account (a 32-byte public key).
#[derive(Eq, Ord, Hash, Clone, PartialEq, PartialOrd, Into, AsRef, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub(crate) String);

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        types::check_base58("account id", s, 32..=44, 32)?;
        Ok(Self(s.to_string()))
    }
}
