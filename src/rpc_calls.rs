use std::str::FromStr;

use crate::modules::{cost, finality};
use crate::{config, rpc_helpers, types};

/// Ledger reads the cost routine needs, backed by a Solana JSON-RPC node.
#[derive(Debug)]
pub struct SolanaRpc {
    rpc_client: rpc_helpers::JsonRpcClient,
    search_transaction_history: bool,
}

impl SolanaRpc {
    pub fn new(rpc_client: rpc_helpers::JsonRpcClient, search_transaction_history: bool) -> Self {
        Self {
            rpc_client,
            search_transaction_history,
        }
    }

    pub fn from_config(config: &config::Config) -> crate::Result<Self> {
        Ok(Self::new(
            rpc_helpers::JsonRpcClient::connect(&config.rpc_url, config.wait.request_timeout())?,
            config.search_transaction_history,
        ))
    }
}

#[async_trait::async_trait]
impl finality::StatusQuery for SolanaRpc {
    async fn query_status(
        &self,
        transaction_id: &types::TransactionId,
    ) -> crate::Result<Option<finality::ConfirmationStatus>> {
        let response: SignatureStatuses = self
            .rpc_client
            .call(
                "getSignatureStatuses",
                serde_json::json!([
                    [transaction_id],
                    { "searchTransactionHistory": self.search_transaction_history }
                ]),
            )
            .await?;
        Ok(response.into_status())
    }
}

#[async_trait::async_trait]
impl cost::RecordFetch for SolanaRpc {
    async fn fetch_finalized_record(
        &self,
        transaction_id: &types::TransactionId,
    ) -> crate::Result<Option<cost::TransactionRecord>> {
        let response: Option<EncodedTransaction> = self
            .rpc_client
            .call(
                "getTransaction",
                serde_json::json!([
                    transaction_id,
                    {
                        "encoding": "json",
                        "commitment": "finalized",
                        "maxSupportedTransactionVersion": 0
                    }
                ]),
            )
            .await?;
        Ok(response.and_then(EncodedTransaction::into_record))
    }
}

#[derive(Debug, serde::Deserialize)]
struct SignatureStatuses {
    value: Vec<Option<SignatureStatus>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureStatus {
    #[serde(default)]
    confirmation_status: Option<finality::ConfirmationStatus>,
}

impl SignatureStatuses {
    fn into_status(self) -> Option<finality::ConfirmationStatus> {
        self.value.into_iter().next().flatten().map(|status| {
            status
                .confirmation_status
                .unwrap_or(finality::ConfirmationStatus::Unknown)
        })
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum TransactionVersion {
    Number(u8),
    Named(String),
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EncodedTransaction {
    slot: u64,
    #[serde(default)]
    block_time: Option<i64>,
    #[serde(default)]
    version: Option<TransactionVersion>,
    #[serde(default)]
    meta: Option<TransactionMeta>,
    transaction: serde_json::Value,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionMeta {
    fee: u64,
    pre_balances: Vec<u64>,
    post_balances: Vec<u64>,
}

impl EncodedTransaction {
    /// `None` when the node has the transaction but no status metadata for it.
    fn into_record(self) -> Option<cost::TransactionRecord> {
        let meta = self.meta?;
        let account_keys = account_keys(self.version.as_ref(), &self.transaction);
        Some(cost::TransactionRecord {
            slot: self.slot,
            block_time: self.block_time,
            account_keys,
            fee: meta.fee,
            pre_balances: meta.pre_balances,
            post_balances: meta.post_balances,
        })
    }
}

fn account_keys(
    version: Option<&TransactionVersion>,
    transaction: &serde_json::Value,
) -> cost::MessageAccountKeys {
    let keys = match transaction
        .get("message")
        .and_then(|message| message.get("accountKeys"))
        .and_then(serde_json::Value::as_array)
    {
        Some(keys) => keys,
        None => {
            return cost::MessageAccountKeys::Unrecognized(
                "message has no accountKeys list".to_string(),
            )
        }
    };
    let keys = match keys
        .iter()
        .map(|key| {
            key.as_str()
                .and_then(|key| types::AccountId::from_str(key).ok())
        })
        .collect::<Option<Vec<_>>>()
    {
        Some(keys) => keys,
        None => {
            return cost::MessageAccountKeys::Unrecognized(
                "accountKeys are not base58 strings".to_string(),
            )
        }
    };

    match version {
        None => cost::MessageAccountKeys::Flat(keys),
        Some(TransactionVersion::Named(name)) if name == "legacy" => {
            cost::MessageAccountKeys::Flat(keys)
        }
        Some(TransactionVersion::Number(0)) => cost::MessageAccountKeys::Static(keys),
        Some(other) => {
            cost::MessageAccountKeys::Unrecognized(format!("transaction version {:?}", other))
        }
    }
}
