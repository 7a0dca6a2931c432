use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub rpc_url: String,
    /// Ask the node to look past its recent status cache when polling
    #[serde(default)]
    pub search_transaction_history: bool,
    #[serde(default)]
    pub wait: WaitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_owned(),
            search_transaction_history: false,
            wait: WaitConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaitConfig {
    pub max_wait_seconds: u64,
    pub poll_interval_seconds: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            max_wait_seconds: 30,
            poll_interval_seconds: 1,
        }
    }
}

impl WaitConfig {
    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_seconds)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    /// Upper bound for a single ledger request, no longer than a whole wait.
    pub fn request_timeout(&self) -> Duration {
        self.max_wait() + self.poll_interval()
    }
}
