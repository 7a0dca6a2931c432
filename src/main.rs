use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use solana_tx_cost::modules::finality::{ConsoleProgress, NoProgress, ProgressSink};
use solana_tx_cost::{config, get_transaction_cost, rpc_calls, types};

/// Wait for a transaction to be finalized and report what it cost the payer
#[derive(Parser, Debug)]
#[command(name = "solana-tx-cost", version)]
struct Cli {
    /// Transaction signature (base58)
    signature: String,

    /// Account whose balance change is reported, usually the fee payer
    payer: String,

    #[arg(long, env = "SOLANA_RPC_URL", default_value = config::DEFAULT_RPC_URL)]
    rpc_url: String,

    #[arg(long, env = "MAX_WAIT_SECONDS", default_value_t = 30)]
    max_wait_seconds: u64,

    #[arg(long, env = "POLL_INTERVAL_SECONDS", default_value_t = 1)]
    poll_interval_seconds: u64,

    /// Look up transactions older than the node's status cache
    #[arg(long, env = "SEARCH_TRANSACTION_HISTORY")]
    search_transaction_history: bool,

    /// Do not print the waiting progress bar
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> config::Config {
        config::Config {
            rpc_url: self.rpc_url.clone(),
            search_transaction_history: self.search_transaction_history,
            wait: config::WaitConfig {
                max_wait_seconds: self.max_wait_seconds,
                poll_interval_seconds: self.poll_interval_seconds,
            },
        }
    }
}

async fn run(cli: &Cli) -> solana_tx_cost::Result<()> {
    let config = cli.config();
    let transaction_id = types::TransactionId::from_str(&cli.signature)?;
    let payer = types::AccountId::from_str(&cli.payer)?;
    let rpc = rpc_calls::SolanaRpc::from_config(&config)?;

    println!(">>> Transaction signature: {}", transaction_id);
    let progress: Box<dyn ProgressSink> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ConsoleProgress::stdout())
    };
    let cost = get_transaction_cost(
        &rpc,
        &rpc,
        &transaction_id,
        &payer,
        &config.wait,
        progress.as_ref(),
    )
    .await?;

    println!(">>> Fee:  {} SOL", cost.fee_sol());
    println!(">>> Cost: {} SOL", cost.total_spent_sol());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::warn!(target: solana_tx_cost::LOGGER_MSG, "{:?}", err.kind);
            println!("Warning: {}", err);
            ExitCode::FAILURE
        }
    }
}
