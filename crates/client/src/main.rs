use clap::{Parser, Subcommand};
use noah_node_api::NoahNodeApi;
use noah_node_api::logging::{self, LoggingConfig};
use noah_node_api_config::{Args, NodeApiConfig};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query a Noah node from the command line", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: Args,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Node status
    Status,
    /// Block at a height, with decoded transactions
    Block { height: u64 },
    /// Balances of an address
    Address { address: String },
    /// Candidates at a height
    Candidates {
        height: u64,
        /// Include the stakes of every candidate
        #[arg(long)]
        stakes: bool,
    },
    /// Transaction by hash
    Transaction { hash: String },
    /// Minimal gas price accepted by the node
    MinGasPrice,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = NodeApiConfig::from_env_file(&cli.args.env_file)?;
    logging::init_with_config(LoggingConfig::from(&config.log))?;

    tracing::info!("Node URL: {}", config.node.url);
    tracing::info!(
        "Retries: {} (delay {} ms)",
        config.node.retries,
        config.node.retry_delay_ms
    );

    let api = NoahNodeApi::from_config(&config.node)?;

    match cli.command {
        Command::Status => print_json(&api.status().await?),
        Command::Block { height } => print_json(&api.block(height).await?),
        Command::Address { address } => print_json(&api.address(&address).await?),
        Command::Candidates { height, stakes } => {
            print_json(&api.candidates(height, stakes).await?)
        }
        Command::Transaction { hash } => print_json(&api.transaction(&hash).await?),
        Command::MinGasPrice => print_json(&api.min_gas_price().await?),
    }
}
