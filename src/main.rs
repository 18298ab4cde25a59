//! `antchain` command-line client.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ clap ──▶ load_config ──▶ ChainClient ──▶ stdout (payload)
//!                                          │
//!   Ctrl-C ──▶ CallContext::cancel ────────┘
//! ```
//!
//! `identity`, `token-id` and `parse-output` work offline and never read
//! the configuration file.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use antchain_sdk::config::load_config;
use antchain_sdk::helpers::{identity_by_name, parse_output, token_id};
use antchain_sdk::observability::logging;
use antchain_sdk::{CallContext, ChainClient, ChainResult};

#[derive(Parser)]
#[command(name = "antchain")]
#[command(about = "Command-line client for the ledger contract service", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "ANTCHAIN_CONFIG", default_value = "antchain.toml")]
    config: PathBuf,

    /// Abort the whole operation after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommand),
    #[command(flatten)]
    Offline(OfflineCommand),
}

/// Commands that talk to the ledger.
#[derive(Subcommand)]
enum LedgerCommand {
    /// Obtain a session token
    ShakeHand,
    /// Create a chain account bound to a managed key
    CreateAccount {
        account: String,
        kms_id: String,
        #[arg(long, default_value_t = 100_000)]
        gas: u64,
    },
    /// Notarize a piece of content
    Deposit {
        content: String,
        #[arg(long, default_value_t = 100_000)]
        gas: u64,
    },
    /// Deploy Solidity bytecode
    Deploy {
        name: String,
        code: String,
        #[arg(long, default_value_t = 100_000)]
        gas: u64,
    },
    /// Call a Solidity method asynchronously
    Call {
        contract: String,
        method_sign: String,
        /// JSON array of input arguments
        #[arg(long, default_value = "[]")]
        inputs: String,
        /// JSON array of output types
        #[arg(long, default_value = "[]")]
        outputs: String,
        #[arg(long, default_value_t = 100_000)]
        gas: u64,
    },
    /// Look up a transaction
    Tx { hash: String },
    /// Look up a transaction receipt
    Receipt { hash: String },
    /// Block header by height
    BlockHeader { number: u64 },
    /// Block body by height
    BlockBody { number: u64 },
    /// Latest block height
    LastBlock,
    /// Account state
    Account { account: String },
}

/// Helpers that need neither configuration nor network.
#[derive(Subcommand)]
enum OfflineCommand {
    /// Identity derived from an account name (offline)
    Identity { name: String },
    /// Token id from a hex digest (offline)
    TokenId { hash: String },
    /// Decode a base64 contract output to hex (offline)
    ParseOutput { data: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Offline(command) => run_offline(command)?,
        Commands::Ledger(command) => {
            let config = load_config(&cli.config)?;
            logging::init(&config.observability);

            tracing::debug!(
                config = %cli.config.display(),
                endpoint = %config.chain.endpoint,
                "Configuration loaded"
            );

            let client = ChainClient::from_config(&config)?;

            let ctx = match cli.timeout_secs {
                Some(secs) => CallContext::with_timeout(Duration::from_secs(secs)),
                None => CallContext::new(),
            };

            let interrupt = ctx.cancellation_token().clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("Interrupted, cancelling call");
                    interrupt.cancel();
                }
            });

            run_ledger(&client, &ctx, command).await?
        }
    };

    println!("{}", output);
    Ok(())
}

async fn run_ledger(
    client: &ChainClient,
    ctx: &CallContext,
    command: LedgerCommand,
) -> ChainResult<String> {
    match command {
        LedgerCommand::ShakeHand => client.shake_hand(ctx).await,
        LedgerCommand::CreateAccount { account, kms_id, gas } => {
            client.create_account(ctx, &account, &kms_id, gas).await
        }
        LedgerCommand::Deposit { content, gas } => client.deposit(ctx, &content, gas).await,
        LedgerCommand::Deploy { name, code, gas } => {
            client.deploy_solidity(ctx, &name, &code, gas).await
        }
        LedgerCommand::Call {
            contract,
            method_sign,
            inputs,
            outputs,
            gas,
        } => {
            client
                .async_call_solidity(ctx, &contract, &method_sign, &inputs, &outputs, gas)
                .await
        }
        LedgerCommand::Tx { hash } => client.query_transaction(ctx, &hash).await,
        LedgerCommand::Receipt { hash } => client.query_receipt(ctx, &hash).await,
        LedgerCommand::BlockHeader { number } => client.query_block_header(ctx, number).await,
        LedgerCommand::BlockBody { number } => client.query_block_body(ctx, number).await,
        LedgerCommand::LastBlock => client.query_last_block(ctx).await,
        LedgerCommand::Account { account } => client.query_account(ctx, &account).await,
    }
}

fn run_offline(command: OfflineCommand) -> Result<String, Box<dyn std::error::Error>> {
    let output = match command {
        OfflineCommand::Identity { name } => serde_json::to_string(&identity_by_name(&name))?,
        OfflineCommand::TokenId { hash } => token_id(&hash)?.to_string(),
        OfflineCommand::ParseOutput { data } => parse_output(&data)?,
    };
    Ok(output)
}
