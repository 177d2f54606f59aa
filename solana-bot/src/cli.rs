//! CLI parser shared by both bot binaries.

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "Solana Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; flags override TELEGRAM_BOT_TOKEN / SOLANA_RPC_URL).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        rpc_url: Option<String>,
    },
}

/// Parses process args, reporting `bin_name` in usage and help output. Exits on parse errors.
pub fn parse_cli(bin_name: &'static str) -> Cli {
    let matches = Cli::command().name(bin_name).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}
