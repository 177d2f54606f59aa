//! Wallet bot: /start, /help, /balance, /send, /register, /monitor.

use anyhow::Result;
use solana_bot::{parse_cli, run_bot, BotConfig, BotKind, Commands, RpcUrlPolicy};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = parse_cli("solana-bot");

    match cli.command {
        Commands::Run { token, rpc_url } => {
            let config = BotConfig::load(token, rpc_url, RpcUrlPolicy::DefaultMainnet)?;
            run_bot(config, BotKind::Wallet).await
        }
    }
}
