//! Exchange bot: /start, /help, /balance; other commands get a short "unknown command" reply.
//! Requires both TELEGRAM_BOT_TOKEN and SOLANA_RPC_URL (or the matching flags).

use anyhow::Result;
use solana_bot::{parse_cli, run_bot, BotConfig, BotKind, Commands, RpcUrlPolicy};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = parse_cli("solana-exchange-bot");

    match cli.command {
        Commands::Run { token, rpc_url } => {
            let config = BotConfig::load(token, rpc_url, RpcUrlPolicy::Required)?;
            run_bot(config, BotKind::Exchange).await
        }
    }
}
