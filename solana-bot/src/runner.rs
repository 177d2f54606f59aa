//! Wiring: config → RPC client, Telegram adapter and registry → handler chain → REPL.

use anyhow::Result;
use dbot_core::{init_tracing, Bot, Message};
use dbot_telegram::{run_repl, BotCommand, TelegramBotAdapter};
use handler_chain::HandlerChain;
use solana_rpc::{ChainClient, SolanaRpcClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::command::{ExchangeCommand, WalletCommand};
use crate::config::BotConfig;
use crate::handlers::{
    BotUsername, ExchangeCommandHandler, LoggingHandler, UnknownCommandHandler,
    WalletCommandHandler,
};
use crate::registry::WalletRegistry;

/// Which of the two bots to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    /// /start, /help, /balance, /send, /register, /monitor.
    Wallet,
    /// /start, /help, /balance, plus a reply for unknown commands.
    Exchange,
}

/// Everything the handlers share. Tests build this directly with fakes.
#[derive(Clone)]
pub struct HandlerDeps {
    pub bot: Arc<dyn Bot>,
    pub chain_client: Arc<dyn ChainClient>,
    pub registry: Arc<WalletRegistry>,
    pub bot_username: BotUsername,
    pub monitor_limit: usize,
}

impl BotKind {
    /// Logging first, then the command handler; the exchange bot ends with the unknown-command reply.
    pub fn build_chain(&self, deps: &HandlerDeps) -> HandlerChain {
        let chain = HandlerChain::new().add_handler(Arc::new(LoggingHandler));
        match self {
            BotKind::Wallet => chain.add_handler(Arc::new(WalletCommandHandler::new(
                deps.bot.clone(),
                deps.chain_client.clone(),
                deps.registry.clone(),
                deps.bot_username.clone(),
                deps.monitor_limit,
            ))),
            BotKind::Exchange => chain
                .add_handler(Arc::new(ExchangeCommandHandler::new(
                    deps.bot.clone(),
                    deps.chain_client.clone(),
                    deps.bot_username.clone(),
                )))
                .add_handler(Arc::new(UnknownCommandHandler::new(
                    deps.bot.clone(),
                    deps.bot_username.clone(),
                ))),
        }
    }

    pub fn commands(&self) -> Vec<BotCommand> {
        match self {
            BotKind::Wallet => WalletCommand::bot_commands(),
            BotKind::Exchange => ExchangeCommand::bot_commands(),
        }
    }
}

/// Builds the teloxide bot and the handler dependencies from config. Does not touch the network.
pub fn build_deps(config: &BotConfig) -> Result<(teloxide::Bot, HandlerDeps)> {
    let teloxide_bot = config.telegram.build_bot()?;
    let chain_client = SolanaRpcClient::with_timeout(
        &config.solana_rpc_url,
        Duration::from_secs(config.rpc_timeout_secs),
    )?
    .with_commitment(config.commitment);

    let deps = HandlerDeps {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        chain_client: Arc::new(chain_client),
        registry: Arc::new(WalletRegistry::new()),
        bot_username: BotUsername::default(),
        monitor_limit: config.monitor_limit,
    };
    Ok((teloxide_bot, deps))
}

/// A bot's handler chain without the Telegram transport.
pub struct SolanaBot {
    pub kind: BotKind,
    pub handler_chain: HandlerChain,
}

impl SolanaBot {
    pub fn new(kind: BotKind, deps: &HandlerDeps) -> Self {
        Self {
            kind,
            handler_chain: kind.build_chain(deps),
        }
    }

    /// Drive handler chain with core Message (for integration tests).
    #[doc(hidden)]
    pub async fn handle_core_message(&self, message: &Message) -> Result<()> {
        if let Err(e) = self.handler_chain.handle(message).await {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
        }
        Ok(())
    }
}

/// Main entry: validate config, init logging, build the chain, then run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, kind: BotKind) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        kind = ?kind,
        rpc_url = %config.solana_rpc_url,
        commitment = %config.commitment.as_str(),
        "Initializing bot"
    );

    let (teloxide_bot, deps) = build_deps(&config)?;
    let bot = SolanaBot::new(kind, &deps);

    info!(handlers = bot.handler_chain.len(), "Bot started successfully");

    run_repl(teloxide_bot, bot.handler_chain, deps.bot_username, kind.commands()).await
}
