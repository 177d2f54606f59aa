//! # solana-bot
//!
//! Telegram bots that relay text commands to a Solana RPC endpoint: balance lookups, SOL transfer
//! submission, recent-transaction polling and an in-memory wallet registry.
//!
//! Two bots share this library: the wallet bot (`solana-bot` binary) and the balance-only exchange
//! bot (`solana-exchange-bot` crate). Both run a [`HandlerChain`] over dbot-telegram's REPL.

pub mod cli;
pub mod command;
pub mod config;
pub mod handlers;
pub mod registry;
pub mod runner;

pub use cli::{parse_cli, Cli, Commands};
pub use command::{CommandInput, ExchangeCommand, WalletCommand};
pub use config::{BotConfig, RpcUrlPolicy};
pub use handler_chain::HandlerChain;
pub use handlers::{
    ExchangeCommandHandler, LoggingHandler, UnknownCommandHandler, WalletCommandHandler,
};
pub use registry::WalletRegistry;
pub use runner::{build_deps, run_bot, BotKind, HandlerDeps, SolanaBot};
