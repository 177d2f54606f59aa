//! Wallet bot commands: /start, /help, /balance, /send, /register, /monitor.
//!
//! Each command makes at most one logical RPC call and answers with a fixed reply. Failures are
//! logged with their cause and answered with a generic message; nothing is retried.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use solana_rpc::{format_sol, sol_to_lamports, ChainClient, Pubkey, RpcError};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::{parse_command, BotUsername};
use crate::command::WalletCommand;
use crate::registry::WalletRegistry;

const MSG_WELCOME: &str =
    "Welcome to the Solana Telegram Bot! Use /help to see available commands.";
const MSG_HELP: &str = "Available commands:\n\
/balance <public_key> - Get wallet balance\n\
/send <to_public_key> <amount> - Send SOL tokens\n\
/monitor <public_key> - Monitor transactions for a wallet\n\
/register <public_key> - Register your wallet";
const MSG_MISSING_PUBLIC_KEY: &str = "Please provide a public key.";
const MSG_BALANCE_ERROR: &str = "Error fetching balance. Please check the public key.";
const MSG_SEND_USAGE: &str = "Please provide a recipient public key and amount.";
const MSG_NO_WALLET: &str = "No wallet associated with your account. Use /register to add one.";
const MSG_SEND_REJECTED: &str = "Transaction failed. Please try again.";
const MSG_SEND_ERROR: &str = "Error sending tokens. Please check the inputs.";
const MSG_REGISTER_ERROR: &str = "Error registering wallet. Please check the public key.";
const MSG_NO_TRANSACTIONS: &str = "No recent transactions found for this wallet.";
const MSG_MONITOR_ERROR: &str = "Error monitoring transactions. Please check the public key.";

/// Handles the wallet bot's commands; anything else continues down the chain.
pub struct WalletCommandHandler {
    bot: Arc<dyn Bot>,
    chain_client: Arc<dyn ChainClient>,
    registry: Arc<WalletRegistry>,
    bot_username: BotUsername,
    monitor_limit: usize,
}

impl WalletCommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        chain_client: Arc<dyn ChainClient>,
        registry: Arc<WalletRegistry>,
        bot_username: BotUsername,
        monitor_limit: usize,
    ) -> Self {
        Self {
            bot,
            chain_client,
            registry,
            bot_username,
            monitor_limit,
        }
    }

    async fn balance(&self, address: Option<&str>) -> String {
        let Some(address) = address else {
            return MSG_MISSING_PUBLIC_KEY.to_string();
        };
        let result = match Pubkey::parse(address) {
            Ok(pubkey) => self.chain_client.get_balance(&pubkey).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(lamports) => format!("Wallet Balance: {} SOL", format_sol(lamports)),
            Err(e) => {
                error!(error = %e, address = %address, "Error fetching balance");
                MSG_BALANCE_ERROR.to_string()
            }
        }
    }

    async fn send(&self, user_id: i64, to: Option<&str>, amount: Option<&str>) -> String {
        let (Some(to), Some(amount)) = (to, amount) else {
            return MSG_SEND_USAGE.to_string();
        };

        let lamports = match sol_to_lamports(amount) {
            Ok(lamports) => lamports,
            Err(e) => {
                error!(error = %e, amount = %amount, "Error sending tokens");
                return MSG_SEND_ERROR.to_string();
            }
        };

        let Some(from) = self.registry.get(user_id).await else {
            return MSG_NO_WALLET.to_string();
        };

        let result: std::result::Result<String, RpcError> = match Pubkey::parse(to) {
            Ok(to) => self.chain_client.transfer(&from, &to, lamports).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(signature) => {
                info!(from = %from, to = %to, lamports = lamports, signature = %signature, "Transfer submitted");
                format!("Transaction successful! TxID: {}", signature)
            }
            Err(e) if e.is_rejected_by_node() => {
                error!(error = %e, from = %from, to = %to, "Transfer rejected by node");
                MSG_SEND_REJECTED.to_string()
            }
            Err(e) => {
                error!(error = %e, from = %from, to = %to, "Error sending tokens");
                MSG_SEND_ERROR.to_string()
            }
        }
    }

    async fn register(&self, user_id: i64, address: Option<&str>) -> String {
        let Some(address) = address else {
            return MSG_MISSING_PUBLIC_KEY.to_string();
        };
        match Pubkey::parse(address) {
            Ok(pubkey) => {
                self.registry.register(user_id, pubkey).await;
                format!("Wallet registered: {}", pubkey)
            }
            Err(e) => {
                error!(error = %e, user_id = user_id, "Error registering wallet");
                MSG_REGISTER_ERROR.to_string()
            }
        }
    }

    async fn monitor(&self, address: Option<&str>) -> String {
        let Some(address) = address else {
            return MSG_MISSING_PUBLIC_KEY.to_string();
        };
        let result = match Pubkey::parse(address) {
            Ok(pubkey) => {
                self.chain_client
                    .get_signatures_for_address(&pubkey, self.monitor_limit)
                    .await
            }
            Err(e) => Err(e),
        };
        match result {
            Ok(signatures) if signatures.is_empty() => MSG_NO_TRANSACTIONS.to_string(),
            Ok(signatures) => {
                let lines: Vec<String> = signatures
                    .iter()
                    .take(self.monitor_limit)
                    .map(|s| format!("TxID: {}", s.signature))
                    .collect();
                format!("Recent transactions for wallet {}:\n{}", address, lines.join("\n"))
            }
            Err(e) => {
                error!(error = %e, address = %address, "Error monitoring transactions");
                MSG_MONITOR_ERROR.to_string()
            }
        }
    }
}

#[async_trait]
impl Handler for WalletCommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(input) = parse_command(message, &self.bot_username).await else {
            return Ok(HandlerResponse::Continue);
        };
        let Some(command) = WalletCommand::from_input(&input) else {
            return Ok(HandlerResponse::Continue);
        };

        let user_id = message.user.id;
        let reply = match command {
            WalletCommand::Start => MSG_WELCOME.to_string(),
            WalletCommand::Help => MSG_HELP.to_string(),
            WalletCommand::Balance { address } => self.balance(address.as_deref()).await,
            WalletCommand::Send { to, amount } => {
                self.send(user_id, to.as_deref(), amount.as_deref()).await
            }
            WalletCommand::Register { address } => {
                self.register(user_id, address.as_deref()).await
            }
            WalletCommand::Monitor { address } => self.monitor(address.as_deref()).await,
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
