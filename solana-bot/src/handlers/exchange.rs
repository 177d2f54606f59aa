//! Exchange bot commands: /start, /help, /balance.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use solana_rpc::{format_sol, ChainClient, Pubkey, RpcError};
use std::sync::Arc;
use tracing::{error, instrument};

use super::{parse_command, BotUsername};
use crate::command::ExchangeCommand;

const MSG_WELCOME: &str = "Welcome to the Solana Exchange Bot! 🚀\n\
Use the following commands to get started:\n\
/balance <wallet_address> - Check your Solana wallet balance\n\
/help - Get help and instructions";
const MSG_HELP: &str = "Solana Exchange Bot Commands:\n\
/start - Start the bot\n\
/balance <wallet_address> - Check Solana wallet balance\n\
/help - Get help and instructions";
const MSG_BALANCE_USAGE: &str =
    "Please provide a valid Solana wallet address. Usage: /balance <wallet_address>";
const MSG_BALANCE_INVALID_RESPONSE: &str =
    "Failed to fetch balance. Invalid response from Solana RPC.";
const MSG_BALANCE_FAILED: &str = "Failed to fetch balance. Please try again later.";

pub struct ExchangeCommandHandler {
    bot: Arc<dyn Bot>,
    chain_client: Arc<dyn ChainClient>,
    bot_username: BotUsername,
}

impl ExchangeCommandHandler {
    pub fn new(bot: Arc<dyn Bot>, chain_client: Arc<dyn ChainClient>, bot_username: BotUsername) -> Self {
        Self {
            bot,
            chain_client,
            bot_username,
        }
    }

    async fn balance(&self, address: Option<&str>) -> String {
        // The address is validated before any RPC call.
        let Some(pubkey) = address.and_then(|a| Pubkey::parse(a).ok()) else {
            return MSG_BALANCE_USAGE.to_string();
        };
        match self.chain_client.get_balance(&pubkey).await {
            Ok(lamports) => format!("Wallet Balance: {} SOL", format_sol(lamports)),
            // The node answered but without a result.
            Err(e @ (RpcError::InvalidResponse(_) | RpcError::Rpc { .. })) => {
                error!(error = %e, address = %pubkey, "Error fetching balance");
                MSG_BALANCE_INVALID_RESPONSE.to_string()
            }
            Err(e) => {
                error!(error = %e, address = %pubkey, "Error fetching balance");
                MSG_BALANCE_FAILED.to_string()
            }
        }
    }
}

#[async_trait]
impl Handler for ExchangeCommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(input) = parse_command(message, &self.bot_username).await else {
            return Ok(HandlerResponse::Continue);
        };
        let Some(command) = ExchangeCommand::from_input(&input) else {
            return Ok(HandlerResponse::Continue);
        };

        let reply = match command {
            ExchangeCommand::Start => MSG_WELCOME.to_string(),
            ExchangeCommand::Help => MSG_HELP.to_string(),
            ExchangeCommand::Balance { address } => self.balance(address.as_deref()).await,
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
