//! Fallback for commands no earlier handler recognised.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{parse_command, BotUsername};

const MSG_UNKNOWN_COMMAND: &str =
    "Sorry, I don't understand that command. Use /help for instructions.";

/// Replies to any `/command` addressed to this bot. Place it last in the chain.
pub struct UnknownCommandHandler {
    bot: Arc<dyn Bot>,
    bot_username: BotUsername,
}

impl UnknownCommandHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: BotUsername) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for UnknownCommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(input) = parse_command(message, &self.bot_username).await else {
            return Ok(HandlerResponse::Continue);
        };
        info!(command = %input.name, user_id = message.user.id, "Unknown command");

        let reply = MSG_UNKNOWN_COMMAND.to_string();
        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
