//! Handlers placed in the [`crate::HandlerChain`]: logging first, then the bot's command handler,
//! then (exchange bot only) the unknown-command fallback.

mod exchange;
mod logging;
mod unknown;
mod wallet;

pub use exchange::ExchangeCommandHandler;
pub use logging::LoggingHandler;
pub use unknown::UnknownCommandHandler;
pub use wallet::WalletCommandHandler;

use crate::command::CommandInput;
use dbot_core::Message;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Bot username filled in by the runner after `get_me`; `None` until then.
pub type BotUsername = Arc<RwLock<Option<String>>>;

/// Parses the message text as a command addressed to this bot.
pub(crate) async fn parse_command(message: &Message, bot_username: &BotUsername) -> Option<CommandInput> {
    if !message.is_command() {
        return None;
    }
    let username = bot_username.read().await;
    CommandInput::parse(&message.content, username.as_deref())
}
