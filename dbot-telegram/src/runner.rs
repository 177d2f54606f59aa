//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Calls get_me to populate the bot username cache and publishes the command menu before polling.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Publishes the bot's command menu (`setMyCommands`). Failure is logged, not fatal.
#[instrument(skip(bot, commands))]
pub async fn register_commands(bot: &teloxide::Bot, commands: Vec<BotCommand>) {
    let count = commands.len();
    match bot.set_my_commands(commands).await {
        Ok(_) => info!(count = count, "Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

/// Starts the REPL with the given teloxide Bot, HandlerChain, and bot_username cache.
/// Each message is converted to core::Message and handled by the chain in a spawned task.
#[instrument(skip(bot, handler_chain, bot_username, commands))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    commands: Vec<BotCommand>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands addressed as /cmd@bot are accepted for any bot"),
    }

    if !commands.is_empty() {
        register_commands(&bot, commands).await;
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            // Text messages are logged by the chain's handlers.
            if msg.text().is_none() {
                debug!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message, skipped"
                );
                return respond(());
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        message_content = %core_msg.content,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
