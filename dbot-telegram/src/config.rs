//! Minimal Telegram config: bot token and optional Bot API URL.
//! Loaded from TELEGRAM_BOT_TOKEN (or BOT_TOKEN) and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;
use tracing::info;

/// Telegram connection settings shared by both bots.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// When set, Bot API requests go to this URL (e.g. a mock server in tests).
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN when provided.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("Telegram bot token is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds from the given token, no custom API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Checks that telegram_api_url, if set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointing it at telegram_api_url when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))?;
                info!(url = %url, "Using custom Telegram API URL");
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
