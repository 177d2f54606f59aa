//! Bot configuration loaded from environment variables (after `.env` via dotenvy).
//!
//! | Variable | Default |
//! |---|---|
//! | `TELEGRAM_BOT_TOKEN` (or `BOT_TOKEN`) | required |
//! | `SOLANA_RPC_URL` | mainnet-beta for the wallet bot; required for the exchange bot |
//! | `SOLANA_COMMITMENT` | `confirmed` |
//! | `SOLANA_RPC_TIMEOUT_SECS` | `30` |
//! | `MONITOR_LIMIT` | `5` |
//! | `LOG_FILE` | `logs/solana-bot.log` |
//! | `TELEGRAM_API_URL` (or `TELOXIDE_API_URL`) | unset |

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use solana_rpc::{Commitment, DEFAULT_RPC_URL};
use std::env;

/// What to do when `SOLANA_RPC_URL` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcUrlPolicy {
    /// Fall back to the public mainnet-beta endpoint.
    DefaultMainnet,
    /// Refuse to start.
    Required,
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub solana_rpc_url: String,
    pub commitment: Commitment,
    pub rpc_timeout_secs: u64,
    /// Number of signatures `/monitor` lists.
    pub monitor_limit: usize,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. `token` and `rpc_url` override TELEGRAM_BOT_TOKEN and SOLANA_RPC_URL when provided.
    pub fn load(
        token: Option<String>,
        rpc_url: Option<String>,
        policy: RpcUrlPolicy,
    ) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;

        let solana_rpc_url = match rpc_url.or_else(|| env::var("SOLANA_RPC_URL").ok()) {
            Some(url) => url,
            None if policy == RpcUrlPolicy::DefaultMainnet => DEFAULT_RPC_URL.to_string(),
            None => anyhow::bail!(
                "TELEGRAM_BOT_TOKEN and SOLANA_RPC_URL environment variables must be set."
            ),
        };

        let commitment = match env::var("SOLANA_COMMITMENT") {
            Ok(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            Err(_) => Commitment::Confirmed,
        };
        let rpc_timeout_secs = parse_env("SOLANA_RPC_TIMEOUT_SECS", 30)?;
        let monitor_limit = parse_env("MONITOR_LIMIT", 5)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/solana-bot.log".to_string());

        Ok(Self {
            telegram,
            solana_rpc_url,
            commitment,
            rpc_timeout_secs,
            monitor_limit,
            log_file,
        })
    }

    /// Validates URLs and limits. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if rpc_url_is_invalid(&self.solana_rpc_url) {
            anyhow::bail!("SOLANA_RPC_URL is not a valid URL: {}", self.solana_rpc_url);
        }
        if self.monitor_limit == 0 || self.monitor_limit > 1000 {
            anyhow::bail!("MONITOR_LIMIT must be between 1 and 1000, got {}", self.monitor_limit);
        }
        if self.rpc_timeout_secs == 0 {
            anyhow::bail!("SOLANA_RPC_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(s) => s
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {s}")),
        Err(_) => Ok(default),
    }
}

fn rpc_url_is_invalid(url: &str) -> bool {
    solana_rpc::SolanaRpcClient::new(url).is_err()
}
