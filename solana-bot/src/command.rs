//! Text command parsing shared by both bots.
//!
//! Parsing is whitespace-based: the first token is the command, the rest are arguments.
//! Handlers read only the arguments they need and ignore the rest.

use dbot_telegram::BotCommand;

/// A `/command arg ...` message split into its name (lowercase, without `/` or `@bot`) and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInput {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandInput {
    /// Returns `None` for plain text and for commands addressed to another bot (`/cmd@otherbot`).
    /// When `bot_username` is unknown, any `@bot` suffix is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let head = tokens.next()?.strip_prefix('/')?;

        let (name, target) = match head.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (head, None),
        };
        if name.is_empty() {
            return None;
        }
        if let (Some(target), Some(me)) = (target, bot_username) {
            if !target.eq_ignore_ascii_case(me.trim_start_matches('@')) {
                return None;
            }
        }

        Some(Self {
            name: name.to_ascii_lowercase(),
            args: tokens.map(str::to_string).collect(),
        })
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    fn owned_arg(&self, index: usize) -> Option<String> {
        self.arg(index).map(str::to_string)
    }
}

/// Commands understood by the wallet bot. Arguments stay raw; handlers validate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand {
    Start,
    Help,
    Balance { address: Option<String> },
    Send { to: Option<String>, amount: Option<String> },
    Register { address: Option<String> },
    Monitor { address: Option<String> },
}

impl WalletCommand {
    pub fn from_input(input: &CommandInput) -> Option<Self> {
        let command = match input.name.as_str() {
            "start" => Self::Start,
            "help" => Self::Help,
            "balance" => Self::Balance {
                address: input.owned_arg(0),
            },
            "send" => Self::Send {
                to: input.owned_arg(0),
                amount: input.owned_arg(1),
            },
            "register" => Self::Register {
                address: input.owned_arg(0),
            },
            "monitor" => Self::Monitor {
                address: input.owned_arg(0),
            },
            _ => return None,
        };
        Some(command)
    }

    /// Command menu published with `setMyCommands`.
    pub fn bot_commands() -> Vec<BotCommand> {
        vec![
            BotCommand::new("start", "Show the welcome message"),
            BotCommand::new("help", "List available commands"),
            BotCommand::new("balance", "Get wallet balance: /balance <public_key>"),
            BotCommand::new("send", "Send SOL: /send <to_public_key> <amount>"),
            BotCommand::new("monitor", "Recent transactions: /monitor <public_key>"),
            BotCommand::new("register", "Register your wallet: /register <public_key>"),
        ]
    }
}

/// Commands understood by the exchange bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeCommand {
    Start,
    Help,
    Balance { address: Option<String> },
}

impl ExchangeCommand {
    pub fn from_input(input: &CommandInput) -> Option<Self> {
        match input.name.as_str() {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "balance" => Some(Self::Balance {
                address: input.owned_arg(0),
            }),
            _ => None,
        }
    }

    pub fn bot_commands() -> Vec<BotCommand> {
        vec![
            BotCommand::new("start", "Show the welcome message"),
            BotCommand::new("balance", "Get wallet balance: /balance <wallet_address>"),
            BotCommand::new("help", "Show usage instructions"),
        ]
    }
}
