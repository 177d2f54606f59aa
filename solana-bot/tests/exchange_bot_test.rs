//! Integration tests for the exchange bot: /start, /help, /balance and the unknown-command reply.

mod common;

use common::{FakeChainClient, Harness, Outcome, ALICE};
use solana_bot::BotKind;

const USAGE: &str = "Please provide a valid Solana wallet address. Usage: /balance <wallet_address>";

fn exchange(chain: FakeChainClient) -> Harness {
    Harness::new(BotKind::Exchange, chain)
}

#[tokio::test]
async fn test_start_and_help() {
    let h = exchange(FakeChainClient::default());

    h.send(1, "/start").await;
    h.send(1, "/help").await;

    let sent = h.bot.sent();
    assert_eq!(
        sent[0].text,
        "Welcome to the Solana Exchange Bot! 🚀\nUse the following commands to get started:\n/balance <wallet_address> - Check your Solana wallet balance\n/help - Get help and instructions"
    );
    assert_eq!(
        sent[1].text,
        "Solana Exchange Bot Commands:\n/start - Start the bot\n/balance <wallet_address> - Check Solana wallet balance\n/help - Get help and instructions"
    );
}

/// **Test: balance is reported in SOL, not raw lamports.**
#[tokio::test]
async fn test_balance_success() {
    let h = exchange(FakeChainClient {
        balance: Outcome::Ok(250_000_000),
        ..Default::default()
    });

    h.send(1, &format!("/balance {}", ALICE)).await;

    assert_eq!(h.bot.single_reply(), "Wallet Balance: 0.25 SOL");
}

/// **Test: missing or invalid address shows usage without calling RPC.**
#[tokio::test]
async fn test_balance_usage() {
    let h = exchange(FakeChainClient::default());

    h.send(1, "/balance").await;
    h.send(1, "/balance 0OIl").await;

    let sent = h.bot.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|r| r.text == USAGE));
    assert!(h.chain.calls().is_empty());
}

/// **Test: a reply without a result (malformed or a JSON-RPC error) differs from transport failures.**
#[tokio::test]
async fn test_balance_failures() {
    for balance in [
        Outcome::InvalidResponse,
        Outcome::Rpc(-32602, "Invalid param"),
    ] {
        let h = exchange(FakeChainClient {
            balance,
            ..Default::default()
        });
        h.send(1, &format!("/balance {}", ALICE)).await;
        assert_eq!(
            h.bot.single_reply(),
            "Failed to fetch balance. Invalid response from Solana RPC."
        );
    }

    for balance in [Outcome::Http(500), Outcome::Http(503)] {
        let h = exchange(FakeChainClient {
            balance,
            ..Default::default()
        });
        h.send(1, &format!("/balance {}", ALICE)).await;
        assert_eq!(
            h.bot.single_reply(),
            "Failed to fetch balance. Please try again later."
        );
    }
}

/// **Test: any other command gets the unknown-command reply; wallet commands are unknown here.**
#[tokio::test]
async fn test_unknown_commands() {
    let h = exchange(FakeChainClient::default());

    h.send(1, "/send abc 1").await;
    h.send(1, "/whatever").await;

    let sent = h.bot.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|r| r.text
        == "Sorry, I don't understand that command. Use /help for instructions."));
}

/// **Test: plain text and commands addressed to another bot are ignored.**
#[tokio::test]
async fn test_ignored_messages() {
    let h = exchange(FakeChainClient::default());

    h.send(1, "what is my balance?").await;
    h.send(1, "/whatever@otherbot").await;

    assert!(h.bot.sent().is_empty());
}

/// **Test: before get_me fills the username, /cmd@anybot is accepted.**
#[tokio::test]
async fn test_unknown_username_accepts_any_mention() {
    let h = Harness::with_username(BotKind::Exchange, FakeChainClient::default(), None);

    h.send(1, "/help@somebot").await;

    assert!(h.bot.single_reply().starts_with("Solana Exchange Bot Commands:"));
}
