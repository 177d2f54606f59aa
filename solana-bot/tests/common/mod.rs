//! Shared fakes for solana-bot integration tests: a recording [`Bot`], a scripted
//! [`ChainClient`] and message builders.

#![allow(dead_code)] // each test binary uses a subset

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, Chat, Message, MessageDirection, Result, User};
use solana_bot::{BotKind, HandlerDeps, SolanaBot, WalletRegistry};
use solana_rpc::{ChainClient, Pubkey, RpcError, SendOptions, SignatureInfo};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub const ALICE: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";
pub const BOB: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

/// One recorded reply.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that records every message it is asked to send.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
}

impl MockBot {
    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// Text of the only reply; panics when there is not exactly one.
    pub fn single_reply(&self) -> String {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected one reply, got {:?}", sent);
        sent[0].text.clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Canned result for a fake RPC call. RpcError is not Clone, so failures are described here and
/// built fresh per call.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Ok(T),
    Rpc(i64, &'static str),
    InvalidResponse,
    Http(u16),
}

impl<T: Clone> Outcome<T> {
    fn result(&self) -> std::result::Result<T, RpcError> {
        match self {
            Outcome::Ok(value) => Ok(value.clone()),
            Outcome::Rpc(code, message) => Err(RpcError::Rpc {
                code: *code,
                message: message.to_string(),
            }),
            Outcome::InvalidResponse => {
                Err(RpcError::InvalidResponse("missing result".to_string()))
            }
            Outcome::Http(status) => Err(RpcError::Http { status: *status }),
        }
    }
}

/// Scripted ChainClient. Records every call as `method address` lines.
pub struct FakeChainClient {
    pub balance: Outcome<u64>,
    pub signatures: Outcome<Vec<SignatureInfo>>,
    pub blockhash: Outcome<[u8; 32]>,
    pub send: Outcome<String>,
    pub calls: Mutex<Vec<String>>,
    pub sent_transactions: Mutex<Vec<(Vec<u8>, SendOptions)>>,
}

impl Default for FakeChainClient {
    fn default() -> Self {
        Self {
            balance: Outcome::Ok(0),
            signatures: Outcome::Ok(Vec::new()),
            blockhash: Outcome::Ok([9u8; 32]),
            send: Outcome::Ok("5sigTEST".to_string()),
            calls: Mutex::new(Vec::new()),
            sent_transactions: Mutex::new(Vec::new()),
        }
    }
}

impl FakeChainClient {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent_transactions(&self) -> Vec<(Vec<u8>, SendOptions)> {
        self.sent_transactions.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChainClient for FakeChainClient {
    async fn get_balance(&self, address: &Pubkey) -> std::result::Result<u64, RpcError> {
        self.record(format!("getBalance {}", address));
        self.balance.result()
    }

    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> std::result::Result<Vec<SignatureInfo>, RpcError> {
        self.record(format!("getSignaturesForAddress {} {}", address, limit));
        self.signatures.result()
    }

    async fn get_latest_blockhash(&self) -> std::result::Result<[u8; 32], RpcError> {
        self.record("getLatestBlockhash".to_string());
        self.blockhash.result()
    }

    async fn send_transaction(
        &self,
        transaction: &[u8],
        options: SendOptions,
    ) -> std::result::Result<String, RpcError> {
        self.record("sendTransaction".to_string());
        self.sent_transactions
            .lock()
            .unwrap()
            .push((transaction.to_vec(), options));
        self.send.result()
    }
}

pub fn signature(sig: &str) -> SignatureInfo {
    SignatureInfo {
        signature: sig.to_string(),
        slot: 1,
        err: None,
        memo: None,
        block_time: None,
        confirmation_status: Some("confirmed".to_string()),
    }
}

pub fn make_message(user_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg-{}", user_id),
        user: User {
            id: user_id,
            username: Some(format!("user{}", user_id)),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 1000 + user_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// A bot of `kind` wired to the given fakes.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub chain: Arc<FakeChainClient>,
    pub registry: Arc<WalletRegistry>,
    pub solana_bot: SolanaBot,
}

impl Harness {
    pub fn new(kind: BotKind, chain: FakeChainClient) -> Self {
        Self::with_username(kind, chain, Some("solbot"))
    }

    pub fn with_username(kind: BotKind, chain: FakeChainClient, username: Option<&str>) -> Self {
        Self::build(kind, chain, username, 5)
    }

    pub fn with_monitor_limit(kind: BotKind, chain: FakeChainClient, monitor_limit: usize) -> Self {
        Self::build(kind, chain, Some("solbot"), monitor_limit)
    }

    fn build(
        kind: BotKind,
        chain: FakeChainClient,
        username: Option<&str>,
        monitor_limit: usize,
    ) -> Self {
        let bot = Arc::new(MockBot::default());
        let chain = Arc::new(chain);
        let registry = Arc::new(WalletRegistry::new());
        let deps = HandlerDeps {
            bot: bot.clone(),
            chain_client: chain.clone(),
            registry: registry.clone(),
            bot_username: Arc::new(RwLock::new(username.map(str::to_string))),
            monitor_limit,
        };
        Self {
            solana_bot: SolanaBot::new(kind, &deps),
            bot,
            chain,
            registry,
        }
    }

    /// Sends `content` from `user_id` through the chain.
    pub async fn send(&self, user_id: i64, content: &str) {
        self.solana_bot
            .handle_core_message(&make_message(user_id, content))
            .await
            .unwrap();
    }
}
