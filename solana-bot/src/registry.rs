//! In-memory wallet registry: chat user id → registered wallet address.
//!
//! Lives only as long as the process. Registering again replaces the previous address.

use solana_rpc::Pubkey;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct WalletRegistry {
    wallets: RwLock<HashMap<i64, Pubkey>>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `address` with `user_id`, returning the address it replaced, if any.
    pub async fn register(&self, user_id: i64, address: Pubkey) -> Option<Pubkey> {
        let previous = self.wallets.write().await.insert(user_id, address);
        debug!(user_id = user_id, address = %address, replaced = previous.is_some(), "Wallet registered");
        previous
    }

    pub async fn get(&self, user_id: i64) -> Option<Pubkey> {
        self.wallets.read().await.get(&user_id).copied()
    }

    pub async fn len(&self) -> usize {
        self.wallets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wallets.read().await.is_empty()
    }
}
