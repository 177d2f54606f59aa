//! [`ChainClient`]: the blockchain operations the bots relay. Implemented over HTTP by
//! [`crate::SolanaRpcClient`]; tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::address::Pubkey;
use crate::error::RpcError;
use crate::transaction::{build_transfer_message, encode_unsigned_transaction};
use crate::types::{Commitment, SendOptions, SignatureInfo};

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Balance of `address` in lamports.
    async fn get_balance(&self, address: &Pubkey) -> Result<u64, RpcError>;

    /// Up to `limit` most recent transaction signatures involving `address`, newest first.
    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, RpcError>;

    /// Latest blockhash, used as the transaction's recent blockhash.
    async fn get_latest_blockhash(&self) -> Result<[u8; 32], RpcError>;

    /// Submits a wire-format transaction and returns its signature.
    async fn send_transaction(
        &self,
        transaction: &[u8],
        options: SendOptions,
    ) -> Result<String, RpcError>;

    /// Builds an unsigned System Program transfer and submits it with preflight skipped.
    async fn transfer(&self, from: &Pubkey, to: &Pubkey, lamports: u64) -> Result<String, RpcError> {
        let blockhash = self.get_latest_blockhash().await?;
        let message = build_transfer_message(from, to, lamports, &blockhash);
        let wire = encode_unsigned_transaction(&message);
        self.send_transaction(
            &wire,
            SendOptions {
                skip_preflight: true,
                preflight_commitment: Commitment::Confirmed,
            },
        )
        .await
    }
}
