//! reqwest-based JSON-RPC 2.0 client for a Solana RPC endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use crate::address::{decode_base58_32, Pubkey};
use crate::chain::ChainClient;
use crate::error::RpcError;
use crate::types::{Commitment, LatestBlockhash, SendOptions, SignatureInfo, WithContext};

/// Public mainnet-beta endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client bound to one endpoint. Cheap to share behind an `Arc`.
pub struct SolanaRpcClient {
    http: reqwest::Client,
    url: reqwest::Url,
    commitment: Commitment,
    next_id: AtomicU64,
}

impl SolanaRpcClient {
    /// Client for `url` with the default 30s request timeout and `confirmed` commitment.
    pub fn new(url: &str) -> Result<Self, RpcError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, RpcError> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| RpcError::InvalidEndpoint(format!("{url}: {e}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url,
            commitment: Commitment::default(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Commitment used for balance, signature and blockhash reads.
    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Sends one JSON-RPC request and decodes `result` into `T`.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let started = Instant::now();
        let response = self.http.post(self.url.clone()).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(
            method = %method,
            id = id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "rpc response"
        );

        let envelope: RpcEnvelope = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                return Err(RpcError::InvalidResponse(format!("{method}: {e}")));
            }
            Err(_) => {
                warn!(method = %method, status = status.as_u16(), "rpc http error");
                return Err(RpcError::Http {
                    status: status.as_u16(),
                });
            }
        };

        if let Some(err) = envelope.error {
            warn!(method = %method, code = err.code, message = %err.message, "rpc error");
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        let result = envelope
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: missing result")))?;
        serde_json::from_value(result)
            .map_err(|e| RpcError::InvalidResponse(format!("{method}: {e}")))
    }
}

#[async_trait]
impl ChainClient for SolanaRpcClient {
    #[instrument(skip(self, address), fields(address = %address))]
    async fn get_balance(&self, address: &Pubkey) -> Result<u64, RpcError> {
        let balance: WithContext<u64> = self
            .call(
                "getBalance",
                json!([address.to_string(), { "commitment": self.commitment.as_str() }]),
            )
            .await?;
        info!(lamports = balance.value, "getBalance");
        Ok(balance.value)
    }

    #[instrument(skip(self, address), fields(address = %address))]
    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, RpcError> {
        let signatures: Vec<SignatureInfo> = self
            .call(
                "getSignaturesForAddress",
                json!([
                    address.to_string(),
                    { "limit": limit, "commitment": self.commitment.as_str() }
                ]),
            )
            .await?;
        info!(count = signatures.len(), "getSignaturesForAddress");
        Ok(signatures)
    }

    #[instrument(skip(self))]
    async fn get_latest_blockhash(&self) -> Result<[u8; 32], RpcError> {
        let latest: WithContext<LatestBlockhash> = self
            .call(
                "getLatestBlockhash",
                json!([{ "commitment": self.commitment.as_str() }]),
            )
            .await?;
        decode_base58_32(&latest.value.blockhash)
            .map_err(|e| RpcError::InvalidResponse(format!("getLatestBlockhash: {e}")))
    }

    #[instrument(skip(self, transaction), fields(len = transaction.len()))]
    async fn send_transaction(
        &self,
        transaction: &[u8],
        options: SendOptions,
    ) -> Result<String, RpcError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(transaction);
        let signature: String = self
            .call(
                "sendTransaction",
                json!([
                    encoded,
                    {
                        "encoding": "base64",
                        "skipPreflight": options.skip_preflight,
                        "preflightCommitment": options.preflight_commitment.as_str(),
                    }
                ]),
            )
            .await?;
        info!(signature = %signature, "sendTransaction");
        Ok(signature)
    }
}
