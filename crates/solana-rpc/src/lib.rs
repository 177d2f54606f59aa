//! # solana-rpc
//!
//! The Solana surface used by the bots: base58 addresses ([`Pubkey`]), lamport/SOL conversion,
//! the wire format of an unsigned System Program transfer, and the [`ChainClient`] trait with its
//! reqwest JSON-RPC implementation ([`SolanaRpcClient`]).
//!
//! No retries, no signing. Each operation is one JSON-RPC round trip (a transfer is two: latest
//! blockhash, then `sendTransaction`).

pub mod address;
pub mod chain;
pub mod client;
pub mod error;
pub mod lamports;
pub mod transaction;
pub mod types;

pub use address::{is_valid_address, Pubkey, SYSTEM_PROGRAM_ID};
pub use chain::ChainClient;
pub use client::{SolanaRpcClient, DEFAULT_RPC_URL};
pub use error::RpcError;
pub use lamports::{format_sol, sol_to_lamports, LAMPORTS_PER_SOL};
pub use transaction::{build_transfer_message, encode_compact_u16, encode_unsigned_transaction};
pub use types::{Commitment, SendOptions, SignatureInfo};
