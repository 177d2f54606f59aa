//! Solana addresses.
//!
//! An address is the Base58 encoding of a raw 32-byte Ed25519 public key; there is no hashing or
//! checksum. Parsing is the only validation the bots perform on user input.

use std::fmt;
use std::str::FromStr;

use crate::error::RpcError;

/// The System Program address: 32 zero bytes (`11111111111111111111111111111111`).
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey([0u8; 32]);

/// A 32-byte Solana account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parses a Base58 address; fails unless it decodes to exactly 32 bytes.
    pub fn parse(address: &str) -> Result<Self, RpcError> {
        decode_base58_32(address).map(Self).map_err(RpcError::InvalidAddress)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Pubkey {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

/// Returns true when `address` parses as a [`Pubkey`].
pub fn is_valid_address(address: &str) -> bool {
    Pubkey::parse(address).is_ok()
}

/// Decodes Base58 text that must be exactly 32 bytes (addresses and blockhashes).
pub(crate) fn decode_base58_32(text: &str) -> Result<[u8; 32], String> {
    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|e| format!("base58 decode failed: {e}"))?;

    bytes
        .try_into()
        .map_err(|v: Vec<u8>| format!("expected 32 bytes, got {}", v.len()))
}
