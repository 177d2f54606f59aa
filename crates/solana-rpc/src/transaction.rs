//! Wire format of a native SOL transfer.
//!
//! ```text
//! Transaction:
//!   num_signatures          compact-u16
//!   signatures              64 bytes * num_signatures
//!   message:
//!     num_required_sigs     u8
//!     num_readonly_signed   u8
//!     num_readonly_unsigned u8
//!     num_accounts          compact-u16
//!     account_keys          32 bytes * num_accounts
//!     recent_blockhash      32 bytes
//!     num_instructions      compact-u16
//!     instructions[]        program_id_index u8, compact-u16 + account indices, compact-u16 + data
//! ```
//!
//! Transactions are submitted with a zeroed signature slot; signing is left to whoever holds the key.

use crate::address::{Pubkey, SYSTEM_PROGRAM_ID};

/// System Program `Transfer` instruction index (little-endian u32).
const SYSTEM_TRANSFER_IX_INDEX: u32 = 2;

const SIGNATURE_LEN: usize = 64;

/// Encodes a `u16` in Solana's compact-u16 (7 bits per byte, high bit = continuation).
pub fn encode_compact_u16(value: u16) -> Vec<u8> {
    let mut val = value as u32;
    let mut out = Vec::with_capacity(3);

    loop {
        let mut byte = (val & 0x7f) as u8;
        val >>= 7;
        if val > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if val == 0 {
            break;
        }
    }

    out
}

/// Serializes the message of a System Program transfer of `lamports` from `from` to `to`.
///
/// `from` is the fee payer and only signer. A self-transfer shares one account slot.
pub fn build_transfer_message(
    from: &Pubkey,
    to: &Pubkey,
    lamports: u64,
    recent_blockhash: &[u8; 32],
) -> Vec<u8> {
    let (account_keys, to_index): (Vec<&Pubkey>, u8) = if from == to {
        (vec![from, &SYSTEM_PROGRAM_ID], 0)
    } else {
        (vec![from, to, &SYSTEM_PROGRAM_ID], 1)
    };
    let program_id_index = (account_keys.len() - 1) as u8;

    let mut data = Vec::with_capacity(12);
    data.extend_from_slice(&SYSTEM_TRANSFER_IX_INDEX.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());

    let mut buf = Vec::with_capacity(160);

    // Header: one writable signer, no read-only signers, the program id is the only read-only account.
    buf.push(1);
    buf.push(0);
    buf.push(1);

    buf.extend_from_slice(&encode_compact_u16(account_keys.len() as u16));
    for key in &account_keys {
        buf.extend_from_slice(key.as_bytes());
    }

    buf.extend_from_slice(recent_blockhash);

    buf.extend_from_slice(&encode_compact_u16(1));
    buf.push(program_id_index);
    let account_indices = [0u8, to_index];
    buf.extend_from_slice(&encode_compact_u16(account_indices.len() as u16));
    buf.extend_from_slice(&account_indices);
    buf.extend_from_slice(&encode_compact_u16(data.len() as u16));
    buf.extend_from_slice(&data);

    buf
}

/// Wraps a message into transaction wire format with one empty (all-zero) signature.
pub fn encode_unsigned_transaction(message: &[u8]) -> Vec<u8> {
    let mut wire = Vec::with_capacity(1 + SIGNATURE_LEN + message.len());
    wire.extend_from_slice(&encode_compact_u16(1));
    wire.extend_from_slice(&[0u8; SIGNATURE_LEN]);
    wire.extend_from_slice(message);
    wire
}
