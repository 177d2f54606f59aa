//! Lamport / SOL conversion. Exact integer arithmetic; no floating point.

use crate::error::RpcError;

/// 1 SOL = 10^9 lamports.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

const SOL_DECIMALS: usize = 9;

/// Renders lamports as a SOL amount: trailing zeros trimmed, at least one fractional digit.
///
/// `0` → `0.0`, `1_500_000_000` → `1.5`, `5_000` → `0.000005`.
pub fn format_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    if frac == 0 {
        return format!("{whole}.0");
    }
    let frac = format!("{frac:09}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Parses a user-supplied SOL amount (`1`, `0.5`, `.25`) into lamports.
///
/// Rejects signs, exponents, more than 9 fractional digits, overflow and zero.
pub fn sol_to_lamports(amount: &str) -> Result<u64, RpcError> {
    let amount = amount.trim();
    let invalid = |reason: &str| RpcError::InvalidAmount(format!("{amount:?}: {reason}"));

    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("empty"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("not a decimal number"));
    }
    if frac.len() > SOL_DECIMALS {
        return Err(invalid("more than 9 decimal places"));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid("too large"))?
    };
    let frac: u64 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<9}").parse().map_err(|_| invalid("bad fraction"))?
    };

    let lamports = whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|l| l.checked_add(frac))
        .ok_or_else(|| invalid("too large"))?;
    if lamports == 0 {
        return Err(invalid("must be greater than zero"));
    }
    Ok(lamports)
}
