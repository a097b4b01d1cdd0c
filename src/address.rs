// src/address.rs
//
// Address-format predicate and checksum helpers. A deployment is only
// considered good once its address passes `is_proper_address`.

use ethers::types::Address;
use ethers::utils::{keccak256, to_checksum};

/// True iff `s` is a well-formed 20-byte hex address: `0x` prefix, exactly
/// 40 hex digits, and a valid EIP-55 checksum whenever the hex part mixes
/// upper and lower case. All-lowercase and all-uppercase forms carry no
/// checksum and are accepted as-is.
pub fn is_proper_address(s: &str) -> bool {
    let hex_part = match s.strip_prefix("0x") {
        Some(h) => h,
        None => return false,
    };
    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        return checksum_holds(hex_part);
    }
    true
}

/// EIP-55: hash the lowercase hex, then every alphabetic digit must be
/// uppercase exactly when the matching hash nibble is >= 8.
fn checksum_holds(hex_part: &str) -> bool {
    let lower = hex_part.to_ascii_lowercase();
    let hash_hex = hex::encode(keccak256(lower.as_bytes()));

    hex_part.chars().zip(hash_hex.chars()).all(|(c, h)| {
        if !c.is_ascii_alphabetic() {
            return true;
        }
        let nibble = h.to_digit(16).unwrap_or(0);
        c.is_ascii_uppercase() == (nibble >= 8)
    })
}

/// EIP-55 rendering of a parsed address.
pub fn checksummed(addr: &Address) -> String {
    to_checksum(addr, None)
}

/// The zero address is format-valid but never a plausible deployment result
/// on a healthy chain.
pub fn is_zero(addr: &Address) -> bool {
    *addr == Address::zero()
}
