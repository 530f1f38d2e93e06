use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::{Base58IdError, Result};
use crate::validate;

/// Render a non-negative integer as a canonical UUID string: exactly 16
/// bytes, most-significant byte first, left zero-padded, formatted as
/// lowercase hex grouped `8-4-4-4-12`.
///
/// # Errors
///
/// Returns [`Base58IdError::IntegerTooLarge`] if `n` requires more than 16
/// bytes to represent, i.e. `n >= 2^128`.
pub fn integer_to_uuid(n: &BigUint) -> Result<String> {
    let value = n
        .to_u128()
        .ok_or(Base58IdError::IntegerTooLarge { bits: n.bits() })?;
    Ok(format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        (value >> 96) as u32,
        (value >> 80) as u16,
        (value >> 64) as u16,
        (value >> 48) as u16,
        (value as u64) & 0xffff_ffff_ffff,
    ))
}

/// Parse a UUID string in any accepted format as a big-endian unsigned
/// 128-bit integer.
///
/// # Errors
///
/// Returns [`Base58IdError::InvalidUuid`] if `s` is not an accepted UUID
/// format (see [`crate::validate::is_valid_uuid`]).
pub fn uuid_to_integer(s: &str) -> Result<BigUint> {
    let hex = validate::uuid_hex_digits(s).ok_or_else(|| Base58IdError::InvalidUuid {
        value: s.to_string(),
    })?;
    let value = u128::from_str_radix(&hex, 16).map_err(|_| Base58IdError::InvalidUuid {
        value: s.to_string(),
    })?;
    Ok(BigUint::from(value))
}
