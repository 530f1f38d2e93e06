use num_bigint::BigUint;
use num_traits::Zero;

use crate::alphabet;
use crate::error::{Base58IdError, Result};

/// Encode a non-negative integer as a Base58 string, most-significant
/// digit first.
///
/// The result is the canonical minimal form: no leading zero digits, and
/// zero encodes as the single index-0 character `"A"`, never as `""`.
pub fn integer_to_base58(n: &BigUint) -> String {
    if n.is_zero() {
        return alphabet::digit_char(0).to_string();
    }
    n.to_radix_be(58)
        .into_iter()
        .map(alphabet::digit_char)
        .collect()
}

/// Decode a Base58 string to its integer value.
///
/// The empty string decodes to zero. Leading zero digits (the alphabet's
/// index-0 character `A`) are insignificant, exactly as leading zeros in
/// decimal: `"AAAxyz"` and `"xyz"` decode to the same integer.
///
/// # Errors
///
/// Returns [`Base58IdError::InvalidBase58`] if `s` contains any character
/// outside the alphabet.
pub fn base58_to_integer(s: &str) -> Result<BigUint> {
    let mut acc = BigUint::zero();
    for c in s.chars() {
        match alphabet::digit_value(c) {
            Some(digit) => acc = acc * 58u32 + u32::from(digit),
            None => {
                return Err(Base58IdError::InvalidBase58 {
                    value: s.to_string(),
                });
            }
        }
    }
    Ok(acc)
}
