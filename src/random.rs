use num_bigint::{BigUint, RandBigInt};
use num_traits::{ToPrimitive, Zero};
use rand::rngs::OsRng;

use crate::alphabet;
use crate::radix::integer_to_base58;

/// Default inclusive upper bound for [`random_number`]: `2^63 - 1`.
const DEFAULT_MAX: u64 = (1 << 63) - 1;

/// Number of digits produced by [`random_digits`] when no count is given.
const DEFAULT_DIGITS: i64 = 10;

/// A source of uniformly distributed non-negative integers.
///
/// Implementations are trusted to honor the stated bounds; their output is
/// used as-is and never validated.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`.
    fn integer_below(&mut self, bound: &BigUint) -> BigUint;

    /// Uniform integer in `[low, high]`.
    fn integer_in_range(&mut self, low: &BigUint, high: &BigUint) -> BigUint;
}

/// The operating system's cryptographically secure random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn integer_below(&mut self, bound: &BigUint) -> BigUint {
        OsRng.gen_biguint_below(bound)
    }

    fn integer_in_range(&mut self, low: &BigUint, high: &BigUint) -> BigUint {
        OsRng.gen_biguint_range(low, &(high + 1u32))
    }
}

/// Bound for [`random_number`]: an exclusive maximum or an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomBound {
    Below(BigUint),
    Range(BigUint, BigUint),
}

impl From<u64> for RandomBound {
    fn from(max: u64) -> Self {
        Self::Below(BigUint::from(max))
    }
}

impl From<std::ops::RangeInclusive<u64>> for RandomBound {
    fn from(range: std::ops::RangeInclusive<u64>) -> Self {
        Self::Range(BigUint::from(*range.start()), BigUint::from(*range.end()))
    }
}

/// Draw one uniform integer from `source` and encode it as Base58.
///
/// With no bound, draws from the inclusive range `[0, 2^63 - 1]`. The
/// source is invoked exactly once per call.
pub fn random_number<S: RandomSource>(source: &mut S, bound: Option<RandomBound>) -> String {
    let value = match bound {
        Some(RandomBound::Below(max)) => source.integer_below(&max),
        Some(RandomBound::Range(low, high)) => source.integer_in_range(&low, &high),
        None => source.integer_in_range(&BigUint::zero(), &BigUint::from(DEFAULT_MAX)),
    };
    integer_to_base58(&value)
}

/// Generate a string of `n` uniform Base58 digits (default 10).
///
/// Zero or negative `n` yields the empty string. Each digit is an
/// independent draw in `[0, 57]` mapped to its alphabet character, in draw
/// order. Unlike [`random_number`], this never pivots through a single
/// large integer, so the result always has exactly `n` characters.
pub fn random_digits<S: RandomSource>(source: &mut S, n: Option<i64>) -> String {
    let n = n.unwrap_or(DEFAULT_DIGITS);
    if n <= 0 {
        return String::new();
    }
    let bound = BigUint::from(58u8);
    (0..n)
        .map(|_| {
            let digit = source
                .integer_below(&bound)
                .to_u8()
                .expect("random source violated its bound");
            alphabet::digit_char(digit)
        })
        .collect()
}
