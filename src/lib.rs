pub mod alphabet;
pub mod error;
pub mod radix;
pub mod random;
pub mod uuid;
pub mod validate;

pub use error::{Base58IdError, Result};
pub use radix::{base58_to_integer, integer_to_base58};
pub use random::{OsRandom, RandomBound, RandomSource, random_digits, random_number};
pub use uuid::{integer_to_uuid, uuid_to_integer};
pub use validate::{is_valid_base58, is_valid_uuid};

/// Convert a Base58 string to the canonical UUID rendering of its value.
///
/// Defined purely by composition through the integer pivot.
///
/// # Errors
///
/// Returns [`Base58IdError::InvalidBase58`] for content outside the
/// alphabet, or [`Base58IdError::IntegerTooLarge`] if the decoded value
/// does not fit in 16 bytes.
pub fn base58_to_uuid(base58: &str) -> Result<String> {
    uuid::integer_to_uuid(&radix::base58_to_integer(base58)?)
}

/// Convert a UUID string to the canonical Base58 rendering of its value.
///
/// Defined purely by composition through the integer pivot.
///
/// # Errors
///
/// Returns [`Base58IdError::InvalidUuid`] if `uuid` is not an accepted
/// UUID format.
pub fn uuid_to_base58(uuid: &str) -> Result<String> {
    Ok(radix::integer_to_base58(&uuid::uuid_to_integer(uuid)?))
}
