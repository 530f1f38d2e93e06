#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base58IdError {
    #[error("invalid Base58 string: {value}")]
    InvalidBase58 { value: String },

    #[error("invalid UUID string: {value}")]
    InvalidUuid { value: String },

    #[error("integer requires more than 16 bytes: {bits} bits")]
    IntegerTooLarge { bits: u64 },
}

pub type Result<T> = std::result::Result<T, Base58IdError>;
