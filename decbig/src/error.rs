use thiserror::Error;

/// Errors from parsing, subtraction and narrowing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigUintError {
    /// A character outside `0`-`9` was found while parsing.
    #[error("invalid decimal digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
    /// Subtraction or decrement would go below zero.
    #[error("BigUint underflow")]
    Underflow,
    /// The value does not fit the requested native integer.
    #[error("BigUint does not fit in {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, BigUintError>;
