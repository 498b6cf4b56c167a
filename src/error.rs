//! Error types for line decoding

use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Malformed input found while decoding a line in [`Mode::Strict`](crate::Mode::Strict).
///
/// `position` is the byte offset in the input line of the offending character.
/// Loose mode never produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A quote appeared inside a field that was not opened with a quote
    #[error("unescaped quote inside unquoted field at byte {position}")]
    UnescapedQuoteInField { position: usize },

    /// Something other than the separator or end of line followed a closing quote
    #[error("invalid character after closing quote at byte {position}")]
    InvalidCharacterAfterClosingQuote { position: usize },

    /// A newline appeared outside a quoted field
    #[error("newline outside quoted field at byte {position}")]
    EmbeddedNewline { position: usize },
}

impl DecodeError {
    /// Byte offset of the character that triggered the error
    pub fn position(&self) -> usize {
        match self {
            DecodeError::UnescapedQuoteInField { position }
            | DecodeError::InvalidCharacterAfterClosingQuote { position }
            | DecodeError::EmbeddedNewline { position } => *position,
        }
    }
}

/// Unknown name passed to `Mode::from_str`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown decode mode '{0}', expected 'strict' or 'loose'")]
pub struct ParseModeError(pub String);
