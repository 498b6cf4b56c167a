//! Type definitions shared by the decoder and encoder

use crate::error::ParseModeError;
use std::fmt;
use std::str::FromStr;

/// The quote character. Not configurable.
pub const QUOTE: char = '"';

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = ',';

/// Ordered fields decoded from one line
pub type Record<T = String> = Vec<T>;

/// Decoder strictness
///
/// Only changes how malformed input is handled. Well-formed lines decode
/// to the same fields in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Reject malformed quoting and bare newlines
    #[default]
    Strict,
    /// Keep malformed quoting and bare newlines as literal text
    Loose,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => write!(f, "strict"),
            Mode::Loose => write!(f, "loose"),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("strict") {
            Ok(Mode::Strict)
        } else if s.eq_ignore_ascii_case("loose") {
            Ok(Mode::Loose)
        } else {
            Err(ParseModeError(s.to_string()))
        }
    }
}

/// When the encoder wraps a field in quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QuoteStyle {
    /// Quote every field
    #[default]
    Always,
    /// Quote only fields containing the separator, a quote, `\n` or `\r`
    Necessary,
}
