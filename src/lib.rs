//! # quotecsv
//!
//! Decode and encode a single line of delimiter-separated, quote-escaped text.
//!
//! Reading files and splitting them into lines is left to the caller; this
//! crate handles one physical line at a time.
//!
//! ## Decoding
//!
//! ```
//! use quotecsv::{decode, DecodeError, Mode};
//!
//! assert_eq!(decode("hello,world", ',', Mode::Strict).unwrap(), vec!["hello", "world"]);
//! assert_eq!(
//!     decode(r#""hello ""world""""#, ',', Mode::Strict).unwrap(),
//!     vec![r#"hello "world""#]
//! );
//!
//! // Malformed quoting fails in strict mode and is kept literally in loose mode
//! assert!(matches!(
//!     decode(r#"hello"world"#, ',', Mode::Strict),
//!     Err(DecodeError::UnescapedQuoteInField { .. })
//! ));
//! assert_eq!(decode(r#"hello"world"#, ',', Mode::Loose).unwrap(), vec![r#"hello"world"#]);
//! ```
//!
//! ## Encoding
//!
//! Every field is quoted and embedded quotes are doubled:
//!
//! ```
//! assert_eq!(quotecsv::encode_line(["a\"b", "c"], ','), r#""a""b","c""#);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Mode`], [`QuoteStyle`],
//!   [`CsvDecoder`] and [`CsvEncoder`]
//! - `parallel`: `CsvDecoder::par_decode_batch` on the rayon thread pool

pub mod csv;
pub mod error;
pub mod types;

pub use csv::{
    decode, decode_with, encode_field, encode_field_into, encode_line, CsvDecoder, CsvEncoder,
    FieldBuffer,
};
pub use error::{DecodeError, ParseModeError, Result};
pub use types::{Mode, QuoteStyle, Record, DEFAULT_SEPARATOR, QUOTE};
