//! CSV line decoding and encoding

mod buffer;
mod decoder;
mod encoder;

pub use buffer::FieldBuffer;
pub use decoder::{decode, decode_with, CsvDecoder};
pub use encoder::{encode_field, encode_field_into, encode_line, CsvEncoder};
