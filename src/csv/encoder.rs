//! Single-line CSV encoding

use crate::csv::buffer::FieldBuffer;
use crate::types::{QuoteStyle, DEFAULT_SEPARATOR, QUOTE};

/// Quote a single field, doubling every embedded quote
///
/// ```
/// assert_eq!(quotecsv::encode_field(r#"a"b"#), r#""a""b""#);
/// ```
pub fn encode_field(value: &str) -> String {
    let mut out = String::with_capacity(encoded_len(value));
    encode_field_into(value, &mut out);
    out
}

/// Append the quoted form of `value` to `out`
pub fn encode_field_into<B: FieldBuffer>(value: &str, out: &mut B) {
    out.push_char(QUOTE);
    for ch in value.chars() {
        if ch == QUOTE {
            out.push_repeated(QUOTE, 2);
        } else {
            out.push_char(ch);
        }
    }
    out.push_char(QUOTE);
}

/// Quote every field and join them with `separator`
///
/// No line terminator is added.
///
/// ```
/// let line = quotecsv::encode_line(["a\"b", "c"], ',');
/// assert_eq!(line, r#""a""b","c""#);
/// ```
pub fn encode_line<I, S>(fields: I, separator: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    CsvEncoder::new()
        .separator(separator)
        .encode_line_into(fields, &mut out);
    out
}

// Surrounding quotes plus one extra byte per embedded quote
fn encoded_len(value: &str) -> usize {
    value.len() + 2 + value.bytes().filter(|&b| b == QUOTE as u8).count()
}

/// Line encoder configuration
///
/// # Examples
///
/// ```
/// use quotecsv::{CsvEncoder, QuoteStyle};
///
/// let encoder = CsvEncoder::new()
///     .separator(';')
///     .quote_style(QuoteStyle::Necessary);
/// assert_eq!(encoder.encode_line(["a", "b;c", ""]), r#"a;"b;c";"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvEncoder {
    separator: char,
    quote_style: QuoteStyle,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote_style: QuoteStyle::Always,
        }
    }
}

impl CsvEncoder {
    /// Create a comma-separated encoder that quotes every field
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator (builder pattern)
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set when fields are quoted (builder pattern)
    pub fn quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    /// Encode fields into a new line
    pub fn encode_line<I, S>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        self.encode_line_into(fields, &mut out);
        out
    }

    /// Append the encoded line to `out`
    pub fn encode_line_into<I, S>(&self, fields: I, out: &mut String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                out.push(self.separator);
            }
            self.write_field(field.as_ref(), out);
        }
    }

    fn write_field(&self, field: &str, out: &mut String) {
        if self.quote_style == QuoteStyle::Always || self.needs_quoting(field) {
            out.reserve(encoded_len(field));
            encode_field_into(field, out);
        } else {
            out.push_str(field);
        }
    }

    /// Check if field requires quoting
    fn needs_quoting(&self, field: &str) -> bool {
        field
            .chars()
            .any(|c| c == self.separator || c == QUOTE || c == '\n' || c == '\r')
    }
}
