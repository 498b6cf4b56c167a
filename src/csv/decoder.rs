//! Single-line CSV decoding
//!
//! Quotes are handled a whole run at a time. A run of consecutive quote
//! characters with odd length opens or closes the field (and contributes
//! `(len - 1) / 2` literal quotes); an even run is only escaped quotes.

use crate::csv::buffer::FieldBuffer;
use crate::error::{DecodeError, Result};
use crate::types::{Mode, Record, DEFAULT_SEPARATOR, QUOTE};
use log::{debug, trace};

/// Decode one line into its fields
///
/// # Examples
///
/// ```
/// use quotecsv::{decode, Mode};
///
/// let fields = decode(r#"a,"b,""c""""#, ',', Mode::Strict).unwrap();
/// assert_eq!(fields, vec!["a", r#"b,"c""#]);
/// ```
pub fn decode(line: &str, separator: char, mode: Mode) -> Result<Record> {
    decode_with::<String>(line, separator, mode)
}

/// Decode one line, accumulating each field in a `B`
///
/// ```
/// use quotecsv::{decode_with, Mode};
///
/// let fields = decode_with::<Vec<u8>>("x;\"y\"", ';', Mode::Strict).unwrap();
/// assert_eq!(fields, vec![b"x".to_vec(), b"y".to_vec()]);
/// ```
pub fn decode_with<B: FieldBuffer>(
    line: &str,
    separator: char,
    mode: Mode,
) -> Result<Record<B::Output>> {
    let mut field = B::default();
    decode_in(line, separator, mode, &mut field)
}

fn decode_in<B: FieldBuffer>(
    line: &str,
    separator: char,
    mode: Mode,
    field: &mut B,
) -> Result<Record<B::Output>> {
    debug_assert_ne!(separator, QUOTE, "separator must differ from the quote character");

    field.clear();
    let mut record = Vec::new();
    let mut in_quotes = false;
    let mut pos = 0;

    while let Some(ch) = line[pos..].chars().next() {
        if ch == QUOTE {
            if !in_quotes && !field.is_empty() {
                match mode {
                    Mode::Strict => {
                        return Err(reject(DecodeError::UnescapedQuoteInField { position: pos }))
                    }
                    Mode::Loose => {
                        trace!("keeping quote at byte {} as literal text", pos);
                        field.push_char(QUOTE);
                        pos += 1;
                        continue;
                    }
                }
            }

            let run = quote_run(&line[pos..]);
            let end = pos + run;
            let next = line[end..].chars().next();
            let enclosing = run % 2 == 1;
            let continues = next.is_some_and(|c| c != separator);

            if in_quotes && enclosing && continues && mode == Mode::Loose {
                // Odd run mid-field that cannot be a closing quote
                trace!("keeping {} quotes at byte {} as literal text", run, pos);
                field.push_repeated(QUOTE, run);
            } else {
                let ignore = if enclosing {
                    1
                } else if field.is_empty() {
                    2
                } else {
                    0
                };
                field.push_repeated(QUOTE, (run - ignore) / 2);

                if enclosing {
                    in_quotes = !in_quotes;
                    if !in_quotes && continues && mode == Mode::Strict {
                        return Err(reject(DecodeError::InvalidCharacterAfterClosingQuote {
                            position: end,
                        }));
                    }
                }
            }
            pos = end;
        } else if ch == separator && !in_quotes {
            record.push(field.take());
            pos += ch.len_utf8();
        } else if ch == '\n' && !in_quotes {
            match mode {
                Mode::Strict => {
                    return Err(reject(DecodeError::EmbeddedNewline { position: pos }))
                }
                Mode::Loose => {
                    trace!("keeping newline at byte {} as literal text", pos);
                    field.push_char(ch);
                    pos += 1;
                }
            }
        } else {
            field.push_char(ch);
            pos += ch.len_utf8();
        }
    }

    record.push(field.take());
    Ok(record)
}

/// Length of the run of quote characters at the start of `s`
fn quote_run(s: &str) -> usize {
    s.bytes().take_while(|&b| b == QUOTE as u8).count()
}

fn reject(err: DecodeError) -> DecodeError {
    debug!("rejecting line: {}", err);
    err
}

/// Reusable line decoder configuration
///
/// # Examples
///
/// ```
/// use quotecsv::{CsvDecoder, Mode};
///
/// let decoder = CsvDecoder::new().separator(';').mode(Mode::Loose);
/// assert_eq!(decoder.decode("a;b\"c").unwrap(), vec!["a", "b\"c"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvDecoder {
    separator: char,
    mode: Mode,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            mode: Mode::Strict,
        }
    }
}

impl CsvDecoder {
    /// Create a strict, comma-separated decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator (builder pattern)
    ///
    /// Must not be the quote character.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the strictness mode (builder pattern)
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Decode one line into owned strings
    pub fn decode(&self, line: &str) -> Result<Record> {
        decode(line, self.separator, self.mode)
    }

    /// Decode one line into fields of any buffer type
    pub fn decode_with<B: FieldBuffer>(&self, line: &str) -> Result<Record<B::Output>> {
        decode_with::<B>(line, self.separator, self.mode)
    }

    /// Decode one line and append its fields to `out`
    ///
    /// Nothing is appended when the line fails to decode.
    pub fn decode_into<E>(&self, line: &str, out: &mut E) -> Result<()>
    where
        E: Extend<String>,
    {
        let record = self.decode(line)?;
        out.extend(record);
        Ok(())
    }

    /// Decode one line using a caller-owned scratch buffer
    ///
    /// The scratch buffer is cleared before use, so leftovers from an
    /// earlier failed call are discarded.
    pub fn decode_reusing<B: FieldBuffer>(
        &self,
        line: &str,
        scratch: &mut B,
    ) -> Result<Record<B::Output>> {
        decode_in(line, self.separator, self.mode, scratch)
    }

    /// Decode already-split lines independently, one result per line
    pub fn decode_batch<I, S>(&self, lines: I) -> Vec<Result<Record>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.decode(line.as_ref()))
            .collect()
    }

    /// Decode already-split lines across the rayon thread pool
    ///
    /// Results keep the order of `lines`.
    #[cfg(feature = "parallel")]
    pub fn par_decode_batch<S>(&self, lines: &[S]) -> Vec<Result<Record>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        lines
            .par_iter()
            .map(|line| self.decode(line.as_ref()))
            .collect()
    }
}
