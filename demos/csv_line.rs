//! Decode lines from stdin and print them re-encoded
//!
//! Usage: cargo run --example csv_line -- [strict|loose] [separator] < input.csv

use quotecsv::{CsvDecoder, CsvEncoder, Mode};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let mode: Mode = args.next().as_deref().unwrap_or("strict").parse()?;
    let separator = args.next().and_then(|s| s.chars().next()).unwrap_or(',');

    let decoder = CsvDecoder::new().separator(separator).mode(mode);
    let encoder = CsvEncoder::new().separator(separator);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut rejected = 0u64;

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        match decoder.decode(&line) {
            Ok(fields) => writeln!(out, "{}", encoder.encode_line(&fields))?,
            Err(e) => {
                rejected += 1;
                eprintln!("line {}: {}", line_no + 1, e);
            }
        }
    }

    if rejected > 0 {
        eprintln!("{} line(s) rejected in {} mode", rejected, mode);
    }
    Ok(())
}
