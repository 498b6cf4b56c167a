//! Integration tests for quotecsv

use quotecsv::{decode, encode_line, CsvDecoder, CsvEncoder, DecodeError, Mode, QuoteStyle};

fn strict(line: &str) -> Result<Vec<String>, DecodeError> {
    decode(line, ',', Mode::Strict)
}

fn loose(line: &str) -> Result<Vec<String>, DecodeError> {
    decode(line, ',', Mode::Loose)
}

#[test]
fn test_basic_scenarios() {
    assert_eq!(strict("hello,world").unwrap(), vec!["hello", "world"]);
    assert_eq!(
        strict(r#""hello ""world""""#).unwrap(),
        vec![r#"hello "world""#]
    );
    assert_eq!(strict(r#""""""#).unwrap(), vec![r#"""#]);
    assert!(matches!(
        strict(r#"hello"world"#),
        Err(DecodeError::UnescapedQuoteInField { .. })
    ));
    assert_eq!(loose(r#"hello"world"#).unwrap(), vec![r#"hello"world"#]);
    assert!(matches!(
        strict(r#""hello" world"#),
        Err(DecodeError::InvalidCharacterAfterClosingQuote { .. })
    ));
    assert_eq!(encode_line(["a\"b", "c"], ','), r#""a""b","c""#);
}

#[test]
fn test_non_quoted_fields() {
    assert_eq!(strict("hello").unwrap(), vec!["hello"]);
    assert_eq!(strict("hello,world,100.0").unwrap(), vec!["hello", "world", "100.0"]);
}

#[test]
fn test_non_quoted_fields_with_mixed_quotes() {
    for line in [r#"thisisa"long"word"#, r#"thisisa""long""word"#] {
        assert!(matches!(
            strict(line),
            Err(DecodeError::UnescapedQuoteInField { position: 7 })
        ));
        assert_eq!(loose(line).unwrap(), vec![line]);
    }
}

#[test]
fn test_quoted_fields() {
    assert_eq!(strict(r#""hello""#).unwrap(), vec!["hello"]);
    assert_eq!(
        strict(r#""hello","world","foobar""#).unwrap(),
        vec!["hello", "world", "foobar"]
    );
}

#[test]
fn test_spaces_in_non_quoted_fields() {
    assert_eq!(strict("hello      world").unwrap(), vec!["hello      world"]);
    assert_eq!(
        strict("hello world,bye world").unwrap(),
        vec!["hello world", "bye world"]
    );
    assert_eq!(strict("hello , world").unwrap(), vec!["hello ", " world"]);
    assert_eq!(strict(" hello,world ").unwrap(), vec![" hello", "world "]);
}

#[test]
fn test_spaces_around_quoted_fields() {
    // Leading space makes the quote part of unquoted content
    assert!(matches!(
        strict(r#""hello", "world""#),
        Err(DecodeError::UnescapedQuoteInField { position: 9 })
    ));
    // Trailing space after a closing quote
    assert!(matches!(
        strict(r#""hello" ,"world""#),
        Err(DecodeError::InvalidCharacterAfterClosingQuote { position: 7 })
    ));
    assert!(strict(r#""hello" , "world""#).is_err());
}

#[test]
fn test_mixed_fields() {
    assert_eq!(
        strict(r#"hello,"world",foo"#).unwrap(),
        vec!["hello", "world", "foo"]
    );
    assert_eq!(
        strict(r#""hello",world,"foo""#).unwrap(),
        vec!["hello", "world", "foo"]
    );
}

#[test]
fn test_embedded_quotes() {
    assert_eq!(
        strict(r#""""hello"" world""#).unwrap(),
        vec![r#""hello" world"#]
    );
    assert_eq!(
        strict(r#""""hello world""""#).unwrap(),
        vec![r#""hello world""#]
    );
}

#[test]
fn test_embedded_quotes_invalid() {
    for line in [
        r#"hello "world""#,
        r#""hello" world"#,
        r#"hello ""world"""#,
        r#"""hello"" world"#,
        r#"""hello world"""#,
        r#"hello """world""""#,
        r#""""hello""" world"#,
    ] {
        assert!(strict(line).is_err(), "expected error for {:?}", line);
    }
}

#[test]
fn test_embedded_delimiters() {
    assert_eq!(strict(r#"",hello""#).unwrap(), vec![",hello"]);
    assert_eq!(strict(r#""hello,""#).unwrap(), vec!["hello,"]);
    assert_eq!(strict(r#""hello, world""#).unwrap(), vec!["hello, world"]);
}

#[test]
fn test_empty_fields() {
    assert_eq!(strict(r#""""#).unwrap(), vec![""]);
    assert_eq!(strict(r#""","","""#).unwrap(), vec!["", "", ""]);
    assert_eq!(strict("").unwrap(), vec![""]);
    assert_eq!(strict(",").unwrap(), vec!["", ""]);
    assert_eq!(strict(",hello").unwrap(), vec!["", "hello"]);
    assert_eq!(strict("hello,").unwrap(), vec!["hello", ""]);
}

#[test]
fn test_fields_with_only_quotes() {
    let four = "\"".repeat(4);
    let six = "\"".repeat(6);

    for count in 1..=3 {
        let line = vec![four.as_str(); count].join(",");
        assert_eq!(strict(&line).unwrap(), vec!["\""; count]);

        let line = vec![six.as_str(); count].join(",");
        assert_eq!(strict(&line).unwrap(), vec!["\"\""; count]);
    }
}

#[test]
fn test_multiline_fields() {
    assert_eq!(strict("\"hello\nworld\"").unwrap(), vec!["hello\nworld"]);
    assert_eq!(
        strict("hello\nworld"),
        Err(DecodeError::EmbeddedNewline { position: 5 })
    );
    assert_eq!(
        strict("hello world,hello\nworld"),
        Err(DecodeError::EmbeddedNewline { position: 17 })
    );
    assert_eq!(
        loose("hello world,hello\nworld").unwrap(),
        vec!["hello world", "hello\nworld"]
    );
}

#[test]
fn test_odd_quotes_inside_field() {
    let cases = [
        (r#"""Hello" odd quotes""#, None),
        (r#""Hello "odd" quotes""#, Some(r#"Hello "odd" quotes"#)),
        (r#""Hello odd "quotes"""#, Some(r#"Hello odd "quotes""#)),
        (r#"""""Hello""" odd quotes""#, None),
        (r#""Hello """odd""" quotes""#, Some(r#"Hello """odd""" quotes"#)),
        (
            r#""Hello odd """quotes"""""#,
            Some("Hello odd \"\"\"quotes\"\""),
        ),
    ];

    for (line, recovered) in cases {
        assert!(strict(line).is_err(), "expected error for {:?}", line);
        if let Some(expected) = recovered {
            assert_eq!(loose(line).unwrap(), vec![expected], "loose decode of {:?}", line);
        }
    }
}

#[test]
fn test_loose_mode_matches_strict_on_valid_input() {
    for line in [
        "hello,world",
        r#""a,b",c"#,
        r#""""hello"" world""#,
        r#""""""#,
        "\"multi\nline\",x",
        "",
        ",,",
    ] {
        assert_eq!(strict(line), loose(line), "modes disagree on {:?}", line);
    }
}

#[test]
fn test_encoder_decoder_roundtrip() {
    let rows: Vec<Vec<&str>> = vec![
        vec!["Name", "Age", "City"],
        vec!["Say \"Hi\"", "", "a,b"],
        vec!["Line1\nLine2", "\"", "\"\""],
    ];

    for style in [QuoteStyle::Always, QuoteStyle::Necessary] {
        for sep in [',', ';', '\t'] {
            let encoder = CsvEncoder::new().separator(sep).quote_style(style);
            let decoder = CsvDecoder::new().separator(sep);
            for row in &rows {
                let line = encoder.encode_line(row);
                assert_eq!(&decoder.decode(&line).unwrap(), row, "line {:?}", line);
            }
        }
    }
}
