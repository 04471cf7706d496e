//! Key/value splitting and unescaping.

use std::collections::HashMap;

use super::error::ParseError;
use super::lines::{LogicalLine, is_blank, logical_lines};

/// Parse properties text into a key/value mapping.
///
/// # Errors
///
/// Returns [`ParseError::MalformedUnicodeEscape`] if a `\u` escape is not
/// followed by four hex digits.
pub fn parse(input: &str) -> Result<HashMap<String, String>, ParseError> {
    let mut properties = HashMap::new();

    for line in logical_lines(input) {
        let (key, value) = split_entry(&line)?;
        if properties.contains_key(&key) {
            tracing::warn!(key = %key, line = line.number, "Duplicate property key, later value wins");
        }
        properties.insert(key, value);
    }

    Ok(properties)
}

/// Decode `bytes` and parse it.
///
/// UTF-8 is tried first. Input that is not valid UTF-8 is decoded as
/// ISO-8859-1, which accepts every byte sequence.
///
/// # Errors
///
/// Returns the same errors as [`parse`].
pub fn parse_bytes(bytes: &[u8]) -> Result<HashMap<String, String>, ParseError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => parse(text),
        Err(e) => {
            tracing::debug!(
                line = line_at(bytes, e.valid_up_to()),
                "Input is not UTF-8, decoding as ISO-8859-1"
            );
            let text: String = bytes.iter().map(|&b| char::from(b)).collect();
            parse(&text)
        }
    }
}

/// 1-based line containing byte `offset`, counting `\n`, `\r` and `\r\n`
/// as single terminators.
fn line_at(bytes: &[u8], offset: usize) -> usize {
    let prefix = &bytes[..offset.min(bytes.len())];
    let mut line = 1;
    let mut i = 0;
    while i < prefix.len() {
        match prefix[i] {
            b'\n' => line += 1,
            b'\r' => {
                line += 1;
                if prefix.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    line
}

fn split_entry(line: &LogicalLine) -> Result<(String, String), ParseError> {
    let (raw_key, raw_value) = split_raw(&line.text);
    let key = unescape(raw_key, line.number)?;
    let value = unescape(raw_value, line.number)?;
    Ok((key, value))
}

/// Split a logical line at the first unescaped `=`, `:` or whitespace.
///
/// After a whitespace terminator, further whitespace and at most one
/// `=`/`:` are skipped before the value begins.
fn split_raw(text: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = text.len();
    let mut has_separator = false;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                has_separator = true;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &text[..key_end];
    // Separators are all single-byte characters.
    let mut rest = text.get(key_end + 1..).unwrap_or("");
    loop {
        rest = rest.trim_start_matches(is_blank);
        match rest.chars().next() {
            Some('=' | ':') if !has_separator => {
                has_separator = true;
                rest = &rest[1..];
            }
            _ => break,
        }
    }
    (key, rest)
}

/// Resolve escape sequences.
///
/// Consecutive `\uXXXX` escapes are decoded together so surrogate pairs
/// combine; unpaired surrogates become U+FFFD.
fn unescape(raw: &str, line: usize) -> Result<String, ParseError> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out);
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => units.push(read_code_unit(&mut chars, line)?),
            Some(escaped) => {
                flush_units(&mut units, &mut out);
                out.push(match escaped {
                    't' => '\t',
                    'n' => '\n',
                    'r' => '\r',
                    'f' => '\x0c',
                    other => other,
                });
            }
            // Lone trailing backslash contributes nothing.
            None => {}
        }
    }
    flush_units(&mut units, &mut out);
    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u16, ParseError> {
    let sequence: String = chars.by_ref().take(4).collect();
    let malformed = || ParseError::MalformedUnicodeEscape {
        line,
        sequence: sequence.clone(),
    };
    if sequence.chars().count() != 4 || !sequence.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    u16::from_str_radix(&sequence, 16).map_err(|_| malformed())
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}
