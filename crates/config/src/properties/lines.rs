//! Logical line reader.
//!
//! A logical line is one key/value assignment. It may span several natural
//! lines when each but the last ends in an odd number of backslashes.

/// Whitespace as understood by the properties grammar.
pub(super) fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// One assignment with the continuation markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LogicalLine {
    /// 1-based number of the natural line the assignment starts on.
    pub number: usize,
    pub text: String,
}

/// Split on `\n`, `\r`, or `\r\n`. A terminator at end of input does not
/// produce a trailing empty line.
fn natural_lines(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&input[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&input[start..]);
    }
    lines
}

fn is_continued(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}

/// Collect logical lines, skipping blank lines and `#`/`!` comments.
///
/// Leading whitespace is stripped from every natural line, including
/// continuation lines. Comment markers are only recognised at the start of
/// a logical line; inside a continuation they are literal text.
pub(super) fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut out = Vec::new();
    let mut pending: Option<LogicalLine> = None;

    for (idx, raw) in natural_lines(input).into_iter().enumerate() {
        let line = raw.trim_start_matches(is_blank);

        let mut current = match pending.take() {
            Some(mut partial) => {
                partial.text.push_str(line);
                partial
            }
            None => {
                if line.is_empty() || line.starts_with(['#', '!']) {
                    continue;
                }
                LogicalLine {
                    number: idx + 1,
                    text: line.to_string(),
                }
            }
        };

        if is_continued(line) {
            current.text.pop();
            pending = Some(current);
        } else {
            out.push(current);
        }
    }

    // A continuation at end of input still yields what was read.
    if let Some(partial) = pending {
        out.push(partial);
    }
    out
}
