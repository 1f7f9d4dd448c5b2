use std::fmt::Write;

use thiserror::Error;

use crate::types::{EscapedText, SourceText};

#[derive(Debug, Error)]
pub enum EscapeError {
    #[error("json encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("encoder output is not wrapped in quotes: {0:?}")]
    Unquoted(String),
}

/// Escape `source` so it can sit between the quotes of a JSON string literal.
///
/// The output is ASCII only. Anything outside printable ASCII that the JSON
/// encoder leaves raw (DEL and every non-ASCII character) is written as a
/// lowercase `\uXXXX` escape, using a surrogate pair above the BMP.
pub fn escape_json_body(source: &SourceText) -> Result<EscapedText, EscapeError> {
    let quoted = serde_json::to_string(source.as_str())?;
    let body = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| EscapeError::Unquoted(quoted.clone()))?;

    Ok(EscapedText::new(ascii_only(body)))
}

fn ascii_only(body: &str) -> String {
    if body.bytes().all(|b| (b' '..=b'~').contains(&b)) {
        return body.to_string();
    }
    let mut out = String::with_capacity(body.len() + 16);
    let mut units = [0u16; 2];
    for c in body.chars() {
        if (' '..='~').contains(&c) {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            // Writing into a String cannot fail.
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(text: &str) -> String {
        escape_json_body(&SourceText::new(text.to_string()))
            .unwrap()
            .into_string()
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn quotes_and_backslashes() {
        assert_eq!(escape(r#"hello "world""#), r#"hello \"world\""#);
        assert_eq!(escape(r"C:\tmp"), r"C:\\tmp");
        assert_eq!(escape("a/b"), "a/b");
    }

    #[test]
    fn control_characters() {
        assert_eq!(escape("a\nb\tc\r"), r"a\nb\tc\r");
        assert_eq!(escape("\u{8}\u{c}"), r"\b\f");
        assert_eq!(escape("\u{1}\u{1f}"), r"\u0001\u001f");
        assert_eq!(escape("\u{7f}"), r"\u007f");
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(escape("café"), r"caf\u00e9");
        assert_eq!(escape("\u{feff}x"), r"\ufeffx");
        assert_eq!(escape("😀"), r"\ud83d\ude00");
    }
}
