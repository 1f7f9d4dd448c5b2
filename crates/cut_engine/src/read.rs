use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{CharLimit, SourceText};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is not valid UTF-8 (invalid byte at offset {offset})")]
    Decode { path: PathBuf, offset: usize },
}

/// Read the file at `path` as UTF-8 text, keeping at most `limit` characters.
///
/// Line endings are translated the way a text-mode read does it: `\r\n` and a
/// lone `\r` both become `\n`, and the limit counts characters after that.
pub fn read_source(path: &Path, limit: CharLimit) -> Result<SourceText, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = String::from_utf8(bytes).map_err(|e| ReadError::Decode {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    let text = translate_newlines(&raw);
    let text = match limit.get() {
        Some(n) => truncate_chars(text, n),
        None => text,
    };
    Ok(SourceText::new(text))
}

fn translate_newlines(raw: &str) -> String {
    if !raw.contains('\r') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

fn truncate_chars(mut text: String, n: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(n) {
        text.truncate(idx);
    }
    text
}
