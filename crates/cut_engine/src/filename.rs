use std::path::PathBuf;

use thiserror::Error;

use crate::types::Counts;

/// Template used when none is configured.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "output_{size}_{words}_{ml_tokens}.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder {{{name}}} in output template")]
    UnknownPlaceholder { name: String },
    #[error("unmatched '{brace}' at byte {position} in output template")]
    UnmatchedBrace { brace: char, position: usize },
}

/// Fill `{size}`, `{words}` and `{ml_tokens}` in `template`.
///
/// `{{` and `}}` produce literal braces.
pub fn render_output_path(template: &str, counts: &Counts) -> Result<PathBuf, TemplateError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template.char_indices().peekable();

    while let Some((pos, c)) = rest.next() {
        match c {
            '{' if rest.peek().map(|&(_, n)| n) == Some('{') => {
                rest.next();
                out.push('{');
            }
            '}' if rest.peek().map(|&(_, n)| n) == Some('}') => {
                rest.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, n) in rest.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(TemplateError::UnmatchedBrace {
                        brace: '{',
                        position: pos,
                    });
                }
                let value = match name.as_str() {
                    "size" => counts.size,
                    "words" => counts.words,
                    "ml_tokens" => counts.ml_tokens,
                    _ => return Err(TemplateError::UnknownPlaceholder { name }),
                };
                out.push_str(&value.to_string());
            }
            '}' => {
                return Err(TemplateError::UnmatchedBrace {
                    brace: '}',
                    position: pos,
                })
            }
            _ => out.push(c),
        }
    }
    Ok(PathBuf::from(out))
}
