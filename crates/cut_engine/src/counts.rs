use crate::token::{TokenCountError, TokenCounter, WhitespaceTokenCounter};
use crate::types::{Counts, EscapedText};

/// Measure the escaped text: characters, whitespace words and sub-word tokens.
pub fn measure(
    escaped: &EscapedText,
    ml_counter: &dyn TokenCounter,
) -> Result<Counts, TokenCountError> {
    let text = escaped.as_str();
    Ok(Counts {
        size: text.chars().count(),
        words: WhitespaceTokenCounter.count(text)?,
        ml_tokens: ml_counter.count(text)?,
    })
}
