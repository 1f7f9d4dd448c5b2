use std::path::PathBuf;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tokenizers::Tokenizer;

/// Pretrained tokenizer used when nothing else is configured.
pub const DEFAULT_PRETRAINED: &str = "bert-base-uncased";

#[derive(Debug, Error)]
pub enum TokenCountError {
    #[error("failed to load tokenizer {source_name}: {message}")]
    Load {
        source_name: String,
        message: String,
    },
    #[error("failed to tokenize text: {0}")]
    Encode(String),
}

pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> Result<usize, TokenCountError>;
}

/// Counts maximal runs of non-whitespace characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenCounter;

impl TokenCounter for WhitespaceTokenCounter {
    fn count(&self, text: &str) -> Result<usize, TokenCountError> {
        Ok(text.split_whitespace().count())
    }
}

/// Where the sub-word tokenizer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerSource {
    /// Identifier on the HuggingFace hub, fetched into the local cache on first use.
    Pretrained(String),
    /// A serialized `tokenizer.json` on disk.
    File(PathBuf),
}

impl Default for TokenizerSource {
    fn default() -> Self {
        TokenizerSource::Pretrained(DEFAULT_PRETRAINED.to_string())
    }
}

impl std::fmt::Display for TokenizerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenizerSource::Pretrained(name) => write!(f, "{name}"),
            TokenizerSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Sub-word token counter backed by a HuggingFace tokenizer.
///
/// The tokenizer is fetched from its source on the first `count` and kept for
/// later calls, so build one and pass it by reference.
pub struct HfTokenCounter {
    source: TokenizerSource,
    tokenizer: OnceCell<Tokenizer>,
}

impl HfTokenCounter {
    /// Handle that loads from `source` on first use.
    pub fn new(source: TokenizerSource) -> Self {
        Self {
            source,
            tokenizer: OnceCell::new(),
        }
    }

    /// Handle with the tokenizer already loaded, failing now if it cannot be.
    pub fn load(source: TokenizerSource) -> Result<Self, TokenCountError> {
        let counter = Self::new(source);
        counter.tokenizer()?;
        Ok(counter)
    }

    pub fn is_loaded(&self) -> bool {
        self.tokenizer.get().is_some()
    }

    fn tokenizer(&self) -> Result<&Tokenizer, TokenCountError> {
        self.tokenizer.get_or_try_init(|| {
            cut_logging::cut_debug!("loading tokenizer {}", self.source);
            let loaded = match &self.source {
                TokenizerSource::Pretrained(name) => Tokenizer::from_pretrained(name, None),
                TokenizerSource::File(path) => Tokenizer::from_file(path),
            };
            loaded.map_err(|e| TokenCountError::Load {
                source_name: self.source.to_string(),
                message: e.to_string(),
            })
        })
    }
}

impl std::fmt::Debug for HfTokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfTokenCounter")
            .field("source", &self.source)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl TokenCounter for HfTokenCounter {
    /// Special boundary tokens (`[CLS]`, `[SEP]` for BERT) are included.
    fn count(&self, text: &str) -> Result<usize, TokenCountError> {
        let encoding = self
            .tokenizer()?
            .encode(text, true)
            .map_err(|e| TokenCountError::Encode(e.to_string()))?;
        Ok(encoding.len())
    }
}
