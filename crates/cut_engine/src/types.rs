use std::fmt;

/// Maximum number of characters taken from the source file.
///
/// Zero means the whole file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharLimit(usize);

impl CharLimit {
    pub const UNLIMITED: CharLimit = CharLimit(0);

    pub fn new(chars: usize) -> Self {
        Self(chars)
    }

    /// Maps a signed command line value; anything `<= 0` is unlimited.
    pub fn from_signed(value: i64) -> Self {
        usize::try_from(value).map_or(Self::UNLIMITED, CharLimit)
    }

    pub fn get(self) -> Option<usize> {
        (self.0 > 0).then_some(self.0)
    }
}

impl fmt::Display for CharLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(n) => write!(f, "{n} chars"),
            None => write!(f, "unlimited"),
        }
    }
}

/// Text read from the input file, already truncated to the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText(String);

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body of a JSON string literal: ASCII only, no surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedText(String);

impl EscapedText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// The three sizes that name the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub size: usize,
    pub words: usize,
    pub ml_tokens: usize,
}
