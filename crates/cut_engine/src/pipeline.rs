use std::path::PathBuf;

use cut_logging::{cut_debug, cut_info};
use thiserror::Error;

use crate::counts::measure;
use crate::escape::{escape_json_body, EscapeError};
use crate::filename::{render_output_path, TemplateError, DEFAULT_OUTPUT_TEMPLATE};
use crate::persist::{write_output, PersistError};
use crate::read::{read_source, ReadError};
use crate::token::{TokenCountError, TokenCounter};
use crate::types::{CharLimit, Counts};

/// Input file read when none is configured.
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Everything a run needs to know besides the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Source file location.
    pub input_path: PathBuf,
    /// Output filename pattern with `{size}`, `{words}` and `{ml_tokens}`.
    pub output_template: String,
    /// Truncation length; unlimited by default.
    pub char_limit: CharLimit,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            char_limit: CharLimit::UNLIMITED,
        }
    }
}

impl PipelineConfig {
    pub fn with_char_limit(mut self, char_limit: CharLimit) -> Self {
        self.char_limit = char_limit;
        self
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Escape(#[from] EscapeError),
    #[error(transparent)]
    Count(#[from] TokenCountError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub counts: Counts,
    pub output_path: PathBuf,
}

/// Read, escape, measure and write one file.
pub fn process_text_file(
    config: &PipelineConfig,
    ml_counter: &dyn TokenCounter,
) -> Result<PipelineReport, PipelineError> {
    cut_debug!("reading {:?} ({})", config.input_path, config.char_limit);
    let source = read_source(&config.input_path, config.char_limit)?;

    let escaped = escape_json_body(&source)?;
    cut_debug!(
        "escaped {} chars into {} chars",
        source.as_str().chars().count(),
        escaped.as_str().len()
    );

    let counts = measure(&escaped, ml_counter)?;
    cut_debug!("counts: {counts:?}");

    let output_path = render_output_path(&config.output_template, &counts)?;
    let output_path = write_output(&output_path, escaped.as_str())?;
    cut_info!(
        "wrote {:?}: size={} words={} ml_tokens={}",
        output_path,
        counts.size,
        counts.words,
        counts.ml_tokens
    );

    Ok(PipelineReport {
        counts,
        output_path,
    })
}
