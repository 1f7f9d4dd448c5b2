//! File cut engine: read, escape, count and write pipeline.
mod counts;
mod escape;
mod filename;
mod persist;
mod pipeline;
mod read;
mod token;
mod types;

pub use counts::measure;
pub use escape::{escape_json_body, EscapeError};
pub use filename::{render_output_path, TemplateError, DEFAULT_OUTPUT_TEMPLATE};
pub use persist::{check_output_dir, write_output, PersistError};
pub use pipeline::{
    process_text_file, PipelineConfig, PipelineError, PipelineReport, DEFAULT_INPUT_PATH,
};
pub use read::{read_source, ReadError};
pub use token::{
    HfTokenCounter, TokenCountError, TokenCounter, TokenizerSource, WhitespaceTokenCounter,
    DEFAULT_PRETRAINED,
};
pub use types::{CharLimit, Counts, EscapedText, SourceText};
