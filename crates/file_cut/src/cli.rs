use clap::Parser;
use cut_engine::{CharLimit, PipelineConfig};

/// Escape `input.txt` as a JSON string body and save it as
/// `output_{size}_{words}_{ml_tokens}.txt`.
#[derive(Debug, Parser)]
#[command(name = "file_cut", version)]
pub struct Args {
    /// Number of characters to read; zero or negative reads the whole file.
    #[arg(value_parser = parse_limit, allow_negative_numbers = true)]
    num_chars: Option<CharLimit>,

    /// Ignored.
    #[arg(hide = true, allow_hyphen_values = true, num_args = 0..)]
    _rest: Vec<String>,
}

impl Args {
    pub fn char_limit(&self) -> CharLimit {
        self.num_chars.unwrap_or(CharLimit::UNLIMITED)
    }

    /// Default paths and template, with the limit from the command line.
    pub fn into_config(self) -> PipelineConfig {
        PipelineConfig::default().with_char_limit(self.char_limit())
    }
}

/// Any size of integer is accepted; limits past `usize::MAX` read everything.
fn parse_limit(value: &str) -> Result<CharLimit, String> {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid integer: {value:?}"));
    }
    if negative {
        return Ok(CharLimit::UNLIMITED);
    }
    Ok(digits
        .parse::<usize>()
        .map_or(CharLimit::new(usize::MAX), CharLimit::new))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("file_cut").chain(args.iter().copied()))
    }

    #[test]
    fn no_argument_means_unlimited() {
        assert_eq!(parse(&[]).unwrap().char_limit(), CharLimit::UNLIMITED);
    }

    #[test]
    fn positive_argument_sets_limit() {
        assert_eq!(parse(&["100"]).unwrap().char_limit(), CharLimit::new(100));
        assert_eq!(parse(&["+7"]).unwrap().char_limit(), CharLimit::new(7));
    }

    #[test]
    fn negative_argument_means_unlimited() {
        assert_eq!(parse(&["-5"]).unwrap().char_limit(), CharLimit::UNLIMITED);
        assert_eq!(parse(&["0"]).unwrap().char_limit(), CharLimit::UNLIMITED);
    }

    #[test]
    fn huge_limits_do_not_overflow() {
        let args = parse(&["123456789012345678901234567890"]).unwrap();
        assert_eq!(args.char_limit(), CharLimit::new(usize::MAX));

        let args = parse(&["-123456789012345678901234567890"]).unwrap();
        assert_eq!(args.char_limit(), CharLimit::UNLIMITED);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(parse(&["10", "extra"]).unwrap().char_limit(), CharLimit::new(10));
        assert_eq!(parse(&["3", "-x", "4"]).unwrap().char_limit(), CharLimit::new(3));
    }

    #[test]
    fn config_keeps_default_paths() {
        let config = parse(&["12"]).unwrap().into_config();
        assert_eq!(config.input_path, std::path::PathBuf::from("input.txt"));
        assert_eq!(config.char_limit, CharLimit::new(12));
    }

    #[test]
    fn non_integer_is_rejected() {
        assert!(parse(&["ten"]).is_err());
        assert!(parse(&["1.5"]).is_err());
        assert!(parse(&["-"]).is_err());
    }
}
