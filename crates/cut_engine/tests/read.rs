use std::fs;

use cut_engine::{read_source, CharLimit, ReadError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_input(dir: &TempDir, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn unlimited_reads_whole_file() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, "hello world\nsecond line".as_bytes());

    let text = read_source(&path, CharLimit::UNLIMITED).unwrap();
    assert_eq!(text.as_str(), "hello world\nsecond line");
}

#[test]
fn negative_or_zero_limit_reads_whole_file() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, b"abcdef");

    for value in [0, -1, -100] {
        let text = read_source(&path, CharLimit::from_signed(value)).unwrap();
        assert_eq!(text.as_str(), "abcdef");
    }
}

#[test]
fn positive_limit_counts_characters_not_bytes() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, "héllo wörld".as_bytes());

    let text = read_source(&path, CharLimit::new(4)).unwrap();
    assert_eq!(text.as_str(), "héll");
}

#[test]
fn limit_beyond_length_returns_everything() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, b"short");

    let text = read_source(&path, CharLimit::from_signed(100)).unwrap();
    assert_eq!(text.as_str(), "short");
}

#[test]
fn crlf_counts_as_one_character() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, b"a\r\nb\rc");

    let text = read_source(&path, CharLimit::new(3)).unwrap();
    assert_eq!(text.as_str(), "a\nb");
}

#[test]
fn missing_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let err = read_source(&temp.path().join("nope.txt"), CharLimit::UNLIMITED).unwrap_err();
    assert!(matches!(err, ReadError::Io { .. }));
}

#[test]
fn invalid_utf8_reports_offset() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, b"ok\xff\xfe");

    let err = read_source(&path, CharLimit::UNLIMITED).unwrap_err();
    assert!(matches!(err, ReadError::Decode { offset: 2, .. }));
}
