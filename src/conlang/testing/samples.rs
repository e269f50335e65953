//! Sample document finder
//!
//! Samples live under `docs/samples/valid` and `docs/samples/invalid`. File
//! names start with a number and a dash (`03-sequences.conlang`); invalid
//! samples follow the number with the kebab-case error kind they must fail
//! with. Two files with the same number in one directory are an error.

use crate::conlang::ast::Document;
use crate::conlang::parsing::{parse_document, ErrorKind, ParseError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SAMPLES_ROOT: &str = "docs/samples";

static SAMPLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)-([a-z0-9-]+)\.conlang$").unwrap());

static ERROR_KIND_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(lexical|unexpected-token|inconsistent-delimiter|incomplete-input|nesting-too-deep)-",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Valid,
    Invalid,
}

impl SampleKind {
    pub fn dir_name(&self) -> &'static str {
        match self {
            SampleKind::Valid => "valid",
            SampleKind::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Sample not found: {0}")]
    NotFound(String),
    #[error("Duplicate sample number: {0}")]
    DuplicateNumber(String),
    #[error("Invalid sample name: {0}")]
    InvalidName(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub number: usize,
    pub name: String,
    pub path: PathBuf,
    /// Set for invalid samples only
    pub expected_error: Option<ErrorKind>,
}

impl Sample {
    pub fn source(&self) -> Result<String, SampleError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Read and parse the sample; panics if the file cannot be read
    pub fn parse(&self) -> Result<Document, ParseError> {
        let source = self
            .source()
            .unwrap_or_else(|e| panic!("cannot read sample {}: {}", self.path.display(), e));
        parse_document(&source)
    }
}

fn error_kind(name: &str) -> Option<ErrorKind> {
    let prefix = ERROR_KIND_PREFIX.captures(name)?;
    match &prefix[1] {
        "lexical" => Some(ErrorKind::Lexical),
        "unexpected-token" => Some(ErrorKind::UnexpectedToken),
        "inconsistent-delimiter" => Some(ErrorKind::InconsistentDelimiter),
        "incomplete-input" => Some(ErrorKind::IncompleteInput),
        "nesting-too-deep" => Some(ErrorKind::NestingTooDeep),
        _ => None,
    }
}

pub fn samples_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(SAMPLES_ROOT)
}

fn parse_file_name(kind: SampleKind, path: &Path) -> Result<Option<Sample>, SampleError> {
    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return Ok(None),
    };
    if !file_name.ends_with(".conlang") {
        return Ok(None);
    }
    let captures = SAMPLE_NAME
        .captures(file_name)
        .ok_or_else(|| SampleError::InvalidName(file_name.to_string()))?;
    let number = captures[1]
        .parse::<usize>()
        .map_err(|_| SampleError::InvalidName(file_name.to_string()))?;
    let name = captures[2].to_string();

    let expected_error = match kind {
        SampleKind::Valid => None,
        SampleKind::Invalid => Some(
            error_kind(&name).ok_or_else(|| SampleError::InvalidName(file_name.to_string()))?,
        ),
    };

    Ok(Some(Sample {
        number,
        name,
        path: path.to_path_buf(),
        expected_error,
    }))
}

/// All samples of one kind, ordered by number
pub fn list_samples(kind: SampleKind) -> Result<Vec<Sample>, SampleError> {
    list_samples_in(&samples_root().join(kind.dir_name()), kind)
}

pub fn list_samples_in(dir: &Path, kind: SampleKind) -> Result<Vec<Sample>, SampleError> {
    let mut by_number: BTreeMap<usize, Sample> = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(sample) = parse_file_name(kind, &path)? {
            if let Some(existing) = by_number.get(&sample.number) {
                return Err(SampleError::DuplicateNumber(format!(
                    "{} and {}",
                    existing.path.display(),
                    sample.path.display()
                )));
            }
            by_number.insert(sample.number, sample);
        }
    }
    Ok(by_number.into_values().collect())
}

pub fn find_sample(kind: SampleKind, number: usize) -> Result<Sample, SampleError> {
    list_samples(kind)?
        .into_iter()
        .find(|s| s.number == number)
        .ok_or_else(|| SampleError::NotFound(format!("{} sample #{}", kind.dir_name(), number)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pattern() {
        let path = Path::new("/x/07-incomplete-input-dangling-colon.conlang");
        let sample = parse_file_name(SampleKind::Invalid, path).unwrap().unwrap();
        assert_eq!(sample.number, 7);
        assert_eq!(sample.expected_error, Some(ErrorKind::IncompleteInput));

        let sample = parse_file_name(SampleKind::Valid, Path::new("001-words.conlang"))
            .unwrap()
            .unwrap();
        assert_eq!(sample.number, 1);
        assert_eq!(sample.name, "words");
        assert_eq!(sample.expected_error, None);
    }

    #[test]
    fn test_other_files_are_skipped() {
        assert!(parse_file_name(SampleKind::Valid, Path::new("README.md"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_bad_names() {
        assert!(parse_file_name(SampleKind::Valid, Path::new("words.conlang")).is_err());
        assert!(parse_file_name(SampleKind::Invalid, Path::new("01-oops.conlang")).is_err());
    }

    #[test]
    fn test_duplicate_numbers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1-a.conlang"), "a.").unwrap();
        fs::write(dir.path().join("01-b.conlang"), "b.").unwrap();
        let err = list_samples_in(dir.path(), SampleKind::Valid).unwrap_err();
        assert!(matches!(err, SampleError::DuplicateNumber(_)));
    }

    #[test]
    fn test_repository_samples_are_listed() {
        let valid = list_samples(SampleKind::Valid).unwrap();
        assert!(!valid.is_empty());
        let numbers: Vec<usize> = valid.iter().map(|s| s.number).collect();
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);
        assert!(find_sample(SampleKind::Valid, 1).is_ok());
        assert!(find_sample(SampleKind::Valid, 999).is_err());
    }
}
