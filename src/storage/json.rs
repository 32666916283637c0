//! A JSON-file backed source of questions
//!
//! A [`JsonStore`] points at either a single `.json` file or a directory of
//! them. Each file is an object mapping opaque keys to question records; the
//! keys are discarded and a fresh UUID is assigned to every question on
//! load, so identifiers are unique per load rather than per file.

use std::{
    collections::{BTreeMap, BTreeSet},
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use walkdir::WalkDir;

use super::QuestionSource;
use crate::{
    domain::{Complexity, CorrectAnswer},
    Question,
};

/// A question source reading the JSON data format.
pub struct JsonStore {
    /// A `.json` file, or a directory scanned (non-recursively) for them.
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store reading from the given path.
    ///
    /// The path is not checked until [`QuestionSource::load_questions`] is
    /// called.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl QuestionSource for JsonStore {
    fn load_questions(&self) -> Result<Vec<Question>, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::NotFound(self.path.clone()));
        }

        let questions = if self.path.is_dir() {
            let mut questions = Vec::new();
            for path in collect_json_paths(&self.path) {
                questions.extend(load_file(&path)?);
            }
            questions
        } else {
            load_file(&self.path)?
        };

        tracing::debug!(
            "Loaded {} questions from {}",
            questions.len(),
            self.path.display()
        );
        Ok(questions)
    }
}

/// The serialized form of one question record.
///
/// `category` and `labels` may be absent; `complexity` must be one of the
/// three canonical labels.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    original_text: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    labels: BTreeSet<String>,
    complexity: Complexity,
    possible_answers: Vec<String>,
    correct: Vec<CorrectAnswer>,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        let mut question = Self::new(record.original_text)
            .with_labels(record.labels)
            .with_complexity(record.complexity)
            .with_answers(record.possible_answers, record.correct);
        if let Some(category) = record.category {
            question = question.with_category(category);
        }
        question
    }
}

fn load_file(path: &Path) -> Result<Vec<Question>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // The per-entry keys are opaque and discarded; a BTreeMap keeps the
    // order within a file deterministic.
    let records: BTreeMap<String, QuestionRecord> =
        serde_json::from_str(&content).map_err(|source| LoadError::Format {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records.into_values().map(Question::from).collect())
}

fn collect_json_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<_> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension() == Some(OsStr::new("json")))
        .map(walkdir::DirEntry::into_path)
        .collect();
    paths.sort();
    paths
}

/// Errors that can occur when loading questions.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The configured path does not exist.
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),
    /// A file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A record is missing a required field or has an unrecognised
    /// complexity label.
    #[error("invalid question data in {path}")]
    Format {
        /// The file containing the malformed record.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}
