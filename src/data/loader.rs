use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Why the question file could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse failure kind, for callers that only care which case happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    NotFound,
    Io,
    Parse,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::NotFound { .. } => LoadErrorKind::NotFound,
            LoadError::Io { .. } => LoadErrorKind::Io,
            LoadError::Parse { .. } => LoadErrorKind::Parse,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }

    /// Text shown to the reader in place of a question.
    pub fn user_message(&self) -> String {
        let file = self.path().display();
        match self {
            LoadError::NotFound { .. } => format!("{file} not found. Please create this file."),
            LoadError::Io { source, .. } => format!("Could not read {file}: {source}"),
            LoadError::Parse { .. } => {
                format!("Error decoding {file}. Please check its format.")
            }
        }
    }
}

/// Read and parse a JSON array of questions, keeping file order.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The question collection served for the lifetime of the process.
///
/// A failed load leaves a single placeholder question, and the failure itself
/// stays available through [`QuestionStore::load_error`].
#[derive(Debug)]
pub struct QuestionStore {
    questions: Vec<Question>,
    load_error: Option<LoadError>,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            load_error: None,
        }
    }

    pub fn from_error(error: LoadError) -> Self {
        Self {
            questions: vec![Question::placeholder(&error)],
            load_error: Some(error),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Load the question file, degrading to the placeholder collection on failure.
pub fn load_questions_or_placeholder<P: AsRef<Path>>(path: P) -> QuestionStore {
    match load_questions_from_json(&path) {
        Ok(questions) => {
            tracing::info!(
                "Loaded {} questions from {}",
                questions.len(),
                path.as_ref().display()
            );
            QuestionStore::new(questions)
        }
        Err(e) => {
            tracing::warn!("{e}; serving placeholder question");
            QuestionStore::from_error(e)
        }
    }
}
