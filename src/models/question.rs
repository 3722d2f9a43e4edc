use serde::Deserialize;

use crate::data::LoadError;

/// Section label given to the placeholder question.
pub const PLACEHOLDER_SECTION: &str = "Error";

/// A single multiple-choice exam item.
///
/// Only `id` is required; any other missing field renders as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub correct_answer_letter: String,
    #[serde(default)]
    pub explanation: String,
}

/// One selectable choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionOption {
    pub key: String,
    #[serde(default)]
    pub text: String,
}

impl Question {
    /// Build the synthetic question shown when the question file can't be used.
    pub fn placeholder(error: &LoadError) -> Self {
        Self {
            id: 0,
            section: PLACEHOLDER_SECTION.to_string(),
            question_text: error.user_message(),
            options: Vec::new(),
            correct_answer_letter: String::new(),
            explanation: String::new(),
        }
    }
}

impl QuestionOption {
    /// Label shown next to the radio control, e.g. `A. A protocol`.
    pub fn label(&self) -> String {
        format!("{}. {}", self.key.to_uppercase(), self.text)
    }
}
