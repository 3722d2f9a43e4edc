mod loader;

pub use loader::{
    load_questions_from_json, load_questions_or_placeholder, LoadError, LoadErrorKind,
    QuestionStore, DEFAULT_QUESTIONS_PATH,
};
