//! # exam-review
//!
//! Serves a single HTML page of multiple-choice review questions loaded from
//! a JSON file. Answer checking and explanation toggling happen in the
//! browser; the server only renders.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_review::{load_questions_or_placeholder, render_page, PageConfig};
//!
//! let store = load_questions_or_placeholder("questions.json");
//! if let Some(err) = store.load_error() {
//!     eprintln!("serving placeholder: {err}");
//! }
//! let html = render_page(&PageConfig::default(), store.questions()).into_string();
//! println!("{html}");
//! ```

pub mod config;
mod data;
mod models;
pub mod server;
pub mod ui;

pub use config::Config;
pub use data::{
    load_questions_from_json, load_questions_or_placeholder, LoadError, LoadErrorKind,
    QuestionStore, DEFAULT_QUESTIONS_PATH,
};
pub use models::{Question, QuestionOption, PLACEHOLDER_SECTION};
pub use ui::{render_page, PageConfig};
