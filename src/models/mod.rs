mod question;

pub use question::{Question, QuestionOption, PLACEHOLDER_SECTION};
