//! Static assets shipped with the page.
//!
//! `assets/quiz.js` runs in the reader's browser: it toggles explanations and
//! marks answers. Its behaviour is exercised in `tests/client_script.rs`.

pub const STYLESHEET: &str = include_str!("../../assets/quiz.css");
pub const SCRIPT: &str = include_str!("../../assets/quiz.js");

pub const SHOW_EXPLANATION_LABEL: &str = "Show Full Explanation";
pub const HIDE_EXPLANATION_LABEL: &str = "Hide Full Explanation";

pub const CORRECT_CLASS: &str = "correct-answer-style";
pub const INCORRECT_CLASS: &str = "incorrect-answer-style";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_defines_answer_classes() {
        assert!(STYLESHEET.contains(&format!(".{CORRECT_CLASS}")));
        assert!(STYLESHEET.contains(&format!(".{INCORRECT_CLASS}")));
    }
}
