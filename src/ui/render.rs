use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::Question;

use super::client::{SCRIPT, SHOW_EXPLANATION_LABEL, STYLESHEET};

pub const DEFAULT_TITLE: &str = "IoT Engineering Examination";
pub const DEFAULT_SUBTITLE: &str = "Review Questions";

/// Fixed text around the question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

/// Render the whole review page for `questions`, in order.
pub fn render_page(config: &PageConfig, questions: &[Question]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                script src="https://cdn.tailwindcss.com" {}
                style { (PreEscaped(STYLESHEET)) }
            }
            body class="bg-gray-100 text-gray-800" {
                div class="container mx-auto p-4 sm:p-8" {
                    header class="mb-10 text-center" {
                        h1 class="text-4xl font-bold text-gray-700" { (config.title) }
                        p class="text-lg text-gray-500" { (config.subtitle) }
                    }
                    div id="quizContainer" {
                        @for question in questions {
                            (question_card(question))
                        }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn question_card(question: &Question) -> Markup {
    let explanation_id = format!("explanation_{}", question.id);

    html! {
        div class="bg-white shadow-lg rounded-lg p-6 mb-8 question-card"
            id={ "question_card_" (question.id) }
            data-correct=(question.correct_answer_letter) {
            h2 class="text-xl font-semibold text-gray-700 mb-1" { "Question " (question.id) }
            p class="text-sm text-gray-500 mb-4" { "Section: " (question.section) }
            p class="text-lg text-gray-800 mb-5" { (question.question_text) }

            div class="space-y-3 mb-4" {
                @for option in &question.options {
                    label class="flex items-center p-3 rounded-md option-label"
                        id={ "label_q" (question.id) "_opt" (option.key) } {
                        input type="radio"
                            name={ "question_" (question.id) }
                            value=(option.key)
                            class="mr-3 h-5 w-5 text-blue-600 focus:ring-blue-500 border-gray-300 rounded";
                        span class="text-md" { (option.label()) }
                    }
                }
            }

            button type="button"
                class="explanation-toggle mt-2 px-4 py-2 bg-blue-500 text-white text-sm font-medium rounded-md hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
                data-target=(explanation_id) {
                (SHOW_EXPLANATION_LABEL)
            }
            div id=(explanation_id) class="explanation mt-4 p-4" {
                p class="font-semibold" {
                    "Correct Answer: " (question.correct_answer_letter.to_uppercase())
                }
                p class="text-gray-700 mt-1" {
                    strong { "Explanation:" } " " (question.explanation)
                }
            }
        }
    }
}
