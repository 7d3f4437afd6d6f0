use maud::{html, Markup, PreEscaped, DOCTYPE};
use rust_i18n::t;

use crate::utils;

/// Title to show. Editing never leaves a blank title, but a hand-written
/// quiz file may carry one.
pub fn display_title(title: &str, locale: &str) -> String {
    match title.trim() {
        "" => t!("quiz.default_title", locale = locale).to_string(),
        title => title.to_string(),
    }
}

/// Standalone HTML page with the style sheet inlined.
pub fn document(title: &str, stylesheet: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("quizkit {}", utils::VERSION));

                title { (display_title(title, locale)) }

                style { (PreEscaped(stylesheet)) }
            }

            body {
                (body)
            }
        }
    }
}
