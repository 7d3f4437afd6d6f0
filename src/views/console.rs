use std::fmt::Write;

use rust_i18n::t;

use super::display_title;
use crate::engine::{ChoiceState, InputView, QuestionView, ResultView, View};

/// Plain-text rendering of a screen for the terminal preview.
pub fn render(view: &View<'_>, locale: &str) -> String {
    match view {
        View::Question(q) => question(q, locale),
        View::Result(r) => result(r, locale),
    }
}

fn question(q: &QuestionView<'_>, locale: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== {} ==", display_title(q.title, locale));
    let _ = writeln!(
        out,
        "{} {} / {}",
        t!("quiz.progress", locale = locale),
        q.number,
        q.total
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", q.prompt);

    match &q.input {
        InputView::Choice { choices } => {
            for choice in choices {
                let marker = match choice.state {
                    ChoiceState::Correct => "o",
                    ChoiceState::Incorrect => "x",
                    ChoiceState::Open | ChoiceState::Locked => " ",
                };
                let _ = writeln!(out, " [{marker}] {}) {}", choice.index + 1, choice.label);
            }
        }
        InputView::Text {
            value: Some(value), ..
        } => {
            let _ = writeln!(out, " > {value}");
        }
        InputView::Text { value: None, .. } => {}
    }

    if let Some(feedback) = &q.feedback {
        let _ = writeln!(out);
        if feedback.correct {
            let _ = writeln!(out, "{}", t!("quiz.correct", locale = locale));
        } else {
            let _ = writeln!(
                out,
                "{}{}{}",
                t!("quiz.incorrect_before", locale = locale),
                feedback.correct_answer,
                t!("quiz.incorrect_after", locale = locale)
            );
        }
        if let Some(explanation) = feedback.explanation {
            let _ = writeln!(out, "  {explanation}");
        }
    }

    out
}

fn result(r: &ResultView<'_>, locale: &str) -> String {
    let summary = &r.summary;
    let mut out = String::new();

    let _ = writeln!(out, "== {} ==", display_title(r.title, locale));
    let _ = writeln!(out, "{}", t!("quiz.finished", locale = locale));
    let _ = writeln!(
        out,
        "{} ({}%)",
        t!(
            "cli.score",
            score = summary.score,
            total = summary.total,
            locale = locale
        ),
        summary.percentage
    );
    let _ = writeln!(out, "{}", summary.tier.message(locale));

    out
}
