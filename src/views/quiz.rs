use maud::{html, Markup};
use rust_i18n::t;

use super::display_title;
use crate::{
    engine::{ChoiceState, Feedback, InputView, QuestionView, ResultView, View},
    names,
};

// The markup here mirrors what the bundled runtime draws, so a pre-rendered
// screen and a live one look the same.

/// The mount point with the given screen already drawn into it.
pub fn mount_point(view: &View<'_>, locale: &str) -> Markup {
    html! {
        div id=(names::MOUNT_POINT_ID) {
            (app(view, locale))
        }
    }
}

pub fn app(view: &View<'_>, locale: &str) -> Markup {
    let (title, number, total) = match view {
        View::Question(q) => (q.title, q.number, q.total),
        View::Result(r) => (r.title, r.summary.total, r.summary.total),
    };

    html! {
        div.quiz-app {
            div.quiz-header {
                h1 { (display_title(title, locale)) }
                p.quiz-progress {
                    (t!("quiz.progress", locale = locale)) " "
                    span id="current-question" { (number) }
                    " / " (total)
                }
            }
            div.quiz-body id=(names::QUIZ_BODY_ID) {
                @match view {
                    View::Question(q) => { (question(q, locale)) }
                    View::Result(r) => { (result(r, locale)) }
                }
            }
        }
    }
}

pub fn question(q: &QuestionView<'_>, locale: &str) -> Markup {
    html! {
        div.question-container data-question-id=(q.id) {
            h2.question-text { (q.prompt) }
            @match &q.input {
                InputView::Choice { choices } => {
                    div.choices-container {
                        @for choice in choices {
                            @let class = match choice.state {
                                ChoiceState::Correct => "choice-button is-correct",
                                ChoiceState::Incorrect => "choice-button is-incorrect",
                                ChoiceState::Open | ChoiceState::Locked => "choice-button",
                            };
                            button type="button"
                                   class=(class)
                                   data-action="choose"
                                   data-index=(choice.index)
                                   disabled[choice.state != ChoiceState::Open] {
                                (choice.label)
                            }
                        }
                    }
                }
                InputView::Text { value, locked } => {
                    @let class = match &q.feedback {
                        Some(f) if f.correct => "text-input is-correct",
                        Some(_) => "text-input is-incorrect",
                        None => "text-input",
                    };
                    div.text-answer-container {
                        input type="text"
                              class=(class)
                              id=(format!("text-input-{}", q.index))
                              placeholder=(t!("quiz.text_placeholder", locale = locale))
                              autocomplete="off"
                              value=[*value]
                              disabled[*locked];
                        button type="button" class="submit-button" data-action="submit" disabled[*locked] {
                            (t!("quiz.submit", locale = locale))
                        }
                    }
                }
            }
            @match &q.feedback {
                Some(feedback) => { (feedback_block(feedback, q.is_last, locale)) }
                None => { div class="feedback" id="feedback" {} }
            }
        }
    }
}

fn feedback_block(feedback: &Feedback<'_>, is_last: bool, locale: &str) -> Markup {
    let class = if feedback.correct {
        "feedback show correct"
    } else {
        "feedback show incorrect"
    };

    html! {
        div class=(class) id="feedback" {
            @if feedback.correct {
                (t!("quiz.correct", locale = locale))
            } @else {
                (t!("quiz.incorrect_before", locale = locale))
                (feedback.correct_answer)
                (t!("quiz.incorrect_after", locale = locale))
            }
            @if let Some(explanation) = feedback.explanation {
                div.explanation { (explanation) }
            }
            button type="button" id="next-button" class="next-button" data-action="next" {
                @if is_last {
                    (t!("quiz.see_results", locale = locale))
                } @else {
                    (t!("quiz.next", locale = locale))
                }
            }
        }
    }
}

pub fn result(r: &ResultView<'_>, locale: &str) -> Markup {
    let summary = &r.summary;

    html! {
        div.result-container data-tier=(summary.tier.as_str()) {
            h2 { (t!("quiz.finished", locale = locale)) }
            div.score-display {
                p.score-number { (summary.score) " / " (summary.total) }
                p.score-percentage { "(" (summary.percentage) "%)" }
            }
            p.result-message { (summary.tier.message(locale)) }
            button type="button" class="restart-button" data-action="restart" {
                (t!("quiz.restart", locale = locale))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{Attempt, AttemptState, Response},
        models::{AnswerKey, Question, QuestionKind, QuizMeta, QuizSet},
        names::DEFAULT_LOCALE,
    };

    fn quiz() -> QuizSet {
        QuizSet {
            meta: QuizMeta {
                title: "<b>Math</b>".to_string(),
            },
            questions: vec![Question {
                id: 1,
                kind: QuestionKind::Choice,
                prompt: "1 < 2?".to_string(),
                choices: vec!["yes".to_string(), "no".to_string()],
                answer: AnswerKey::Index(0),
                explanation: None,
            }],
        }
    }

    #[test]
    fn authored_text_is_escaped() {
        let quiz = quiz();
        let state = AttemptState::default();
        let html = mount_point(&crate::engine::render(&quiz, &state), DEFAULT_LOCALE).into_string();

        assert!(html.contains("&lt;b&gt;Math&lt;/b&gt;"));
        assert!(html.contains("1 &lt; 2?"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn open_question_has_enabled_buttons() {
        let quiz = quiz();
        let state = AttemptState::default();
        let html = mount_point(&crate::engine::render(&quiz, &state), DEFAULT_LOCALE).into_string();

        assert!(html.starts_with(r#"<div id="quiz-app-root">"#));
        assert!(html.contains(r#"data-action="choose" data-index="1">no</button>"#));
        assert!(!html.contains("disabled"));
        assert!(html.contains(r#"<div class="feedback" id="feedback"></div>"#));
    }

    #[test]
    fn answered_and_finished_screens() {
        let quiz = quiz();
        let mut attempt = Attempt::start(&quiz).unwrap();
        attempt.answer(0, Response::Choice(1)).unwrap();

        let html = app(&attempt.view(), DEFAULT_LOCALE).into_string();
        assert!(html.contains("choice-button is-correct"));
        assert!(html.contains("choice-button is-incorrect"));
        assert!(html.contains("feedback show incorrect"));
        assert!(html.contains("「yes」"));

        attempt.advance().unwrap();
        let html = app(&attempt.view(), DEFAULT_LOCALE).into_string();
        assert!(html.contains(r#"data-tier="retry""#));
        assert!(html.contains("0 / 1"));
        assert!(html.contains("(0%)"));
    }
}
