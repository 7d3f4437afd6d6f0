use serde::Serialize;

use super::{AttemptState, Phase, Recorded, Response, Summary};
use crate::models::{AnswerKey, Question, QuestionKind, QuizSet};

/// What a front end needs to draw the current screen of an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum View<'a> {
    Question(QuestionView<'a>),
    Result(ResultView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView<'a> {
    pub title: &'a str,
    pub id: u32,
    pub index: usize,
    /// 1-based, for display.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub input: InputView<'a>,
    pub feedback: Option<Feedback<'a>>,
    pub can_advance: bool,
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputView<'a> {
    Choice { choices: Vec<ChoiceView<'a>> },
    Text { value: Option<&'a str>, locked: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView<'a> {
    pub index: usize,
    pub label: &'a str,
    pub state: ChoiceState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceState {
    /// Clickable, nothing answered yet.
    Open,
    /// Disabled after answering.
    Locked,
    /// The right answer, shown once answered.
    Correct,
    /// The respondent's wrong pick.
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback<'a> {
    pub correct: bool,
    pub correct_answer: &'a str,
    pub explanation: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView<'a> {
    pub title: &'a str,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Pure projection of an attempt onto a screen.
///
/// The quiz is expected to have passed structural validation; a pointer past
/// the last question renders the result screen.
pub fn render<'a>(quiz: &'a QuizSet, state: &'a AttemptState) -> View<'a> {
    let title = quiz.meta.title.as_str();
    let total = quiz.questions.len();

    let index = match state.phase {
        Phase::Presenting(index) if index < total => index,
        _ => {
            return View::Result(ResultView {
                title,
                summary: Summary::new(state.score, total),
            })
        }
    };

    let question = &quiz.questions[index];
    let recorded = state.answers.get(&index);

    View::Question(QuestionView {
        title,
        id: question.id,
        index,
        number: index + 1,
        total,
        prompt: &question.prompt,
        input: input_view(question, recorded),
        feedback: recorded.map(|r| Feedback {
            correct: r.correct,
            correct_answer: question.correct_label().unwrap_or_default(),
            explanation: question.explanation.as_deref(),
        }),
        can_advance: recorded.is_some(),
        is_last: index + 1 == total,
    })
}

fn input_view<'a>(question: &'a Question, recorded: Option<&'a Recorded>) -> InputView<'a> {
    match question.kind {
        QuestionKind::Choice => {
            let picked = match recorded.map(|r| &r.response) {
                Some(Response::Choice(picked)) => Some(*picked),
                _ => None,
            };
            let correct = match question.answer {
                AnswerKey::Index(idx) => Some(idx),
                AnswerKey::Text(_) => None,
            };

            let choices = question
                .choices
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let state = match recorded {
                        None => ChoiceState::Open,
                        Some(_) if Some(index) == correct => ChoiceState::Correct,
                        Some(_) if Some(index) == picked => ChoiceState::Incorrect,
                        Some(_) => ChoiceState::Locked,
                    };
                    ChoiceView {
                        index,
                        label,
                        state,
                    }
                })
                .collect();

            InputView::Choice { choices }
        }
        QuestionKind::Text => InputView::Text {
            value: match recorded.map(|r| &r.response) {
                Some(Response::Text(text)) => Some(text.as_str()),
                _ => None,
            },
            locked: recorded.is_some(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Attempt, Tier};
    use crate::models::QuizMeta;

    fn quiz() -> QuizSet {
        QuizSet {
            meta: QuizMeta {
                title: "Mixed".to_string(),
            },
            questions: vec![
                Question {
                    id: 1,
                    kind: QuestionKind::Choice,
                    prompt: "2+2?".to_string(),
                    choices: vec!["3".to_string(), "4".to_string(), "5".to_string()],
                    answer: AnswerKey::Index(1),
                    explanation: Some("Count it out.".to_string()),
                },
                Question {
                    id: 2,
                    kind: QuestionKind::Text,
                    prompt: "Capital of France?".to_string(),
                    choices: vec![],
                    answer: AnswerKey::Text("Paris".to_string()),
                    explanation: None,
                },
            ],
        }
    }

    fn question_view(view: View<'_>) -> QuestionView<'_> {
        match view {
            View::Question(q) => q,
            View::Result(_) => panic!("expected a question screen"),
        }
    }

    #[test]
    fn fresh_attempt_shows_open_choices() {
        let quiz = quiz();
        let state = AttemptState::default();
        let view = question_view(render(&quiz, &state));

        assert_eq!(view.number, 1);
        assert_eq!(view.total, 2);
        assert!(!view.can_advance);
        assert!(!view.is_last);
        assert!(view.feedback.is_none());
        match view.input {
            InputView::Choice { choices } => {
                assert!(choices.iter().all(|c| c.state == ChoiceState::Open));
            }
            InputView::Text { .. } => panic!("expected choices"),
        }
    }

    #[test]
    fn wrong_pick_marks_both_choices() {
        let quiz = quiz();
        let mut attempt = Attempt::start(&quiz).unwrap();
        attempt.answer(0, Response::Choice(2)).unwrap();

        let view = question_view(attempt.view());
        let states: Vec<ChoiceState> = match &view.input {
            InputView::Choice { choices } => choices.iter().map(|c| c.state).collect(),
            InputView::Text { .. } => panic!("expected choices"),
        };
        assert_eq!(
            states,
            vec![
                ChoiceState::Locked,
                ChoiceState::Correct,
                ChoiceState::Incorrect
            ]
        );

        let feedback = view.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.correct_answer, "4");
        assert_eq!(feedback.explanation, Some("Count it out."));
        assert!(view.can_advance);
    }

    #[test]
    fn answered_text_question_is_locked_with_trimmed_value() {
        let quiz = quiz();
        let mut attempt = Attempt::start(&quiz).unwrap();
        attempt.answer(0, Response::Choice(1)).unwrap();
        attempt.advance().unwrap();
        attempt.answer(1, Response::Text("  paris ".to_string())).unwrap();

        let view = question_view(attempt.view());
        assert!(view.is_last);
        assert_eq!(
            view.input,
            InputView::Text {
                value: Some("paris"),
                locked: true
            }
        );
    }

    #[test]
    fn finished_attempt_shows_result() {
        let quiz = quiz();
        let mut attempt = Attempt::start(&quiz).unwrap();
        attempt.answer(0, Response::Choice(1)).unwrap();
        attempt.advance().unwrap();
        attempt.answer(1, Response::Text("Lyon".to_string())).unwrap();
        attempt.advance().unwrap();

        match attempt.view() {
            View::Result(result) => {
                assert_eq!(result.summary.score, 1);
                assert_eq!(result.summary.percentage, 50);
                assert_eq!(result.summary.tier, Tier::Retry);
            }
            View::Question(_) => panic!("expected the result screen"),
        }
    }

    #[test]
    fn view_serializes_for_a_dom_layer() {
        let quiz = quiz();
        let state = AttemptState::default();
        let json = serde_json::to_value(render(&quiz, &state)).unwrap();
        assert_eq!(json["screen"], "question");
        assert_eq!(json["input"]["kind"], "choice");
        assert_eq!(json["input"]["choices"][1]["state"], "open");
    }
}
