// Per-attempt state machine: Presenting(0) .. Presenting(n-1) -> Finished.

mod grading;
mod view;

use std::collections::BTreeMap;

use serde::Serialize;

pub use grading::{judge, normalize_text, percentage, trim_answer, Summary, Tier};
pub use view::{render, ChoiceState, ChoiceView, Feedback, InputView, QuestionView, ResultView, View};

use crate::{
    editor::validate_quiz,
    errors::{AnswerRejected, StructuralError, TransitionError},
    models::QuizSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "lowercase")]
pub enum Phase {
    Presenting(usize),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Choice(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recorded {
    pub response: Response,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    pub correct: bool,
    /// The question had already been answered; nothing was recorded.
    pub repeated: bool,
}

/// Everything one presentation of a quiz remembers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptState {
    pub phase: Phase,
    pub answers: BTreeMap<usize, Recorded>,
    pub score: usize,
}

impl Default for AttemptState {
    fn default() -> Self {
        Self {
            phase: Phase::Presenting(0),
            answers: BTreeMap::new(),
            score: 0,
        }
    }
}

/// Drives one attempt over a borrowed quiz. Independent attempts never
/// share state.
#[derive(Debug, Clone)]
pub struct Attempt<'q> {
    quiz: &'q QuizSet,
    state: AttemptState,
}

impl<'q> Attempt<'q> {
    pub fn start(quiz: &'q QuizSet) -> Result<Self, StructuralError> {
        validate_quiz(quiz)?;
        tracing::debug!(
            "attempt started on {:?} with {} questions",
            quiz.meta.title,
            quiz.questions.len()
        );
        Ok(Self {
            quiz,
            state: AttemptState::default(),
        })
    }

    pub fn quiz(&self) -> &'q QuizSet {
        self.quiz
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn answer_for(&self, index: usize) -> Option<&Recorded> {
        self.state.answers.get(&index)
    }

    /// Grade the response for the question being presented. A question is
    /// graded at most once: answering it again returns the first verdict.
    pub fn answer(&mut self, index: usize, response: Response) -> Result<Judgement, AnswerRejected> {
        let current = match self.state.phase {
            Phase::Presenting(current) => current,
            Phase::Finished => return Err(AnswerRejected::NotPresenting),
        };
        if current != index {
            return Err(AnswerRejected::WrongQuestion {
                expected: current,
                got: index,
            });
        }

        if let Some(recorded) = self.state.answers.get(&index) {
            tracing::debug!("question {index} already answered, ignoring");
            return Ok(Judgement {
                correct: recorded.correct,
                repeated: true,
            });
        }

        let question = &self.quiz.questions[index];
        let correct = judge(question, &response).inspect_err(|e| {
            tracing::warn!("answer to question id={} rejected: {e}", question.id);
        })?;

        let response = match response {
            Response::Text(text) => Response::Text(trim_answer(&text).to_string()),
            other => other,
        };
        if correct {
            self.state.score += 1;
        }
        self.state.answers.insert(index, Recorded { response, correct });
        tracing::debug!("question {index} answered, correct={correct}");

        Ok(Judgement {
            correct,
            repeated: false,
        })
    }

    pub fn advance(&mut self) -> Result<Phase, TransitionError> {
        let current = match self.state.phase {
            Phase::Presenting(current) => current,
            Phase::Finished => return Err(TransitionError::NotPresenting),
        };
        if !self.state.answers.contains_key(&current) {
            return Err(TransitionError::Unanswered { index: current });
        }

        let next = current + 1;
        self.state.phase = if next < self.quiz.questions.len() {
            Phase::Presenting(next)
        } else {
            let summary = self.summary_unchecked();
            tracing::info!(
                "attempt finished: {}/{} ({}%, {})",
                summary.score,
                summary.total,
                summary.percentage,
                summary.tier.as_str()
            );
            Phase::Finished
        };

        Ok(self.state.phase)
    }

    pub fn restart(&mut self) -> Result<(), TransitionError> {
        if self.state.phase != Phase::Finished {
            return Err(TransitionError::NotFinished);
        }
        self.state = AttemptState::default();
        tracing::debug!("attempt restarted");
        Ok(())
    }

    /// Final score, available once the attempt is finished.
    pub fn summary(&self) -> Option<Summary> {
        (self.state.phase == Phase::Finished).then(|| self.summary_unchecked())
    }

    fn summary_unchecked(&self) -> Summary {
        Summary::new(self.state.score, self.quiz.questions.len())
    }

    pub fn view(&self) -> View<'_> {
        render(self.quiz, &self.state)
    }
}
