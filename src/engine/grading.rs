use rust_i18n::t;
use serde::Serialize;

use super::Response;
use crate::{
    errors::AnswerRejected,
    models::{AnswerKey, Question, QuestionKind},
};

/// Feedback tier picked from the final percentage. The thresholds are
/// shared with exported bundles and must not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Perfect,
    Great,
    Good,
    Retry,
}

impl Tier {
    /// Highest tier first.
    pub const ALL: [Tier; 4] = [Tier::Perfect, Tier::Great, Tier::Good, Tier::Retry];

    pub fn min_percentage(self) -> u32 {
        match self {
            Tier::Perfect => 100,
            Tier::Great => 80,
            Tier::Good => 60,
            Tier::Retry => 0,
        }
    }

    pub fn for_percentage(percentage: u32) -> Tier {
        Tier::ALL
            .into_iter()
            .find(|tier| percentage >= tier.min_percentage())
            .unwrap_or(Tier::Retry)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::Great => "great",
            Tier::Good => "good",
            Tier::Retry => "retry",
        }
    }

    pub fn message(self, locale: &str) -> String {
        match self {
            Tier::Perfect => t!("tier.perfect", locale = locale),
            Tier::Great => t!("tier.great", locale = locale),
            Tier::Good => t!("tier.good", locale = locale),
            Tier::Retry => t!("tier.retry", locale = locale),
        }
        .to_string()
    }
}

/// `round(100 * score / total)` with halves rounded up, in integers.
///
/// `percentage` in `assets/quiz.js` is the same formula; keep them in step.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * score + total) / (2 * total)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: Tier,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: Tier::for_percentage(percentage),
        }
    }
}

/// Strips the characters JavaScript's `String.prototype.trim` strips: Unicode
/// white space except U+0085, plus U+FEFF.
pub fn trim_answer(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Case and surrounding whitespace are ignored for text answers.
///
/// Mirrors `normalize` in `assets/quiz.js`.
pub fn normalize_text(text: &str) -> String {
    trim_answer(text).to_lowercase()
}

/// Decide whether `response` answers `question` correctly.
pub fn judge(question: &Question, response: &Response) -> Result<bool, AnswerRejected> {
    match (question.kind, response) {
        (QuestionKind::Choice, Response::Choice(index)) => {
            let len = question.choices.len();
            if *index >= len {
                return Err(AnswerRejected::NoSuchChoice { index: *index, len });
            }
            Ok(question.answer == AnswerKey::Index(*index))
        }
        (QuestionKind::Text, Response::Text(text)) => {
            if trim_answer(text).is_empty() {
                return Err(AnswerRejected::BlankText);
            }
            Ok(match &question.answer {
                AnswerKey::Text(expected) => normalize_text(text) == normalize_text(expected),
                AnswerKey::Index(_) => false,
            })
        }
        (expected, _) => Err(AnswerRejected::ResponseMismatch { expected }),
    }
}
