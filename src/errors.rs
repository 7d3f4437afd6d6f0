use std::fmt;

use rust_i18n::t;

use crate::models::QuestionKind;

/// A blank or malformed field at the add/edit boundary. The model is left
/// untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BlankTitle,
    BlankPrompt,
    NoChoices,
    BlankChoice { position: usize },
    BlankAnswer,
    AnswerNotANumber { value: String },
    AnswerOutOfRange { index: usize, len: usize },
    UnknownKind { value: String },
    NoSuchQuestion { index: usize, len: usize },
    NoSuchChoice { position: usize, len: usize },
}

/// A response the engine refused to grade. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRejected {
    BlankText,
    NotPresenting,
    WrongQuestion { expected: usize, got: usize },
    ResponseMismatch { expected: QuestionKind },
    NoSuchChoice { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    Unanswered { index: usize },
    NotPresenting,
    NotFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Blank,
    NoChoices,
    BlankChoice { position: usize },
    NotAnIndex,
    OutOfRange { index: usize, len: usize },
    NotText,
}

/// A quiz that cannot be presented or exported as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    EmptyQuiz,
    Question {
        position: usize,
        id: u32,
        field: &'static str,
        problem: Problem,
    },
}

#[derive(Debug)]
pub enum ExportError {
    Structural(StructuralError),
    Json(serde_json::Error),
    MissingAsset(&'static str),
    NoEmbeddedQuiz,
}

impl From<StructuralError> for ExportError {
    fn from(err: StructuralError) -> Self {
        ExportError::Structural(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json(err)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankTitle => f.write_str("title is blank"),
            ValidationError::BlankPrompt => f.write_str("question prompt is blank"),
            ValidationError::NoChoices => f.write_str("choice question has no choices"),
            ValidationError::BlankChoice { position } => {
                write!(f, "choice {} is blank", position + 1)
            }
            ValidationError::BlankAnswer => f.write_str("answer is blank"),
            ValidationError::AnswerNotANumber { value } => {
                write!(f, "answer {value:?} is not a choice index")
            }
            ValidationError::AnswerOutOfRange { index, len } => {
                write!(f, "answer index {index} is outside 0..{len}")
            }
            ValidationError::UnknownKind { value } => {
                write!(f, "unknown question type {value:?}")
            }
            ValidationError::NoSuchQuestion { index, len } => {
                write!(f, "no question at index {index} (quiz has {len})")
            }
            ValidationError::NoSuchChoice { position, len } => {
                write!(f, "no choice at position {position} (question has {len})")
            }
        }
    }
}

impl fmt::Display for AnswerRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerRejected::BlankText => f.write_str("text answer is blank"),
            AnswerRejected::NotPresenting => f.write_str("the attempt is already finished"),
            AnswerRejected::WrongQuestion { expected, got } => {
                write!(f, "question {got} is not being presented (current is {expected})")
            }
            AnswerRejected::ResponseMismatch { expected } => {
                write!(f, "expected a {} response", expected.as_str())
            }
            AnswerRejected::NoSuchChoice { index, len } => {
                write!(f, "choice {index} is outside 0..{len}")
            }
        }
    }
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::Unanswered { index } => {
                write!(f, "question {index} has not been answered")
            }
            TransitionError::NotPresenting => f.write_str("the attempt is already finished"),
            TransitionError::NotFinished => f.write_str("the attempt is not finished"),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Blank => f.write_str("is blank"),
            Problem::NoChoices => f.write_str("has no choices"),
            Problem::BlankChoice { position } => write!(f, "has a blank choice {}", position + 1),
            Problem::NotAnIndex => f.write_str("is not a choice index"),
            Problem::OutOfRange { index, len } => write!(f, "index {index} is outside 0..{len}"),
            Problem::NotText => f.write_str("is not a text answer"),
        }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::EmptyQuiz => f.write_str("quiz has no questions"),
            StructuralError::Question {
                position,
                id,
                field,
                problem,
            } => write!(f, "question {} (id {id}): {field} {problem}", position + 1),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Structural(err) => write!(f, "cannot export: {err}"),
            ExportError::Json(err) => write!(f, "quiz data is not valid JSON: {err}"),
            ExportError::MissingAsset(name) => write!(f, "missing bundled asset {name}"),
            ExportError::NoEmbeddedQuiz => f.write_str("no embedded quiz data found"),
        }
    }
}

impl std::error::Error for ValidationError {}
impl std::error::Error for AnswerRejected {}
impl std::error::Error for TransitionError {}
impl std::error::Error for StructuralError {}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Structural(err) => Some(err),
            ExportError::Json(err) => Some(err),
            ExportError::MissingAsset(_) | ExportError::NoEmbeddedQuiz => None,
        }
    }
}

// Author-facing copy, shown instead of the developer-facing `Display` text.

impl ValidationError {
    pub fn message(&self, locale: &str) -> String {
        match self {
            ValidationError::BlankTitle => t!("errors.blank_title", locale = locale),
            ValidationError::BlankPrompt => t!("errors.blank_prompt", locale = locale),
            ValidationError::NoChoices => t!("errors.no_choices", locale = locale),
            ValidationError::BlankChoice { position } => {
                let number = position + 1;
                t!("errors.blank_choice", number = number, locale = locale)
            }
            ValidationError::BlankAnswer => t!("errors.blank_answer", locale = locale),
            ValidationError::AnswerNotANumber { value } => {
                t!("errors.answer_not_a_number", value = value, locale = locale)
            }
            ValidationError::AnswerOutOfRange { index, len } => {
                let (index, len) = (*index, *len);
                t!("errors.answer_out_of_range", index = index, len = len, locale = locale)
            }
            ValidationError::UnknownKind { value } => {
                t!("errors.unknown_kind", value = value, locale = locale)
            }
            ValidationError::NoSuchQuestion { index, .. } => {
                let number = index + 1;
                t!("errors.no_such_question", number = number, locale = locale)
            }
            ValidationError::NoSuchChoice { position, .. } => {
                let number = position + 1;
                t!("errors.no_such_choice", number = number, locale = locale)
            }
        }
        .to_string()
    }
}

impl AnswerRejected {
    pub fn message(&self, locale: &str) -> String {
        match self {
            AnswerRejected::BlankText => t!("quiz.enter_answer", locale = locale).to_string(),
            AnswerRejected::NoSuchChoice { len, .. } => {
                let len = *len;
                t!("errors.pick_choice", len = len, locale = locale).to_string()
            }
            other => other.to_string(),
        }
    }
}

impl StructuralError {
    pub fn message(&self, locale: &str) -> String {
        match self {
            StructuralError::EmptyQuiz => t!("errors.empty_quiz", locale = locale).to_string(),
            StructuralError::Question {
                position,
                field,
                problem,
                ..
            } => {
                let number = position + 1;
                let detail = problem.to_string();
                t!(
                    "errors.broken_question",
                    number = number,
                    field = field,
                    detail = detail,
                    locale = locale
                )
                .to_string()
            }
        }
    }
}
