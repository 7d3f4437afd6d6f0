use crate::{
    errors::{Problem, StructuralError},
    models::{AnswerKey, Question, QuestionKind, QuizSet},
};

/// Structural check run before a quiz is presented or exported. Reports
/// the first broken question in presentation order.
pub fn validate_quiz(quiz: &QuizSet) -> Result<(), StructuralError> {
    if quiz.questions.is_empty() {
        return Err(StructuralError::EmptyQuiz);
    }

    for (position, question) in quiz.questions.iter().enumerate() {
        if let Some((field, problem)) = find_problem(question) {
            return Err(StructuralError::Question {
                position,
                id: question.id,
                field,
                problem,
            });
        }
    }

    Ok(())
}

fn find_problem(question: &Question) -> Option<(&'static str, Problem)> {
    if question.prompt.trim().is_empty() {
        return Some(("question", Problem::Blank));
    }

    match question.kind {
        QuestionKind::Choice => {
            if question.choices.is_empty() {
                return Some(("choices", Problem::NoChoices));
            }
            if let Some(position) = question.choices.iter().position(|c| c.trim().is_empty()) {
                return Some(("choices", Problem::BlankChoice { position }));
            }
            match question.answer {
                AnswerKey::Index(index) if index >= question.choices.len() => Some((
                    "answer",
                    Problem::OutOfRange {
                        index,
                        len: question.choices.len(),
                    },
                )),
                AnswerKey::Index(_) => None,
                AnswerKey::Text(_) => Some(("answer", Problem::NotAnIndex)),
            }
        }
        QuestionKind::Text => match &question.answer {
            AnswerKey::Text(text) if text.trim().is_empty() => Some(("answer", Problem::Blank)),
            AnswerKey::Text(_) => None,
            AnswerKey::Index(_) => Some(("answer", Problem::NotText)),
        },
    }
}
