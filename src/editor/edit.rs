use super::{draft::parse_index, Editor};
use crate::{
    errors::ValidationError,
    models::{AnswerKey, QuestionKind},
};

/// The single field an edit touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Kind,
    Prompt,
    /// Choice label at a position; the position one past the end appends.
    Choice(usize),
    Answer,
    Explanation,
}

impl Editor {
    /// Overwrite one field in place.
    ///
    /// Blank required fields and unparsable values are refused, but the
    /// question as a whole is not re-checked: an answer index may point past
    /// the choices, or a choice question may have none, until the quiz is
    /// presented or exported.
    pub fn edit_question(
        &mut self,
        index: usize,
        field: Field,
        value: &str,
    ) -> Result<(), ValidationError> {
        self.check_index(index)?;
        let question = &mut self.quiz.questions[index];
        let value = value.trim();

        match field {
            Field::Kind => {
                question.kind = value.parse().map_err(|_| ValidationError::UnknownKind {
                    value: value.to_string(),
                })?;
            }
            Field::Prompt => {
                if value.is_empty() {
                    return Err(ValidationError::BlankPrompt);
                }
                question.prompt = value.to_string();
            }
            Field::Choice(position) => {
                if value.is_empty() {
                    return Err(ValidationError::BlankChoice { position });
                }
                let len = question.choices.len();
                match position.cmp(&len) {
                    std::cmp::Ordering::Less => question.choices[position] = value.to_string(),
                    std::cmp::Ordering::Equal => question.choices.push(value.to_string()),
                    std::cmp::Ordering::Greater => {
                        return Err(ValidationError::NoSuchChoice { position, len });
                    }
                }
            }
            Field::Answer => {
                question.answer = match question.kind {
                    QuestionKind::Choice => AnswerKey::Index(parse_index(value)?),
                    QuestionKind::Text if value.is_empty() => {
                        return Err(ValidationError::BlankAnswer);
                    }
                    QuestionKind::Text => AnswerKey::Text(value.to_string()),
                };
            }
            Field::Explanation => {
                question.explanation = (!value.is_empty()).then(|| value.to_string());
            }
        }

        tracing::debug!("edited {field:?} of question id={}", question.id);
        Ok(())
    }

    /// Drop one choice label. An answer index behind the removed label is
    /// shifted so it keeps naming the same label.
    pub fn remove_choice(&mut self, index: usize, position: usize) -> Result<(), ValidationError> {
        self.check_index(index)?;
        let question = &mut self.quiz.questions[index];

        let len = question.choices.len();
        if position >= len {
            return Err(ValidationError::NoSuchChoice { position, len });
        }
        question.choices.remove(position);

        if let AnswerKey::Index(answer) = &mut question.answer {
            if *answer > position {
                *answer -= 1;
            }
        }
        Ok(())
    }
}
