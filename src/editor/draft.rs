use super::Editor;
use crate::{
    errors::ValidationError,
    models::{AnswerKey, Question, QuestionDraft, QuestionKind},
};

impl Editor {
    /// Validate a form draft and append it. Returns the new question count.
    pub fn add_question(&mut self, draft: QuestionDraft) -> Result<usize, ValidationError> {
        let question = finalize(draft, self.next_id)?;

        tracing::debug!(
            "added {} question id={}",
            question.kind.as_str(),
            question.id
        );
        self.quiz.questions.push(question);
        self.next_id += 1;

        Ok(self.quiz.questions.len())
    }
}

fn finalize(draft: QuestionDraft, id: u32) -> Result<Question, ValidationError> {
    let prompt = draft.prompt.trim();
    if prompt.is_empty() {
        return Err(ValidationError::BlankPrompt);
    }

    let explanation = draft
        .explanation
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    let (choices, answer) = match draft.kind {
        QuestionKind::Choice => {
            if draft.choices.is_empty() {
                return Err(ValidationError::NoChoices);
            }
            let choices = draft
                .choices
                .iter()
                .enumerate()
                .map(|(position, label)| match label.trim() {
                    "" => Err(ValidationError::BlankChoice { position }),
                    label => Ok(label.to_string()),
                })
                .collect::<Result<Vec<_>, _>>()?;

            let index = parse_index(&draft.answer)?;
            if index >= choices.len() {
                return Err(ValidationError::AnswerOutOfRange {
                    index,
                    len: choices.len(),
                });
            }
            (choices, AnswerKey::Index(index))
        }
        QuestionKind::Text => {
            let answer = draft.answer.trim();
            if answer.is_empty() {
                return Err(ValidationError::BlankAnswer);
            }
            (Vec::new(), AnswerKey::Text(answer.to_string()))
        }
    };

    Ok(Question {
        id,
        kind: draft.kind,
        prompt: prompt.to_string(),
        choices,
        answer,
        explanation,
    })
}

pub(super) fn parse_index(value: &str) -> Result<usize, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::BlankAnswer);
    }
    value
        .parse::<usize>()
        .map_err(|_| ValidationError::AnswerNotANumber {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_draft() -> QuestionDraft {
        QuestionDraft {
            kind: QuestionKind::Choice,
            prompt: "2+2?".to_string(),
            choices: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            answer: "1".to_string(),
            explanation: Some("  ".to_string()),
        }
    }

    #[test]
    fn add_returns_count_and_assigns_sequential_ids() {
        let mut editor = Editor::new("Math").unwrap();
        assert_eq!(editor.add_question(choice_draft()).unwrap(), 1);
        assert_eq!(editor.add_question(choice_draft()).unwrap(), 2);

        let ids: Vec<u32> = editor.quiz().questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let first = &editor.quiz().questions[0];
        assert_eq!(first.answer, AnswerKey::Index(1));
        assert_eq!(first.explanation, None);
    }

    #[test]
    fn blank_fields_leave_model_unchanged() {
        let mut editor = Editor::new("Math").unwrap();

        let mut blank_prompt = choice_draft();
        blank_prompt.prompt = " \t".to_string();
        assert_eq!(
            editor.add_question(blank_prompt),
            Err(ValidationError::BlankPrompt)
        );

        let mut blank_choice = choice_draft();
        blank_choice.choices[2] = String::new();
        assert_eq!(
            editor.add_question(blank_choice),
            Err(ValidationError::BlankChoice { position: 2 })
        );

        let mut no_choices = choice_draft();
        no_choices.choices.clear();
        assert_eq!(
            editor.add_question(no_choices),
            Err(ValidationError::NoChoices)
        );

        assert!(editor.is_empty());
    }

    #[test]
    fn choice_answer_must_parse_and_be_in_range() {
        let mut editor = Editor::new("Math").unwrap();

        let mut word = choice_draft();
        word.answer = "two".to_string();
        assert_eq!(
            editor.add_question(word),
            Err(ValidationError::AnswerNotANumber {
                value: "two".to_string()
            })
        );

        let mut too_big = choice_draft();
        too_big.answer = "3".to_string();
        assert_eq!(
            editor.add_question(too_big),
            Err(ValidationError::AnswerOutOfRange { index: 3, len: 3 })
        );
        assert!(editor.is_empty());
    }

    #[test]
    fn text_question_drops_choices_and_trims_answer() {
        let mut editor = Editor::new("Geo").unwrap();
        editor
            .add_question(QuestionDraft {
                kind: QuestionKind::Text,
                prompt: "Capital of France?".to_string(),
                choices: vec!["ignored".to_string()],
                answer: "  Paris ".to_string(),
                explanation: Some("It is on the Seine.".to_string()),
            })
            .unwrap();

        let q = &editor.quiz().questions[0];
        assert!(q.choices.is_empty());
        assert_eq!(q.answer, AnswerKey::Text("Paris".to_string()));
        assert_eq!(q.explanation.as_deref(), Some("It is on the Seine."));
    }

    #[test]
    fn blank_text_answer_is_rejected() {
        let mut editor = Editor::new("Geo").unwrap();
        let err = editor
            .add_question(QuestionDraft {
                kind: QuestionKind::Text,
                prompt: "Capital of France?".to_string(),
                answer: "   ".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::BlankAnswer);
    }
}
