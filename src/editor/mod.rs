// Authoring session: owns the quiz being built and every mutation of it.

mod draft;
mod edit;
mod validate;

pub use edit::Field;
pub use validate::validate_quiz;

use crate::{
    errors::ValidationError,
    models::{Question, QuizMeta, QuizSet},
};

#[derive(Debug, Clone)]
pub struct Editor {
    quiz: QuizSet,
    next_id: u32,
}

impl Editor {
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::BlankTitle);
        }

        Ok(Self {
            quiz: QuizSet {
                meta: QuizMeta {
                    title: title.to_string(),
                },
                questions: Vec::new(),
            },
            next_id: 1,
        })
    }

    /// Continue editing a finalized quiz. Nothing is validated here; the
    /// quiz is checked again when it is presented or exported.
    pub fn from_quiz(quiz: QuizSet) -> Self {
        let next_id = quiz.questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self { quiz, next_id }
    }

    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    pub fn into_quiz(self) -> QuizSet {
        self.quiz
    }

    pub fn len(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiz.questions.is_empty()
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        self.quiz.meta.title = title.to_string();
        Ok(())
    }

    pub fn remove_question(&mut self, index: usize) -> Result<Question, ValidationError> {
        self.check_index(index)?;
        let removed = self.quiz.questions.remove(index);
        tracing::debug!("removed question id={} at index {index}", removed.id);
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        let len = self.quiz.questions.len();
        if index >= len {
            return Err(ValidationError::NoSuchQuestion { index, len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionDraft, QuestionKind};

    fn draft(prompt: &str) -> QuestionDraft {
        QuestionDraft {
            kind: QuestionKind::Choice,
            prompt: prompt.to_string(),
            choices: vec!["a".to_string(), "b".to_string()],
            answer: "0".to_string(),
            explanation: None,
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(Editor::new("   ").unwrap_err(), ValidationError::BlankTitle);

        let mut editor = Editor::new("Quiz").unwrap();
        assert_eq!(editor.set_title(""), Err(ValidationError::BlankTitle));
        assert_eq!(editor.quiz().meta.title, "Quiz");
    }

    #[test]
    fn remove_keeps_order_and_ids() {
        let mut editor = Editor::new("Quiz").unwrap();
        for prompt in ["one", "two", "three"] {
            editor.add_question(draft(prompt)).unwrap();
        }

        let removed = editor.remove_question(1).unwrap();
        assert_eq!(removed.prompt, "two");

        let remaining: Vec<(u32, &str)> = editor
            .quiz()
            .questions
            .iter()
            .map(|q| (q.id, q.prompt.as_str()))
            .collect();
        assert_eq!(remaining, vec![(1, "one"), (3, "three")]);

        // ids are never reused
        editor.add_question(draft("four")).unwrap();
        assert_eq!(editor.quiz().questions[2].id, 4);
    }

    #[test]
    fn remove_out_of_range_fails() {
        let mut editor = Editor::new("Quiz").unwrap();
        assert_eq!(
            editor.remove_question(0),
            Err(ValidationError::NoSuchQuestion { index: 0, len: 0 })
        );
    }

    #[test]
    fn from_quiz_continues_id_sequence() {
        let mut editor = Editor::new("Quiz").unwrap();
        editor.add_question(draft("one")).unwrap();
        editor.add_question(draft("two")).unwrap();

        let mut reopened = Editor::from_quiz(editor.into_quiz());
        reopened.add_question(draft("three")).unwrap();
        assert_eq!(reopened.quiz().questions[2].id, 3);
    }
}
