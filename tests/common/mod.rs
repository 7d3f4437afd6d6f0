#![allow(dead_code)]

use quizkit::{
    editor::Editor,
    models::{QuestionDraft, QuestionKind, QuizSet},
};

pub fn choice(prompt: &str, choices: &[&str], answer: usize) -> QuestionDraft {
    QuestionDraft {
        kind: QuestionKind::Choice,
        prompt: prompt.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        answer: answer.to_string(),
        explanation: None,
    }
}

pub fn text(prompt: &str, answer: &str) -> QuestionDraft {
    QuestionDraft {
        kind: QuestionKind::Text,
        prompt: prompt.to_string(),
        answer: answer.to_string(),
        ..QuestionDraft::default()
    }
}

pub fn build_quiz(title: &str, drafts: Vec<QuestionDraft>) -> QuizSet {
    let mut editor = Editor::new(title).expect("title should be accepted");
    for draft in drafts {
        editor.add_question(draft).expect("draft should be accepted");
    }
    editor.into_quiz()
}

/// One `2+2?` choice question with choices `3`, `4`, `5`.
pub fn two_plus_two() -> QuizSet {
    build_quiz("Arithmetic", vec![choice("2+2?", &["3", "4", "5"], 1)])
}

/// Choice, text, and a choice with an explanation.
pub fn mixed_quiz() -> QuizSet {
    let mut with_explanation = choice("Largest planet?", &["Mars", "Jupiter", "Venus"], 1);
    with_explanation.explanation = Some("Jupiter is a gas giant.".to_string());

    build_quiz(
        "General knowledge",
        vec![
            choice("2+2?", &["3", "4", "5"], 1),
            text("Capital of France?", "Paris"),
            with_explanation,
        ],
    )
}
