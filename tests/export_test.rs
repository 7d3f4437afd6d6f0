mod common;

use quizkit::{
    errors::{ExportError, Problem, StructuralError},
    export::{self, embedded_quiz, DirectorySink, Selection},
    models::AnswerKey,
    names::{self, DEFAULT_LOCALE},
};

#[test]
fn three_question_quiz_round_trips_through_the_bundle() {
    let quiz = common::mixed_quiz();
    let bundles = export::export(&quiz, DEFAULT_LOCALE).expect("export should succeed");

    let recovered = embedded_quiz(&bundles.single_file).expect("data literal should parse");
    assert_eq!(recovered, quiz);
    assert_eq!(recovered.questions.len(), 3);
    assert_eq!(
        recovered.questions[2].explanation.as_deref(),
        Some("Jupiter is a gas giant.")
    );
}

#[test]
fn hostile_text_cannot_break_out_of_the_script() {
    let quiz = common::build_quiz(
        "</script><script>alert(1)</script>",
        vec![
            common::choice("a </script> b", &["<!--", "&amp;"], 0),
            common::text("line\u{2028}separator", "</SCRIPT>"),
        ],
    );
    let bundles = export::export(&quiz, DEFAULT_LOCALE).expect("export should succeed");

    for bundle in [&bundles.split_markup, &bundles.single_file] {
        assert_eq!(bundle.matches("</script>").count(), 1);
        assert!(!bundle.contains("<script>alert"));
        assert!(!bundle.contains('\u{2028}'));
        assert_eq!(embedded_quiz(bundle).expect("data literal should parse"), quiz);
    }
}

#[test]
fn export_names_the_first_broken_question() {
    let mut quiz = common::mixed_quiz();
    quiz.questions[1].answer = AnswerKey::Index(0);
    quiz.questions[2].choices.clear();

    match export::export(&quiz, DEFAULT_LOCALE) {
        Err(ExportError::Structural(StructuralError::Question {
            position,
            id,
            field,
            problem,
        })) => {
            assert_eq!((position, id, field), (1, 2, "answer"));
            assert_eq!(problem, Problem::NotText);
        }
        other => panic!("expected a structural error, got {other:?}"),
    }
}

#[test]
fn exported_files_land_in_the_directory() {
    let dir = std::env::temp_dir().join(format!("quizkit_export_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let quiz = common::mixed_quiz();
    let bundles = export::export(&quiz, DEFAULT_LOCALE).expect("export should succeed");
    let guide = export::setup_guide(&quiz, "2024/05/06 07:08:09", DEFAULT_LOCALE)
        .expect("guide should render");

    let mut sink = DirectorySink::new(&dir);
    let written = export::deliver(&bundles, Selection::All, Some(&guide), &mut sink)
        .expect("files should be written");
    assert_eq!(written.len(), 4);

    let single = std::fs::read_to_string(dir.join(names::SINGLE_FILE_BUNDLE_FILE))
        .expect("single file should exist");
    assert_eq!(single, bundles.single_file);

    let readme = std::fs::read_to_string(dir.join(names::SETUP_GUIDE_FILE))
        .expect("guide should exist");
    assert!(readme.contains("General knowledge"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn data_literal_text_in_title_and_prompt_still_round_trips() {
    let quiz = common::build_quiz(
        "const quizData = quiz",
        vec![
            common::choice("What does const quizData = {} declare?", &["a constant", "a loop"], 0),
            common::text("Keyword for a constant?", "const"),
        ],
    );
    let bundles = export::export(&quiz, DEFAULT_LOCALE).expect("export should succeed");

    for bundle in [&bundles.split_markup, &bundles.single_file] {
        assert!(bundle.matches(names::DATA_LITERAL_PREFIX).count() > 1);
        assert_eq!(embedded_quiz(bundle).expect("data literal should parse"), quiz);
    }
}
