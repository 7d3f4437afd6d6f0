use std::path::PathBuf;

use clap::{Args, ValueEnum};
use color_eyre::eyre::eyre;
use rust_i18n::t;

use super::{load_quiz, source::write_output};
use crate::{
    editor::validate_quiz,
    engine::{render, AttemptState, Phase},
    errors::ValidationError,
    models::QuizSet,
    names::{self, DEFAULT_LOCALE},
    statics,
    views::{self, console},
};

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Quiz source file, or `-` for stdin
    pub source: PathBuf,

    /// Question to show, counting from 1
    #[arg(short, long, default_value_t = 1)]
    pub question: usize,

    #[arg(short, long, value_enum, default_value_t = PreviewFormat::Html)]
    pub format: PreviewFormat,

    /// Where to write the snapshot; stdout when omitted
    #[arg(short, long, env = "QUIZKIT_PREVIEW_OUT")]
    pub out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewFormat {
    /// Standalone page with the style sheet inlined
    Html,
    /// The view model as JSON
    Json,
    /// Plain text, as `play` shows it
    Text,
}

pub fn run(args: PreviewArgs) -> color_eyre::Result<()> {
    let locale = DEFAULT_LOCALE;
    let quiz = load_quiz(&args.source, locale)?;
    let snapshot = snapshot(&quiz, args.question, args.format, locale)?;

    write_output(args.out.as_deref(), &snapshot)?;
    if let Some(path) = &args.out {
        let path = path.display();
        eprintln!("{}", t!("cli.preview_written", path = path, locale = locale));
    }
    Ok(())
}

/// The unanswered screen for question `number` (1-based).
pub fn snapshot(
    quiz: &QuizSet,
    number: usize,
    format: PreviewFormat,
    locale: &str,
) -> color_eyre::Result<String> {
    validate_quiz(quiz).map_err(|e| eyre!(e.message(locale)))?;

    let len = quiz.questions.len();
    if number == 0 || number > len {
        let err = ValidationError::NoSuchQuestion {
            index: number.saturating_sub(1),
            len,
        };
        return Err(eyre!(err.message(locale)));
    }

    let state = AttemptState {
        phase: Phase::Presenting(number - 1),
        ..AttemptState::default()
    };
    let view = render(quiz, &state);

    let out = match format {
        PreviewFormat::Html => {
            let stylesheet = statics::asset(names::STYLESHEET_ASSET)?;
            let body = views::quiz::mount_point(&view, locale);
            views::document(&quiz.meta.title, stylesheet, body, locale).into_string()
        }
        PreviewFormat::Json => serde_json::to_string_pretty(&view)?,
        PreviewFormat::Text => console::render(&view, locale),
    };
    Ok(out)
}
