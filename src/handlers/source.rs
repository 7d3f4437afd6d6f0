use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use color_eyre::eyre::{eyre, WrapErr};
use rust_i18n::t;

use crate::{
    editor::Editor,
    models::{DraftSource, QuizSet, QuizSource},
};

/// Reads a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> color_eyre::Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).wrap_err("could not read stdin");
    }
    fs::read_to_string(path).wrap_err_with(|| format!("could not read {}", path.display()))
}

/// Writes to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str) -> color_eyre::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("could not create {}", parent.display()))?;
            }
            fs::write(path, contents)
                .wrap_err_with(|| format!("could not write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

pub fn load_quiz(path: &Path, locale: &str) -> color_eyre::Result<QuizSet> {
    let text = read_input(path)?;
    parse_source(&text, locale).wrap_err_with(|| format!("could not load {}", path.display()))
}

/// Accepts either a finalized quiz or a list of drafts. Drafts go through the
/// editor, so every rejected one is reported, not just the first.
pub fn parse_source(text: &str, locale: &str) -> color_eyre::Result<QuizSet> {
    let source: QuizSource =
        serde_json::from_str(text).wrap_err("not a quiz or a list of question drafts")?;

    match source {
        QuizSource::Quiz(quiz) => Ok(quiz),
        QuizSource::Drafts(drafts) => build(drafts, locale),
    }
}

fn build(source: DraftSource, locale: &str) -> color_eyre::Result<QuizSet> {
    let mut editor = Editor::new(&source.title).map_err(|e| eyre!(e.message(locale)))?;

    let mut rejected = Vec::new();
    for (position, draft) in source.questions.into_iter().enumerate() {
        if let Err(e) = editor.add_question(draft) {
            let number = position + 1;
            let reason = e.message(locale);
            tracing::warn!("draft {number} rejected: {e}");
            rejected.push(
                t!("cli.draft_rejected", number = number, reason = reason, locale = locale)
                    .to_string(),
            );
        }
    }

    if !rejected.is_empty() {
        return Err(eyre!(rejected.join("\n")));
    }
    Ok(editor.into_quiz())
}
