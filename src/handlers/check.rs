use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::eyre;
use rust_i18n::t;

use super::load_quiz;
use crate::{editor::validate_quiz, names::DEFAULT_LOCALE};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Quiz source file, or `-` for stdin
    pub source: PathBuf,
}

pub fn run(args: CheckArgs) -> color_eyre::Result<()> {
    let locale = DEFAULT_LOCALE;
    let quiz = load_quiz(&args.source, locale)?;

    validate_quiz(&quiz).map_err(|e| eyre!(e.message(locale)))?;

    let title = &quiz.meta.title;
    let count = quiz.questions.len();
    println!(
        "{}",
        t!("cli.checked", title = title, count = count, locale = locale)
    );
    Ok(())
}
