use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::WrapErr;

use super::source::{read_input, write_output};
use crate::export::embedded_quiz;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// An exported quiz.html or quiz-allinone.html, or `-` for stdin
    pub bundle: PathBuf,

    /// Where to write the recovered quiz; stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExtractArgs) -> color_eyre::Result<()> {
    let bundle = read_input(&args.bundle)?;
    let quiz = embedded_quiz(&bundle)
        .wrap_err_with(|| format!("could not recover a quiz from {}", args.bundle.display()))?;

    tracing::info!(
        "recovered {:?} with {} questions",
        quiz.meta.title,
        quiz.questions.len()
    );

    let json = serde_json::to_string_pretty(&quiz)?;
    write_output(args.out.as_deref(), &json)
}
