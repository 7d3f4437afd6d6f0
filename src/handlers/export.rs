use std::path::PathBuf;

use clap::{Args, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use rust_i18n::t;

use super::load_quiz;
use crate::{
    errors::ExportError,
    export::{self, DirectorySink, Selection, WriterSink},
    names::DEFAULT_LOCALE,
    utils,
};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Quiz source file, or `-` for stdin
    pub source: PathBuf,

    /// Directory the bundles are written to
    #[arg(short, long, env = "QUIZKIT_OUT_DIR", default_value = "quiz-export")]
    pub out_dir: PathBuf,

    /// Print the bundles to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Which bundles to produce. With --stdout this defaults to the single
    /// file, and several files are each preceded by a `==> name <==` line.
    #[arg(long, value_enum)]
    pub only: Option<BundleChoice>,

    /// Skip the setup guide
    #[arg(long)]
    pub no_guide: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BundleChoice {
    All,
    Split,
    SingleFile,
}

impl From<BundleChoice> for Selection {
    fn from(choice: BundleChoice) -> Self {
        match choice {
            BundleChoice::All => Selection::All,
            BundleChoice::Split => Selection::Split,
            BundleChoice::SingleFile => Selection::SingleFile,
        }
    }
}

pub fn run(args: ExportArgs) -> color_eyre::Result<()> {
    let locale = DEFAULT_LOCALE;
    let quiz = load_quiz(&args.source, locale)?;

    let bundles = match export::export(&quiz, locale) {
        Ok(bundles) => bundles,
        Err(ExportError::Structural(e)) => return Err(eyre!(e.message(locale))),
        Err(e) => return Err(e).wrap_err("export failed"),
    };

    if args.stdout {
        let selection = args.only.map_or(Selection::SingleFile, Selection::from);
        let stdout = std::io::stdout().lock();
        let mut sink = if selection.is_single() {
            WriterSink::new(stdout)
        } else {
            WriterSink::labelled(stdout)
        };
        export::deliver(&bundles, selection, None, &mut sink)
            .wrap_err("could not write to stdout")?;
        return Ok(());
    }

    let guide = if args.no_guide {
        None
    } else {
        let generated_at = utils::guide_timestamp(&chrono::Local::now());
        Some(export::setup_guide(&quiz, &generated_at, locale)?)
    };

    let selection = args.only.map_or(Selection::All, Selection::from);
    let mut sink = DirectorySink::new(&args.out_dir);
    let written = export::deliver(&bundles, selection, guide.as_deref(), &mut sink)
        .wrap_err_with(|| format!("could not write to {}", args.out_dir.display()))?;

    for name in written {
        let path = sink.path().join(name);
        let path = path.display();
        eprintln!("{}", t!("cli.exported", path = path, locale = locale));
    }
    Ok(())
}
