use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use maud::{html, Markup, PreEscaped};

use crate::{
    editor::validate_quiz,
    engine::{render, AttemptState},
    errors::ExportError,
    models::QuizSet,
    names, statics, utils,
    views::{self, display_title},
};

pub mod embed;
pub mod runtime;

pub use embed::{embedded_quiz, script_literal};
pub use runtime::RuntimeConfig;

/// The three exported documents. Identical input gives identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundles {
    /// Markup fragment meant to sit next to `stylesheet`.
    pub split_markup: String,
    pub stylesheet: String,
    /// Complete document with the stylesheet inlined.
    pub single_file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Split,
    SingleFile,
}

impl Selection {
    /// Whether the selection is exactly one file.
    pub fn is_single(self) -> bool {
        matches!(self, Selection::SingleFile)
    }
}

impl Bundles {
    /// `(file name, contents)` for every file in `selection`.
    pub fn files(&self, selection: Selection) -> Vec<(&'static str, &str)> {
        let single = (names::SINGLE_FILE_BUNDLE_FILE, self.single_file.as_str());
        let split = [
            (names::SPLIT_BUNDLE_FILE, self.split_markup.as_str()),
            (names::STYLESHEET_FILE, self.stylesheet.as_str()),
        ];

        match selection {
            Selection::All => [single].into_iter().chain(split).collect(),
            Selection::Split => split.to_vec(),
            Selection::SingleFile => vec![single],
        }
    }
}

/// Builds every bundle for `quiz`. Nothing is produced if any question is
/// structurally broken.
pub fn export(quiz: &QuizSet, locale: &str) -> Result<Bundles, ExportError> {
    if let Err(err) = validate_quiz(quiz) {
        tracing::warn!("refusing to export {:?}: {err}", quiz.meta.title);
        return Err(err.into());
    }

    let script = runtime::script(quiz, locale)?;
    let stylesheet = statics::asset(names::STYLESHEET_ASSET)?;
    let body = app_with_script(quiz, &script, locale);

    let bundles = Bundles {
        split_markup: body.clone().into_string(),
        stylesheet: stylesheet.to_string(),
        single_file: views::document(&quiz.meta.title, stylesheet, body, locale).into_string(),
    };

    tracing::info!(
        "exported {:?} ({} questions, {} bytes single-file)",
        quiz.meta.title,
        quiz.questions.len(),
        bundles.single_file.len()
    );
    Ok(bundles)
}

// First question pre-rendered into the mount point, followed by the runtime.
fn app_with_script(quiz: &QuizSet, script: &str, locale: &str) -> Markup {
    let initial = AttemptState::default();
    let view = render(quiz, &initial);

    html! {
        (views::quiz::mount_point(&view, locale))
        script { (PreEscaped(script)) }
    }
}

/// Plain-text instructions shipped next to the bundles.
pub fn setup_guide(quiz: &QuizSet, generated_at: &str, locale: &str) -> Result<String, ExportError> {
    let template = statics::asset(names::SETUP_GUIDE_ASSET)?;

    Ok(template
        .replace("{{title}}", &display_title(&quiz.meta.title, locale))
        .replace("{{generated_at}}", generated_at)
        .replace("{{version}}", utils::VERSION))
}

/// Destination for exported files.
#[cfg_attr(test, mockall::automock)]
pub trait BundleSink {
    fn deliver(&mut self, name: &str, contents: &str) -> io::Result<()>;
}

/// Writes each file into a directory, creating it if needed.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl BundleSink for DirectorySink {
    fn deliver(&mut self, name: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, contents)?;
        tracing::debug!("wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

/// Streams file contents one after another, e.g. to stdout.
pub struct WriterSink<W> {
    out: W,
    labelled: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        WriterSink {
            out,
            labelled: false,
        }
    }

    /// Precedes each file with a `==> name <==` line.
    pub fn labelled(out: W) -> Self {
        WriterSink {
            out,
            labelled: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BundleSink for WriterSink<W> {
    fn deliver(&mut self, name: &str, contents: &str) -> io::Result<()> {
        if self.labelled {
            writeln!(self.out, "==> {name} <==")?;
        }
        self.out.write_all(contents.as_bytes())?;
        if !contents.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }
}

/// Hands the selected bundles, then the guide if any, to `sink`. Stops at the
/// first failed delivery. Returns the names delivered.
pub fn deliver<S: BundleSink + ?Sized>(
    bundles: &Bundles,
    selection: Selection,
    guide: Option<&str>,
    sink: &mut S,
) -> io::Result<Vec<&'static str>> {
    let mut files = bundles.files(selection);
    if let Some(guide) = guide {
        files.push((names::SETUP_GUIDE_FILE, guide));
    }

    let mut delivered = Vec::with_capacity(files.len());
    for (name, contents) in files {
        sink.deliver(name, contents)?;
        delivered.push(name);
    }
    Ok(delivered)
}
