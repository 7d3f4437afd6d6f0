use clap::Subcommand;

pub mod check;
pub mod export;
pub mod extract;
pub mod play;
pub mod preview;
pub mod source;

pub use source::{load_quiz, parse_source};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a quiz source without writing anything
    Check(check::CheckArgs),

    /// Write the quiz bundles and the setup guide
    Export(export::ExportArgs),

    /// Render one question as a static snapshot
    Preview(preview::PreviewArgs),

    /// Take the quiz in the terminal
    Play(play::PlayArgs),

    /// Recover the quiz from an exported bundle
    Extract(extract::ExtractArgs),
}

impl Command {
    pub fn run(self) -> color_eyre::Result<()> {
        match self {
            Command::Check(args) => check::run(args),
            Command::Export(args) => export::run(args),
            Command::Preview(args) => preview::run(args),
            Command::Play(args) => play::run(args),
            Command::Extract(args) => extract::run(args),
        }
    }
}
