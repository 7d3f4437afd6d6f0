use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Args;
use color_eyre::eyre::{eyre, WrapErr};
use rust_i18n::t;

use super::load_quiz;
use crate::{
    engine::{Attempt, Phase, Response, Summary},
    errors::AnswerRejected,
    models::{QuestionKind, QuizSet},
    names::DEFAULT_LOCALE,
    views::console,
};

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Quiz source file
    pub source: PathBuf,
}

pub fn run(args: PlayArgs) -> color_eyre::Result<()> {
    let locale = DEFAULT_LOCALE;
    let quiz = load_quiz(&args.source, locale)?;

    let stdin = io::stdin();
    let summary = session(&quiz, &mut stdin.lock(), &mut io::stdout().lock(), locale)?;
    tracing::info!(
        "session over: {}/{} ({}%)",
        summary.score,
        summary.total,
        summary.percentage
    );
    Ok(())
}

/// Runs attempts until the respondent declines another one. Returns the
/// summary of the last attempt.
pub fn session(
    quiz: &QuizSet,
    input: &mut impl BufRead,
    out: &mut impl Write,
    locale: &str,
) -> color_eyre::Result<Summary> {
    let mut attempt = Attempt::start(quiz).map_err(|e| eyre!(e.message(locale)))?;

    loop {
        match attempt.phase() {
            Phase::Presenting(index) => {
                write!(out, "{}", console::render(&attempt.view(), locale))?;
                ask(&mut attempt, index, input, out, locale)?;

                writeln!(out)?;
                write!(out, "{}", console::render(&attempt.view(), locale))?;
                writeln!(out, "{}", t!("cli.press_enter", locale = locale))?;
                out.flush()?;
                read_line(input)?;

                attempt.advance()?;
            }
            Phase::Finished => {
                write!(out, "{}", console::render(&attempt.view(), locale))?;
                let summary = attempt
                    .summary()
                    .ok_or_else(|| eyre!("finished attempt has no summary"))?;

                write!(out, "{}", t!("cli.play_again", locale = locale))?;
                out.flush()?;
                let again = read_line(input)?
                    .is_some_and(|line| line.trim().eq_ignore_ascii_case("y"));
                if !again {
                    return Ok(summary);
                }
                attempt.restart()?;
            }
        }
    }
}

// Prompts until the engine accepts an answer for `index`.
fn ask(
    attempt: &mut Attempt<'_>,
    index: usize,
    input: &mut impl BufRead,
    out: &mut impl Write,
    locale: &str,
) -> color_eyre::Result<()> {
    let question = &attempt.quiz().questions[index];

    loop {
        let len = question.choices.len();
        match question.kind {
            QuestionKind::Choice => write!(out, "{}", t!("cli.choose", len = len, locale = locale))?,
            QuestionKind::Text => write!(out, "{}", t!("cli.answer", locale = locale))?,
        }
        out.flush()?;

        let line = read_line(input)?
            .ok_or_else(|| eyre!("input ended before the quiz was finished"))?;

        let response = match question.kind {
            QuestionKind::Choice => match line.trim().parse::<usize>() {
                Ok(number) if number >= 1 => Response::Choice(number - 1),
                _ => {
                    let rejected = AnswerRejected::NoSuchChoice { index: 0, len };
                    writeln!(out, "{}", rejected.message(locale))?;
                    continue;
                }
            },
            QuestionKind::Text => Response::Text(line),
        };

        match attempt.answer(index, response) {
            Ok(_) => return Ok(()),
            Err(rejected @ (AnswerRejected::BlankText | AnswerRejected::NoSuchChoice { .. })) => {
                writeln!(out, "{}", rejected.message(locale))?;
            }
            Err(other) => return Err(other).wrap_err("answer was not accepted"),
        }
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{engine::Tier, handlers::parse_source};

    fn quiz() -> QuizSet {
        parse_source(
            r#"{"title":"Mixed","questions":[
                {"prompt":"2+2?","choices":["3","4","5"],"answer":"1"},
                {"type":"text","prompt":"Capital of France?","answer":"Paris"}
            ]}"#,
            DEFAULT_LOCALE,
        )
        .unwrap()
    }

    fn play(input: &str) -> (color_eyre::Result<Summary>, String) {
        let quiz = quiz();
        let mut out = Vec::new();
        let result = session(&quiz, &mut Cursor::new(input), &mut out, DEFAULT_LOCALE);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn perfect_run() {
        let (summary, out) = play("2\n\n PARIS \n\nn\n");
        let summary = summary.unwrap();

        assert_eq!(summary.score, 2);
        assert_eq!(summary.tier, Tier::Perfect);
        assert!(out.contains("2 / 2 (100%)"));
    }

    #[test]
    fn invalid_input_is_asked_again() {
        let (summary, out) = play("0\nnine\n1\n\n\n  \nLyon\n\n");
        let summary = summary.unwrap();

        assert_eq!(summary.score, 0);
        assert_eq!(summary.tier, Tier::Retry);
        assert!(out.contains("1〜3の番号を選んでください"));
        assert!(out.contains("答えを入力してください"));
    }

    #[test]
    fn restart_starts_a_fresh_attempt() {
        let (summary, _) = play("1\n\nLyon\n\ny\n2\n\nparis\n\n");
        assert_eq!(summary.unwrap().percentage, 100);
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let (result, _) = play("2\n");
        assert!(result.is_err());
    }
}
