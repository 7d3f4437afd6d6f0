use serde::Serialize;

use crate::{errors::ExportError, models::QuizSet, names};

const SCRIPT_OPEN: &str = "<script>";

/// JSON for `value` that can sit inside an inline `<script>` block.
///
/// The escaped characters can only occur inside JSON strings, so the result
/// still parses to the same value.
pub fn script_literal<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(escape_for_script(&json))
}

fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Recovers the quiz embedded in an exported bundle.
///
/// Authored text before the script is markup-escaped, so the first `<script>`
/// tag is the bundle's own and the data literal is searched for after it.
pub fn embedded_quiz(bundle: &str) -> Result<QuizSet, ExportError> {
    let script = bundle
        .find(SCRIPT_OPEN)
        .map(|at| &bundle[at + SCRIPT_OPEN.len()..])
        .ok_or(ExportError::NoEmbeddedQuiz)?;
    let start = script
        .find(names::DATA_LITERAL_PREFIX)
        .ok_or(ExportError::NoEmbeddedQuiz)?
        + names::DATA_LITERAL_PREFIX.len();

    serde_json::Deserializer::from_str(&script[start..])
        .into_iter::<QuizSet>()
        .next()
        .ok_or(ExportError::NoEmbeddedQuiz)?
        .map_err(ExportError::from)
}
