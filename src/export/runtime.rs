use rust_i18n::t;
use serde::Serialize;

use super::embed::script_literal;
use crate::{
    engine::Tier,
    errors::ExportError,
    models::QuizSet,
    names, statics,
};

/// Settings handed to the bundled runtime next to the quiz data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub mount_id: &'static str,
    pub body_id: &'static str,
    /// Highest tier first.
    pub tiers: Vec<TierConfig>,
    pub copy: RuntimeCopy,
}

#[derive(Debug, Serialize)]
pub struct TierConfig {
    pub tier: Tier,
    pub min: u32,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeCopy {
    pub default_title: String,
    pub progress: String,
    pub text_placeholder: String,
    pub submit: String,
    pub enter_answer: String,
    pub correct: String,
    pub incorrect_before: String,
    pub incorrect_after: String,
    pub next: String,
    pub see_results: String,
    pub finished: String,
    pub restart: String,
    pub unsupported: String,
    pub no_data: String,
}

impl RuntimeConfig {
    pub fn new(locale: &str) -> Self {
        let tiers = Tier::ALL
            .iter()
            .map(|&tier| TierConfig {
                tier,
                min: tier.min_percentage(),
                message: tier.message(locale),
            })
            .collect();

        RuntimeConfig {
            mount_id: names::MOUNT_POINT_ID,
            body_id: names::QUIZ_BODY_ID,
            tiers,
            copy: RuntimeCopy {
                default_title: t!("quiz.default_title", locale = locale).to_string(),
                progress: t!("quiz.progress", locale = locale).to_string(),
                text_placeholder: t!("quiz.text_placeholder", locale = locale).to_string(),
                submit: t!("quiz.submit", locale = locale).to_string(),
                enter_answer: t!("quiz.enter_answer", locale = locale).to_string(),
                correct: t!("quiz.correct", locale = locale).to_string(),
                incorrect_before: t!("quiz.incorrect_before", locale = locale).to_string(),
                incorrect_after: t!("quiz.incorrect_after", locale = locale).to_string(),
                next: t!("quiz.next", locale = locale).to_string(),
                see_results: t!("quiz.see_results", locale = locale).to_string(),
                finished: t!("quiz.finished", locale = locale).to_string(),
                restart: t!("quiz.restart", locale = locale).to_string(),
                unsupported: t!("quiz.unsupported", locale = locale).to_string(),
                no_data: t!("quiz.no_data", locale = locale).to_string(),
            },
        }
    }
}

/// Body of the inline script: data literal, config literal, then the runtime.
pub fn script(quiz: &QuizSet, locale: &str) -> Result<String, ExportError> {
    let data = script_literal(quiz)?;
    let config = script_literal(&RuntimeConfig::new(locale))?;
    let runtime = statics::asset(names::RUNTIME_ASSET)?;

    Ok(format!(
        "\n{}{data};\n{}{config};\n{runtime}",
        names::DATA_LITERAL_PREFIX,
        names::CONFIG_LITERAL_PREFIX,
    ))
}
