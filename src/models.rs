use serde::{de, Deserialize, Deserializer, Serialize};

pub type Questions = Vec<Question>;

/// The authored quiz in the shape exported bundles embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSet {
    pub meta: QuizMeta,
    #[serde(default)]
    pub questions: Questions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizMeta {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Choice,
    Text,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Choice => "choice",
            QuestionKind::Text => "text",
        }
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "choice" => Ok(QuestionKind::Choice),
            "text" => Ok(QuestionKind::Text),
            _ => Err(()),
        }
    }
}

/// Index into `choices` for choice questions, reference text for text ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Index(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    pub answer: AnswerKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Human readable form of the correct answer, used in feedback.
    pub fn correct_label(&self) -> Option<&str> {
        match (&self.kind, &self.answer) {
            (QuestionKind::Choice, AnswerKey::Index(idx)) => {
                self.choices.get(*idx).map(String::as_str)
            }
            (QuestionKind::Text, AnswerKey::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A question as typed into the authoring form: every field is plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Input accepted by the command line: either form drafts or an already
/// finalized quiz (for example one recovered from a bundle).
///
/// A `meta` key selects a finalized quiz and a `title` key selects drafts,
/// so a bad field is reported against the shape it belongs to.
#[derive(Debug)]
pub enum QuizSource {
    Quiz(QuizSet),
    Drafts(DraftSource),
}

impl<'de> Deserialize<'de> for QuizSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;

        if value.get("meta").is_some() {
            QuizSet::deserialize(value)
                .map(QuizSource::Quiz)
                .map_err(de::Error::custom)
        } else if value.get("title").is_some() {
            DraftSource::deserialize(value)
                .map(QuizSource::Drafts)
                .map_err(de::Error::custom)
        } else {
            Err(de::Error::custom(
                "expected a quiz with a `meta` key or drafts with a `title` key",
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DraftSource {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}
