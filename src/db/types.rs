use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

/// A submitted or expected answer. Multi-select questions carry a list of
/// strings which is compared as a set; everything else is a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum AnswerValue {
    One(String),
    Many(Vec<String>),
}
