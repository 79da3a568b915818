use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// One entry of a bulk answer submission.
///
/// Clients send either `{"question_id": 12, "answer_id": 4}` or the short
/// form `{"12": 4}` keyed by question id. Ids and values may also be sent
/// as numeric strings (`{"12": "4"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerEntry {
    Explicit {
        #[serde(deserialize_with = "lenient_int")]
        #[ts(type = "number | string")]
        question_id: i64,
        #[serde(deserialize_with = "lenient_int")]
        #[ts(type = "number | string")]
        answer_id: i64,
    },
    Keyed(
        #[serde(deserialize_with = "lenient_int_map")]
        #[ts(type = "Record<string, number | string>")]
        BTreeMap<String, i64>,
    ),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    fn into_int<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(value) => Ok(value),
            IntOrString::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("'{}' is not a valid integer", text))),
        }
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_int()
}

fn lenient_int_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, i64>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, IntOrString>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, value)| value.into_int().map(|value| (key, value)))
        .collect()
}

impl AnswerEntry {
    /// Returns the `(question_id, response)` pair carried by this entry.
    pub fn resolve(&self) -> Result<(i64, i64), String> {
        match self {
            AnswerEntry::Explicit {
                question_id,
                answer_id,
            } => Ok((*question_id, *answer_id)),
            AnswerEntry::Keyed(map) => {
                if map.len() != 1 {
                    return Err(format!(
                        "Expected exactly one question per entry, got {}",
                        map.len()
                    ));
                }
                let (key, value) = map
                    .iter()
                    .next()
                    .ok_or_else(|| "Empty answer entry".to_string())?;
                let question_id = key
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| format!("Invalid question id '{}'", key))?;
                Ok((question_id, *value))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitAnswersResponse {
    pub status: String,
}
