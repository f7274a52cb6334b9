use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Answers keyed by question id, e.g. `{"bodyType": "vata", "skin": "pitta"}`.
///
/// Values are kept verbatim. Anything that is not a recognized dosha name is
/// simply not counted when classifying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, String>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a submission payload into a response set.
    ///
    /// Accepts either `{"responses": {...}}` or the bare answer map. Entries
    /// whose value is not a string are dropped.
    pub fn from_payload(payload: Value) -> Result<Self> {
        let mut body = match payload {
            Value::Object(map) => map,
            other => bail!("Expected an object of answers, got {}", value_kind(&other)),
        };

        let answers = match body.remove("responses") {
            Some(Value::Object(inner)) => inner,
            None | Some(Value::Null) => body,
            Some(other) => bail!(
                "Expected 'responses' to be an object of answers, got {}",
                value_kind(&other)
            ),
        };

        Ok(answers
            .into_iter()
            .filter_map(|(id, value)| match value {
                Value::String(s) => Some((id, s)),
                _ => None,
            })
            .collect())
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(question_id.into(), answer.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Text format of a submission payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Yaml,
}

impl PayloadFormat {
    /// Pick the format from a file extension; anything other than .yaml/.yml is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                PayloadFormat::Yaml
            }
            _ => PayloadFormat::Json,
        }
    }
}

/// Parse payload text into a generic value ready for [`ResponseSet::from_payload`].
pub fn parse_payload(text: &str, format: PayloadFormat) -> Result<Value> {
    match format {
        PayloadFormat::Json => serde_json::from_str(text).context("Failed to parse payload: invalid JSON"),
        PayloadFormat::Yaml => serde_saphyr::from_str(text).context("Failed to parse payload: invalid YAML"),
    }
}
