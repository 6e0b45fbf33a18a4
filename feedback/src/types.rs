//! # Types Module
//!
//! Typed inputs and output of the feedback engine. All types use camelCase field names on the
//! wire so they line up with the JSON clients send.
//!
//! The input types are lenient in the same places the validator is: numbers may arrive as numeric
//! text, optional arrays may be `null`, and list entries that are not strings are rendered as text.

use crate::level::PerformanceLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use validator::Validate;

/// Performance data for a single student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(deserialize_with = "de::number")]
    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "Performance must be a number between 0 and 100"
    ))]
    pub performance: f64,

    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,

    #[serde(default, deserialize_with = "de::labels")]
    pub weak_areas: Vec<String>,

    #[serde(default, deserialize_with = "de::labels")]
    pub strengths: Vec<String>,

    /// Blank values are treated as absent.
    #[serde(
        default,
        deserialize_with = "de::optional_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub learning_style: Option<String>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, performance: f64, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            performance,
            subject: subject.into(),
            weak_areas: Vec::new(),
            strengths: Vec::new(),
            learning_style: None,
        }
    }

    pub fn with_weak_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weak_areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strengths<I, S>(mut self, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strengths = strengths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_learning_style(mut self, style: impl Into<String>) -> Self {
        self.learning_style = Some(style.into());
        self
    }
}

/// Assessment criteria supplied alongside a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Rubric>,

    #[serde(
        default,
        deserialize_with = "de::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(range(min = 0.0, max = 1.0, message = "Weight must be a number between 0 and 1"))]
    pub weight: Option<f64>,
}

/// Named score thresholds such as `excellence`, `good` and `improvement`.
///
/// Accepted and carried through, but classification always uses the fixed thresholds in
/// [`crate::level`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rubric(BTreeMap<String, Value>);

impl<K: Into<String>> FromIterator<(K, f64)> for Rubric {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Rubric(
            iter.into_iter()
                .map(|(name, cutoff)| (name.into(), Value::from(cutoff)))
                .collect(),
        )
    }
}

/// The derived feedback bundle for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub student_name: String,
    pub subject: String,
    pub performance_level: PerformanceLevel,
    pub feedback: String,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Renders a list entry as text: strings verbatim, `null` as empty, anything else as JSON.
pub(crate) fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

mod de {
    use super::label_text;
    use crate::validation::coerce_number;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        coerce_number(&value)
            .ok_or_else(|| D::Error::custom(format!("expected a number, found {value}")))
    }

    pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => coerce_number(&value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a number, found {value}"))),
        }
    }

    pub fn labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Option::<Vec<Value>>::deserialize(deserializer)?;
        Ok(values.unwrap_or_default().iter().map(label_text).collect())
    }

    pub fn optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<Value>::deserialize(deserializer)?
            .map(|value| label_text(&value))
            .filter(|text| !text.trim().is_empty());
        Ok(label)
    }
}
