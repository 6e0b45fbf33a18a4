//! # Input Validation
//!
//! Shape and range checks on the raw JSON a caller hands in, plus the sanitize step that runs
//! between validation and typed conversion.
//!
//! Validation never short-circuits inside a record: every applicable rule runs so a client sees
//! all of its mistakes at once. The one exception is a criteria value that is not an object,
//! which stops the criteria checks immediately.
//!
//! A field is *present* when its key exists, its value is not `null`, and, for strings, the
//! string is not empty. Numeric zero is present.

use crate::error::FeedbackError;
use serde_json::{Map, Value};

pub const PERFORMANCE_RANGE_MESSAGE: &str = "Performance must be a number between 0 and 100";
pub const WEIGHT_RANGE_MESSAGE: &str = "Weight must be a number between 0 and 1";
pub const CRITERIA_OBJECT_MESSAGE: &str = "Criteria must be an object";

/// The verdict of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Converts the verdict into a `Result`, failing with every collected violation.
    pub fn into_result(self) -> Result<(), FeedbackError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FeedbackError::Validation(self.errors))
        }
    }
}

/// Validates a raw student record.
///
/// A value that is not a JSON object has no fields, so it yields the three required-field errors.
pub fn validate_student(record: &Value) -> Validation {
    let mut validation = Validation::default();

    for field in ["name", "performance", "subject"] {
        if !is_present(record.get(field)) {
            validation.push(format!("{field} is required"));
        }
    }

    if let Some(performance) = present(record, "performance") {
        if !in_range(performance, 0.0, 100.0) {
            validation.push(PERFORMANCE_RANGE_MESSAGE);
        }
    }

    if let Some(name) = present(record, "name") {
        if !name.is_string() {
            validation.push("Name must be a string");
        }
    }

    if let Some(subject) = present(record, "subject") {
        if !subject.is_string() {
            validation.push("Subject must be a string");
        }
    }

    if let Some(weak_areas) = present(record, "weakAreas") {
        if !weak_areas.is_array() {
            validation.push("Weak areas must be an array");
        }
    }

    if let Some(strengths) = present(record, "strengths") {
        if !strengths.is_array() {
            validation.push("Strengths must be an array");
        }
    }

    validation
}

/// Validates a raw criteria object. `None` means the caller supplied no criteria at all.
pub fn validate_criteria(criteria: Option<&Value>) -> Validation {
    let mut validation = Validation::default();

    let Some(Value::Object(criteria)) = criteria else {
        validation.push(CRITERIA_OBJECT_MESSAGE);
        return validation;
    };

    if let Some(rubric) = criteria.get("rubric").filter(|v| !v.is_null()) {
        if !rubric.is_object() {
            validation.push("Rubric must be an object");
        }
    }

    if let Some(weight) = criteria.get("weight").filter(|v| !v.is_null()) {
        if !in_range(weight, 0.0, 1.0) {
            validation.push(WEIGHT_RANGE_MESSAGE);
        }
    }

    validation
}

/// Returns a sanitized copy of `value`.
///
/// Every top-level string field of an object is trimmed and stripped of `<` and `>`. Other
/// fields, including strings nested in arrays, pass through unchanged. A bare string is
/// sanitized directly; any other non-object value is returned as-is.
pub fn sanitize(value: &Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| {
                    let clean = match field {
                        Value::String(text) => Value::String(sanitize_text(text)),
                        other => other.clone(),
                    };
                    (key.clone(), clean)
                })
                .collect::<Map<String, Value>>(),
        ),
        Value::String(text) => Value::String(sanitize_text(text)),
        other => other.clone(),
    }
}

/// Trims surrounding whitespace, then removes every `<` and `>`.
///
/// ```rust
/// use feedback::validation::sanitize_text;
///
/// assert_eq!(sanitize_text(" <b>Bob</b> "), "bBob/b");
/// ```
pub fn sanitize_text(text: &str) -> String {
    text.trim().chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Coerces a JSON number, or a string holding a number, into a finite `f64`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn in_range(value: &Value, min: f64, max: f64) -> bool {
    coerce_number(value).is_some_and(|n| (min..=max).contains(&n))
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

fn present<'a>(record: &'a Value, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|v| is_present(Some(v)))
}
