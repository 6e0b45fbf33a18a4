//! Turns raw JSON input into typed engine input: validate, sanitize, then convert.

use crate::error::FeedbackError;
use crate::types::{Criteria, StudentRecord};
use crate::validation::{Validation, sanitize, validate_criteria, validate_student};
use common::validation_messages;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// Validates both inputs, reporting student violations before criteria violations, then returns
/// sanitized typed copies.
///
/// The typed records are checked once more after sanitizing, because stripping `<` and `>` can
/// empty a field that passed the raw checks (a name of `"<>"`, for example).
pub fn prepare(
    student: &Value,
    criteria: Option<&Value>,
) -> Result<(StudentRecord, Criteria), FeedbackError> {
    let mut validation = validate_student(student);
    validation
        .errors
        .extend(validate_criteria(criteria).errors);
    validation.into_result()?;

    let record: StudentRecord = convert(sanitize(student))?;
    let criteria: Criteria = match criteria {
        Some(raw) => convert(sanitize(raw))?,
        None => Criteria::default(),
    };

    let mut typed = Validation::default();
    if let Err(e) = record.validate() {
        typed.errors.extend(validation_messages(&e));
    }
    if let Err(e) = criteria.validate() {
        typed.errors.extend(validation_messages(&e));
    }
    typed.into_result()?;

    Ok((record, criteria))
}

fn convert<T: DeserializeOwned>(value: Value) -> Result<T, FeedbackError> {
    serde_json::from_value(value).map_err(|e| FeedbackError::Conversion(e.to_string()))
}
