pub mod config;
pub mod logger;

use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Flattens `validator` errors into their messages, ordered by field name.
///
/// Errors without a custom message fall back to `"<field> is invalid"`.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect()
}
