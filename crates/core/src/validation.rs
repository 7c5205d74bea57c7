//! Shared request validation helpers.
//!
//! Request DTOs derive [`validator::Validate`]; [`validate_request`] runs
//! those rules and folds every failure into a single
//! [`CoreError::Validation`] whose message is stable across runs.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived `Validate` rules for `input`.
pub fn validate_request<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(validation_message(&errors)))
}

/// Flatten `ValidationErrors` into one human-readable message.
///
/// Fields are reported in alphabetical order. Rules without an explicit
/// message fall back to `"<field> is invalid"`.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter()
                .map(|e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    (field.clone(), msg)
                })
                .collect::<Vec<_>>()
        })
        .collect();

    fields.sort();
    fields
        .into_iter()
        .map(|(_, msg)| msg)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate that `value` is one of the `allowed` strings.
pub fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field}: '{value}'. Valid values: {}",
            allowed.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Validate)]
    struct Sample {
        #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
        year: i32,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn valid_input_passes() {
        let sample = Sample {
            year: 2,
            name: "Data Structures".into(),
        };
        assert!(validate_request(&sample).is_ok());
    }

    #[test]
    fn explicit_message_is_used() {
        let sample = Sample {
            year: 9,
            name: "x".into(),
        };
        let err = validate_request(&sample).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Year must be between 1 and 4");
    }

    #[test]
    fn missing_message_falls_back_and_fields_are_sorted() {
        let sample = Sample {
            year: 0,
            name: String::new(),
        };
        let err = validate_request(&sample).unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg) if msg == "name is invalid; Year must be between 1 and 4"
        );
    }

    #[test]
    fn one_of_accepts_known_value() {
        assert!(validate_one_of("status", "Pending", &["Pending", "Resolved"]).is_ok());
    }

    #[test]
    fn one_of_rejects_unknown_value() {
        let err = validate_one_of("status", "Open", &["Pending", "Resolved"]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Pending, Resolved"));
    }
}
