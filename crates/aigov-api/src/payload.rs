//! # Request Payload Handling
//!
//! JSON body extraction plus the intake-specific payload rules. The
//! evaluator treats field keys opaquely, so the editing surface is the
//! one place where key hygiene is enforced: blank keys are rejected
//! before they can enter a stored record.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use aigov_core::IntakeFields;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization failures to
/// [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Reject intake payloads containing blank field keys.
///
/// A blank key can never satisfy a tier requirement and would sit
/// invisibly in the stored record, so writes refuse it up front.
pub fn check_field_keys(fields: &IntakeFields) -> Result<(), AppError> {
    match fields.iter().find(|(key, _)| key.trim().is_empty()) {
        Some((_, value)) => Err(AppError::Validation(format!(
            "blank field key (value kind: {})",
            value.kind()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(json: &str) -> IntakeFields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_blank_keys_rejected() {
        for payload in [r#"{"": "x"}"#, r#"{"   ": "x"}"#, r#"{"\t": null}"#] {
            assert!(
                matches!(
                    check_field_keys(&fields(payload)),
                    Err(AppError::Validation(_))
                ),
                "{payload} should be rejected"
            );
        }
    }

    #[test]
    fn test_normal_keys_accepted() {
        assert!(check_field_keys(&fields(r#"{"system_name": "Foo"}"#)).is_ok());
    }

    #[test]
    fn test_empty_payload_accepted() {
        assert!(check_field_keys(&IntakeFields::new()).is_ok());
    }
}
