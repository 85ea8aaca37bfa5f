//! Form validation helpers

use shared::error::AppError;
use validator::{Validate, ValidationErrors};

/// Convert `validator` errors into a validation [`AppError`]
///
/// The message is the first failing field in name order; every failing
/// field is listed under the `fields` detail.
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
    fields.sort_unstable();

    let message = fields
        .first()
        .and_then(|field| field_errors.get(*field))
        .and_then(|errs| errs.first())
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .unwrap_or_else(|| "Validation failed".to_string());

    let mut err = AppError::validation(message);
    if let Some(field) = fields.first() {
        err = err.with_detail("field", *field);
    }
    err.with_detail("fields", fields)
}

/// Validate a form, mapping failures to [`AppError`]
pub fn validate_form<T: Validate>(form: &T) -> Result<(), AppError> {
    form.validate().map_err(into_app_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use shared::error::ErrorCode;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 3, message = "Name is too short"))]
        name: String,
        #[validate(range(min = 1))]
        count: u32,
    }

    #[test]
    fn test_valid_form() {
        let form = Form {
            name: "Maggi".into(),
            count: 1,
        };
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn test_first_field_wins() {
        let form = Form {
            name: "x".into(),
            count: 0,
        };
        let err = validate_form(&form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        // "count" sorts before "name" and has no custom message
        assert_eq!(err.message, "range");
        assert_eq!(err.detail("field"), Some(&Value::from("count")));
        assert_eq!(
            err.detail("fields"),
            Some(&Value::from(vec!["count", "name"]))
        );
    }
}
