//! Checkout form

use crate::auth::Session;
use crate::store::Repository;
use crate::utils::validate_form;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::{PaymentMethod, Profile};
use validator::Validate;

/// Delivery and payment details entered at checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,
    #[validate(length(min = 2, message = "Hostel name is required"))]
    pub hostel_name: String,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub room_number: String,
    pub instructions: Option<String>,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Copy with surrounding whitespace removed from every text field
    ///
    /// Blank instructions become `None`. This is the form that gets
    /// validated and saved.
    pub fn normalized(&self) -> Self {
        Self {
            phone: self.phone.trim().to_string(),
            hostel_name: self.hostel_name.trim().to_string(),
            room_number: self.room_number.trim().to_string(),
            instructions: self.special_instructions(),
            payment_method: self.payment_method,
        }
    }

    /// Validate the trimmed values
    pub fn validate_fields(&self) -> AppResult<()> {
        validate_form(&self.normalized())
    }

    /// Instructions with surrounding whitespace removed; blank becomes `None`
    pub fn special_instructions(&self) -> Option<String> {
        self.instructions
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Phone number saved on the user's profile, used to prefill the form
pub async fn prefill_phone(repo: &Repository, session: &Session) -> AppResult<Option<String>> {
    let query = crate::store::Query::by_id(session.user_id);
    let profile = repo.find::<Profile>(&query).await?;
    Ok(profile.and_then(|p| p.phone).filter(|p| !p.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use shared::error::ErrorCode;

    fn valid() -> CheckoutForm {
        CheckoutForm {
            phone: "9876543210".into(),
            hostel_name: "Aravali".into(),
            room_number: "B-214".into(),
            instructions: None,
            payment_method: PaymentMethod::Cod,
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate_fields().is_ok());
    }

    #[test]
    fn test_short_phone() {
        let form = CheckoutForm {
            phone: "98765".into(),
            ..valid()
        };
        let err = form.validate_fields().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Phone number must be at least 10 digits");
        assert_eq!(err.detail("field"), Some(&Value::from("phone")));
    }

    #[test]
    fn test_missing_hostel_and_room() {
        let form = CheckoutForm {
            hostel_name: "A".into(),
            room_number: String::new(),
            ..valid()
        };
        let err = form.validate_fields().unwrap_err();
        assert_eq!(err.message, "Hostel name is required");
        assert_eq!(
            err.detail("fields"),
            Some(&Value::from(vec!["hostel_name", "room_number"]))
        );
    }

    #[test]
    fn test_padding_does_not_count_towards_length() {
        let form = CheckoutForm {
            phone: "   98765    ".into(),
            hostel_name: "   ".into(),
            room_number: " ".into(),
            ..valid()
        };
        let err = form.validate_fields().unwrap_err();
        assert_eq!(err.message, "Hostel name is required");
        assert_eq!(
            err.detail("fields"),
            Some(&Value::from(vec!["hostel_name", "phone", "room_number"]))
        );

        let form = CheckoutForm {
            phone: " 9876543210 ".into(),
            room_number: " B-214\n".into(),
            ..valid()
        };
        assert!(form.validate_fields().is_ok());
        let normalized = form.normalized();
        assert_eq!(normalized.phone, "9876543210");
        assert_eq!(normalized.room_number, "B-214");
    }

    #[test]
    fn test_blank_instructions() {
        let form = CheckoutForm {
            instructions: Some("   ".into()),
            ..valid()
        };
        assert_eq!(form.special_instructions(), None);

        let form = CheckoutForm {
            instructions: Some(" extra spicy ".into()),
            ..valid()
        };
        assert_eq!(form.special_instructions().as_deref(), Some("extra spicy"));
    }
}
