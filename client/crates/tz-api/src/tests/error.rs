use crate::ApiError;

use tz_core::FieldErrors;

fn field_map() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(
        "email".to_string(),
        vec!["Invalid email address".to_string()],
    );
    errors
}

#[test]
fn test_fixed_messages() {
    assert_eq!(
        ApiError::Network.to_string(),
        "Network error. Please check your connection."
    );
    assert_eq!(
        ApiError::Unauthorized.to_string(),
        "Session expired. Please login again."
    );
    assert_eq!(
        ApiError::Forbidden.to_string(),
        "You do not have permission to perform this action."
    );
    assert_eq!(ApiError::NotFound.to_string(), "Resource not found.");
    assert_eq!(
        ApiError::Server.to_string(),
        "Server error. Please try again later."
    );
}

#[test]
fn test_validation_displays_server_message() {
    let error = ApiError::Validation {
        message: "The given data was invalid.".to_string(),
        errors: field_map(),
    };
    assert_eq!(error.to_string(), "The given data was invalid.");
    assert!(error.is_validation());
    assert_eq!(error.status(), Some(422));
    assert_eq!(
        error.field_errors().unwrap()["email"],
        vec!["Invalid email address"]
    );
}

#[test]
fn test_statuses() {
    assert_eq!(ApiError::Network.status(), None);
    assert_eq!(ApiError::Decode.status(), None);
    assert_eq!(ApiError::Unauthorized.status(), Some(401));
    assert_eq!(ApiError::Forbidden.status(), Some(403));
    assert_eq!(ApiError::NotFound.status(), Some(404));
    assert_eq!(ApiError::Server.status(), Some(500));
    assert_eq!(
        ApiError::Unexpected {
            status: 418,
            message: "teapot".to_string(),
            errors: None
        }
        .status(),
        Some(418)
    );
}

#[test]
fn test_unexpected_carries_optional_field_map() {
    let error = ApiError::Unexpected {
        status: 409,
        message: "Conflict".to_string(),
        errors: Some(field_map()),
    };
    assert!(!error.is_validation());
    assert!(error.field_errors().is_some());
}
