//! Form-level validation shared by every request model.

use validator::Validate;

use feedesk_core::error::AppError;

/// Message shown when a request fails its form rules.
pub const INVALID_FORM_MESSAGE: &str = "Please fill all required fields correctly";

/// Run the `validator` rules of a request, mapping failures to a
/// [`Validation`](feedesk_core::ErrorKind::Validation) error that names
/// the offending fields.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        AppError::validation(format!("{INVALID_FORM_MESSAGE}: {}", fields.join(", ")))
    })
}
