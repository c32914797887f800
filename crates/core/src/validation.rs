//! Input validation helpers shared by request DTOs.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] turns the
//! collected field errors into a single [`CoreError::Validation`].

use std::net::IpAddr;

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run `validator` rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|e| CoreError::Validation(flatten(&e)))
}

/// Render validation errors as `field: message; field: message`, sorted by field.
fn flatten(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{field}: {}", messages.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Require a non-blank string.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate a textual IPv4 or IPv6 address.
pub fn validate_ip_address(value: &str) -> Result<(), CoreError> {
    value
        .parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| CoreError::Validation(format!("Invalid IP address '{value}'")))
}

/// Validate that an optional date range is ordered.
pub fn validate_date_range<T: PartialOrd>(start: Option<&T>, end: Option<&T>) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation(
                "end_date must not be before start_date".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(max = 3))]
        code: String,
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
    }

    #[test]
    fn valid_input_passes() {
        let input = Sample {
            code: "a1".into(),
            name: "Form".into(),
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn errors_are_flattened_and_sorted() {
        let input = Sample {
            code: "toolong".into(),
            name: String::new(),
        };
        assert_matches!(
            validate_input(&input),
            Err(CoreError::Validation(msg)) if msg == "code: length; name: name is required"
        );
    }

    #[test]
    fn ip_addresses() {
        assert!(validate_ip_address("192.168.0.1").is_ok());
        assert!(validate_ip_address("::1").is_ok());
        assert!(validate_ip_address("localhost").is_err());
    }

    #[test]
    fn date_range_order() {
        assert!(validate_date_range(Some(&1), Some(&2)).is_ok());
        assert!(validate_date_range(Some(&2), None).is_ok());
        assert!(validate_date_range(Some(&3), Some(&2)).is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(require_non_blank("name", "  ").is_err());
        assert!(require_non_blank("name", "Kenya").is_ok());
    }
}
