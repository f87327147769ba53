use super::ValidationError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted at registration.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Checked at registration only; login merely requires presence so that a
/// wrong guess surfaces as a credential mismatch, not a validation error.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("secure_password_123").is_ok());
        assert!(validate_password("eightch8").is_ok());
    }

    #[test]
    fn test_password_empty() {
        assert_eq!(
            validate_password("").unwrap_err(),
            ValidationError::PasswordEmpty
        );
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password("short").unwrap_err(),
            ValidationError::PasswordTooShort
        );
    }

    #[test]
    fn test_password_too_long() {
        let long = "a".repeat(129);
        assert_eq!(
            validate_password(&long).unwrap_err(),
            ValidationError::PasswordTooLong
        );
    }
}
