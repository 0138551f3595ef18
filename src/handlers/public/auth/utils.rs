use crate::error::ApiError;

/// Password length policy lives here, at the signup boundary; the hashing
/// layer itself imposes no minimum.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Basic email format check for registration.
pub fn validate_email_format(email: &str) -> Result<(), ApiError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ApiError::bad_request("Invalid email format"))
    }
}

pub fn validate_password_length(password: &str) -> Result<(), ApiError> {
    if password.trim().len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::bad_request(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email_format("user@example.com").is_ok());
        assert!(validate_email_format("a.b+c@sub.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "no-at-sign", "@example.com", "user@", "user@nodot", "user@.com"] {
            assert!(validate_email_format(email).is_err(), "{email:?} should be rejected");
        }
    }

    #[test]
    fn password_length_boundary() {
        assert!(validate_password_length("1234567").is_err());
        assert!(validate_password_length("12345678").is_ok());
        // padding does not count toward the minimum
        assert!(validate_password_length("  1234567  ").is_err());
    }
}
