use std::io;

/// Special characters accepted by the password rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+{};:,<.>";

/// Reasons a password can fail the strength rule
#[derive(Debug, PartialEq, Eq)]
pub enum PasswordError {
    TooShort,
    NoUppercase,
    NoLowercase,
    NoNumber,
    NoSpecialChar,
    ContainsWhitespace,
}

/// Function to validate password strength
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < crate::PASSWORD_MIN_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::NoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::NoNumber);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PasswordError::NoSpecialChar);
    }
    if password.chars().any(|c| c.is_whitespace()) {
        return Err(PasswordError::ContainsWhitespace);
    }
    Ok(())
}

/// Helper function to read a password securely (no echo)
pub fn read_password() -> io::Result<String> {
    rpassword::read_password()
}
