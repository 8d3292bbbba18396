use bcrypt::{DEFAULT_COST, hash, verify};
use crate::error::{AppError, AppResult};
use std::sync::LazyLock;

/// Same cost as real account hashes, so a miss takes as long as a hit.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash("mbl-unknown-account", DEFAULT_COST).ok());

/// Minimal strength rule for seeded accounts
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < 8 || password.len() > 128 {
        return Err(AppError::ValidationError(
            "La contraseña debe tener entre 8 y 128 caracteres".to_string(),
        ));
    }

    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_letter || !has_digit {
        return Err(AppError::ValidationError(
            "La contraseña debe contener letras y números".to_string(),
        ));
    }

    Ok(())
}

pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))
}

/// Runs a full bcrypt check for a username that does not exist and
/// always reports a mismatch.
pub fn verify_unknown_account(password: &str) -> bool {
    if let Some(dummy) = DUMMY_HASH.as_deref() {
        let _ = verify(password, dummy);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password() {
        assert!(validate_password("casino2024").is_ok());
        assert!(validate_password("admin123").is_ok());
        assert!(validate_password("password").is_err()); // no digits
        assert!(validate_password("12345678").is_err()); // no letters
        assert!(validate_password("abc12").is_err()); // too short
    }

    #[test]
    fn test_hash_and_verify_password() {
        let password = "casino2024";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("casino2025", &hashed).unwrap());
    }

    #[test]
    fn test_unknown_account_never_matches() {
        assert!(!verify_unknown_account("mbl-unknown-account"));
        assert!(!verify_unknown_account(""));
        assert!(DUMMY_HASH.as_deref().is_some_and(|h| h.starts_with("$2")));
    }
}
