use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,12}$").expect("national id regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// Strips the separators people type into a cédula ("1.023.456.789") and
/// checks what is left is 5 to 12 ASCII digits.
pub fn normalize_national_id(raw: &str) -> AppResult<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | ' ' | '-'))
        .collect();

    if !NATIONAL_ID_RE.is_match(&cleaned) {
        return Err(AppError::ValidationError(
            "La cédula debe contener entre 5 y 12 dígitos".to_string(),
        ));
    }
    Ok(cleaned)
}

/// Empty input means "no phone"
pub fn normalize_phone(raw: Option<&str>) -> AppResult<Option<String>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if !PHONE_RE.is_match(&cleaned) {
        return Err(AppError::ValidationError(
            "Número de teléfono inválido".to_string(),
        ));
    }
    Ok(Some(cleaned))
}

pub fn normalize_email(raw: Option<&str>) -> AppResult<Option<String>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if !EMAIL_RE.is_match(raw) {
        return Err(AppError::ValidationError("Correo electrónico inválido".to_string()));
    }
    Ok(Some(raw.to_lowercase()))
}

/// Trims and rejects blank values of a required text field.
pub fn require_text(value: Option<&str>, field: &str) -> AppResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::ValidationError(format!(
            "El campo {field} es obligatorio"
        ))),
    }
}
