use crate::error::{AppError, AppResult};

/// Largest accepted single amount, in cents
const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// Converts a positive decimal amount into integer cents.
pub fn to_cents(amount: f64) -> AppResult<i64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::ValidationError(
            "El monto debe ser mayor a cero".to_string(),
        ));
    }

    let cents = (amount * 100.0).round() as i64;
    if cents <= 0 || cents > MAX_AMOUNT_CENTS {
        return Err(AppError::ValidationError("Monto fuera de rango".to_string()));
    }
    Ok(cents)
}

pub fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Rounds to two decimals, the precision the dashboard prints.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
