use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body shared by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub success: bool,
    pub message: String,
    pub code: String,
}

/// Plain `{success, message}` acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// A numeric field that HTML forms may submit as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LooseNumber::Number(n) => Some(*n),
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Positive whole number that fits a primary key
    pub fn as_id(&self) -> Option<i32> {
        let value = self.as_f64()?;
        if value.fract() == 0.0 && value >= 1.0 && value <= f64::from(i32::MAX) {
            Some(value as i32)
        } else {
            None
        }
    }

    /// Positive whole number of points
    pub fn as_points(&self) -> Option<i64> {
        let value = self.as_f64()?;
        if value.fract() == 0.0 && value >= 1.0 && value <= 1_000_000_000.0 {
            Some(value as i64)
        } else {
            None
        }
    }
}
