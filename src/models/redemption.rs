use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::LooseNumber;

/// A redemption joined with its client and recorder for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RedemptionResponse {
    pub id: i32,
    pub cliente_id: i32,
    pub cliente_nombre: String,
    pub cliente_cedula: String,
    pub monto: f64,
    pub descripcion: Option<String>,
    pub usuario_id: i32,
    pub usuario_registro: String,
    pub fecha_canje: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRedemptionRequest {
    #[schema(value_type = Option<i32>, example = 1)]
    pub cliente_id: Option<LooseNumber>,
    #[schema(value_type = Option<f64>, example = 50000)]
    pub monto: Option<LooseNumber>,
    #[schema(example = "Bono de cortesía")]
    pub descripcion: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RedemptionListResponse {
    pub success: bool,
    pub canjes: Vec<RedemptionResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RedemptionCreatedResponse {
    pub success: bool,
    pub message: String,
    pub canje: RedemptionResponse,
}
