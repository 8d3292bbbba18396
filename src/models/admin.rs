use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminStats {
    pub total_clientes: u64,
    pub total_canjes: u64,
    pub total_monto: f64,
    pub canjes_hoy: u64,
    pub monto_hoy: f64,
    pub total_operadores: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminStatsResponse {
    pub success: bool,
    pub stats: AdminStats,
}
