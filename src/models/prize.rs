use crate::entities::prize_entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrizeResponse {
    pub id: i32,
    pub nombre: String,
    pub puntos_requeridos: i32,
}

impl From<prize_entity::Model> for PrizeResponse {
    fn from(m: prize_entity::Model) -> Self {
        Self {
            id: m.id,
            nombre: m.name,
            puntos_requeridos: m.points_required,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrizeListResponse {
    pub success: bool,
    pub premios: Vec<PrizeResponse>,
}

/// Prizes a client can currently claim
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientPrizesResponse {
    pub success: bool,
    pub cliente_id: i32,
    pub puntos: i64,
    pub premios: Vec<PrizeResponse>,
}
