use crate::entities::client_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::LooseNumber;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: i32,
    pub nombre: String,
    pub cedula: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub puntos: i64,
    pub usuario_id: i32,
    pub fecha_registro: DateTime<Utc>,
}

impl From<client_entity::Model> for ClientResponse {
    fn from(m: client_entity::Model) -> Self {
        Self {
            id: m.id,
            nombre: m.full_name,
            cedula: m.national_id,
            telefono: m.phone,
            email: m.email,
            puntos: m.points,
            usuario_id: m.owner_id,
            fecha_registro: m.registered_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    #[schema(example = "Juan Perez")]
    pub nombre: Option<String>,
    #[schema(example = "1023456789")]
    pub cedula: Option<String>,
    #[schema(example = "3001234567")]
    pub telefono: Option<String>,
    pub email: Option<String>,
}

/// The cédula is immutable; sending a different one is rejected.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    pub nombre: Option<String>,
    pub cedula: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccruePointsRequest {
    #[schema(value_type = Option<f64>, example = 50)]
    pub puntos: Option<LooseNumber>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientListResponse {
    pub success: bool,
    pub clientes: Vec<ClientResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientDetailResponse {
    pub success: bool,
    pub cliente: ClientResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientMutationResponse {
    pub success: bool,
    pub message: String,
    pub cliente: ClientResponse,
}
