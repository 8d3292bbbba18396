use crate::entities::prize_entity as prizes;
use crate::error::AppResult;
use crate::models::*;
use crate::services::ClientService;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

#[derive(Clone)]
pub struct PrizeService {
    pool: DatabaseConnection,
    client_service: ClientService,
}

impl PrizeService {
    pub fn new(pool: DatabaseConnection, client_service: ClientService) -> Self {
        Self {
            pool,
            client_service,
        }
    }

    pub async fn list_prizes(&self) -> AppResult<Vec<PrizeResponse>> {
        let prizes = prizes::Entity::find()
            .order_by_asc(prizes::Column::PointsRequired)
            .order_by_asc(prizes::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(prizes.into_iter().map(PrizeResponse::from).collect())
    }

    /// Prizes whose threshold the client's balance reaches.
    pub async fn prizes_for_client(
        &self,
        user: &SessionUser,
        client_id: i32,
    ) -> AppResult<ClientPrizesResponse> {
        let client = self.client_service.find_visible(user, client_id).await?;

        let reachable = prizes::Entity::find()
            .filter(prizes::Column::PointsRequired.lte(client.points))
            .order_by_asc(prizes::Column::PointsRequired)
            .order_by_asc(prizes::Column::Name)
            .all(&self.pool)
            .await?
            .into_iter()
            .filter(|p| p.is_reachable_with(client.points))
            .map(PrizeResponse::from)
            .collect();

        Ok(ClientPrizesResponse {
            success: true,
            cliente_id: client.id,
            puntos: client.points,
            premios: reachable,
        })
    }
}
