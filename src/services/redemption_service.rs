use crate::entities::{
    client_entity as clients, redemption_entity as redemptions, user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::ClientService;
use crate::utils::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct RedemptionService {
    pool: DatabaseConnection,
    client_service: ClientService,
}

fn to_response(
    redemption: redemptions::Model,
    client: Option<&clients::Model>,
    recorder: Option<&str>,
) -> RedemptionResponse {
    RedemptionResponse {
        id: redemption.id,
        cliente_id: redemption.client_id,
        cliente_nombre: client.map(|c| c.full_name.clone()).unwrap_or_default(),
        cliente_cedula: client.map(|c| c.national_id.clone()).unwrap_or_default(),
        monto: cents_to_amount(redemption.amount_cents),
        descripcion: redemption.description,
        usuario_id: redemption.user_id,
        usuario_registro: recorder.unwrap_or_default().to_string(),
        fecha_canje: redemption.created_at,
    }
}

impl RedemptionService {
    pub fn new(pool: DatabaseConnection, client_service: ClientService) -> Self {
        Self {
            pool,
            client_service,
        }
    }

    /// Newest first. Operators only see what they recorded.
    pub async fn list_redemptions(&self, user: &SessionUser) -> AppResult<Vec<RedemptionResponse>> {
        let mut query = redemptions::Entity::find();
        if let Some(owner_id) = user.owner_scope() {
            query = query.filter(redemptions::Column::UserId.eq(owner_id));
        }

        let rows = query
            .order_by_desc(redemptions::Column::CreatedAt)
            .order_by_desc(redemptions::Column::Id)
            .find_also_related(clients::Entity)
            .all(&self.pool)
            .await?;

        let mut recorder_ids: Vec<i32> = rows.iter().map(|(r, _)| r.user_id).collect();
        recorder_ids.sort_unstable();
        recorder_ids.dedup();

        let recorders: HashMap<i32, String> = users::Entity::find()
            .filter(users::Column::Id.is_in(recorder_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(redemption, client)| {
                let recorder = recorders.get(&redemption.user_id).map(String::as_str);
                to_response(redemption, client.as_ref(), recorder)
            })
            .collect())
    }

    pub async fn create_redemption(
        &self,
        user: &SessionUser,
        request: CreateRedemptionRequest,
    ) -> AppResult<RedemptionResponse> {
        let client_id = request
            .cliente_id
            .as_ref()
            .and_then(LooseNumber::as_id)
            .ok_or_else(|| AppError::ValidationError("Debe seleccionar un cliente".to_string()))?;
        let amount = request
            .monto
            .as_ref()
            .and_then(LooseNumber::as_f64)
            .ok_or_else(|| AppError::ValidationError("El monto es obligatorio".to_string()))?;
        let amount_cents = to_cents(amount)?;
        let description = request
            .descripcion
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let client = self.client_service.find_visible(user, client_id).await?;

        let created = redemptions::ActiveModel {
            client_id: Set(client.id),
            user_id: Set(user.id),
            amount_cents: Set(amount_cents),
            description: Set(description),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Redemption {} of {} cents for client {} recorded by {}",
            created.id,
            created.amount_cents,
            client.id,
            user.username
        );
        Ok(to_response(created, Some(&client), Some(&user.username)))
    }

    /// Admins may delete any redemption, operators only their own.
    pub async fn delete_redemption(&self, user: &SessionUser, redemption_id: i32) -> AppResult<()> {
        let mut query = redemptions::Entity::find_by_id(redemption_id);
        if let Some(owner_id) = user.owner_scope() {
            query = query.filter(redemptions::Column::UserId.eq(owner_id));
        }

        let redemption = query
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Canje no encontrado".to_string()))?;

        redemptions::Entity::delete_by_id(redemption.id)
            .exec(&self.pool)
            .await?;

        log::info!(
            "Redemption {} of client {} deleted by {}",
            redemption.id,
            redemption.client_id,
            user.username
        );
        Ok(())
    }
}
