use crate::entities::{client_entity as clients, redemption_entity as redemptions};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::*;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Select, Set, SqlErr, TransactionTrait,
};

#[derive(Clone)]
pub struct ClientService {
    pool: DatabaseConnection,
}

/// Restricts a client query to what `user` may see.
fn visible_to(query: Select<clients::Entity>, user: &SessionUser) -> Select<clients::Entity> {
    match user.owner_scope() {
        Some(owner_id) => query.filter(clients::Column::OwnerId.eq(owner_id)),
        None => query,
    }
}

fn duplicate_national_id(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Ya existe un cliente con esa cédula".to_string())
        }
        _ => AppError::DatabaseError(err),
    }
}

impl ClientService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_clients(&self, user: &SessionUser) -> AppResult<Vec<ClientResponse>> {
        let models = visible_to(clients::Entity::find(), user)
            .order_by_desc(clients::Column::RegisteredAt)
            .order_by_desc(clients::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(ClientResponse::from).collect())
    }

    /// Loads a client, treating clients owned by other operators as missing.
    pub async fn find_visible(&self, user: &SessionUser, client_id: i32) -> AppResult<clients::Model> {
        visible_to(clients::Entity::find_by_id(client_id), user)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))
    }

    pub async fn get_client(&self, user: &SessionUser, client_id: i32) -> AppResult<ClientResponse> {
        Ok(self.find_visible(user, client_id).await?.into())
    }

    pub async fn create_client(
        &self,
        user: &SessionUser,
        request: CreateClientRequest,
    ) -> AppResult<ClientResponse> {
        let full_name = require_text(request.nombre.as_deref(), "nombre")?;
        let national_id = normalize_national_id(&require_text(request.cedula.as_deref(), "cédula")?)?;
        let phone = normalize_phone(request.telefono.as_deref())?;
        let email = normalize_email(request.email.as_deref())?;

        let existing = clients::Entity::find()
            .filter(clients::Column::NationalId.eq(national_id.as_str()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "Ya existe un cliente con esa cédula".to_string(),
            ));
        }

        // a concurrent insert can still trip the unique index
        let created = clients::ActiveModel {
            full_name: Set(full_name),
            national_id: Set(national_id),
            phone: Set(phone),
            email: Set(email),
            points: Set(0),
            owner_id: Set(user.id),
            registered_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(duplicate_national_id)?;

        log::info!(
            "Client {} ({}) registered by {}",
            created.id,
            created.national_id,
            user.username
        );
        Ok(created.into())
    }

    pub async fn update_client(
        &self,
        user: &SessionUser,
        client_id: i32,
        request: UpdateClientRequest,
    ) -> AppResult<ClientResponse> {
        let client = self.find_visible(user, client_id).await?;

        if let Some(cedula) = request.cedula.as_deref().filter(|c| !c.trim().is_empty())
            && normalize_national_id(cedula)? != client.national_id
        {
            return Err(AppError::ValidationError(
                "La cédula no se puede modificar".to_string(),
            ));
        }

        if request.nombre.is_none() && request.telefono.is_none() && request.email.is_none() {
            return Err(AppError::ValidationError(
                "No hay campos para actualizar".to_string(),
            ));
        }

        let mut model = client.into_active_model();
        if request.nombre.is_some() {
            model.full_name = Set(require_text(request.nombre.as_deref(), "nombre")?);
        }
        if request.telefono.is_some() {
            model.phone = Set(normalize_phone(request.telefono.as_deref())?);
        }
        if request.email.is_some() {
            model.email = Set(normalize_email(request.email.as_deref())?);
        }
        let updated = model.update(&self.pool).await?;

        log::info!("Client {} updated by {}", updated.id, user.username);
        Ok(updated.into())
    }

    /// Removes the client together with its redemptions.
    pub async fn delete_client(&self, user: &SessionUser, client_id: i32) -> AppResult<()> {
        let client = self.find_visible(user, client_id).await?;

        let txn = self.pool.begin().await?;
        let removed = redemptions::Entity::delete_many()
            .filter(redemptions::Column::ClientId.eq(client.id))
            .exec(&txn)
            .await?;
        clients::Entity::delete_by_id(client.id).exec(&txn).await?;
        txn.commit().await?;

        log::info!(
            "Client {} deleted by {} ({} redemptions removed)",
            client.id,
            user.username,
            removed.rows_affected
        );
        Ok(())
    }

    /// Adds points to a client's balance. Points are never deducted.
    pub async fn accrue_points(
        &self,
        user: &SessionUser,
        client_id: i32,
        request: AccruePointsRequest,
    ) -> AppResult<ClientResponse> {
        let points = request
            .puntos
            .as_ref()
            .and_then(LooseNumber::as_points)
            .ok_or_else(|| {
                AppError::ValidationError(
                    "Los puntos deben ser un número entero positivo".to_string(),
                )
            })?;

        let client = self.find_visible(user, client_id).await?;

        clients::Entity::update_many()
            .col_expr(
                clients::Column::Points,
                Expr::col(clients::Column::Points).add(points),
            )
            .filter(clients::Column::Id.eq(client.id))
            .exec(&self.pool)
            .await?;

        let updated = clients::Entity::find_by_id(client.id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        log::info!(
            "Client {} accrued {} points by {} (balance {})",
            updated.id,
            points,
            user.username,
            updated.points
        );
        Ok(updated.into())
    }
}
