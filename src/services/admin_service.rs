use crate::entities::{
    UserRole, client_entity as clients, redemption_entity as redemptions, user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::*;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Select,
};

#[derive(Clone)]
pub struct AdminService {
    pool: DatabaseConnection,
    offset: FixedOffset,
}

/// Total amount of the selected redemptions, in cents.
///
/// The cast keeps the sum an integer on MySQL, where SUM over BIGINT yields
/// DECIMAL.
pub(crate) async fn sum_amount_cents(
    pool: &DatabaseConnection,
    query: Select<redemptions::Entity>,
) -> AppResult<i64> {
    let total = query
        .select_only()
        .column_as(
            Expr::cust("CAST(COALESCE(SUM(amount_cents), 0) AS SIGNED)"),
            "total_cents",
        )
        .into_tuple::<Option<i64>>()
        .one(pool)
        .await?;
    Ok(total.flatten().unwrap_or(0))
}

impl AdminService {
    pub fn new(pool: DatabaseConnection, offset: FixedOffset) -> Self {
        Self { pool, offset }
    }

    pub async fn get_stats(&self, user: &SessionUser, now: DateTime<Utc>) -> AppResult<AdminStats> {
        if !user.is_admin() {
            log::warn!("User {} requested admin stats without permission", user.username);
            return Err(AppError::Forbidden);
        }

        let today_start = start_of_day(local_date(now, self.offset), self.offset);

        let total_clientes = clients::Entity::find().count(&self.pool).await?;
        let total_canjes = redemptions::Entity::find().count(&self.pool).await?;
        let total_cents = sum_amount_cents(&self.pool, redemptions::Entity::find()).await?;

        let today = redemptions::Entity::find()
            .filter(redemptions::Column::CreatedAt.gte(today_start));
        let canjes_hoy = today.clone().count(&self.pool).await?;
        let cents_hoy = sum_amount_cents(&self.pool, today).await?;

        let total_operadores = users::Entity::find()
            .filter(users::Column::Role.eq(UserRole::Operator))
            .count(&self.pool)
            .await?;

        Ok(AdminStats {
            total_clientes,
            total_canjes,
            total_monto: cents_to_amount(total_cents),
            canjes_hoy,
            monto_hoy: cents_to_amount(cents_hoy),
            total_operadores,
        })
    }
}
