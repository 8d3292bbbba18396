use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use chrono::Utc;
use crate::middlewares::current_user;
use crate::models::*;
use crate::services::AnalyticsService;

#[utoipa::path(
    get,
    path = "/api/mbl/analytics/kpis",
    tag = "analytics",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Indicadores de hoy y del mes", body = KpisResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn kpis(
    analytics_service: web::Data<AnalyticsService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match analytics_service.kpis(&user, Utc::now()).await {
        Ok(kpis) => Ok(HttpResponse::Ok().json(KpisResponse {
            success: true,
            kpis,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/mbl/analytics/daily-sales",
    tag = "analytics",
    params(DailySalesQuery),
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Canjes y montos por día", body = ChartResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn daily_sales(
    analytics_service: web::Data<AnalyticsService>,
    req: HttpRequest,
    query: web::Query<DailySalesQuery>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match analytics_service
        .daily_sales(&user, query.days, Utc::now())
        .await
    {
        Ok(data) => Ok(HttpResponse::Ok().json(ChartResponse {
            success: true,
            data,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/mbl/analytics/top-clients",
    tag = "analytics",
    params(TopClientsQuery),
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Clientes con mayor monto canjeado", body = TopClientsResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn top_clients(
    analytics_service: web::Data<AnalyticsService>,
    req: HttpRequest,
    query: web::Query<TopClientsQuery>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match analytics_service.top_clients(&user, query.limit).await {
        Ok((data, clients)) => Ok(HttpResponse::Ok().json(TopClientsResponse {
            success: true,
            data,
            clients,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/mbl/analytics/trends",
    tag = "analytics",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Comparación semanal, ranking por día y patrón horario", body = TrendsResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn trends(
    analytics_service: web::Data<AnalyticsService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match analytics_service.trends(&user, Utc::now()).await {
        Ok(trends) => Ok(HttpResponse::Ok().json(TrendsResponse {
            success: true,
            trends,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn analytics_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/analytics")
            .route("/kpis", web::get().to(kpis))
            .route("/daily-sales", web::get().to(daily_sales))
            .route("/top-clients", web::get().to(top_clients))
            .route("/trends", web::get().to(trends)),
    );
}
