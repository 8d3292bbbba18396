use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use chrono::Utc;
use crate::middlewares::current_user;
use crate::models::*;
use crate::services::AdminService;

#[utoipa::path(
    get,
    path = "/api/mbl/admin/stats",
    tag = "admin",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Estadísticas generales", body = AdminStatsResponse),
        (status = 401, description = "Sin sesión", body = ApiError),
        (status = 403, description = "Solo administradores", body = ApiError)
    )
)]
pub async fn get_stats(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match admin_service.get_stats(&user, Utc::now()).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(AdminStatsResponse {
            success: true,
            stats,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/admin").route("/stats", web::get().to(get_stats)));
}
