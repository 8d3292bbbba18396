use actix_web::{web, HttpResponse, Result, ResponseError};
use crate::models::*;
use crate::services::PrizeService;

#[utoipa::path(
    get,
    path = "/api/mbl/premios",
    tag = "premios",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Catálogo de premios ordenado por puntos", body = PrizeListResponse)
    )
)]
pub async fn list_prizes(prize_service: web::Data<PrizeService>) -> Result<HttpResponse> {
    match prize_service.list_prizes().await {
        Ok(premios) => Ok(HttpResponse::Ok().json(PrizeListResponse {
            success: true,
            premios,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn prize_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/premios", web::get().to(list_prizes));
}
