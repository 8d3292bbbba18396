use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use crate::middlewares::current_user;
use crate::models::*;
use crate::services::RedemptionService;

#[utoipa::path(
    get,
    path = "/api/mbl/canjes",
    tag = "canjes",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Canjes visibles para el usuario, más recientes primero", body = RedemptionListResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn list_redemptions(
    redemption_service: web::Data<RedemptionService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match redemption_service.list_redemptions(&user).await {
        Ok(canjes) => Ok(HttpResponse::Ok().json(RedemptionListResponse {
            success: true,
            canjes,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/mbl/canjes",
    tag = "canjes",
    request_body = CreateRedemptionRequest,
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Canje registrado", body = RedemptionCreatedResponse),
        (status = 400, description = "Monto o cliente inválido", body = ApiError),
        (status = 404, description = "Cliente inexistente o ajeno", body = ApiError)
    )
)]
pub async fn create_redemption(
    redemption_service: web::Data<RedemptionService>,
    req: HttpRequest,
    request: web::Json<CreateRedemptionRequest>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match redemption_service
        .create_redemption(&user, request.into_inner())
        .await
    {
        Ok(canje) => Ok(HttpResponse::Created().json(RedemptionCreatedResponse {
            success: true,
            message: "Canje registrado exitosamente".to_string(),
            canje,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/mbl/canjes/{id}",
    tag = "canjes",
    params(("id" = i32, Path, description = "ID del canje")),
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Canje eliminado", body = MessageResponse),
        (status = 404, description = "No existe o no fue registrado por el operador", body = ApiError)
    )
)]
pub async fn delete_redemption(
    redemption_service: web::Data<RedemptionService>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match redemption_service
        .delete_redemption(&user, path.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::ok("Canje eliminado"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn redemption_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/canjes")
            .route("", web::get().to(list_redemptions))
            .route("", web::post().to(create_redemption))
            .route("/{id}", web::delete().to(delete_redemption)),
    );
}
