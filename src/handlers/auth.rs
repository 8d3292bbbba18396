use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use serde_json::json;
use crate::middlewares::current_user;
use crate::models::*;
use crate::services::{AuthService, SessionService};

#[utoipa::path(
    post,
    path = "/api/mbl/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Sesión iniciada; la cookie de sesión queda establecida", body = LoginResponse),
        (status = 400, description = "Faltan usuario o contraseña", body = ApiError),
        (status = 401, description = "Credenciales incorrectas", body = ApiError)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    session_service: web::Data<SessionService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    match auth_service.login(request.into_inner()).await {
        Ok((token, session)) => Ok(HttpResponse::Ok()
            .cookie(session_service.session_cookie(token))
            .json(LoginResponse {
                success: true,
                message: "Inicio de sesión exitoso".to_string(),
                data: SessionUserResponse::from(&session),
            })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/mbl/logout",
    tag = "auth",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sesión cerrada", body = MessageResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn logout(
    auth_service: web::Data<AuthService>,
    session_service: web::Data<SessionService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;
    auth_service.logout(&user);

    Ok(HttpResponse::Ok()
        .cookie(session_service.removal_cookie())
        .json(MessageResponse::ok("Sesión cerrada")))
}

#[utoipa::path(
    get,
    path = "/api/mbl/me",
    tag = "auth",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Usuario de la sesión actual", body = SessionUserResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn me(req: HttpRequest) -> Result<HttpResponse> {
    let user = current_user(&req)?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": SessionUserResponse::from(&user)
    })))
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout))
        .route("/me", web::get().to(me));
}
