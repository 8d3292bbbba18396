use actix_web::{http::header, web, HttpRequest, HttpResponse, Result, ResponseError};
use sea_orm::DatabaseConnection;
use serde_json::json;
use crate::database::ping;
use crate::middlewares::current_user;
use crate::services::{ClientService, PrizeService};
use crate::views::Views;

fn redirect_to_login() -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, "/login"))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Client balances and the prize catalog.
pub async fn index(
    views: web::Data<Views>,
    client_service: web::Data<ClientService>,
    prize_service: web::Data<PrizeService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let Ok(user) = current_user(&req) else {
        return Ok(redirect_to_login());
    };

    let clientes = match client_service.list_clients(&user).await {
        Ok(clientes) => clientes,
        Err(e) => return Ok(e.error_response()),
    };
    let premios = match prize_service.list_prizes().await {
        Ok(premios) => premios,
        Err(e) => return Ok(e.error_response()),
    };

    let data = json!({
        "title": "Inicio",
        "username": user.username,
        "clientes": clientes,
        "premios": premios,
    });
    match views.render("index", &data) {
        Ok(body) => Ok(html(body)),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn dashboard(views: web::Data<Views>, req: HttpRequest) -> Result<HttpResponse> {
    let Ok(user) = current_user(&req) else {
        return Ok(redirect_to_login());
    };

    let data = json!({
        "title": "Panel MBL",
        "username": user.username,
        "role": user.role,
        "is_admin": user.is_admin(),
    });
    match views.render("mbl", &data) {
        Ok(body) => Ok(html(body)),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn login_page(views: web::Data<Views>) -> Result<HttpResponse> {
    match views.render("login", &json!({ "title": "Ingreso" })) {
        Ok(body) => Ok(html(body)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Servicio y base de datos disponibles"),
        (status = 503, description = "Base de datos no disponible")
    )
)]
pub async fn health(pool: web::Data<DatabaseConnection>) -> Result<HttpResponse> {
    let database_up = ping(&pool).await;
    let body = json!({
        "success": database_up,
        "data": {
            "status": if database_up { "ok" } else { "degraded" },
            "database": if database_up { "up" } else { "down" },
        }
    });

    if database_up {
        Ok(HttpResponse::Ok().json(body))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(body))
    }
}

pub fn pages_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/mbl", web::get().to(dashboard))
        .route("/login", web::get().to(login_page))
        .route("/health", web::get().to(health));
}
