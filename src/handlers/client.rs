use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use crate::middlewares::current_user;
use crate::models::*;
use crate::services::{ClientService, PrizeService};

#[utoipa::path(
    get,
    path = "/api/mbl/clientes",
    tag = "clientes",
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Clientes visibles para el usuario, más recientes primero", body = ClientListResponse),
        (status = 401, description = "Sin sesión", body = ApiError)
    )
)]
pub async fn list_clients(
    client_service: web::Data<ClientService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match client_service.list_clients(&user).await {
        Ok(clientes) => Ok(HttpResponse::Ok().json(ClientListResponse {
            success: true,
            clientes,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/mbl/clientes/{id}",
    tag = "clientes",
    params(("id" = i32, Path, description = "ID del cliente")),
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Cliente", body = ClientDetailResponse),
        (status = 404, description = "No existe o no es visible", body = ApiError)
    )
)]
pub async fn get_client(
    client_service: web::Data<ClientService>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match client_service.get_client(&user, path.into_inner()).await {
        Ok(cliente) => Ok(HttpResponse::Ok().json(ClientDetailResponse {
            success: true,
            cliente,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/mbl/clientes",
    tag = "clientes",
    request_body = CreateClientRequest,
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Cliente registrado", body = ClientMutationResponse),
        (status = 400, description = "Datos inválidos", body = ApiError),
        (status = 409, description = "Cédula duplicada", body = ApiError)
    )
)]
pub async fn create_client(
    client_service: web::Data<ClientService>,
    req: HttpRequest,
    request: web::Json<CreateClientRequest>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match client_service.create_client(&user, request.into_inner()).await {
        Ok(cliente) => Ok(HttpResponse::Created().json(ClientMutationResponse {
            success: true,
            message: "Cliente registrado exitosamente".to_string(),
            cliente,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/mbl/clientes/{id}",
    tag = "clientes",
    params(("id" = i32, Path, description = "ID del cliente")),
    request_body = UpdateClientRequest,
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Cliente actualizado", body = ClientMutationResponse),
        (status = 400, description = "Nada que actualizar o cédula modificada", body = ApiError),
        (status = 404, description = "No existe o no es visible", body = ApiError)
    )
)]
pub async fn update_client(
    client_service: web::Data<ClientService>,
    req: HttpRequest,
    path: web::Path<i32>,
    request: web::Json<UpdateClientRequest>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match client_service
        .update_client(&user, path.into_inner(), request.into_inner())
        .await
    {
        Ok(cliente) => Ok(HttpResponse::Ok().json(ClientMutationResponse {
            success: true,
            message: "Cliente actualizado".to_string(),
            cliente,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/mbl/clientes/{id}",
    tag = "clientes",
    params(("id" = i32, Path, description = "ID del cliente")),
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Cliente y sus canjes eliminados", body = MessageResponse),
        (status = 404, description = "No existe o no es visible", body = ApiError)
    )
)]
pub async fn delete_client(
    client_service: web::Data<ClientService>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match client_service.delete_client(&user, path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::ok("Cliente eliminado"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/mbl/clientes/{id}/puntos",
    tag = "clientes",
    params(("id" = i32, Path, description = "ID del cliente")),
    request_body = AccruePointsRequest,
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Puntos acumulados", body = ClientMutationResponse),
        (status = 400, description = "Cantidad inválida", body = ApiError),
        (status = 404, description = "No existe o no es visible", body = ApiError)
    )
)]
pub async fn accrue_points(
    client_service: web::Data<ClientService>,
    req: HttpRequest,
    path: web::Path<i32>,
    request: web::Json<AccruePointsRequest>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match client_service
        .accrue_points(&user, path.into_inner(), request.into_inner())
        .await
    {
        Ok(cliente) => Ok(HttpResponse::Ok().json(ClientMutationResponse {
            success: true,
            message: "Puntos agregados".to_string(),
            cliente,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/mbl/clientes/{id}/premios",
    tag = "premios",
    params(("id" = i32, Path, description = "ID del cliente")),
    security(
        ("session_cookie" = []),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Premios alcanzables con el saldo actual", body = ClientPrizesResponse),
        (status = 404, description = "No existe o no es visible", body = ApiError)
    )
)]
pub async fn client_prizes(
    prize_service: web::Data<PrizeService>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let user = current_user(&req)?;

    match prize_service.prizes_for_client(&user, path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn client_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clientes")
            .route("", web::get().to(list_clients))
            .route("", web::post().to(create_client))
            .route("/{id}", web::get().to(get_client))
            .route("/{id}", web::put().to(update_client))
            .route("/{id}", web::delete().to(delete_client))
            .route("/{id}/puntos", web::post().to(accrue_points))
            .route("/{id}/premios", web::get().to(client_prizes)),
    );
}
