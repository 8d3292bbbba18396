use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::UserRole;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::me,
        handlers::client::list_clients,
        handlers::client::get_client,
        handlers::client::create_client,
        handlers::client::update_client,
        handlers::client::delete_client,
        handlers::client::accrue_points,
        handlers::client::client_prizes,
        handlers::redemption::list_redemptions,
        handlers::redemption::create_redemption,
        handlers::redemption::delete_redemption,
        handlers::prize::list_prizes,
        handlers::admin::get_stats,
        handlers::analytics::kpis,
        handlers::analytics::daily_sales,
        handlers::analytics::top_clients,
        handlers::analytics::trends,
        handlers::pages::health,
    ),
    components(
        schemas(
            ApiError,
            MessageResponse,
            LooseNumber,
            UserRole,
            LoginRequest,
            LoginResponse,
            SessionUserResponse,
            ClientResponse,
            CreateClientRequest,
            UpdateClientRequest,
            AccruePointsRequest,
            ClientListResponse,
            ClientDetailResponse,
            ClientMutationResponse,
            RedemptionResponse,
            CreateRedemptionRequest,
            RedemptionListResponse,
            RedemptionCreatedResponse,
            PrizeResponse,
            PrizeListResponse,
            ClientPrizesResponse,
            AdminStats,
            AdminStatsResponse,
            PeriodTotals,
            TodayKpis,
            MonthKpis,
            TopClientKpi,
            Kpis,
            KpisResponse,
            ChartDataset,
            ChartData,
            ChartResponse,
            TopClientEntry,
            TopClientsResponse,
            PercentChanges,
            WeeklyComparison,
            WeekdayStat,
            HourlyPattern,
            Trends,
            TrendsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Sesiones de operadores y administradores"),
        (name = "clientes", description = "Registro de clientes y puntos"),
        (name = "canjes", description = "Canjes monetarios"),
        (name = "premios", description = "Catálogo de premios"),
        (name = "admin", description = "Estadísticas para administradores"),
        (name = "analytics", description = "Indicadores y gráficas"),
        (name = "health", description = "Estado del servicio"),
    ),
    info(
        title = "MBL Casa de Apuestas API",
        version = "1.0.0",
        description = "API de fidelización y canjes de MBL Casa de Apuestas"
    )
)]
pub struct ApiDoc;

/// OpenAPI document with the session cookie scheme named after the
/// configured `session.cookie_name`.
pub fn api_doc(cookie_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(components) = doc.components.as_mut() {
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(cookie_name))),
        );
    }
    doc
}

pub fn swagger_config(cookie_name: &str) -> impl FnOnce(&mut web::ServiceConfig) + use<> {
    let doc = api_doc(cookie_name);
    move |cfg| {
        cfg.service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", doc))
            .route(
                "/swagger-ui",
                web::get().to(|| async {
                    actix_web::HttpResponse::Found()
                        .append_header(("Location", "/swagger-ui/"))
                        .finish()
                }),
            );
    }
}
