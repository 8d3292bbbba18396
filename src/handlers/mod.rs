pub mod admin;
pub mod analytics;
pub mod auth;
pub mod client;
pub mod pages;
pub mod prize;
pub mod redemption;

pub use admin::admin_config;
pub use analytics::analytics_config;
pub use auth::auth_config;
pub use client::client_config;
pub use pages::pages_config;
pub use prize::prize_config;
pub use redemption::redemption_config;

use crate::error::AppError;
use actix_web::web;

/// Every JSON route, mounted under `/api/mbl`.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/mbl")
            .configure(auth_config)
            .configure(client_config)
            .configure(redemption_config)
            .configure(prize_config)
            .configure(admin_config)
            .configure(analytics_config),
    );
}

/// Malformed bodies get the regular error envelope instead of actix's plain text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Cuerpo de la solicitud inválido: {err}")).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Parámetros inválidos: {err}")).into()
    })
}

/// Ids that do not parse as a row id answer 400 with the usual envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        log::debug!("Bad path parameter on {}: {err}", req.path());
        AppError::ValidationError("Identificador inválido".to_string()).into()
    })
}
