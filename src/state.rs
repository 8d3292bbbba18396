use crate::config::Config;
use crate::error::AppResult;
use crate::handlers;
use crate::services::*;
use crate::swagger::swagger_config;
use crate::utils::reporting_offset;
use crate::views::Views;
use actix_web::web;
use sea_orm::DatabaseConnection;

/// Services shared by every worker, built once from the configuration.
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabaseConnection,
    pub session_service: SessionService,
    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub redemption_service: RedemptionService,
    pub prize_service: PrizeService,
    pub admin_service: AdminService,
    pub analytics_service: AnalyticsService,
    pub views: Views,
}

impl AppState {
    pub fn new(pool: DatabaseConnection, config: &Config) -> AppResult<Self> {
        let offset = reporting_offset(config.reporting.utc_offset_hours);
        let session_service = SessionService::from_config(&config.session);
        let client_service = ClientService::new(pool.clone());

        Ok(Self {
            auth_service: AuthService::new(pool.clone(), session_service.clone()),
            redemption_service: RedemptionService::new(pool.clone(), client_service.clone()),
            prize_service: PrizeService::new(pool.clone(), client_service.clone()),
            admin_service: AdminService::new(pool.clone(), offset),
            analytics_service: AnalyticsService::new(pool.clone(), offset),
            views: Views::new()?,
            client_service,
            session_service,
            pool,
        })
    }

    /// Registers shared data and every route. The session middleware is
    /// wrapped separately around the `App`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.pool.clone()))
            .app_data(web::Data::new(self.session_service.clone()))
            .app_data(web::Data::new(self.auth_service.clone()))
            .app_data(web::Data::new(self.client_service.clone()))
            .app_data(web::Data::new(self.redemption_service.clone()))
            .app_data(web::Data::new(self.prize_service.clone()))
            .app_data(web::Data::new(self.admin_service.clone()))
            .app_data(web::Data::new(self.analytics_service.clone()))
            .app_data(web::Data::new(self.views.clone()))
            .app_data(handlers::json_config())
            .app_data(handlers::query_config())
            .app_data(handlers::path_config())
            .configure(swagger_config(self.session_service.cookie_name()))
            .configure(handlers::api_config)
            .configure(handlers::pages_config);
    }
}
