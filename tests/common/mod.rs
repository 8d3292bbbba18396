//! Shared setup for the HTTP tests.
//!
//! Every test gets its own in-memory SQLite database migrated with the real
//! `Migrator`, plus one admin and two operators.
#![allow(dead_code)]

use actix_web::cookie::Cookie;
use mbl_backend::{
    AppState,
    config::Config,
    database::{create_pool, run_migrations},
    entities::UserRole,
    models::LoginRequest,
};

pub const ADMIN: (&str, &str) = ("admin", "admin123");
pub const CAJA1: (&str, &str) = ("caja1", "caja1234");
pub const CAJA2: (&str, &str) = ("caja2", "caja5678");

const TEST_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 0

[database]
url = "sqlite::memory:"
max_connections = 1

[session]
secret = "test-secret"
ttl_seconds = 600
"#;

pub async fn setup() -> AppState {
    let config = Config::parse(TEST_CONFIG).expect("test config");
    let pool = create_pool(&config.database).await.expect("sqlite pool");
    run_migrations(&pool).await.expect("migrations");

    let state = AppState::new(pool, &config).expect("state");
    for ((username, password), role) in [
        (ADMIN, UserRole::Admin),
        (CAJA1, UserRole::Operator),
        (CAJA2, UserRole::Operator),
    ] {
        state
            .auth_service
            .ensure_user(username, password, role)
            .await
            .expect("seed user");
    }
    state
}

/// Session cookie for `account`, issued without going through HTTP.
pub async fn session_cookie(state: &AppState, account: (&str, &str)) -> Cookie<'static> {
    let (token, _) = state
        .auth_service
        .login(LoginRequest {
            username: Some(account.0.to_string()),
            password: Some(account.1.to_string()),
        })
        .await
        .expect("login");
    state.session_service.session_cookie(token)
}

/// Builds the test service with the session middleware, like `main` does.
#[macro_export]
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(mbl_backend::middlewares::SessionMiddleware::new(
                    $state.session_service.clone(),
                ))
                .configure(|cfg| $state.configure(cfg)),
        )
        .await
    };
}
