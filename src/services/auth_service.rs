use crate::config::SeedConfig;
use crate::entities::{UserRole, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::SessionService;
use crate::utils::*;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    session_service: SessionService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, session_service: SessionService) -> Self {
        Self {
            pool,
            session_service,
        }
    }

    /// Checks credentials and opens a session. Unknown users and wrong
    /// passwords produce the same error.
    pub async fn login(&self, request: LoginRequest) -> AppResult<(String, SessionUser)> {
        let username = require_text(request.username.as_deref(), "usuario")?;
        let password = request
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                AppError::ValidationError("El campo contraseña es obligatorio".to_string())
            })?;

        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username.as_str()))
            .one(&self.pool)
            .await?;

        // bcrypt is CPU bound; keep it off the async workers. Unknown users
        // still pay for one hash check.
        let hash = user.as_ref().map(|u| u.password_hash.clone());
        let matches = tokio::task::spawn_blocking(move || match hash {
            Some(hash) => verify_password(&password, &hash),
            None => Ok(verify_unknown_account(&password)),
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Password check aborted: {e}")))??;

        let user = match user {
            Some(user) if matches => user,
            _ => {
                return Err(AppError::AuthError(
                    "Usuario o contraseña incorrectos".to_string(),
                ));
            }
        };

        let (token, session) = self.session_service.issue(&user)?;
        log::info!("User {} logged in as {}", user.username, user.role);
        Ok((token, session))
    }

    pub fn logout(&self, session: &SessionUser) {
        self.session_service.revoke(session);
    }

    /// Creates the configured admin (and optional operator) when missing.
    /// Existing accounts are left untouched.
    pub async fn ensure_seed_users(&self, seed: &SeedConfig) -> AppResult<()> {
        self.ensure_user(&seed.admin_username, &seed.admin_password, UserRole::Admin)
            .await?;

        if let (Some(username), Some(password)) = (&seed.operator_username, &seed.operator_password)
        {
            self.ensure_user(username, password, UserRole::Operator)
                .await?;
        }
        Ok(())
    }

    pub async fn ensure_user(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<users::Model> {
        if let Some(existing) = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.pool)
            .await?
        {
            return Ok(existing);
        }

        if let Err(e) = validate_password(password) {
            log::warn!("Seeded account {username} uses a weak password: {e}");
        }

        let created = users::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(hash_password(password)?),
            role: Set(role),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created {role} account {username}");
        Ok(created)
    }
}
