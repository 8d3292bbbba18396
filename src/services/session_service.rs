use crate::config::SessionConfig;
use crate::entities::user_entity as users;
use crate::error::AppResult;
use crate::models::SessionUser;
use crate::utils::JwtService;
use actix_web::cookie::{Cookie, SameSite, time::Duration as CookieDuration};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Issues and checks session cookies.
///
/// The cookie value is a signed token carrying the user id, username and
/// role, so requests are authenticated without a database round trip. Logout
/// records the session id in a revocation list that lives until the token
/// would have expired anyway.
#[derive(Clone)]
pub struct SessionService {
    jwt_service: JwtService,
    cookie_name: String,
    secure_cookie: bool,
    revoked: Arc<RwLock<HashMap<String, i64>>>,
}

impl SessionService {
    pub fn new(jwt_service: JwtService, cookie_name: &str, secure_cookie: bool) -> Self {
        Self {
            jwt_service,
            cookie_name: cookie_name.to_string(),
            secure_cookie,
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        let jwt_service = JwtService::new(&config.secret, config.ttl_seconds);
        Self::new(jwt_service, &config.cookie_name, config.secure_cookie)
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Creates a session for `user`, returning the token and its identity.
    pub fn issue(&self, user: &users::Model) -> AppResult<(String, SessionUser)> {
        let (token, claims) =
            self.jwt_service
                .generate_session_token(user.id, &user.username, user.role)?;

        let session = SessionUser {
            id: user.id,
            username: claims.username,
            role: claims.role,
            session_id: claims.jti,
            expires_at: claims.exp,
        };
        Ok((token, session))
    }

    /// Verifies signature and expiry, then rejects revoked sessions.
    pub fn authenticate(&self, token: &str) -> AppResult<SessionUser> {
        let claims = self.jwt_service.verify_session_token(token)?;

        let is_revoked = self
            .revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&claims.jti);
        if is_revoked {
            return Err(crate::error::AppError::AuthError(
                "La sesión fue cerrada".to_string(),
            ));
        }

        Ok(SessionUser {
            id: claims.user_id()?,
            username: claims.username,
            role: claims.role,
            session_id: claims.jti,
            expires_at: claims.exp,
        })
    }

    pub fn revoke(&self, session: &SessionUser) {
        let now = Utc::now().timestamp();
        let mut revoked = self.revoked.write().unwrap_or_else(PoisonError::into_inner);
        revoked.retain(|_, expires_at| *expires_at > now);
        revoked.insert(session.session_id.clone(), session.expires_at);
        log::info!(
            "Session {} of user {} revoked ({} active revocations)",
            session.session_id,
            session.username,
            revoked.len()
        );
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookie)
            .max_age(CookieDuration::seconds(
                self.jwt_service.get_session_expires_in(),
            ))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookie)
            .finish();
        cookie.make_removal();
        cookie
    }
}
