use crate::entities::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: Option<String>,
    #[schema(example = "admin123")]
    pub password: Option<String>,
}

/// The authenticated user, placed in request extensions by the session middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
    pub session_id: String,
    pub expires_at: i64,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// `None` for admins (everything visible), the user id otherwise
    pub fn owner_scope(&self) -> Option<i32> {
        if self.is_admin() { None } else { Some(self.id) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUserResponse {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
}

impl From<&SessionUser> for SessionUserResponse {
    fn from(user: &SessionUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub data: SessionUserResponse,
}
