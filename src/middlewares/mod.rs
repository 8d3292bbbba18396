pub mod auth;
pub mod cors;

pub use auth::{SessionMiddleware, current_user};
pub use cors::create_cors;
