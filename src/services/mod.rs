pub mod admin_service;
pub mod analytics_service;
pub mod auth_service;
pub mod client_service;
pub mod prize_service;
pub mod redemption_service;
pub mod session_service;

pub use admin_service::*;
pub use analytics_service::*;
pub use auth_service::*;
pub use client_service::*;
pub use prize_service::*;
pub use redemption_service::*;
pub use session_service::*;
