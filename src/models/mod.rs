pub mod admin;
pub mod analytics;
pub mod auth;
pub mod client;
pub mod common;
pub mod prize;
pub mod redemption;

pub use admin::*;
pub use analytics::*;
pub use auth::*;
pub use client::*;
pub use common::*;
pub use prize::*;
pub use redemption::*;
