pub mod clients;
pub mod prizes;
pub mod redemptions;
pub mod users;

pub use clients as client_entity;
pub use prizes as prize_entity;
pub use redemptions as redemption_entity;
pub use users as user_entity;
pub use users::UserRole;
