pub mod jwt;
pub mod money;
pub mod password;
pub mod period;
pub mod validation;

pub use jwt::*;
pub use money::*;
pub use password::*;
pub use period::*;
pub use validation::*;
