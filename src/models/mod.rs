pub mod bug;
pub mod user;

pub use bug::*;
pub use user::*;
