pub mod user_management;

pub use user_management::*;
