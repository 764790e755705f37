pub mod common;
pub mod group;
pub mod role;
pub mod user;

pub use common::*;
pub use group::*;
pub use role::*;
pub use user::*;
