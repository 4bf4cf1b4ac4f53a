pub mod academic;
pub mod attendance;
pub mod common;
pub mod employees;
pub mod students;
pub mod system;
pub mod users;

pub use common::*;
pub use system::entities::AppStartTime;
