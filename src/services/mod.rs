pub mod academic;
pub mod attendance;
pub mod employees;
pub mod students;
pub mod system;

pub use academic::AcademicService;
pub use attendance::AttendanceService;
pub use employees::EmployeeService;
pub use students::StudentService;
pub use system::SystemService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;
use tracing::error;

use crate::errors::{Result, SchoolHubError};
use crate::middlewares::RequireSession;
use crate::models::users::entities::User;
use crate::storage::Storage;

// 从 app_data 获取存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| SchoolHubError::database_connection("Storage not found in app data"))
}

// 获取会话用户，未经过 RequireSession 的请求视为未认证
pub(crate) fn session_user(request: &HttpRequest) -> Result<User> {
    RequireSession::extract_user(request).ok_or_else(|| {
        error!("No session user on {}, RequireSession missing?", request.path());
        SchoolHubError::unauthenticated("Unauthorized")
    })
}

// 解析必填的年级参数
pub(crate) fn required_grade(grade: Option<&str>) -> Result<String> {
    let grade = grade
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .ok_or_else(|| SchoolHubError::bad_request("grade is required"))?;
    crate::utils::validate_grade_label(grade)
        .map(str::to_string)
        .map_err(SchoolHubError::bad_request)
}
