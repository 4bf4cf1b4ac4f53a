use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::responses::AttendanceGradesResponse;
use crate::utils::load_attendance_grades;

// 考勤年级来自内置文件，与学业年级（数据库）相互独立
pub async fn list_grades(
    _service: &AttendanceService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let grades = load_attendance_grades()?;

    Ok(HttpResponse::Ok().json(AttendanceGradesResponse {
        grades: grades.to_vec(),
    }))
}
