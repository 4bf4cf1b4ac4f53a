use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::AttendanceService;
use crate::models::attendance::{
    requests::AttendanceStudentsParams,
    responses::{AttendanceStudent, AttendanceStudentsResponse},
};
use crate::services::{required_grade, session_user};

pub async fn list_students(
    service: &AttendanceService,
    query: AttendanceStudentsParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let grade = required_grade(query.grade.as_deref())?;
    let school_id = session_user(request)?.require_school()?;

    // 考勤名单按年级整体返回，科目不参与过滤
    if let Some(subject) = query.subject.as_deref() {
        debug!("Attendance roster for grade {} requested with subject {}", grade, subject);
    }

    let storage = service.get_storage(request)?;
    let students = storage
        .list_accepted_students_by_grade(school_id, &grade)
        .await?
        .into_iter()
        .map(AttendanceStudent::from)
        .collect();

    Ok(HttpResponse::Ok().json(AttendanceStudentsResponse { students }))
}
