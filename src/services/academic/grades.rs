use std::collections::BTreeSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicService;
use crate::models::academic::responses::AcademicGradesResponse;
use crate::services::session_user;

pub async fn list_grades(
    service: &AcademicService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let school_id = session_user(request)?.require_school()?;
    let storage = service.get_storage(request)?;

    let (student_grades, performance_grades) = tokio::try_join!(
        storage.list_accepted_student_grades(school_id),
        storage.list_performance_grades(school_id),
    )?;

    Ok(HttpResponse::Ok().json(AcademicGradesResponse {
        grades: merge_grades(student_grades, performance_grades),
    }))
}

/// 合并两组年级，去重并按字典序排序
pub(crate) fn merge_grades(left: Vec<String>, right: Vec<String>) -> Vec<String> {
    left.into_iter()
        .chain(right)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
