use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicService;
use crate::models::academic::{
    requests::PerformanceParams,
    responses::{PerformanceItem, PerformanceListResponse},
};
use crate::services::{required_grade, session_user};

pub async fn list_performances(
    service: &AcademicService,
    query: PerformanceParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let grade = required_grade(query.grade.as_deref())?;
    let school_id = session_user(request)?.require_school()?;
    let subject = query
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let storage = service.get_storage(request)?;
    let performances = storage
        .list_performances_by_grade(school_id, &grade, subject)
        .await?
        .into_iter()
        .map(PerformanceItem::from)
        .collect();

    Ok(HttpResponse::Ok().json(PerformanceListResponse { performances }))
}
