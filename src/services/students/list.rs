use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::responses::{StudentListItem, StudentListResponse};
use crate::services::session_user;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let school_id = session_user(request)?.require_school()?;
    let storage = service.get_storage(request)?;

    let students = storage
        .list_accepted_students(school_id)
        .await?
        .into_iter()
        .map(StudentListItem::from)
        .collect();

    Ok(HttpResponse::Ok().json(StudentListResponse { students }))
}
