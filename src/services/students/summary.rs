use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::{
    entities::StudentStatus,
    responses::{StudentSummary, StudentSummaryResponse},
};
use crate::services::session_user;

pub async fn get_summary(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let school_id = session_user(request)?.require_school()?;
    let storage = service.get_storage(request)?;

    let (total, accepted, pending, rejected) = tokio::try_join!(
        storage.count_students(school_id, None),
        storage.count_students(school_id, Some(StudentStatus::Accepted)),
        storage.count_students(school_id, Some(StudentStatus::Pending)),
        storage.count_students(school_id, Some(StudentStatus::Rejected)),
    )?;

    Ok(HttpResponse::Ok().json(StudentSummaryResponse {
        summary: StudentSummary {
            total_students: total,
            accepted_students: accepted,
            pending_students: pending,
            rejected_students: rejected,
        },
    }))
}
