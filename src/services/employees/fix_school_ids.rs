use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EmployeeService;
use crate::models::employees::responses::{FixSchoolIdsResponse, MismatchedEmployee};
use crate::services::session_user;

pub async fn fix_school_ids(
    service: &EmployeeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = session_user(request)?;
    let school_id = user.require_school()?;
    let storage = service.get_storage(request)?;

    let mismatched = storage.list_employees_outside_school(school_id).await?;
    if mismatched.is_empty() {
        return Ok(HttpResponse::Ok().json(FixSchoolIdsResponse {
            message: "All employees already belong to this school".to_string(),
            updated: 0,
            employees: Vec::new(),
        }));
    }

    let ids: Vec<i64> = mismatched.iter().map(|e| e.id).collect();
    let updated = storage.assign_employees_to_school(school_id, &ids).await?;

    info!(
        "User {} assigned {} employee(s) to school {}",
        user.id, updated, school_id
    );

    Ok(HttpResponse::Ok().json(FixSchoolIdsResponse {
        message: format!("Updated school for {updated} employee(s)"),
        updated,
        employees: mismatched.into_iter().map(MismatchedEmployee::from).collect(),
    }))
}
