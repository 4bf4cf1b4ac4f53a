use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EmployeeService;
use crate::models::employees::{
    entities::EmployeeStatus,
    responses::{EmployeeSummary, EmployeeSummaryResponse},
};
use crate::services::session_user;

pub async fn get_summary(
    service: &EmployeeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let school_id = session_user(request)?.require_school()?;
    let storage = service.get_storage(request)?;

    let (total, active, inactive, on_leave, salary) = tokio::try_join!(
        storage.count_employees(school_id, None),
        storage.count_employees(school_id, Some(EmployeeStatus::Active)),
        storage.count_employees(school_id, Some(EmployeeStatus::Inactive)),
        storage.count_employees(school_id, Some(EmployeeStatus::OnLeave)),
        storage.sum_active_employee_salaries(school_id),
    )?;

    let summary = EmployeeSummary {
        total_employees: total,
        active_employees: active,
        inactive_employees: inactive,
        on_leave_employees: on_leave,
        total_salary: salary.unwrap_or(0.0),
    };

    Ok(HttpResponse::Ok().json(EmployeeSummaryResponse { summary }))
}
