use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::EmployeeService;

// 懒加载的全局 EmployeeService 实例
static EMPLOYEE_SERVICE: Lazy<EmployeeService> = Lazy::new(EmployeeService::new_lazy);

pub async fn get_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.get_summary(&req).await
}

pub async fn fix_school_ids(req: HttpRequest) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.fix_school_ids(&req).await
}

// 配置路由
pub fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/employee")
            .wrap(middlewares::RequireSession)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/summary", web::get().to(get_summary))
                    .route("/fix-school-ids", web::post().to(fix_school_ids)),
            ),
    );
}
