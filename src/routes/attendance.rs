use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::AttendanceStudentsParams;
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_grades(&req).await
}

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<AttendanceStudentsParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_students(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/attendance")
            .wrap(middlewares::RequireSession)
            .route("/grades", web::get().to(list_grades))
            .route("/students", web::get().to(list_students)),
    );
}
