use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academic::requests::PerformanceParams;
use crate::models::users::entities::UserRole;
use crate::services::AcademicService;

// 懒加载的全局 AcademicService 实例
static ACADEMIC_SERVICE: Lazy<AcademicService> = Lazy::new(AcademicService::new_lazy);

pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_grades(&req).await
}

pub async fn list_performances(
    req: HttpRequest,
    query: web::Query<PerformanceParams>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .list_performances(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_academic_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/academic")
            .wrap(middlewares::RequireSession)
            .route("/grades", web::get().to(list_grades))
            .service(
                web::scope("/performance")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::get().to(list_performances)),
            ),
    );
}
