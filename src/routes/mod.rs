pub mod academic;

pub mod attendance;

pub mod employees;

pub mod students;

pub mod system;

pub use academic::configure_academic_routes;
pub use attendance::configure_attendance_routes;
pub use employees::configure_employee_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_attendance_routes)
        .configure(configure_academic_routes)
        .configure(configure_employee_routes)
        .configure(configure_student_routes);
}
