pub mod jwt;
pub mod parameter_error_handler;
pub mod static_data;
pub mod validate;

pub use jwt::{JwtUtils, SessionClaims};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use static_data::load_attendance_grades;
pub use validate::validate_grade_label;
