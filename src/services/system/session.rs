use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::system::responses::SessionResponse;
use crate::services::session_user;

pub async fn current_session(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = session_user(request)?;
    Ok(HttpResponse::Ok().json(SessionResponse { user }))
}
