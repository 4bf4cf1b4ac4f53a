use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::debug;

use super::SystemService;
use crate::models::{AppStartTime, system::responses::HealthResponse};

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| start.uptime_seconds())
        .unwrap_or(0);

    debug!(
        "Health check for {} ({})",
        service.get_config().app.system_name,
        service.get_config().app.environment
    );

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
    }))
}
