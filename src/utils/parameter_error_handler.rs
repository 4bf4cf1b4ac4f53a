use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::ErrorResponse;

/// 查询参数解析失败时返回 400 `{error}`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid query parameters for {}: {}", req.path(), err);
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid query parameters: {err}")));
    InternalError::from_response(err, response).into()
}

/// JSON 请求体解析失败时返回 400 `{error}`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid JSON payload for {}: {}", req.path(), err);
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid JSON payload: {err}")));
    InternalError::from_response(err, response).into()
}
