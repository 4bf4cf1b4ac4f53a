/*!
 * 会话认证中间件
 *
 * 验证会话令牌，并把解析出的用户放入请求扩展，供后续中间件与处理函数使用。
 *
 * ## 认证流程
 *
 * 1. 从 Cookie（`session.cookie_name`）或 `Authorization: Bearer <token>` 中读取令牌
 * 2. 使用 `session.secret` 校验签名与过期时间，失败时不会访问存储层
 * 3. 先查缓存，未命中时按令牌中的用户 ID 读取用户，且用户必须处于 active 状态
 * 4. 会话无效返回 401 `{ "error": "Unauthorized" }`；存储层故障返回 500，原因只写入日志
 *
 * 缓存中的用户在 `cache.default_ttl` 内不会重新检查状态，停用账号在缓存过期后才失效。
 *
 * ```rust,ignore
 * web::scope("/api/attendance")
 *     .wrap(RequireSession)
 *     .route("/grades", web::get().to(list_grades))
 * ```
 */

use crate::cache::{self, ObjectCache};
use crate::config::AppConfig;
use crate::errors::SchoolHubError;
use crate::models::users::entities::{User, UserStatus};
use crate::storage::Storage;
use crate::utils::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest, ResponseError,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

#[derive(Clone)]
pub struct RequireSession;

// 辅助函数：解析会话令牌得到当前用户
// 令牌缺失、无效或用户不可用时返回 Unauthenticated，存储层故障返回 5xx 错误
async fn resolve_session_user(req: &ServiceRequest) -> crate::errors::Result<User> {
    let token = JwtUtils::extract_session_token(req.request())
        .ok_or_else(|| SchoolHubError::unauthenticated("Missing session token"))?;

    let claims = JwtUtils::verify_session_token(&token).map_err(|err| {
        SchoolHubError::unauthenticated(format!("Invalid session token: {err}"))
    })?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| SchoolHubError::unauthenticated("Invalid user ID in session token"))?;

    let session_cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone());
    let cache_key = cache::session_cache_key(&token);

    if let Some(store) = &session_cache
        && let Some(user) = cache::get_json::<User>(store.as_ref(), &cache_key).await
        && user.id == user_id
    {
        return Ok(user);
    }

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| SchoolHubError::database_connection("Storage not found in app data"))?
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| SchoolHubError::unauthenticated(format!("User {user_id} not found")))?;

    if user.status != UserStatus::Active {
        return Err(SchoolHubError::unauthenticated(format!(
            "User {user_id} is not active"
        )));
    }

    if let Some(store) = &session_cache {
        cache::insert_json(
            store.as_ref(),
            cache_key,
            &user,
            AppConfig::get().cache.default_ttl,
        )
        .await;
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match resolve_session_user(&req).await {
                Ok(user) => {
                    debug!("Session authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) if err.status() == StatusCode::UNAUTHORIZED => {
                    info!(
                        "Session authentication failed for request to {}: {}",
                        req.path(),
                        err.message()
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE)
                            .map_into_right_body(),
                    ))
                }
                // 存储层故障：记录原因，返回通用 500
                Err(err) => Ok(req.into_response(err.error_response().map_into_right_body())),
            }
        })
    }
}

// 辅助函数：从请求中提取会话用户
impl RequireSession {
    /// 从请求扩展中提取当前用户
    /// 此函数应该在应用了 RequireSession 中间件的路由处理程序中使用
    pub fn extract_user(req: &HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }
}
