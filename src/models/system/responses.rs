use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::User;

// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

// 当前会话响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct SessionResponse {
    pub user: User,
}
