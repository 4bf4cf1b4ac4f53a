use serde::Deserialize;
use ts_rs::TS;

// 成绩查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "academic.ts")]
pub struct PerformanceParams {
    pub grade: Option<String>,
    pub subject: Option<String>,
}
