use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生成绩记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "academic.ts")]
pub struct StudentPerformance {
    pub id: i64,
    pub student_id: i64,
    pub grade: String,
    pub subject: String,
    pub score: f64,
    pub term: String,
    pub school_id: i64,
}
