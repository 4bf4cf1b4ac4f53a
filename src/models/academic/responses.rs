use serde::Serialize;
use ts_rs::TS;

use super::entities::StudentPerformance;

// 学业年级列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "academic.ts")]
pub struct AcademicGradesResponse {
    pub grades: Vec<String>,
}

// 成绩列表项
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "academic.ts")]
pub struct PerformanceItem {
    pub id: i64,
    pub student_id: i64,
    pub grade: String,
    pub subject: String,
    pub score: f64,
    pub term: String,
}

impl From<StudentPerformance> for PerformanceItem {
    fn from(record: StudentPerformance) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            grade: record.grade,
            subject: record.subject,
            score: record.score,
            term: record.term,
        }
    }
}

// 成绩列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "academic.ts")]
pub struct PerformanceListResponse {
    pub performances: Vec<PerformanceItem>,
}
