use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;

// 学生列表项
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "student.ts")]
pub struct StudentListItem {
    pub id: i64,
    pub name: String,
    pub grade: String,
    pub admission_number: Option<String>,
}

impl From<Student> for StudentListItem {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            grade: student.grade,
            admission_number: student.admission_number,
        }
    }
}

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentListResponse {
    pub students: Vec<StudentListItem>,
}

// 学生统计
#[derive(Debug, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "student.ts")]
pub struct StudentSummary {
    pub total_students: u64,
    pub accepted_students: u64,
    pub pending_students: u64,
    pub rejected_students: u64,
}

// 学生统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentSummaryResponse {
    pub summary: StudentSummary,
}
