use serde::Serialize;
use ts_rs::TS;

use super::entities::AttendanceGrade;
use crate::models::students::entities::Student;

// 考勤年级响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceGradesResponse {
    pub grades: Vec<AttendanceGrade>,
}

// 考勤学生
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceStudent {
    pub id: i64,
    /// 学号（即录取编号）
    pub student_id: Option<String>,
    pub name: String,
    pub roll_number: Option<String>,
    pub grade: String,
}

impl From<Student> for AttendanceStudent {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            student_id: student.admission_number,
            name: student.name,
            roll_number: student.roll_number,
            grade: student.grade,
        }
    }
}

// 考勤学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceStudentsResponse {
    pub students: Vec<AttendanceStudent>,
}
