use serde::Deserialize;
use ts_rs::TS;

// 考勤学生查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceStudentsParams {
    pub grade: Option<String>,
    pub subject: Option<String>,
}
