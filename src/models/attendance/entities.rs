use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤年级（来自内置静态文件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceGrade {
    pub value: String,
    pub label: String,
}
