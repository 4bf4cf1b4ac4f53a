use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生录取状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "student.ts")]
pub enum StudentStatus {
    Pending,  // 待审核
    Accepted, // 已录取
    Rejected, // 已拒绝
}

impl StudentStatus {
    pub const PENDING: &'static str = "pending";
    pub const ACCEPTED: &'static str = "accepted";
    pub const REJECTED: &'static str = "rejected";
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentStatus::Pending => write!(f, "{}", StudentStatus::PENDING),
            StudentStatus::Accepted => write!(f, "{}", StudentStatus::ACCEPTED),
            StudentStatus::Rejected => write!(f, "{}", StudentStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            StudentStatus::PENDING => Ok(StudentStatus::Pending),
            StudentStatus::ACCEPTED => Ok(StudentStatus::Accepted),
            StudentStatus::REJECTED => Ok(StudentStatus::Rejected),
            _ => Err(format!("Invalid student status: {s}")),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub grade: String,
    pub roll_number: Option<String>,
    pub admission_number: Option<String>,
    pub status: StudentStatus,
    pub school_id: i64,
}
