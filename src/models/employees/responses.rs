use serde::Serialize;
use ts_rs::TS;

use super::entities::Employee;

// 教职工统计
#[derive(Debug, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "employee.ts")]
pub struct EmployeeSummary {
    pub total_employees: u64,
    pub active_employees: u64,
    pub inactive_employees: u64,
    pub on_leave_employees: u64,
    pub total_salary: f64,
}

// 教职工统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct EmployeeSummaryResponse {
    pub summary: EmployeeSummary,
}

// 被修复学校归属的教职工（修复前的记录）
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "employee.ts")]
pub struct MismatchedEmployee {
    pub id: i64,
    pub name: String,
    pub school_id: Option<i64>,
}

impl From<Employee> for MismatchedEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            school_id: employee.school_id,
        }
    }
}

// 修复学校归属响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct FixSchoolIdsResponse {
    pub message: String,
    pub updated: u64,
    pub employees: Vec<MismatchedEmployee>,
}
