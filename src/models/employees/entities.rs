use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教职工在职状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "employee.ts")]
pub enum EmployeeStatus {
    Active,   // 在职
    Inactive, // 离职
    OnLeave,  // 休假
}

impl EmployeeStatus {
    pub const ACTIVE: &'static str = "active";
    pub const INACTIVE: &'static str = "inactive";
    pub const ON_LEAVE: &'static str = "on_leave";
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "{}", EmployeeStatus::ACTIVE),
            EmployeeStatus::Inactive => write!(f, "{}", EmployeeStatus::INACTIVE),
            EmployeeStatus::OnLeave => write!(f, "{}", EmployeeStatus::ON_LEAVE),
        }
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EmployeeStatus::ACTIVE => Ok(EmployeeStatus::Active),
            EmployeeStatus::INACTIVE => Ok(EmployeeStatus::Inactive),
            EmployeeStatus::ON_LEAVE => Ok(EmployeeStatus::OnLeave),
            _ => Err(format!("Invalid employee status: {s}")),
        }
    }
}

// 教职工实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "employee.ts")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub status: EmployeeStatus,
    pub salary: f64,
    pub school_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(EmployeeStatus::OnLeave.to_string(), "on_leave");
        assert_eq!(
            "on_leave".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::OnLeave
        );
        assert!("retired".parse::<EmployeeStatus>().is_err());
    }

    #[test]
    fn test_status_serde_matches_display() {
        for status in [
            EmployeeStatus::Active,
            EmployeeStatus::Inactive,
            EmployeeStatus::OnLeave,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.to_string()));
        }
    }
}
