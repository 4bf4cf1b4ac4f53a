//! 内置静态数据
//!
//! 编译时从 data/ 目录嵌入。

use once_cell::sync::OnceCell;
use rust_embed::Embed;

use crate::errors::{Result, SchoolHubError};
use crate::models::attendance::entities::AttendanceGrade;

#[derive(Embed)]
#[folder = "data/"]
struct StaticData;

const ATTENDANCE_GRADES_FILE: &str = "attendance_grades.json";

static ATTENDANCE_GRADES: OnceCell<Vec<AttendanceGrade>> = OnceCell::new();

fn read_json<T: serde::de::DeserializeOwned>(name: &str) -> Result<T> {
    let file = StaticData::get(name)
        .ok_or_else(|| SchoolHubError::static_data(format!("Missing embedded file: {name}")))?;
    serde_json::from_slice(&file.data)
        .map_err(|e| SchoolHubError::static_data(format!("Malformed embedded file {name}: {e}")))
}

/// 考勤年级列表，按文件中的顺序返回，首次读取后缓存
pub fn load_attendance_grades() -> Result<&'static [AttendanceGrade]> {
    ATTENDANCE_GRADES
        .get_or_try_init(|| read_json(ATTENDANCE_GRADES_FILE))
        .map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_grades_are_embedded() {
        let grades = load_attendance_grades().unwrap();
        assert!(!grades.is_empty());
        assert_eq!(grades[0].value, "1");
        assert!(grades.iter().all(|g| !g.label.is_empty()));
    }

    #[test]
    fn test_missing_file_is_static_data_error() {
        let err = read_json::<Vec<AttendanceGrade>>("nope.json").unwrap_err();
        assert_eq!(err.code(), "E008");
    }
}
