use once_cell::sync::Lazy;
use regex::Regex;

// 年级标签只排除控制字符（换行、制表符等），标点与空格均合法，例如 "5/A"、"Nursery (K.G.)"
static GRADE_CONTROL_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Cc}").expect("Invalid grade regex"));

const MAX_GRADE_LABEL_LEN: usize = 128;

/// 校验并规范化年级标签，返回去除首尾空白后的值
pub fn validate_grade_label(grade: &str) -> Result<&str, &'static str> {
    let grade = grade.trim();
    if grade.is_empty() {
        return Err("grade must not be empty");
    }
    if grade.chars().count() > MAX_GRADE_LABEL_LEN {
        return Err("grade is too long");
    }
    if GRADE_CONTROL_CHAR_RE.is_match(grade) {
        return Err("grade contains control characters");
    }
    Ok(grade)
}
