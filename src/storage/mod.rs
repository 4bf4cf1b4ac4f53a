use std::sync::Arc;

use crate::models::{
    academic::entities::StudentPerformance,
    employees::entities::{Employee, EmployeeStatus},
    students::entities::{Student, StudentStatus},
    users::entities::User,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 数据访问接口
///
/// 除会话用户查询外，所有方法都按学校（租户）隔离。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户方法
    // 通过ID获取用户信息（会话解析使用）
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 学生方法
    // 列出某年级已录取的学生，按学号（roll number）升序
    async fn list_accepted_students_by_grade(
        &self,
        school_id: i64,
        grade: &str,
    ) -> Result<Vec<Student>>;
    // 列出已录取的学生，按姓名升序
    async fn list_accepted_students(&self, school_id: i64) -> Result<Vec<Student>>;
    // 已录取学生中出现过的年级（去重）
    async fn list_accepted_student_grades(&self, school_id: i64) -> Result<Vec<String>>;
    // 统计学生数量，status 为空时统计全部
    async fn count_students(&self, school_id: i64, status: Option<StudentStatus>) -> Result<u64>;

    /// 成绩方法
    // 成绩记录中出现过的年级（去重）
    async fn list_performance_grades(&self, school_id: i64) -> Result<Vec<String>>;
    // 列出某年级的成绩记录，可按科目过滤
    async fn list_performances_by_grade(
        &self,
        school_id: i64,
        grade: &str,
        subject: Option<&str>,
    ) -> Result<Vec<StudentPerformance>>;

    /// 教职工方法
    // 统计教职工数量，status 为空时统计全部
    async fn count_employees(&self, school_id: i64, status: Option<EmployeeStatus>)
    -> Result<u64>;
    // 在职教职工工资总和，没有在职教职工时为 None
    async fn sum_active_employee_salaries(&self, school_id: i64) -> Result<Option<f64>>;
    // 学校归属为空或不等于指定学校的教职工
    async fn list_employees_outside_school(&self, school_id: i64) -> Result<Vec<Employee>>;
    // 批量将指定教职工的学校归属设置为 school_id，仅更新仍未归属该学校的记录
    async fn assign_employees_to_school(&self, school_id: i64, employee_ids: &[i64])
    -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
