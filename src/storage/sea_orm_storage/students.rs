//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{Column, Entity as Students};
use crate::errors::{Result, SchoolHubError};
use crate::models::students::entities::{Student, StudentStatus};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 列出某年级已录取的学生（按学号升序）
    pub async fn list_accepted_students_by_grade_impl(
        &self,
        school_id: i64,
        grade: &str,
    ) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::SchoolId.eq(school_id))
            .filter(Column::Status.eq(StudentStatus::ACCEPTED))
            .filter(Column::Grade.eq(grade))
            // 学号是文本列：先比长度再比值，未补零的数字学号按 1, 2, 10 排列
            .order_by_asc(Expr::expr(Func::char_length(Expr::col(Column::RollNumber))))
            .order_by_asc(Column::RollNumber)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询年级学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出已录取的学生（按姓名升序）
    pub async fn list_accepted_students_impl(&self, school_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::SchoolId.eq(school_id))
            .filter(Column::Status.eq(StudentStatus::ACCEPTED))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 已录取学生的年级（去重）
    pub async fn list_accepted_student_grades_impl(&self, school_id: i64) -> Result<Vec<String>> {
        Students::find()
            .select_only()
            .column(Column::Grade)
            .distinct()
            .filter(Column::SchoolId.eq(school_id))
            .filter(Column::Status.eq(StudentStatus::ACCEPTED))
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生年级失败: {e}")))
    }

    /// 统计学生数量
    pub async fn count_students_impl(
        &self,
        school_id: i64,
        status: Option<StudentStatus>,
    ) -> Result<u64> {
        let mut select = Students::find().filter(Column::SchoolId.eq(school_id));

        if let Some(status) = status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计学生数量失败: {e}")))
    }
}
