//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::student_performances::{Column, Entity as StudentPerformances};
use crate::errors::{Result, SchoolHubError};
use crate::models::academic::entities::StudentPerformance;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 成绩记录中的年级（去重）
    pub async fn list_performance_grades_impl(&self, school_id: i64) -> Result<Vec<String>> {
        StudentPerformances::find()
            .select_only()
            .column(Column::Grade)
            .distinct()
            .filter(Column::SchoolId.eq(school_id))
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询成绩年级失败: {e}")))
    }

    /// 列出某年级的成绩记录
    pub async fn list_performances_by_grade_impl(
        &self,
        school_id: i64,
        grade: &str,
        subject: Option<&str>,
    ) -> Result<Vec<StudentPerformance>> {
        let mut select = StudentPerformances::find()
            .filter(Column::SchoolId.eq(school_id))
            .filter(Column::Grade.eq(grade));

        // 科目筛选
        if let Some(subject) = subject {
            select = select.filter(Column::Subject.eq(subject));
        }

        let records = select
            .order_by_asc(Column::Subject)
            .order_by_asc(Column::StudentId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询成绩记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_performance()).collect())
    }
}
