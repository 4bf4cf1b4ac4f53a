//! 教职工存储操作

use super::SeaOrmStorage;
use crate::entity::employees::{Column, Entity as Employees};
use crate::errors::{Result, SchoolHubError};
use crate::models::employees::entities::{Employee, EmployeeStatus};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

// 单条 UPDATE 中 IN 列表的最大长度
const ASSIGN_BATCH_SIZE: usize = 500;

impl SeaOrmStorage {
    /// 学校归属为空或不一致的条件
    fn outside_school_condition(school_id: i64) -> Condition {
        Condition::any()
            .add(Column::SchoolId.is_null())
            .add(Column::SchoolId.ne(school_id))
    }

    /// 统计教职工数量
    pub async fn count_employees_impl(
        &self,
        school_id: i64,
        status: Option<EmployeeStatus>,
    ) -> Result<u64> {
        let mut select = Employees::find().filter(Column::SchoolId.eq(school_id));

        if let Some(status) = status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计教职工数量失败: {e}")))
    }

    /// 在职教职工工资总和
    pub async fn sum_active_employee_salaries_impl(&self, school_id: i64) -> Result<Option<f64>> {
        let total = Employees::find()
            .filter(Column::SchoolId.eq(school_id))
            .filter(Column::Status.eq(EmployeeStatus::ACTIVE))
            .select_only()
            .column_as(Column::Salary.sum(), "total_salary")
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计工资总额失败: {e}")))?
            .flatten();

        Ok(total)
    }

    /// 列出学校归属为空或不一致的教职工
    pub async fn list_employees_outside_school_impl(&self, school_id: i64) -> Result<Vec<Employee>> {
        let employees = Employees::find()
            .filter(Self::outside_school_condition(school_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolHubError::database_operation(format!("查询学校归属异常的教职工失败: {e}"))
            })?;

        Ok(employees.into_iter().map(|m| m.into_employee()).collect())
    }

    /// 批量回填学校归属
    ///
    /// ID 列表按批拆分，避免超出 SQLite 的绑定参数上限；所有批次在同一事务中提交。
    pub async fn assign_employees_to_school_impl(
        &self,
        school_id: i64,
        employee_ids: &[i64],
    ) -> Result<u64> {
        if employee_ids.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let mut updated = 0;
        for chunk in employee_ids.chunks(ASSIGN_BATCH_SIZE) {
            let result = Employees::update_many()
                .col_expr(Column::SchoolId, sea_orm::sea_query::Expr::value(school_id))
                .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
                .filter(Column::Id.is_in(chunk.iter().copied()))
                .filter(Self::outside_school_condition(school_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    SchoolHubError::database_operation(format!("回填学校归属失败: {e}"))
                })?;
            updated += result.rows_affected;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated)
    }
}
