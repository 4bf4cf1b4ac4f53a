//! 教职工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub status: String,
    pub salary: f64,
    pub school_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    School,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_employee(self) -> crate::models::employees::entities::Employee {
        use crate::models::employees::entities::{Employee, EmployeeStatus};

        Employee {
            id: self.id,
            name: self.name,
            status: self
                .status
                .parse::<EmployeeStatus>()
                .unwrap_or(EmployeeStatus::Inactive),
            salary: self.salary,
            school_id: self.school_id,
        }
    }
}
