//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub grade: String,
    pub roll_number: Option<String>,
    pub admission_number: Option<String>,
    pub status: String,
    pub school_id: i64,
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
    #[sea_orm(has_many = "super::student_performances::Entity")]
    StudentPerformances,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::student_performances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentPerformances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Student, StudentStatus};

        Student {
            id: self.id,
            name: self.name,
            grade: self.grade,
            roll_number: self.roll_number,
            admission_number: self.admission_number,
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Pending),
            school_id: self.school_id,
        }
    }
}
