//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: String,
    pub status: String,
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

// 从数据库模型转换为业务模型
impl Model {
    /// 角色无法识别的用户不返回，避免以错误权限放行
    pub fn into_user(self) -> Option<crate::models::users::entities::User> {
        use crate::models::users::entities::{User, UserRole, UserStatus};

        let role = match self.role.parse::<UserRole>() {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!("User {} has unrecognized role: {}", self.id, e);
                return None;
            }
        };

        Some(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Inactive),
            school_id: self.school_id,
        })
    }
}
