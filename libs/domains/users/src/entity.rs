use crate::models::{NewUser, Role, User};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub last_name1: String,
    pub last_name2: Option<String>,
    pub role: Role,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            last_name1: model.last_name1,
            last_name2: model.last_name2,
            role: model.role,
        }
    }
}

// The database assigns the id
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        ActiveModel {
            id: NotSet,
            email: Set(user.email),
            name: Set(user.name),
            last_name1: Set(user.last_name1),
            last_name2: Set(user.last_name2),
            role: Set(user.role),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}

// Overwrites every mutable column, keeps created_at
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            name: Set(user.name),
            last_name1: Set(user.last_name1),
            last_name2: Set(user.last_name2),
            role: Set(user.role),
            created_at: NotSet,
        }
    }
}
