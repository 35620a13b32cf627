//! Registered accounts.

use super::Resource;
use crate::enums::common::{EntityKind, Role};
use edu_macros::AutoUuid;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, AutoUuid)]
#[sea_orm(table_name = "user")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub phone: String,
    /// bcrypt hash
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub name: Option<String>,
    pub email: Option<String>,
    pub birth: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub district: Option<String>,
    pub commune: Option<String>,
    pub province: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Resource for Entity {
    const KIND: EntityKind = EntityKind::User;

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "name" => Some(Column::Name),
            "phone" => Some(Column::Phone),
            "role" => Some(Column::Role),
            "age" => Some(Column::Age),
            "createdAt" => Some(Column::CreatedAt),
            "updatedAt" => Some(Column::UpdatedAt),
            _ => None,
        }
    }

    fn default_sort() -> Column {
        Column::CreatedAt
    }
}
