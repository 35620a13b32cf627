//! Pending sign-up requests awaiting an administrator.

use super::Resource;
use crate::enums::common::EntityKind;
use edu_macros::AutoUuid;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, AutoUuid)]
#[sea_orm(table_name = "user_request")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub birth: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub support_desc: Option<String>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Resource for Entity {
    const KIND: EntityKind = EntityKind::UserRequest;

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "name" => Some(Column::Name),
            "phone" => Some(Column::Phone),
            "createdAt" => Some(Column::CreatedAt),
            _ => None,
        }
    }

    fn default_sort() -> Column {
        Column::CreatedAt
    }
}
