//! An age-gated grouping under a block.

use super::{Resource, StringList};
use crate::enums::common::EntityKind;
use edu_macros::AutoUuid;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, AutoUuid)]
#[sea_orm(table_name = "class")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    /// Soft reference to the owning block.
    pub block_id: String,
    /// Minimum viewer age.
    pub age: i32,
    pub lecture_ids: StringList,
    pub order: i32,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Resource for Entity {
    const KIND: EntityKind = EntityKind::Class;

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "title" => Some(Column::Title),
            "order" => Some(Column::Order),
            "age" => Some(Column::Age),
            "blockId" => Some(Column::BlockId),
            "createdAt" => Some(Column::CreatedAt),
            "updatedAt" => Some(Column::UpdatedAt),
            _ => None,
        }
    }

    fn default_sort() -> Column {
        Column::CreatedAt
    }
}
