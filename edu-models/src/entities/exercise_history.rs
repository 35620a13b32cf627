use super::Resource;
use crate::enums::common::EntityKind;
use edu_macros::AutoUuid;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One scored attempt. Rows are append-only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, AutoUuid)]
#[sea_orm(table_name = "exercise_history")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub exercise_id: String,
    pub score: i32,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Resource for Entity {
    const KIND: EntityKind = EntityKind::ExerciseHistory;

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "score" => Some(Column::Score),
            "createdAt" => Some(Column::CreatedAt),
            _ => None,
        }
    }

    fn default_sort() -> Column {
        Column::CreatedAt
    }
}
