//! A quiz attached to a lesson.

use super::{Resource, StringList};
use crate::enums::common::EntityKind;
use edu_macros::AutoUuid;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, AutoUuid)]
#[sea_orm(table_name = "exercise")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub lesson_id: String,
    pub order: Option<i32>,
    /// Ordered question references.
    pub question_ids: StringList,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Resource for Entity {
    const KIND: EntityKind = EntityKind::Exercise;

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "title" => Some(Column::Title),
            "order" => Some(Column::Order),
            "lessonId" => Some(Column::LessonId),
            "createdAt" => Some(Column::CreatedAt),
            "updatedAt" => Some(Column::UpdatedAt),
            _ => None,
        }
    }

    fn default_sort() -> Column {
        Column::CreatedAt
    }
}
