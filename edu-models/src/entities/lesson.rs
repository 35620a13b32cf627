//! The leaf content unit, typically a video.

use super::Resource;
use crate::enums::common::EntityKind;
use edu_macros::AutoUuid;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, AutoUuid)]
#[sea_orm(table_name = "lesson")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub url: String,
    pub lecture_id: String,
    pub order: i32,
    pub description: Option<String>,
    /// Drawn once at creation, between 4 and 5.
    pub rating: f64,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Resource for Entity {
    const KIND: EntityKind = EntityKind::Lesson;

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "title" => Some(Column::Title),
            "order" => Some(Column::Order),
            "rating" => Some(Column::Rating),
            "lectureId" => Some(Column::LectureId),
            "createdAt" => Some(Column::CreatedAt),
            "updatedAt" => Some(Column::UpdatedAt),
            _ => None,
        }
    }

    fn default_sort() -> Column {
        Column::CreatedAt
    }
}
