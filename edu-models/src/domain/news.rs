use super::{
    common::QueryOptions,
    resource::{MergePatch, NewRecord, ResourceFilter},
};
use crate::entities::prelude::{News, NewsActiveModel, NewsColumn};
use sea_orm::{ColumnTrait, Condition, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewNews {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "thumbnail is required"))]
    pub thumbnail: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

impl NewRecord<News> for NewNews {
    fn into_record(self) -> NewsActiveModel {
        NewsActiveModel {
            title: Set(self.title),
            thumbnail: Set(self.thumbnail),
            content: Set(self.content),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNews {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
}

impl MergePatch<News> for UpdateNews {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.thumbnail.is_none() && self.content.is_none()
    }

    fn merge_into(self, record: &mut NewsActiveModel) {
        if let Some(title) = self.title {
            record.title = Set(title);
        }
        if let Some(thumbnail) = self.thumbnail {
            record.thumbnail = Set(thumbnail);
        }
        if let Some(content) = self.content {
            record.content = Set(content);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsPageParams {
    pub title: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<News> for NewsPageParams {
    fn condition(&self) -> Condition {
        Condition::all().add_option(self.title.as_ref().map(|t| NewsColumn::Title.eq(t.as_str())))
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}
