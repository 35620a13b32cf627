use super::{
    common::QueryOptions,
    resource::{MergePatch, NewRecord, ResourceFilter},
};
use crate::{
    entities::prelude::{
        Block, BlockActiveModel, BlockColumn, BlockModel, Class, ClassActiveModel, ClassColumn,
        ClassModel, Lecture, LectureActiveModel, LectureColumn, LectureModel, Lesson,
        LessonActiveModel, LessonColumn, StringList, UserModel,
    },
    enums::common::{EntityKind, Role},
};
use edu_utils::tree::TreeNode;
use rand::Rng;
use sea_orm::{ColumnTrait, Condition, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const LESSON_RATING_MIN: f64 = 4.0;
pub const LESSON_RATING_MAX: f64 = 5.0;

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBlock {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub order: i32,
}

impl NewRecord<Block> for NewBlock {
    fn into_record(self) -> BlockActiveModel {
        BlockActiveModel {
            title: Set(self.title),
            order: Set(self.order),
            class_ids: Set(StringList::default()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlock {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub order: Option<i32>,
}

impl MergePatch<Block> for UpdateBlock {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.order.is_none()
    }

    fn merge_into(self, record: &mut BlockActiveModel) {
        if let Some(title) = self.title {
            record.title = Set(title);
        }
        if let Some(order) = self.order {
            record.order = Set(order);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlockPageParams {
    pub title: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<Block> for BlockPageParams {
    fn condition(&self) -> Condition {
        Condition::all().add_option(self.title.as_ref().map(|t| BlockColumn::Title.eq(t.as_str())))
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}

// ---------------------------------------------------------------------------
// Class
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewClass {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "blockId is required"))]
    pub block_id: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,
    pub order: i32,
}

impl NewRecord<Class> for NewClass {
    fn parent(&self) -> Option<(EntityKind, &str)> {
        Some((EntityKind::Block, self.block_id.as_str()))
    }

    fn into_record(self) -> ClassActiveModel {
        ClassActiveModel {
            title: Set(self.title),
            block_id: Set(self.block_id),
            age: Set(self.age),
            lecture_ids: Set(StringList::default()),
            order: Set(self.order),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClass {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "blockId must not be empty"))]
    pub block_id: Option<String>,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: Option<i32>,
    pub order: Option<i32>,
}

impl MergePatch<Class> for UpdateClass {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.block_id.is_none() && self.age.is_none() && self.order.is_none()
    }

    fn merge_into(self, record: &mut ClassActiveModel) {
        if let Some(title) = self.title {
            record.title = Set(title);
        }
        if let Some(block_id) = self.block_id {
            record.block_id = Set(block_id);
        }
        if let Some(age) = self.age {
            record.age = Set(age);
        }
        if let Some(order) = self.order {
            record.order = Set(order);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClassPageParams {
    pub title: Option<String>,
    pub block_id: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<Class> for ClassPageParams {
    fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.title.as_ref().map(|t| ClassColumn::Title.eq(t.as_str())))
            .add_option(self.block_id.as_ref().map(|id| ClassColumn::BlockId.eq(id.as_str())))
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}

// ---------------------------------------------------------------------------
// Lecture
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLecture {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "thumbnail is required"))]
    pub thumbnail: String,
    #[validate(length(min = 1, message = "classId is required"))]
    pub class_id: String,
    pub order: i32,
    pub description: Option<String>,
}

impl NewRecord<Lecture> for NewLecture {
    fn parent(&self) -> Option<(EntityKind, &str)> {
        Some((EntityKind::Class, self.class_id.as_str()))
    }

    fn into_record(self) -> LectureActiveModel {
        LectureActiveModel {
            title: Set(self.title),
            thumbnail: Set(self.thumbnail),
            class_id: Set(self.class_id),
            lesson_ids: Set(StringList::default()),
            order: Set(self.order),
            description: Set(self.description),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLecture {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub class_id: Option<String>,
    pub order: Option<i32>,
    pub description: Option<String>,
}

impl MergePatch<Lecture> for UpdateLecture {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.thumbnail.is_none()
            && self.class_id.is_none()
            && self.order.is_none()
            && self.description.is_none()
    }

    fn merge_into(self, record: &mut LectureActiveModel) {
        if let Some(title) = self.title {
            record.title = Set(title);
        }
        if let Some(thumbnail) = self.thumbnail {
            record.thumbnail = Set(thumbnail);
        }
        if let Some(class_id) = self.class_id {
            record.class_id = Set(class_id);
        }
        if let Some(order) = self.order {
            record.order = Set(order);
        }
        if let Some(description) = self.description {
            record.description = Set(Some(description));
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LecturePageParams {
    pub title: Option<String>,
    pub class_id: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<Lecture> for LecturePageParams {
    fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.title.as_ref().map(|t| LectureColumn::Title.eq(t.as_str())))
            .add_option(self.class_id.as_ref().map(|id| LectureColumn::ClassId.eq(id.as_str())))
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}

// ---------------------------------------------------------------------------
// Lesson
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
    #[validate(length(min = 1, message = "lectureId is required"))]
    pub lecture_id: String,
    pub order: i32,
    pub description: Option<String>,
}

impl NewRecord<Lesson> for NewLesson {
    fn parent(&self) -> Option<(EntityKind, &str)> {
        Some((EntityKind::Lecture, self.lecture_id.as_str()))
    }

    fn into_record(self) -> LessonActiveModel {
        let rating = rand::thread_rng().gen_range(LESSON_RATING_MIN..=LESSON_RATING_MAX);
        LessonActiveModel {
            title: Set(self.title),
            url: Set(self.url),
            lecture_id: Set(self.lecture_id),
            order: Set(self.order),
            description: Set(self.description),
            rating: Set(rating),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLesson {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub url: Option<String>,
    pub lecture_id: Option<String>,
    pub order: Option<i32>,
    pub description: Option<String>,
}

impl MergePatch<Lesson> for UpdateLesson {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.lecture_id.is_none()
            && self.order.is_none()
            && self.description.is_none()
    }

    fn merge_into(self, record: &mut LessonActiveModel) {
        if let Some(title) = self.title {
            record.title = Set(title);
        }
        if let Some(url) = self.url {
            record.url = Set(url);
        }
        if let Some(lecture_id) = self.lecture_id {
            record.lecture_id = Set(lecture_id);
        }
        if let Some(order) = self.order {
            record.order = Set(order);
        }
        if let Some(description) = self.description {
            record.description = Set(Some(description));
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LessonPageParams {
    pub title: Option<String>,
    pub lecture_id: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<Lesson> for LessonPageParams {
    fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.title.as_ref().map(|t| LessonColumn::Title.eq(t.as_str())))
            .add_option(self.lecture_id.as_ref().map(|id| LessonColumn::LectureId.eq(id.as_str())))
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}

// ---------------------------------------------------------------------------
// Study levels tree
// ---------------------------------------------------------------------------

/// Which classes a requester may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// Administrators see every class.
    Unrestricted,
    /// Other users see classes whose minimum age is at most this value.
    Age(i32),
}

impl Viewer {
    pub fn can_see(&self, class_age: i32) -> bool {
        match self {
            Viewer::Unrestricted => true,
            Viewer::Age(age) => class_age <= *age,
        }
    }
}

impl From<&UserModel> for Viewer {
    fn from(user: &UserModel) -> Self {
        match user.role {
            Role::Admin => Viewer::Unrestricted,
            // no recorded age only unlocks age-0 classes
            Role::User => Viewer::Age(user.age.unwrap_or(0)),
        }
    }
}

impl TreeNode for BlockModel {
    type Id = ();

    fn parent_id(&self) {}

    fn sort_key(&self) -> i32 {
        self.order
    }
}

impl TreeNode for ClassModel {
    type Id = String;

    fn parent_id(&self) -> String {
        self.block_id.clone()
    }

    fn sort_key(&self) -> i32 {
        self.order
    }
}

impl TreeNode for LectureModel {
    type Id = String;

    fn parent_id(&self) -> String {
        self.class_id.clone()
    }

    fn sort_key(&self) -> i32 {
        self.order
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureNode {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub thumbnail: String,
}

impl From<LectureModel> for LectureNode {
    fn from(lecture: LectureModel) -> Self {
        LectureNode {
            id: lecture.id,
            title: lecture.title,
            order: lecture.order,
            thumbnail: lecture.thumbnail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassNode {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub lectures: Vec<LectureNode>,
}

impl From<ClassModel> for ClassNode {
    fn from(class: ClassModel) -> Self {
        ClassNode {
            id: class.id,
            title: class.title,
            order: class.order,
            lectures: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockNode {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub classes: Vec<ClassNode>,
}

impl From<BlockModel> for BlockNode {
    fn from(block: BlockModel) -> Self {
        BlockNode {
            id: block.id,
            title: block.title,
            order: block.order,
            classes: Vec::new(),
        }
    }
}
