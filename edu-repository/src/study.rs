use edu_error::StorageResult;
use edu_models::entities::prelude::{
    Block, BlockColumn, BlockModel, Class, ClassColumn, ClassModel, Lecture, LectureColumn,
    LectureModel, Lesson, LessonColumn, LessonModel,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

/// Bulk reads behind the study levels tree.
pub struct StudyRepository;

impl StudyRepository {
    pub async fn find_blocks<C>(db: &C) -> StorageResult<Vec<BlockModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Block::find()
            .order_by_asc(BlockColumn::Order)
            .all(db)
            .await?)
    }

    pub async fn find_classes_of_blocks<C>(
        block_ids: Vec<String>,
        db: &C,
    ) -> StorageResult<Vec<ClassModel>>
    where
        C: ConnectionTrait,
    {
        if block_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Class::find()
            .filter(ClassColumn::BlockId.is_in(block_ids))
            .order_by_asc(ClassColumn::Order)
            .all(db)
            .await?)
    }

    pub async fn find_lectures_of_classes<C>(
        class_ids: Vec<String>,
        db: &C,
    ) -> StorageResult<Vec<LectureModel>>
    where
        C: ConnectionTrait,
    {
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Lecture::find()
            .filter(LectureColumn::ClassId.is_in(class_ids))
            .order_by_asc(LectureColumn::Order)
            .all(db)
            .await?)
    }

    pub async fn find_lessons_of_lecture<C>(
        lecture_id: &str,
        db: &C,
    ) -> StorageResult<Vec<LessonModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Lesson::find()
            .filter(LessonColumn::LectureId.eq(lecture_id))
            .order_by_asc(LessonColumn::Order)
            .all(db)
            .await?)
    }
}
