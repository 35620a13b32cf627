use edu_error::StorageResult;
use edu_models::entities::prelude::{
    QuestionExam, QuestionExamActiveModel, QuestionExamColumn, QuestionExamModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;

pub struct QuestionRepository;

impl QuestionRepository {
    /// Inserts each question and returns the new ids in submission order.
    pub async fn create_many<C>(
        questions: Vec<QuestionExamActiveModel>,
        db: &C,
    ) -> StorageResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        let mut ids = Vec::with_capacity(questions.len());
        for question in questions {
            ids.push(question.insert(db).await?.id);
        }
        Ok(ids)
    }

    /// Loads questions following the order of `ids`. Missing ids are skipped.
    pub async fn find_by_ids<C>(ids: &[String], db: &C) -> StorageResult<Vec<QuestionExamModel>>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut found: HashMap<String, QuestionExamModel> = QuestionExam::find()
            .filter(QuestionExamColumn::Id.is_in(ids.iter().map(String::as_str)))
            .all(db)
            .await?
            .into_iter()
            .map(|q| (q.id.clone(), q))
            .collect();
        Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
    }

    pub async fn delete_by_ids<C>(ids: &[String], db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(0);
        }
        Ok(QuestionExam::delete_many()
            .filter(QuestionExamColumn::Id.is_in(ids.iter().map(String::as_str)))
            .exec(db)
            .await?
            .rows_affected)
    }
}
