use edu_error::StorageResult;
use edu_models::entities::prelude::{
    ExerciseHistory, ExerciseHistoryActiveModel, ExerciseHistoryColumn, ExerciseHistoryModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

pub struct ExerciseHistoryRepository;

impl ExerciseHistoryRepository {
    pub async fn create<C>(
        user_id: &str,
        exercise_id: &str,
        score: i32,
        db: &C,
    ) -> StorageResult<ExerciseHistoryModel>
    where
        C: ConnectionTrait,
    {
        let history = ExerciseHistoryActiveModel {
            user_id: Set(user_id.to_string()),
            exercise_id: Set(exercise_id.to_string()),
            score: Set(score),
            ..Default::default()
        };
        Ok(history.insert(db).await?)
    }

    pub async fn count_attempts<C>(user_id: &str, exercise_id: &str, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(ExerciseHistory::find()
            .filter(ExerciseHistoryColumn::UserId.eq(user_id))
            .filter(ExerciseHistoryColumn::ExerciseId.eq(exercise_id))
            .count(db)
            .await?)
    }
}
