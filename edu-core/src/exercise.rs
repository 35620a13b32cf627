use crate::crud::ResourceService;
use edu_error::{web::WebError, WebResult};
use edu_models::{
    domain::prelude::{
        AnswerSubmission, ExerciseDetail, ExercisePageParams, NewExercise, PageResult,
        ResourceFilter, ScoreResult, UpdateExercise,
    },
    entities::prelude::{Exercise, ExerciseModel, QuestionExamModel},
    enums::common::EntityKind,
};
use edu_repository::{
    exists, ExerciseHistoryRepository, QuestionRepository, ResourceRepository,
};
use sea_orm::{ConnectionTrait, IntoActiveModel, TransactionTrait};
use std::collections::HashMap;
use tracing::{info, instrument};

/// Counts submissions whose answer equals the stored answer of their question.
///
/// Submissions naming a question outside `questions` score nothing.
pub fn score_submissions(questions: &[QuestionExamModel], submissions: &[AnswerSubmission]) -> i32 {
    let answers: HashMap<&str, &str> = questions
        .iter()
        .map(|q| (q.id.as_str(), q.answer.as_str()))
        .collect();
    submissions
        .iter()
        .filter(|s| answers.get(s.question_id.as_str()) == Some(&s.answer.as_str()))
        .count() as i32
}

pub struct ExerciseService;

impl ExerciseService {
    /// Stores the questions, then the exercise pointing at them, in one transaction.
    #[instrument(name = "exercise-create", skip_all, fields(lesson_id = %new.lesson_id))]
    pub async fn create<C>(new: NewExercise, db: &C) -> WebResult<ExerciseDetail>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        if !exists(EntityKind::Lesson, &new.lesson_id, db).await? {
            return Err(WebError::NotFound(EntityKind::Lesson.not_found()));
        }

        let detail = db
            .transaction::<_, ExerciseDetail, WebError>(|txn| {
                Box::pin(async move {
                    let mut new = new;
                    let questions = std::mem::take(&mut new.questions)
                        .into_iter()
                        .map(Into::into)
                        .collect();
                    let question_ids = QuestionRepository::create_many(questions, txn).await?;
                    let question_list = QuestionRepository::find_by_ids(&question_ids, txn).await?;
                    let exercise =
                        ResourceRepository::<Exercise>::create(new.into_record(question_ids), txn)
                            .await?;
                    Ok(ExerciseDetail {
                        exercise,
                        question_list,
                    })
                })
            })
            .await?;

        info!(id = %detail.exercise.id, questions = detail.question_list.len(), "Exercise created");
        Ok(detail)
    }

    pub async fn get<C>(id: &str, db: &C) -> WebResult<ExerciseDetail>
    where
        C: ConnectionTrait,
    {
        let exercise = ResourceService::<Exercise>::fetch(id, db).await?;
        let question_list = QuestionRepository::find_by_ids(&exercise.question_ids.0, db).await?;
        Ok(ExerciseDetail {
            exercise,
            question_list,
        })
    }

    /// One page of exercises, each with its questions attached.
    pub async fn list<C>(
        params: &ExercisePageParams,
        db: &C,
    ) -> WebResult<PageResult<ExerciseDetail>>
    where
        C: ConnectionTrait,
    {
        let page = ResourceRepository::<Exercise>::page(params.condition(), params.options(), db)
            .await?;
        let all_ids: Vec<String> = page
            .results
            .iter()
            .flat_map(|e| e.question_ids.0.iter().cloned())
            .collect();
        let questions: HashMap<String, QuestionExamModel> =
            QuestionRepository::find_by_ids(&all_ids, db)
                .await?
                .into_iter()
                .map(|q| (q.id.clone(), q))
                .collect();

        Ok(page.map(|exercise| {
            let question_list = exercise
                .question_ids
                .0
                .iter()
                .filter_map(|id| questions.get(id).cloned())
                .collect();
            ExerciseDetail {
                exercise,
                question_list,
            }
        }))
    }

    /// Replaces the question set and any header fields present in `patch`.
    #[instrument(name = "exercise-update", skip(patch, db))]
    pub async fn update<C>(id: &str, patch: UpdateExercise, db: &C) -> WebResult<ExerciseDetail>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let current = ResourceService::<Exercise>::fetch(id, db).await?;

        let detail = db
            .transaction::<_, ExerciseDetail, WebError>(|txn| {
                Box::pin(async move {
                    let mut patch = patch;
                    QuestionRepository::delete_by_ids(&current.question_ids.0, txn).await?;
                    let questions = std::mem::take(&mut patch.questions)
                        .into_iter()
                        .map(Into::into)
                        .collect();
                    let question_ids = QuestionRepository::create_many(questions, txn).await?;
                    let question_list = QuestionRepository::find_by_ids(&question_ids, txn).await?;

                    let mut record = current.into_active_model();
                    patch.merge_into(&mut record, question_ids);
                    let exercise = ResourceRepository::<Exercise>::update(record, txn).await?;
                    Ok(ExerciseDetail {
                        exercise,
                        question_list,
                    })
                })
            })
            .await?;

        info!("Exercise updated");
        Ok(detail)
    }

    /// Deletes the exercise row only. Its questions stay behind.
    pub async fn delete<C>(id: &str, db: &C) -> WebResult<ExerciseModel>
    where
        C: ConnectionTrait,
    {
        ResourceService::<Exercise>::delete(id, db).await
    }

    /// Scores one attempt and records it in the exercise history.
    #[instrument(name = "exercise-calculate", skip(submissions, db))]
    pub async fn calculate<C>(
        exercise_id: &str,
        requester_id: &str,
        submissions: &[AnswerSubmission],
        db: &C,
    ) -> WebResult<ScoreResult>
    where
        C: ConnectionTrait,
    {
        let exercise = ResourceService::<Exercise>::fetch(exercise_id, db).await?;
        let questions = QuestionRepository::find_by_ids(&exercise.question_ids.0, db).await?;
        let score = score_submissions(&questions, submissions);

        ExerciseHistoryRepository::create(requester_id, &exercise.id, score, db).await?;
        info!(score, total = exercise.question_ids.len(), "Exercise scored");

        Ok(ScoreResult {
            exercise_id: exercise.id,
            score,
            total_score: exercise.question_ids.len() as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_models::entities::prelude::StringList;

    fn question(id: &str, answer: &str) -> QuestionExamModel {
        QuestionExamModel {
            id: id.into(),
            title: format!("Question {id}"),
            multi_choices: StringList(vec!["A".into(), "B".into()]),
            answer: answer.into(),
            description: None,
            order: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn submit(question_id: &str, answer: &str) -> AnswerSubmission {
        AnswerSubmission {
            question_id: question_id.into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn one_right_one_wrong() {
        let questions = [question("q1", "A"), question("q2", "B")];
        let score = score_submissions(&questions, &[submit("q1", "A"), submit("q2", "A")]);
        assert_eq!(score, 1);
    }

    #[test]
    fn unknown_questions_are_ignored() {
        let questions = [question("q1", "A")];
        let score = score_submissions(&questions, &[submit("nope", "A"), submit("q1", "A")]);
        assert_eq!(score, 1);
    }

    #[test]
    fn answers_compare_exactly() {
        let questions = [question("q1", "A")];
        assert_eq!(score_submissions(&questions, &[submit("q1", "a")]), 0);
        assert_eq!(score_submissions(&questions, &[submit("q1", "A ")]), 0);
        assert_eq!(score_submissions(&questions, &[]), 0);
    }
}
