use super::{common::QueryOptions, resource::ResourceFilter};
use crate::entities::prelude::{
    Exercise, ExerciseActiveModel, ExerciseColumn, ExerciseModel, QuestionExamActiveModel,
    QuestionExamModel, StringList,
};
use sea_orm::{ColumnTrait, Condition, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub multi_choices: Vec<String>,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    pub description: Option<String>,
    pub order: Option<i32>,
}

impl From<NewQuestion> for QuestionExamActiveModel {
    fn from(question: NewQuestion) -> Self {
        QuestionExamActiveModel {
            title: Set(question.title),
            multi_choices: Set(question.multi_choices.into()),
            answer: Set(question.answer),
            description: Set(question.description),
            order: Set(question.order),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "lessonId is required"))]
    pub lesson_id: String,
    pub order: Option<i32>,
    #[validate(nested)]
    pub questions: Vec<NewQuestion>,
}

impl NewExercise {
    /// Builds the exercise row once its questions have been stored.
    pub fn into_record(self, question_ids: Vec<String>) -> ExerciseActiveModel {
        ExerciseActiveModel {
            title: Set(self.title),
            lesson_id: Set(self.lesson_id),
            order: Set(self.order),
            question_ids: Set(StringList(question_ids)),
            ..Default::default()
        }
    }
}

/// Replaces the question set and optionally the exercise header fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExercise {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "lessonId must not be empty"))]
    pub lesson_id: Option<String>,
    pub order: Option<i32>,
    #[validate(nested)]
    pub questions: Vec<NewQuestion>,
}

impl UpdateExercise {
    pub fn merge_into(self, record: &mut ExerciseActiveModel, question_ids: Vec<String>) {
        if let Some(title) = self.title {
            record.title = Set(title);
        }
        if let Some(lesson_id) = self.lesson_id {
            record.lesson_id = Set(lesson_id);
        }
        if let Some(order) = self.order {
            record.order = Set(Some(order));
        }
        record.question_ids = Set(StringList(question_ids));
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePageParams {
    pub lesson_id: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<Exercise> for ExercisePageParams {
    fn condition(&self) -> Condition {
        Condition::all().add_option(
            self.lesson_id
                .as_ref()
                .map(|id| ExerciseColumn::LessonId.eq(id.as_str())),
        )
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}

/// An exercise with its questions resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDetail {
    #[serde(flatten)]
    pub exercise: ExerciseModel,
    pub question_list: Vec<QuestionExamModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    #[validate(length(min = 1, message = "questionId is required"))]
    pub question_id: String,
    pub answer: String,
}

/// Request body of a scoring call: a bare JSON array of submissions.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct AnswerSheet {
    #[validate(nested)]
    pub answers: Vec<AnswerSubmission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub exercise_id: String,
    pub score: i32,
    pub total_score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_sheet_is_a_bare_array() {
        let sheet: AnswerSheet = serde_json::from_str(
            r#"[{"questionId":"q1","answer":"A"},{"questionId":"q2","answer":"B"}]"#,
        )
        .unwrap();
        assert_eq!(sheet.answers.len(), 2);
        assert_eq!(sheet.answers[1].question_id, "q2");
    }

    #[test]
    fn exercise_detail_flattens_the_exercise() {
        let detail = ExerciseDetail {
            exercise: ExerciseModel {
                id: "e1".into(),
                title: "Quiz".into(),
                lesson_id: "l1".into(),
                order: None,
                question_ids: StringList(vec!["q1".into()]),
                created_at: None,
                updated_at: None,
            },
            question_list: vec![],
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], "e1");
        assert_eq!(value["lessonId"], "l1");
        assert_eq!(value["questionIds"][0], "q1");
        assert!(value["questionList"].as_array().unwrap().is_empty());
    }
}
