pub use super::block::{
    ActiveModel as BlockActiveModel, Column as BlockColumn, Entity as Block, Model as BlockModel,
};
pub use super::class::{
    ActiveModel as ClassActiveModel, Column as ClassColumn, Entity as Class, Model as ClassModel,
};
pub use super::exercise::{
    ActiveModel as ExerciseActiveModel, Column as ExerciseColumn, Entity as Exercise,
    Model as ExerciseModel,
};
pub use super::exercise_history::{
    ActiveModel as ExerciseHistoryActiveModel, Column as ExerciseHistoryColumn,
    Entity as ExerciseHistory, Model as ExerciseHistoryModel,
};
pub use super::lecture::{
    ActiveModel as LectureActiveModel, Column as LectureColumn, Entity as Lecture,
    Model as LectureModel,
};
pub use super::lesson::{
    ActiveModel as LessonActiveModel, Column as LessonColumn, Entity as Lesson,
    Model as LessonModel,
};
pub use super::news::{
    ActiveModel as NewsActiveModel, Column as NewsColumn, Entity as News, Model as NewsModel,
};
pub use super::question_exam::{
    ActiveModel as QuestionExamActiveModel, Column as QuestionExamColumn, Entity as QuestionExam,
    Model as QuestionExamModel,
};
pub use super::user::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as User, Model as UserModel,
};
pub use super::user_request::{
    ActiveModel as UserRequestActiveModel, Column as UserRequestColumn, Entity as UserRequest,
    Model as UserRequestModel,
};
pub use super::{Resource, StringList};
