pub mod exercise_history;
pub mod question;
pub mod resource;
pub mod study;
pub mod user;
pub mod user_request;

pub use exercise_history::ExerciseHistoryRepository;
pub use question::QuestionRepository;
pub use resource::{exists, ResourceRepository};
pub use study::StudyRepository;
pub use user::UserRepository;
pub use user_request::UserRequestRepository;
