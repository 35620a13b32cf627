//! Business rules of the learning platform.
//!
//! Services are stateless unit structs. Every operation receives the
//! connection it should run on, so callers decide the transaction scope.

pub mod account;
pub mod crud;
pub mod exercise;
pub mod study;

pub use account::AccountService;
pub use crud::ResourceService;
pub use exercise::ExerciseService;
pub use study::StudyService;
