//! Table layouts consumed by the storage migrations.

mod exercise;
mod news;
mod study;
mod user;

use sea_orm::sea_query::{IndexCreateStatement, Table, TableCreateStatement, TableDropStatement};
use sea_orm::sea_query::DynIden;

pub use exercise::{ExerciseInitializer, ExerciseHistoryInitializer, QuestionExamInitializer};
pub use news::NewsInitializer;
pub use study::{BlockInitializer, ClassInitializer, LectureInitializer, LessonInitializer};
pub use user::{UserInitializer, UserRequestInitializer};

/// Describes how one table is created and torn down.
pub trait TableInitializer: Send + Sync {
    fn table(&self) -> DynIden;

    fn to_create_table_stmt(&self) -> TableCreateStatement;

    fn to_drop_table_stmt(&self) -> TableDropStatement {
        Table::drop().table(self.table()).if_exists().to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        Vec::new()
    }
}

/// All tables in creation order.
pub fn initializers() -> Vec<Box<dyn TableInitializer>> {
    vec![
        Box::new(BlockInitializer),
        Box::new(ClassInitializer),
        Box::new(LectureInitializer),
        Box::new(LessonInitializer),
        Box::new(QuestionExamInitializer),
        Box::new(ExerciseInitializer),
        Box::new(ExerciseHistoryInitializer),
        Box::new(NewsInitializer),
        Box::new(UserInitializer),
        Box::new(UserRequestInitializer),
    ]
}
