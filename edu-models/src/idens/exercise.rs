use super::TableInitializer;
use sea_orm::sea_query::{
    ColumnDef, Index, IndexCreateStatement, IntoIden, Table, TableCreateStatement,
};
use sea_orm::{sea_query::DynIden, DeriveIden};

#[derive(DeriveIden)]
enum QuestionExam {
    Table,
    Id,
    Title,
    MultiChoices,
    Answer,
    Description,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Exercise {
    Table,
    Id,
    Title,
    LessonId,
    Order,
    QuestionIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExerciseHistory {
    Table,
    Id,
    UserId,
    ExerciseId,
    Score,
    CreatedAt,
    UpdatedAt,
}

pub struct QuestionExamInitializer;

impl TableInitializer for QuestionExamInitializer {
    fn table(&self) -> DynIden {
        QuestionExam::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(QuestionExam::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(QuestionExam::Id)
                    .string_len(36)
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(QuestionExam::Title).text().not_null())
            .col(ColumnDef::new(QuestionExam::MultiChoices).json().not_null())
            .col(ColumnDef::new(QuestionExam::Answer).string().not_null())
            .col(ColumnDef::new(QuestionExam::Description).text())
            .col(ColumnDef::new(QuestionExam::Order).integer())
            .col(ColumnDef::new(QuestionExam::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(QuestionExam::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }
}

pub struct ExerciseInitializer;

impl TableInitializer for ExerciseInitializer {
    fn table(&self) -> DynIden {
        Exercise::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(Exercise::Table)
            .if_not_exists()
            .col(ColumnDef::new(Exercise::Id).string_len(36).not_null().primary_key())
            .col(ColumnDef::new(Exercise::Title).string().not_null())
            .col(ColumnDef::new(Exercise::LessonId).string_len(36).not_null())
            .col(ColumnDef::new(Exercise::Order).integer())
            .col(ColumnDef::new(Exercise::QuestionIds).json().not_null())
            .col(ColumnDef::new(Exercise::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(Exercise::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("idx_exercise_lesson_id")
            .table(Exercise::Table)
            .col(Exercise::LessonId)
            .to_owned()]
    }
}

pub struct ExerciseHistoryInitializer;

impl TableInitializer for ExerciseHistoryInitializer {
    fn table(&self) -> DynIden {
        ExerciseHistory::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(ExerciseHistory::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(ExerciseHistory::Id)
                    .string_len(36)
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(ExerciseHistory::UserId).string_len(36).not_null())
            .col(
                ColumnDef::new(ExerciseHistory::ExerciseId)
                    .string_len(36)
                    .not_null(),
            )
            .col(ColumnDef::new(ExerciseHistory::Score).integer().not_null())
            .col(ColumnDef::new(ExerciseHistory::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(ExerciseHistory::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("idx_exercise_history_user_exercise")
            .table(ExerciseHistory::Table)
            .col(ExerciseHistory::UserId)
            .col(ExerciseHistory::ExerciseId)
            .to_owned()]
    }
}
