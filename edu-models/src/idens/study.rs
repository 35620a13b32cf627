use super::TableInitializer;
use sea_orm::sea_query::{
    ColumnDef, Index, IndexCreateStatement, IntoIden, Table, TableCreateStatement,
};
use sea_orm::{sea_query::DynIden, DeriveIden};

#[derive(DeriveIden)]
enum Block {
    Table,
    Id,
    Title,
    Order,
    ClassIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Class {
    Table,
    Id,
    Title,
    BlockId,
    Age,
    LectureIds,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Lecture {
    Table,
    Id,
    Title,
    Thumbnail,
    ClassId,
    LessonIds,
    Order,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Lesson {
    Table,
    Id,
    Title,
    Url,
    LectureId,
    Order,
    Description,
    Rating,
    CreatedAt,
    UpdatedAt,
}

pub struct BlockInitializer;

impl TableInitializer for BlockInitializer {
    fn table(&self) -> DynIden {
        Block::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(Block::Table)
            .if_not_exists()
            .col(ColumnDef::new(Block::Id).string_len(36).not_null().primary_key())
            .col(ColumnDef::new(Block::Title).string().not_null())
            .col(ColumnDef::new(Block::Order).integer().not_null())
            .col(ColumnDef::new(Block::ClassIds).json().not_null())
            .col(ColumnDef::new(Block::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(Block::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("uk_block_order")
            .table(Block::Table)
            .col(Block::Order)
            .unique()
            .to_owned()]
    }
}

pub struct ClassInitializer;

impl TableInitializer for ClassInitializer {
    fn table(&self) -> DynIden {
        Class::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(Class::Table)
            .if_not_exists()
            .col(ColumnDef::new(Class::Id).string_len(36).not_null().primary_key())
            .col(ColumnDef::new(Class::Title).string().not_null())
            .col(ColumnDef::new(Class::BlockId).string_len(36).not_null())
            .col(ColumnDef::new(Class::Age).integer().not_null())
            .col(ColumnDef::new(Class::LectureIds).json().not_null())
            .col(ColumnDef::new(Class::Order).integer().not_null())
            .col(ColumnDef::new(Class::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(Class::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("idx_class_block_id")
            .table(Class::Table)
            .col(Class::BlockId)
            .to_owned()]
    }
}

pub struct LectureInitializer;

impl TableInitializer for LectureInitializer {
    fn table(&self) -> DynIden {
        Lecture::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(Lecture::Table)
            .if_not_exists()
            .col(ColumnDef::new(Lecture::Id).string_len(36).not_null().primary_key())
            .col(ColumnDef::new(Lecture::Title).string().not_null())
            .col(ColumnDef::new(Lecture::Thumbnail).string().not_null())
            .col(ColumnDef::new(Lecture::ClassId).string_len(36).not_null())
            .col(ColumnDef::new(Lecture::LessonIds).json().not_null())
            .col(ColumnDef::new(Lecture::Order).integer().not_null())
            .col(ColumnDef::new(Lecture::Description).text())
            .col(ColumnDef::new(Lecture::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(Lecture::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("idx_lecture_class_id")
            .table(Lecture::Table)
            .col(Lecture::ClassId)
            .to_owned()]
    }
}

pub struct LessonInitializer;

impl TableInitializer for LessonInitializer {
    fn table(&self) -> DynIden {
        Lesson::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(Lesson::Table)
            .if_not_exists()
            .col(ColumnDef::new(Lesson::Id).string_len(36).not_null().primary_key())
            .col(ColumnDef::new(Lesson::Title).string().not_null())
            .col(ColumnDef::new(Lesson::Url).string().not_null())
            .col(ColumnDef::new(Lesson::LectureId).string_len(36).not_null())
            .col(ColumnDef::new(Lesson::Order).integer().not_null())
            .col(ColumnDef::new(Lesson::Description).text())
            .col(ColumnDef::new(Lesson::Rating).double().not_null())
            .col(ColumnDef::new(Lesson::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(Lesson::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("idx_lesson_lecture_id")
            .table(Lesson::Table)
            .col(Lesson::LectureId)
            .to_owned()]
    }
}
