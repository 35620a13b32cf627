use super::TableInitializer;
use sea_orm::sea_query::{
    ColumnDef, Index, IndexCreateStatement, IntoIden, Table, TableCreateStatement,
};
use sea_orm::{sea_query::DynIden, DeriveIden};

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Phone,
    Password,
    Role,
    Name,
    Email,
    Birth,
    Address,
    ClassName,
    District,
    Commune,
    Province,
    Gender,
    Age,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserRequest {
    Table,
    Id,
    Name,
    Phone,
    Birth,
    Address,
    ClassName,
    SupportDesc,
    CreatedAt,
    UpdatedAt,
}

pub struct UserInitializer;

impl TableInitializer for UserInitializer {
    fn table(&self) -> DynIden {
        User::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(User::Table)
            .if_not_exists()
            .col(ColumnDef::new(User::Id).string_len(36).not_null().primary_key())
            .col(ColumnDef::new(User::Phone).string_len(32).not_null())
            .col(ColumnDef::new(User::Password).string_len(255).not_null())
            .col(
                ColumnDef::new(User::Role)
                    .string_len(16)
                    .not_null()
                    .default("user"),
            )
            .col(ColumnDef::new(User::Name).string_len(128))
            .col(ColumnDef::new(User::Email).string_len(255))
            .col(ColumnDef::new(User::Birth).string_len(32))
            .col(ColumnDef::new(User::Address).string())
            .col(ColumnDef::new(User::ClassName).string_len(64))
            .col(ColumnDef::new(User::District).string_len(128))
            .col(ColumnDef::new(User::Commune).string_len(128))
            .col(ColumnDef::new(User::Province).string_len(128))
            .col(ColumnDef::new(User::Gender).string_len(16))
            .col(ColumnDef::new(User::Age).integer())
            .col(ColumnDef::new(User::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(User::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("uk_user_phone")
            .table(User::Table)
            .col(User::Phone)
            .unique()
            .to_owned()]
    }
}

pub struct UserRequestInitializer;

impl TableInitializer for UserRequestInitializer {
    fn table(&self) -> DynIden {
        UserRequest::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(UserRequest::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(UserRequest::Id)
                    .string_len(36)
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(UserRequest::Name).string_len(128).not_null())
            .col(ColumnDef::new(UserRequest::Phone).string_len(32).not_null())
            .col(ColumnDef::new(UserRequest::Birth).string_len(32))
            .col(ColumnDef::new(UserRequest::Address).string())
            .col(ColumnDef::new(UserRequest::ClassName).string_len(64))
            .col(ColumnDef::new(UserRequest::SupportDesc).text())
            .col(ColumnDef::new(UserRequest::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(UserRequest::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }

    fn to_create_indexes_stmt(&self) -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .if_not_exists()
            .name("uk_user_request_phone")
            .table(UserRequest::Table)
            .col(UserRequest::Phone)
            .unique()
            .to_owned()]
    }
}
