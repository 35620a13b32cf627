use super::TableInitializer;
use sea_orm::sea_query::{ColumnDef, IntoIden, Table, TableCreateStatement};
use sea_orm::{sea_query::DynIden, DeriveIden};

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Title,
    Thumbnail,
    Content,
    CreatedAt,
    UpdatedAt,
}

pub struct NewsInitializer;

impl TableInitializer for NewsInitializer {
    fn table(&self) -> DynIden {
        News::Table.into_iden()
    }

    fn to_create_table_stmt(&self) -> TableCreateStatement {
        Table::create()
            .table(News::Table)
            .if_not_exists()
            .col(ColumnDef::new(News::Id).string_len(36).not_null().primary_key())
            .col(ColumnDef::new(News::Title).string().not_null())
            .col(ColumnDef::new(News::Thumbnail).string().not_null())
            .col(ColumnDef::new(News::Content).text().not_null())
            .col(ColumnDef::new(News::CreatedAt).timestamp_with_time_zone())
            .col(ColumnDef::new(News::UpdatedAt).timestamp_with_time_zone())
            .to_owned()
    }
}
