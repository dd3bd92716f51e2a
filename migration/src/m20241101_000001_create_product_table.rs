use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_statement()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

/// Statement creating the `products` table. Timestamps carry a time zone to match the
/// `DateTimeUtc` entity fields.
pub(crate) fn create_statement() -> TableCreateStatement {
    Table::create()
        .table(Product::Table)
        .if_not_exists()
        .col(pk_auto(Product::Id))
        .col(string(Product::Name))
        .col(text_null(Product::Description))
        .col(double(Product::Price))
        .col(integer(Product::Stock).default(0))
        .col(
            timestamp_with_time_zone(Product::CreatedAt)
                .default(Expr::current_timestamp())
                .not_null(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Product {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    Name,
    Description,
    Price,
    Stock,
    CreatedAt,
}
