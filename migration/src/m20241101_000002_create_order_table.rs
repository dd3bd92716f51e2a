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
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

/// Statement creating the `orders` table. Timestamps carry a time zone to match the
/// `DateTimeUtc` entity fields.
pub(crate) fn create_statement() -> TableCreateStatement {
    Table::create()
        .table(Order::Table)
        .if_not_exists()
        .col(pk_auto(Order::Id))
        .col(string(Order::CustomerName))
        .col(string(Order::Status).default("pending"))
        .col(double(Order::TotalAmount).default(0.0))
        .col(
            timestamp_with_time_zone(Order::CreatedAt)
                .default(Expr::current_timestamp())
                .not_null(),
        )
        .col(
            timestamp_with_time_zone(Order::UpdatedAt)
                .default(Expr::current_timestamp())
                .not_null(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    CustomerName,
    Status,
    TotalAmount,
    CreatedAt,
    UpdatedAt,
}
