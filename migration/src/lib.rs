pub use sea_orm_migration::prelude::*;

mod m20241101_000001_create_product_table;
mod m20241101_000002_create_order_table;
mod m20241101_000003_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_create_product_table::Migration),
            Box::new(m20241101_000002_create_order_table::Migration),
            Box::new(m20241101_000003_create_order_item_table::Migration),
        ]
    }
}
