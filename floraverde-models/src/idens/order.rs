use crate::initializer::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    CustomerName,
    CustomerEmail,
    Address,
    Total,
    CreatedAt,
}

impl TableInitializer for Order {
    fn order(&self) -> i32 {
        super::INIT_ORDER_ORDER
    }

    fn name(&self) -> &str {
        "orders"
    }

    fn to_create_table_stmt(&self, _: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(Order::Table)
            .if_not_exists()
            .col(pk_auto(Order::Id))
            .col(
                ColumnDef::new(Order::CustomerName)
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Order::CustomerEmail)
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Order::Address)
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Order::Total)
                    .big_integer()
                    .not_null()
                    .default(0)
                    .comment("Client-supplied total, smallest currency unit"),
            )
            .col(
                ColumnDef::new(Order::CreatedAt)
                    .timestamp()
                    .default(Expr::current_timestamp()),
            )
            .to_owned()
    }

    fn to_drop_table_stmt(&self, _: DatabaseBackend) -> TableDropStatement {
        Table::drop().table(Order::Table).if_exists().to_owned()
    }

    fn to_create_indexes_stmt(&self, _: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
        None
    }
}
