use super::{order::Order, product::Product};
use crate::initializer::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum OrderItem {
    #[sea_orm(iden = "order_items")]
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
}

impl TableInitializer for OrderItem {
    fn order(&self) -> i32 {
        super::INIT_ORDER_ITEM_ORDER
    }

    fn name(&self) -> &str {
        "order_items"
    }

    fn to_create_table_stmt(&self, _: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(OrderItem::Table)
            .if_not_exists()
            .col(pk_auto(OrderItem::Id))
            .col(ColumnDef::new(OrderItem::OrderId).integer().not_null())
            .col(ColumnDef::new(OrderItem::ProductId).integer().not_null())
            .col(
                ColumnDef::new(OrderItem::Quantity)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_order_items_order_id")
                    .from(OrderItem::Table, OrderItem::OrderId)
                    .to(Order::Table, Order::Id),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_order_items_product_id")
                    .from(OrderItem::Table, OrderItem::ProductId)
                    .to(Product::Table, Product::Id),
            )
            .to_owned()
    }

    fn to_drop_table_stmt(&self, _: DatabaseBackend) -> TableDropStatement {
        Table::drop().table(OrderItem::Table).if_exists().to_owned()
    }

    fn to_create_indexes_stmt(&self, _: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
        Some(vec![Index::create()
            .name("idx_order_items_order_id")
            .table(OrderItem::Table)
            .col(OrderItem::OrderId)
            .to_owned()])
    }
}
