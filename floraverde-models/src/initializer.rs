use crate::idens;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

/// One backing table: its schema statements plus its creation order.
/// The migration in the storage crate drives every table through this
/// trait so the schema has a single source of truth.
pub trait TableInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;
}

pub fn initializers() -> Vec<Box<dyn TableInitializer>> {
    let mut initializers: Vec<Box<dyn TableInitializer>> = vec![
        Box::new(idens::category::Category::Table),
        Box::new(idens::product::Product::Table),
        Box::new(idens::order::Order::Table),
        Box::new(idens::order_item::OrderItem::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}
