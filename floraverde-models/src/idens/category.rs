use crate::initializer::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Category {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    Name,
}

impl TableInitializer for Category {
    fn order(&self) -> i32 {
        super::INIT_CATEGORY_ORDER
    }

    fn name(&self) -> &str {
        "categories"
    }

    fn to_create_table_stmt(&self, _: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(Category::Table)
            .if_not_exists()
            .col(pk_auto(Category::Id))
            .col(
                ColumnDef::new(Category::Name)
                    .string()
                    .not_null()
                    .unique_key()
                    .comment("Display name"),
            )
            .to_owned()
    }

    fn to_drop_table_stmt(&self, _: DatabaseBackend) -> TableDropStatement {
        Table::drop().table(Category::Table).if_exists().to_owned()
    }

    fn to_create_indexes_stmt(&self, _: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
        None
    }
}
