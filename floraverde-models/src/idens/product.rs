use super::category::Category;
use crate::initializer::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Product {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    Name,
    Description,
    Price,
    ImageUrl,
    Watering,
    Light,
    CategoryId,
    Stock,
}

impl TableInitializer for Product {
    fn order(&self) -> i32 {
        super::INIT_PRODUCT_ORDER
    }

    fn name(&self) -> &str {
        "products"
    }

    fn to_create_table_stmt(&self, _: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(Product::Table)
            .if_not_exists()
            .col(pk_auto(Product::Id))
            .col(ColumnDef::new(Product::Name).string().not_null())
            .col(
                ColumnDef::new(Product::Description)
                    .text()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Product::Price)
                    .big_integer()
                    .not_null()
                    .default(0)
                    .comment("Smallest currency unit"),
            )
            .col(
                ColumnDef::new(Product::ImageUrl)
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Product::Watering)
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Product::Light)
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Product::CategoryId)
                    .integer()
                    .not_null()
                    .default(0)
                    .comment("Declared FK, not enforced at runtime"),
            )
            .col(
                ColumnDef::new(Product::Stock)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_products_category_id")
                    .from(Product::Table, Product::CategoryId)
                    .to(Category::Table, Category::Id),
            )
            .to_owned()
    }

    fn to_drop_table_stmt(&self, _: DatabaseBackend) -> TableDropStatement {
        Table::drop().table(Product::Table).if_exists().to_owned()
    }

    fn to_create_indexes_stmt(&self, _: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
        Some(vec![Index::create()
            .name("idx_products_category_id")
            .table(Product::Table)
            .col(Product::CategoryId)
            .to_owned()])
    }
}
