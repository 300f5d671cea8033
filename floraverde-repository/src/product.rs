use floraverde_error::StorageResult;
use floraverde_models::{
    domain::prelude::{ProductInfo, ProductPayload},
    entities::prelude::{
        Category, CategoryColumn, Product, ProductActiveModel, ProductColumn, ProductModel,
    },
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Select, Set,
};

/// Repository for product operations. Owns the pooled connection handle
/// it was constructed with.
#[derive(Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List products joined with their category display name, optionally
    /// filtered by category name. Products whose category reference does
    /// not resolve are still listed, with an empty name. An unmatched
    /// filter yields an empty list, not an error.
    pub async fn find_all(&self, category: Option<&str>) -> StorageResult<Vec<ProductInfo>> {
        Ok(Self::info_select()
            .apply_if(category, |q, name| {
                q.filter(CategoryColumn::Name.eq(name))
            })
            .into_model::<ProductInfo>()
            .all(&self.db)
            .await?)
    }

    /// Create a product and return it with the category name resolved
    /// best-effort (an unresolved reference is not an error).
    pub async fn create(&self, payload: ProductPayload) -> StorageResult<ProductInfo> {
        let inserted = Self::to_active_model(&payload).insert(&self.db).await?;
        let category = self.resolve_category_name(inserted.category_id).await?;
        Ok(Self::model_to_info(inserted, category))
    }

    /// Full-field replacement keyed on the payload id. A missing row
    /// updates nothing and is still reported as success, echoing the
    /// payload back with the resolved category name.
    pub async fn update(&self, payload: ProductPayload) -> StorageResult<ProductInfo> {
        Product::update_many()
            .set(Self::to_active_model(&payload))
            .filter(ProductColumn::Id.eq(payload.id))
            .exec(&self.db)
            .await?;

        let category = self.resolve_category_name(payload.category_id).await?;
        Ok(ProductInfo {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
            watering: payload.watering,
            light: payload.light,
            category_id: payload.category_id,
            category,
            stock: payload.stock,
        })
    }

    /// Delete by id. Deleting a row that does not exist is a no-op
    /// reported as success.
    pub async fn delete(&self, id: i32) -> StorageResult<()> {
        Product::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    /// Joined projection used by every read path: all product columns
    /// plus the category display name, empty when the join misses.
    fn info_select() -> Select<Product> {
        Product::find()
            .left_join(Category)
            .select_only()
            .column_as(ProductColumn::Id, "id")
            .column_as(ProductColumn::Name, "name")
            .column_as(ProductColumn::Description, "description")
            .column_as(ProductColumn::Price, "price")
            .column_as(ProductColumn::ImageUrl, "image_url")
            .column_as(ProductColumn::Watering, "watering")
            .column_as(ProductColumn::Light, "light")
            .column_as(ProductColumn::CategoryId, "category_id")
            .expr_as(
                Expr::cust(r#"IFNULL("categories"."name", '')"#),
                "category",
            )
            .column_as(ProductColumn::Stock, "stock")
            .order_by_asc(ProductColumn::Id)
    }

    async fn resolve_category_name(&self, category_id: i32) -> StorageResult<String> {
        Ok(Category::find_by_id(category_id)
            .one(&self.db)
            .await?
            .map(|c| c.name)
            .unwrap_or_default())
    }

    fn to_active_model(payload: &ProductPayload) -> ProductActiveModel {
        ProductActiveModel {
            name: Set(payload.name.clone()),
            description: Set(payload.description.clone()),
            price: Set(payload.price),
            image_url: Set(payload.image_url.clone()),
            watering: Set(payload.watering.clone()),
            light: Set(payload.light.clone()),
            category_id: Set(payload.category_id),
            stock: Set(payload.stock),
            ..Default::default()
        }
    }

    fn model_to_info(model: ProductModel, category: String) -> ProductInfo {
        ProductInfo {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            image_url: model.image_url,
            watering: model.watering,
            light: model.light,
            category_id: model.category_id,
            category,
            stock: model.stock,
        }
    }
}
