use floraverde_error::StorageResult;
use floraverde_models::entities::prelude::{Category, CategoryColumn, CategoryModel};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

/// Repository for category reads. Categories are created at seed time
/// only; there are no category write endpoints.
#[derive(Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All categories in creation order; empty when none exist.
    pub async fn find_all(&self) -> StorageResult<Vec<CategoryModel>> {
        Ok(Category::find()
            .order_by_asc(CategoryColumn::Id)
            .all(&self.db)
            .await?)
    }
}
