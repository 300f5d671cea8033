use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Product row joined with its category display name. The `category`
/// field is a read-time projection, empty when the reference dangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct ProductInfo {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
    pub watering: String,
    pub light: String,
    pub category_id: i32,
    pub category: String,
    pub stock: bool,
}

/// Create/update payload. The identity comes from the payload itself or
/// the `id` query parameter; every other missing field falls back to its
/// zero value and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
    pub watering: String,
    pub light: String,
    pub category_id: i32,
    pub stock: bool,
}

/// `?category=NAME` filter for the product list. An empty value means
/// unfiltered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<String>,
}

impl ProductListQuery {
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
