use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Product};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    /// Must match the id in the path.
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryWithProducts {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

impl CategoryWithProducts {
    pub fn new(category: Category, products: Vec<Product>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
            products,
        }
    }
}
